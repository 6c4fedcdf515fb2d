use std::path::PathBuf;

use clap::Parser;
use pellet_savings::{app, config, logging, session::Session, ui_cli};

/// Estimate savings from switching the current fuel to wood pellets.
#[derive(Debug, Parser)]
#[command(name = "pellet_savings_cli", version, about)]
struct Cli {
    /// Current fuel id (lpg, wood, diesel, png, furnaceOil, blackOil, ldo, pellet)
    #[arg(long)]
    fuel: Option<String>,
    /// Current fuel usage per hour
    #[arg(long, allow_hyphen_values = true)]
    usage: Option<f64>,
    /// Override the fuel cost endpoint
    #[arg(long)]
    endpoint: Option<String>,
    /// Skip fetching live costs (all costs stay at zero)
    #[arg(long)]
    no_fetch: bool,
    /// Currency label shown next to amounts
    #[arg(long)]
    currency: Option<String>,
    /// Config file path
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: PathBuf,
}

/// 프로그램의 엔트리 포인트. 설정을 로드하고 단가를 조회한 뒤 CLI를 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_create(&cli.config)?;
    if let Some(endpoint) = cli.endpoint {
        cfg.cost_endpoint = endpoint;
    }
    if let Some(currency) = cli.currency {
        cfg.currency_label = currency;
    }
    if cli.no_fetch {
        cfg.fetch_on_startup = false;
    }
    logging::init(&cfg.log_filter);

    let mut session = Session::new(cfg.currency_label.clone());
    if let Some(notice) = app::load_costs(&mut session, &cfg)? {
        ui_cli::print_notice(&notice);
    }

    match (cli.fuel, cli.usage) {
        (Some(fuel), Some(usage)) => app::run_once(&session, &fuel, usage),
        (Some(fuel), None) => app::run_once(&session, &fuel, f64::NAN),
        (None, Some(usage)) => app::run_once(&session, "", usage),
        (None, None) => app::run(&session)?,
    }
    Ok(())
}
