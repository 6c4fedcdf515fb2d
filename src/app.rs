use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::cost_fetch::{CostClient, FetchError};
use crate::fuel::CostTable;
use crate::report::FETCH_FAILED_NOTICE;
use crate::session::{clamp_usage, Session};
use crate::ui_cli::{self, MenuChoice};

/// CLI 실행 중 발생 가능한 치명적 오류를 표현한다.
/// 단가 조회 실패와 입력 오류는 여기 포함되지 않는다 (안내 후 계속 진행).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// 시작 시 단가를 한 번 조회해 세션에 반영한다.
///
/// 실패해도 오류를 돌려주지 않고 사용자 안내문을 반환한다.
/// 비동기 런타임 생성 실패만 [`AppError`]로 올린다.
pub fn load_costs(session: &mut Session, config: &Config) -> Result<Option<String>, AppError> {
    if !config.fetch_on_startup {
        tracing::info!("startup cost fetch disabled; costs stay at zero");
        session.mark_costs_unavailable();
        return Ok(None);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let fetched = match CostClient::from_config(config) {
        Ok(client) => runtime.block_on(client.fetch_costs()),
        Err(err) => Err(err),
    };
    Ok(settle_fetch(session, fetched))
}

/// 조회 결과를 세션에 반영하고, 실패했다면 안내문을 돌려준다.
pub fn settle_fetch(
    session: &mut Session,
    fetched: Result<CostTable, FetchError>,
) -> Option<String> {
    match fetched {
        Ok(table) => {
            session.apply_costs(&table);
            None
        }
        Err(err) => {
            tracing::error!(error = %err, "error fetching fuel costs");
            session.mark_costs_unavailable();
            Some(FETCH_FAILED_NOTICE.to_string())
        }
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(session: &Session) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Calculate => ui_cli::handle_calculate(session)?,
            MenuChoice::FuelCosts => ui_cli::handle_fuel_costs(session),
            MenuChoice::BurnerModels => ui_cli::handle_burner_models(session),
            MenuChoice::Exit => break,
        }
    }
    Ok(())
}

/// 인자로 받은 연료/사용량으로 한 번만 계산해 출력한다.
pub fn run_once(session: &Session, fuel_id: &str, usage: f64) {
    ui_cli::show_calculation(session, fuel_id, clamp_usage(usage));
}
