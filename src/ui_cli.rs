use std::io::{self, Write};

use crate::app::AppError;
use crate::report::{self, ResultView};
use crate::session::{clamp_usage, CostState, Session};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    FuelCosts,
    BurnerModels,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Pellet Savings Calculator ===");
    println!("1) Calculate savings");
    println!("2) Fuel costs");
    println!("3) Burner models");
    println!("0) Exit");
    loop {
        let sel = read_line("Select: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::FuelCosts),
            "3" => return Ok(MenuChoice::BurnerModels),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("Invalid selection, try again."),
        }
    }
}

/// 연료 선택과 사용량 입력을 받아 결과 표를 출력한다.
pub fn handle_calculate(session: &Session) -> Result<(), AppError> {
    println!("\n-- Calculate savings --");
    let profiles = session.fuels().profiles();
    for (i, profile) in profiles.iter().enumerate() {
        println!("{:>2}) {}", i + 1, profile.name);
    }
    let sel = read_line("Fuel (number or id): ")?;
    let sel = sel.trim();
    let fuel_id = match sel.parse::<usize>() {
        Ok(n) if n >= 1 && n <= profiles.len() => profiles[n - 1].id,
        _ => sel,
    };
    let usage = clamp_usage(read_f64("Fuel usage per hour: ")?);
    show_calculation(session, fuel_id, usage);
    Ok(())
}

/// 계산 결과 또는 초기화된 표와 안내문을 출력한다.
pub fn show_calculation(session: &Session, fuel_id: &str, usage: f64) {
    match session.evaluate(fuel_id, usage) {
        Ok(view) => print_view(&view),
        Err(err) => {
            tracing::warn!(error = %err, fuel = fuel_id, usage, "invalid calculation input");
            println!("{}", report::validation_notice(&err));
            print_view(&ResultView::reset());
        }
    }
}

/// 연료별 발열량과 현재 단가를 출력한다.
pub fn handle_fuel_costs(session: &Session) {
    println!("\n-- Fuel costs --");
    match session.cost_state() {
        CostState::Loaded { updated } => println!("Live costs loaded for {updated} fuel(s)."),
        CostState::Pending => println!("Costs not loaded yet."),
        CostState::Unavailable => println!("Live costs unavailable; showing current values."),
    }
    for profile in session.fuels().profiles() {
        println!(
            "{:<12} {:>8} kcal  {:>10} {}",
            profile.name,
            profile.calorific_value,
            profile.cost,
            session.currency()
        );
    }
}

/// 버너 모델 용량표를 출력한다.
pub fn handle_burner_models(session: &Session) {
    println!("\n-- Burner models --");
    for model in session.models().all_models() {
        println!(
            "{:<8} {:>10} KCAL/HR",
            model.name,
            report::format_thousands(model.max_capacity)
        );
    }
}

fn print_view(view: &ResultView) {
    for (label, value) in view.rows() {
        println!("{label:<20} {value}");
    }
}

pub fn print_notice(notice: &str) {
    eprintln!("! {notice}");
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a number."),
        }
    }
}
