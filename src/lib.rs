//! 연료 → 펠릿 전환 절감액 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod config;
pub mod cost_fetch;
pub mod fuel;
pub mod logging;
pub mod report;
pub mod savings;
pub mod session;
pub mod ui_cli;
