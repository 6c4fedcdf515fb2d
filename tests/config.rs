//! 설정 파일 로드/생성 테스트.
use std::fs;
use std::path::PathBuf;

use pellet_savings::config::{load_or_create, Config};
use pellet_savings::cost_fetch::DEFAULT_COST_ENDPOINT;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pellet_savings_{}_{name}.toml", std::process::id()))
}

#[test]
fn missing_file_is_created_with_defaults() {
    let path = temp_path("missing");
    let _ = fs::remove_file(&path);
    let cfg = load_or_create(&path).expect("create");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.cost_endpoint, DEFAULT_COST_ENDPOINT);
    assert!(path.exists());
    let reloaded = load_or_create(&path).expect("reload");
    assert_eq!(reloaded, cfg);
    let _ = fs::remove_file(&path);
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let path = temp_path("partial");
    fs::write(&path, "currency_label = \"INR\"\nrequest_timeout_secs = 15\n").expect("write");
    let cfg = load_or_create(&path).expect("load");
    assert_eq!(cfg.currency_label, "INR");
    assert_eq!(cfg.request_timeout_secs, Some(15));
    assert!(cfg.fetch_on_startup);
    assert_eq!(cfg.log_filter, "info");
    let _ = fs::remove_file(&path);
}

#[test]
fn invalid_file_is_an_error() {
    let path = temp_path("invalid");
    fs::write(&path, "fetch_on_startup = \"maybe\"").expect("write");
    assert!(load_or_create(&path).is_err());
    let _ = fs::remove_file(&path);
}
