use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::cost_fetch::DEFAULT_COST_ENDPOINT;

/// 기본 설정 파일 경로 (작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다. 파일에 없는 항목은 기본값을 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 연료 단가 조회 주소
    pub cost_endpoint: String,
    /// 시작 시 단가를 조회할지 여부
    pub fetch_on_startup: bool,
    /// 요청 제한 시간 [s]. 없으면 제한 없음.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// 금액 표시 단위
    pub currency_label: String,
    /// `RUST_LOG`가 없을 때 쓰는 로그 필터
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cost_endpoint: DEFAULT_COST_ENDPOINT.to_string(),
            fetch_on_startup: true,
            request_timeout_secs: None,
            currency_label: "RS".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 읽는다. 파일이 없으면 기본값으로 만들어 저장한다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

