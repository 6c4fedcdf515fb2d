//! 원격 연료 단가 서비스 클라이언트.
//!
//! - 시작 시 한 번 호출하며 재시도/백오프는 없다.
//! - 조회 결과는 [`CostTable`]로 돌려주고, 카탈로그 반영은 호출 측이 한다.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::fuel::{is_known_fuel, CostTable};

pub const DEFAULT_COST_ENDPOINT: &str = "https://fuel-api-z7or.onrender.com/fuel-costs";
const USER_AGENT: &str = concat!("pellet-savings/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("cost service returned status {0}")]
    Status(StatusCode),
    #[error("malformed cost payload: {0}")]
    Malformed(String),
    #[error("invalid cost for `{fuel}`: {value}")]
    InvalidCost { fuel: String, value: Value },
    #[error("could not start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct CostClient {
    http: Client,
    endpoint: String,
}

impl CostClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(endpoint, None)
    }

    /// `timeout`이 `None`이면 요청 시간 제한을 두지 않는다.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::with_timeout(
            config.cost_endpoint.clone(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// 단가 표를 한 번 조회한다. 카탈로그는 건드리지 않는다.
    pub async fn fetch_costs(&self) -> Result<CostTable, FetchError> {
        tracing::info!(endpoint = %self.endpoint, "requesting fuel costs");
        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "cost service rejected request");
            return Err(FetchError::Status(status));
        }
        let body = response.text().await?;
        let table = parse_cost_payload(&body)?;
        tracing::info!(entries = table.len(), "fuel costs received");
        Ok(table)
    }
}

/// 응답 본문을 단가 표로 해석한다.
///
/// 본문은 JSON 객체여야 한다. 알려진 연료의 값은 0 이상의 유한한 숫자여야 하며,
/// 알 수 없는 식별자는 값의 형태와 상관없이 버린다.
pub fn parse_cost_payload(body: &str) -> Result<CostTable, FetchError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    let entries = match value {
        Value::Object(entries) => entries,
        other => {
            return Err(FetchError::Malformed(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut table = CostTable::new();
    for (fuel, raw) in entries {
        if !is_known_fuel(&fuel) {
            tracing::debug!(fuel = %fuel, "skipping unknown fuel in cost payload");
            continue;
        }
        match raw.as_f64().filter(|cost| cost.is_finite() && *cost >= 0.0) {
            Some(cost) => table.insert(fuel, cost),
            None => return Err(FetchError::InvalidCost { fuel, value: raw }),
        }
    }
    Ok(table)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
