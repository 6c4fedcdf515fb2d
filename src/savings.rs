//! 현재 연료 사용량으로부터 펠릿 환산 소비량, 필요 버너 용량, 절감액을 계산한다.

use thiserror::Error;

use crate::fuel::{BurnerModel, FuelCatalog, FuelProfile, ModelCatalog};

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// 입력 검증 오류. 계산 결과는 만들지 않는다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("no fuel type selected")]
    MissingFuel,
    #[error("unknown fuel type `{0}`")]
    UnknownFuel(String),
    #[error("fuel usage must be a number greater than zero, got {0}")]
    InvalidUsage(f64),
}

/// 절감액 계산 결과. 반올림은 표시 단계에서만 한다.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// 현재 사용 중인 연료 (계산 시점 단가 포함)
    pub fuel: FuelProfile,
    /// 비교 기준인 펠릿 (계산 시점 단가 포함)
    pub pellet: FuelProfile,
    /// 현재 연료 소비량 [연료단위/h]
    pub fuel_consumption: f64,
    /// 같은 열량을 내는 펠릿 소비량 [kg/h]
    pub pellet_consumption: f64,
    /// 필요 열출력 [kcal/h]
    pub required_capacity: f64,
    /// 필요 용량 이상인 가장 작은 모델. 없으면 `None`.
    pub selected_model: Option<BurnerModel>,
    pub hourly_saving: f64,
    pub monthly_saving: f64,
    pub yearly_saving: f64,
}

/// 연료 종류와 시간당 사용량으로 펠릿 전환 시 절감액을 계산한다.
///
/// 카탈로그는 읽기만 한다. 단가가 아직 0이면 절감액도 0으로 나온다.
/// 절감액이 음수(펠릿이 더 비쌈)인 것도 정상 결과다.
pub fn calculate_savings(
    fuels: &FuelCatalog,
    models: &ModelCatalog,
    fuel_id: &str,
    usage: f64,
) -> Result<CalculationResult, ValidationError> {
    let fuel_id = fuel_id.trim();
    if fuel_id.is_empty() {
        return Err(ValidationError::MissingFuel);
    }
    let fuel = *fuels
        .lookup(fuel_id)
        .ok_or_else(|| ValidationError::UnknownFuel(fuel_id.to_string()))?;
    if !usage.is_finite() || usage <= 0.0 {
        return Err(ValidationError::InvalidUsage(usage));
    }
    let pellet = *fuels.pellet();

    let required_capacity = usage * fuel.calorific_value;
    let pellet_consumption = required_capacity / pellet.calorific_value;
    let selected_model = models.resolve(required_capacity).cloned();

    let hourly_saving = usage * fuel.cost - pellet_consumption * pellet.cost;
    let monthly_saving = hourly_saving * HOURS_PER_DAY * DAYS_PER_MONTH;
    let yearly_saving = hourly_saving * HOURS_PER_DAY * DAYS_PER_YEAR;

    Ok(CalculationResult {
        fuel,
        pellet,
        fuel_consumption: usage,
        pellet_consumption,
        required_capacity,
        selected_model,
        hourly_saving,
        monthly_saving,
        yearly_saving,
    })
}
