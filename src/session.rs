//! 프론트엔드(CLI/GUI)가 공유하는 계산 세션. 카탈로그를 소유하고
//! 단가 반영과 계산 요청을 한 곳에서 처리한다.

use crate::fuel::{CostTable, FuelCatalog, ModelCatalog};
use crate::report::ResultView;
use crate::savings::{self, CalculationResult, ValidationError};

/// 시작 시 단가 조회 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostState {
    /// 아직 조회 결과가 없음 (단가 0)
    Pending,
    /// 조회 성공. 갱신된 연료 수.
    Loaded { updated: usize },
    /// 조회 실패 또는 생략. 단가는 이전 값 유지.
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct Session {
    fuels: FuelCatalog,
    models: ModelCatalog,
    currency: String,
    cost_state: CostState,
}

impl Session {
    pub fn new(currency: impl Into<String>) -> Self {
        Self::with_catalogs(FuelCatalog::new(), ModelCatalog::builtin(), currency)
    }

    pub fn with_catalogs(
        fuels: FuelCatalog,
        models: ModelCatalog,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            fuels,
            models,
            currency: currency.into(),
            cost_state: CostState::Pending,
        }
    }

    pub fn fuels(&self) -> &FuelCatalog {
        &self.fuels
    }

    pub fn models(&self) -> &ModelCatalog {
        &self.models
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn cost_state(&self) -> CostState {
        self.cost_state
    }

    /// 조회한 단가 표를 카탈로그에 반영한다.
    pub fn apply_costs(&mut self, table: &CostTable) -> usize {
        let updated = self.fuels.apply_costs(table);
        tracing::info!(updated, "fuel costs applied");
        self.cost_state = CostState::Loaded { updated };
        updated
    }

    pub fn mark_costs_unavailable(&mut self) {
        self.cost_state = CostState::Unavailable;
    }

    pub fn calculate(&self, fuel_id: &str, usage: f64) -> Result<CalculationResult, ValidationError> {
        savings::calculate_savings(&self.fuels, &self.models, fuel_id, usage)
    }

    /// 계산 후 표시 필드로 변환한다. 오류 시 호출 측은 [`ResultView::reset`]으로 되돌린다.
    pub fn evaluate(&self, fuel_id: &str, usage: f64) -> Result<ResultView, ValidationError> {
        let result = self.calculate(fuel_id, usage)?;
        tracing::debug!(
            fuel = result.fuel.id,
            usage,
            required_capacity = result.required_capacity,
            hourly_saving = result.hourly_saving,
            "savings calculated"
        );
        Ok(ResultView::from_result(&result, &self.currency))
    }
}

/// 입력 필드의 음수 사용량은 0으로 고정한다 (0은 이후 검증에서 거부된다).
pub fn clamp_usage(usage: f64) -> f64 {
    if usage < 0.0 {
        0.0
    } else {
        usage
    }
}
