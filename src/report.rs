//! 계산 결과를 화면 표시용 문자열 필드로 변환한다. CLI와 GUI가 함께 쓴다.

use crate::savings::{CalculationResult, ValidationError};

/// 결과가 없을 때 모든 필드에 표시하는 값.
pub const PLACEHOLDER: &str = "--";
pub const NO_MODEL_LABEL: &str = "No suitable model found";
pub const FETCH_FAILED_NOTICE: &str = "Unable to fetch fuel costs. Please try again later.";

/// 표시 필드 묶음. 파생 수치는 소수 둘째 자리까지 표시한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub fuel_name: String,
    pub calorific_value: String,
    pub fuel_consumption: String,
    pub pellet_consumption: String,
    pub burner_model: String,
    pub hourly_saving: String,
    pub monthly_saving: String,
    pub yearly_saving: String,
    pub fuel_cost: String,
    pub pellet_cost: String,
}

impl Default for ResultView {
    fn default() -> Self {
        Self::reset()
    }
}

impl ResultView {
    /// 모든 필드를 `--`로 둔 초기 상태.
    pub fn reset() -> Self {
        let p = || PLACEHOLDER.to_string();
        Self {
            fuel_name: p(),
            calorific_value: p(),
            fuel_consumption: p(),
            pellet_consumption: p(),
            burner_model: p(),
            hourly_saving: p(),
            monthly_saving: p(),
            yearly_saving: p(),
            fuel_cost: p(),
            pellet_cost: p(),
        }
    }

    pub fn from_result(result: &CalculationResult, currency: &str) -> Self {
        let burner_model = match &result.selected_model {
            Some(model) => format!(
                "{} ( {} KCAL/HR )",
                model.name,
                format_thousands(model.max_capacity)
            ),
            None => NO_MODEL_LABEL.to_string(),
        };
        Self {
            fuel_name: result.fuel.name.to_uppercase(),
            calorific_value: format!("{} CV", result.fuel.calorific_value),
            fuel_consumption: format!("{} KG/HR", result.fuel_consumption),
            pellet_consumption: format!("{:.2} KG/HR", result.pellet_consumption),
            burner_model,
            hourly_saving: format!("{:.2} {currency}", result.hourly_saving),
            monthly_saving: format!("{:.2} {currency}", result.monthly_saving),
            yearly_saving: format!("{:.2} {currency}", result.yearly_saving),
            fuel_cost: format!("{} {currency}", result.fuel.cost),
            pellet_cost: format!("{} {currency}", result.pellet.cost),
        }
    }

    /// 라벨과 값 쌍을 표시 순서대로 돌려준다.
    pub fn rows(&self) -> [(&'static str, &str); 10] {
        [
            ("Fuel", self.fuel_name.as_str()),
            ("Calorific value", self.calorific_value.as_str()),
            ("Fuel consumption", self.fuel_consumption.as_str()),
            ("Pellet consumption", self.pellet_consumption.as_str()),
            ("Recommended burner", self.burner_model.as_str()),
            ("Hourly saving", self.hourly_saving.as_str()),
            ("Monthly saving", self.monthly_saving.as_str()),
            ("Yearly saving", self.yearly_saving.as_str()),
            ("Fuel cost", self.fuel_cost.as_str()),
            ("Pellet cost", self.pellet_cost.as_str()),
        ]
    }
}

/// 입력 오류 시 사용자에게 보여줄 안내문.
pub fn validation_notice(err: &ValidationError) -> String {
    format!("Please select a fuel type and enter a valid fuel usage value ({err}).")
}

/// 정수부를 세 자리마다 쉼표로 구분한다 (소수부는 반올림).
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as u64);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
