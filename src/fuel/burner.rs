//! 버너 모델 용량 테이블과 필요 용량에 맞는 모델 선정.

use thiserror::Error;

const BUILTIN_MODELS: [(&str, u32); 10] = [
    ("IB-150", 150_000),
    ("IB-200", 200_000),
    ("IB-300", 300_000),
    ("IB-400", 400_000),
    ("IB-600", 600_000),
    ("IB-800", 800_000),
    ("IB-1000", 1_000_000),
    ("IB-1200", 1_200_000),
    ("IB-1600", 1_600_000),
    ("IB-2000", 2_000_000),
];

// 내장 테이블은 용량 오름차순(중복 없음)이어야 한다.
const _: () = {
    assert!(BUILTIN_MODELS[0].1 > 0);
    let mut i = 1;
    while i < BUILTIN_MODELS.len() {
        assert!(BUILTIN_MODELS[i - 1].1 < BUILTIN_MODELS[i].1);
        i += 1;
    }
};

/// 버너 모델 한 종.
#[derive(Debug, Clone, PartialEq)]
pub struct BurnerModel {
    pub name: String,
    /// 최대 열출력 [kcal/h]
    pub max_capacity: f64,
}

impl BurnerModel {
    pub fn new(name: impl Into<String>, max_capacity: f64) -> Self {
        Self {
            name: name.into(),
            max_capacity,
        }
    }
}

/// 모델 목록 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("model catalog is empty")]
    Empty,
    #[error("model {name} has non-positive or non-finite capacity {capacity}")]
    InvalidCapacity { name: String, capacity: f64 },
    #[error("model {name} ({capacity} kcal/h) is not above the previous model's capacity")]
    NotAscending { name: String, capacity: f64 },
}

/// 용량 오름차순으로 정렬된 모델 목록. 생성 후 변경되지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCatalog {
    models: Vec<BurnerModel>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ModelCatalog {
    /// 내장 IB 시리즈 테이블.
    pub fn builtin() -> Self {
        let models = BUILTIN_MODELS
            .iter()
            .map(|(name, capacity)| BurnerModel::new(*name, f64::from(*capacity)))
            .collect();
        Self { models }
    }

    /// 임의의 모델 목록을 검증 후 카탈로그로 만든다.
    /// 용량은 양수이며 엄격한 오름차순이어야 한다.
    pub fn new(models: Vec<BurnerModel>) -> Result<Self, CatalogError> {
        if models.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut previous: Option<f64> = None;
        for model in &models {
            if !model.max_capacity.is_finite() || model.max_capacity <= 0.0 {
                return Err(CatalogError::InvalidCapacity {
                    name: model.name.clone(),
                    capacity: model.max_capacity,
                });
            }
            if let Some(prev) = previous {
                if model.max_capacity <= prev {
                    return Err(CatalogError::NotAscending {
                        name: model.name.clone(),
                        capacity: model.max_capacity,
                    });
                }
            }
            previous = Some(model.max_capacity);
        }
        Ok(Self { models })
    }

    pub fn all_models(&self) -> &[BurnerModel] {
        &self.models
    }

    /// 필요 용량 이상인 첫 번째(가장 작은) 모델을 찾는다.
    /// 모든 모델 용량을 초과하면 `None`.
    pub fn resolve(&self, required_capacity: f64) -> Option<&BurnerModel> {
        if required_capacity.is_nan() {
            return None;
        }
        let idx = self
            .models
            .partition_point(|m| m.max_capacity < required_capacity);
        self.models.get(idx)
    }
}
