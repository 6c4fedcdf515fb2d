//! 연료별 발열량 테이블과 단가 갱신 로직을 제공한다.
//! 발열량은 고정값이며, 단가만 원격 조회 결과로 덮어쓴다.

use std::collections::BTreeMap;

/// 펠릿 연료 식별자. 절감액 계산의 비교 기준이다.
pub const PELLET_ID: &str = "pellet";

#[derive(Debug, Clone, Copy)]
struct FuelSpec {
    id: &'static str,
    name: &'static str,
    /// kcal / (kg 또는 L)
    calorific_value: u32,
}

impl FuelSpec {
    const fn new(id: &'static str, name: &'static str, calorific_value: u32) -> Self {
        Self {
            id,
            name,
            calorific_value,
        }
    }
}

const FUEL_SPECS: [FuelSpec; 8] = [
    FuelSpec::new("lpg", "LPG", 12_000),
    FuelSpec::new("wood", "Wood", 2_500),
    FuelSpec::new("diesel", "Diesel", 11_400),
    FuelSpec::new("png", "PNG", 9_000),
    FuelSpec::new("furnaceOil", "Furnace Oil", 10_500),
    FuelSpec::new("blackOil", "Black Oil", 10_500),
    FuelSpec::new("ldo", "LDO", 10_500),
    FuelSpec::new(PELLET_ID, "Wood Pellet", 4_100),
];

const PELLET_INDEX: usize = FUEL_SPECS.len() - 1;

// 발열량은 모두 양수여야 하고, 펠릿 항목은 PELLET_INDEX에 있어야 한다.
const _: () = {
    let mut i = 0;
    while i < FUEL_SPECS.len() {
        assert!(FUEL_SPECS[i].calorific_value > 0);
        i += 1;
    }
    let id = FUEL_SPECS[PELLET_INDEX].id.as_bytes();
    let expected = PELLET_ID.as_bytes();
    assert!(id.len() == expected.len());
    let mut j = 0;
    while j < id.len() {
        assert!(id[j] == expected[j]);
        j += 1;
    }
};

/// 연료 한 종류의 발열량과 단가.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelProfile {
    /// 원격 단가 응답에서 쓰는 식별자 (예: `furnaceOil`)
    pub id: &'static str,
    /// 표시용 이름
    pub name: &'static str,
    /// 발열량 [kcal / 연료단위]
    pub calorific_value: f64,
    /// 단가 [통화 / 연료단위], 조회 전에는 0
    pub cost: f64,
}

/// 원격 서비스가 돌려준 연료별 단가. 카탈로그와는 별개의 값이며
/// [`FuelCatalog::apply_costs`]로 명시적으로 반영한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostTable {
    costs: BTreeMap<String, f64>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, fuel_id: impl Into<String>, cost: f64) {
        self.costs.insert(fuel_id.into(), cost);
    }

    pub fn get(&self, fuel_id: &str) -> Option<f64> {
        self.costs.get(fuel_id).copied()
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.costs.iter().map(|(id, cost)| (id.as_str(), *cost))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut table = CostTable::new();
        for (id, cost) in iter {
            table.insert(id, cost);
        }
        table
    }
}

/// 연료 카탈로그. 시작 시 고정된 연료 목록으로 생성되며 항목 추가/삭제는 없다.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelCatalog {
    profiles: Vec<FuelProfile>,
}

impl Default for FuelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FuelCatalog {
    /// 내장 발열량 테이블로 카탈로그를 만든다. 단가는 모두 0.
    pub fn new() -> Self {
        let profiles = FUEL_SPECS
            .iter()
            .map(|spec| FuelProfile {
                id: spec.id,
                name: spec.name,
                calorific_value: f64::from(spec.calorific_value),
                cost: 0.0,
            })
            .collect();
        Self { profiles }
    }

    /// 식별자로 연료를 찾는다. 대소문자는 구분하지 않는다.
    pub fn lookup(&self, fuel_id: &str) -> Option<&FuelProfile> {
        self.profiles
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(fuel_id))
    }

    pub fn pellet(&self) -> &FuelProfile {
        &self.profiles[PELLET_INDEX]
    }

    /// 선언 순서대로 모든 연료를 돌려준다.
    pub fn profiles(&self) -> &[FuelProfile] {
        &self.profiles
    }

    /// 응답에 있는 연료의 단가만 덮어쓴다. 카탈로그에 없는 식별자와
    /// 음수/유한하지 않은 단가는 무시한다 (이전 값 유지).
    /// 갱신된 연료 수를 반환한다.
    pub fn apply_costs(&mut self, table: &CostTable) -> usize {
        let mut updated = 0;
        for profile in &mut self.profiles {
            let Some(cost) = table.get(profile.id) else {
                continue;
            };
            if !cost.is_finite() || cost < 0.0 {
                tracing::warn!(fuel = profile.id, cost, "rejecting invalid fuel cost");
                continue;
            }
            profile.cost = cost;
            updated += 1;
        }
        for (id, _) in table.iter() {
            if !is_known_fuel(id) {
                tracing::debug!(fuel = id, "ignoring cost for unknown fuel");
            }
        }
        updated
    }
}

/// 원격 응답의 키가 카탈로그 식별자인지 확인한다 (정확히 일치해야 함).
pub fn is_known_fuel(fuel_id: &str) -> bool {
    FUEL_SPECS.iter().any(|spec| spec.id == fuel_id)
}
