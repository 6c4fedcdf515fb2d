//! 연료/버너 정적 데이터와 조회 로직 모음.

pub mod burner;
pub mod catalog;

pub use burner::*;
pub use catalog::*;
