//! 가요 전선 허용전류 계산 모듈 모음.
//! 기준 데이터 → 계수 해석 → 계산 → 조회 파사드 순으로 구성한다.

pub mod ampacity;
pub mod factor_resolver;
pub mod query;
pub mod reference_data;

pub use ampacity::*;
pub use query::*;
pub use reference_data::*;
