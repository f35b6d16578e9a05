//! 외부 호출자가 사용하는 단일 진입점.
//! 계산 결과와 함께, 선택 UI가 대체값(1.0)을 유발하지 않도록 유효 키 목록을 제공한다.

use crate::cable::ampacity::{self, AmpacityError, QueryParameters, QueryResult, SelectionPolicy};
use crate::cable::reference_data::{
    bundle_count_factors, temperature_factors, wire_specs, BundleCount, ConductorType,
    InstallationMethod, SpacingClass, WireSizeSpec, SPACING_COUNTS,
};

/// 기본(관대한) 정책으로 허용전류를 계산한다.
pub fn compute_ampacity(params: &QueryParameters) -> Result<QueryResult, AmpacityError> {
    ampacity::compute(params, SelectionPolicy::Lenient)
}

/// 정책을 지정해 허용전류를 계산한다.
pub fn compute_ampacity_with(
    params: &QueryParameters,
    policy: SelectionPolicy,
) -> Result<QueryResult, AmpacityError> {
    ampacity::compute(params, policy)
}

pub fn conductor_types() -> &'static [ConductorType] {
    &ConductorType::ALL
}

/// 해당 도체 종류에서 유효한 단면적 라벨 (규격표 순서).
pub fn size_labels(conductor: ConductorType) -> Vec<&'static str> {
    wire_specs(conductor).iter().map(|s| s.size).collect()
}

pub fn size_specs(conductor: ConductorType) -> &'static [WireSizeSpec] {
    wire_specs(conductor)
}

pub fn is_valid_size(conductor: ConductorType, size: &str) -> bool {
    wire_specs(conductor).iter().any(|s| s.size == size)
}

/// 도체 종류를 바꿀 때 쓸 규격 라벨.
/// 현재 라벨이 새 종류에 있으면 그대로, 없으면 새 종류의 첫 규격을 돌려준다.
pub fn size_for_conductor(conductor: ConductorType, current: &str) -> &'static str {
    let specs = wire_specs(conductor);
    specs
        .iter()
        .find(|s| s.size == current)
        .or_else(|| specs.first())
        .map(|s| s.size)
        .unwrap_or_default()
}

pub fn bundle_keys() -> Vec<&'static str> {
    bundle_count_factors().iter().map(|b| b.key).collect()
}

pub fn bundle_options() -> &'static [BundleCount] {
    bundle_count_factors()
}

pub fn spacing_classes() -> &'static [SpacingClass] {
    &SpacingClass::ALL
}

pub fn spacing_counts() -> &'static [u32] {
    &SPACING_COUNTS
}

/// 온도 보정표 키 목록 [°C].
pub fn temperature_keys(conductor: ConductorType, method: InstallationMethod) -> Vec<i32> {
    temperature_factors(conductor, method).keys().collect()
}
