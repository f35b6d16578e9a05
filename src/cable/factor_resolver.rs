//! 연속/자유 입력을 보정표의 이산 키로 맞추고 보정계수를 찾는다.

use crate::cable::reference_data::{
    bundle_count_factors, spacing_count_factors, SpacingClass, TemperatureFactorTable,
    SPACING_COUNTS,
};

/// 온도 보정표 키 간격 [°C]
pub const TEMPERATURE_STEP_C: i32 = 5;
/// 온도 보정표 하한 [°C]
pub const TEMPERATURE_MIN_C: i32 = 20;
/// 온도 보정표 상한 [°C]
pub const TEMPERATURE_MAX_C: i32 = 50;

/// 이산 선택값이 보정표에 없을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// f2 표에 없는 조수 구간 키
    UnknownBundleKey(String),
    /// f4 표에 없는 (간격, 조수) 조합
    SpacingCountNotTabulated { spacing: SpacingClass, count: u32 },
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::UnknownBundleKey(key) => {
                write!(f, "조수 구간 '{key}' 은(는) f2 표에 없습니다.")
            }
            SelectionError::SpacingCountNotTabulated { spacing, count } => write!(
                f,
                "{} / {count}조 조합은 f4 표에 없습니다.",
                spacing.label()
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

/// 연속 온도 입력을 보정표 키로 맞춘다.
///
/// 5°C 배수로 반올림(0.5는 올림)한 뒤 20~50°C로 클램프한다. 모든 입력에 대해
/// 유효 키를 돌려준다. NaN은 가장 보수적인 상한 키로 처리한다.
pub fn resolve_temperature_key(temp_c: f64) -> i32 {
    if temp_c.is_nan() {
        return TEMPERATURE_MAX_C;
    }
    let step = f64::from(TEMPERATURE_STEP_C);
    let snapped = round_half_up(temp_c / step) * step;
    snapped.clamp(f64::from(TEMPERATURE_MIN_C), f64::from(TEMPERATURE_MAX_C)) as i32
}

/// 온도 키와 그 보정계수를 함께 돌려준다.
pub fn resolve_temperature_factor(table: &TemperatureFactorTable, temp_c: f64) -> (i32, f64) {
    let key = resolve_temperature_key(temp_c);
    // 모든 보정표가 20~50°C 7점을 갖고 있으므로 키 누락은 데이터 오류뿐이다.
    let factor = table.factor_at(key).unwrap_or(1.0);
    (key, factor)
}

/// f2: 동일 관 내 조수 보정계수.
pub fn bundle_count_factor(key: &str) -> Result<f64, SelectionError> {
    bundle_count_factors()
        .iter()
        .find(|b| b.key == key)
        .map(|b| b.factor)
        .ok_or_else(|| SelectionError::UnknownBundleKey(key.to_string()))
}

/// f4: 공중/암거 다조 포설 보정계수.
pub fn spacing_count_factor(spacing: SpacingClass, count: u32) -> Result<f64, SelectionError> {
    let not_tabulated = || SelectionError::SpacingCountNotTabulated { spacing, count };
    let idx = SPACING_COUNTS
        .iter()
        .position(|&c| c == count)
        .ok_or_else(not_tabulated)?;
    spacing_count_factors()
        .iter()
        .find(|row| row.spacing == spacing)
        .map(|row| row.factors[idx])
        .ok_or_else(not_tabulated)
}

/// 0.5를 올림하는 반올림. 음수도 +∞ 방향으로 올린다 (-2.5 → -2).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_steps_round_up() {
        assert_eq!(resolve_temperature_key(27.5), 30);
        assert_eq!(resolve_temperature_key(32.5), 35);
        assert_eq!(resolve_temperature_key(27.0), 25);
        assert_eq!(resolve_temperature_key(27.49), 25);
    }

    #[test]
    fn non_finite_inputs_still_resolve() {
        assert_eq!(resolve_temperature_key(f64::INFINITY), 50);
        assert_eq!(resolve_temperature_key(f64::NEG_INFINITY), 20);
        assert_eq!(resolve_temperature_key(f64::NAN), 50);
    }

    #[test]
    fn negative_half_rounds_toward_positive() {
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.5), 3.0);
    }
}
