use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cable::factor_resolver::{
    bundle_count_factor, resolve_temperature_factor, round_half_up, spacing_count_factor,
    SelectionError,
};
use crate::cable::reference_data::{
    find_wire_spec, temperature_factors, ConductorType, InstallationMethod, SizeNotFound,
    SpacingClass,
};

/// 허용전류 계산 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmpacityError {
    /// 선택한 도체 종류의 규격표에 해당 단면적이 없음 (해당 질의는 실패)
    SizeNotFound(SizeNotFound),
    /// 엄격 모드에서 보정표에 없는 선택값
    InvalidSelection(SelectionError),
}

impl std::fmt::Display for AmpacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmpacityError::SizeNotFound(e) => write!(f, "규격 없음: {e}"),
            AmpacityError::InvalidSelection(e) => write!(f, "잘못된 선택: {e}"),
        }
    }
}

impl std::error::Error for AmpacityError {}

impl From<SizeNotFound> for AmpacityError {
    fn from(value: SizeNotFound) -> Self {
        AmpacityError::SizeNotFound(value)
    }
}

impl From<SelectionError> for AmpacityError {
    fn from(value: SelectionError) -> Self {
        AmpacityError::InvalidSelection(value)
    }
}

/// 보정표에 없는 조수/간격 선택을 어떻게 처리할지 정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// 보정계수 1.0으로 대체하고 계속 계산한다.
    #[default]
    Lenient,
    /// 질의를 `InvalidSelection`으로 실패시킨다.
    Strict,
}

/// 포설 방식과 그에 딸린 2차 보정 선택값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Arrangement {
    /// 전선관: f2 조수 구간 키
    Conduit { bundle: String },
    /// 공중/암거: f4 배열 간격과 조수
    OpenAirOrDuct { spacing: SpacingClass, count: u32 },
}

impl Arrangement {
    pub fn method(&self) -> InstallationMethod {
        match self {
            Arrangement::Conduit { .. } => InstallationMethod::Conduit,
            Arrangement::OpenAirOrDuct { .. } => InstallationMethod::OpenAirOrDuct,
        }
    }
}

/// 허용전류 질의 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryParameters {
    pub conductor: ConductorType,
    /// 공칭 단면적 라벨 [mm²]
    pub size: String,
    /// 주위온도 [°C]. 임의의 실수를 허용하며 보정표 키로 맞춰진다.
    pub temperature_c: f64,
    pub arrangement: Arrangement,
}

/// 허용전류 계산 결과와 사용된 중간 계수.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub conductor: ConductorType,
    pub size: String,
    pub method: InstallationMethod,
    /// 기준 전류 In [A]
    pub base_ampacity: u32,
    /// 실제 사용된 온도 보정표 키 [°C]
    pub temperature_key_c: i32,
    /// f1 또는 f3
    pub temperature_factor: f64,
    /// f2 또는 f4
    pub secondary_factor: f64,
    /// true면 2차 보정 선택값이 표에 없어 1.0으로 대체됨
    pub secondary_fallback: bool,
    /// 최종 허용전류 [A], 정수 반올림
    pub final_ampacity: u32,
}

/// 기준 전류 × 온도 보정 × 2차 보정으로 허용전류를 계산한다.
///
/// - 전선관: I = In × f1(T) × f2(N)
/// - 공중/암거: I = In × f3(T) × f4(S, N)
pub fn compute(
    params: &QueryParameters,
    policy: SelectionPolicy,
) -> Result<QueryResult, AmpacityError> {
    let spec = find_wire_spec(params.conductor, &params.size)?;
    let method = params.arrangement.method();
    let base = spec.base_ampacity(method);

    let table = temperature_factors(params.conductor, method);
    let (temp_key, temp_factor) = resolve_temperature_factor(table, params.temperature_c);

    let secondary = match &params.arrangement {
        Arrangement::Conduit { bundle } => bundle_count_factor(bundle),
        Arrangement::OpenAirOrDuct { spacing, count } => spacing_count_factor(*spacing, *count),
    };
    let (secondary_factor, secondary_fallback) = match secondary {
        Ok(f) => (f, false),
        Err(e) => match policy {
            SelectionPolicy::Strict => return Err(e.into()),
            SelectionPolicy::Lenient => {
                warn!(error = %e, "secondary factor not tabulated, using 1.0");
                (1.0, true)
            }
        },
    };

    let final_ampacity = round_half_up(f64::from(base) * temp_factor * secondary_factor) as u32;
    debug!(
        conductor = params.conductor.code(),
        size = %params.size,
        method = method.code(),
        base,
        temp_key,
        temp_factor,
        secondary_factor,
        final_ampacity,
        "ampacity computed"
    );

    Ok(QueryResult {
        conductor: params.conductor,
        size: spec.size.to_string(),
        method,
        base_ampacity: base,
        temperature_key_c: temp_key,
        temperature_factor: temp_factor,
        secondary_factor,
        secondary_fallback,
        final_ampacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conduit(size: &str, temp: f64, bundle: &str) -> QueryParameters {
        QueryParameters {
            conductor: ConductorType::Hypalon,
            size: size.into(),
            temperature_c: temp,
            arrangement: Arrangement::Conduit {
                bundle: bundle.into(),
            },
        }
    }

    #[test]
    fn lenient_policy_substitutes_neutral_factor() {
        let res = compute(&conduit("5.5", 25.0, "99"), SelectionPolicy::Lenient).unwrap();
        assert!(res.secondary_fallback);
        assert_eq!(res.secondary_factor, 1.0);
        assert_eq!(res.final_ampacity, 61);
    }

    #[test]
    fn strict_policy_rejects_unknown_bundle() {
        let err = compute(&conduit("5.5", 25.0, "99"), SelectionPolicy::Strict).unwrap_err();
        assert_eq!(
            err,
            AmpacityError::InvalidSelection(SelectionError::UnknownBundleKey("99".into()))
        );
    }
}
