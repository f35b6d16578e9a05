//! 가요 전선 허용전류 기준 테이블.
//! 제조사 규격표(600V 하이파론, 600V 105°C PVC 가요전선)의 값을 그대로 옮겼다.
//! 값은 참고용이며 실제 설계 시 최신 규격표와 법규로 검증해야 한다.

use serde::{Deserialize, Serialize};

/// 도체(절연) 종류. 기준 전류표와 온도 보정표를 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConductorType {
    /// 600V 하이파론 전선, 도체 최고허용온도 90°C
    Hypalon,
    /// 600V PVC 가요전선, 도체 최고허용온도 105°C
    Pvc,
}

impl ConductorType {
    pub const ALL: [ConductorType; 2] = [ConductorType::Hypalon, ConductorType::Pvc];

    pub fn code(&self) -> &'static str {
        match self {
            ConductorType::Hypalon => "hypalon",
            ConductorType::Pvc => "pvc",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ConductorType::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }

    /// 도체 최고허용온도 [°C]
    pub fn max_conductor_temp_c(&self) -> u32 {
        match self {
            ConductorType::Hypalon => 90,
            ConductorType::Pvc => 105,
        }
    }

    /// 데이터 출처 메모.
    pub fn source_notes(&self) -> &'static [&'static str] {
        match self {
            ConductorType::Hypalon => &["Walsin Lihwa 600V Hypalon wire specification"],
            ConductorType::Pvc => &[
                "600V 105°C PVC flexible wire ampacity table",
                "CNS 679, UL 1581",
                "Ampacity per JCS 0168-1",
            ],
        }
    }
}

/// 포설 방식. 기준 전류 컬럼과 2차 보정표를 선택한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationMethod {
    /// 전선관 내 포설 (f1 온도, f2 조수)
    Conduit,
    /// 공중 또는 암거 포설 (f3 온도, f4 간격×조수)
    OpenAirOrDuct,
}

impl InstallationMethod {
    pub const ALL: [InstallationMethod; 2] =
        [InstallationMethod::Conduit, InstallationMethod::OpenAirOrDuct];

    pub fn code(&self) -> &'static str {
        match self {
            InstallationMethod::Conduit => "conduit",
            InstallationMethod::OpenAirOrDuct => "air",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "conduit" | "pipe" => Some(InstallationMethod::Conduit),
            "air" | "duct" | "open_air" | "open-air" => Some(InstallationMethod::OpenAirOrDuct),
            _ => None,
        }
    }

    /// 해당 포설 방식에 적용되는 계산식.
    pub fn formula(&self) -> &'static str {
        match self {
            InstallationMethod::Conduit => "I = In × f1(T) × f2(N)",
            InstallationMethod::OpenAirOrDuct => "I = In × f3(T) × f4(S, N)",
        }
    }
}

/// 공칭 단면적 하나에 대한 기준 허용전류 [A].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireSizeSpec {
    /// 공칭 단면적 라벨 [mm²]. 숫자로 해석하지 않는 불투명 키.
    pub size: &'static str,
    pub conduit_a: u32,
    pub open_air_a: u32,
}

impl WireSizeSpec {
    pub const fn new(size: &'static str, conduit_a: u32, open_air_a: u32) -> Self {
        Self {
            size,
            conduit_a,
            open_air_a,
        }
    }

    pub fn base_ampacity(&self, method: InstallationMethod) -> u32 {
        match method {
            InstallationMethod::Conduit => self.conduit_a,
            InstallationMethod::OpenAirOrDuct => self.open_air_a,
        }
    }
}

/// 주위온도 보정계수 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempFactor {
    pub temp_c: i32,
    pub factor: f64,
}

/// 주위온도 보정표. 키는 5°C 간격, 20~50°C.
#[derive(Debug)]
pub struct TemperatureFactorTable {
    pub points: &'static [TempFactor],
}

impl TemperatureFactorTable {
    pub fn factor_at(&self, temp_c: i32) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.temp_c == temp_c)
            .map(|p| p.factor)
    }

    pub fn keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.points.iter().map(|p| p.temp_c)
    }
}

/// 동일 관 내 조수 보정계수(f2) 한 구간.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BundleCount {
    /// 선택 키 ("1", "5-6", "60+" 등)
    pub key: &'static str,
    pub min_count: u32,
    /// `None`이면 상한 없음.
    pub max_count: Option<u32>,
    pub factor: f64,
}

impl BundleCount {
    /// 실제 전선 조수가 속하는 구간 키를 찾는다. 0조는 해당 없음.
    pub fn key_for_count(count: u32) -> Option<&'static str> {
        BUNDLE_COUNT_FACTORS
            .iter()
            .find(|b| b.contains(count))
            .map(|b| b.key)
    }

    pub fn contains(&self, count: u32) -> bool {
        count >= self.min_count && self.max_count.map_or(true, |max| count <= max)
    }
}

/// 공중/암거 다조 포설 시 배열 간격. d는 전선 외경.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacingClass {
    #[serde(rename = "S=d")]
    OneDiameter,
    #[serde(rename = "S=2d")]
    TwoDiameters,
    #[serde(rename = "S=3d")]
    ThreeDiameters,
}

impl SpacingClass {
    pub const ALL: [SpacingClass; 3] = [
        SpacingClass::OneDiameter,
        SpacingClass::TwoDiameters,
        SpacingClass::ThreeDiameters,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SpacingClass::OneDiameter => "S=d",
            SpacingClass::TwoDiameters => "S=2d",
            SpacingClass::ThreeDiameters => "S=3d",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let l = label.trim().to_ascii_lowercase().replace(' ', "");
        match l.as_str() {
            "s=d" | "s=1d" | "1d" | "d" => Some(SpacingClass::OneDiameter),
            "s=2d" | "2d" => Some(SpacingClass::TwoDiameters),
            "s=3d" | "3d" => Some(SpacingClass::ThreeDiameters),
            _ => None,
        }
    }
}

/// 간격별 f4 한 행. `factors[i]`는 `SPACING_COUNTS[i]`조에 대응한다.
#[derive(Debug)]
pub struct SpacingRow {
    pub spacing: SpacingClass,
    pub factors: [f64; 8],
}

/// f4 표에 정의된 조수.
pub const SPACING_COUNTS: [u32; 8] = [1, 2, 3, 4, 6, 8, 9, 12];

/// 기준 전류표 조회 실패.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeNotFound {
    pub conductor: ConductorType,
    pub size: String,
}

impl std::fmt::Display for SizeNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} 규격표에 {} mm² 가 없습니다.",
            self.conductor.code(),
            self.size
        )
    }
}

impl std::error::Error for SizeNotFound {}

pub fn wire_specs(conductor: ConductorType) -> &'static [WireSizeSpec] {
    match conductor {
        ConductorType::Hypalon => HYPALON_SPECS,
        ConductorType::Pvc => PVC_SPECS,
    }
}

/// (도체 종류, 규격 라벨)로 기준 전류를 찾는다. 라벨은 정확히 일치해야 한다.
pub fn find_wire_spec(
    conductor: ConductorType,
    size: &str,
) -> Result<&'static WireSizeSpec, SizeNotFound> {
    wire_specs(conductor)
        .iter()
        .find(|s| s.size == size)
        .ok_or_else(|| SizeNotFound {
            conductor,
            size: size.to_string(),
        })
}

pub fn temperature_factors(
    conductor: ConductorType,
    method: InstallationMethod,
) -> &'static TemperatureFactorTable {
    match (conductor, method) {
        (ConductorType::Hypalon, InstallationMethod::Conduit) => &HYPALON_CONDUIT_TEMP,
        (ConductorType::Hypalon, InstallationMethod::OpenAirOrDuct) => &HYPALON_AIR_TEMP,
        (ConductorType::Pvc, InstallationMethod::Conduit) => &PVC_CONDUIT_TEMP,
        (ConductorType::Pvc, InstallationMethod::OpenAirOrDuct) => &PVC_AIR_TEMP,
    }
}

pub fn bundle_count_factors() -> &'static [BundleCount] {
    BUNDLE_COUNT_FACTORS
}

pub fn spacing_count_factors() -> &'static [SpacingRow] {
    SPACING_COUNT_FACTORS
}

// 600V 하이파론 (90°C)
const HYPALON_SPECS: &[WireSizeSpec] = &[
    ws("0.75", 18, 16),
    ws("1.25", 25, 22),
    ws("2.0", 32, 28),
    ws("3.5", 47, 42),
    ws("5.5", 61, 55),
    ws("8", 76, 69),
    ws("14", 114, 104),
    ws("22", 154, 141),
    ws("30", 186, 172),
    ws("38", 216, 200),
    ws("50", 254, 238),
    ws("60", 292, 275),
    ws("80", 354, 335),
    ws("100", 409, 389),
    ws("125", 464, 445),
    ws("150", 506, 487),
    ws("200", 610, 593),
    ws("250", 690, 676),
    ws("325", 799, 791),
    ws("400", 900, 900),
];

// 600V 105°C PVC 가요전선 (표1 표준조건 전류). 0.75 mm²는 없다.
const PVC_SPECS: &[WireSizeSpec] = &[
    ws("1.25", 23, 21),
    ws("2.0", 33, 30),
    ws("3.5", 48, 44),
    ws("5.5", 66, 61),
    ws("8", 87, 81),
    ws("14", 127, 119),
    ws("22", 170, 160),
    ws("30", 205, 195),
    ws("38", 239, 228),
    ws("50", 280, 268),
    ws("60", 322, 310),
    ws("80", 390, 378),
    ws("100", 450, 440),
    ws("125", 513, 504),
    ws("150", 559, 552),
    ws("200", 675, 673),
    ws("250", 764, 768),
    ws("325", 888, 901),
];

static HYPALON_CONDUIT_TEMP: TemperatureFactorTable = TemperatureFactorTable {
    points: &[
        tf(20, 1.04),
        tf(25, 1.0),
        tf(30, 0.96),
        tf(35, 0.92),
        tf(40, 0.88),
        tf(45, 0.83),
        tf(50, 0.78),
    ],
};

static HYPALON_AIR_TEMP: TemperatureFactorTable = TemperatureFactorTable {
    points: &[
        tf(20, 1.18),
        tf(25, 1.14),
        tf(30, 1.1),
        tf(35, 1.05),
        tf(40, 1.0),
        tf(45, 0.95),
        tf(50, 0.89),
    ],
};

// PVC 표2 (전선관 f1)
static PVC_CONDUIT_TEMP: TemperatureFactorTable = TemperatureFactorTable {
    points: &[
        tf(20, 1.03),
        tf(25, 1.0),
        tf(30, 0.97),
        tf(35, 0.94),
        tf(40, 0.9),
        tf(45, 0.87),
        tf(50, 0.83),
    ],
};

// PVC 표4 (공중/암거 f3)
static PVC_AIR_TEMP: TemperatureFactorTable = TemperatureFactorTable {
    points: &[
        tf(20, 1.14),
        tf(25, 1.11),
        tf(30, 1.07),
        tf(35, 1.04),
        tf(40, 1.0),
        tf(45, 0.96),
        tf(50, 0.92),
    ],
};

// 표3: 동일 관 내 조수 f2 (하이파론/PVC 공용)
const BUNDLE_COUNT_FACTORS: &[BundleCount] = &[
    bc("1", 1, Some(1), 1.0),
    bc("2", 2, Some(2), 0.7),
    bc("3", 3, Some(3), 0.7),
    bc("4", 4, Some(4), 0.63),
    bc("5-6", 5, Some(6), 0.56),
    bc("7-15", 7, Some(15), 0.49),
    bc("16-40", 16, Some(40), 0.43),
    bc("41-60", 41, Some(60), 0.39),
    bc("60+", 61, None, 0.34),
];

// 표5: 공중/암거 다조 포설 f4 (조수 × 배열 간격)
const SPACING_COUNT_FACTORS: &[SpacingRow] = &[
    SpacingRow {
        spacing: SpacingClass::OneDiameter,
        factors: [1.0, 0.85, 0.8, 0.7, 0.7, 0.6, 0.6, 0.6],
    },
    SpacingRow {
        spacing: SpacingClass::TwoDiameters,
        factors: [1.0, 0.95, 0.95, 0.9, 0.9, 0.9, 0.85, 0.8],
    },
    SpacingRow {
        spacing: SpacingClass::ThreeDiameters,
        factors: [1.0, 1.0, 1.0, 0.95, 0.95, 0.95, 0.9, 0.85],
    },
];

const fn ws(size: &'static str, conduit_a: u32, open_air_a: u32) -> WireSizeSpec {
    WireSizeSpec::new(size, conduit_a, open_air_a)
}

const fn tf(temp_c: i32, factor: f64) -> TempFactor {
    TempFactor { temp_c, factor }
}

const fn bc(key: &'static str, min_count: u32, max_count: Option<u32>, factor: f64) -> BundleCount {
    BundleCount {
        key,
        min_count,
        max_count,
        factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn size_labels_are_unique_per_conductor() {
        for conductor in ConductorType::ALL {
            let specs = wire_specs(conductor);
            let labels: HashSet<_> = specs.iter().map(|s| s.size).collect();
            assert_eq!(labels.len(), specs.len(), "{conductor:?}");
        }
    }

    #[test]
    fn table_lengths_match_source() {
        assert_eq!(wire_specs(ConductorType::Hypalon).len(), 20);
        assert_eq!(wire_specs(ConductorType::Pvc).len(), 18);
    }

    #[test]
    fn bundle_buckets_cover_counts_without_overlap() {
        for n in 1..=200u32 {
            let hits = BUNDLE_COUNT_FACTORS.iter().filter(|b| b.contains(n)).count();
            assert_eq!(hits, 1, "count {n}");
        }
        assert_eq!(BundleCount::key_for_count(0), None);
    }
}
