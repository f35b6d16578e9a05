//! 규격표 기준 허용전류 계산 회귀 테스트.
use cable_ampacity_toolbox::cable::{
    compute_ampacity, compute_ampacity_with, factor_resolver::SelectionError, AmpacityError,
    Arrangement, ConductorType, InstallationMethod, QueryParameters, SelectionPolicy,
    SpacingClass,
};

fn assert_close(label: &str, actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{label} expected {expected} got {actual}"
    );
}

fn conduit(conductor: ConductorType, size: &str, temp: f64, bundle: &str) -> QueryParameters {
    QueryParameters {
        conductor,
        size: size.into(),
        temperature_c: temp,
        arrangement: Arrangement::Conduit {
            bundle: bundle.into(),
        },
    }
}

fn open_air(
    conductor: ConductorType,
    size: &str,
    temp: f64,
    spacing: SpacingClass,
    count: u32,
) -> QueryParameters {
    QueryParameters {
        conductor,
        size: size.into(),
        temperature_c: temp,
        arrangement: Arrangement::OpenAirOrDuct { spacing, count },
    }
}

#[test]
fn hypalon_conduit_reference_conditions() {
    let res = compute_ampacity(&conduit(ConductorType::Hypalon, "5.5", 25.0, "1")).expect("calc");
    assert_eq!(res.base_ampacity, 61);
    assert_close("f1", res.temperature_factor, 1.0);
    assert_close("f2", res.secondary_factor, 1.0);
    assert_eq!(res.final_ampacity, 61);
    assert_eq!(res.method, InstallationMethod::Conduit);
    assert!(!res.secondary_fallback);
}

#[test]
fn hypalon_conduit_two_wires_at_40c() {
    // 61 × 0.88 × 0.7 = 37.576
    let res = compute_ampacity(&conduit(ConductorType::Hypalon, "5.5", 40.0, "2")).expect("calc");
    assert_eq!(res.base_ampacity, 61);
    assert_close("f1", res.temperature_factor, 0.88);
    assert_close("f2", res.secondary_factor, 0.7);
    assert_eq!(res.final_ampacity, 38);
}

#[test]
fn hypalon_open_air_grouped() {
    // 104 × 1.1 × 0.9 = 102.96
    let res = compute_ampacity(&open_air(
        ConductorType::Hypalon,
        "14",
        30.0,
        SpacingClass::TwoDiameters,
        4,
    ))
    .expect("calc");
    assert_eq!(res.base_ampacity, 104);
    assert_close("f3", res.temperature_factor, 1.1);
    assert_close("f4", res.secondary_factor, 0.9);
    assert_eq!(res.final_ampacity, 103);
    assert_eq!(res.method, InstallationMethod::OpenAirOrDuct);
}

#[test]
fn missing_size_is_not_found() {
    // PVC 규격표에는 0.75 mm²가 없다. 하이파론 데이터로 대체되면 안 된다.
    let err = compute_ampacity(&conduit(ConductorType::Pvc, "0.75", 25.0, "1")).unwrap_err();
    match err {
        AmpacityError::SizeNotFound(e) => {
            assert_eq!(e.conductor, ConductorType::Pvc);
            assert_eq!(e.size, "0.75");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(compute_ampacity(&conduit(ConductorType::Hypalon, "5.50", 25.0, "1")).is_err());
}

#[test]
fn non_multiple_temperature_uses_rounded_key() {
    let res = compute_ampacity(&conduit(ConductorType::Hypalon, "5.5", 27.0, "1")).expect("calc");
    assert_eq!(res.temperature_key_c, 25);
    assert_close("f1", res.temperature_factor, 1.0);

    let res = compute_ampacity(&conduit(ConductorType::Hypalon, "5.5", 27.5, "1")).expect("calc");
    assert_eq!(res.temperature_key_c, 30);
    assert_close("f1", res.temperature_factor, 0.96);
}

#[test]
fn pvc_uses_its_own_tables() {
    // 66 × 0.9 × 0.63 = 37.422
    let res = compute_ampacity(&conduit(ConductorType::Pvc, "5.5", 40.0, "4")).expect("calc");
    assert_eq!(res.base_ampacity, 66);
    assert_close("f1", res.temperature_factor, 0.9);
    assert_eq!(res.final_ampacity, 37);

    // 901 × 0.92 × 0.85 = 704.582
    let res = compute_ampacity(&open_air(
        ConductorType::Pvc,
        "325",
        50.0,
        SpacingClass::ThreeDiameters,
        12,
    ))
    .expect("calc");
    assert_eq!(res.base_ampacity, 901);
    assert_eq!(res.final_ampacity, 705);
}

#[test]
fn untabulated_spacing_count_falls_back_when_lenient() {
    let params = open_air(ConductorType::Hypalon, "14", 40.0, SpacingClass::OneDiameter, 5);
    let res = compute_ampacity(&params).expect("lenient calc");
    assert!(res.secondary_fallback);
    assert_close("f4", res.secondary_factor, 1.0);
    assert_eq!(res.final_ampacity, 104);

    let err = compute_ampacity_with(&params, SelectionPolicy::Strict).unwrap_err();
    assert_eq!(
        err,
        AmpacityError::InvalidSelection(SelectionError::SpacingCountNotTabulated {
            spacing: SpacingClass::OneDiameter,
            count: 5,
        })
    );
}

#[test]
fn large_bundle_bucket() {
    // 900 × 0.78 × 0.34 = 238.68
    let res =
        compute_ampacity(&conduit(ConductorType::Hypalon, "400", 50.0, "60+")).expect("calc");
    assert_eq!(res.final_ampacity, 239);
}

#[test]
fn bundle_key_must_match_exactly() {
    // 조수 키는 열거된 값과 정확히 일치해야 한다. 공백이 붙은 키는 표에 없는 선택이다.
    let params = conduit(ConductorType::Hypalon, "5.5", 40.0, " 2 ");
    let err = compute_ampacity_with(&params, SelectionPolicy::Strict).unwrap_err();
    assert_eq!(
        err,
        AmpacityError::InvalidSelection(SelectionError::UnknownBundleKey(" 2 ".into()))
    );

    // 61 × 0.88 × 1.0 = 53.68
    let res = compute_ampacity(&params).expect("lenient calc");
    assert!(res.secondary_fallback);
    assert_close("f2", res.secondary_factor, 1.0);
    assert_eq!(res.final_ampacity, 54);
}
