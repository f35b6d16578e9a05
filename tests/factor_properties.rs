//! 온도 키 해석과 계산 함수의 성질 테스트.
use cable_ampacity_toolbox::cable::factor_resolver::{
    resolve_temperature_factor, resolve_temperature_key, round_half_up,
};
use cable_ampacity_toolbox::cable::{
    compute_ampacity, size_labels, temperature_factors, Arrangement, ConductorType,
    InstallationMethod, QueryParameters, SpacingClass,
};
use proptest::prelude::*;

fn arb_conductor() -> impl Strategy<Value = ConductorType> {
    prop_oneof![Just(ConductorType::Hypalon), Just(ConductorType::Pvc)]
}

fn arb_method() -> impl Strategy<Value = InstallationMethod> {
    prop_oneof![
        Just(InstallationMethod::Conduit),
        Just(InstallationMethod::OpenAirOrDuct)
    ]
}

fn params_for(
    conductor: ConductorType,
    size: &str,
    method: InstallationMethod,
    temp: f64,
) -> QueryParameters {
    let arrangement = match method {
        InstallationMethod::Conduit => Arrangement::Conduit { bundle: "1".into() },
        InstallationMethod::OpenAirOrDuct => Arrangement::OpenAirOrDuct {
            spacing: SpacingClass::OneDiameter,
            count: 1,
        },
    };
    QueryParameters {
        conductor,
        size: size.into(),
        temperature_c: temp,
        arrangement,
    }
}

proptest! {
    #[test]
    fn cold_temperatures_clamp_to_lower_bound(
        conductor in arb_conductor(),
        method in arb_method(),
        temp in -1000.0f64..17.5,
    ) {
        let table = temperature_factors(conductor, method);
        let (key, factor) = resolve_temperature_factor(table, temp);
        prop_assert_eq!(key, 20);
        prop_assert_eq!(Some(factor), table.factor_at(20));
    }

    #[test]
    fn hot_temperatures_clamp_to_upper_bound(
        conductor in arb_conductor(),
        method in arb_method(),
        temp in 52.5f64..1000.0,
    ) {
        let table = temperature_factors(conductor, method);
        let (key, factor) = resolve_temperature_factor(table, temp);
        prop_assert_eq!(key, 50);
        prop_assert_eq!(Some(factor), table.factor_at(50));
    }

    #[test]
    fn resolved_key_is_always_a_table_key(temp in proptest::num::f64::ANY) {
        let key = resolve_temperature_key(temp);
        prop_assert!((20..=50).contains(&key));
        prop_assert_eq!(key % 5, 0);
        prop_assert_eq!(resolve_temperature_key(f64::from(key)), key);
    }

    #[test]
    fn key_is_nearest_multiple_of_five(temp in 20.0f64..50.0) {
        let key = resolve_temperature_key(temp);
        prop_assert!((f64::from(key) - temp).abs() <= 2.5);
    }

    #[test]
    fn compute_is_pure(
        conductor in arb_conductor(),
        method in arb_method(),
        temp in -20.0f64..80.0,
        idx in 0usize..18,
    ) {
        let size = size_labels(conductor)[idx];
        let params = params_for(conductor, size, method, temp);
        let a = compute_ampacity(&params).unwrap();
        let b = compute_ampacity(&params).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn single_wire_reproduces_base_times_temperature_factor(
        conductor in arb_conductor(),
        method in arb_method(),
        temp in 15.0f64..55.0,
        idx in 0usize..18,
    ) {
        let size = size_labels(conductor)[idx];
        let res = compute_ampacity(&params_for(conductor, size, method, temp)).unwrap();
        prop_assert_eq!(res.secondary_factor, 1.0);
        let expected = round_half_up(f64::from(res.base_ampacity) * res.temperature_factor) as u32;
        prop_assert_eq!(res.final_ampacity, expected);
    }
}

#[test]
fn already_valid_keys_are_idempotent() {
    for conductor in ConductorType::ALL {
        for method in InstallationMethod::ALL {
            let table = temperature_factors(conductor, method);
            for p in table.points {
                let (key, factor) = resolve_temperature_factor(table, f64::from(p.temp_c));
                assert_eq!(key, p.temp_c);
                assert_eq!(factor, p.factor);
            }
        }
    }
}

#[test]
fn explicit_clamp_examples() {
    for conductor in ConductorType::ALL {
        for method in InstallationMethod::ALL {
            let table = temperature_factors(conductor, method);
            assert_eq!(
                resolve_temperature_factor(table, 5.0),
                resolve_temperature_factor(table, 20.0)
            );
            assert_eq!(
                resolve_temperature_factor(table, 100.0),
                resolve_temperature_factor(table, 50.0)
            );
        }
    }
}

#[test]
fn ampacity_never_rises_with_temperature() {
    for conductor in ConductorType::ALL {
        for method in InstallationMethod::ALL {
            for size in size_labels(conductor) {
                let mut prev = u32::MAX;
                for temp in (10..=60).map(f64::from) {
                    let res = compute_ampacity(&params_for(conductor, size, method, temp)).unwrap();
                    assert!(
                        res.final_ampacity <= prev,
                        "{conductor:?} {method:?} {size} at {temp}°C rose to {}",
                        res.final_ampacity
                    );
                    prev = res.final_ampacity;
                }
            }
        }
    }
}
