//! Pass-through properties of the native model, exercised end to end.

use msise00::constants::{ATOMIC_SPECIES_FLOOR, EXOSPHERIC_TEMPERATURE_FLOOR};
use msise00::model::{nrlmsise00, ApArray, ModelOutput, ModelParams};

const DOY: i32 = 172;
const SEC: f64 = 29_000.0;
const LAT: f64 = 60.0;
const LONG: f64 = -70.0;
const LST: f64 = 16.0;

fn run(alt: f64, params: &ModelParams) -> ModelOutput {
    nrlmsise00(DOY, SEC, alt, LAT, LONG, LST, params).unwrap()
}

#[test]
fn anomalous_entry_point_reports_at_least_the_standard_total_density() {
    let standard = run(400.0, &ModelParams::default());
    let anomalous = run(
        400.0,
        &ModelParams {
            anomalous_oxygen: true,
            ..Default::default()
        },
    );

    assert!(anomalous.total_mass_density() >= standard.total_mass_density());
    assert!(anomalous.anomalous_oxygen() >= 0.0);
}

#[test]
fn atomic_species_vanish_below_the_documented_floor() {
    let output = run(ATOMIC_SPECIES_FLOOR - 20.0, &ModelParams::default());

    assert_eq!(output.atomic_oxygen(), 0.0);
    assert_eq!(output.hydrogen(), 0.0);
    assert_eq!(output.atomic_nitrogen(), 0.0);
}

#[test]
fn exospheric_temperature_is_input_independent_below_the_floor() {
    let alt = EXOSPHERIC_TEMPERATURE_FLOOR - 30.0;

    let quiet = run(alt, &ModelParams::default());
    let active = nrlmsise00(
        300,
        1_000.0,
        alt,
        -45.0,
        120.0,
        3.0,
        &ModelParams {
            f107a: 220.0,
            f107: 240.0,
            ap: 80.0,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(
        quiet.exospheric_temperature(),
        active.exospheric_temperature()
    );
}

#[test]
fn per_period_ap_detail_changes_the_thermospheric_state() {
    let scalar = run(400.0, &ModelParams::default());
    let detailed = run(
        400.0,
        &ModelParams {
            ap_array: Some(ApArray([100.0; 7])),
            ..Default::default()
        },
    );

    assert!(detailed.total_mass_density() > 0.0);
    assert_ne!(detailed.densities, scalar.densities);
}

#[test]
fn invocation_is_a_pure_function_of_its_inputs() {
    let params = ModelParams {
        f107a: 200.0,
        f107: 180.0,
        ap: 40.0,
        off_switches: vec![7],
        ..Default::default()
    };

    let first = nrlmsise00(172, 29_000.0, 400.0, 45.0, -75.0, 13.0, &params).unwrap();
    let second = nrlmsise00(172, 29_000.0, 400.0, 45.0, -75.0, 13.0, &params).unwrap();

    assert_eq!(first, second);
}
