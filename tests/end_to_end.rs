//! 측정값 → 농도 → 순수 물 비점 → BPR → 실제 비점 전체 흐름 회귀 테스트.
use approx::assert_abs_diff_eq;
use cobalt_sulfate_bpr::calculator::{compute_final, MeasurementInput};
use cobalt_sulfate_bpr::error::{BprError, ErrorKind};
use cobalt_sulfate_bpr::reference::ReferenceData;

fn data() -> ReferenceData {
    ReferenceData::standard().expect("built-in tables")
}

fn input(temperature_c: f64, density_g_cm3: f64, pressure_kpa: f64) -> MeasurementInput {
    MeasurementInput {
        temperature_c,
        density_g_cm3,
        pressure_kpa,
    }
}

#[test]
fn reference_scenario_48c_1490_15kpa() {
    let r = compute_final(&data(), &input(48.0, 1.490, 15.0)).expect("in range");
    assert_abs_diff_eq!(r.concentration, 48.5, epsilon = 1e-9);
    assert_abs_diff_eq!(r.pure_water_boiling_point_c, 53.6, epsilon = 1e-9);
    assert_abs_diff_eq!(r.atmospheric_bpr_c, 11.1, epsilon = 1e-9);
    assert_abs_diff_eq!(r.correction_factor, 1.0696, epsilon = 1e-9);
    assert_abs_diff_eq!(r.corrected_bpr_c, 11.9, epsilon = 1e-9);
    assert_abs_diff_eq!(r.actual_boiling_temperature_c, 65.5, epsilon = 1e-9);
    assert!(r.atmospheric_bpr_c >= 8.0);
    assert_abs_diff_eq!(
        r.actual_boiling_temperature_c,
        r.pure_water_boiling_point_c + r.corrected_bpr_c,
        epsilon = 1e-9
    );
}

#[test]
fn if97_reference_is_reported_alongside_table_value() {
    let r = compute_final(&data(), &input(48.0, 1.490, 15.0)).expect("in range");
    let t_sat = r.if97_saturation_c.expect("IF97 value");
    assert!((t_sat - r.pure_water_boiling_point_c).abs() < 1.0, "IF97 {t_sat}");
}

#[test]
fn repeated_calls_are_bit_identical() {
    let data = data();
    let m = input(57.3, 1.47, 21.5);
    let a = compute_final(&data, &m);
    let b = compute_final(&data, &m);
    assert_eq!(a, b);
}

#[test]
fn temperature_boundaries() {
    let data = data();
    assert!(compute_final(&data, &input(20.0, 1.540, 15.0)).is_ok());
    assert!(compute_final(&data, &input(100.0, 1.392, 15.0)).is_ok());
    for t in [19.9, 100.1] {
        let err = compute_final(&data, &input(t, 1.5, 15.0)).unwrap_err();
        assert!(matches!(err.error, BprError::TemperatureOutOfRange { .. }));
        assert_eq!(err.error.kind(), ErrorKind::Range);
        assert_eq!(err.concentration, None);
    }
}

#[test]
fn pressure_boundaries() {
    let data = data();
    let low = compute_final(&data, &input(48.0, 1.490, 8.0)).expect("8 kPa");
    assert_abs_diff_eq!(low.pure_water_boiling_point_c, 41.2, epsilon = 1e-9);
    let high = compute_final(&data, &input(48.0, 1.490, 28.0)).expect("28 kPa");
    assert_abs_diff_eq!(high.pure_water_boiling_point_c, 67.0, epsilon = 1e-9);
    for p in [7.9, 28.1] {
        let err = compute_final(&data, &input(48.0, 1.490, p)).unwrap_err();
        assert_eq!(err.error.kind(), ErrorKind::Range);
        assert_eq!(err.concentration, Some(48.5));
    }
}

#[test]
fn correction_factor_stays_within_clamp() {
    let data = data();
    for p in [8.0, 12.0, 15.0, 20.0, 25.0, 28.0] {
        let r = compute_final(&data, &input(48.0, 1.490, p)).expect("in range");
        assert!((1.04..=1.09).contains(&r.correction_factor), "P={p}");
    }
}

#[test]
fn dilute_solution_is_rejected_by_bpr_band() {
    let err = compute_final(&data(), &input(60.0, 1.300, 15.0)).unwrap_err();
    assert!(matches!(err.error, BprError::ConcentrationOutOfRange { .. }));
    assert_eq!(err.pure_water_boiling_point_c, Some(53.6));
}
