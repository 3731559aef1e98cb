use tracing::debug;

use super::bracket::find_bracket;
use super::cross_temperature::resolve_bracket_densities;
use crate::error::Result;
use crate::interp::{interpolate, round_to};
use crate::reference::ReferenceData;

/// 임의 온도 T와 밀도 ρ로 용액 농도(%)를 구한다. 소수 첫째 자리 반올림.
///
/// 두 기준 온도의 등가 밀도를 각 곡선에서 농도로 역산한 뒤 온도로 보간한다.
pub fn resolve_concentration(data: &ReferenceData, temperature_c: f64, density: f64) -> Result<f64> {
    let densities = resolve_bracket_densities(data, temperature_c, density)?;
    let bracket = find_bracket(data, temperature_c)?;

    let c_left = bracket
        .left
        .concentration_for_density(densities.density_left)?;
    let c_right = bracket
        .right
        .concentration_for_density(densities.density_right)?;
    let c = interpolate(
        temperature_c,
        bracket.t_left(),
        c_left,
        bracket.t_right(),
        c_right,
    );
    debug!(c_left, c_right, concentration = c, "온도 보간 농도");
    Ok(round_to(c, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_abs_diff_eq;

    fn data() -> ReferenceData {
        ReferenceData::standard().expect("built-in tables")
    }

    #[test]
    fn reference_measurement_gives_48_5_percent() {
        let c = resolve_concentration(&data(), 48.0, 1.490).unwrap();
        assert_abs_diff_eq!(c, 48.5, epsilon = 1e-9);
    }

    #[test]
    fn tabulated_point_at_reference_temperature() {
        let data = data();
        assert_abs_diff_eq!(resolve_concentration(&data, 20.0, 1.497).unwrap(), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(resolve_concentration(&data, 100.0, 1.392).unwrap(), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn result_is_rounded_to_one_decimal() {
        let c = resolve_concentration(&data(), 73.3, 1.43).unwrap();
        assert_abs_diff_eq!(c * 10.0, (c * 10.0).round(), epsilon = 1e-9);
    }

    #[test]
    fn temperature_outside_table_is_rejected() {
        let data = data();
        for t in [19.9, 100.1] {
            let err = resolve_concentration(&data, t, 1.5).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Range);
        }
    }
}
