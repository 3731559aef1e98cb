//! 임의 온도에서 측정한 밀도를 인접 두 기준 온도의 등가 밀도로 환산한다.
//!
//! 같은 농도에서 밀도는 온도에 대해 선형이라고 가정한다. 왼쪽 곡선의 농도 점마다 오른쪽
//! 곡선 밀도를 보간해 두 온도의 밀도 쌍을 만들고, 이를 측정 온도로 보간한 이론 밀도에서
//! 농도 c0를 역산한 뒤 c0를 두 곡선에 다시 대입한다.

use tracing::debug;

use super::bracket::{find_bracket, TemperatureBracket};
use crate::error::{BprError, Result};
use crate::interp::{clamped_lookup, interpolate, round_to};
use crate::reference::ReferenceData;

/// 한 농도에서 두 기준 온도의 밀도 쌍. 한 번의 환산 동안만 존재한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossTemperatureSample {
    pub concentration: f64,
    pub density_left: f64,
    pub density_right: f64,
}

/// 측정 온도·밀도에 대응하는 두 기준 온도에서의 등가 밀도(소수 셋째 자리 반올림).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketDensities {
    pub t_left: f64,
    pub t_right: f64,
    pub density_left: f64,
    pub density_right: f64,
}

/// 온도 T, 밀도 ρ를 감싸는 두 기준 온도의 등가 밀도 (ρ_left, ρ_right)를 구한다.
pub fn resolve_bracket_densities(
    data: &ReferenceData,
    temperature_c: f64,
    density: f64,
) -> Result<BracketDensities> {
    let bracket = find_bracket(data, temperature_c)?;
    let samples = aligned_samples(&bracket)?;
    let c0 = invert_at_temperature(&bracket, &samples, temperature_c, density)?;

    let density_left = bracket.left.density_for_concentration(c0)?;
    let density_right = bracket.right.density_for_concentration(c0)?;
    debug!(
        c0,
        density_left, density_right, "측정 온도 기준 농도에서 등가 밀도 산출"
    );

    Ok(BracketDensities {
        t_left: bracket.t_left(),
        t_right: bracket.t_right(),
        density_left: round_to(density_left, 3),
        density_right: round_to(density_right, 3),
    })
}

/// 두 곡선의 농도 정의역이 겹치는 구간에서 왼쪽 곡선의 농도 점마다 표본을 만든다.
///
/// 오른쪽 곡선에만 있는 농도 점은 표본이 되지 않는다.
fn aligned_samples(bracket: &TemperatureBracket<'_>) -> Result<Vec<CrossTemperatureSample>> {
    let (left_min, left_max) = bracket.left.concentration_span();
    let (right_min, right_max) = bracket.right.concentration_span();
    let common_min = left_min.max(right_min);
    let common_max = left_max.min(right_max);

    let samples = bracket
        .left
        .points()
        .iter()
        .filter(|p| p.concentration >= common_min && p.concentration <= common_max)
        .map(|p| {
            Ok(CrossTemperatureSample {
                concentration: p.concentration,
                density_left: p.density,
                density_right: bracket.right.density_for_concentration(p.concentration)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        t_left = bracket.t_left(),
        t_right = bracket.t_right(),
        common_min,
        common_max,
        samples = samples.len(),
        "공통 농도 구간 표본 생성"
    );
    if samples.len() < 2 {
        return Err(BprError::Lookup(format!(
            "{}℃/{}℃ 곡선의 공통 농도 데이터가 부족해 역산할 수 없습니다 ({}개)",
            bracket.t_left(),
            bracket.t_right(),
            samples.len()
        )));
    }
    Ok(samples)
}

/// 표본을 측정 온도의 이론 밀도로 옮긴 뒤 밀도 ρ에 해당하는 농도 c0를 역산한다.
fn invert_at_temperature(
    bracket: &TemperatureBracket<'_>,
    samples: &[CrossTemperatureSample],
    temperature_c: f64,
    density: f64,
) -> Result<f64> {
    // (농도, T에서의 이론 밀도)
    let mut at_temperature: Vec<(f64, f64)> = samples
        .iter()
        .map(|s| {
            let rho_t = interpolate(
                temperature_c,
                bracket.t_left(),
                s.density_left,
                bracket.t_right(),
                s.density_right,
            );
            (s.concentration, rho_t)
        })
        .collect();
    at_temperature.sort_by(|a, b| a.1.total_cmp(&b.1));

    clamped_lookup(&at_temperature, density, |p| p.1, |p| p.0).ok_or_else(|| {
        BprError::Lookup(format!(
            "밀도 {density:.3} g/cm³로 농도를 역산할 수 없습니다 (T={temperature_c:.1}℃)"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn data() -> ReferenceData {
        ReferenceData::standard().expect("built-in tables")
    }

    #[test]
    fn reference_point_between_40_and_50() {
        let d = resolve_bracket_densities(&data(), 48.0, 1.490).unwrap();
        assert_eq!((d.t_left, d.t_right), (40.0, 50.0));
        assert_abs_diff_eq!(d.density_left, 1.512, epsilon = 1e-12);
        assert_abs_diff_eq!(d.density_right, 1.485, epsilon = 1e-12);
    }

    #[test]
    fn at_left_reference_temperature_density_is_unchanged() {
        let d = resolve_bracket_densities(&data(), 20.0, 1.540).unwrap();
        assert_abs_diff_eq!(d.density_left, 1.540, epsilon = 1e-12);
        assert_abs_diff_eq!(d.density_right, 1.505, epsilon = 1e-12);
    }

    #[test]
    fn density_above_samples_clamps_to_top_concentration() {
        // 55℃ 곡선이 51.8%에서 끝나므로 50/55 쌍의 최고 표본은 51%
        let d = resolve_bracket_densities(&data(), 52.0, 1.700).unwrap();
        assert_abs_diff_eq!(d.density_left, 1.519, epsilon = 1e-12);
        assert_abs_diff_eq!(d.density_right, 1.530, epsilon = 1e-12);
    }

    #[test]
    fn only_left_curve_points_are_sampled() {
        let data = data();
        let bracket = find_bracket(&data, 52.0).unwrap();
        let samples = aligned_samples(&bracket).unwrap();
        let concentrations: Vec<f64> = samples.iter().map(|s| s.concentration).collect();
        assert_eq!(
            concentrations,
            vec![0.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 48.0, 50.0, 51.0]
        );
        assert_eq!(samples[1].density_left, 1.160);
        assert_abs_diff_eq!(samples[1].density_right, 1.0 + 0.247 * 20.0 / 30.0, epsilon = 1e-12);
    }

    #[test]
    fn sparse_overlap_is_lookup_error() {
        let data = ReferenceData::from_toml_str(
            r#"
            [[curves]]
            temperature_c = 20.0
            points = [[0.0, 1.000], [10.0, 1.090]]

            [[curves]]
            temperature_c = 40.0
            points = [[5.0, 1.030], [20.0, 1.170]]
            "#,
        )
        .expect("synthetic tables");
        let err = resolve_bracket_densities(&data, 30.0, 1.05).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn out_of_span_temperature_is_range_error() {
        let err = resolve_bracket_densities(&data(), 100.1, 1.4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    proptest! {
        #[test]
        fn bracket_densities_reproduce_measured_density(
            t in 20.0_f64..=100.0,
            c in 45.5_f64..=51.5,
        ) {
            let data = data();
            let bracket = find_bracket(&data, t).unwrap();
            let rho = interpolate(
                t,
                bracket.t_left(),
                bracket.left.density_for_concentration(c).unwrap(),
                bracket.t_right(),
                bracket.right.density_for_concentration(c).unwrap(),
            );
            let d = resolve_bracket_densities(&data, t, rho).unwrap();
            let back = interpolate(t, d.t_left, d.density_left, d.t_right, d.density_right);
            prop_assert!((back - rho).abs() < 3e-3, "T={} c={} rho={} back={}", t, c, rho, back);
        }
    }
}
