//! 기준 온도의 표 농도에서 밀도를 구해 다시 농도로 역산하는 왕복 검증.
use cobalt_sulfate_bpr::reference::ReferenceData;
use cobalt_sulfate_bpr::solution::{find_bracket, resolve_concentration};

const BAND_MIN: f64 = 45.0;

#[test]
fn tabulated_concentrations_round_trip_within_one_step() {
    let data = ReferenceData::standard().expect("built-in tables");
    let mut checked = 0;
    for curve in data.curves() {
        let t = curve.temperature_c();
        let bracket = find_bracket(&data, t).expect("tabulated temperature");
        // 표본은 왼쪽 곡선의 농도 점뿐이므로 그 최댓값 위는 끝값으로 고정된다
        let common_max = bracket
            .left
            .concentration_span()
            .1
            .min(bracket.right.concentration_span().1);
        let top_sample = bracket
            .left
            .points()
            .iter()
            .map(|p| p.concentration)
            .filter(|c| *c <= common_max)
            .fold(f64::NEG_INFINITY, f64::max);
        for p in curve.points() {
            if p.concentration < BAND_MIN || p.concentration > top_sample {
                continue;
            }
            let rho = curve.density_for_concentration(p.concentration).unwrap();
            let c = resolve_concentration(&data, t, rho).unwrap();
            assert!(
                (c - p.concentration).abs() <= 0.1 + 1e-9,
                "T={t} c={} -> {c}",
                p.concentration
            );
            checked += 1;
        }
    }
    assert!(checked >= 25, "only {checked} points checked");
}

#[test]
fn concentration_increases_with_density_at_fixed_temperature() {
    let data = ReferenceData::standard().expect("built-in tables");
    for t in [25.0, 48.0, 57.5, 70.0, 95.0] {
        let mut prev = f64::NEG_INFINITY;
        let mut rho = 1.33;
        while rho <= 1.60 {
            let c = resolve_concentration(&data, t, rho).unwrap();
            assert!(c >= prev, "T={t} rho={rho}: {c} < {prev}");
            prev = c;
            rho += 0.005;
        }
    }
}
