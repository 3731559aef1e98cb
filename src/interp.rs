//! 1차원 선형 보간과 자릿수 반올림 도구.

/// 두 점 (x0, y0), (x1, y1)을 잇는 직선 위에서 x에 대응하는 y를 구한다.
///
/// x0 == x1 이면 0으로 나누지 않도록 y0를 그대로 돌려준다.
/// 구간 밖 x에 대해서는 외삽하므로, 외삽을 원하지 않으면 호출 측에서 범위를 제한해야 한다.
pub fn interpolate(x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    if x0 == x1 {
        return y0;
    }
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

/// 소수점 이하 `decimals` 자리로 반올림한다(0.5는 0에서 먼 쪽으로).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// 정렬된 점열에서 `key` 축으로 x를 감싸는 구간을 찾아 `value` 축 값을 보간한다.
///
/// x가 첫 점 이하이면 첫 값, 마지막 점 이상이면 마지막 값으로 고정하며 외삽하지 않는다.
/// 점이 2개 미만이거나 구간을 찾지 못하면 `None`.
pub fn clamped_lookup<T>(
    points: &[T],
    x: f64,
    key: impl Fn(&T) -> f64,
    value: impl Fn(&T) -> f64,
) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let first = points.first()?;
    let last = points.last()?;
    if x <= key(first) {
        return Some(value(first));
    }
    if x >= key(last) {
        return Some(value(last));
    }
    points
        .windows(2)
        .find(|pair| x >= key(&pair[0]) && x <= key(&pair[1]))
        .map(|pair| {
            interpolate(
                x,
                key(&pair[0]),
                value(&pair[0]),
                key(&pair[1]),
                value(&pair[1]),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn interpolates_between_points() {
        assert_relative_eq!(interpolate(15.0, 10.0, 45.5, 20.0, 59.7), 52.6, epsilon = 1e-12);
        assert_relative_eq!(interpolate(10.0, 10.0, 45.5, 20.0, 59.7), 45.5);
    }

    #[test]
    fn degenerate_segment_returns_left_value() {
        assert_eq!(interpolate(3.0, 2.0, 7.0, 2.0, 9.0), 7.0);
    }

    #[test]
    fn extrapolates_outside_segment() {
        assert_relative_eq!(interpolate(3.0, 0.0, 0.0, 1.0, 2.0), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn clamped_lookup_clamps_and_brackets() {
        let pts = [(1.0, 10.0), (2.0, 20.0), (4.0, 30.0)];
        let key = |p: &(f64, f64)| p.0;
        let val = |p: &(f64, f64)| p.1;
        assert_eq!(clamped_lookup(&pts[..], 0.5, key, val), Some(10.0));
        assert_eq!(clamped_lookup(&pts[..], 9.0, key, val), Some(30.0));
        assert_relative_eq!(clamped_lookup(&pts[..], 3.0, key, val).unwrap(), 25.0);
        assert_eq!(clamped_lookup(&pts[..], 2.0, key, val), Some(20.0));
    }

    #[test]
    fn clamped_lookup_needs_two_points() {
        let pts = [(1.0, 10.0)];
        assert_eq!(clamped_lookup(&pts[..], 1.0, |p| p.0, |p| p.1), None);
        assert_eq!(clamped_lookup(&pts[..0], 1.0, |p| p.0, |p| p.1), None);
    }

    #[test]
    fn clamped_lookup_rejects_nan() {
        let pts = [(1.0, 10.0), (2.0, 20.0)];
        assert_eq!(clamped_lookup(&pts[..], f64::NAN, |p| p.0, |p| p.1), None);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(1.48455, 3), 1.485);
        assert_eq!(round_to(48.46, 1), 48.5);
        assert_eq!(round_to(48.44, 1), 48.4);
        assert_eq!(round_to(-0.25, 1), -0.3);
    }
}
