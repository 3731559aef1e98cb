//! IAPWS-IF97 포화 온도 참조값. seuif97 크레이트로 위임한다.
//! 증기압표로 구한 비점을 교차 확인하는 용도로만 쓴다.

use seuif97::{px, OT};

/// 증기압표 비점과 IF97 포화 온도의 차이가 이 값(°C)을 넘으면 경고한다.
pub const TABLE_DEVIATION_WARN_C: f64 = 1.0;

/// 압력(kPa, 절대)에서 IF97 Region 4 포화 온도(°C). 계산 불가 시 `None`.
pub fn saturation_temperature_c(pressure_kpa: f64) -> Option<f64> {
    if !(pressure_kpa > 0.0) {
        return None;
    }
    let p_mpa = pressure_kpa / 1000.0;
    let t_c = px(p_mpa, 0.0, OT);
    t_c.is_finite().then_some(t_c)
}
