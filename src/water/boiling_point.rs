use crate::error::{BprError, Result};
use crate::interp::round_to;
use crate::reference::ReferenceData;

/// 공정 압력(kPa, 절대)에서 순수 물의 비점(°C)을 증기압표 보간으로 구한다. 소수 첫째 자리 반올림.
///
/// 허용 압력 범위(기본 8~28kPa) 밖이면 `PressureOutOfRange`.
pub fn boiling_point_for_pressure(data: &ReferenceData, pressure_kpa: f64) -> Result<f64> {
    let table = data.vapor_pressure();
    let (min, max) = table.supported_kpa();
    if !(pressure_kpa >= min && pressure_kpa <= max) {
        return Err(BprError::PressureOutOfRange {
            value: pressure_kpa,
            min,
            max,
        });
    }
    let tw = table.boiling_point_at(pressure_kpa).ok_or_else(|| {
        BprError::Lookup(format!("압력 {pressure_kpa:.1}kPa 보간 실패"))
    })?;
    Ok(round_to(tw, 1))
}
