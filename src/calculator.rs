//! 농도·순수 물 비점·BPR을 이어 실제 비점까지 구하는 최종 계산기.

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::{BprError, Quantity, Result};
use crate::interp::round_to;
use crate::reference::ReferenceData;
use crate::solution::resolve_concentration;
use crate::water::{boiling_point_for_pressure, if97};

/// 운전자가 입력한 측정값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementInput {
    /// 측정 온도(°C)
    pub temperature_c: f64,
    /// 측정 밀도(g/cm³)
    pub density_g_cm3: f64,
    /// 공정 압력(kPa, 절대)
    pub pressure_kpa: f64,
}

impl MeasurementInput {
    /// NaN/무한대 입력을 거른다. 범위 검사는 각 단계에서 한다.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (Quantity::Temperature, self.temperature_c),
            (Quantity::Density, self.density_g_cm3),
            (Quantity::Pressure, self.pressure_kpa),
        ];
        match fields.iter().find(|(_, v)| !v.is_finite()) {
            Some((quantity, _)) => Err(BprError::NotFinite {
                quantity: *quantity,
            }),
            None => Ok(()),
        }
    }
}

/// 한 번의 계산 결과. 모든 값은 소수 첫째 자리로 반올림되어 있다(보정계수 제외).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedResult {
    /// 역산한 농도(%)
    pub concentration: f64,
    /// 순수 물 비점(°C), 증기압표 기준
    pub pure_water_boiling_point_c: f64,
    /// 상압 BPR(°C)
    pub atmospheric_bpr_c: f64,
    /// 저진공 보정계수 K
    pub correction_factor: f64,
    /// 보정 후 BPR(°C)
    pub corrected_bpr_c: f64,
    /// 용액 실제 비점(°C)
    pub actual_boiling_temperature_c: f64,
    /// 같은 압력에서의 IF97 포화 온도(°C). 참고값.
    pub if97_saturation_c: Option<f64>,
}

/// 계산 실패. 실패 전까지 구한 중간값을 함께 담는다.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
pub struct PartialFailure {
    pub concentration: Option<f64>,
    pub pure_water_boiling_point_c: Option<f64>,
    #[source]
    pub error: BprError,
}

impl PartialFailure {
    fn new(error: BprError) -> Self {
        Self {
            concentration: None,
            pure_water_boiling_point_c: None,
            error,
        }
    }
}

/// 농도(%)로 상압 BPR(°C)을 구한다.
///
/// 상관식 적용 범위(기본 45~53%) 밖이면 `ConcentrationOutOfRange`.
/// 계산값이 하한(기본 8.0℃)보다 작으면 하한을 그대로 돌려준다.
pub fn compute_bpr(data: &ReferenceData, concentration: f64) -> Result<f64> {
    let corr = data.bpr();
    if !(concentration >= corr.min_concentration && concentration <= corr.max_concentration) {
        return Err(BprError::ConcentrationOutOfRange {
            value: concentration,
            min: corr.min_concentration,
            max: corr.max_concentration,
        });
    }
    let bpr = corr.slope * concentration + corr.intercept;
    if bpr < corr.floor_c {
        return Ok(corr.floor_c);
    }
    Ok(round_to(bpr, 1))
}

/// 순수 물 비점으로 저진공 보정계수 K를 구한다. 허용 범위로 제한한다.
pub fn pressure_correction_factor(data: &ReferenceData, pure_water_boiling_point_c: f64) -> f64 {
    let pc = data.pressure_correction();
    let k = 1.0 + pc.coefficient * (pc.reference_temperature_c - pure_water_boiling_point_c);
    k.clamp(pc.min_factor, pc.max_factor)
}

/// 측정 온도·밀도·압력으로 농도, 순수 물 비점, BPR, 실제 비점을 계산한다.
///
/// 첫 실패에서 멈추며, 그때까지 구한 농도와 비점을 오류와 함께 돌려준다.
pub fn compute_final(
    data: &ReferenceData,
    input: &MeasurementInput,
) -> std::result::Result<ResolvedResult, PartialFailure> {
    input.validate().map_err(PartialFailure::new)?;

    let concentration =
        resolve_concentration(data, input.temperature_c, input.density_g_cm3)
            .map_err(PartialFailure::new)?;

    let tw = boiling_point_for_pressure(data, input.pressure_kpa).map_err(|error| {
        PartialFailure {
            concentration: Some(concentration),
            pure_water_boiling_point_c: None,
            error,
        }
    })?;

    let atmospheric_bpr = compute_bpr(data, concentration).map_err(|error| PartialFailure {
        concentration: Some(concentration),
        pure_water_boiling_point_c: Some(tw),
        error,
    })?;

    let k = pressure_correction_factor(data, tw);
    let corrected_bpr = round_to(atmospheric_bpr * k, 1);
    let actual = round_to(tw + corrected_bpr, 1);

    let if97_saturation = if97::saturation_temperature_c(input.pressure_kpa);
    if let Some(t_sat) = if97_saturation {
        if (t_sat - tw).abs() > if97::TABLE_DEVIATION_WARN_C {
            warn!(
                pressure_kpa = input.pressure_kpa,
                table_c = tw,
                if97_c = t_sat,
                "증기압표 비점이 IF97 포화 온도와 크게 다릅니다"
            );
        }
    }
    debug!(
        concentration,
        tw, atmospheric_bpr, k, corrected_bpr, actual, "비점 계산 완료"
    );

    Ok(ResolvedResult {
        concentration,
        pure_water_boiling_point_c: tw,
        atmospheric_bpr_c: atmospheric_bpr,
        correction_factor: k,
        corrected_bpr_c: corrected_bpr,
        actual_boiling_temperature_c: actual,
        if97_saturation_c: if97_saturation,
    })
}
