use serde::Deserialize;

use crate::error::ReferenceDataError;

/// 상압 BPR 경험식 `bpr = slope·C + intercept` 와 적용 범위.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BprCorrelation {
    pub slope: f64,
    pub intercept: f64,
    /// 계산값이 이보다 작으면 이 값으로 고정한다(°C)
    pub floor_c: f64,
    /// 적용 가능한 최소 농도(%)
    pub min_concentration: f64,
    /// 적용 가능한 최대 농도(%)
    pub max_concentration: f64,
}

impl Default for BprCorrelation {
    fn default() -> Self {
        Self {
            slope: 0.82,
            intercept: -28.7,
            floor_c: 8.0,
            min_concentration: 45.0,
            max_concentration: 53.0,
        }
    }
}

/// 저진공 보정계수 `K = 1 + coefficient·(reference_temperature_c − tw)`, [min_factor, max_factor]로 제한.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PressureCorrection {
    pub coefficient: f64,
    pub reference_temperature_c: f64,
    pub min_factor: f64,
    pub max_factor: f64,
}

impl Default for PressureCorrection {
    fn default() -> Self {
        Self {
            coefficient: 0.0015,
            reference_temperature_c: 100.0,
            min_factor: 1.04,
            max_factor: 1.09,
        }
    }
}

impl BprCorrelation {
    pub(super) fn validate(&self) -> Result<(), ReferenceDataError> {
        let values = [
            self.slope,
            self.intercept,
            self.floor_c,
            self.min_concentration,
            self.max_concentration,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ReferenceDataError::InvalidCorrelation(
                "BPR 상관식 상수는 유한한 숫자여야 합니다".into(),
            ));
        }
        if self.min_concentration > self.max_concentration {
            return Err(ReferenceDataError::InvalidCorrelation(format!(
                "농도 범위가 뒤집혔습니다: {}~{}%",
                self.min_concentration, self.max_concentration
            )));
        }
        Ok(())
    }
}

impl PressureCorrection {
    pub(super) fn validate(&self) -> Result<(), ReferenceDataError> {
        let values = [
            self.coefficient,
            self.reference_temperature_c,
            self.min_factor,
            self.max_factor,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ReferenceDataError::InvalidCorrelation(
                "압력 보정 상수는 유한한 숫자여야 합니다".into(),
            ));
        }
        if self.min_factor > self.max_factor {
            return Err(ReferenceDataError::InvalidCorrelation(format!(
                "보정계수 범위가 뒤집혔습니다: {}~{}",
                self.min_factor, self.max_factor
            )));
        }
        Ok(())
    }
}
