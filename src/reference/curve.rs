use crate::error::{BprError, ReferenceDataError, Result};
use crate::interp::clamped_lookup;

/// 농도-밀도 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// 질량 농도(%)
    pub concentration: f64,
    /// 밀도(g/cm³)
    pub density: f64,
}

impl From<(f64, f64)> for CurvePoint {
    fn from((concentration, density): (f64, f64)) -> Self {
        Self {
            concentration,
            density,
        }
    }
}

/// 한 기준 온도에서의 농도-밀도 관계.
///
/// 점은 농도 오름차순이며 농도와 밀도가 함께 엄격히 증가한다. 생성 시 검증한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationDensityCurve {
    temperature_c: f64,
    points: Vec<CurvePoint>,
}

impl ConcentrationDensityCurve {
    /// 점열을 검증해 곡선을 만든다.
    pub fn new(
        temperature_c: f64,
        points: impl IntoIterator<Item = CurvePoint>,
    ) -> std::result::Result<Self, ReferenceDataError> {
        let points: Vec<CurvePoint> = points.into_iter().collect();
        let invalid = |reason: String| ReferenceDataError::InvalidCurve {
            temperature: temperature_c,
            reason,
        };
        if !temperature_c.is_finite() {
            return Err(invalid("기준 온도가 유한한 숫자가 아닙니다".into()));
        }
        if points.len() < 2 {
            return Err(invalid(format!("점이 최소 2개 필요합니다 (현재 {}개)", points.len())));
        }
        if let Some(p) = points
            .iter()
            .find(|p| !p.concentration.is_finite() || !p.density.is_finite())
        {
            return Err(invalid(format!(
                "유한하지 않은 점 ({}, {})",
                p.concentration, p.density
            )));
        }
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if b.concentration <= a.concentration {
                return Err(invalid(format!(
                    "농도가 증가하지 않습니다: {}% 다음 {}%",
                    a.concentration, b.concentration
                )));
            }
            if b.density <= a.density {
                return Err(invalid(format!(
                    "밀도가 증가하지 않습니다: {} 다음 {} g/cm³",
                    a.density, b.density
                )));
            }
        }
        Ok(Self {
            temperature_c,
            points,
        })
    }

    /// 곡선의 기준 온도(°C).
    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// 곡선이 정의된 농도 범위 (최소, 최대).
    pub fn concentration_span(&self) -> (f64, f64) {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first.concentration, last.concentration),
            _ => (f64::NAN, f64::NAN),
        }
    }

    /// 곡선이 정의된 밀도 범위 (최소, 최대).
    pub fn density_span(&self) -> (f64, f64) {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first.density, last.density),
            _ => (f64::NAN, f64::NAN),
        }
    }

    /// 농도로 밀도를 보간한다. 범위 밖 농도는 양 끝 밀도로 고정한다.
    pub fn density_for_concentration(&self, concentration: f64) -> Result<f64> {
        clamped_lookup(
            &self.points,
            concentration,
            |p| p.concentration,
            |p| p.density,
        )
        .ok_or_else(|| {
            BprError::Lookup(format!(
                "{}℃ 곡선에서 농도 {concentration:.1}%의 밀도를 구할 수 없습니다",
                self.temperature_c
            ))
        })
    }

    /// 밀도로 농도를 역보간한다. 범위 밖 밀도는 양 끝 농도로 고정한다.
    pub fn concentration_for_density(&self, density: f64) -> Result<f64> {
        clamped_lookup(
            &self.points,
            density,
            |p| p.density,
            |p| p.concentration,
        )
        .ok_or_else(|| {
            BprError::Lookup(format!(
                "{}℃ 곡선에서 밀도 {density:.3} g/cm³의 농도를 구할 수 없습니다",
                self.temperature_c
            ))
        })
    }
}
