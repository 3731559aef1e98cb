//! 계산에 쓰이는 고정 참조 데이터.
//!
//! 농도-밀도 곡선 목록, 포화증기압표, BPR 상관식, 압력 보정 상수를 하나의 불변 객체로 묶는다.
//! 프로세스 시작 시 한 번 만들어 각 계산 함수에 명시적으로 넘긴다.

pub mod correlation;
pub mod curve;
mod tables;
pub mod vapor_pressure;

use serde::Deserialize;

use crate::error::ReferenceDataError;

pub use correlation::{BprCorrelation, PressureCorrection};
pub use curve::{ConcentrationDensityCurve, CurvePoint};
pub use vapor_pressure::{VaporPressurePoint, VaporPressureTable};

use vapor_pressure::RawVaporPressureTable;

/// 검증을 마친 참조 데이터 묶음.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    curves: Vec<ConcentrationDensityCurve>,
    vapor_pressure: VaporPressureTable,
    bpr: BprCorrelation,
    pressure_correction: PressureCorrection,
}

#[derive(Debug, Deserialize)]
struct RawCurve {
    temperature_c: f64,
    points: Vec<(f64, f64)>,
}

#[derive(Debug, Deserialize)]
struct RawReferenceData {
    curves: Vec<RawCurve>,
    vapor_pressure: Option<RawVaporPressureTable>,
    #[serde(default)]
    bpr: BprCorrelation,
    #[serde(default)]
    pressure_correction: PressureCorrection,
}

impl ReferenceData {
    /// 구성요소를 검증해 참조 데이터를 만든다.
    ///
    /// 곡선은 기준 온도 오름차순으로 정렬되며, 같은 온도의 곡선이 둘 이상이면 거부한다.
    pub fn new(
        mut curves: Vec<ConcentrationDensityCurve>,
        vapor_pressure: VaporPressureTable,
        bpr: BprCorrelation,
        pressure_correction: PressureCorrection,
    ) -> Result<Self, ReferenceDataError> {
        if curves.len() < 2 {
            return Err(ReferenceDataError::TooFewCurves(curves.len()));
        }
        curves.sort_by(|a, b| a.temperature_c().total_cmp(&b.temperature_c()));
        for pair in curves.windows(2) {
            if pair[1].temperature_c() <= pair[0].temperature_c() {
                return Err(ReferenceDataError::UnsortedTemperatures {
                    previous: pair[0].temperature_c(),
                    current: pair[1].temperature_c(),
                });
            }
        }
        bpr.validate()?;
        pressure_correction.validate()?;
        Ok(Self {
            curves,
            vapor_pressure,
            bpr,
            pressure_correction,
        })
    }

    /// 내장 황산코발트 밀도표와 증기압표로 참조 데이터를 만든다.
    pub fn standard() -> Result<Self, ReferenceDataError> {
        let curves = tables::DENSITY_CURVES
            .iter()
            .map(|(t, points)| {
                ConcentrationDensityCurve::new(*t, points.iter().copied().map(CurvePoint::from))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(
            curves,
            standard_vapor_pressure()?,
            BprCorrelation::default(),
            PressureCorrection::default(),
        )
    }

    /// TOML 문서에서 참조 데이터를 읽는다.
    ///
    /// `[[curves]]` 배열은 필수이며, `vapor_pressure`·`bpr`·`pressure_correction`을
    /// 생략하면 내장값을 쓴다.
    pub fn from_toml_str(src: &str) -> Result<Self, ReferenceDataError> {
        let raw: RawReferenceData = toml::from_str(src)?;
        let curves = raw
            .curves
            .into_iter()
            .map(|c| {
                ConcentrationDensityCurve::new(
                    c.temperature_c,
                    c.points.into_iter().map(CurvePoint::from),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let vapor_pressure = match raw.vapor_pressure {
            Some(table) => VaporPressureTable::from_raw(table)?,
            None => standard_vapor_pressure()?,
        };
        Self::new(curves, vapor_pressure, raw.bpr, raw.pressure_correction)
    }

    /// 기준 온도 오름차순 곡선 목록.
    pub fn curves(&self) -> &[ConcentrationDensityCurve] {
        &self.curves
    }

    /// 곡선의 기준 온도 집합(오름차순).
    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.curves.iter().map(ConcentrationDensityCurve::temperature_c)
    }

    /// 입력 가능한 온도 범위 (최소, 최대) °C.
    pub fn temperature_span(&self) -> (f64, f64) {
        match (self.curves.first(), self.curves.last()) {
            (Some(first), Some(last)) => (first.temperature_c(), last.temperature_c()),
            _ => (f64::NAN, f64::NAN),
        }
    }

    pub fn vapor_pressure(&self) -> &VaporPressureTable {
        &self.vapor_pressure
    }

    pub fn bpr(&self) -> &BprCorrelation {
        &self.bpr
    }

    pub fn pressure_correction(&self) -> &PressureCorrection {
        &self.pressure_correction
    }
}

fn standard_vapor_pressure() -> Result<VaporPressureTable, ReferenceDataError> {
    VaporPressureTable::new(
        tables::VAPOR_PRESSURE
            .iter()
            .copied()
            .map(VaporPressurePoint::from),
        tables::SUPPORTED_PRESSURE_KPA,
    )
}
