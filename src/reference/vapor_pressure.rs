use serde::Deserialize;

use crate::error::ReferenceDataError;
use crate::interp::interpolate;

/// 포화증기압표의 한 점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporPressurePoint {
    /// 압력(kPa, 절대)
    pub pressure_kpa: f64,
    /// 해당 압력에서 순수 물의 비점(°C)
    pub temperature_c: f64,
}

impl From<(f64, f64)> for VaporPressurePoint {
    fn from((pressure_kpa, temperature_c): (f64, f64)) -> Self {
        Self {
            pressure_kpa,
            temperature_c,
        }
    }
}

/// TOML에서 읽은 증기압표 원본. 검증 전 상태.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct RawVaporPressureTable {
    pub min_pressure_kpa: f64,
    pub max_pressure_kpa: f64,
    pub points: Vec<(f64, f64)>,
}

/// 압력 오름차순 포화증기압표와 운전 허용 압력 범위.
#[derive(Debug, Clone, PartialEq)]
pub struct VaporPressureTable {
    points: Vec<VaporPressurePoint>,
    supported_kpa: (f64, f64),
}

impl VaporPressureTable {
    /// 점열과 허용 압력 범위를 검증해 표를 만든다.
    /// 허용 범위는 표가 덮는 압력 구간 안에 있어야 한다.
    pub fn new(
        points: impl IntoIterator<Item = VaporPressurePoint>,
        supported_kpa: (f64, f64),
    ) -> Result<Self, ReferenceDataError> {
        let points: Vec<VaporPressurePoint> = points.into_iter().collect();
        if points.len() < 2 {
            return Err(ReferenceDataError::InvalidVaporTable(format!(
                "점이 최소 2개 필요합니다 (현재 {}개)",
                points.len()
            )));
        }
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if !(b.pressure_kpa > a.pressure_kpa) {
                return Err(ReferenceDataError::InvalidVaporTable(format!(
                    "압력이 증가하지 않습니다: {} 다음 {} kPa",
                    a.pressure_kpa, b.pressure_kpa
                )));
            }
            if !(b.temperature_c > a.temperature_c) {
                return Err(ReferenceDataError::InvalidVaporTable(format!(
                    "비점이 증가하지 않습니다: {} 다음 {}℃",
                    a.temperature_c, b.temperature_c
                )));
            }
        }
        let (lo, hi) = supported_kpa;
        let table_lo = points[0].pressure_kpa;
        let table_hi = points[points.len() - 1].pressure_kpa;
        if !(lo <= hi && lo >= table_lo && hi <= table_hi) {
            return Err(ReferenceDataError::InvalidVaporTable(format!(
                "허용 압력 범위 {lo}~{hi}kPa가 표 범위 {table_lo}~{table_hi}kPa를 벗어납니다"
            )));
        }
        Ok(Self {
            points,
            supported_kpa,
        })
    }

    pub(super) fn from_raw(raw: RawVaporPressureTable) -> Result<Self, ReferenceDataError> {
        Self::new(
            raw.points.into_iter().map(VaporPressurePoint::from),
            (raw.min_pressure_kpa, raw.max_pressure_kpa),
        )
    }

    /// 운전 허용 압력 범위 (최소, 최대) kPa.
    pub fn supported_kpa(&self) -> (f64, f64) {
        self.supported_kpa
    }

    /// 압력을 감싸는 두 점 사이를 선형 보간한 비점(°C). 표 밖이면 `None`.
    pub fn boiling_point_at(&self, pressure_kpa: f64) -> Option<f64> {
        self.points
            .windows(2)
            .find(|pair| {
                pressure_kpa >= pair[0].pressure_kpa && pressure_kpa <= pair[1].pressure_kpa
            })
            .map(|pair| {
                interpolate(
                    pressure_kpa,
                    pair[0].pressure_kpa,
                    pair[0].temperature_c,
                    pair[1].pressure_kpa,
                    pair[1].temperature_c,
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_table() -> VaporPressureTable {
        VaporPressureTable::new(
            [(8.0, 41.2), (10.0, 45.5), (15.0, 53.6)]
                .into_iter()
                .map(VaporPressurePoint::from),
            (8.0, 15.0),
        )
        .expect("valid table")
    }

    #[test]
    fn interpolates_between_rows() {
        let t = small_table();
        assert_relative_eq!(t.boiling_point_at(12.5).unwrap(), 49.55, epsilon = 1e-9);
        assert_relative_eq!(t.boiling_point_at(8.0).unwrap(), 41.2, epsilon = 1e-9);
    }

    #[test]
    fn outside_table_is_none() {
        assert_eq!(small_table().boiling_point_at(7.0), None);
        assert_eq!(small_table().boiling_point_at(16.0), None);
    }

    #[test]
    fn supported_window_must_lie_inside_table() {
        let err = VaporPressureTable::new(
            [(8.0, 41.2), (10.0, 45.5)]
                .into_iter()
                .map(VaporPressurePoint::from),
            (8.0, 28.0),
        );
        assert!(matches!(err, Err(ReferenceDataError::InvalidVaporTable(_))));
    }
}
