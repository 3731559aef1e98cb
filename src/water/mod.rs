//! 순수 물의 비점 관련 계산 모듈.

pub mod boiling_point;
pub mod if97;

pub use boiling_point::boiling_point_for_pressure;
