//! 계산 파이프라인과 참조 데이터 로드에서 발생하는 오류 정의.

use std::fmt;

use thiserror::Error;

/// 오류의 큰 분류. 입력 범위 위반인지, 보간 구간을 찾지 못한 것인지 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 입력이 지원 범위를 벗어남
    Range,
    /// 보간/역보간 구간을 찾지 못함
    Lookup,
}

/// 운전자가 입력하는 측정량.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Temperature,
    Density,
    Pressure,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quantity::Temperature => "온도",
            Quantity::Density => "밀도",
            Quantity::Pressure => "압력",
        })
    }
}

/// 농도·비점 계산 중 발생 가능한 오류.
///
/// `Display`는 로그용 한국어 문장이다. 화면 표시는 `ui_cli::describe_error`가 번역한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BprError {
    /// 측정 온도가 밀도표 온도 범위 밖
    #[error("온도는 {min}~{max}℃만 지원합니다. 현재 T={value:.1}℃")]
    TemperatureOutOfRange { value: f64, min: f64, max: f64 },

    /// 공정 압력이 허용 범위 밖
    #[error("압력은 {min}~{max}kPa(극저진공)만 지원합니다. 현재 P={value:.1}kPa")]
    PressureOutOfRange { value: f64, min: f64, max: f64 },

    /// 농도가 BPR 상관식 적용 범위 밖
    #[error("고농도 구간({min}%~{max}%)만 지원합니다. 현재 농도 {value:.1}%")]
    ConcentrationOutOfRange { value: f64, min: f64, max: f64 },

    /// NaN/무한대 등 수치가 아닌 입력
    #[error("{quantity} 값이 유한한 숫자가 아닙니다")]
    NotFinite { quantity: Quantity },

    /// 보간 구간 탐색 실패
    #[error("보간 실패: {0}")]
    Lookup(String),
}

impl BprError {
    /// 오류 분류를 반환한다.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BprError::TemperatureOutOfRange { .. }
            | BprError::PressureOutOfRange { .. }
            | BprError::ConcentrationOutOfRange { .. }
            | BprError::NotFinite { .. } => ErrorKind::Range,
            BprError::Lookup(_) => ErrorKind::Lookup,
        }
    }
}

/// 참조 데이터(밀도표·증기압표·상관식) 검증 오류.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    /// 곡선이 너무 적어 온도 구간을 만들 수 없음
    #[error("농도-밀도 곡선이 최소 2개 필요합니다 (현재 {0}개)")]
    TooFewCurves(usize),

    /// 곡선 온도가 엄격히 증가하지 않음
    #[error("곡선 온도가 증가 순서가 아닙니다: {previous}℃ 다음 {current}℃")]
    UnsortedTemperatures { previous: f64, current: f64 },

    /// 곡선 내부 점 검증 실패
    #[error("{temperature}℃ 곡선: {reason}")]
    InvalidCurve { temperature: f64, reason: String },

    /// 증기압표 검증 실패
    #[error("증기압표: {0}")]
    InvalidVaporTable(String),

    /// 상관식/범위 상수 검증 실패
    #[error("상관식 설정: {0}")]
    InvalidCorrelation(String),

    /// TOML 파싱 오류
    #[error("참조 데이터 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BprError>;
