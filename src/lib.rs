//! 고농도 황산코발트 용액의 극저진공 비점 상승(BPR) 추정 라이브러리.
//!
//! 측정 온도·밀도로 농도를 역산하고, 공정 압력에서 순수 물 비점과 보정 BPR을 더해
//! 용액의 실제 비점을 구한다. 계산 로직을 라이브러리로 분리하여 CLI와 테스트에서 함께 쓴다.

pub mod app;
pub mod calculator;
pub mod config;
pub mod error;
pub mod i18n;
pub mod interp;
pub mod reference;
pub mod solution;
pub mod ui_cli;
pub mod water;
