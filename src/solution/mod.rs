//! 온도·밀도에서 황산코발트 농도를 역산하는 2차원 보간 엔진.

pub mod bracket;
pub mod concentration;
pub mod cross_temperature;

pub use bracket::{find_bracket, TemperatureBracket};
pub use concentration::resolve_concentration;
pub use cross_temperature::{resolve_bracket_densities, BracketDensities, CrossTemperatureSample};
