use tracing::debug;

use crate::error::{BprError, Result};
use crate::reference::{ConcentrationDensityCurve, ReferenceData};

/// 목표 온도를 감싸는 인접한 두 기준 곡선.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureBracket<'a> {
    pub left: &'a ConcentrationDensityCurve,
    pub right: &'a ConcentrationDensityCurve,
}

impl TemperatureBracket<'_> {
    /// 왼쪽(낮은) 기준 온도.
    pub fn t_left(&self) -> f64 {
        self.left.temperature_c()
    }

    /// 오른쪽(높은) 기준 온도.
    pub fn t_right(&self) -> f64 {
        self.right.temperature_c()
    }
}

/// 온도 T를 감싸는 인접 기준 온도 쌍을 찾는다.
///
/// 오름차순으로 훑어 `t_left ≤ T ≤ t_right`를 만족하는 첫 쌍을 돌려준다.
/// 따라서 T가 기준 온도와 정확히 같으면 그 온도를 오른쪽 끝으로 하는 쌍이 선택되고,
/// 최저 온도에서는 첫 두 곡선, 최고 온도에서는 마지막 두 곡선이 된다.
pub fn find_bracket(data: &ReferenceData, temperature_c: f64) -> Result<TemperatureBracket<'_>> {
    let (min, max) = data.temperature_span();
    if !(temperature_c >= min && temperature_c <= max) {
        return Err(BprError::TemperatureOutOfRange {
            value: temperature_c,
            min,
            max,
        });
    }

    let curves = data.curves();
    let bracket = curves
        .windows(2)
        .find(|pair| {
            temperature_c >= pair[0].temperature_c() && temperature_c <= pair[1].temperature_c()
        })
        .map(|pair| TemperatureBracket {
            left: &pair[0],
            right: &pair[1],
        });

    // 최고 온도 경계는 마지막 두 곡선
    let bracket = match bracket {
        Some(b) => b,
        None => match curves {
            [.., left, right] => TemperatureBracket { left, right },
            _ => {
                return Err(BprError::Lookup(format!(
                    "T={temperature_c:.1}℃를 감싸는 기준 온도가 없습니다"
                )))
            }
        },
    };
    debug!(
        temperature_c,
        t_left = bracket.t_left(),
        t_right = bracket.t_right(),
        "기준 온도 구간 선택"
    );
    Ok(bracket)
}
