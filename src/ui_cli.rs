use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::calculator::{self, MeasurementInput, PartialFailure, ResolvedResult};
use crate::config::Config;
use crate::error::{BprError, Quantity};
use crate::i18n::{keys, Translator};
use crate::reference::ReferenceData;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Ranges,
    Settings,
    Exit,
}

/// 시작 배너를 출력한다.
pub fn print_banner(tr: &Translator) {
    println!("{}", tr.t(keys::APP_TITLE));
    println!("{}", tr.t(keys::APP_NOTE));
    println!("{}", "-".repeat(51));
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator, input: &mut impl BufRead) -> Result<MenuChoice, AppError> {
    println!();
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_RANGES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(input, tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Ranges),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 측정값 세 개를 입력받아 계산하고 결과를 출력한다. 계산 실패는 출력만 하고 넘어간다.
pub fn handle_calculation(
    tr: &Translator,
    data: &ReferenceData,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    let measurement = MeasurementInput {
        temperature_c: read_f64(tr, input, tr.t(keys::PROMPT_TEMPERATURE))?,
        density_g_cm3: read_f64(tr, input, tr.t(keys::PROMPT_DENSITY))?,
        pressure_kpa: read_f64(tr, input, tr.t(keys::PROMPT_PRESSURE))?,
    };
    let outcome = calculator::compute_final(data, &measurement);
    print!("{}", render_outcome(tr, &measurement, &outcome));
    Ok(())
}

/// 참조표 범위를 출력한다.
pub fn handle_ranges(tr: &Translator, data: &ReferenceData) {
    print!("{}", render_ranges(tr, data));
}

/// 언어 설정 메뉴를 처리한다. 변경되면 true.
pub fn handle_settings(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut impl BufRead,
) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        tr.language().as_code()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(input, tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let code = match sel.trim() {
        "" => return Ok(false),
        "1" => "ko",
        "2" => "en",
        "3" => "zh",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    cfg.language = code.to_string();
    println!("{} {code}", tr.t(keys::SETTINGS_SAVED));
    Ok(true)
}

/// 계산 결과(또는 실패)를 출력용 문자열로 만든다.
pub fn render_outcome(
    tr: &Translator,
    input: &MeasurementInput,
    outcome: &Result<ResolvedResult, PartialFailure>,
) -> String {
    let mut out = String::new();
    let rule = "-".repeat(51);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(
        out,
        "{} T={:.1}℃, ρ={:.3} g/cm³, P={:.1}kPa",
        tr.t(keys::RESULT_INPUTS),
        input.temperature_c,
        input.density_g_cm3,
        input.pressure_kpa
    );
    match outcome {
        Ok(r) => {
            let _ = writeln!(out, "{} {:.1}%", tr.t(keys::RESULT_CONCENTRATION), r.concentration);
            let _ = writeln!(
                out,
                "{} {:.1}℃",
                tr.t(keys::RESULT_PURE_WATER_BP),
                r.pure_water_boiling_point_c
            );
            if let Some(t_sat) = r.if97_saturation_c {
                let _ = writeln!(out, "  ({} {t_sat:.2}℃)", tr.t(keys::RESULT_IF97_REFERENCE));
            }
            let _ = writeln!(
                out,
                "{} {:.1}℃",
                tr.t(keys::RESULT_ATMOSPHERIC_BPR),
                r.atmospheric_bpr_c
            );
            let _ = writeln!(
                out,
                "{} {:.4}",
                tr.t(keys::RESULT_CORRECTION_FACTOR),
                r.correction_factor
            );
            let _ = writeln!(out, "{} {:.1}℃", tr.t(keys::RESULT_CORRECTED_BPR), r.corrected_bpr_c);
            let _ = writeln!(
                out,
                "{} {:.1}℃",
                tr.t(keys::RESULT_ACTUAL_BP),
                r.actual_boiling_temperature_c
            );
        }
        Err(failure) => {
            let _ = writeln!(
                out,
                "{} {}",
                tr.t(keys::FAILURE_HEADING),
                describe_error(tr, &failure.error)
            );
            if failure.concentration.is_some() || failure.pure_water_boiling_point_c.is_some() {
                let _ = writeln!(out, "{}", tr.t(keys::FAILURE_PARTIAL));
                if let Some(c) = failure.concentration {
                    let _ = writeln!(out, "  {} {c:.1}%", tr.t(keys::RESULT_CONCENTRATION));
                }
                if let Some(tw) = failure.pure_water_boiling_point_c {
                    let _ = writeln!(out, "  {} {tw:.1}℃", tr.t(keys::RESULT_PURE_WATER_BP));
                }
            }
        }
    }
    let _ = writeln!(out, "{rule}");
    out
}

/// 계산 오류를 화면 언어의 문장으로 만든다.
pub fn describe_error(tr: &Translator, error: &BprError) -> String {
    let range = |key: &str, value: f64, min: f64, max: f64| {
        fill(
            tr.t(key),
            &[
                ("{value}", format!("{value:.1}")),
                ("{min}", format!("{min}")),
                ("{max}", format!("{max}")),
            ],
        )
    };
    match *error {
        BprError::TemperatureOutOfRange { value, min, max } => {
            range(keys::FAILURE_TEMPERATURE_RANGE, value, min, max)
        }
        BprError::PressureOutOfRange { value, min, max } => {
            range(keys::FAILURE_PRESSURE_RANGE, value, min, max)
        }
        BprError::ConcentrationOutOfRange { value, min, max } => {
            range(keys::FAILURE_CONCENTRATION_RANGE, value, min, max)
        }
        BprError::NotFinite { quantity } => {
            let name = match quantity {
                Quantity::Temperature => tr.t(keys::QUANTITY_TEMPERATURE),
                Quantity::Density => tr.t(keys::QUANTITY_DENSITY),
                Quantity::Pressure => tr.t(keys::QUANTITY_PRESSURE),
            };
            fill(tr.t(keys::FAILURE_NOT_FINITE), &[("{quantity}", name.to_string())])
        }
        BprError::Lookup(_) => tr.t(keys::FAILURE_LOOKUP).to_string(),
    }
}

fn fill(template: &str, values: &[(&str, String)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (slot, v)| acc.replace(slot, v))
}

/// 참조표 범위 설명 문자열을 만든다.
pub fn render_ranges(tr: &Translator, data: &ReferenceData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::RANGES_HEADING));
    let temps: Vec<String> = data.temperatures().map(|t| format!("{t}")).collect();
    let _ = writeln!(out, "{} {}", tr.t(keys::RANGES_TEMPERATURES), temps.join(", "));
    let (p_min, p_max) = data.vapor_pressure().supported_kpa();
    let _ = writeln!(out, "{} {p_min}~{p_max}", tr.t(keys::RANGES_PRESSURE));
    let bpr = data.bpr();
    let _ = writeln!(
        out,
        "{} {}~{}",
        tr.t(keys::RANGES_CONCENTRATION),
        bpr.min_concentration,
        bpr.max_concentration
    );
    let _ = writeln!(out, "{}", tr.t(keys::RANGES_DENSITY));
    for curve in data.curves() {
        let (lo, hi) = curve.density_span();
        let _ = writeln!(out, "  {:>5}℃: {lo:.3} ~ {hi:.3}", curve.temperature_c());
    }
    out
}

fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, input: &mut impl BufRead, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(input, prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
