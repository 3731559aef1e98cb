use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_NOTE: &str = "general.app_note";

    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_RANGES: &str = "main_menu.ranges";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const PROMPT_TEMPERATURE: &str = "prompt.temperature";
    pub const PROMPT_DENSITY: &str = "prompt.density";
    pub const PROMPT_PRESSURE: &str = "prompt.pressure";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const RESULT_INPUTS: &str = "result.inputs";
    pub const RESULT_CONCENTRATION: &str = "result.concentration";
    pub const RESULT_PURE_WATER_BP: &str = "result.pure_water_bp";
    pub const RESULT_ATMOSPHERIC_BPR: &str = "result.atmospheric_bpr";
    pub const RESULT_CORRECTION_FACTOR: &str = "result.correction_factor";
    pub const RESULT_CORRECTED_BPR: &str = "result.corrected_bpr";
    pub const RESULT_ACTUAL_BP: &str = "result.actual_bp";
    pub const RESULT_IF97_REFERENCE: &str = "result.if97_reference";

    pub const FAILURE_HEADING: &str = "failure.heading";
    pub const FAILURE_PARTIAL: &str = "failure.partial";
    // {value} {min} {max} {quantity} 자리표시자를 쓴다
    pub const FAILURE_TEMPERATURE_RANGE: &str = "failure.temperature_range";
    pub const FAILURE_PRESSURE_RANGE: &str = "failure.pressure_range";
    pub const FAILURE_CONCENTRATION_RANGE: &str = "failure.concentration_range";
    pub const FAILURE_NOT_FINITE: &str = "failure.not_finite";
    pub const FAILURE_LOOKUP: &str = "failure.lookup";
    pub const QUANTITY_TEMPERATURE: &str = "quantity.temperature";
    pub const QUANTITY_DENSITY: &str = "quantity.density";
    pub const QUANTITY_PRESSURE: &str = "quantity.pressure";

    pub const RANGES_HEADING: &str = "ranges.heading";
    pub const RANGES_TEMPERATURES: &str = "ranges.temperatures";
    pub const RANGES_PRESSURE: &str = "ranges.pressure";
    pub const RANGES_CONCENTRATION: &str = "ranges.concentration";
    pub const RANGES_DENSITY: &str = "ranges.density";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Zh,
}

impl Language {
    /// "ko", "en-US", "zh_CN.UTF-8" 같은 코드에서 언어를 읽는다. "auto"나 미지원 언어는 `None`.
    pub fn parse(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['.', '_', '-'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "ko" | "kor" => Some(Language::Ko),
            "en" | "eng" => Some(Language::En),
            "zh" | "zho" | "chi" => Some(Language::Zh),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/zh)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::parse(lang_code).unwrap_or(Language::En),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: &str) -> Self {
        Self {
            lang: Language::parse(lang_code).unwrap_or(Language::En),
            overrides: load_overrides(pack_dir, lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 내장 언어 → 영어 → 키 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        let built_in = match self.lang {
            Language::Ko => ko(key),
            Language::Zh => zh(key),
            Language::En => None,
        };
        built_in.or_else(|| en(key)).unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다. 모두 없으면 en.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: &str) -> String {
    [cli_arg, Some(config_lang)]
        .into_iter()
        .flatten()
        .find_map(Language::parse)
        .or_else(detect_system_language)
        .unwrap_or(Language::En)
        .as_code()
        .to_string()
}

/// 시스템 로케일(없으면 LC_ALL, LANG 환경 변수)에서 언어를 추정한다.
pub fn detect_system_language() -> Option<Language> {
    get_locale()
        .into_iter()
        .chain(
            ["LC_ALL", "LANG"]
                .iter()
                .filter_map(|var| std::env::var(var).ok()),
        )
        .find_map(|loc| Language::parse(&loc))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

/// 중첩 테이블을 "section.key" 형태의 평면 맵으로 펼친다. 문자열이 아닌 값은 무시한다.
fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let root: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();
    let mut pending: Vec<(String, toml::Value)> = root.into_iter().collect();
    while let Some((key, value)) = pending.pop() {
        match value {
            toml::Value::String(text) => {
                map.insert(key, text);
            }
            toml::Value::Table(table) => {
                pending.extend(table.into_iter().map(|(k, v)| (format!("{key}.{k}"), v)));
            }
            _ => {}
        }
    }
    (!map.is_empty()).then_some(map)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류:",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "=== 고농도 황산코발트 용액 극저진공(8~28kPa) BPR 계산기 ===",
        APP_NOTE => "측정 온도는 20~100℃ 임의 값, 밀도는 고농도 구간(1.330~1.599 g/cm³)을 지원합니다.",
        MAIN_MENU_CALCULATE => "1) BPR·실제 비점 계산",
        MAIN_MENU_RANGES => "2) 참조표 범위 보기",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CALC_HEADING => "\n-- BPR 계산 --",
        PROMPT_TEMPERATURE => "측정 온도(℃): ",
        PROMPT_DENSITY => "측정 밀도(g/cm³): ",
        PROMPT_PRESSURE => "공정 압력(kPa): ",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        RESULT_INPUTS => "입력값:",
        RESULT_CONCENTRATION => "역산 농도(온도+밀도 이중 보간):",
        RESULT_PURE_WATER_BP => "순수 물 비점(증기압표):",
        RESULT_ATMOSPHERIC_BPR => "상압 BPR:",
        RESULT_CORRECTION_FACTOR => "저진공 보정계수 K:",
        RESULT_CORRECTED_BPR => "극저진공 BPR:",
        RESULT_ACTUAL_BP => "용액 실제 비점(공정 온도):",
        RESULT_IF97_REFERENCE => "참고: IF97 포화 온도",
        FAILURE_HEADING => "계산 실패:",
        FAILURE_PARTIAL => "실패 전까지 계산된 값:",
        FAILURE_TEMPERATURE_RANGE => "온도는 {min}~{max}℃만 지원합니다. 현재 T={value}℃",
        FAILURE_PRESSURE_RANGE => "압력은 {min}~{max}kPa(극저진공)만 지원합니다. 현재 P={value}kPa",
        FAILURE_CONCENTRATION_RANGE => "고농도 구간({min}%~{max}%)만 지원합니다. 현재 농도 {value}%",
        FAILURE_NOT_FINITE => "{quantity} 값이 유한한 숫자가 아닙니다.",
        FAILURE_LOOKUP => "참조표에서 보간 구간을 찾지 못했습니다. 입력값을 확인하세요.",
        QUANTITY_TEMPERATURE => "온도",
        QUANTITY_DENSITY => "밀도",
        QUANTITY_PRESSURE => "압력",
        RANGES_HEADING => "\n-- 참조표 범위 --",
        RANGES_TEMPERATURES => "밀도표 기준 온도(℃):",
        RANGES_PRESSURE => "허용 압력(kPa):",
        RANGES_CONCENTRATION => "BPR 상관식 농도 범위(%):",
        RANGES_DENSITY => "기준 온도별 밀도 범위(g/cm³):",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) 中文",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error:",
        APP_EXIT => "Exiting.",
        APP_TITLE => "=== High-concentration cobalt sulfate BPR calculator (low vacuum 8~28 kPa) ===",
        APP_NOTE => "Measured temperature may be any value in 20~100 °C; density covers the high-concentration band (1.330~1.599 g/cm³).",
        MAIN_MENU_CALCULATE => "1) Compute BPR and boiling temperature",
        MAIN_MENU_RANGES => "2) Show reference ranges",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CALC_HEADING => "\n-- BPR calculation --",
        PROMPT_TEMPERATURE => "Measured temperature (°C): ",
        PROMPT_DENSITY => "Measured density (g/cm³): ",
        PROMPT_PRESSURE => "Process pressure (kPa): ",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        RESULT_INPUTS => "Inputs:",
        RESULT_CONCENTRATION => "Concentration (temperature + density interpolation):",
        RESULT_PURE_WATER_BP => "Pure-water boiling point (vapor-pressure table):",
        RESULT_ATMOSPHERIC_BPR => "Atmospheric BPR:",
        RESULT_CORRECTION_FACTOR => "Low-vacuum correction K:",
        RESULT_CORRECTED_BPR => "Low-vacuum BPR:",
        RESULT_ACTUAL_BP => "Actual solution boiling temperature:",
        RESULT_IF97_REFERENCE => "Reference: IF97 saturation temperature",
        FAILURE_HEADING => "Calculation failed:",
        FAILURE_PARTIAL => "Values computed before the failure:",
        FAILURE_TEMPERATURE_RANGE => "Temperature must be within {min}~{max} °C. Got T={value} °C",
        FAILURE_PRESSURE_RANGE => "Pressure must be within {min}~{max} kPa (low vacuum). Got P={value} kPa",
        FAILURE_CONCENTRATION_RANGE => "Only the high-concentration band ({min}%~{max}%) is supported. Got {value}%",
        FAILURE_NOT_FINITE => "The {quantity} value is not a finite number.",
        FAILURE_LOOKUP => "No interpolation interval found in the reference tables. Check the inputs.",
        QUANTITY_TEMPERATURE => "temperature",
        QUANTITY_DENSITY => "density",
        QUANTITY_PRESSURE => "pressure",
        RANGES_HEADING => "\n-- Reference ranges --",
        RANGES_TEMPERATURES => "Density-table temperatures (°C):",
        RANGES_PRESSURE => "Supported pressure (kPa):",
        RANGES_CONCENTRATION => "BPR correlation concentration band (%):",
        RANGES_DENSITY => "Density span per reference temperature (g/cm³):",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) 中文",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        _ => return None,
    })
}

fn zh(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "错误：",
        APP_EXIT => "程序退出。",
        APP_TITLE => "=== 高浓度硫酸钴极低负压（8~28kPa）BPR计算工具 ===",
        APP_NOTE => "注：实测温度支持20~100℃任意值，密度支持高浓度对应范围（1.330~1.599 g/cm³）",
        MAIN_MENU_CALCULATE => "1) 计算BPR与实际沸点",
        MAIN_MENU_RANGES => "2) 查看参考表范围",
        MAIN_MENU_SETTINGS => "3) 设置",
        MAIN_MENU_EXIT => "0) 退出",
        PROMPT_MENU_SELECT => "请选择菜单：",
        INVALID_SELECTION_RETRY => "输入无效，请重新选择。",
        CALC_HEADING => "\n-- BPR计算 --",
        PROMPT_TEMPERATURE => "请输入实测温度（℃）：",
        PROMPT_DENSITY => "请输入实测密度（g/cm³）：",
        PROMPT_PRESSURE => "请输入工艺压力（kPa）：",
        ERROR_INVALID_NUMBER => "输入格式错误，请输入数字",
        RESULT_INPUTS => "输入：",
        RESULT_CONCENTRATION => "反查浓度（温度+密度双插值）：",
        RESULT_PURE_WATER_BP => "纯水沸点（蒸气压表）：",
        RESULT_ATMOSPHERIC_BPR => "常压BPR：",
        RESULT_CORRECTION_FACTOR => "负压修正系数K：",
        RESULT_CORRECTED_BPR => "极低负压BPR：",
        RESULT_ACTUAL_BP => "溶液实际沸点（工艺温度）：",
        RESULT_IF97_REFERENCE => "参考：IF97饱和温度",
        FAILURE_HEADING => "计算失败：",
        FAILURE_PARTIAL => "失败前已计算的值：",
        FAILURE_TEMPERATURE_RANGE => "温度仅支持{min}~{max}℃，当前T={value}℃",
        FAILURE_PRESSURE_RANGE => "压力仅支持{min}~{max}kPa（极低真空），当前P={value}kPa",
        FAILURE_CONCENTRATION_RANGE => "仅支持高浓度区间（{min}%~{max}%），当前浓度{value}%",
        FAILURE_NOT_FINITE => "{quantity}不是有效的有限数值。",
        FAILURE_LOOKUP => "参考表中找不到插值区间，请检查输入值。",
        QUANTITY_TEMPERATURE => "温度",
        QUANTITY_DENSITY => "密度",
        QUANTITY_PRESSURE => "压力",
        RANGES_HEADING => "\n-- 参考表范围 --",
        RANGES_TEMPERATURES => "密度表温度（℃）：",
        RANGES_PRESSURE => "支持压力（kPa）：",
        RANGES_CONCENTRATION => "BPR关联式浓度范围（%）：",
        RANGES_DENSITY => "各温度密度范围（g/cm³）：",
        SETTINGS_HEADING => "\n-- 设置 --",
        SETTINGS_CURRENT_LANGUAGE => "当前语言：",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) 中文",
        SETTINGS_PROMPT_CHANGE => "输入编号（回车取消）：",
        SETTINGS_INVALID => "输入无效，语言未更改。",
        SETTINGS_SAVED => "语言已更改为：",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("zh-CN"), "ko"), "zh");
        assert_eq!(resolve_language(None, "ko-KR"), "ko");
        assert_eq!(resolve_language(Some("auto"), "en"), "en");
    }

    #[test]
    fn locale_strings_are_reduced_to_primary_language() {
        assert_eq!(Language::parse("zh_CN.UTF-8"), Some(Language::Zh));
        assert_eq!(Language::parse(" KO-kr "), Some(Language::Ko));
        assert_eq!(Language::parse("auto"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn unknown_code_falls_back_to_english_strings() {
        let tr = Translator::new("fr");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Error:");
    }

    #[test]
    fn every_key_has_english_text() {
        use keys::*;
        let all = [
            ERROR_PREFIX, APP_EXIT, APP_TITLE, APP_NOTE, MAIN_MENU_CALCULATE, MAIN_MENU_RANGES,
            MAIN_MENU_SETTINGS, MAIN_MENU_EXIT, PROMPT_MENU_SELECT, INVALID_SELECTION_RETRY,
            CALC_HEADING, PROMPT_TEMPERATURE, PROMPT_DENSITY, PROMPT_PRESSURE,
            ERROR_INVALID_NUMBER, RESULT_INPUTS, RESULT_CONCENTRATION, RESULT_PURE_WATER_BP,
            RESULT_ATMOSPHERIC_BPR, RESULT_CORRECTION_FACTOR, RESULT_CORRECTED_BPR,
            RESULT_ACTUAL_BP, RESULT_IF97_REFERENCE, FAILURE_HEADING, FAILURE_PARTIAL,
            FAILURE_TEMPERATURE_RANGE, FAILURE_PRESSURE_RANGE, FAILURE_CONCENTRATION_RANGE,
            FAILURE_NOT_FINITE, FAILURE_LOOKUP, QUANTITY_TEMPERATURE, QUANTITY_DENSITY,
            QUANTITY_PRESSURE,
            RANGES_HEADING, RANGES_TEMPERATURES, RANGES_PRESSURE, RANGES_CONCENTRATION,
            RANGES_DENSITY, SETTINGS_HEADING, SETTINGS_CURRENT_LANGUAGE, SETTINGS_OPTIONS,
            SETTINGS_PROMPT_CHANGE, SETTINGS_INVALID, SETTINGS_SAVED,
        ];
        for key in all {
            assert!(en(key).is_some(), "missing en text for {key}");
            assert!(ko(key).is_some(), "missing ko text for {key}");
            assert!(zh(key).is_some(), "missing zh text for {key}");
        }
    }

    #[test]
    fn pack_overrides_built_in_text() {
        let map = parse_toml_to_map("[result]\nconcentration = \"C =\"").unwrap();
        let tr = Translator {
            lang: Language::Ko,
            overrides: Some(map),
        };
        assert_eq!(tr.t(keys::RESULT_CONCENTRATION), "C =");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "오류:");
    }
}
