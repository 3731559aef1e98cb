use std::io::{self, BufRead};

use thiserror::Error;
use tracing::info;

use crate::calculator::{self, MeasurementInput};
use crate::config::{Config, ConfigError};
use crate::error::ReferenceDataError;
use crate::i18n::{self, Translator};
use crate::reference::ReferenceData;
use crate::ui_cli::{self, MenuChoice};

/// 언어팩을 찾는 디렉터리.
pub const LOCALE_DIR: &str = "locales";

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
///
/// 계산 실패는 여기에 속하지 않는다. 화면에 보고한 뒤 다시 입력받는다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/터미널 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 참조 데이터 검증 오류
    #[error("참조 데이터 오류: {0}")]
    Reference(#[from] ReferenceDataError),
    /// 표준 입력이 닫힘
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// CLI 대화형 세션의 메인 루프를 표준 입력으로 실행한다.
pub fn run(config: &mut Config, cli_lang: Option<&str>, data: &ReferenceData) -> Result<(), AppError> {
    run_with_input(config, cli_lang, data, &mut io::stdin().lock())
}

/// 주어진 입력 스트림으로 대화형 세션을 실행한다. 입력이 닫히면 어느 메뉴에서든 정상 종료한다.
pub fn run_with_input(
    config: &mut Config,
    cli_lang: Option<&str>,
    data: &ReferenceData,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    let mut tr = translator_for(config, cli_lang);
    ui_cli::print_banner(&tr);
    loop {
        match run_step(&mut tr, config, data, input) {
            Ok(true) => {}
            Ok(false) | Err(AppError::InputClosed) => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}

/// 메뉴 한 번을 처리한다. 종료를 고르면 `false`.
fn run_step(
    tr: &mut Translator,
    config: &mut Config,
    data: &ReferenceData,
    input: &mut impl BufRead,
) -> Result<bool, AppError> {
    match ui_cli::main_menu(tr, input)? {
        MenuChoice::Calculate => ui_cli::handle_calculation(tr, data, input)?,
        MenuChoice::Ranges => ui_cli::handle_ranges(tr, data),
        MenuChoice::Settings => {
            if ui_cli::handle_settings(tr, config, input)? {
                config.save()?;
                *tr = translator_for(config, None);
                info!(language = %config.language, "화면 언어 변경");
            }
        }
        MenuChoice::Exit => return Ok(false),
    }
    Ok(true)
}

/// 명령행 인자로 측정값이 모두 주어졌을 때 한 번만 계산하고 결과를 출력한다.
///
/// 계산이 실패하면 `false`를 돌려준다.
pub fn run_once(
    config: &Config,
    cli_lang: Option<&str>,
    data: &ReferenceData,
    input: &MeasurementInput,
) -> bool {
    let tr = translator_for(config, cli_lang);
    let outcome = calculator::compute_final(data, input);
    print!("{}", ui_cli::render_outcome(&tr, input, &outcome));
    outcome.is_ok()
}

/// 치명적 오류를 화면 언어의 접두어와 함께 한 줄로 만든다.
pub fn describe_fatal(cli_lang: Option<&str>, err: &AppError) -> String {
    let tr = Translator::new(&i18n::resolve_language(cli_lang, "auto"));
    format!("{} {err}", tr.t(i18n::keys::ERROR_PREFIX))
}

fn translator_for(config: &Config, cli_lang: Option<&str>) -> Translator {
    let lang = i18n::resolve_language(cli_lang, &config.language);
    Translator::new_with_pack(&lang, LOCALE_DIR)
}
