//! 대화형 세션이 입력 스트림 종료를 어느 메뉴에서든 정상 종료로 처리하는지 확인한다.
use std::io::Cursor;

use cobalt_sulfate_bpr::app::{self, AppError};
use cobalt_sulfate_bpr::config::Config;
use cobalt_sulfate_bpr::reference::ReferenceData;

fn run(script: &str) -> Result<(), AppError> {
    let data = ReferenceData::standard().expect("built-in tables");
    let mut config = Config::default();
    app::run_with_input(&mut config, Some("en"), &data, &mut Cursor::new(script))
}

#[test]
fn closed_input_at_main_menu_exits_cleanly() {
    assert!(run("").is_ok());
}

#[test]
fn closed_input_at_settings_prompt_exits_cleanly() {
    assert!(run("3\n").is_ok());
}

#[test]
fn closed_input_mid_calculation_exits_cleanly() {
    assert!(run("1\n48\n1.49\n").is_ok());
}

#[test]
fn full_session_then_exit() {
    assert!(run("1\nabc\n48\n1.490\n15\n2\n9\n0\n").is_ok());
}

#[test]
fn fatal_errors_use_the_screen_language_prefix() {
    assert!(app::describe_fatal(Some("en"), &AppError::InputClosed).starts_with("Error: "));
    assert!(app::describe_fatal(Some("zh"), &AppError::InputClosed).starts_with("错误："));
}
