use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cobalt_sulfate_bpr::calculator::MeasurementInput;
use cobalt_sulfate_bpr::reference::ReferenceData;
use cobalt_sulfate_bpr::{app, config};

#[derive(Parser)]
#[command(name = "cobalt_sulfate_bpr")]
#[command(
    about = "고농도 황산코발트 용액의 극저진공 BPR·실제 비점 계산기",
    long_about = None
)]
struct Cli {
    /// 측정 온도(℃). 세 측정값을 모두 주면 한 번만 계산하고 종료한다.
    #[arg(short, long, requires_all = ["density", "pressure"])]
    temperature: Option<f64>,
    /// 측정 밀도(g/cm³)
    #[arg(short, long, requires_all = ["temperature", "pressure"])]
    density: Option<f64>,
    /// 공정 압력(kPa, 절대)
    #[arg(short, long, requires_all = ["temperature", "density"])]
    pressure: Option<f64>,
    /// 화면 언어 (auto/ko/en/zh)
    #[arg(long)]
    lang: Option<String>,
    /// 로그 수준 (error/warn/info/debug/trace). 설정 파일 값보다 우선한다.
    #[arg(long)]
    log_level: Option<String>,
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

/// 프로그램의 엔트리 포인트. 설정과 참조 데이터를 로드한 뒤 계산기를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let lang = cli.lang.clone();
    match try_run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", app::describe_fatal(lang.as_deref(), &err));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<ExitCode, app::AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&cfg.log_level));

    let data = ReferenceData::standard()?;
    let lang = cli.lang.as_deref();

    if let (Some(temperature_c), Some(density_g_cm3), Some(pressure_kpa)) =
        (cli.temperature, cli.density, cli.pressure)
    {
        let input = MeasurementInput {
            temperature_c,
            density_g_cm3,
            pressure_kpa,
        };
        let ok = app::run_once(&cfg, lang, &data, &input);
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    app::run(&mut cfg, lang, &data)?;
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(level: &str) {
    let level = level
        .trim()
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
