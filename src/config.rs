use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정. 화면 언어와 로그 수준만 다루며 계산 상수는 포함하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 화면 언어 (auto/ko/en/zh)
    pub language: String,
    /// 로그 최대 수준 (error/warn/info/debug/trace)
    pub log_level: String,
    #[serde(skip)]
    path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            log_level: "warn".to_string(),
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나, 없으면 기본 설정을 만들어 저장한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.path = path.to_path_buf();
        Ok(cfg)
    } else {
        let cfg = Config {
            path: path.to_path_buf(),
            ..Config::default()
        };
        cfg.save()?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 로드한 파일에 다시 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = toml::from_str("language = \"zh\"").unwrap();
        assert_eq!(cfg.language, "zh");
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn creates_file_when_missing_and_reloads_it() {
        let dir = std::env::temp_dir().join(format!("cobalt_bpr_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let mut cfg = load_or_default(&path).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.language, "auto");

        cfg.language = "en".into();
        cfg.save().unwrap();
        let reloaded = load_or_default(&path).unwrap();
        assert_eq!(reloaded.language, "en");

        fs::remove_dir_all(&dir).unwrap();
    }
}
