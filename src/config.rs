use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cable::{Arrangement, ConductorType, InstallationMethod, QueryParameters, SelectionPolicy, SpacingClass};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 대화형 입력의 초기값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultQuery {
    pub conductor: ConductorType,
    pub size: String,
    pub method: InstallationMethod,
    pub temperature_c: f64,
    /// 전선관 조수 구간 키
    pub bundle: String,
    pub spacing: SpacingClass,
    pub count: u32,
}

impl Default for DefaultQuery {
    fn default() -> Self {
        Self {
            conductor: ConductorType::Hypalon,
            size: "5.5".into(),
            method: InstallationMethod::Conduit,
            temperature_c: 25.0,
            bundle: "1".into(),
            spacing: SpacingClass::OneDiameter,
            count: 1,
        }
    }
}

impl DefaultQuery {
    /// 저장된 초기값으로 질의 파라미터를 구성한다.
    pub fn to_parameters(&self) -> QueryParameters {
        let arrangement = match self.method {
            InstallationMethod::Conduit => Arrangement::Conduit {
                bundle: self.bundle.clone(),
            },
            InstallationMethod::OpenAirOrDuct => Arrangement::OpenAirOrDuct {
                spacing: self.spacing,
                count: self.count,
            },
        };
        QueryParameters {
            conductor: self.conductor,
            size: self.size.clone(),
            temperature_c: self.temperature_c,
            arrangement,
        }
    }

    /// 마지막 질의를 다음 초기값으로 기억한다.
    pub fn remember(&mut self, params: &QueryParameters) {
        self.conductor = params.conductor;
        self.size = params.size.clone();
        self.temperature_c = params.temperature_c;
        self.method = params.arrangement.method();
        match &params.arrangement {
            Arrangement::Conduit { bundle } => self.bundle = bundle.clone(),
            Arrangement::OpenAirOrDuct { spacing, count } => {
                self.spacing = *spacing;
                self.count = *count;
            }
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto" | "ko" | "en" | "zh-tw"
    pub language: String,
    pub selection_policy: SelectionPolicy,
    pub defaults: DefaultQuery,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            selection_policy: SelectionPolicy::Lenient,
            defaults: DefaultQuery::default(),
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 지정 경로의 설정을 로드하거나 없으면 기본 설정을 그 경로에 생성한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str::<Config>(&content)?
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드한 경로(없으면 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        save_config(self, path)
    }
}
