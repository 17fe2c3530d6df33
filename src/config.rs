use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::environment::PhysicalConstants;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// HTTP 서버 바인딩 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// 요청마다 바뀌지 않는 차량/가격 기준값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// 배터리 공칭 용량 [kWh]
    pub nominal_energy_kwh: f64,
    /// 공칭 주행거리 [km]
    pub nominal_autonomy_km: f64,
    /// 분석 주행거리 [km]
    pub reference_distance_km: f64,
    /// 내연기관 환산 기준 소비율. 키가 없으면 전력 소비율을 사용한다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_consumption: Option<f64>,
    /// 연료 단가. 키가 없으면 선택된 연료 레코드의 단가를 사용한다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_price: Option<f64>,
    /// 전력 단가 [통화/kWh]
    pub energy_price: f64,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            nominal_energy_kwh: 81.14,
            nominal_autonomy_km: 200.0,
            reference_distance_km: 20000.0,
            reference_consumption: Some(50.6),
            fuel_price: Some(1.2),
            energy_price: 1.0,
        }
    }
}

impl VehicleConfig {
    /// 선택 키 두 개를 비운 기본값. 설정 파일에서 키가 빠졌을 때의 기준이다.
    pub fn without_overrides() -> Self {
        Self {
            reference_consumption: None,
            fuel_price: None,
            ..Self::default()
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    /// `[vehicle]` 절이 없거나 일부만 있어도 선택 키는 `None`으로 시작한다.
    #[serde(default = "VehicleConfig::without_overrides")]
    pub vehicle: VehicleConfig,
    pub constants: PhysicalConstants,
}

/// `config.toml`을 다루는 중 생길 수 있는 실패.
#[derive(Debug)]
pub enum ConfigError {
    /// 설정 파일을 읽지 못함
    Read { path: PathBuf, source: std::io::Error },
    /// 설정 파일을 쓰지 못함
    Write { path: PathBuf, source: std::io::Error },
    /// TOML 문법 또는 필드 형식이 맞지 않음
    Parse(toml::de::Error),
    /// 기본 설정을 TOML로 만들지 못함
    Encode(toml::ser::Error),
    /// 값은 읽었지만 물리적으로 맞지 않음
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "{}을(를) 읽을 수 없습니다: {source}", path.display())
            }
            ConfigError::Write { path, source } => {
                write!(f, "{}에 기본 설정을 쓸 수 없습니다: {source}", path.display())
            }
            ConfigError::Parse(e) => write!(f, "config.toml 형식 오류: {e}"),
            ConfigError::Encode(e) => write!(f, "기본 설정 생성 실패: {e}"),
            ConfigError::Invalid(msg) => write!(f, "상수 테이블 검증 실패: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } | ConfigError::Write { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Encode(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Encode(value)
    }
}

/// 설정 파일을 읽는다. 파일이 없으면 기본 설정을 그 경로에 만들어 둔다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Config::from_toml(&content)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// TOML 문자열을 파싱하고 상수 테이블을 검증한다. 누락된 항목은 기본값으로 채운다.
    pub fn from_toml(content: &str) -> Result<Config, ConfigError> {
        let cfg: Config = toml::from_str(content)?;
        cfg.constants.validate().map_err(ConfigError::Invalid)?;
        Ok(cfg)
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
