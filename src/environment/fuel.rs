use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 지원하는 내연기관 연료 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Diesel => "diesel",
        }
    }

    /// 연료별 기준 물성/가격 레코드.
    pub fn profile(&self) -> FuelProfile {
        match self {
            FuelType::Gasoline => FuelProfile {
                fuel_price: 16700.0,
                fuel_energy: 33.7,
                emission_factor: 0.249,
            },
            FuelType::Diesel => FuelProfile {
                fuel_price: 11795.0,
                fuel_energy: 40.7,
                emission_factor: 0.267,
            },
        }
    }
}

impl FromStr for FuelType {
    type Err = FuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gasoline" => Ok(FuelType::Gasoline),
            "diesel" => Ok(FuelType::Diesel),
            _ => Err(FuelError::UnknownFuel(s.to_string())),
        }
    }
}

/// 연료 기준 레코드.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelProfile {
    /// 연료 단가 [통화 / gal]
    pub fuel_price: f64,
    /// 연료 발열량 [kWh / gal]
    pub fuel_energy: f64,
    /// 배출계수 [kg CO2 / kWh]
    #[serde(rename = "emision_factor")]
    pub emission_factor: f64,
}

/// 연료 선택 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuelError {
    /// 알 수 없는 연료 문자열
    UnknownFuel(String),
}

impl FuelError {
    /// 응답에 실어 보낼 오류 코드.
    pub fn code(&self) -> u16 {
        match self {
            FuelError::UnknownFuel(_) => 500,
        }
    }
}

impl std::fmt::Display for FuelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FuelError::UnknownFuel(s) => write!(f, "알 수 없는 연료 유형: '{s}'"),
        }
    }
}

impl std::error::Error for FuelError {}

/// 연료 문자열(대소문자 무시)로 기준 레코드를 선택한다.
pub fn select_fuel_profile(fuel: &str) -> Result<FuelProfile, FuelError> {
    fuel.parse::<FuelType>().map(|t| t.profile())
}
