//! 요청 하나에 대한 전체 지표 계산 파이프라인.
//!
//! 연료 선택 → 월 이율 환산 → 이동성 지표 → 수소 생산 지표 순으로 계산하며,
//! 공유 상태 없이 매 요청마다 새로 계산한다.

use serde::Serialize;

use crate::config::VehicleConfig;
use crate::environment::finance;
use crate::environment::hydrogen::{self, HydrogenMetrics};
use crate::environment::mobility::{self, MobilityInput, MobilityMetrics};
use crate::environment::{select_fuel_profile, FuelError, FuelProfile, PhysicalConstants};

/// 요청마다 달라지는 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRequest {
    /// 연간 이율 [%]
    pub annual_rate_percent: f64,
    /// 연료 종류 문자열(대소문자 무시)
    pub fuel: String,
}

impl MetricsRequest {
    pub fn new(annual_rate_percent: f64, fuel: impl Into<String>) -> Self {
        Self {
            annual_rate_percent,
            fuel: fuel.into(),
        }
    }
}

/// 응답으로 내보내는 전체 지표. 키 이름은 기존 API 응답과 동일하게 유지한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub ti_month: f64,
    pub fuel_energy_selector: FuelProfile,
    pub electrical_consumption: f64,
    pub cost_electrical_km: f64,
    pub combustion_consumption: f64,
    pub fuel_consumption: f64,
    pub fuel_efficiency: f64,
    pub fuel_cost_km: f64,
    pub energy_km: f64,
    pub emission_km: f64,
    pub saved_energy: f64,
    pub avoided_emissions: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub young_tree: u64,
    pub old_tree: u64,
    #[serde(rename = "energy_H2_Cylinders")]
    pub energy_h2_cylinders: f64,
    #[serde(rename = "energy_H2_Low_Presure")]
    pub energy_h2_low_pressure: f64,
    pub energy_consumed: f64,
    pub hydrogen_mass: f64,
    #[serde(rename = "liters_reqired")]
    pub liters_required: f64,
}

impl MetricsReport {
    fn assemble(
        ti_month: f64,
        fuel: FuelProfile,
        m: MobilityMetrics,
        h: HydrogenMetrics,
    ) -> Self {
        Self {
            ti_month,
            fuel_energy_selector: fuel,
            electrical_consumption: m.electrical_consumption,
            cost_electrical_km: m.cost_electrical_km,
            combustion_consumption: m.combustion_consumption,
            fuel_consumption: m.fuel_consumption,
            fuel_efficiency: m.fuel_efficiency,
            fuel_cost_km: m.fuel_cost_km,
            energy_km: m.energy_km,
            emission_km: m.emission_km,
            saved_energy: m.saved_energy,
            avoided_emissions: m.avoided_emissions,
            monthly_savings: m.monthly_savings,
            annual_savings: m.annual_savings,
            young_tree: m.young_tree,
            old_tree: m.old_tree,
            energy_h2_cylinders: h.energy_h2_cylinders,
            energy_h2_low_pressure: h.energy_h2_low_pressure,
            energy_consumed: h.energy_consumed,
            hydrogen_mass: h.hydrogen_mass,
            liters_required: h.liters_required,
        }
    }

    /// 실수 필드를 (응답 키, 값) 순서대로 나열한다.
    pub fn float_fields(&self) -> [(&'static str, f64); 21] {
        [
            ("ti_month", self.ti_month),
            ("fuel_price", self.fuel_energy_selector.fuel_price),
            ("fuel_energy", self.fuel_energy_selector.fuel_energy),
            ("emision_factor", self.fuel_energy_selector.emission_factor),
            ("electrical_consumption", self.electrical_consumption),
            ("cost_electrical_km", self.cost_electrical_km),
            ("combustion_consumption", self.combustion_consumption),
            ("fuel_consumption", self.fuel_consumption),
            ("fuel_efficiency", self.fuel_efficiency),
            ("fuel_cost_km", self.fuel_cost_km),
            ("energy_km", self.energy_km),
            ("emission_km", self.emission_km),
            ("saved_energy", self.saved_energy),
            ("avoided_emissions", self.avoided_emissions),
            ("monthly_savings", self.monthly_savings),
            ("annual_savings", self.annual_savings),
            ("energy_H2_Cylinders", self.energy_h2_cylinders),
            ("energy_H2_Low_Presure", self.energy_h2_low_pressure),
            ("energy_consumed", self.energy_consumed),
            ("hydrogen_mass", self.hydrogen_mass),
            ("liters_reqired", self.liters_required),
        ]
    }
}

/// 파이프라인 실행 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// 연료 선택 실패
    Fuel(FuelError),
    /// 계산 결과가 유한한 값이 아님
    NonFinite { field: &'static str, value: f64 },
}

impl PipelineError {
    /// 응답 상태 코드.
    pub fn code(&self) -> u16 {
        match self {
            PipelineError::Fuel(e) => e.code(),
            PipelineError::NonFinite { .. } => 500,
        }
    }
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Fuel(e) => write!(f, "연료 선택 오류: {e}"),
            PipelineError::NonFinite { field, value } => {
                write!(f, "계산 오류: {field} 값이 유한하지 않습니다 ({value})")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<FuelError> for PipelineError {
    fn from(value: FuelError) -> Self {
        PipelineError::Fuel(value)
    }
}

/// 상수 테이블과 차량 기준값을 묶은 계산기. 생성 후에는 읽기 전용이다.
#[derive(Debug, Clone, Default)]
pub struct MetricsPipeline {
    constants: PhysicalConstants,
    vehicle: VehicleConfig,
}

impl MetricsPipeline {
    pub fn new(constants: PhysicalConstants, vehicle: VehicleConfig) -> Self {
        Self { constants, vehicle }
    }

    /// 전체 지표를 계산한다. 연료가 인식되지 않으면 어떤 계산도 하지 않고 실패한다.
    pub fn compute(&self, request: &MetricsRequest) -> Result<MetricsReport, PipelineError> {
        let fuel = select_fuel_profile(&request.fuel)?;
        let ti_month = finance::monthly_rate_from_annual(request.annual_rate_percent);

        let v = &self.vehicle;
        let mobility = mobility::compute_mobility(
            &self.constants,
            &MobilityInput {
                nominal_energy_kwh: v.nominal_energy_kwh,
                nominal_autonomy_km: v.nominal_autonomy_km,
                reference_consumption: v.reference_consumption,
                distance_km: v.reference_distance_km,
                fuel_price: v.fuel_price.unwrap_or(fuel.fuel_price),
                energy_price: v.energy_price,
                fuel,
                monthly_rate: ti_month,
            },
        );
        let hydrogen = hydrogen::compute_hydrogen(&self.constants, v.nominal_energy_kwh);

        let report = MetricsReport::assemble(ti_month, fuel, mobility, hydrogen);
        if let Some((field, value)) = report
            .float_fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(PipelineError::NonFinite { field, value });
        }
        Ok(report)
    }
}
