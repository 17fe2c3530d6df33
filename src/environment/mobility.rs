use serde::Serialize;

use super::constants::PhysicalConstants;
use super::finance;
use super::fuel::FuelProfile;

/// 전기차 전력 소비율 [kWh/km]. 배터리 가용 용량 비율을 반영한 주행거리로 나눈다.
pub fn electrical_consumption(
    k: &PhysicalConstants,
    nominal_energy_kwh: f64,
    nominal_autonomy_km: f64,
) -> f64 {
    nominal_energy_kwh / (nominal_autonomy_km * k.usable_capacity_fraction)
}

/// 전기차 km당 비용.
pub fn cost_electrical_km(consumption_kwh_km: f64, energy_price: f64) -> f64 {
    consumption_kwh_km * energy_price
}

/// 전력 소비율을 동등한 내연기관 에너지 소비율 [kWh/km]로 환산한다.
pub fn combustion_consumption(k: &PhysicalConstants, consumption_kwh_km: f64) -> f64 {
    // 나눗셈 순서를 바꾸면 마지막 자릿수가 달라진다
    consumption_kwh_km / k.charging_efficiency / k.engine_efficiency
}

/// 연료 소비율 [gal/km].
pub fn fuel_consumption(combustion_kwh_km: f64, fuel_energy_kwh: f64) -> f64 {
    combustion_kwh_km / fuel_energy_kwh
}

/// 연비 [km/gal].
pub fn fuel_efficiency(fuel_consumption: f64) -> f64 {
    1.0 / fuel_consumption
}

pub fn fuel_cost_km(fuel_price: f64, fuel_consumption: f64) -> f64 {
    fuel_price * fuel_consumption
}

/// km당 에너지 [J/km].
pub fn energy_km(k: &PhysicalConstants, combustion_kwh_km: f64) -> f64 {
    combustion_kwh_km * k.joules_per_kwh
}

/// km당 배출량 [kg CO2/km]. 배출계수는 kWh 기준이므로 J을 kWh로 되돌린다.
pub fn emission_km(k: &PhysicalConstants, emission_factor: f64, energy_j_km: f64) -> f64 {
    emission_factor * energy_j_km / k.joules_per_kwh
}

/// 주행거리 동안 절약한 에너지 [kWh]. 전기차 소비가 더 크면 음수가 된다.
pub fn saved_energy(combustion_kwh_km: f64, electrical_kwh_km: f64, distance_km: f64) -> f64 {
    (combustion_kwh_km - electrical_kwh_km) * distance_km
}

/// 주행거리 동안 회피한 배출량 [kg CO2].
pub fn avoided_emissions(emission_km: f64, distance_km: f64) -> f64 {
    emission_km * distance_km
}

/// 회피 배출량을 상쇄하는 어린 나무 수.
pub fn young_tree(k: &PhysicalConstants, avoided_emissions_kg: f64) -> u64 {
    tree_count(avoided_emissions_kg, k.young_tree_absorption_kg)
}

/// 회피 배출량을 상쇄하는 성목 수.
pub fn old_tree(k: &PhysicalConstants, avoided_emissions_kg: f64) -> u64 {
    tree_count(avoided_emissions_kg, k.old_tree_absorption_kg)
}

fn tree_count(avoided_emissions_kg: f64, absorption_kg: f64) -> u64 {
    if absorption_kg <= 0.0 {
        return 0;
    }
    // NaN은 `as` 변환에서 0이 된다
    (avoided_emissions_kg.max(0.0) / absorption_kg).floor() as u64
}

/// 이동성 지표 계산 입력.
#[derive(Debug, Clone)]
pub struct MobilityInput {
    /// 배터리 공칭 용량 [kWh]
    pub nominal_energy_kwh: f64,
    /// 공칭 주행거리 [km]
    pub nominal_autonomy_km: f64,
    /// 내연기관 환산에 사용할 기준 소비율. None이면 전력 소비율을 사용한다.
    pub reference_consumption: Option<f64>,
    /// 분석 주행거리 [km]
    pub distance_km: f64,
    /// 연료 단가
    pub fuel_price: f64,
    /// 전력 단가
    pub energy_price: f64,
    /// 선택된 연료 레코드
    pub fuel: FuelProfile,
    /// 월 이율(소수)
    pub monthly_rate: f64,
}

/// 이동성 지표 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MobilityMetrics {
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
}

/// 전기차 대비 내연기관 지표를 순서대로 계산한다.
pub fn compute_mobility(k: &PhysicalConstants, input: &MobilityInput) -> MobilityMetrics {
    let electrical =
        electrical_consumption(k, input.nominal_energy_kwh, input.nominal_autonomy_km);
    let cost_electrical = cost_electrical_km(electrical, input.energy_price);
    let combustion =
        combustion_consumption(k, input.reference_consumption.unwrap_or(electrical));
    let fuel = fuel_consumption(combustion, input.fuel.fuel_energy);
    let efficiency = fuel_efficiency(fuel);
    let fuel_cost = fuel_cost_km(input.fuel_price, fuel);
    let energy = energy_km(k, combustion);
    let emission = emission_km(k, input.fuel.emission_factor, energy);
    let saved = saved_energy(combustion, electrical, input.distance_km);
    let avoided = avoided_emissions(emission, input.distance_km);
    let monthly = finance::monthly_savings(fuel_cost, cost_electrical, input.distance_km);
    let annual = finance::annual_savings(monthly, input.monthly_rate);

    MobilityMetrics {
        electrical_consumption: electrical,
        cost_electrical_km: cost_electrical,
        combustion_consumption: combustion,
        fuel_consumption: fuel,
        fuel_efficiency: efficiency,
        fuel_cost_km: fuel_cost,
        energy_km: energy,
        emission_km: emission,
        saved_energy: saved,
        avoided_emissions: avoided,
        monthly_savings: monthly,
        annual_savings: annual,
        young_tree: young_tree(k, avoided),
        old_tree: old_tree(k, avoided),
    }
}
