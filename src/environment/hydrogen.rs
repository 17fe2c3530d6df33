use serde::Serialize;

use super::constants::PhysicalConstants;

/// 공칭 에너지를 실린더 저장/연료전지 효율로 나눠 필요한 수소 에너지 [kWh]를 구한다.
pub fn energy_h2_cylinders(k: &PhysicalConstants, nominal_energy_kwh: f64) -> f64 {
    nominal_energy_kwh / k.cylinder_storage_efficiency
}

/// 저압 저장 단계에서 필요한 에너지 [kWh]. 압축 손실을 더한다.
pub fn energy_h2_low_pressure(k: &PhysicalConstants, cylinder_energy_kwh: f64) -> f64 {
    cylinder_energy_kwh / k.low_pressure_efficiency
}

/// 수전해에 투입해야 하는 전력량 [kWh].
pub fn energy_consumed(k: &PhysicalConstants, low_pressure_energy_kwh: f64) -> f64 {
    low_pressure_energy_kwh / k.electrolysis_efficiency
}

/// 저장 에너지를 수소 질량 [kg]으로 환산한다.
pub fn hydrogen_mass(k: &PhysicalConstants, low_pressure_energy_kwh: f64) -> f64 {
    low_pressure_energy_kwh / k.hydrogen_energy_kwh_per_kg
}

/// 수소 질량을 얻기 위해 전기분해할 물 [L].
pub fn liters_required(k: &PhysicalConstants, hydrogen_mass_kg: f64) -> f64 {
    hydrogen_mass_kg * k.water_liters_per_kg_h2
}

/// 수소 생산 지표 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HydrogenMetrics {
    pub energy_h2_cylinders: f64,
    pub energy_h2_low_pressure: f64,
    pub energy_consumed: f64,
    pub hydrogen_mass: f64,
    pub liters_required: f64,
}

/// 공칭 에너지 하나로 수소 생산 체인을 계산한다.
pub fn compute_hydrogen(k: &PhysicalConstants, nominal_energy_kwh: f64) -> HydrogenMetrics {
    let cylinders = energy_h2_cylinders(k, nominal_energy_kwh);
    let low_pressure = energy_h2_low_pressure(k, cylinders);
    let mass = hydrogen_mass(k, low_pressure);
    HydrogenMetrics {
        energy_h2_cylinders: cylinders,
        energy_h2_low_pressure: low_pressure,
        energy_consumed: energy_consumed(k, low_pressure),
        hydrogen_mass: mass,
        liters_required: liters_required(k, mass),
    }
}
