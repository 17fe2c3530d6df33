use serde::{Deserialize, Serialize};

/// 계산 파이프라인이 사용하는 물리/재무 상수 테이블.
///
/// 모든 값은 config.toml의 `[constants]` 섹션에서 덮어쓸 수 있으며,
/// 누락된 항목은 기본값을 사용한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// 배터리 가용 용량 비율(0~1)
    pub usable_capacity_fraction: f64,
    /// 충전 효율(계통 → 배터리)
    pub charging_efficiency: f64,
    /// 내연기관 열효율
    pub engine_efficiency: f64,
    /// kWh → J 환산 계수
    pub joules_per_kwh: f64,
    /// 어린 나무 1그루의 CO2 흡수량 [kg]
    pub young_tree_absorption_kg: f64,
    /// 성목 1그루의 CO2 흡수량 [kg]
    pub old_tree_absorption_kg: f64,
    /// 실린더 저장 + 연료전지 효율
    pub cylinder_storage_efficiency: f64,
    /// 저압 저장 시 압축 손실을 반영한 효율
    pub low_pressure_efficiency: f64,
    /// 수전해 효율
    pub electrolysis_efficiency: f64,
    /// 수소 저위발열량 [kWh/kg]
    pub hydrogen_energy_kwh_per_kg: f64,
    /// 수소 1kg 생산에 필요한 물 [L]
    pub water_liters_per_kg_h2: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            usable_capacity_fraction: 0.9,
            charging_efficiency: 0.9,
            engine_efficiency: 0.3,
            joules_per_kwh: 3.6e6,
            young_tree_absorption_kg: 5.9,
            old_tree_absorption_kg: 21.77,
            cylinder_storage_efficiency: 0.6,
            low_pressure_efficiency: 0.9,
            electrolysis_efficiency: 0.7,
            hydrogen_energy_kwh_per_kg: 33.33,
            water_liters_per_kg_h2: 8.94,
        }
    }
}

impl PhysicalConstants {
    /// 상수 테이블의 일관성을 확인한다. 위반 항목을 설명하는 메시지를 돌려준다.
    ///
    /// 모든 계수는 양수여야 하고, 비율/효율은 1 이하,
    /// 성목 흡수량은 어린 나무 흡수량 이상이어야 한다.
    pub fn validate(&self) -> Result<(), String> {
        let fractions = [
            ("usable_capacity_fraction", self.usable_capacity_fraction),
            ("charging_efficiency", self.charging_efficiency),
            ("engine_efficiency", self.engine_efficiency),
            ("cylinder_storage_efficiency", self.cylinder_storage_efficiency),
            ("low_pressure_efficiency", self.low_pressure_efficiency),
            ("electrolysis_efficiency", self.electrolysis_efficiency),
        ];
        let factors = [
            ("joules_per_kwh", self.joules_per_kwh),
            ("young_tree_absorption_kg", self.young_tree_absorption_kg),
            ("old_tree_absorption_kg", self.old_tree_absorption_kg),
            ("hydrogen_energy_kwh_per_kg", self.hydrogen_energy_kwh_per_kg),
            ("water_liters_per_kg_h2", self.water_liters_per_kg_h2),
        ];

        for (name, value) in fractions.iter().chain(factors.iter()) {
            if !(value.is_finite() && *value > 0.0) {
                return Err(format!("{name}은(는) 양수여야 합니다 (현재 {value})"));
            }
        }
        for (name, value) in fractions {
            if value > 1.0 {
                return Err(format!("{name}은(는) 1 이하여야 합니다 (현재 {value})"));
            }
        }
        if self.old_tree_absorption_kg < self.young_tree_absorption_kg {
            return Err(format!(
                "old_tree_absorption_kg({})가 young_tree_absorption_kg({})보다 작습니다",
                self.old_tree_absorption_kg, self.young_tree_absorption_kg
            ));
        }
        Ok(())
    }
}
