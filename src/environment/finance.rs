const MONTHS_PER_YEAR: i32 = 12;

/// 연간 이율(%)을 동등한 월 복리 이율(소수)로 환산한다.
///
/// 음수 이율도 그대로 계산한다. -100% 미만이면 결과는 NaN이 된다.
pub fn monthly_rate_from_annual(annual_rate_percent: f64) -> f64 {
    (1.0 + annual_rate_percent / 100.0).powf(1.0 / MONTHS_PER_YEAR as f64) - 1.0
}

/// 주행거리 기준 월 절감액.
pub fn monthly_savings(fuel_cost_km: f64, electrical_cost_km: f64, distance_km: f64) -> f64 {
    (fuel_cost_km - electrical_cost_km) * distance_km / MONTHS_PER_YEAR as f64
}

/// 월 절감액을 월 이율로 12개월 적립했을 때의 연간 절감액(연금 종가).
pub fn annual_savings(monthly_savings: f64, monthly_rate: f64) -> f64 {
    if monthly_rate == 0.0 {
        return monthly_savings * MONTHS_PER_YEAR as f64;
    }
    let growth = (1.0 + monthly_rate).powi(MONTHS_PER_YEAR);
    monthly_savings * (growth - 1.0) / monthly_rate
}
