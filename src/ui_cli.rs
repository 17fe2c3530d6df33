use std::fmt::Write as _;
use std::io::{self, Write};

use crate::app::AppError;
use crate::environment::FuelType;
use crate::pipeline::MetricsReport;

/// 연간 이율을 입력받는다.
pub fn prompt_rate() -> Result<f64, AppError> {
    read_f64("연간 이율(IPC, %): ")
}

/// 연료 종류를 메뉴에서 선택받는다.
pub fn prompt_fuel() -> Result<FuelType, AppError> {
    println!("연료 종류: 1) gasoline  2) diesel");
    loop {
        let sel = read_line("선택: ")?;
        match sel.trim() {
            "1" => return Ok(FuelType::Gasoline),
            "2" => return Ok(FuelType::Diesel),
            other => match other.parse::<FuelType>() {
                Ok(fuel) => return Ok(fuel),
                Err(_) => println!("잘못된 입력입니다. 다시 선택하세요."),
            },
        }
    }
}

/// 보고서를 사람이 읽기 좋은 표 형태로 만든다.
pub fn format_report(report: &MetricsReport) -> String {
    let rows: [(&str, String, &str); 23] = [
        ("월 이율", format!("{:.6}", report.ti_month), ""),
        ("연료 단가", format!("{:.2}", report.fuel_energy_selector.fuel_price), "/gal"),
        ("연료 발열량", format!("{:.2}", report.fuel_energy_selector.fuel_energy), "kWh/gal"),
        ("배출계수", format!("{:.3}", report.fuel_energy_selector.emission_factor), "kg CO2/kWh"),
        ("전력 소비율", format!("{:.4}", report.electrical_consumption), "kWh/km"),
        ("전기차 km당 비용", format!("{:.4}", report.cost_electrical_km), "/km"),
        ("내연기관 환산 소비율", format!("{:.4}", report.combustion_consumption), "kWh/km"),
        ("연료 소비율", format!("{:.4}", report.fuel_consumption), "gal/km"),
        ("연비", format!("{:.4}", report.fuel_efficiency), "km/gal"),
        ("연료 km당 비용", format!("{:.4}", report.fuel_cost_km), "/km"),
        ("km당 에너지", format!("{:.3e}", report.energy_km), "J/km"),
        ("km당 배출량", format!("{:.4}", report.emission_km), "kg CO2/km"),
        ("절약 에너지", format!("{:.1}", report.saved_energy), "kWh"),
        ("회피 배출량", format!("{:.1}", report.avoided_emissions), "kg CO2"),
        ("월 절감액", format!("{:.2}", report.monthly_savings), ""),
        ("연간 절감액", format!("{:.2}", report.annual_savings), ""),
        ("어린 나무 환산", report.young_tree.to_string(), "그루"),
        ("성목 환산", report.old_tree.to_string(), "그루"),
        ("실린더 수소 에너지", format!("{:.2}", report.energy_h2_cylinders), "kWh"),
        ("저압 수소 에너지", format!("{:.2}", report.energy_h2_low_pressure), "kWh"),
        ("수전해 소비 전력", format!("{:.2}", report.energy_consumed), "kWh"),
        ("수소 질량", format!("{:.3}", report.hydrogen_mass), "kg"),
        ("필요 물", format!("{:.2}", report.liters_required), "L"),
    ];

    let mut out = String::new();
    for (label, value, unit) in rows {
        let _ = writeln!(out, "{label:<22} {value:>16} {unit}");
    }
    out
}

pub fn print_report(report: &MetricsReport) {
    println!("\n=== EV vs. 내연기관 환경 지표 ===");
    print!("{}", format_report(report));
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
