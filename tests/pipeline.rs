//! 전체 파이프라인 시나리오 테스트.
mod common;

use common::assert_close;
use ev_environment_metrics::config::{Config, VehicleConfig};
use ev_environment_metrics::environment::{FuelType, PhysicalConstants};
use ev_environment_metrics::pipeline::{MetricsPipeline, MetricsRequest, PipelineError};

fn reference_pipeline() -> MetricsPipeline {
    MetricsPipeline::new(PhysicalConstants::default(), VehicleConfig::default())
}

#[test]
fn diesel_reference_scenario() {
    let report = reference_pipeline()
        .compute(&MetricsRequest::new(2.8, "diesel"))
        .expect("diesel report");

    assert_close("ti_month", report.ti_month, 0.0023039138595752906, 1e-15);
    assert_eq!(report.fuel_energy_selector, FuelType::Diesel.profile());
    assert_eq!(report.electrical_consumption, 0.45077777777777775);
    assert_close("cc", report.combustion_consumption, 187.407_407_407_407_42, 1e-12);
    assert_close("energy_km", report.energy_km, 674_666_666.666_666_7, 1e-12);
    assert_close("saved", report.saved_energy, 3_739_132.592_592_593, 1e-12);
    assert_close("avoided", report.avoided_emissions, 1_000_755.555_555_555_6, 1e-12);
    assert_close("annual", report.annual_savings, 102_790.979_175_422_57, 1e-9);
    assert_eq!(report.young_tree, 169_619);
    assert_eq!(report.old_tree, 45_969);
    assert_close("liters", report.liters_required, 40.303_563_689_702_3, 1e-12);
    for (field, value) in report.float_fields() {
        assert!(value.is_finite(), "{field} = {value}");
    }
}

#[test]
fn pipeline_is_idempotent() {
    let pipeline = reference_pipeline();
    let request = MetricsRequest::new(2.8, "Gasoline");
    let first = pipeline.compute(&request).expect("first");
    let second = pipeline.compute(&request).expect("second");
    assert_eq!(first, second);
    let bits = |r: &ev_environment_metrics::pipeline::MetricsReport| {
        r.float_fields().map(|(_, v)| v.to_bits())
    };
    assert_eq!(bits(&first), bits(&second));
}

#[test]
fn gasoline_and_diesel_share_the_hydrogen_chain() {
    let pipeline = reference_pipeline();
    let gasoline = pipeline.compute(&MetricsRequest::new(2.8, "gasoline")).expect("gasoline");
    let diesel = pipeline.compute(&MetricsRequest::new(2.8, "diesel")).expect("diesel");
    assert_eq!(gasoline.energy_h2_cylinders, diesel.energy_h2_cylinders);
    assert_eq!(gasoline.liters_required, diesel.liters_required);
    assert_ne!(gasoline.fuel_consumption, diesel.fuel_consumption);
}

#[test]
fn unknown_fuel_fails_whole_pipeline() {
    let err = reference_pipeline()
        .compute(&MetricsRequest::new(2.8, "hydrogen"))
        .unwrap_err();
    assert!(matches!(err, PipelineError::Fuel(_)));
    assert_eq!(err.code(), 500);
    assert!(err.to_string().contains("hydrogen"));
}

#[test]
fn zero_rate_falls_back_to_plain_sum() {
    let report = reference_pipeline()
        .compute(&MetricsRequest::new(0.0, "diesel"))
        .expect("report");
    assert_eq!(report.ti_month, 0.0);
    assert_close("annual", report.annual_savings, report.monthly_savings * 12.0, 1e-12);
}

#[test]
fn config_driven_pipeline_uses_overrides() {
    let cfg = Config::from_toml(
        r#"
        [vehicle]
        nominal_energy_kwh = 60.0
        nominal_autonomy_km = 400.0
        reference_distance_km = 15000.0
        energy_price = 0.2
        "#,
    )
    .expect("config");
    let report = ev_environment_metrics::app::build_pipeline(&cfg)
        .compute(&MetricsRequest::new(3.5, "gasoline"))
        .expect("report");
    let expected_ec = 60.0 / (400.0 * 0.9);
    assert_eq!(report.electrical_consumption, expected_ec);
    // 기준 소비율이 없으면 전력 소비율로 환산한다
    assert_eq!(report.combustion_consumption, expected_ec / 0.9 / 0.3);
    // 연료 단가가 없으면 연료 레코드의 단가를 쓴다
    assert_close(
        "fuel_cost_km",
        report.fuel_cost_km,
        16700.0 * report.fuel_consumption,
        1e-12,
    );
}

#[test]
fn report_serializes_with_wire_keys() {
    let report = reference_pipeline()
        .compute(&MetricsRequest::new(2.8, "diesel"))
        .expect("report");
    let json = serde_json::to_value(&report).expect("json");
    let obj = json.as_object().expect("object");
    for key in [
        "ti_month",
        "fuel_energy_selector",
        "electrical_consumption",
        "cost_electrical_km",
        "combustion_consumption",
        "fuel_consumption",
        "fuel_efficiency",
        "fuel_cost_km",
        "energy_km",
        "emission_km",
        "saved_energy",
        "avoided_emissions",
        "monthly_savings",
        "annual_savings",
        "young_tree",
        "old_tree",
        "energy_H2_Cylinders",
        "energy_H2_Low_Presure",
        "energy_consumed",
        "hydrogen_mass",
        "liters_reqired",
    ] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert_eq!(obj.len(), 21);
    assert!(json["young_tree"].is_u64());
    assert!(json["old_tree"].is_u64());
}
