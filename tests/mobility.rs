mod common;

use common::{assert_close, assert_finite_positive};
use ev_environment_metrics::environment::mobility::{self, MobilityInput};
use ev_environment_metrics::environment::{FuelType, PhysicalConstants};

const NOMINAL_ENERGY: f64 = 81.14;
const AUTONOMY: f64 = 200.0;
const REFERENCE_CONSUMPTION: f64 = 50.6;
const DISTANCE: f64 = 20000.0;
const FUEL_PRICE: f64 = 1.2;

#[test]
fn electrical_consumption_reference_value() {
    let k = PhysicalConstants::default();
    assert_eq!(
        mobility::electrical_consumption(&k, NOMINAL_ENERGY, AUTONOMY),
        0.45077777777777775
    );
    assert!(mobility::electrical_consumption(&k, 100.0, 250.0) > 0.0);
}

#[test]
fn cost_electrical_km_reference_value() {
    assert_eq!(mobility::cost_electrical_km(1.0, 100.0), 100.0);
}

#[test]
fn combustion_consumption_reference_value() {
    let k = PhysicalConstants::default();
    let ec = mobility::electrical_consumption(&k, NOMINAL_ENERGY, AUTONOMY);
    assert_eq!(mobility::combustion_consumption(&k, ec), 1.6695473251028808);
    assert_finite_positive("cc(50.6)", mobility::combustion_consumption(&k, REFERENCE_CONSUMPTION));
}

#[test]
fn fuel_chain_is_positive_for_both_fuels() {
    let k = PhysicalConstants::default();
    let cc = mobility::combustion_consumption(&k, REFERENCE_CONSUMPTION);
    for fuel in [FuelType::Gasoline, FuelType::Diesel] {
        let p = fuel.profile();
        let fc = mobility::fuel_consumption(cc, p.fuel_energy);
        assert_finite_positive("fuel_consumption", fc);
        assert_finite_positive("fuel_efficiency", mobility::fuel_efficiency(fc));
        assert_close("efficiency * consumption", mobility::fuel_efficiency(fc) * fc, 1.0, 1e-12);
        assert_finite_positive("fuel_cost_km", mobility::fuel_cost_km(FUEL_PRICE, fc));
    }
}

#[test]
fn energy_km_converts_to_joules() {
    let k = PhysicalConstants::default();
    assert!(mobility::energy_km(&k, 50.6) > 100_000_000.0);
    assert_eq!(mobility::energy_km(&k, 1.0), 3.6e6);
}

#[test]
fn emissions_follow_energy_and_distance() {
    let k = PhysicalConstants::default();
    let diesel = FuelType::Diesel.profile();
    let cc = mobility::combustion_consumption(&k, REFERENCE_CONSUMPTION);
    let energy = mobility::energy_km(&k, cc);
    let emission = mobility::emission_km(&k, diesel.emission_factor, energy);
    assert_close("emission_km", emission, diesel.emission_factor * cc, 1e-12);
    let avoided = mobility::avoided_emissions(emission, DISTANCE);
    assert_finite_positive("avoided", avoided);
    assert_close("avoided", avoided, emission * DISTANCE, 1e-12);
}

#[test]
fn saved_energy_may_be_negative() {
    let k = PhysicalConstants::default();
    let ec = mobility::electrical_consumption(&k, NOMINAL_ENERGY, AUTONOMY);
    let cc = mobility::combustion_consumption(&k, REFERENCE_CONSUMPTION);
    assert!(mobility::saved_energy(cc, ec, DISTANCE) > 0.0);
    assert!(mobility::saved_energy(ec, cc, DISTANCE) < 0.0);
}

#[test]
fn young_trees_outnumber_old_trees() {
    let k = PhysicalConstants::default();
    for avoided in [0.0, 1.0, 5.9, 21.77, 1234.5, 1_000_755.555_555_555_6] {
        let young = mobility::young_tree(&k, avoided);
        let old = mobility::old_tree(&k, avoided);
        assert!(young >= old, "avoided {avoided}: young {young} < old {old}");
    }
    assert_eq!(mobility::young_tree(&k, 11.9), 2);
    assert_eq!(mobility::old_tree(&k, 11.9), 0);
    assert_eq!(mobility::young_tree(&k, -10.0), 0);
    assert_eq!(mobility::young_tree(&k, f64::NAN), 0);
}

#[test]
fn compute_mobility_matches_step_functions() {
    let k = PhysicalConstants::default();
    let diesel = FuelType::Diesel.profile();
    let m = mobility::compute_mobility(
        &k,
        &MobilityInput {
            nominal_energy_kwh: NOMINAL_ENERGY,
            nominal_autonomy_km: AUTONOMY,
            reference_consumption: Some(REFERENCE_CONSUMPTION),
            distance_km: DISTANCE,
            fuel_price: FUEL_PRICE,
            energy_price: 1.0,
            fuel: diesel,
            monthly_rate: 0.0023039138595752906,
        },
    );
    assert_eq!(m.electrical_consumption, 0.45077777777777775);
    assert_eq!(m.cost_electrical_km, m.electrical_consumption);
    assert_close("cc", m.combustion_consumption, 187.407_407_407_407_42, 1e-12);
    assert_close("fc", m.fuel_consumption, 4.604_604_604_604_605, 1e-12);
    assert_close("fuel_cost_km", m.fuel_cost_km, 5.525_525_525_525_525, 1e-12);
    assert_close("emission_km", m.emission_km, 50.037_777_777_777_784, 1e-12);
    assert_close("monthly", m.monthly_savings, 8_457.912_912_912_912, 1e-12);
    assert_close("annual", m.annual_savings, 102_790.979_175_422_57, 1e-9);
    assert_eq!(m.young_tree, 169_619);
    assert_eq!(m.old_tree, 45_969);
}
