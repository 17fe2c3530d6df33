//! 전기차/내연기관 비교 지표 계산 모듈 모음.

pub mod constants;
pub mod finance;
pub mod fuel;
pub mod hydrogen;
pub mod mobility;

pub use constants::PhysicalConstants;
pub use fuel::{select_fuel_profile, FuelError, FuelProfile, FuelType};
