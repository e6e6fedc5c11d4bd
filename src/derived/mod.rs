//! Closed-form moist-air property relations.
//!
//! Every function here is pure and non-iterative. Inputs may arrive in any
//! unit; they are projected into the [`Environment`](crate::Environment)'s
//! unit system, and results are reported in that system.

pub mod energy;
pub mod humidity;
pub mod volume;

pub use energy::{dry_bulb_from_enthalpy, enthalpy, humidity_ratio_from_enthalpy};
pub use humidity::{
    absolute_humidity, degree_of_saturation, degree_of_saturation_at, humidity_ratio,
    humidity_ratio_from_dew_point, humidity_ratio_from_relative_humidity,
    humidity_ratio_from_specific_humidity, humidity_ratio_from_wet_bulb,
    relative_humidity, relative_humidity_from_dew_point, relative_humidity_from_humidity_ratio,
    saturated_humidity_ratio, specific_humidity, vapor_pressure,
    vapor_pressure_from_humidity_ratio,
};
pub use volume::{
    density, dry_air_density, dry_bulb_from_specific_volume, moist_air_density, specific_volume,
};

/// Molecular weight of water over that of dry air, 18.015268 / 28.966.
pub const MOLE_WEIGHT_RATIO: f64 = 0.621945;

/// Ratio of the gas constants of water vapour and dry air, used in the
/// specific-volume relation `v = R·T·(1 + 1.607858·W) / P`.
pub const VAPOR_GAS_CONSTANT_RATIO: f64 = 1.607858;
