//! Unit tables for moist-air (psychrometric) quantities.
//!
//! Every dimension has a small enumeration of units and a fixed base unit
//! used as the pivot for conversions:
//!
//! | Dimension        | Base unit   | Other units                         |
//! |------------------|-------------|-------------------------------------|
//! | Temperature      | K           | °C, °F, °R                          |
//! | Temperature Δ    | K           | °C, °F, °R (interval, no offset)    |
//! | Pressure         | Pa          | kPa, bar, mbar, psi, inHg, inH₂O, atm |
//! | Humidity         | fraction    | %                                   |
//! | Humidity ratio   | kg/kg       | lb/lb, gr/lb, g/kg                  |
//! | Enthalpy         | J/kg        | kJ/kg, Btu/lb                       |
//! | Specific volume  | m³/kg       | ft³/lb                              |
//! | Density          | kg/m³       | lb/ft³                              |
//! | Length           | m           | ft, km                              |
//!
//! The psychrometric correlations are regressions fitted in one specific
//! unit set, so the engine works in either of two [`UnitSystem`] presets:
//!
//! | Preset       | T  | T (abs) | P   | h      | v      | ρ      | Z  |
//! |--------------|----|---------|-----|--------|--------|--------|----|
//! | `Imperial`   | °F | °R      | psi | Btu/lb | ft³/lb | lb/ft³ | ft |
//! | `Metric`     | °C | K       | Pa  | J/kg   | m³/kg  | kg/m³  | m  |
//!
//! ```
//! use converter::{PressureUnit, Unit, UnitSystem};
//!
//! let pa = PressureUnit::Psi.convert(14.696, PressureUnit::Pascal);
//! assert!((pa - 101_325.0).abs() < 1.0);
//! assert_eq!(UnitSystem::Metric.pressure(), PressureUnit::Pascal);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ────────────────────────────────────────────────────────────────────
//  Constants
// ────────────────────────────────────────────────────────────────────

/// 1 psi in Pa.
pub const PA_PER_PSI: f64 = 6_894.757_293_168;
/// 1 inch of mercury (32 °F) in Pa.
pub const PA_PER_INHG: f64 = 3_386.389;
/// 1 inch of water column (39.2 °F) in Pa.
pub const PA_PER_INH2O: f64 = 249.088_9;
/// Standard atmosphere in Pa.
pub const PA_PER_ATM: f64 = 101_325.0;
/// 1 Btu/lb in J/kg (International Table Btu).
pub const J_PER_KG_PER_BTU_PER_LB: f64 = 2_326.0;
/// 1 lb in kg.
pub const KG_PER_LB: f64 = 0.453_592_37;
/// 1 ft in m.
pub const M_PER_FT: f64 = 0.3048;
/// 1 ft³ in m³.
pub const M3_PER_FT3: f64 = M_PER_FT * M_PER_FT * M_PER_FT;
/// Grains in one pound.
pub const GRAINS_PER_LB: f64 = 7_000.0;

const KELVIN_OFFSET: f64 = 273.15;
const RANKINE_OFFSET: f64 = 459.67;

// ────────────────────────────────────────────────────────────────────
//  Unit trait
// ────────────────────────────────────────────────────────────────────

/// A unit of one physical dimension.
///
/// Conversions are total: every variant maps to and from the base unit of
/// its dimension, so `convert` never fails.
pub trait Unit: Copy + PartialEq + fmt::Debug + 'static {
    /// Express `value` (in `self`) in the dimension's base unit.
    fn to_base(self, value: f64) -> f64;

    /// Express a base-unit `value` in `self`.
    fn from_base(self, value: f64) -> f64;

    /// Short display symbol, e.g. `"°F"` or `"Pa"`.
    fn symbol(self) -> &'static str;

    /// Convert `value` from `self` into `to`.
    fn convert(self, value: f64, to: Self) -> f64 {
        if self == to {
            value
        } else {
            to.from_base(self.to_base(value))
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Unit enums
// ────────────────────────────────────────────────────────────────────

/// Temperature unit (absolute scale position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin (base)
    Kelvin,
    /// Degrees Rankine
    Rankine,
}

impl TemperatureUnit {
    /// Absolute-scale counterpart (°C → K, °F → °R).
    pub fn absolute(self) -> Self {
        match self {
            Self::Celsius | Self::Kelvin => Self::Kelvin,
            Self::Fahrenheit | Self::Rankine => Self::Rankine,
        }
    }

    /// Matching interval unit.
    pub fn delta(self) -> TemperatureDeltaUnit {
        match self {
            Self::Celsius => TemperatureDeltaUnit::Celsius,
            Self::Kelvin => TemperatureDeltaUnit::Kelvin,
            Self::Fahrenheit => TemperatureDeltaUnit::Fahrenheit,
            Self::Rankine => TemperatureDeltaUnit::Rankine,
        }
    }
}

impl Unit for TemperatureUnit {
    fn to_base(self, t: f64) -> f64 {
        match self {
            Self::Celsius    => t + KELVIN_OFFSET,
            Self::Fahrenheit => (t + RANKINE_OFFSET) * 5.0 / 9.0,
            Self::Kelvin     => t,
            Self::Rankine    => t * 5.0 / 9.0,
        }
    }

    fn from_base(self, k: f64) -> f64 {
        match self {
            Self::Celsius    => k - KELVIN_OFFSET,
            Self::Fahrenheit => k * 9.0 / 5.0 - RANKINE_OFFSET,
            Self::Kelvin     => k,
            Self::Rankine    => k * 9.0 / 5.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Celsius    => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin     => "K",
            Self::Rankine    => "°R",
        }
    }
}

/// Temperature interval unit. Scales only, never shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDeltaUnit {
    Celsius,
    Fahrenheit,
    /// Kelvin (base)
    Kelvin,
    Rankine,
}

impl Unit for TemperatureDeltaUnit {
    fn to_base(self, dt: f64) -> f64 {
        match self {
            Self::Celsius | Self::Kelvin     => dt,
            Self::Fahrenheit | Self::Rankine => dt * 5.0 / 9.0,
        }
    }

    fn from_base(self, dk: f64) -> f64 {
        match self {
            Self::Celsius | Self::Kelvin     => dk,
            Self::Fahrenheit | Self::Rankine => dk * 9.0 / 5.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Celsius    => "Δ°C",
            Self::Fahrenheit => "Δ°F",
            Self::Kelvin     => "ΔK",
            Self::Rankine    => "Δ°R",
        }
    }
}

/// Pressure unit. All values are absolute pressures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    /// Pascal (base)
    Pascal,
    Kilopascal,
    Bar,
    Millibar,
    /// Pounds per square inch, absolute
    Psi,
    InchesOfMercury,
    InchesOfWaterColumn,
    /// Standard atmosphere (101 325 Pa)
    Atmosphere,
}

impl PressureUnit {
    fn pascals_per_unit(self) -> f64 {
        match self {
            Self::Pascal              => 1.0,
            Self::Kilopascal          => 1_000.0,
            Self::Bar                 => 100_000.0,
            Self::Millibar            => 100.0,
            Self::Psi                 => PA_PER_PSI,
            Self::InchesOfMercury     => PA_PER_INHG,
            Self::InchesOfWaterColumn => PA_PER_INH2O,
            Self::Atmosphere          => PA_PER_ATM,
        }
    }
}

impl Unit for PressureUnit {
    fn to_base(self, p: f64) -> f64 { p * self.pascals_per_unit() }
    fn from_base(self, pa: f64) -> f64 { pa / self.pascals_per_unit() }

    fn symbol(self) -> &'static str {
        match self {
            Self::Pascal              => "Pa",
            Self::Kilopascal          => "kPa",
            Self::Bar                 => "bar",
            Self::Millibar            => "mbar",
            Self::Psi                 => "psi",
            Self::InchesOfMercury     => "inHg",
            Self::InchesOfWaterColumn => "inH₂O",
            Self::Atmosphere          => "atm",
        }
    }
}

/// Relative humidity / saturation fraction unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumidityUnit {
    /// 0–100
    Percent,
    /// 0–1 (base)
    Fraction,
}

impl Unit for HumidityUnit {
    fn to_base(self, h: f64) -> f64 {
        match self {
            Self::Percent  => h / 100.0,
            Self::Fraction => h,
        }
    }

    fn from_base(self, f: f64) -> f64 {
        match self {
            Self::Percent  => f * 100.0,
            Self::Fraction => f,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Percent  => "%",
            Self::Fraction => "",
        }
    }
}

/// Humidity ratio (mass of water vapour per mass of dry air).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HumidityRatioUnit {
    /// lb/lb or kg/kg (base)
    MassRatio,
    /// grains of water per pound of dry air
    GrainsPerPound,
    /// grams of water per kilogram of dry air
    GramsPerKilogram,
}

impl Unit for HumidityRatioUnit {
    fn to_base(self, w: f64) -> f64 {
        match self {
            Self::MassRatio        => w,
            Self::GrainsPerPound   => w / GRAINS_PER_LB,
            Self::GramsPerKilogram => w / 1_000.0,
        }
    }

    fn from_base(self, w: f64) -> f64 {
        match self {
            Self::MassRatio        => w,
            Self::GrainsPerPound   => w * GRAINS_PER_LB,
            Self::GramsPerKilogram => w * 1_000.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::MassRatio        => "lb/lb",
            Self::GrainsPerPound   => "gr/lb",
            Self::GramsPerKilogram => "g/kg",
        }
    }
}

/// Specific enthalpy unit (per mass of dry air).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnthalpyUnit {
    /// J/kg (base)
    JoulePerKilogram,
    KilojoulePerKilogram,
    BtuPerPound,
}

impl EnthalpyUnit {
    fn joules_per_kg_per_unit(self) -> f64 {
        match self {
            Self::JoulePerKilogram     => 1.0,
            Self::KilojoulePerKilogram => 1_000.0,
            Self::BtuPerPound          => J_PER_KG_PER_BTU_PER_LB,
        }
    }
}

impl Unit for EnthalpyUnit {
    fn to_base(self, h: f64) -> f64 { h * self.joules_per_kg_per_unit() }
    fn from_base(self, h: f64) -> f64 { h / self.joules_per_kg_per_unit() }

    fn symbol(self) -> &'static str {
        match self {
            Self::JoulePerKilogram     => "J/kg",
            Self::KilojoulePerKilogram => "kJ/kg",
            Self::BtuPerPound          => "Btu/lb",
        }
    }
}

/// Specific volume unit (per mass of dry air).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificVolumeUnit {
    /// m³/kg (base)
    CubicMeterPerKilogram,
    CubicFootPerPound,
}

impl Unit for SpecificVolumeUnit {
    fn to_base(self, v: f64) -> f64 {
        match self {
            Self::CubicMeterPerKilogram => v,
            Self::CubicFootPerPound     => v * M3_PER_FT3 / KG_PER_LB,
        }
    }

    fn from_base(self, v: f64) -> f64 {
        match self {
            Self::CubicMeterPerKilogram => v,
            Self::CubicFootPerPound     => v * KG_PER_LB / M3_PER_FT3,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::CubicMeterPerKilogram => "m³/kg",
            Self::CubicFootPerPound     => "ft³/lb",
        }
    }
}

/// Density unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    /// kg/m³ (base)
    KilogramPerCubicMeter,
    PoundPerCubicFoot,
}

impl Unit for DensityUnit {
    fn to_base(self, d: f64) -> f64 {
        match self {
            Self::KilogramPerCubicMeter => d,
            Self::PoundPerCubicFoot     => d * KG_PER_LB / M3_PER_FT3,
        }
    }

    fn from_base(self, d: f64) -> f64 {
        match self {
            Self::KilogramPerCubicMeter => d,
            Self::PoundPerCubicFoot     => d * M3_PER_FT3 / KG_PER_LB,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::KilogramPerCubicMeter => "kg/m³",
            Self::PoundPerCubicFoot     => "lb/ft³",
        }
    }
}

/// Length unit (altitude).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Meter (base)
    Meter,
    Kilometer,
    Foot,
}

impl Unit for LengthUnit {
    fn to_base(self, z: f64) -> f64 {
        match self {
            Self::Meter     => z,
            Self::Kilometer => z * 1_000.0,
            Self::Foot      => z * M_PER_FT,
        }
    }

    fn from_base(self, m: f64) -> f64 {
        match self {
            Self::Meter     => m,
            Self::Kilometer => m / 1_000.0,
            Self::Foot      => m / M_PER_FT,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Meter     => "m",
            Self::Kilometer => "km",
            Self::Foot      => "ft",
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  UnitSystem: which regression set the engine runs in
// ────────────────────────────────────────────────────────────────────

/// The unit system the psychrometric correlations are evaluated in.
///
/// Inputs in any unit are projected into the preset before a formula is
/// evaluated, and results are reported in the preset's units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// °F, °R, psi, Btu/lb, ft³/lb, lb/ft³, ft
    #[default]
    Imperial,
    /// °C, K, Pa, J/kg, m³/kg, kg/m³, m
    Metric,
}

impl UnitSystem {
    pub fn temperature(self) -> TemperatureUnit {
        match self {
            Self::Imperial => TemperatureUnit::Fahrenheit,
            Self::Metric   => TemperatureUnit::Celsius,
        }
    }

    /// Absolute temperature scale used inside the correlations.
    pub fn absolute_temperature(self) -> TemperatureUnit {
        self.temperature().absolute()
    }

    pub fn temperature_delta(self) -> TemperatureDeltaUnit {
        self.temperature().delta()
    }

    pub fn pressure(self) -> PressureUnit {
        match self {
            Self::Imperial => PressureUnit::Psi,
            Self::Metric   => PressureUnit::Pascal,
        }
    }

    /// Humidity ratio is a mass ratio in both systems.
    pub fn humidity_ratio(self) -> HumidityRatioUnit {
        HumidityRatioUnit::MassRatio
    }

    pub fn enthalpy(self) -> EnthalpyUnit {
        match self {
            Self::Imperial => EnthalpyUnit::BtuPerPound,
            Self::Metric   => EnthalpyUnit::JoulePerKilogram,
        }
    }

    pub fn specific_volume(self) -> SpecificVolumeUnit {
        match self {
            Self::Imperial => SpecificVolumeUnit::CubicFootPerPound,
            Self::Metric   => SpecificVolumeUnit::CubicMeterPerKilogram,
        }
    }

    pub fn density(self) -> DensityUnit {
        match self {
            Self::Imperial => DensityUnit::PoundPerCubicFoot,
            Self::Metric   => DensityUnit::KilogramPerCubicMeter,
        }
    }

    pub fn length(self) -> LengthUnit {
        match self {
            Self::Imperial => LengthUnit::Foot,
            Self::Metric   => LengthUnit::Meter,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imperial => f.write_str("imperial"),
            Self::Metric   => f.write_str("metric"),
        }
    }
}

/// Returned when a string names no known [`UnitSystem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUnitSystemError(pub String);

impl fmt::Display for ParseUnitSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit system '{}' (expected 'imperial' or 'metric')", self.0)
    }
}

impl std::error::Error for ParseUnitSystemError {}

impl FromStr for UnitSystem {
    type Err = ParseUnitSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "imperial" | "ip" | "english" => Ok(Self::Imperial),
            "metric" | "si"               => Ok(Self::Metric),
            _                             => Err(ParseUnitSystemError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn temperature_fixed_points() {
        let f = TemperatureUnit::Celsius.convert(100.0, TemperatureUnit::Fahrenheit);
        assert!(close(f, 212.0, 1e-9), "100 °C = {f} °F");
        let r = TemperatureUnit::Fahrenheit.convert(32.0, TemperatureUnit::Rankine);
        assert!(close(r, 491.67, 1e-9), "32 °F = {r} °R");
        let k = TemperatureUnit::Rankine.convert(491.67, TemperatureUnit::Kelvin);
        assert!(close(k, 273.15, 1e-9), "491.67 °R = {k} K");
    }

    #[test]
    fn temperature_delta_has_no_offset() {
        let df = TemperatureDeltaUnit::Celsius.convert(0.001, TemperatureDeltaUnit::Fahrenheit);
        assert!(close(df, 0.0018, 1e-12), "0.001 Δ°C = {df} Δ°F");
    }

    #[test]
    fn sea_level_pressure_in_every_unit() {
        let pa = PressureUnit::Atmosphere.to_base(1.0);
        assert!(close(PressureUnit::Psi.from_base(pa), 14.696, 1e-3));
        assert!(close(PressureUnit::InchesOfMercury.from_base(pa), 29.921, 1e-3));
        assert!(close(PressureUnit::Kilopascal.from_base(pa), 101.325, 1e-9));
        assert!(close(PressureUnit::Millibar.from_base(pa), 1013.25, 1e-9));
    }

    #[test]
    fn mass_based_units() {
        let btu = EnthalpyUnit::KilojoulePerKilogram.convert(2.326, EnthalpyUnit::BtuPerPound);
        assert!(close(btu, 1.0, 1e-12));
        let v = SpecificVolumeUnit::CubicFootPerPound
            .convert(13.5, SpecificVolumeUnit::CubicMeterPerKilogram);
        assert!(close(v, 0.8428, 1e-4), "13.5 ft³/lb = {v} m³/kg");
        let d = DensityUnit::KilogramPerCubicMeter.convert(1.2, DensityUnit::PoundPerCubicFoot);
        assert!(close(d, 0.07491, 1e-5), "1.2 kg/m³ = {d} lb/ft³");
        let gr = HumidityRatioUnit::MassRatio.convert(0.01, HumidityRatioUnit::GrainsPerPound);
        assert!(close(gr, 70.0, 1e-9));
    }

    #[test]
    fn presets() {
        assert_eq!(UnitSystem::default(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::Imperial.absolute_temperature(), TemperatureUnit::Rankine);
        assert_eq!(UnitSystem::Metric.absolute_temperature(), TemperatureUnit::Kelvin);
        assert_eq!(UnitSystem::Metric.enthalpy(), EnthalpyUnit::JoulePerKilogram);
        assert_eq!(UnitSystem::Imperial.length(), LengthUnit::Foot);
    }

    #[test]
    fn parse_unit_system() {
        assert_eq!("Metric".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!(" imperial ".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert!("furlongs".parse::<UnitSystem>().is_err());
    }
}
