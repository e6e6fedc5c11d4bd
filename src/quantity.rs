//! Unit-aware scalar quantities.
//!
//! A [`Quantity<D, R>`] is an `f64` that carries its unit. `D` is a
//! dimension marker (it selects the unit enumeration from the `converter`
//! crate) and `R` is a role marker that keeps, say, a wet-bulb temperature
//! from being passed where a dew point is expected. Both markers are
//! zero-sized; arithmetic and storage cost the same as a bare `f64` plus a
//! one-byte unit tag.
//!
//! Binary operators and comparisons project the right-hand operand into the
//! left-hand operand's unit first:
//!
//! ```
//! use psychrometrics::{Temperature, TemperatureUnit};
//!
//! let a = Temperature::new(20.0, TemperatureUnit::Celsius);
//! let b = Temperature::new(68.0, TemperatureUnit::Fahrenheit);
//! assert!((a.value() - b.convert(TemperatureUnit::Celsius)).abs() < 1e-12);
//! assert!((a + b).value() > 39.99);
//! ```
//!
//! Roles change only through named constructors:
//!
//! ```
//! use psychrometrics::{DewPoint, DryBulb, Temperature};
//!
//! let t = Temperature::fahrenheit(55.0);
//! let dp = DewPoint::from_untagged(t);
//! let _db: DryBulb = DryBulb::from_untagged(dp.untagged());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Sub};

use converter::{
    DensityUnit, EnthalpyUnit, HumidityRatioUnit, HumidityUnit, LengthUnit, PressureUnit,
    SpecificVolumeUnit, TemperatureDeltaUnit, TemperatureUnit, Unit,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────
//  Markers
// ────────────────────────────────────────────────────────────────────

/// A physical dimension and its unit table.
pub trait Dimension: Copy + fmt::Debug + 'static {
    type Unit: Unit + Serialize + DeserializeOwned;
    const NAME: &'static str;
}

/// The physical role a quantity plays (dry bulb, vapor pressure, …).
pub trait Role: Copy + fmt::Debug + 'static {
    const NAME: &'static str;
}

/// Dimension markers.
pub mod dim {
    use super::Dimension;
    use converter::*;

    macro_rules! dimension {
        ($(#[$m:meta])* $name:ident, $unit:ty, $label:literal) => {
            $(#[$m])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name;

            impl Dimension for $name {
                type Unit = $unit;
                const NAME: &'static str = $label;
            }
        };
    }

    dimension!(Temperature, TemperatureUnit, "temperature");
    dimension!(
        /// Temperature interval (tolerances, approach temperatures).
        TemperatureDelta, TemperatureDeltaUnit, "temperature interval"
    );
    dimension!(Pressure, PressureUnit, "pressure");
    dimension!(
        /// Relative humidity and degree of saturation.
        Humidity, HumidityUnit, "humidity"
    );
    dimension!(
        /// Mass of water per mass of air.
        MassRatio, HumidityRatioUnit, "mass ratio"
    );
    dimension!(Enthalpy, EnthalpyUnit, "enthalpy");
    dimension!(SpecificVolume, SpecificVolumeUnit, "specific volume");
    dimension!(Density, DensityUnit, "density");
    dimension!(Length, LengthUnit, "length");
}

/// Role markers.
pub mod role {
    use super::Role;

    macro_rules! roles {
        ($($name:ident => $label:literal),* $(,)?) => {
            $(
                #[derive(Debug, Clone, Copy, PartialEq, Eq)]
                pub struct $name;

                impl Role for $name {
                    const NAME: &'static str = $label;
                }
            )*
        };
    }

    roles! {
        Untagged           => "",
        DryBulb            => "dry bulb",
        WetBulb            => "wet bulb",
        DewPoint           => "dew point",
        Total              => "total pressure",
        Saturation         => "saturation pressure",
        Vapor              => "vapor pressure",
        Relative           => "relative humidity",
        DegreeOfSaturation => "degree of saturation",
        Mixing             => "humidity ratio",
        Specific           => "specific humidity",
        Absolute           => "absolute humidity",
        Altitude           => "altitude",
    }
}

// ────────────────────────────────────────────────────────────────────
//  Quantity
// ────────────────────────────────────────────────────────────────────

/// A value tagged with its unit, dimension and role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Quantity<D: Dimension, R: Role = role::Untagged> {
    value: f64,
    unit: D::Unit,
    #[serde(skip)]
    _tag: PhantomData<(D, R)>,
}

impl<D: Dimension, R: Role> Quantity<D, R> {
    pub fn new(value: f64, unit: D::Unit) -> Self {
        Self { value, unit, _tag: PhantomData }
    }

    /// Raw value, interpreted through [`unit`](Self::unit).
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> D::Unit {
        self.unit
    }

    /// The value expressed in `to`.
    pub fn convert(&self, to: D::Unit) -> f64 {
        self.unit.convert(self.value, to)
    }

    /// The same quantity re-expressed in `unit`.
    pub fn to(&self, unit: D::Unit) -> Self {
        Self::new(self.convert(unit), unit)
    }

    /// Drop the role tag.
    pub fn untagged(self) -> Quantity<D> {
        self.retag()
    }

    /// Give an untagged quantity this role.
    pub fn from_untagged(q: Quantity<D>) -> Self {
        q.retag()
    }

    pub(crate) fn retag<R2: Role>(self) -> Quantity<D, R2> {
        Quantity::new(self.value, self.unit)
    }
}

impl<D: Dimension, R: Role> fmt::Display for Quantity<D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.unit.symbol();
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.value)?,
            None => write!(f, "{}", self.value)?,
        }
        if symbol.is_empty() {
            Ok(())
        } else {
            write!(f, " {symbol}")
        }
    }
}

impl<D: Dimension, R: Role> PartialEq for Quantity<D, R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.convert(self.unit)
    }
}

impl<D: Dimension, R: Role> PartialOrd for Quantity<D, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.convert(self.unit))
    }
}

macro_rules! binary_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<D: Dimension, R: Role> $trait for Quantity<D, R> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self::new(self.value $op rhs.convert(self.unit), self.unit)
            }
        }

        impl<D: Dimension, R: Role> $trait<f64> for Quantity<D, R> {
            type Output = Self;

            fn $method(self, rhs: f64) -> Self {
                Self::new(self.value $op rhs, self.unit)
            }
        }
    };
}

binary_op!(Add, add, +);
binary_op!(Sub, sub, -);
binary_op!(Mul, mul, *);
binary_op!(Div, div, /);

// ── Unit shorthands ─────────────────────────────────────────────────

impl<R: Role> Quantity<dim::Temperature, R> {
    pub fn fahrenheit(value: f64) -> Self { Self::new(value, TemperatureUnit::Fahrenheit) }
    pub fn celsius(value: f64) -> Self { Self::new(value, TemperatureUnit::Celsius) }
    pub fn kelvin(value: f64) -> Self { Self::new(value, TemperatureUnit::Kelvin) }
    pub fn rankine(value: f64) -> Self { Self::new(value, TemperatureUnit::Rankine) }
}

impl<R: Role> Quantity<dim::TemperatureDelta, R> {
    pub fn celsius(value: f64) -> Self { Self::new(value, TemperatureDeltaUnit::Celsius) }
    pub fn fahrenheit(value: f64) -> Self { Self::new(value, TemperatureDeltaUnit::Fahrenheit) }
}

impl<R: Role> Quantity<dim::Pressure, R> {
    pub fn psi(value: f64) -> Self { Self::new(value, PressureUnit::Psi) }
    pub fn pascals(value: f64) -> Self { Self::new(value, PressureUnit::Pascal) }
    pub fn kilopascals(value: f64) -> Self { Self::new(value, PressureUnit::Kilopascal) }
    pub fn inches_of_mercury(value: f64) -> Self { Self::new(value, PressureUnit::InchesOfMercury) }
}

impl<R: Role> Quantity<dim::Humidity, R> {
    pub fn percent(value: f64) -> Self { Self::new(value, HumidityUnit::Percent) }
    pub fn from_fraction(value: f64) -> Self { Self::new(value, HumidityUnit::Fraction) }

    /// The value as a 0–1 fraction.
    pub fn as_fraction(&self) -> f64 {
        self.convert(HumidityUnit::Fraction)
    }
}

impl<R: Role> Quantity<dim::MassRatio, R> {
    pub fn mass_ratio(value: f64) -> Self { Self::new(value, HumidityRatioUnit::MassRatio) }
    pub fn grains_per_pound(value: f64) -> Self {
        Self::new(value, HumidityRatioUnit::GrainsPerPound)
    }

    /// The value as lb/lb (kg/kg).
    pub fn as_mass_ratio(&self) -> f64 {
        self.convert(HumidityRatioUnit::MassRatio)
    }
}

impl<R: Role> Quantity<dim::Enthalpy, R> {
    pub fn btu_per_pound(value: f64) -> Self { Self::new(value, EnthalpyUnit::BtuPerPound) }
    pub fn joules_per_kilogram(value: f64) -> Self {
        Self::new(value, EnthalpyUnit::JoulePerKilogram)
    }
    pub fn kilojoules_per_kilogram(value: f64) -> Self {
        Self::new(value, EnthalpyUnit::KilojoulePerKilogram)
    }
}

impl<R: Role> Quantity<dim::SpecificVolume, R> {
    pub fn cubic_feet_per_pound(value: f64) -> Self {
        Self::new(value, SpecificVolumeUnit::CubicFootPerPound)
    }
    pub fn cubic_meters_per_kilogram(value: f64) -> Self {
        Self::new(value, SpecificVolumeUnit::CubicMeterPerKilogram)
    }
}

impl<R: Role> Quantity<dim::Density, R> {
    pub fn pounds_per_cubic_foot(value: f64) -> Self {
        Self::new(value, DensityUnit::PoundPerCubicFoot)
    }
    pub fn kilograms_per_cubic_meter(value: f64) -> Self {
        Self::new(value, DensityUnit::KilogramPerCubicMeter)
    }
}

impl<R: Role> Quantity<dim::Length, R> {
    pub fn feet(value: f64) -> Self { Self::new(value, LengthUnit::Foot) }
    pub fn meters(value: f64) -> Self { Self::new(value, LengthUnit::Meter) }
}

// ────────────────────────────────────────────────────────────────────
//  Aliases
// ────────────────────────────────────────────────────────────────────

pub type Temperature = Quantity<dim::Temperature>;
pub type TemperatureDelta = Quantity<dim::TemperatureDelta>;
pub type Pressure = Quantity<dim::Pressure>;
pub type Enthalpy = Quantity<dim::Enthalpy>;
pub type SpecificVolume = Quantity<dim::SpecificVolume>;
pub type Density = Quantity<dim::Density>;
pub type Length = Quantity<dim::Length>;

pub type DryBulb = Quantity<dim::Temperature, role::DryBulb>;
pub type WetBulb = Quantity<dim::Temperature, role::WetBulb>;
pub type DewPoint = Quantity<dim::Temperature, role::DewPoint>;

pub type TotalPressure = Quantity<dim::Pressure, role::Total>;
pub type SaturationPressure = Quantity<dim::Pressure, role::Saturation>;
pub type VaporPressure = Quantity<dim::Pressure, role::Vapor>;

pub type RelativeHumidity = Quantity<dim::Humidity, role::Relative>;
pub type DegreeOfSaturation = Quantity<dim::Humidity, role::DegreeOfSaturation>;

pub type HumidityRatio = Quantity<dim::MassRatio, role::Mixing>;
pub type SpecificHumidity = Quantity<dim::MassRatio, role::Specific>;
/// Mass of water vapour per volume of moist air.
pub type AbsoluteHumidity = Quantity<dim::Density, role::Absolute>;

pub type Altitude = Quantity<dim::Length, role::Altitude>;
