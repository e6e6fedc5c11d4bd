//! # psychrometrics
//!
//! Moist-air properties after ASHRAE Fundamentals (2017), chapter 1, in
//! imperial (°F, psi, Btu/lb) or metric (°C, Pa, J/kg) units.
//!
//! ## Highlights
//!
//! * **Three ways in.** Dry bulb plus one of wet bulb, relative humidity or
//!   dew point fixes a full [`PsychrometricState`].
//! * **Typed quantities.** A [`WetBulb`] cannot be passed where a
//!   [`DewPoint`] is expected, and every value carries its unit.
//! * **Any input unit.** Inputs are converted into the active
//!   [`UnitSystem`]; results come back in it.
//! * **Altitude.** Give an [`Altitude`] instead of a pressure and the
//!   standard atmosphere fills in the rest.
//! * **Configurable solvers.** Iteration budget, tolerance and humidity
//!   floor live in an [`Environment`], read from `PSYCHRO_*` variables or
//!   a `.env` file.
//!
//! ## Quick example
//!
//! ```
//! use psychrometrics::{DryBulb, MoistAir, RelativeHumidity, TotalPressure, UnitSystem};
//!
//! let air = MoistAir::with_units(UnitSystem::Imperial);
//! let state = air.from_relative_humidity(
//!     DryBulb::fahrenheit(75.0),
//!     RelativeHumidity::percent(50.0),
//!     TotalPressure::psi(14.696),
//! )?;
//!
//! println!("{state}");
//! assert!((state.dew_point().value() - 55.15).abs() < 0.05);
//! # Ok::<(), psychrometrics::PsychrometricError>(())
//! ```
//!
//! ## Unit system
//!
//! Choose the system at construction time, or hand the engine a complete
//! [`Environment`]:
//!
//! ```
//! use psychrometrics::{Environment, MoistAir, TemperatureDelta};
//!
//! let env = Environment::metric()
//!     .max_iterations(50)
//!     .temperature_tolerance(TemperatureDelta::celsius(0.0005));
//! let _air = MoistAir::with_environment(env)?;
//! # Ok::<(), psychrometrics::PsychrometricError>(())
//! ```
//!
//! ## Single properties
//!
//! The closed-form relations and the two solvers are public too:
//!
//! ```
//! use psychrometrics::{saturation_pressure, DryBulb, Environment};
//!
//! let p = saturation_pressure(&DryBulb::celsius(20.0), &Environment::metric())?;
//! assert!((p.value() - 2338.8).abs() < 0.5);
//! # Ok::<(), psychrometrics::PsychrometricError>(())
//! ```

// ── Modules ──────────────────────────────────────────────────────────
pub mod air;
pub mod altitude;
pub mod derived;
pub mod environment;
pub mod error;
pub mod properties;
pub mod quantity;
pub mod saturation;
pub mod solver;

// ── Public re-exports ────────────────────────────────────────────────
pub use air::{Atmosphere, MoistAir, StateInput};
pub use altitude::{altitude_at_pressure, pressure_at_altitude, temperature_at_altitude};
pub use derived::*;
pub use environment::Environment;
pub use error::{PsychrometricError, Result};
pub use properties::PsychrometricState;
pub use quantity::{
    AbsoluteHumidity, Altitude, DegreeOfSaturation, Density, DewPoint, Dimension, DryBulb,
    Enthalpy, HumidityRatio, Length, Pressure, Quantity, RelativeHumidity, Role,
    SaturationPressure, SpecificHumidity, SpecificVolume, Temperature, TemperatureDelta,
    TotalPressure, VaporPressure, WetBulb, dim, role,
};
pub use saturation::{Phase, saturation_pressure};
pub use solver::{
    dew_point_from_humidity_ratio, dew_point_from_relative_humidity,
    dew_point_from_vapor_pressure, wet_bulb_from_humidity_ratio,
    wet_bulb_from_relative_humidity,
};

pub use converter::{
    DensityUnit, EnthalpyUnit, HumidityRatioUnit, HumidityUnit, LengthUnit, PressureUnit,
    SpecificVolumeUnit, TemperatureDeltaUnit, TemperatureUnit, Unit, UnitSystem,
};
