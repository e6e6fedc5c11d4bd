//! Standard-atmosphere helpers, ASHRAE Fundamentals (2017) ch. 1, eqs. 3–4:
//! `P = c₁·(1 − c₂·Z)^5.2559` and `T = T₀ − a·Z`.

use converter::UnitSystem;

use crate::environment::Environment;
use crate::error::*;
use crate::quantity::*;

const EXPONENT: f64 = 5.2559;

/// (sea-level pressure, c₂, sea-level temperature, lapse rate)
fn constants(units: UnitSystem) -> (f64, f64, f64, f64) {
    match units {
        // psi, 1/ft, °F, °F/ft
        UnitSystem::Imperial => (14.696, 6.8754e-06, 59.0, 0.00356620),
        // Pa, 1/m, °C, °C/m
        UnitSystem::Metric => (101_325.0, 2.25577e-05, 15.0, 0.0065),
    }
}

fn checked_altitude(altitude: &Altitude, env: &Environment) -> Result<f64> {
    let z = altitude.convert(env.units.length());
    validate_finite("altitude", z)?;
    let (_, c2, _, _) = constants(env.units);
    let ceiling = 1.0 / c2;
    if z >= ceiling {
        return Err(PsychrometricError::OutOfRange {
            quantity: "altitude",
            value: z,
            min: f64::NEG_INFINITY,
            max: ceiling,
        });
    }
    Ok(z)
}

/// Standard atmospheric pressure at `altitude`.
///
/// ```
/// use psychrometrics::{pressure_at_altitude, Altitude, Environment};
///
/// let p = pressure_at_altitude(&Altitude::feet(0.0), &Environment::imperial())?;
/// assert!((p.value() - 14.696).abs() < 1e-9);
/// # Ok::<(), psychrometrics::PsychrometricError>(())
/// ```
pub fn pressure_at_altitude(altitude: &Altitude, env: &Environment) -> Result<TotalPressure> {
    let z = checked_altitude(altitude, env)?;
    let (p0, c2, _, _) = constants(env.units);
    let p = p0 * (1.0 - c2 * z).powf(EXPONENT);
    Ok(TotalPressure::new(p, env.units.pressure()))
}

/// Altitude at which the standard atmosphere has `pressure`.
pub fn altitude_at_pressure(pressure: &TotalPressure, env: &Environment) -> Result<Altitude> {
    let p = pressure.convert(env.units.pressure());
    validate_positive("total pressure", p)?;
    let (p0, c2, _, _) = constants(env.units);
    let z = (1.0 - (p / p0).powf(1.0 / EXPONENT)) / c2;
    Ok(Altitude::new(z, env.units.length()))
}

/// Standard-atmosphere temperature at `altitude`.
pub fn temperature_at_altitude(altitude: &Altitude, env: &Environment) -> Result<Temperature> {
    let z = checked_altitude(altitude, env)?;
    let (_, _, t0, lapse) = constants(env.units);
    Ok(Temperature::new(t0 - lapse * z, env.units.temperature()))
}
