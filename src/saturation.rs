//! Saturation pressure of water vapour, ASHRAE Fundamentals (2017) ch. 1,
//! eqs. 5 and 6.
//!
//! The correlation has one branch over ice and one over liquid water. The
//! branch switch sits at the triple point (0.01 °C / 32.018 °F), not at the
//! freezing point: the two ASHRAE fits do not meet at 0 °C, and that
//! discontinuity stalls the dew-point Newton iteration right at the
//! boundary. At the triple point they agree to better than one part in
//! 10⁶.

use converter::UnitSystem;

use crate::environment::Environment;
use crate::error::*;
use crate::quantity::{Quantity, Role, SaturationPressure, dim};

/// Which side of the triple point a temperature falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// At or below the triple point.
    Ice,
    Water,
}

struct Correlation {
    /// c₁/T + c₂ + c₃T + c₄T² + c₅T³ + c₆T⁴ + c₇ ln T
    ice: [f64; 7],
    /// c₈/T + c₉ + c₁₀T + c₁₁T² + c₁₂T³ + c₁₃ ln T
    water: [f64; 6],
    /// Relative-scale offset to the absolute scale.
    absolute_offset: f64,
    triple_point: f64,
    min: f64,
    max: f64,
}

// T in °R, p in psia.
const IMPERIAL: Correlation = Correlation {
    ice: [
        -1.0214165E+04,
        -4.8932428,
        -5.3765794E-03,
        1.9202377E-07,
        3.5575832E-10,
        -9.0344688E-14,
        4.1635019,
    ],
    water: [
        -1.0440397E+04,
        -1.1294650E+01,
        -2.7022355E-02,
        1.2890360E-05,
        -2.4780681E-09,
        6.5459673,
    ],
    absolute_offset: 459.67,
    triple_point: 32.018,
    min: -148.0,
    max: 392.0,
};

// T in K, p in Pa.
const METRIC: Correlation = Correlation {
    ice: [
        -5.6745359E+03,
        6.3925247,
        -9.6778430E-03,
        6.2215701E-07,
        2.0747825E-09,
        -9.4840240E-13,
        4.1635019,
    ],
    water: [
        -5.8002206E+03,
        1.3914993,
        -4.8640239E-02,
        4.1764768E-05,
        -1.4452093E-08,
        6.5459673,
    ],
    absolute_offset: 273.15,
    triple_point: 0.01,
    min: -100.0,
    max: 200.0,
};

fn correlation(units: UnitSystem) -> &'static Correlation {
    match units {
        UnitSystem::Imperial => &IMPERIAL,
        UnitSystem::Metric => &METRIC,
    }
}

/// Valid temperature span of the correlation in the unit system's degrees
/// (°F or °C).
pub fn temperature_bounds(units: UnitSystem) -> (f64, f64) {
    let c = correlation(units);
    (c.min, c.max)
}

/// Triple point of water in °F or °C.
pub fn triple_point(units: UnitSystem) -> f64 {
    correlation(units).triple_point
}

pub fn phase(t: f64, units: UnitSystem) -> Phase {
    if t <= correlation(units).triple_point {
        Phase::Ice
    } else {
        Phase::Water
    }
}

fn check_range(t: f64, c: &Correlation) -> Result<()> {
    validate_finite("temperature", t)?;
    if t < c.min || t > c.max {
        return Err(PsychrometricError::OutOfRange {
            quantity: "temperature",
            value: t,
            min: c.min,
            max: c.max,
        });
    }
    Ok(())
}

fn ln_pws(phase: Phase, ta: f64, c: &Correlation) -> f64 {
    match phase {
        Phase::Ice => {
            let k = &c.ice;
            k[0] / ta
                + k[1]
                + k[2] * ta
                + k[3] * ta.powi(2)
                + k[4] * ta.powi(3)
                + k[5] * ta.powi(4)
                + k[6] * ta.ln()
        }
        Phase::Water => {
            let k = &c.water;
            k[0] / ta + k[1] + k[2] * ta + k[3] * ta.powi(2) + k[4] * ta.powi(3) + k[5] * ta.ln()
        }
    }
}

fn d_ln_pws(phase: Phase, ta: f64, c: &Correlation) -> f64 {
    match phase {
        Phase::Ice => {
            let k = &c.ice;
            -k[0] / ta.powi(2)
                + k[2]
                + 2.0 * k[3] * ta
                + 3.0 * k[4] * ta.powi(2)
                + 4.0 * k[5] * ta.powi(3)
                + k[6] / ta
        }
        Phase::Water => {
            let k = &c.water;
            -k[0] / ta.powi(2) + k[2] + 2.0 * k[3] * ta + 3.0 * k[4] * ta.powi(2) + k[5] / ta
        }
    }
}

/// `ln(p_ws)` at `t` (°F or °C per `units`); pressure in psi or Pa.
pub(crate) fn ln_saturation_pressure(t: f64, units: UnitSystem) -> Result<f64> {
    let c = correlation(units);
    check_range(t, c)?;
    Ok(ln_pws(phase(t, units), t + c.absolute_offset, c))
}

/// `d ln(p_ws) / dT`, same branch selection as [`ln_saturation_pressure`].
/// Only the dew-point solver needs it.
pub(crate) fn d_ln_saturation_pressure(t: f64, units: UnitSystem) -> Result<f64> {
    let c = correlation(units);
    check_range(t, c)?;
    Ok(d_ln_pws(phase(t, units), t + c.absolute_offset, c))
}

/// Raw saturation pressure (psi or Pa) at `t` (°F or °C).
pub(crate) fn saturation_pressure_raw(t: f64, units: UnitSystem) -> Result<f64> {
    Ok(ln_saturation_pressure(t, units)?.exp())
}

/// Saturation pressure of water vapour at `temperature`.
///
/// Fails with [`PsychrometricError::OutOfRange`] outside −148…392 °F
/// (−100…200 °C).
///
/// ```
/// use psychrometrics::{saturation_pressure, DryBulb, Environment};
///
/// let env = Environment::metric();
/// let p = saturation_pressure(&DryBulb::celsius(20.0), &env)?;
/// assert!((p.value() - 2338.8).abs() < 0.5);
/// # Ok::<(), psychrometrics::PsychrometricError>(())
/// ```
pub fn saturation_pressure<R: Role>(
    temperature: &Quantity<dim::Temperature, R>,
    env: &Environment,
) -> Result<SaturationPressure> {
    let t = temperature.convert(env.units.temperature());
    let p = saturation_pressure_raw(t, env.units)?;
    Ok(SaturationPressure::new(p, env.units.pressure()))
}
