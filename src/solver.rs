//! Iterative inversions of the closed-form relations.
//!
//! * Dew point from vapour pressure: Newton–Raphson on `ln p_ws(T)`,
//!   starting at the dry bulb.
//! * Wet bulb from humidity ratio: bisection between the dew point and the
//!   dry bulb.
//!
//! Both stop once successive estimates (or the bracket) are within
//! [`Environment::tolerance`] and fail with
//! [`PsychrometricError::MaxIterations`] when the iteration budget runs out.

use tracing::{debug, trace, warn};

use crate::derived::MOLE_WEIGHT_RATIO;
use crate::derived::humidity::{self, humidity_ratio_from_wet_bulb_raw};
use crate::environment::Environment;
use crate::error::*;
use crate::quantity::*;
use crate::saturation;

const DEW_POINT: &str = "dew point";
const WET_BULB: &str = "wet bulb";

// ────────────────────────────────────────────────────────────────────
//  Dew point (Newton–Raphson)
// ────────────────────────────────────────────────────────────────────

/// Dew point in the unit system's degrees for a dry bulb `t_db` and a
/// vapour pressure `pv` (psi or Pa).
pub(crate) fn dew_point_raw(t_db: f64, pv: f64, env: &Environment) -> Result<f64> {
    validate_positive("vapor pressure", pv)?;
    let units = env.units;
    let (t_min, t_max) = saturation::temperature_bounds(units);
    let p_min = saturation::saturation_pressure_raw(t_min, units)?;
    let p_max = saturation::saturation_pressure_raw(t_max, units)?;
    if pv < p_min || pv > p_max {
        return Err(PsychrometricError::OutOfRange {
            quantity: "vapor pressure",
            value: pv,
            min: p_min,
            max: p_max,
        });
    }

    let tol = env.tolerance();
    let ln_target = pv.ln();
    let mut t = t_db;

    for iteration in 1..=env.max_iterations {
        let residual = saturation::ln_saturation_pressure(t, units)? - ln_target;
        let slope = saturation::d_ln_saturation_pressure(t, units)?;
        let next = (t - residual / slope).clamp(t_min, t_max);
        trace!(iteration, estimate = next, "{DEW_POINT} step");

        if (next - t).abs() <= tol {
            debug!(iterations = iteration, dew_point = next, "{DEW_POINT} converged");
            if next > t_db {
                debug!(dew_point = next, dry_bulb = t_db, "dew point above dry bulb, clamping");
                return Ok(t_db);
            }
            return Ok(next);
        }
        t = next;
    }

    warn!(iterations = env.max_iterations, last = t, "{DEW_POINT} did not converge");
    Err(PsychrometricError::MaxIterations {
        solver: DEW_POINT,
        iterations: env.max_iterations,
    })
}

/// Temperature at which air holding `vapor_pressure` saturates.
///
/// Never above `dry_bulb`: a non-physical estimate is clamped to it.
pub fn dew_point_from_vapor_pressure(
    dry_bulb: &DryBulb,
    vapor_pressure: &VaporPressure,
    env: &Environment,
) -> Result<DewPoint> {
    let t = dew_point_raw(
        dry_bulb.convert(env.units.temperature()),
        vapor_pressure.convert(env.units.pressure()),
        env,
    )?;
    Ok(DewPoint::new(t, env.units.temperature()))
}

pub fn dew_point_from_humidity_ratio(
    dry_bulb: &DryBulb,
    humidity_ratio: &HumidityRatio,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<DewPoint> {
    let pv = humidity::vapor_pressure_from_humidity_ratio(humidity_ratio, total_pressure, env)?;
    dew_point_from_vapor_pressure(dry_bulb, &pv, env)
}

pub fn dew_point_from_relative_humidity(
    dry_bulb: &DryBulb,
    relative_humidity: &RelativeHumidity,
    env: &Environment,
) -> Result<DewPoint> {
    let pv = humidity::vapor_pressure(dry_bulb, relative_humidity, env)?;
    dew_point_from_vapor_pressure(dry_bulb, &pv, env)
}

// ────────────────────────────────────────────────────────────────────
//  Wet bulb (bisection)
// ────────────────────────────────────────────────────────────────────

/// Wet bulb in the unit system's degrees for a dry bulb `t_db`, humidity
/// ratio `w` and total pressure `p` (psi or Pa).
pub(crate) fn wet_bulb_raw(t_db: f64, w: f64, p: f64, env: &Environment) -> Result<f64> {
    validate_positive("humidity ratio", w)?;
    validate_positive("total pressure", p)?;
    let w = w.max(env.min_humidity_ratio);
    let pv = p * w / (MOLE_WEIGHT_RATIO + w);
    let t_dp = dew_point_raw(t_db, pv, env)?;
    if t_dp > t_db {
        return Err(PsychrometricError::InvalidInput(format!(
            "dew point {t_dp} above dry bulb {t_db}"
        )));
    }

    let tol = env.tolerance();
    let (mut lo, mut hi) = (t_dp, t_db);
    let mut t_wb = (lo + hi) / 2.0;
    let mut iterations = 0u32;

    while hi - lo > tol {
        if iterations >= env.max_iterations {
            warn!(iterations, bracket_low = lo, bracket_high = hi, "{WET_BULB} did not converge");
            return Err(PsychrometricError::MaxIterations {
                solver: WET_BULB,
                iterations: env.max_iterations,
            });
        }
        let w_star = humidity_ratio_from_wet_bulb_raw(t_db, t_wb, p, env.units)?;
        if w_star > w {
            hi = t_wb;
        } else {
            lo = t_wb;
        }
        t_wb = (lo + hi) / 2.0;
        iterations += 1;
        trace!(iteration = iterations, estimate = t_wb, "{WET_BULB} step");
    }

    debug!(iterations, wet_bulb = t_wb, "{WET_BULB} converged");
    Ok(t_wb)
}

/// Wet bulb from the moisture content of the air.
///
/// Fails with [`PsychrometricError::MaxIterations`] when the bracket does
/// not shrink below the tolerance within the iteration budget.
pub fn wet_bulb_from_humidity_ratio(
    dry_bulb: &DryBulb,
    humidity_ratio: &HumidityRatio,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<WetBulb> {
    let t = wet_bulb_raw(
        dry_bulb.convert(env.units.temperature()),
        humidity_ratio.as_mass_ratio(),
        total_pressure.convert(env.units.pressure()),
        env,
    )?;
    Ok(WetBulb::new(t, env.units.temperature()))
}

pub fn wet_bulb_from_relative_humidity(
    dry_bulb: &DryBulb,
    relative_humidity: &RelativeHumidity,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<WetBulb> {
    let w = humidity::humidity_ratio_from_relative_humidity(
        dry_bulb,
        relative_humidity,
        total_pressure,
        env,
    )?;
    wet_bulb_from_humidity_ratio(dry_bulb, &w, total_pressure, env)
}
