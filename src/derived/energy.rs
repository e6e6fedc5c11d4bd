//! Moist-air specific enthalpy, ASHRAE Fundamentals (2017) ch. 1, eq. 32.
//!
//! | Units    | h                                        |
//! |----------|------------------------------------------|
//! | Imperial | `0.240·T + W·(1061 + 0.444·T)` Btu/lb, T in °F |
//! | Metric   | `1000·(1.006·T + W·(2501 + 1.86·T))` J/kg, T in °C |

use converter::UnitSystem;

use super::humidity::floor_ratio;
use crate::environment::Environment;
use crate::error::*;
use crate::quantity::*;

/// (c_p of dry air, latent heat at 0°, c_p of vapour, output scale)
fn coefficients(units: UnitSystem) -> (f64, f64, f64, f64) {
    match units {
        UnitSystem::Imperial => (0.240, 1061.0, 0.444, 1.0),
        UnitSystem::Metric => (1.006, 2501.0, 1.86, 1000.0),
    }
}

pub fn enthalpy(
    dry_bulb: &DryBulb,
    humidity_ratio: &HumidityRatio,
    env: &Environment,
) -> Result<Enthalpy> {
    let t = dry_bulb.convert(env.units.temperature());
    let w = humidity_ratio.as_mass_ratio();
    validate_finite("dry bulb", t)?;
    validate_finite("humidity ratio", w)?;
    let (cpa, hfg, cpv, scale) = coefficients(env.units);
    let h = (cpa * t + w * (hfg + cpv * t)) * scale;
    Ok(Enthalpy::new(h, env.units.enthalpy()))
}

/// The enthalpy relation solved for the dry bulb.
pub fn dry_bulb_from_enthalpy(
    enthalpy: &Enthalpy,
    humidity_ratio: &HumidityRatio,
    env: &Environment,
) -> Result<DryBulb> {
    let (cpa, hfg, cpv, scale) = coefficients(env.units);
    let h = enthalpy.convert(env.units.enthalpy()) / scale;
    let w = humidity_ratio.as_mass_ratio();
    validate_finite("enthalpy", h)?;
    validate_finite("humidity ratio", w)?;
    let t = (h - hfg * w) / (cpa + cpv * w);
    Ok(DryBulb::new(t, env.units.temperature()))
}

/// The enthalpy relation solved for the humidity ratio (floored).
pub fn humidity_ratio_from_enthalpy(
    dry_bulb: &DryBulb,
    enthalpy: &Enthalpy,
    env: &Environment,
) -> Result<HumidityRatio> {
    let (cpa, hfg, cpv, scale) = coefficients(env.units);
    let t = dry_bulb.convert(env.units.temperature());
    let h = enthalpy.convert(env.units.enthalpy()) / scale;
    validate_finite("dry bulb", t)?;
    validate_finite("enthalpy", h)?;
    let denominator = hfg + cpv * t;
    if denominator <= 0.0 {
        return Err(PsychrometricError::InvalidInput(format!(
            "dry bulb {dry_bulb} is too low to solve for the humidity ratio"
        )));
    }
    Ok(floor_ratio((h - cpa * t) / denominator, env))
}
