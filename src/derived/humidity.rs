use converter::{DensityUnit, HumidityRatioUnit, SpecificVolumeUnit, UnitSystem};

use super::MOLE_WEIGHT_RATIO;
use crate::environment::Environment;
use crate::error::*;
use crate::quantity::*;
use crate::saturation::{self, Phase};

// ── Helpers ─────────────────────────────────────────────────────────

/// Apply the configured floor so a ratio never reaches zero.
pub(crate) fn floor_ratio(w: f64, env: &Environment) -> HumidityRatio {
    HumidityRatio::mass_ratio(w.max(env.min_humidity_ratio))
}

/// `0.621945·p / (P − p)` without the floor. Both pressures in the same unit.
pub(crate) fn humidity_ratio_raw(total: f64, partial: f64) -> Result<f64> {
    validate_positive("total pressure", total)?;
    validate_finite("partial pressure", partial)?;
    if partial < 0.0 {
        return Err(PsychrometricError::InvalidInput(format!(
            "partial pressure must not be negative, got {partial}"
        )));
    }
    if partial >= total {
        return Err(PsychrometricError::InvalidInput(format!(
            "partial pressure {partial} must be below total pressure {total}"
        )));
    }
    Ok(MOLE_WEIGHT_RATIO * partial / (total - partial))
}

fn validate_ratio(name: &str, w: f64) -> Result<()> {
    validate_finite(name, w)?;
    if w < 0.0 {
        return Err(PsychrometricError::InvalidInput(format!(
            "{name} must not be negative, got {w}"
        )));
    }
    Ok(())
}

// ── Vapor pressure ──────────────────────────────────────────────────

/// Partial pressure of water vapour: `p_ws(T_db) · φ`.
pub fn vapor_pressure(
    dry_bulb: &DryBulb,
    relative_humidity: &RelativeHumidity,
    env: &Environment,
) -> Result<VaporPressure> {
    let phi = relative_humidity.as_fraction();
    validate_finite("relative humidity", phi)?;
    if !(0.0..=1.0).contains(&phi) {
        return Err(PsychrometricError::InvalidInput(format!(
            "relative humidity must lie within 0–100 %, got {relative_humidity}"
        )));
    }
    let psat = saturation::saturation_pressure(dry_bulb, env)?;
    Ok(VaporPressure::new(psat.value() * phi, psat.unit()))
}

/// Partial pressure of water vapour from the humidity ratio:
/// `p_w = P·W / (0.621945 + W)`.
pub fn vapor_pressure_from_humidity_ratio(
    humidity_ratio: &HumidityRatio,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<VaporPressure> {
    let w = humidity_ratio.as_mass_ratio();
    validate_ratio("humidity ratio", w)?;
    let p = total_pressure.convert(env.units.pressure());
    validate_positive("total pressure", p)?;
    Ok(VaporPressure::new(p * w / (MOLE_WEIGHT_RATIO + w), env.units.pressure()))
}

// ── Humidity ratio ──────────────────────────────────────────────────

/// Humidity ratio for any partial pressure of water vapour:
/// `W = 0.621945·p / (P − p)`, floored at
/// [`Environment::min_humidity_ratio`].
///
/// Pass a [`VaporPressure`] for the actual ratio, a [`SaturationPressure`]
/// for the saturated ratio, or the saturation pressure at the dew point.
pub fn humidity_ratio<R: Role>(
    total_pressure: &TotalPressure,
    partial_pressure: &Quantity<dim::Pressure, R>,
    env: &Environment,
) -> Result<HumidityRatio> {
    let unit = env.units.pressure();
    let w = humidity_ratio_raw(total_pressure.convert(unit), partial_pressure.convert(unit))?;
    Ok(floor_ratio(w, env))
}

/// Humidity ratio of saturated air at `dry_bulb` and `total_pressure`.
pub fn saturated_humidity_ratio(
    dry_bulb: &DryBulb,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<HumidityRatio> {
    let psat = saturation::saturation_pressure(dry_bulb, env)?;
    humidity_ratio(total_pressure, &psat, env)
}

pub fn humidity_ratio_from_relative_humidity(
    dry_bulb: &DryBulb,
    relative_humidity: &RelativeHumidity,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<HumidityRatio> {
    let pv = vapor_pressure(dry_bulb, relative_humidity, env)?;
    humidity_ratio(total_pressure, &pv, env)
}

/// The vapour pressure of moist air equals the saturation pressure at its
/// dew point.
pub fn humidity_ratio_from_dew_point(
    dew_point: &DewPoint,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<HumidityRatio> {
    let pv = saturation::saturation_pressure(dew_point, env)?;
    humidity_ratio(total_pressure, &pv, env)
}

/// Raw humidity ratio from dry bulb and wet bulb, both in the unit system's
/// degrees and the pressure in psi or Pa. ASHRAE Fundamentals (2017) ch. 1,
/// eqs. 33 and 35, with the branch switched at the triple point.
pub(crate) fn humidity_ratio_from_wet_bulb_raw(
    t_db: f64,
    t_wb: f64,
    total: f64,
    units: UnitSystem,
) -> Result<f64> {
    if t_wb > t_db {
        return Err(PsychrometricError::InvalidInput(format!(
            "wet bulb {t_wb} must not exceed dry bulb {t_db}"
        )));
    }
    let ws = humidity_ratio_raw(total, saturation::saturation_pressure_raw(t_wb, units)?)?;
    let w = match (units, saturation::phase(t_wb, units)) {
        (UnitSystem::Imperial, Phase::Water) => {
            ((1093.0 - 0.556 * t_wb) * ws - 0.240 * (t_db - t_wb))
                / (1093.0 + 0.444 * t_db - t_wb)
        }
        (UnitSystem::Imperial, Phase::Ice) => {
            ((1220.0 - 0.04 * t_wb) * ws - 0.240 * (t_db - t_wb))
                / (1220.0 + 0.444 * t_db - 0.48 * t_wb)
        }
        (UnitSystem::Metric, Phase::Water) => {
            ((2501.0 - 2.326 * t_wb) * ws - 1.006 * (t_db - t_wb))
                / (2501.0 + 1.86 * t_db - 4.186 * t_wb)
        }
        (UnitSystem::Metric, Phase::Ice) => {
            ((2830.0 - 0.24 * t_wb) * ws - 1.006 * (t_db - t_wb))
                / (2830.0 + 1.86 * t_db - 2.1 * t_wb)
        }
    };
    Ok(w)
}

/// Humidity ratio from the psychrometer reading (dry bulb, wet bulb).
///
/// A wet bulb above the dry bulb is rejected; equal readings describe
/// saturated air.
pub fn humidity_ratio_from_wet_bulb(
    dry_bulb: &DryBulb,
    wet_bulb: &WetBulb,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<HumidityRatio> {
    let t = env.units.temperature();
    let w = humidity_ratio_from_wet_bulb_raw(
        dry_bulb.convert(t),
        wet_bulb.convert(t),
        total_pressure.convert(env.units.pressure()),
        env.units,
    )?;
    Ok(floor_ratio(w, env))
}

/// `γ / (1 − γ)`; only defined for `0 < γ < 1`.
pub fn humidity_ratio_from_specific_humidity(
    specific_humidity: &SpecificHumidity,
) -> Result<HumidityRatio> {
    let q = specific_humidity.as_mass_ratio();
    validate_finite("specific humidity", q)?;
    if q <= 0.0 || q >= 1.0 {
        return Err(PsychrometricError::InvalidInput(format!(
            "specific humidity must lie strictly between 0 and 1, got {q}"
        )));
    }
    Ok(HumidityRatio::mass_ratio(q / (1.0 - q)))
}

// ── Relative humidity ───────────────────────────────────────────────

/// `φ = 100 · p_w / p_ws`. A zero vapour pressure (bone-dry air) is
/// accepted; a negative one is not.
pub fn relative_humidity(
    vapor_pressure: &VaporPressure,
    saturation_pressure: &SaturationPressure,
) -> Result<RelativeHumidity> {
    let psat = saturation_pressure.value();
    validate_positive("saturation pressure", psat)?;
    let pv = vapor_pressure.convert(saturation_pressure.unit());
    validate_finite("vapor pressure", pv)?;
    if pv < 0.0 {
        return Err(PsychrometricError::InvalidInput(format!(
            "vapor pressure must not be negative, got {vapor_pressure}"
        )));
    }
    Ok(RelativeHumidity::percent(100.0 * pv / psat))
}

/// Relative humidity from the dew point with the Magnus form
/// (17.625, 243.04 °C). An approximation; the aggregate state uses the
/// ASHRAE saturation correlation instead.
///
/// Only defined for a dew point at or below the dry bulb.
pub fn relative_humidity_from_dew_point(
    dry_bulb: &DryBulb,
    dew_point: &DewPoint,
) -> Result<RelativeHumidity> {
    let magnus = |t: f64| (17.625 * t / (243.04 + t)).exp();
    let t_db = dry_bulb.convert(converter::TemperatureUnit::Celsius);
    let t_dp = dew_point.convert(converter::TemperatureUnit::Celsius);
    validate_finite("dry bulb", t_db)?;
    validate_finite("dew point", t_dp)?;
    if t_dp > t_db {
        return Err(PsychrometricError::InvalidInput(format!(
            "dew point {dew_point} must not exceed dry bulb {dry_bulb}"
        )));
    }
    Ok(RelativeHumidity::percent(100.0 * magnus(t_dp) / magnus(t_db)))
}

pub fn relative_humidity_from_humidity_ratio(
    dry_bulb: &DryBulb,
    humidity_ratio: &HumidityRatio,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<RelativeHumidity> {
    let pv = vapor_pressure_from_humidity_ratio(humidity_ratio, total_pressure, env)?;
    let psat = saturation::saturation_pressure(dry_bulb, env)?;
    relative_humidity(&pv, &psat)
}

// ── Degree of saturation ────────────────────────────────────────────

/// `μ = W / W_s`, both at the same dry bulb and pressure.
pub fn degree_of_saturation(
    humidity_ratio: &HumidityRatio,
    saturated: &HumidityRatio,
) -> Result<DegreeOfSaturation> {
    let w = humidity_ratio.as_mass_ratio();
    let ws = saturated.as_mass_ratio();
    validate_positive("humidity ratio", w)?;
    validate_positive("saturated humidity ratio", ws)?;
    Ok(DegreeOfSaturation::from_fraction(w / ws))
}

pub fn degree_of_saturation_at(
    dry_bulb: &DryBulb,
    humidity_ratio: &HumidityRatio,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<DegreeOfSaturation> {
    let ws = saturated_humidity_ratio(dry_bulb, total_pressure, env)?;
    degree_of_saturation(humidity_ratio, &ws)
}

// ── Specific / absolute humidity ────────────────────────────────────

/// `γ = W / (1 + W)`, mass of water per mass of moist air.
pub fn specific_humidity(humidity_ratio: &HumidityRatio) -> Result<SpecificHumidity> {
    let w = humidity_ratio.as_mass_ratio();
    validate_ratio("humidity ratio", w)?;
    Ok(SpecificHumidity::new(w / (1.0 + w), HumidityRatioUnit::MassRatio))
}

/// Mass of water vapour per volume of moist air, `W / v`. Reported in the
/// density unit matching the specific volume's unit.
pub fn absolute_humidity(
    humidity_ratio: &HumidityRatio,
    specific_volume: &SpecificVolume,
) -> Result<AbsoluteHumidity> {
    let w = humidity_ratio.as_mass_ratio();
    validate_ratio("humidity ratio", w)?;
    let v = specific_volume.value();
    validate_positive("specific volume", v)?;
    let unit = match specific_volume.unit() {
        SpecificVolumeUnit::CubicFootPerPound => DensityUnit::PoundPerCubicFoot,
        SpecificVolumeUnit::CubicMeterPerKilogram => DensityUnit::KilogramPerCubicMeter,
    };
    Ok(AbsoluteHumidity::new(w / v, unit))
}
