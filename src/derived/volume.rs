use converter::{DensityUnit, SpecificVolumeUnit, Unit, UnitSystem};

use super::VAPOR_GAS_CONSTANT_RATIO;
use crate::environment::Environment;
use crate::error::*;
use crate::quantity::*;

/// Gas constant of dry air over the pressure scale of the unit system:
/// 53.350 ft·lbf/(lb·°R) / 144 in²/ft² for psi, 287.042 J/(kg·K) for Pa.
fn gas_constant(units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Imperial => 53.350 / 144.0,
        UnitSystem::Metric => 287.042,
    }
}

/// Absolute temperature and pressure of a state, in the unit system.
fn absolute_state(
    dry_bulb: &DryBulb,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<(f64, f64)> {
    let t = dry_bulb.convert(env.units.absolute_temperature());
    let p = total_pressure.convert(env.units.pressure());
    validate_positive("absolute temperature", t)?;
    validate_positive("total pressure", p)?;
    Ok((t, p))
}

/// Volume of moist air per mass of dry air:
/// `v = R_da·T·(1 + 1.607858·W) / P`.
pub fn specific_volume(
    dry_bulb: &DryBulb,
    humidity_ratio: &HumidityRatio,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<SpecificVolume> {
    let (t, p) = absolute_state(dry_bulb, total_pressure, env)?;
    let w = humidity_ratio.as_mass_ratio();
    validate_finite("humidity ratio", w)?;
    let v = gas_constant(env.units) * t * (1.0 + VAPOR_GAS_CONSTANT_RATIO * w) / p;
    Ok(SpecificVolume::new(v, env.units.specific_volume()))
}

/// The specific-volume relation solved for the dry bulb.
pub fn dry_bulb_from_specific_volume(
    specific_volume: &SpecificVolume,
    humidity_ratio: &HumidityRatio,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<DryBulb> {
    let v = specific_volume.convert(env.units.specific_volume());
    let p = total_pressure.convert(env.units.pressure());
    let w = humidity_ratio.as_mass_ratio();
    validate_positive("specific volume", v)?;
    validate_positive("total pressure", p)?;
    validate_finite("humidity ratio", w)?;
    let t_abs = v * p / (gas_constant(env.units) * (1.0 + VAPOR_GAS_CONSTANT_RATIO * w));
    let t = env.units.absolute_temperature().convert(t_abs, env.units.temperature());
    Ok(DryBulb::new(t, env.units.temperature()))
}

/// Moist-air density `(1 + W) / v`, in the density unit matching `v`.
pub fn density(
    specific_volume: &SpecificVolume,
    humidity_ratio: &HumidityRatio,
) -> Result<Density> {
    let v = specific_volume.value();
    let w = humidity_ratio.as_mass_ratio();
    validate_positive("specific volume", v)?;
    validate_finite("humidity ratio", w)?;
    let unit = match specific_volume.unit() {
        SpecificVolumeUnit::CubicFootPerPound => DensityUnit::PoundPerCubicFoot,
        SpecificVolumeUnit::CubicMeterPerKilogram => DensityUnit::KilogramPerCubicMeter,
    };
    Ok(Density::new((1.0 + w) / v, unit))
}

/// Density of dry air, `P / (R_da·T)`.
pub fn dry_air_density(
    dry_bulb: &DryBulb,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<Density> {
    let (t, p) = absolute_state(dry_bulb, total_pressure, env)?;
    Ok(Density::new(p / (gas_constant(env.units) * t), env.units.density()))
}

pub fn moist_air_density(
    dry_bulb: &DryBulb,
    humidity_ratio: &HumidityRatio,
    total_pressure: &TotalPressure,
    env: &Environment,
) -> Result<Density> {
    let v = specific_volume(dry_bulb, humidity_ratio, total_pressure, env)?;
    density(&v, humidity_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn standard_air() {
        let env = Environment::imperial();
        let p = TotalPressure::psi(14.696);
        let rho = dry_air_density(&DryBulb::fahrenheit(70.0), &p, &env).unwrap();
        assert_relative_eq!(rho.value(), 0.0749, max_relative = 2e-3);

        let env = Environment::metric();
        let p = TotalPressure::pascals(101_325.0);
        let rho = dry_air_density(&DryBulb::celsius(20.0), &p, &env).unwrap();
        assert_relative_eq!(rho.value(), 1.2041, max_relative = 1e-3);
    }

    #[test]
    fn metric_specific_volume() {
        let env = Environment::metric();
        let v = specific_volume(
            &DryBulb::celsius(30.0),
            &HumidityRatio::mass_ratio(0.010517),
            &TotalPressure::pascals(101_325.0),
            &env,
        )
        .unwrap();
        assert_relative_eq!(v.value(), 0.87331, max_relative = 1e-5);
    }

    #[test]
    fn volume_inverse() {
        let env = Environment::imperial();
        let w = HumidityRatio::mass_ratio(0.0052);
        let p = TotalPressure::psi(14.696);
        let v = specific_volume(&DryBulb::fahrenheit(100.0), &w, &p, &env).unwrap();
        let t = dry_bulb_from_specific_volume(&v, &w, &p, &env).unwrap();
        assert_relative_eq!(t.value(), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn humid_air_is_less_dense_than_dry_air() {
        let env = Environment::metric();
        let db = DryBulb::celsius(25.0);
        let p = TotalPressure::pascals(101_325.0);
        let dry = dry_air_density(&db, &p, &env).unwrap();
        let moist = moist_air_density(&db, &HumidityRatio::mass_ratio(0.015), &p, &env).unwrap();
        assert!(moist < dry, "moist {moist} should be below dry {dry}");
    }
}
