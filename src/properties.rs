use converter::UnitSystem;
use serde::{Deserialize, Serialize};

use crate::derived;
use crate::error::Result;
use crate::quantity::*;

// ── Moist-air state ─────────────────────────────────────────────────

/// Full property set of one moist-air state, built by
/// [`MoistAir`](crate::MoistAir) from dry bulb plus one of wet bulb,
/// relative humidity or dew point.
///
/// **Units** follow the [`UnitSystem`] the state was computed in:
///
/// | Field                  | Imperial | Metric |
/// |------------------------|----------|--------|
/// | temperatures           | °F       | °C     |
/// | pressures              | psi      | Pa     |
/// | humidity ratio         | lb/lb    | kg/kg  |
/// | enthalpy               | Btu/lb   | J/kg   |
/// | specific volume        | ft³/lb   | m³/kg  |
/// | density                | lb/ft³   | kg/m³  |
/// | relative humidity      | %        | %      |
/// | degree of saturation   | fraction | fraction |
///
/// Enthalpy, specific volume and humidity ratio are per unit mass of dry
/// air; density is per unit volume of moist air.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsychrometricState {
    pub(crate) dry_bulb: DryBulb,
    pub(crate) wet_bulb: WetBulb,
    pub(crate) dew_point: DewPoint,
    pub(crate) humidity_ratio: HumidityRatio,
    pub(crate) relative_humidity: RelativeHumidity,
    pub(crate) vapor_pressure: VaporPressure,
    pub(crate) enthalpy: Enthalpy,
    pub(crate) specific_volume: SpecificVolume,
    pub(crate) density: Density,
    pub(crate) degree_of_saturation: DegreeOfSaturation,
    pub(crate) atmospheric_pressure: TotalPressure,
    pub(crate) units: UnitSystem,
}

impl PsychrometricState {
    pub fn dry_bulb(&self) -> DryBulb { self.dry_bulb }
    pub fn wet_bulb(&self) -> WetBulb { self.wet_bulb }
    pub fn dew_point(&self) -> DewPoint { self.dew_point }
    pub fn humidity_ratio(&self) -> HumidityRatio { self.humidity_ratio }
    pub fn relative_humidity(&self) -> RelativeHumidity { self.relative_humidity }
    pub fn vapor_pressure(&self) -> VaporPressure { self.vapor_pressure }
    pub fn enthalpy(&self) -> Enthalpy { self.enthalpy }
    pub fn specific_volume(&self) -> SpecificVolume { self.specific_volume }
    pub fn density(&self) -> Density { self.density }
    pub fn degree_of_saturation(&self) -> DegreeOfSaturation { self.degree_of_saturation }
    pub fn atmospheric_pressure(&self) -> TotalPressure { self.atmospheric_pressure }
    pub fn units(&self) -> UnitSystem { self.units }

    /// Mass of water per mass of moist air.
    pub fn specific_humidity(&self) -> Result<SpecificHumidity> {
        derived::specific_humidity(&self.humidity_ratio)
    }

    /// Mass of water per volume of moist air.
    pub fn absolute_humidity(&self) -> Result<AbsoluteHumidity> {
        derived::absolute_humidity(&self.humidity_ratio, &self.specific_volume)
    }
}

impl std::fmt::Display for PsychrometricState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "T_db = {:.2}", self.dry_bulb)?;
        writeln!(f, "T_wb = {:.2}", self.wet_bulb)?;
        writeln!(f, "T_dp = {:.2}", self.dew_point)?;
        writeln!(f, "W    = {:.6}", self.humidity_ratio)?;
        writeln!(f, "RH   = {:.1}", self.relative_humidity)?;
        writeln!(f, "p_w  = {:.4}", self.vapor_pressure)?;
        writeln!(f, "h    = {:.3}", self.enthalpy)?;
        writeln!(f, "v    = {:.4}", self.specific_volume)?;
        writeln!(f, "ρ    = {:.4}", self.density)?;
        writeln!(f, "μ    = {:.4}", self.degree_of_saturation)?;
        write!(f, "P    = {:.4}", self.atmospheric_pressure)
    }
}
