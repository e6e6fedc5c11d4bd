use converter::UnitSystem;
use tracing::debug;

use crate::altitude;
use crate::derived;
use crate::derived::humidity::humidity_ratio_from_wet_bulb_raw;
use crate::environment::Environment;
use crate::error::*;
use crate::properties::PsychrometricState;
use crate::quantity::*;
use crate::saturation;
use crate::solver;

// ── Inputs ──────────────────────────────────────────────────────────

/// Where the total pressure of a state comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Atmosphere {
    Pressure(TotalPressure),
    /// Standard-atmosphere pressure at this altitude.
    Altitude(Altitude),
}

impl From<TotalPressure> for Atmosphere {
    fn from(p: TotalPressure) -> Self { Self::Pressure(p) }
}

impl From<Altitude> for Atmosphere {
    fn from(z: Altitude) -> Self { Self::Altitude(z) }
}

impl Atmosphere {
    pub fn total_pressure(&self, env: &Environment) -> Result<TotalPressure> {
        let p = match self {
            Self::Pressure(p) => *p,
            Self::Altitude(z) => altitude::pressure_at_altitude(z, env)?,
        };
        let p = p.to(env.units.pressure());
        validate_positive("total pressure", p.value())?;
        Ok(p)
    }
}

/// The second measured property that, with the dry bulb, fixes a state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateInput {
    WetBulb(WetBulb),
    RelativeHumidity(RelativeHumidity),
    DewPoint(DewPoint),
}

impl From<WetBulb> for StateInput {
    fn from(t: WetBulb) -> Self { Self::WetBulb(t) }
}

impl From<RelativeHumidity> for StateInput {
    fn from(rh: RelativeHumidity) -> Self { Self::RelativeHumidity(rh) }
}

impl From<DewPoint> for StateInput {
    fn from(t: DewPoint) -> Self { Self::DewPoint(t) }
}

// ── Entry point ─────────────────────────────────────────────────────

/// High‑level entry point for moist-air calculations.
///
/// Holds the [`Environment`] every calculation runs in; results are
/// reported in its unit system whatever units the inputs use.
///
/// # Quick example
/// ```
/// use psychrometrics::{DryBulb, MoistAir, TotalPressure, UnitSystem, WetBulb};
///
/// let air = MoistAir::with_units(UnitSystem::Imperial);
/// let state = air.from_wet_bulb(
///     DryBulb::fahrenheit(100.0),
///     WetBulb::fahrenheit(65.0),
///     TotalPressure::psi(14.696),
/// )?;
/// assert!((state.enthalpy().value() - 29.74).abs() < 0.05);
/// # Ok::<(), psychrometrics::PsychrometricError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAir {
    env: Environment,
}

impl Default for MoistAir {
    fn default() -> Self { Self::new() }
}

impl MoistAir {
    // ── Constructors ─────────────────────────────────────────────────

    /// Use the process-wide [`Environment::global`].
    pub fn new() -> Self {
        Self { env: *Environment::global() }
    }

    /// The process-wide environment with another unit system.
    pub fn with_units(units: UnitSystem) -> Self {
        Self { env: Environment::global().units(units) }
    }

    pub fn with_environment(env: Environment) -> Result<Self> {
        env.validate()?;
        Ok(Self { env })
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    // ── Public API ───────────────────────────────────────────────────

    /// Dispatch on whichever second property was measured.
    pub fn state(
        &self,
        dry_bulb: DryBulb,
        input: impl Into<StateInput>,
        atmosphere: impl Into<Atmosphere>,
    ) -> Result<PsychrometricState> {
        match input.into() {
            StateInput::WetBulb(t) => self.from_wet_bulb(dry_bulb, t, atmosphere),
            StateInput::RelativeHumidity(rh) => {
                self.from_relative_humidity(dry_bulb, rh, atmosphere)
            }
            StateInput::DewPoint(t) => self.from_dew_point(dry_bulb, t, atmosphere),
        }
    }

    /// State from a psychrometer reading. The humidity ratio follows in
    /// closed form; no wet-bulb iteration is needed.
    ///
    /// A wet bulb so far below the dry bulb that the psychrometer equation
    /// gives no moisture at all is rejected with
    /// [`PsychrometricError::InvalidInput`].
    pub fn from_wet_bulb(
        &self,
        dry_bulb: DryBulb,
        wet_bulb: WetBulb,
        atmosphere: impl Into<Atmosphere>,
    ) -> Result<PsychrometricState> {
        let env = &self.env;
        let p = atmosphere.into().total_pressure(env)?;
        let dry_bulb = self.temperature(dry_bulb, "dry bulb")?;
        let wet_bulb = self.temperature(wet_bulb, "wet bulb")?;

        // No floor here: a floored ratio would no longer match the wet bulb.
        let w = humidity_ratio_from_wet_bulb_raw(
            dry_bulb.value(),
            wet_bulb.value(),
            p.value(),
            env.units,
        )?;
        if w < env.min_humidity_ratio {
            return Err(PsychrometricError::InvalidInput(format!(
                "wet bulb {wet_bulb} is below the adiabatic-saturation limit \
                 for dry bulb {dry_bulb}"
            )));
        }
        let w = HumidityRatio::mass_ratio(w);
        let pv = derived::vapor_pressure_from_humidity_ratio(&w, &p, env)?;
        let dew_point = solver::dew_point_from_vapor_pressure(&dry_bulb, &pv, env)?;

        debug!(units = %env.units, "state from dry bulb and wet bulb");
        self.complete(dry_bulb, wet_bulb, dew_point, w, pv, p)
    }

    pub fn from_relative_humidity(
        &self,
        dry_bulb: DryBulb,
        relative_humidity: RelativeHumidity,
        atmosphere: impl Into<Atmosphere>,
    ) -> Result<PsychrometricState> {
        let env = &self.env;
        let p = atmosphere.into().total_pressure(env)?;
        let dry_bulb = self.temperature(dry_bulb, "dry bulb")?;

        let w = derived::humidity_ratio_from_relative_humidity(
            &dry_bulb,
            &relative_humidity,
            &p,
            env,
        )?;
        let pv = derived::vapor_pressure_from_humidity_ratio(&w, &p, env)?;
        let wet_bulb = solver::wet_bulb_from_humidity_ratio(&dry_bulb, &w, &p, env)?;
        let dew_point = solver::dew_point_from_vapor_pressure(&dry_bulb, &pv, env)?;

        debug!(units = %env.units, "state from dry bulb and relative humidity");
        self.complete(dry_bulb, wet_bulb, dew_point, w, pv, p)
    }

    pub fn from_dew_point(
        &self,
        dry_bulb: DryBulb,
        dew_point: DewPoint,
        atmosphere: impl Into<Atmosphere>,
    ) -> Result<PsychrometricState> {
        let env = &self.env;
        let p = atmosphere.into().total_pressure(env)?;
        let dry_bulb = self.temperature(dry_bulb, "dry bulb")?;
        let dew_point = self.temperature(dew_point, "dew point")?;
        if dew_point.value() > dry_bulb.value() {
            return Err(PsychrometricError::InvalidInput(format!(
                "dew point {dew_point} must not exceed dry bulb {dry_bulb}"
            )));
        }

        let w = derived::humidity_ratio_from_dew_point(&dew_point, &p, env)?;
        let pv = derived::vapor_pressure_from_humidity_ratio(&w, &p, env)?;
        let wet_bulb = solver::wet_bulb_from_humidity_ratio(&dry_bulb, &w, &p, env)?;

        debug!(units = %env.units, "state from dry bulb and dew point");
        self.complete(dry_bulb, wet_bulb, dew_point, w, pv, p)
    }

    // ── Internal helpers ─────────────────────────────────────────────

    /// Project a temperature into the environment's scale and check it.
    fn temperature<R: Role>(
        &self,
        t: Quantity<dim::Temperature, R>,
        name: &str,
    ) -> Result<Quantity<dim::Temperature, R>> {
        let t = t.to(self.env.units.temperature());
        validate_finite(name, t.value())?;
        Ok(t)
    }

    /// Closed-form tail shared by the three construction paths.
    fn complete(
        &self,
        dry_bulb: DryBulb,
        wet_bulb: WetBulb,
        dew_point: DewPoint,
        humidity_ratio: HumidityRatio,
        vapor_pressure: VaporPressure,
        p: TotalPressure,
    ) -> Result<PsychrometricState> {
        let env = &self.env;
        let psat = saturation::saturation_pressure(&dry_bulb, env)?;
        let relative_humidity = derived::relative_humidity(&vapor_pressure, &psat)?;
        let saturated = derived::humidity_ratio(&p, &psat, env)?;
        let degree_of_saturation = derived::degree_of_saturation(&humidity_ratio, &saturated)?;
        let enthalpy = derived::enthalpy(&dry_bulb, &humidity_ratio, env)?;
        let specific_volume = derived::specific_volume(&dry_bulb, &humidity_ratio, &p, env)?;
        let density = derived::density(&specific_volume, &humidity_ratio)?;

        Ok(PsychrometricState {
            dry_bulb,
            wet_bulb,
            dew_point,
            humidity_ratio,
            relative_humidity,
            vapor_pressure,
            enthalpy,
            specific_volume,
            density,
            degree_of_saturation,
            atmospheric_pressure: p,
            units: env.units,
        })
    }
}
