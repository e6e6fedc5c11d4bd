use std::env;
use std::str::FromStr;
use std::sync::{Once, OnceLock};

use converter::{TemperatureDeltaUnit, UnitSystem};
use serde::{Deserialize, Serialize};

use crate::error::*;
use crate::quantity::TemperatureDelta;

/// Settings shared by every calculation: the unit system the correlations
/// run in and the convergence controls of the iterative solvers.
///
/// An `Environment` is a plain value. Pass one explicitly to
/// [`MoistAir::with_environment`](crate::MoistAir::with_environment), or
/// rely on [`Environment::global`], which is initialised once per process
/// and never mutated afterwards.
///
/// ```
/// use psychrometrics::{Environment, UnitSystem};
///
/// let env = Environment::metric().max_iterations(200);
/// assert_eq!(env.units, UnitSystem::Metric);
/// assert_eq!(env.max_iterations, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub units: UnitSystem,
    /// Iteration budget of the dew-point and wet-bulb solvers.
    pub max_iterations: u32,
    /// Floor applied to every computed humidity ratio (lb/lb or kg/kg).
    pub min_humidity_ratio: f64,
    /// Convergence tolerance of the solvers, as a temperature interval.
    pub temperature_tolerance: TemperatureDelta,
}

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_MIN_HUMIDITY_RATIO: f64 = 1e-7;
/// °C (interval).
pub const DEFAULT_TEMPERATURE_TOLERANCE: f64 = 0.001;

pub const ENV_UNITS: &str = "PSYCHRO_UNITS";
pub const ENV_MAX_ITERATIONS: &str = "PSYCHRO_MAX_ITERATIONS";
pub const ENV_MIN_HUMIDITY_RATIO: &str = "PSYCHRO_MIN_HUMIDITY_RATIO";
pub const ENV_TEMPERATURE_TOLERANCE: &str = "PSYCHRO_TEMPERATURE_TOLERANCE";

static GLOBAL: OnceLock<Environment> = OnceLock::new();

impl Default for Environment {
    fn default() -> Self {
        Self {
            units: UnitSystem::Imperial,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            min_humidity_ratio: DEFAULT_MIN_HUMIDITY_RATIO,
            temperature_tolerance: TemperatureDelta::celsius(DEFAULT_TEMPERATURE_TOLERANCE),
        }
    }
}

impl Environment {
    pub fn new() -> Self { Self::default() }

    // ── Presets ──────────────────────────────────────────────────────

    pub fn imperial() -> Self { Self::default() }

    pub fn metric() -> Self { Self::default().units(UnitSystem::Metric) }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn units(mut self, u: UnitSystem) -> Self { self.units = u; self }
    pub fn max_iterations(mut self, n: u32) -> Self { self.max_iterations = n; self }
    pub fn min_humidity_ratio(mut self, w: f64) -> Self { self.min_humidity_ratio = w; self }
    pub fn temperature_tolerance(mut self, t: TemperatureDelta) -> Self {
        self.temperature_tolerance = t;
        self
    }

    /// Solver tolerance expressed in the active unit system's degrees.
    pub fn tolerance(&self) -> f64 {
        self.temperature_tolerance.convert(self.units.temperature_delta())
    }

    /// Reject settings the solvers cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(PsychrometricError::Config(
                "max_iterations must be at least 1".into(),
            ));
        }
        if !(self.min_humidity_ratio.is_finite() && self.min_humidity_ratio > 0.0) {
            return Err(PsychrometricError::Config(format!(
                "min_humidity_ratio must be a positive number, got {}",
                self.min_humidity_ratio
            )));
        }
        let tol = self.temperature_tolerance.value();
        if !(tol.is_finite() && tol > 0.0) {
            return Err(PsychrometricError::Config(format!(
                "temperature_tolerance must be a positive number, got {}",
                self.temperature_tolerance
            )));
        }
        Ok(())
    }

    // ── Environment variables ───────────────────────────────────────

    /// Build an `Environment` from `PSYCHRO_*` variables, after loading a
    /// `.env` file once per process. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::load_dotenv();
        let mut cfg = Self::default();

        if let Some(units) = read_var::<UnitSystem>(ENV_UNITS)? {
            cfg.units = units;
        }
        if let Some(n) = read_var::<u32>(ENV_MAX_ITERATIONS)? {
            cfg.max_iterations = n;
        }
        if let Some(w) = read_var::<f64>(ENV_MIN_HUMIDITY_RATIO)? {
            cfg.min_humidity_ratio = w;
        }
        if let Some(t) = read_var::<f64>(ENV_TEMPERATURE_TOLERANCE)? {
            cfg.temperature_tolerance = TemperatureDelta::new(t, TemperatureDeltaUnit::Celsius);
        }

        cfg.validate()?;
        Ok(cfg)
    }

    fn load_dotenv() {
        static DOTENV_INIT: Once = Once::new();
        DOTENV_INIT.call_once(|| {
            if dotenvy::dotenv().is_ok() { return; }
            if let Ok(dir) = env::var("CARGO_MANIFEST_DIR") {
                let p = std::path::PathBuf::from(dir).join(".env");
                if p.exists() { let _ = dotenvy::from_path(&p); return; }
            }
            if let Ok(exe) = env::current_exe() {
                if let Some(dir) = exe.parent() {
                    let p = dir.join(".env");
                    if p.exists() { let _ = dotenvy::from_path(&p); }
                }
            }
        });
    }

    // ── Process-wide default ────────────────────────────────────────

    /// The process-wide default, initialised on first use from
    /// [`from_env`](Self::from_env) (or [`install_global`](Self::install_global)).
    /// A malformed environment falls back to [`Environment::default`].
    pub fn global() -> &'static Environment {
        GLOBAL.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                tracing::warn!("ignoring psychrometric environment variables: {e}");
                Self::default()
            })
        })
    }

    /// Fix the process-wide default. Fails once the default has been set
    /// or read.
    pub fn install_global(env: Environment) -> Result<()> {
        env.validate()?;
        GLOBAL.set(env).map_err(|_| {
            PsychrometricError::Config("global environment is already initialised".into())
        })
    }
}

fn read_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| PsychrometricError::Config(format!("{key}={raw}: {e}"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(PsychrometricError::Config(format!("{key}: {e}"))),
    }
}
