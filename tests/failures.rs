use psychrometrics::{
    Altitude, DewPoint, DryBulb, Environment, MoistAir, PsychrometricError, RelativeHumidity,
    TotalPressure, UnitSystem, WetBulb,
};

fn air() -> MoistAir {
    MoistAir::with_environment(Environment::imperial()).unwrap()
}

fn sea_level() -> TotalPressure {
    TotalPressure::psi(14.696)
}

fn is_invalid(err: &PsychrometricError) -> bool {
    matches!(err, PsychrometricError::InvalidInput(_))
}

// ═══════════════════════════════════════════════════════════════════
//  Non-physical input
// ═══════════════════════════════════════════════════════════════════

#[test]
fn wet_bulb_above_dry_bulb() {
    let err = air()
        .from_wet_bulb(DryBulb::fahrenheit(70.0), WetBulb::fahrenheit(71.0), sea_level())
        .unwrap_err();
    assert!(is_invalid(&err), "{err}");
}

#[test]
fn dew_point_above_dry_bulb() {
    let err = air()
        .from_dew_point(DryBulb::fahrenheit(70.0), DewPoint::fahrenheit(72.0), sea_level())
        .unwrap_err();
    assert!(is_invalid(&err), "{err}");
}

#[test]
fn wet_bulb_too_cold_for_any_moisture() {
    // The psychrometer equation goes negative: no moist state has this wet bulb.
    let err = air()
        .from_wet_bulb(DryBulb::fahrenheit(100.0), WetBulb::fahrenheit(40.0), sea_level())
        .unwrap_err();
    assert!(is_invalid(&err), "{err}");
    assert!(err.to_string().contains("adiabatic-saturation"), "{err}");
}

#[test]
fn relative_humidity_outside_0_to_100() {
    for rh in [-1.0, 100.5, 250.0] {
        let err = air()
            .from_relative_humidity(
                DryBulb::fahrenheit(70.0),
                RelativeHumidity::percent(rh),
                sea_level(),
            )
            .unwrap_err();
        assert!(is_invalid(&err), "RH {rh}: {err}");
    }
}

#[test]
fn non_finite_inputs() {
    let err = air()
        .from_relative_humidity(
            DryBulb::fahrenheit(f64::NAN),
            RelativeHumidity::percent(50.0),
            sea_level(),
        )
        .unwrap_err();
    assert!(is_invalid(&err), "{err}");

    let err = air()
        .from_wet_bulb(DryBulb::fahrenheit(70.0), WetBulb::fahrenheit(f64::INFINITY), sea_level())
        .unwrap_err();
    assert!(is_invalid(&err), "{err}");
}

#[test]
fn non_positive_pressure() {
    for p in [0.0, -14.7] {
        let err = air()
            .from_relative_humidity(
                DryBulb::fahrenheit(70.0),
                RelativeHumidity::percent(50.0),
                TotalPressure::psi(p),
            )
            .unwrap_err();
        assert!(is_invalid(&err), "P = {p}: {err}");
    }
}

#[test]
fn saturation_pressure_above_total_pressure() {
    // Water boils below 212 °F at this pressure.
    let err = air()
        .from_relative_humidity(
            DryBulb::fahrenheit(250.0),
            RelativeHumidity::percent(100.0),
            sea_level(),
        )
        .unwrap_err();
    assert!(is_invalid(&err), "{err}");
}

// ═══════════════════════════════════════════════════════════════════
//  Correlation range
// ═══════════════════════════════════════════════════════════════════

#[test]
fn dry_bulb_outside_correlation() {
    let err = air()
        .from_relative_humidity(
            DryBulb::fahrenheit(400.0),
            RelativeHumidity::percent(10.0),
            sea_level(),
        )
        .unwrap_err();
    assert!(
        matches!(
            err,
            PsychrometricError::OutOfRange { quantity: "temperature", max, .. } if max == 392.0
        ),
        "{err}"
    );

    let err = air()
        .from_wet_bulb(DryBulb::fahrenheit(-160.0), WetBulb::fahrenheit(-170.0), sea_level())
        .unwrap_err();
    assert!(matches!(err, PsychrometricError::OutOfRange { .. }), "{err}");
}

#[test]
fn altitude_above_model_ceiling() {
    let err = air()
        .from_relative_humidity(
            DryBulb::fahrenheit(70.0),
            RelativeHumidity::percent(50.0),
            Altitude::feet(200_000.0),
        )
        .unwrap_err();
    assert!(matches!(err, PsychrometricError::OutOfRange { quantity: "altitude", .. }), "{err}");
}

// ═══════════════════════════════════════════════════════════════════
//  Iteration budget
// ═══════════════════════════════════════════════════════════════════

#[test]
fn dew_point_budget_surfaces_from_wet_bulb_path() {
    let air = MoistAir::with_environment(Environment::imperial().max_iterations(1)).unwrap();
    let err = air
        .from_wet_bulb(DryBulb::fahrenheit(100.0), WetBulb::fahrenheit(65.0), sea_level())
        .unwrap_err();
    assert_eq!(err, PsychrometricError::MaxIterations { solver: "dew point", iterations: 1 });
}

#[test]
fn wet_bulb_budget_surfaces_from_relative_humidity_path() {
    let air = MoistAir::with_environment(Environment::imperial().max_iterations(5)).unwrap();
    let err = air
        .from_relative_humidity(
            DryBulb::fahrenheit(75.0),
            RelativeHumidity::percent(50.0),
            sea_level(),
        )
        .unwrap_err();
    assert_eq!(err, PsychrometricError::MaxIterations { solver: "wet bulb", iterations: 5 });
}

#[test]
fn wet_bulb_budget_surfaces_from_dew_point_path() {
    let env = Environment::metric().max_iterations(5);
    let air = MoistAir::with_environment(env).unwrap();
    let err = air
        .from_dew_point(
            DryBulb::celsius(30.0),
            DewPoint::celsius(14.8),
            TotalPressure::pascals(101_325.0),
        )
        .unwrap_err();
    assert!(
        matches!(err, PsychrometricError::MaxIterations { solver: "wet bulb", .. }),
        "{err}"
    );
    assert!(err.to_string().contains("5 iterations"), "{err}");
}

#[test]
fn invalid_environment_is_rejected() {
    let err = MoistAir::with_environment(Environment::new().max_iterations(0)).unwrap_err();
    assert!(matches!(err, PsychrometricError::Config(_)), "{err}");

    let err = MoistAir::with_environment(Environment::new().min_humidity_ratio(-1.0)).unwrap_err();
    assert!(matches!(err, PsychrometricError::Config(_)), "{err}");

    assert!(MoistAir::with_environment(Environment::new().units(UnitSystem::Metric)).is_ok());
}
