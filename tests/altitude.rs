use psychrometrics::{
    Altitude, Atmosphere, DryBulb, Environment, MoistAir, RelativeHumidity, TotalPressure,
    UnitSystem, altitude_at_pressure, pressure_at_altitude, temperature_at_altitude,
};

#[test]
fn standard_atmosphere_at_denver() {
    let env = Environment::imperial();
    let p = pressure_at_altitude(&Altitude::feet(5_000.0), &env).unwrap();
    assert!((p.value() - 12.228).abs() < 1e-3, "P(5000 ft) = {:.4} psi", p.value());

    let t = temperature_at_altitude(&Altitude::feet(5_000.0), &env).unwrap();
    assert!((t.value() - 41.17).abs() < 0.01, "T(5000 ft) = {:.3} °F", t.value());

    let z = altitude_at_pressure(&p, &env).unwrap();
    assert!((z.value() - 5_000.0).abs() < 1e-6, "Z = {:.6} ft", z.value());
}

#[test]
fn below_sea_level_is_allowed() {
    let env = Environment::metric();
    let p = pressure_at_altitude(&Altitude::meters(-400.0), &env).unwrap();
    assert!(p.value() > 101_325.0, "P(-400 m) = {p}");
}

#[test]
fn state_at_altitude_matches_explicit_pressure() {
    let air = MoistAir::with_units(UnitSystem::Imperial);
    let db = DryBulb::fahrenheit(75.0);
    let rh = RelativeHumidity::percent(50.0);

    let at_altitude = air.from_relative_humidity(db, rh, Altitude::feet(5_000.0)).unwrap();
    let p = Atmosphere::from(Altitude::feet(5_000.0))
        .total_pressure(air.environment())
        .unwrap();
    let explicit = air.from_relative_humidity(db, rh, p).unwrap();
    assert_eq!(at_altitude, explicit);

    assert!(
        (at_altitude.humidity_ratio().value() - 0.011133).abs() < 1e-5,
        "W at 5000 ft = {:.6}",
        at_altitude.humidity_ratio().value()
    );
    assert!(
        (at_altitude.wet_bulb().value() - 61.76).abs() < 0.02,
        "T_wb at 5000 ft = {:.4}",
        at_altitude.wet_bulb().value()
    );

    // Thinner air holds more water per pound at the same φ, and is less dense.
    let sea = air.from_relative_humidity(db, rh, TotalPressure::psi(14.696)).unwrap();
    assert!(at_altitude.humidity_ratio() > sea.humidity_ratio());
    assert!(at_altitude.density() < sea.density());
}
