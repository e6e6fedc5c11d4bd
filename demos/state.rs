use psychrometrics::{
    Altitude, DewPoint, DryBulb, MoistAir, RelativeHumidity, TotalPressure, UnitSystem, WetBulb,
    saturation_pressure,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=psychrometrics=debug shows solver iterations.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // ── Imperial: psychrometer reading at sea level ─────────────────
    let air = MoistAir::with_units(UnitSystem::Imperial);
    let state = air.from_wet_bulb(
        DryBulb::fahrenheit(100.0),
        WetBulb::fahrenheit(65.0),
        TotalPressure::psi(14.696),
    )?;
    println!("100 °F db / 65 °F wb at 14.696 psi:\n{state}\n");

    // ── Same room, described by relative humidity, in Denver ────────
    let denver = air.from_relative_humidity(
        DryBulb::fahrenheit(75.0),
        RelativeHumidity::percent(50.0),
        Altitude::feet(5_280.0),
    )?;
    println!("75 °F / 50 % at 5280 ft:\n{denver}\n");

    // ── Metric: dew point input, Celsius in, SI out ─────────────────
    let metric = MoistAir::with_units(UnitSystem::Metric);
    let state = metric.from_dew_point(
        DryBulb::celsius(30.0),
        DewPoint::celsius(14.8),
        TotalPressure::kilopascals(101.325),
    )?;
    println!("30 °C db / 14.8 °C dp at 101.325 kPa:\n{state}\n");
    println!("specific humidity = {:.6}", state.specific_humidity()?);
    println!("absolute humidity = {:.5}", state.absolute_humidity()?);

    // ── Single property ─────────────────────────────────────────────
    let p = saturation_pressure(&DryBulb::celsius(-10.0), metric.environment())?;
    println!("p_ws(-10 °C) = {p:.2}");

    Ok(())
}
