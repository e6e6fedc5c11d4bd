use psychrometrics::{
    DewPoint, DryBulb, EnthalpyUnit, Environment, MoistAir, PressureUnit, RelativeHumidity,
    TemperatureUnit, TotalPressure, UnitSystem, WetBulb,
};

// ═══════════════════════════════════════════════════════════════════
//  Inputs in foreign units
// ═══════════════════════════════════════════════════════════════════

#[test]
fn metric_inputs_in_an_imperial_engine() {
    let air = MoistAir::with_units(UnitSystem::Imperial);

    let native = air
        .from_relative_humidity(
            DryBulb::fahrenheit(75.0),
            RelativeHumidity::percent(50.0),
            TotalPressure::psi(14.696),
        )
        .unwrap();
    let foreign = air
        .from_relative_humidity(
            DryBulb::celsius((75.0 - 32.0) / 1.8),
            RelativeHumidity::from_fraction(0.5),
            TotalPressure::new(14.696 * 6_894.757_293_168, PressureUnit::Pascal),
        )
        .unwrap();

    // Results come back in the engine's units, not the caller's.
    assert_eq!(foreign.dry_bulb().unit(), TemperatureUnit::Fahrenheit);
    assert_eq!(foreign.atmospheric_pressure().unit(), PressureUnit::Psi);
    assert_eq!(foreign.enthalpy().unit(), EnthalpyUnit::BtuPerPound);

    let dw = (foreign.humidity_ratio().value() - native.humidity_ratio().value()).abs();
    assert!(dw < 1e-9, "ΔW = {dw:e}");
    let ddp = (foreign.dew_point().value() - native.dew_point().value()).abs();
    assert!(ddp < 1e-6, "ΔT_dp = {ddp:e}");
}

#[test]
fn kelvin_and_rankine_inputs() {
    let air = MoistAir::with_units(UnitSystem::Metric);
    let p = TotalPressure::kilopascals(101.325);

    let c = air.from_wet_bulb(DryBulb::celsius(30.0), WetBulb::celsius(20.0), p).unwrap();
    let k = air.from_wet_bulb(DryBulb::kelvin(303.15), WetBulb::rankine(527.67), p).unwrap();

    assert!(
        (c.humidity_ratio().value() - k.humidity_ratio().value()).abs() < 1e-9,
        "W(°C) = {:.8}, W(K/°R) = {:.8}",
        c.humidity_ratio().value(),
        k.humidity_ratio().value()
    );
    assert!((k.dry_bulb().value() - 30.0).abs() < 1e-9);
}

// ═══════════════════════════════════════════════════════════════════
//  Imperial vs metric correlations
// ═══════════════════════════════════════════════════════════════════

#[test]
fn both_systems_describe_the_same_air() {
    let ip = MoistAir::with_units(UnitSystem::Imperial)
        .from_relative_humidity(
            DryBulb::fahrenheit(75.0),
            RelativeHumidity::percent(50.0),
            TotalPressure::psi(14.696),
        )
        .unwrap();
    let si = MoistAir::with_units(UnitSystem::Metric)
        .from_relative_humidity(
            DryBulb::fahrenheit(75.0),
            RelativeHumidity::percent(50.0),
            TotalPressure::psi(14.696),
        )
        .unwrap();

    let rel_w = (ip.humidity_ratio().value() - si.humidity_ratio().value()).abs()
        / ip.humidity_ratio().value();
    assert!(rel_w < 1e-5, "W: imperial {} vs metric {}", ip.humidity_ratio(), si.humidity_ratio());

    let dp_si = si.dew_point().convert(TemperatureUnit::Fahrenheit);
    assert!(
        (ip.dew_point().value() - dp_si).abs() < 0.01,
        "T_dp: imperial {:.4} °F vs metric {dp_si:.4} °F",
        ip.dew_point().value()
    );

    // The two psychrometer equations differ in their rounded constants.
    let wb_si = si.wet_bulb().convert(TemperatureUnit::Fahrenheit);
    assert!(
        (ip.wet_bulb().value() - wb_si).abs() < 0.02,
        "T_wb: imperial {:.4} °F vs metric {wb_si:.4} °F",
        ip.wet_bulb().value()
    );

    let v_si = si.specific_volume().convert(ip.specific_volume().unit());
    let rel_v = (ip.specific_volume().value() - v_si).abs() / v_si;
    assert!(rel_v < 1e-4, "v: imperial {} vs metric {v_si:.5}", ip.specific_volume());
}

#[test]
fn enthalpy_datums_differ() {
    // Imperial enthalpy is zero for dry air at 0 °F, metric at 0 °C.
    let ip = MoistAir::with_units(UnitSystem::Imperial)
        .from_dew_point(
            DryBulb::fahrenheit(32.0),
            DewPoint::fahrenheit(-100.0),
            TotalPressure::psi(14.696),
        )
        .unwrap();
    let si = MoistAir::with_units(UnitSystem::Metric)
        .from_dew_point(DryBulb::celsius(0.0), DewPoint::celsius(-73.0), TotalPressure::psi(14.696))
        .unwrap();

    assert!((ip.enthalpy().value() - 7.68).abs() < 0.01, "h_ip = {}", ip.enthalpy());
    assert!(si.enthalpy().value().abs() < 10.0, "h_si = {}", si.enthalpy());
}

#[test]
fn environment_presets() {
    assert_eq!(Environment::imperial().units, UnitSystem::Imperial);
    assert_eq!(Environment::metric().units, UnitSystem::Metric);
    assert_eq!(Environment::default(), Environment::imperial());

    let air = MoistAir::with_units(UnitSystem::Metric);
    assert_eq!(air.environment().units, UnitSystem::Metric);
}

#[test]
fn unit_system_parsing() {
    assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
    assert_eq!(" SI ".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
    assert_eq!("IP".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
    assert!("kelvin".parse::<UnitSystem>().is_err());
    assert_eq!(UnitSystem::Imperial.to_string(), "imperial");
}
