use trips::{Calculator, DistanceUnit, EmissionFactors, Error, MassUnit, OutputUnit};

/// Verifies the end-to-end flow against the table shipped at the
/// conventional location (`emission-data.toml`): load, validate, compute.
#[test]
fn acceptance_kilometers_auto() -> trips::Result<()> {
    let factors = trips::load_emission_factors()?;

    // 15 km by medium diesel car at 171.5 g/km is 2572.5 g, reported in kg
    let calculator = Calculator::with_defaults(factors, "medium-diesel-car", 15.0)?;
    assert_eq!(calculator.calculate_emission(), (2.6, MassUnit::Kg));

    Ok(())
}

#[test]
fn acceptance_default_units() -> trips::Result<()> {
    let factors = trips::load_emission_factors()?;

    // 1800.5 km by large petrol car at 282 g/km is 507741 g = 507.741 kg
    let calculator = Calculator::with_defaults(factors, "large-petrol-car", 1800.5)?;
    assert_eq!(calculator.calculate_emission(), (507.7, MassUnit::Kg));

    Ok(())
}

#[test]
fn acceptance_result_in_g() -> trips::Result<()> {
    let factors = trips::load_emission_factors()?;

    // 14500 m by train at 6 g/km is 87 g, below the 1000 g auto threshold
    let calculator = Calculator::new(factors, "train", 14500.0, "m", "auto")?;
    assert_eq!(calculator.calculate_emission(), (87.0, MassUnit::G));

    Ok(())
}

#[test]
fn acceptance_result_forced_to_kg() -> trips::Result<()> {
    let factors = trips::load_emission_factors()?;

    // the same 87 g forced to kg is 0.087 kg, rounded up to 0.1 so a trace
    // emission is never displayed as 0.0
    let calculator = Calculator::new(factors, "train", 14500.0, "m", "kg")?;
    assert_eq!(calculator.calculate_emission(), (0.1, MassUnit::Kg));

    Ok(())
}

#[test]
fn rejects_invalid_input() -> trips::Result<()> {
    let factors = trips::load_emission_factors()?;

    let error = Calculator::new(factors.clone(), "unsupported-vehicle", 15.0, "km", "g")
        .unwrap_err();
    assert!(error.is_invalid_input());
    assert!(error.to_string().contains("transportation method"));

    let error = Calculator::new(factors.clone(), "train", 15.0, "cm", "g").unwrap_err();
    assert!(error.to_string().contains("unit of distance"));
    assert!(error.to_string().contains("km, m"));

    let error = Calculator::new(factors.clone(), "train", 15.0, "m", "ton").unwrap_err();
    assert!(error.to_string().contains("unit of output"));
    assert!(error.to_string().contains("auto, kg, g"));

    let error = Calculator::new(factors, "train", -15.0, "km", "g").unwrap_err();
    assert!(matches!(error, Error::NegativeDistance(_)));

    Ok(())
}

/// The supported sets exposed for selection widgets match the shipped table.
#[test]
fn supported_sets() -> trips::Result<()> {
    let factors = trips::load_emission_factors()?;
    let calculator = Calculator::with_defaults(factors, "bus", 0.0)?;

    assert_eq!(
        calculator.transportation_methods(),
        vec![
            "bus",
            "large-diesel-car",
            "large-petrol-car",
            "medium-diesel-car",
            "medium-petrol-car",
            "small-diesel-car",
            "small-petrol-car",
            "train",
        ]
    );
    assert_eq!(DistanceUnit::SUPPORTED, ["km", "m"]);
    assert_eq!(OutputUnit::SUPPORTED, ["auto", "kg", "g"]);

    // zero distance never upgrades to kg
    assert_eq!(calculator.calculate_emission(), (0.0, MassUnit::G));

    Ok(())
}

/// Two tables loaded from the same document observe identical values.
#[test]
fn factor_tables_are_reproducible() -> trips::Result<()> {
    let first = EmissionFactors::from_path("emission-data.toml")?;
    let second = EmissionFactors::from_path("emission-data.toml")?;
    assert_eq!(first, second);
    assert_eq!(first.len(), 8);

    Ok(())
}

#[test]
fn malformed_table_is_fatal() {
    let error = EmissionFactors::from_path("tests/it/data/malformed.toml").unwrap_err();
    assert!(matches!(error, Error::MalformedFactors { .. }));
    assert!(!error.is_invalid_input());
}
