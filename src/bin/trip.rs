use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use simple_logger::SimpleLogger;

use trips::{Calculator, EmissionFactors};

const ABOUT: &str = r#"Estimates the CO2 emission of a single trip given:
* a method of transportation (a key of the emission factor table)
* the distance of the travel
* the unit of distance and the desired unit of the result"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// The method of transportation
    #[arg(short, long)]
    transportation: String,
    /// The distance of the travel
    #[arg(short, long)]
    distance: f64,
    /// The unit of distance (`km` or `m`)
    #[arg(long, default_value = "km")]
    distance_unit: String,
    /// The unit of the result (`auto` picks g below 1000 g, kg otherwise)
    #[arg(long, default_value = "auto")]
    output_unit: String,
    /// Path to the emission factor table
    #[arg(long, default_value = trips::PATH_EMISSION_TABLE)]
    data: String,
    /// Also print the emission factor of every transportation method
    #[arg(long)]
    show_data: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let cli = Cli::parse();

    let factors = Arc::new(EmissionFactors::from_path(&cli.data)?);

    let calculator = Calculator::new(
        factors.clone(),
        &cli.transportation,
        cli.distance,
        &cli.distance_unit,
        &cli.output_unit,
    )?;

    let (emission, unit) = calculator.calculate_emission();
    println!("CO2 emission of this trip is around: {emission} {unit}");

    if cli.show_data {
        println!("CO2 emission per km for each transportation method:");
        for method in factors.methods() {
            // every listed method has a factor
            let factor = factors.get(method).expect("method comes from the table");
            println!("{method}: {factor} g/km");
        }
    }

    Ok(())
}
