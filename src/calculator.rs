use std::sync::Arc;

use crate::error::{Error, Result};
use crate::factors::EmissionFactors;
use crate::units::{to_larger_unit, DistanceUnit, MassUnit, OutputUnit};

/// Grams of CO2 at which the automatic output unit switches to kilograms.
static AUTO_KG_THRESHOLD: f64 = 1000.0;

/// A validated trip: transportation method, distance, and unit conventions.
///
/// A `Calculator` cannot hold an invalid trip: construction and every
/// `with_*` replacement validate against the emission factor table and the
/// supported unit sets, so [`Calculator::calculate_emission`] never fails.
/// It is a value: rebuild (or replace a field of) one per calculation
/// request and share the factor table behind the [`Arc`].
#[derive(Debug, Clone)]
pub struct Calculator {
    factors: Arc<EmissionFactors>,
    transportation: String,
    distance: f64,
    distance_unit: DistanceUnit,
    output_unit: OutputUnit,
}

impl Calculator {
    /// Creates a validated calculator.
    ///
    /// Checks run in a fixed order: unit of distance, unit of output,
    /// transportation method, sign of the distance. The first failing check
    /// is the error returned.
    /// # Error
    /// Errors with [`Error::InvalidInput`] when a unit or the transportation
    /// method is outside its supported set, and with
    /// [`Error::NegativeDistance`] when `distance < 0`.
    pub fn new(
        factors: Arc<EmissionFactors>,
        transportation: &str,
        distance: f64,
        distance_unit: &str,
        output_unit: &str,
    ) -> Result<Self> {
        let distance_unit = distance_unit.parse::<DistanceUnit>()?;
        let output_unit = output_unit.parse::<OutputUnit>()?;
        if !factors.contains(transportation) {
            return Err(Error::invalid_input(
                "transportation method",
                transportation,
                &factors.methods(),
            ));
        }
        if distance < 0.0 {
            return Err(Error::NegativeDistance(distance));
        }
        Ok(Self {
            factors,
            transportation: transportation.to_string(),
            distance,
            distance_unit,
            output_unit,
        })
    }

    /// Creates a validated calculator with the default units (`km` in,
    /// `auto` out).
    pub fn with_defaults(
        factors: Arc<EmissionFactors>,
        transportation: &str,
        distance: f64,
    ) -> Result<Self> {
        Self::new(
            factors,
            transportation,
            distance,
            DistanceUnit::default().as_str(),
            OutputUnit::default().as_str(),
        )
    }

    /// Returns a copy with the transportation method replaced, revalidated.
    pub fn with_transportation(&self, transportation: &str) -> Result<Self> {
        if !self.factors.contains(transportation) {
            return Err(Error::invalid_input(
                "transportation method",
                transportation,
                &self.factors.methods(),
            ));
        }
        Ok(Self {
            transportation: transportation.to_string(),
            ..self.clone()
        })
    }

    /// Returns a copy with the distance replaced, revalidated.
    pub fn with_distance(&self, distance: f64) -> Result<Self> {
        if distance < 0.0 {
            return Err(Error::NegativeDistance(distance));
        }
        Ok(Self {
            distance,
            ..self.clone()
        })
    }

    /// Returns a copy with the unit of distance replaced, revalidated.
    pub fn with_distance_unit(&self, distance_unit: &str) -> Result<Self> {
        Ok(Self {
            distance_unit: distance_unit.parse()?,
            ..self.clone()
        })
    }

    /// Returns a copy with the unit of output replaced, revalidated.
    pub fn with_output_unit(&self, output_unit: &str) -> Result<Self> {
        Ok(Self {
            output_unit: output_unit.parse()?,
            ..self.clone()
        })
    }

    pub fn transportation(&self) -> &str {
        &self.transportation
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn distance_unit(&self) -> DistanceUnit {
        self.distance_unit
    }

    pub fn output_unit(&self) -> OutputUnit {
        self.output_unit
    }

    /// The valid transportation methods, sorted, for a presentation layer to
    /// populate its selection widget.
    pub fn transportation_methods(&self) -> Vec<&str> {
        self.factors.methods()
    }

    /// The distance of the trip in km, recomputed from the current fields.
    fn normalized_distance(&self) -> f64 {
        match self.distance_unit {
            DistanceUnit::Km => self.distance,
            DistanceUnit::M => to_larger_unit(self.distance),
        }
    }

    /// The emission of the trip in g of CO2, before output unit resolution.
    /// Pure function of the current fields.
    fn raw_result(&self) -> f64 {
        let emission_per_km = self
            .factors
            .get(&self.transportation)
            .expect("transportation validated at construction");
        self.normalized_distance() * emission_per_km
    }

    /// Computes the emission of the trip, returning the rounded value and
    /// its unit.
    ///
    /// `kg` and `g` preferences force the unit; `auto` switches from grams
    /// to kilograms at 1000 g. Calling this twice with the same fields
    /// returns identical results.
    pub fn calculate_emission(&self) -> (f64, MassUnit) {
        let raw_result = self.raw_result();

        if (raw_result >= AUTO_KG_THRESHOLD && self.output_unit != OutputUnit::G)
            || self.output_unit == OutputUnit::Kg
        {
            (round_result(to_larger_unit(raw_result)), MassUnit::Kg)
        } else {
            (round_result(raw_result), MassUnit::G)
        }
    }
}

/// Rounds to one decimal place. Values below 0.1 round up so that a nonzero
/// trace emission is never displayed as 0.0; values at or above 0.1 round to
/// nearest, ties away from zero.
fn round_result(n: f64) -> f64 {
    if n < 0.1 {
        (n * 10.0).ceil() / 10.0
    } else {
        (n * 10.0).round() / 10.0
    }
}
