use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Conventional location of the emission factor table, relative to the
/// running process.
pub static PATH_EMISSION_TABLE: &str = "emission-data.toml";

/// The in-memory emission factor table: grams of CO2 emitted per kilometer
/// traveled, keyed by transportation method.
///
/// Immutable once loaded; its keys define the complete set of valid
/// transportation methods. Share it across calculators behind an [`Arc`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct EmissionFactors(HashMap<String, f64>);

impl EmissionFactors {
    /// Builds a table from an already-parsed mapping.
    /// # Error
    /// Errors if a method name is empty or a factor is not a finite positive
    /// number.
    pub fn new(table: HashMap<String, f64>) -> Result<Self> {
        let factors = Self(table);
        factors.check()?;
        Ok(factors)
    }

    /// Loads the table from the TOML document at `path`.
    /// # Error
    /// Errors if the file cannot be read, is not a TOML table of numbers, or
    /// contains an invalid factor.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| Error::DataSource {
            path: path.to_path_buf(),
            source,
        })?;
        let factors: Self =
            toml::from_str(&data).map_err(|source| Error::MalformedFactors {
                path: path.to_path_buf(),
                source,
            })?;
        factors.check()?;
        log::info!(
            "{} transportation methods loaded from {}",
            factors.0.len(),
            path.display()
        );
        Ok(factors)
    }

    fn check(&self) -> Result<()> {
        for (method, factor) in &self.0 {
            if method.is_empty() {
                return Err(Error::EmptyMethodName);
            }
            if !factor.is_finite() || *factor <= 0.0 {
                return Err(Error::InvalidFactor {
                    method: method.clone(),
                    value: *factor,
                });
            }
        }
        Ok(())
    }

    /// The emission factor of `method` in g CO2/km, if supported.
    pub fn get(&self, method: &str) -> Option<f64> {
        self.0.get(method).copied()
    }

    pub fn contains(&self, method: &str) -> bool {
        self.0.contains_key(method)
    }

    /// The supported transportation methods, sorted for stable display.
    pub fn methods(&self) -> Vec<&str> {
        let mut methods = self.0.keys().map(|k| k.as_str()).collect::<Vec<_>>();
        methods.sort_unstable();
        methods
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Loads the emission factor table from its conventional location
/// ([`PATH_EMISSION_TABLE`]) into a handle shareable across calculators.
/// # Error
/// Errors if the file cannot be read or is malformed.
pub fn load_emission_factors() -> Result<Arc<EmissionFactors>> {
    Ok(Arc::new(EmissionFactors::from_path(PATH_EMISSION_TABLE)?))
}
