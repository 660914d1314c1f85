use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading the emission factor table and validating a trip.
#[derive(Error, Debug)]
pub enum Error {
    /// A user-supplied field is outside its supported set. Recoverable by
    /// re-prompting with one of the listed values.
    #[error("invalid {field} {value:?}: supported values are {}", .supported.join(", "))]
    InvalidInput {
        field: &'static str,
        value: String,
        supported: Vec<String>,
    },
    /// A negative distance would silently produce a negative emission.
    #[error("invalid distance {0}: the distance of a trip cannot be negative")]
    NegativeDistance(f64),
    /// The emission factor table cannot be read. Fatal at startup.
    #[error("cannot read emission factors from {}", .path.display())]
    DataSource {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The emission factor table is not a valid TOML table of numbers. Fatal
    /// at startup.
    #[error("malformed emission factor table {}", .path.display())]
    MalformedFactors {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// An emission factor must be a finite positive number of g CO2/km.
    #[error("emission factor of {method:?} must be a positive number, got {value}")]
    InvalidFactor { method: String, value: f64 },
    /// Transportation methods are non-empty names.
    #[error("emission factor table contains an empty transportation method name")]
    EmptyMethodName,
}

impl Error {
    pub(crate) fn invalid_input(field: &'static str, value: &str, supported: &[&str]) -> Self {
        Self::InvalidInput {
            field,
            value: value.to_string(),
            supported: supported.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Whether the caller can recover by correcting its input. Everything
    /// else is a fatal data-source condition.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::NegativeDistance(_)
        )
    }
}

/// Convenience type for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
