use crate::error::Error;

/// Units accepted for the distance of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Km,
    M,
}

impl DistanceUnit {
    /// The supported units of distance, as they appear in user input.
    pub const SUPPORTED: [&'static str; 2] = ["km", "m"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Km => "km",
            Self::M => "m",
        }
    }
}

impl std::str::FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "km" => Ok(Self::Km),
            "m" => Ok(Self::M),
            _ => Err(Error::invalid_input("unit of distance", s, &Self::SUPPORTED)),
        }
    }
}

/// Units accepted for the emission result. `Auto` picks grams below 1000 g
/// and kilograms otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputUnit {
    #[default]
    Auto,
    Kg,
    G,
}

impl OutputUnit {
    /// The supported units of output, as they appear in user input.
    pub const SUPPORTED: [&'static str; 3] = ["auto", "kg", "g"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Kg => "kg",
            Self::G => "g",
        }
    }
}

impl std::str::FromStr for OutputUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "auto" => Ok(Self::Auto),
            "kg" => Ok(Self::Kg),
            "g" => Ok(Self::G),
            _ => Err(Error::invalid_input("unit of output", s, &Self::SUPPORTED)),
        }
    }
}

/// The unit of a computed emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassUnit {
    Kg,
    G,
}

impl MassUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::G => "g",
        }
    }
}

impl std::fmt::Display for MassUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts `m -> km` or `g -> kg`.
pub(crate) fn to_larger_unit(n: f64) -> f64 {
    n / 1000.0
}
