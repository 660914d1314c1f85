#[forbid(unsafe_code)]
mod calculator;
mod error;
mod factors;
mod units;

pub use calculator::*;
pub use error::{Error, Result};
pub use factors::*;
pub use units::*;
