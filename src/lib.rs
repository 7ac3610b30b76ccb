#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

//! Conversions between temperature and resistance for NTC thermistors, and
//! least-squares fitting of the extended Steinhart-Hart polynomial
//!
//! The model is a cubic polynomial in the natural logarithm of resistance,
//!
//! ```text
//! 1/T = a0 + a1 * ln r + a2 * (ln r)^2 + a3 * (ln r)^3
//! ```
//!
//! where `T` is the absolute temperature. [`convert`] evaluates and
//! analytically inverts the polynomial for point conversions; [`fit`] derives
//! the four coefficients from a measured temperature/resistance table by
//! projection onto an orthonormal polynomial basis.

pub mod convert;
pub mod error;
pub mod fit;
pub mod polynomial;
pub mod table;

pub use convert::{
    resistance_to_temperature, resistance_to_temperature_raw, temperature_to_resistance,
    temperature_to_resistance_raw, Coefficients,
};
pub use error::Error;
pub use fit::{fit_coefficients, Fit, FitQuality, FittingData, Sample};

pub type Result<T> = ::std::result::Result<T, Error>;

/// Absolute zero in degree Celsius, the additive constant between the Celsius
/// scale and the absolute scale used by the polynomial model.
pub const ABSOLUTE_ZERO: f64 = -273.15;
