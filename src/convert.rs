use ndarray::Array1;
use num_traits::Float;

use crate::polynomial::{horner, Polynomial};
use crate::{Error, Result, ABSOLUTE_ZERO};

/// The four Steinhart-Hart coefficients `[a0, a1, a2, a3]` of the polynomial
/// `1/T = a0 + a1*u + a2*u^2 + a3*u^3` in `u = ln r`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients<E>([E; 4]);

impl<E: Float> Coefficients<E> {
    /// Wrap a coefficient set, rejecting `a3 == 0`
    ///
    /// The analytic temperature-to-resistance inversion divides by `a3`, so a
    /// vanishing cubic coefficient makes the model degenerate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateCoefficients`] when `a3` is exactly zero.
    pub fn new(values: [E; 4]) -> Result<Self> {
        if values[3] == E::zero() {
            return Err(Error::DegenerateCoefficients);
        }
        Ok(Self(values))
    }

    pub const fn values(&self) -> &[E; 4] {
        &self.0
    }

    /// Evaluate the polynomial at `u = ln r`.
    pub fn evaluate(&self, u: E) -> E {
        horner(self.0.iter(), u)
    }

    pub fn polynomial(&self) -> Polynomial<E> {
        Polynomial::new(Array1::from(self.0.to_vec()))
    }
}

pub(crate) fn absolute_zero<E: Float>() -> E {
    constant(ABSOLUTE_ZERO)
}

fn constant<E: Float>(value: f64) -> E {
    E::from(value).expect("constant must be representable in the target float type")
}

/// Convert a resistance (Ohm) to a temperature (degree Celsius)
///
/// Evaluates the polynomial at `ln r` and inverts the reciprocal absolute
/// temperature.
///
/// # Errors
///
/// Returns [`Error::OutOfDomain`] when `r <= 0` or when the polynomial
/// vanishes at `ln r`, where the model has a pole.
pub fn resistance_to_temperature<E: Float>(r: E, coefficients: &Coefficients<E>) -> Result<E> {
    if r <= E::zero() {
        return Err(Error::OutOfDomain("resistance must be positive"));
    }
    let t = resistance_to_temperature_raw(r, coefficients);
    if t.is_finite() {
        Ok(t)
    } else {
        Err(Error::OutOfDomain(
            "polynomial vanishes at ln r: reciprocal temperature has a pole",
        ))
    }
}

/// Resistance-to-temperature conversion with IEEE propagation
///
/// Numeric drop-in for the checked conversion: domain violations surface as
/// `NaN` or infinity instead of an error, matching the legacy library.
pub fn resistance_to_temperature_raw<E: Float>(r: E, coefficients: &Coefficients<E>) -> E {
    let ti = coefficients.evaluate(r.ln());
    ti.recip() + absolute_zero()
}

/// Convert a temperature (degree Celsius) to a resistance (Ohm)
///
/// Solves `a0 + a1*u + a2*u^2 + a3*u^3 = 1/(t - ABSOLUTE_ZERO)` for `u` in
/// closed form by depressing the cubic and applying Cardano's formula on its
/// single-real-root branch, then returns `r = exp(u)`.
///
/// # Errors
///
/// Returns [`Error::OutOfDomain`] when `t` equals absolute zero or the
/// resulting resistance overflows, and [`Error::NonRealRoot`] when the cubic
/// discriminant is negative, i.e. the cubic has three real roots at this
/// temperature and the direct formula does not apply.
pub fn temperature_to_resistance<E: Float>(t: E, coefficients: &Coefficients<E>) -> Result<E> {
    if t == absolute_zero() {
        return Err(Error::OutOfDomain("temperature equals absolute zero"));
    }
    let (_, _, disc) = depressed_cubic(t, coefficients);
    if disc < E::zero() {
        return Err(Error::NonRealRoot);
    }
    let r = temperature_to_resistance_raw(t, coefficients);
    if r.is_finite() {
        Ok(r)
    } else {
        Err(Error::OutOfDomain("resistance overflows at this temperature"))
    }
}

/// Temperature-to-resistance conversion with IEEE propagation
///
/// Numeric drop-in for the checked conversion: a negative discriminant or a
/// temperature at absolute zero propagates `NaN` through the formula, matching
/// the legacy library.
pub fn temperature_to_resistance_raw<E: Float>(t: E, coefficients: &Coefficients<E>) -> E {
    let third = constant::<E>(1.0 / 3.0);
    let half = constant::<E>(0.5);

    let (b, q, disc) = depressed_cubic(t, coefficients);
    let root = disc.sqrt();
    // Signed cube roots keep the real solution branch where a fractional
    // power of a negative base would produce NaN.
    let v = -(q * half + root).cbrt();
    let u = (-(q * half) + root).cbrt();
    (u + v - b * third).exp()
}

/// Reduce the implicit cubic at temperature `t` to depressed form; returns
/// `(b, q, disc)` with `b = a2/a3`, `q` the depressed linear term and `disc`
/// the Cardano discriminant `q^2/4 + p^3/27`.
fn depressed_cubic<E: Float>(t: E, coefficients: &Coefficients<E>) -> (E, E, E) {
    let third = constant::<E>(1.0 / 3.0);
    let two_over_27 = constant::<E>(2.0 / 27.0);
    let quarter = constant::<E>(0.25);
    let one_over_27 = constant::<E>(1.0 / 27.0);

    let [a0, a1, a2, a3] = *coefficients.values();
    let ti = t - absolute_zero();
    let d = (a0 - ti.recip()) / a3;
    let c = a1 / a3;
    let b = a2 / a3;
    let q = two_over_27 * b * b * b - third * b * c + d;
    let p = c - third * b * b;
    let disc = q * q * quarter + p * p * p * one_over_27;
    (b, q, disc)
}
