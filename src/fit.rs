use ndarray::Array1;
use num_traits::Float;

use crate::convert::{absolute_zero, resistance_to_temperature_raw, Coefficients};
use crate::polynomial::Polynomial;
use crate::{Error, Result};

/// The dimension of the polynomial space, one above the cubic degree.
const BASIS_SIZE: usize = 4;

/// A single measured temperature/resistance pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<E> {
    /// Measured temperature in degree Celsius.
    pub temperature: E,
    /// Measured resistance in Ohm.
    pub resistance: E,
}

/// One fitting run's view of the measured table
///
/// Holds the transformed samples `x_i = ln r_i` and
/// `y_i = 1/(t_i - ABSOLUTE_ZERO)` and defines the inner product
/// `<p, q> = sum p(x_i) * q(x_i)` under which the basis is orthonormalized.
/// All fitting state lives here and is dropped with the run, so independent
/// runs never share anything.
pub struct FittingData<E> {
    x: Array1<E>,
    y: Array1<E>,
}

impl<E: Float> FittingData<E> {
    /// Transform measured pairs into fitting space
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTable`] for an empty slice and
    /// [`Error::OutOfDomain`] when any resistance is non-positive or any
    /// temperature equals absolute zero.
    pub fn new(samples: &[Sample<E>]) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::EmptyTable);
        }
        for sample in samples {
            if sample.resistance <= E::zero() {
                return Err(Error::OutOfDomain("resistance must be positive"));
            }
            if sample.temperature == absolute_zero() {
                return Err(Error::OutOfDomain("temperature equals absolute zero"));
            }
        }

        let x = samples
            .iter()
            .map(|sample| sample.resistance.ln())
            .collect();
        let y = samples
            .iter()
            .map(|sample| (sample.temperature - absolute_zero()).recip())
            .collect();
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Abscissas `x_i = ln r_i`.
    pub const fn abscissas(&self) -> &Array1<E> {
        &self.x
    }

    /// Targets `y_i = 1/(t_i - ABSOLUTE_ZERO)`.
    pub const fn targets(&self) -> &Array1<E> {
        &self.y
    }

    /// Evaluate `<p, q>` over the sample abscissas.
    pub fn inner(&self, p: &Polynomial<E>, q: &Polynomial<E>) -> E {
        self.x
            .iter()
            .fold(E::zero(), |acc, &xi| acc + p.evaluate(xi) * q.evaluate(xi))
    }

    /// Evaluate `<y, q>`, the inner product of the sampled target function
    /// against a basis polynomial.
    fn project_targets(&self, q: &Polynomial<E>) -> E {
        self.x
            .iter()
            .zip(self.y.iter())
            .fold(E::zero(), |acc, (&xi, &yi)| acc + yi * q.evaluate(xi))
    }
}

/// Orthonormalize the monomial basis `{1, x, x^2, x^3}` under the sample
/// inner product via classical Gram-Schmidt
///
/// Processes the basis in ascending degree, subtracting from each polynomial
/// its projection onto every previously orthonormalized one before
/// normalizing.
///
/// # Errors
///
/// Returns [`Error::SingularFit`] when a norm comes out zero or negative,
/// which happens when the samples cover fewer than four distinct abscissas.
pub fn orthonormal_basis<E: Float>(data: &FittingData<E>) -> Result<Vec<Polynomial<E>>> {
    let mut basis = Polynomial::monomial_basis(BASIS_SIZE - 1);
    for ii in 0..basis.len() {
        let (done, rest) = basis.split_at_mut(ii);
        let current = &mut rest[0];
        for prior in done.iter() {
            let fact = data.inner(current, prior);
            current.add_scaled(prior, -fact);
        }
        let norm = data.inner(current, current);
        if norm <= E::zero() {
            return Err(Error::SingularFit);
        }
        current.scale(norm.sqrt().recip());
    }
    Ok(basis)
}

/// A fitted coefficient set.
#[derive(Clone, Copy, Debug)]
pub struct Fit<E> {
    coefficients: Coefficients<E>,
}

impl<E: Float> Fit<E> {
    /// Project the targets onto an orthonormal basis and accumulate the
    /// least-squares minimizer in monomial form
    ///
    /// With an orthonormal basis the projection coefficients
    /// `fact_k = <y, q_k>` give the closed-form minimizer of
    /// `sum (p(x_i) - y_i)^2` directly; no normal-equations solve is needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateCoefficients`] if the fitted cubic
    /// coefficient is exactly zero, since such a fit cannot be inverted.
    pub fn from_projection(data: &FittingData<E>, basis: &[Polynomial<E>]) -> Result<Self> {
        let mut result = Polynomial::zero(BASIS_SIZE - 1);
        for q in basis {
            let fact = data.project_targets(q);
            result.add_scaled(q, fact);
        }
        let c = result.coefficients();
        let coefficients = Coefficients::new([c[0], c[1], c[2], c[3]])?;
        Ok(Self { coefficients })
    }

    pub const fn coefficients(&self) -> &Coefficients<E> {
        &self.coefficients
    }

    /// Compare temperatures reconstructed from the fit against the measured
    /// table and report the worst deviation
    ///
    /// Purely diagnostic; the fit itself is unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTable`] for an empty slice.
    pub fn quality(&self, samples: &[Sample<E>]) -> Result<FitQuality<E>> {
        if samples.is_empty() {
            return Err(Error::EmptyTable);
        }
        let mut max_abs_error = E::zero();
        let mut at_temperature = samples[0].temperature;
        for sample in samples {
            let estimate = resistance_to_temperature_raw(sample.resistance, &self.coefficients);
            let error = (estimate - sample.temperature).abs();
            if error > max_abs_error {
                max_abs_error = error;
                at_temperature = sample.temperature;
            }
        }
        Ok(FitQuality {
            max_abs_error,
            at_temperature,
        })
    }
}

/// Worst-case deviation of a fit over its training samples.
#[derive(Clone, Copy, Debug)]
pub struct FitQuality<E> {
    /// Largest absolute temperature error in degree Celsius.
    pub max_abs_error: E,
    /// Measured temperature at which the largest error occurs.
    pub at_temperature: E,
}

/// Fit the four Steinhart-Hart coefficients to a measured table
///
/// Transforms the samples into fitting space, orthonormalizes the cubic
/// monomial basis under the sample inner product and projects the targets
/// onto it. At least four samples with distinct resistances are needed for a
/// well-posed fit; exactly four yield the unique interpolating cubic.
///
/// # Errors
///
/// Propagates [`Error::EmptyTable`], [`Error::OutOfDomain`],
/// [`Error::SingularFit`] and [`Error::DegenerateCoefficients`] from the
/// stages described above.
pub fn fit_coefficients<E: Float>(samples: &[Sample<E>]) -> Result<Fit<E>> {
    let data = FittingData::new(samples)?;
    let basis = orthonormal_basis(&data)?;
    Fit::from_projection(&data, &basis)
}
