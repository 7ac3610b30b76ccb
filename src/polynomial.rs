use ndarray::Array1;
use num_traits::Float;

/// A real polynomial stored as a dense coefficient vector in ascending order
/// of degree, so `coefficients[i]` multiplies `x^i`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<E>(Array1<E>);

impl<E: Float> Polynomial<E> {
    pub fn new(coefficients: Array1<E>) -> Self {
        assert!(
            !coefficients.is_empty(),
            "a polynomial needs at least a constant coefficient"
        );
        Self(coefficients)
    }

    /// The zero polynomial of the given degree.
    pub fn zero(degree: usize) -> Self {
        Self(Array1::zeros(degree + 1))
    }

    /// The canonical monomial basis `{1, x, .., x^degree}`.
    pub fn monomial_basis(degree: usize) -> Vec<Self> {
        (0..=degree)
            .map(|ii| {
                let mut coefficients = Array1::zeros(degree + 1);
                coefficients[ii] = E::one();
                Self(coefficients)
            })
            .collect()
    }

    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }

    pub const fn coefficients(&self) -> &Array1<E> {
        &self.0
    }

    /// Evaluate the polynomial at `x` by Horner's method
    ///
    /// Accumulates from the highest-degree coefficient downward, so a
    /// polynomial of degree `d` costs `d` multiplications and additions.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndarray::arr1;
    /// use steinhart::polynomial::Polynomial;
    ///
    /// let p = Polynomial::new(arr1(&[1.0, 0.0, 2.0]));
    /// assert_eq!(p.evaluate(3.0), 19.0);
    /// ```
    pub fn evaluate(&self, x: E) -> E {
        horner(self.0.iter(), x)
    }

    /// Evaluate `self *= fact`.
    pub fn scale(&mut self, fact: E) {
        self.0.mapv_inplace(|c| c * fact);
    }

    /// Evaluate `self += fact * q`.
    ///
    /// # Panics
    ///
    /// Panics if the two polynomials have different degrees.
    pub fn add_scaled(&mut self, q: &Self, fact: E) {
        assert_eq!(
            self.0.len(),
            q.0.len(),
            "polynomials must share a coefficient length"
        );
        self.0.zip_mut_with(&q.0, |ci, &qi| *ci = *ci + qi * fact);
    }
}

/// Horner evaluation over coefficients in ascending order of degree.
pub(crate) fn horner<'a, E: Float + 'a>(
    coefficients: impl DoubleEndedIterator<Item = &'a E>,
    x: E,
) -> E {
    coefficients.rev().fold(E::zero(), |acc, &c| acc * x + c)
}
