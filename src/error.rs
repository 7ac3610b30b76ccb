use std::io;

/// Error type shared by conversions, fitting and table reading
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An input lies outside the mathematical domain of the operation, for
    /// instance a non-positive resistance handed to `ln`.
    #[error("out of domain: {0}")]
    OutOfDomain(&'static str),

    /// The cubic coefficient is zero, so the analytic inversion is undefined.
    #[error("degenerate coefficient set: the cubic coefficient a3 must be non-zero")]
    DegenerateCoefficients,

    /// The depressed cubic has three real roots at the requested temperature;
    /// the direct Cardano branch does not apply there.
    #[error("cubic discriminant is negative: no single-real-root solution at this temperature")]
    NonRealRoot,

    /// Gram-Schmidt produced a vanishing norm, which means the sample set has
    /// fewer than four distinct abscissas.
    #[error("singular fit: sample set does not span a cubic basis")]
    SingularFit,

    #[error("calibration table contains no samples")]
    EmptyTable,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed table: {0}")]
    Table(#[from] csv::Error),
}
