use thiserror::Error;

/// Failures raised by the combinatorial estimator.
///
/// Both variants are programmer errors: they describe arguments that can
/// never produce a meaningful count, not bad data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// A non-positive element count, or a slot count outside `1..=n`.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The count for `n` elements does not fit in a `u128`.
    #[error("arrangement count for {n} elements overflows u128")]
    Overflow { n: i64 },
}
