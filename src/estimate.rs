//! Closed-form arrangement counts.
//!
//! The engine explores every ordered, position-unique selection of 1..=n
//! tokens. For `n` valid tokens that is
//!
//! ```text
//! estimate_count(n) = P(n, 1) + P(n, 2) + ... + P(n, n)
//! P(n, k)           = n * (n - 1) * ... * (n - k + 1)
//! ```
//!
//! The number is only used for pre-flight cost warnings and for checking the
//! engine's `items_checked` counter; nothing here touches tokens.

use crate::error::EstimateError;

/// Number of arrangements the engine would test for `n` valid tokens when
/// every candidate is evaluated.
///
/// # Example
/// ```
/// assert_eq!(wordplay::estimate_count(5), Ok(325));
/// ```
pub fn estimate_count(n: i64) -> Result<u128, EstimateError> {
    if n <= 0 {
        return Err(EstimateError::InvalidArgument("number of elements must be a positive integer"));
    }

    let mut total: u128 = 0;
    for slots in 1..=n {
        let term = permutations_with_slots(n, slots)?;
        total = total.checked_add(term).ok_or(EstimateError::Overflow { n })?;
    }
    Ok(total)
}

/// `P(n, slots)`: ordered selections of `slots` items out of `n`, without
/// repetition.
pub fn permutations_with_slots(n: i64, slots: i64) -> Result<u128, EstimateError> {
    if slots > n {
        return Err(EstimateError::InvalidArgument("slots may not exceed the number of elements"));
    }
    if slots <= 0 {
        return Err(EstimateError::InvalidArgument("slots must be a positive integer"));
    }
    if n <= 0 {
        return Err(EstimateError::InvalidArgument("number of elements must be a positive integer"));
    }

    let mut product: u128 = 1;
    for i in 0..slots {
        // n - i stays in 1..=n here, so the cast is lossless.
        let factor = (n - i) as u128;
        product = product.checked_mul(factor).ok_or(EstimateError::Overflow { n })?;
    }
    Ok(product)
}
