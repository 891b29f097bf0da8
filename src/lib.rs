//! Ordered-arrangement search with a pluggable filter.
//!
//! Given a list of string tokens, the engine builds every candidate formed by
//! concatenating one or more distinct token positions in some order, and keeps
//! the candidates a predicate accepts:
//!
//! ```text
//! tokens: ["ab", "ba"]
//! tested: "ab", "abba", "ba", "baab"
//! is_palindrome -> {"abba", "baab"}
//! ```
//!
//! Every prefix length is tested, not only full permutations. The search space
//! grows factorially, so the engine reports cost diagnostics through a
//! [`DiagnosticsSink`] and counts what it checked; it never caps the run.
//!
//! Entry points:
//!
//! - [`generate_filtered`] / [`generate_filtered_with`] for an eager result set,
//! - [`try_generate_filtered_with`] for predicates that can fail,
//! - [`matches`] and [`Candidates`] for lazy, stoppable traversal,
//! - [`estimate_count`] for the closed-form worst-case count.

use std::borrow::Cow;

#[macro_use]
mod macros;
mod api;
mod diagnostics;
mod engine;
mod error;
mod estimate;
mod predicates;

pub use api::{Options, generate_filtered, generate_filtered_with, matches, try_generate_filtered_with};
pub use diagnostics::{DiagnosticsSink, NullSink, TracingSink};
pub use engine::{Candidates, Generation, Matches, PermutationEngine, RunMetrics, Warnings};
pub use error::EstimateError;
pub use estimate::{estimate_count, permutations_with_slots};
pub use predicates::{accept_all, has_min_letters, is_palindrome};

// --- Tokens -------------------------------------------------------------------

/// A slice element the engine can read as a token.
///
/// `None` stands for an absent token. Absent and empty tokens are skipped
/// entirely: they never appear in a candidate and never open a branch.
pub trait AsToken {
    fn as_token(&self) -> Option<&str>;
}

impl AsToken for str {
    fn as_token(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsToken for String {
    fn as_token(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsToken for Cow<'_, str> {
    fn as_token(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: AsToken + ?Sized> AsToken for &T {
    fn as_token(&self) -> Option<&str> {
        (**self).as_token()
    }
}

impl<T: AsToken> AsToken for Option<T> {
    fn as_token(&self) -> Option<&str> {
        self.as_ref().and_then(AsToken::as_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_read_through_wrappers() {
        let owned = String::from("Mark");
        let cow: Cow<'_, str> = Cow::Borrowed("Fili");

        assert_eq!("Gimli".as_token(), Some("Gimli"));
        assert_eq!(owned.as_token(), Some("Mark"));
        assert_eq!(cow.as_token(), Some("Fili"));
        assert_eq!(Some("Ilif").as_token(), Some("Ilif"));
        assert_eq!(None::<&str>.as_token(), None);
        assert_eq!(Some(&owned).as_token(), Some("Mark"));
    }
}
