use crate::AsToken;
use crate::diagnostics::{DiagnosticsSink, TracingSink};
use crate::engine::{Generation, Matches, PermutationEngine};
use std::collections::HashSet;
use std::time::Duration;

/// Thresholds for the engine's cost diagnostics.
///
/// None of these cap anything; crossing one only emits a diagnostic line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Token count above which a pre-flight estimate is logged.
    pub input_warning: usize,
    /// Result set size above which a memory warning is logged (once per run).
    pub result_warning: usize,
    /// Run time above which the elapsed time is logged.
    pub latency_warning: Duration,
}

impl Default for Options {
    fn default() -> Self {
        Options { input_warning: 10, result_warning: 10_000, latency_warning: Duration::from_millis(100) }
    }
}

/// Return every distinct arrangement of `tokens` accepted by `predicate`,
/// using default [`Options`] and logging diagnostics through `tracing`.
///
/// # Example
/// ```
/// use wordplay::{generate_filtered, is_palindrome};
///
/// let found = generate_filtered(&["ab", "ba"], is_palindrome);
/// assert!(found.contains("abba"));
/// assert!(found.contains("baab"));
/// assert_eq!(found.len(), 2);
/// ```
pub fn generate_filtered<T, P>(tokens: &[T], predicate: P) -> HashSet<String>
where
    T: AsToken,
    P: FnMut(&str) -> bool,
{
    generate_filtered_with(tokens, predicate, &Options::default(), &mut TracingSink).matches
}

/// Like [`generate_filtered`], with explicit thresholds and sink. Returns the
/// run metrics alongside the matches.
pub fn generate_filtered_with<T, P, S>(tokens: &[T], predicate: P, options: &Options, sink: &mut S) -> Generation
where
    T: AsToken,
    P: FnMut(&str) -> bool,
    S: DiagnosticsSink + ?Sized,
{
    PermutationEngine::new(options.clone()).run(tokens, predicate, sink)
}

/// Fallible variant of [`generate_filtered_with`]: the first error returned
/// by `predicate` aborts the run and is handed back unchanged.
pub fn try_generate_filtered_with<T, P, S, E>(
    tokens: &[T],
    predicate: P,
    options: &Options,
    sink: &mut S,
) -> Result<Generation, E>
where
    T: AsToken,
    P: FnMut(&str) -> Result<bool, E>,
    S: DiagnosticsSink + ?Sized,
{
    PermutationEngine::new(options.clone()).try_run(tokens, predicate, sink)
}

/// Lazily yield each distinct match the first time it is produced.
///
/// Nothing is generated until the iterator is polled, so callers can stop
/// early or stream results. No diagnostics are emitted on this path.
///
/// # Example
/// ```
/// use wordplay::{is_palindrome, matches};
///
/// let first = matches(&["Gimli", "Fili", "Ilif", "Ilmig", "Mark"], is_palindrome).next();
/// assert_eq!(first.as_deref(), Some("GimliFiliIlifIlmig"));
/// ```
pub fn matches<T, P>(tokens: &[T], predicate: P) -> Matches<'_, P>
where
    T: AsToken,
    P: FnMut(&str) -> bool,
{
    Matches::new(tokens, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;
    use crate::predicates::is_palindrome;

    #[test]
    fn default_options_match_documented_thresholds() {
        let opts = Options::default();
        assert_eq!(opts.input_warning, 10);
        assert_eq!(opts.result_warning, 10_000);
        assert_eq!(opts.latency_warning, Duration::from_millis(100));
    }

    #[test]
    fn generate_filtered_with_returns_metrics() {
        let res = generate_filtered_with(&["ab", "ba"], is_palindrome, &Options::default(), &mut NullSink);

        assert_eq!(res.sorted(), vec!["abba", "baab"]);
        assert_eq!(res.metrics.items_checked, 4);
        assert_eq!(res.metrics.valid_tokens, 2);
        assert!(res.metrics.theoretical.is_none());
    }

    #[test]
    fn matches_is_lazy_and_deduplicated() {
        let tokens = ["a", "a"];
        let mut calls = 0;
        let mut it = matches(&tokens, |c: &str| {
            calls += 1;
            is_palindrome(c)
        });

        assert_eq!(it.next().as_deref(), Some("a"));
        assert_eq!(it.checked(), 1);
        assert_eq!(it.next().as_deref(), Some("aa"));
        assert_eq!(it.next(), None);
        assert_eq!(it.checked(), 4);
        drop(it);
        assert_eq!(calls, 4);
    }
}
