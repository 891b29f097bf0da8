//! Generate-and-filter driver.
//!
//! `PermutationEngine` folds a [`Candidates`] traversal into a result set and
//! wraps the run with cost diagnostics:
//!
//! ```text
//! (0) pre-flight      -> token count > input_warning ? estimate + line
//! (1) traversal       -> predicate per candidate, insert on match
//!                        result size > result_warning ? line (once)
//! (2) post-run        -> elapsed > latency_warning ? line
//!                        large input ? actual checked count line
//! ```
//!
//! Diagnostic lines go to the caller's sink; the engine never decides where
//! they end up. Nothing is capped: a run that trips every warning still runs
//! to completion.

use super::candidates::Candidates;
use super::metrics::{Generation, RunMetrics, Warnings};
use crate::diagnostics::DiagnosticsSink;
use crate::estimate::estimate_count;
use crate::{AsToken, Options};
use std::collections::HashSet;
use std::convert::Infallible;
use std::time::Instant;

/// Generate-and-filter engine configured with diagnostic thresholds.
///
/// Usage: `PermutationEngine::new(options).run(&tokens, predicate, &mut sink)`.
#[derive(Debug, Clone, Default)]
pub struct PermutationEngine {
    options: Options,
}

impl PermutationEngine {
    pub fn new(options: Options) -> Self {
        PermutationEngine { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Run with an infallible predicate. A panicking predicate unwinds
    /// through the engine untouched.
    pub fn run<T, P, S>(&self, tokens: &[T], mut predicate: P, sink: &mut S) -> Generation
    where
        T: AsToken,
        P: FnMut(&str) -> bool,
        S: DiagnosticsSink + ?Sized,
    {
        infallible!(self.try_run(tokens, |candidate| Ok::<bool, Infallible>(predicate(candidate)), sink))
    }

    /// Run with a fallible predicate. The first `Err` stops the traversal and
    /// is returned as is.
    pub fn try_run<T, P, S, E>(&self, tokens: &[T], mut predicate: P, sink: &mut S) -> Result<Generation, E>
    where
        T: AsToken,
        P: FnMut(&str) -> Result<bool, E>,
        S: DiagnosticsSink + ?Sized,
    {
        if tokens.is_empty() {
            return Ok(Generation::default());
        }

        let mut metrics = RunMetrics::default();
        let token_count = tokens.len();
        let large_input = token_count > self.options.input_warning;

        if large_input {
            metrics.warnings |= Warnings::LARGE_INPUT;
            let n = i64::try_from(token_count).unwrap_or(i64::MAX);
            let line = match estimate_count(n) {
                Ok(potential) => {
                    metrics.theoretical = Some(potential);
                    format!(
                        "generate_filtered: {token_count} tokens as input; slow performance is likely; \
                         potential number of arrangements for non-empty tokens={potential}"
                    )
                }
                Err(err) => format!(
                    "generate_filtered: {token_count} tokens as input; slow performance is likely; \
                     potential number of arrangements is not representable ({err})"
                ),
            };
            sink.emit(&line);
        }

        let start = Instant::now();
        let mut candidates = Candidates::new(tokens);
        metrics.valid_tokens = candidates.valid_tokens();
        tracing::debug!(
            target: "wordplay::engine",
            tokens = token_count,
            valid = metrics.valid_tokens,
            "starting generation"
        );

        let mut matches: HashSet<String> = HashSet::new();
        for candidate in candidates.by_ref() {
            if !predicate(&candidate)? {
                continue;
            }
            matches.insert(candidate);

            if matches.len() > self.options.result_warning && !metrics.warnings.contains(Warnings::LARGE_RESULT) {
                metrics.warnings |= Warnings::LARGE_RESULT;
                sink.emit(&format!(
                    "generate_filtered: {} matches and counting; result set is past {} entries, \
                     potential memory problems",
                    matches.len(),
                    self.options.result_warning
                ));
            }
        }

        metrics.items_checked = candidates.checked();
        metrics.elapsed = start.elapsed();

        if metrics.elapsed > self.options.latency_warning {
            metrics.warnings |= Warnings::SLOW_RUN;
            sink.emit(&format!(
                "generate_filtered: {} ms to generate arrangements for {token_count} tokens. Number of results={}",
                metrics.elapsed.as_millis(),
                matches.len()
            ));
        }

        if large_input {
            sink.emit(&format!("generate_filtered: actual number of arrangements checked={}", metrics.items_checked));
        }

        tracing::debug!(
            target: "wordplay::engine",
            checked = metrics.items_checked,
            matches = matches.len(),
            elapsed = ?metrics.elapsed,
            "generation finished"
        );

        Ok(Generation { matches, metrics })
    }
}
