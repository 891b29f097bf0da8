//! Engine run metrics.
//!
//! Every run returns a `RunMetrics` alongside its result set. The counters are
//! owned by the run, so two runs never share or reset each other's numbers.
//!
//! The intended usage is:
//!
//! - compare `items_checked` with `theoretical` (or with
//!   [`estimate_count`](crate::estimate_count)) to confirm the traversal
//!   visited what it should. The two only diverge when absent or empty tokens
//!   were skipped;
//! - inspect `warnings` to see which cost diagnostics fired without parsing
//!   the emitted lines.

use std::collections::HashSet;
use std::time::Duration;

bitflags::bitflags! {
    /// Cost diagnostics raised during a run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Warnings: u8 {
        /// Token count exceeded `Options::input_warning`.
        const LARGE_INPUT  = 1 << 0;
        /// Result set grew past `Options::result_warning`.
        const LARGE_RESULT = 1 << 1;
        /// Elapsed time exceeded `Options::latency_warning`.
        const SLOW_RUN     = 1 << 2;
    }
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Candidates handed to the predicate.
    pub items_checked: u64,
    /// Positions that took part in the search (non-empty tokens).
    pub valid_tokens: usize,
    /// Worst-case arrangement count, computed only for large inputs.
    /// `None` when the pre-flight check did not run or the count overflowed.
    pub theoretical: Option<u128>,
    /// Total elapsed time for the run.
    pub elapsed: Duration,
    pub warnings: Warnings,
}

/// Engine output: the filtered result set plus run metrics.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    pub matches: HashSet<String>,
    pub metrics: RunMetrics,
}

impl Generation {
    /// Matches in lexicographic order, for stable display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.matches.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}
