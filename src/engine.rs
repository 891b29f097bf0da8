//! Generate-and-filter engine.
//!
//! The engine enumerates ordered arrangements of token positions and tests
//! each one against a caller-supplied predicate as soon as it is formed. It
//! never materializes the arrangement space; only matches are kept.
//!
//! ## How the parts work together
//!
//! ```text
//! tokens ── Candidates::new ─────────────── (candidates.rs)
//!             - valid positions -> PositionSet (positions.rs)
//!             - depth-first, every prefix length
//!                   │
//!                   v
//!           PermutationEngine::try_run ──── (generator.rs)
//!             - pre-flight estimate (estimate.rs)
//!             - predicate per candidate
//!             - dedup by value (HashSet)
//!             - diagnostics -> DiagnosticsSink
//!                   │
//!                   v
//!              Generation { matches, metrics }   (metrics.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `positions.rs`: bitset of unused positions over the fixed input slice.
//! - `candidates.rs`: lazy traversal (`Candidates`) and lazy filtered,
//!   deduplicated traversal (`Matches`).
//! - `generator.rs`: the eager driver with cost diagnostics.
//! - `metrics.rs`: per-run counters, timings and the `Warnings` flags.
//!
//! ## Debugging
//!
//! Run start/finish details are emitted as `debug` events under the
//! `wordplay::engine` target.

#[path = "engine/candidates.rs"]
mod candidates;
#[path = "engine/generator.rs"]
mod generator;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/positions.rs"]
mod positions;

pub use candidates::{Candidates, Matches};
pub use generator::PermutationEngine;
pub use metrics::{Generation, RunMetrics, Warnings};
