//! Lazy candidate generation.
//!
//! `Candidates` walks the arrangement tree depth-first and yields every node,
//! not only the leaves: for tokens `["a", "b"]` the sequence is
//!
//! ```text
//! a -> ab -> b -> ba
//! ```
//!
//! State is a single prefix buffer, one `PositionSet` of unused positions and
//! an explicit frame stack (one frame per depth). Descending takes a position
//! out of the set and appends its token; backtracking puts it back and
//! truncates the prefix. Nothing is allocated per step apart from the yielded
//! `String`.
//!
//! `Matches` layers a predicate and value deduplication on top, yielding each
//! distinct matching candidate the first time it is produced.

use super::positions::PositionSet;
use crate::AsToken;
use std::collections::HashSet;

/// One depth of the traversal.
///
/// `held` is the position this depth currently contributes to the prefix; it
/// is released before the next sibling is tried.
#[derive(Debug, Clone)]
struct Frame {
    prefix_len: usize,
    cursor: usize,
    held: Option<usize>,
}

/// Iterator over every candidate arrangement of a token slice.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    tokens: Vec<&'a str>,
    unused: PositionSet,
    prefix: String,
    stack: Vec<Frame>,
    valid: usize,
    checked: u64,
}

impl<'a> Candidates<'a> {
    /// Prepare a traversal over `tokens`. Absent and empty tokens are left
    /// out of the position set, so they never produce a candidate or a branch.
    pub fn new<T: AsToken>(tokens: &'a [T]) -> Self {
        let mut unused = PositionSet::with_capacity(tokens.len());
        let tokens: Vec<&'a str> = tokens
            .iter()
            .enumerate()
            .map(|(pos, token)| match token.as_token() {
                Some(s) if !s.is_empty() => {
                    unused.insert(pos);
                    s
                }
                _ => "",
            })
            .collect();

        let valid = unused.len();
        let stack = if unused.is_empty() { Vec::new() } else { vec![Frame { prefix_len: 0, cursor: 0, held: None }] };

        Candidates { tokens, unused, prefix: String::new(), stack, valid, checked: 0 }
    }

    /// Number of candidates produced so far.
    pub fn checked(&self) -> u64 {
        self.checked
    }

    /// Number of positions that take part in the search.
    pub fn valid_tokens(&self) -> usize {
        self.valid
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;

            if let Some(pos) = frame.held.take() {
                self.unused.insert(pos);
                self.prefix.truncate(frame.prefix_len);
            }

            let Some(pos) = self.unused.next_from(frame.cursor) else {
                self.stack.pop();
                continue;
            };
            debug_assert!(self.unused.contains(pos));

            frame.cursor = pos + 1;
            frame.held = Some(pos);
            self.unused.remove(pos);
            self.prefix.push_str(self.tokens[pos]);
            self.checked += 1;

            if !self.unused.is_empty() {
                self.stack.push(Frame { prefix_len: self.prefix.len(), cursor: 0, held: None });
            }

            return Some(self.prefix.clone());
        }
    }
}

/// Iterator over the distinct candidates accepted by a predicate.
pub struct Matches<'a, P> {
    candidates: Candidates<'a>,
    predicate: P,
    seen: HashSet<String>,
}

impl<'a, P> Matches<'a, P>
where
    P: FnMut(&str) -> bool,
{
    pub fn new<T: AsToken>(tokens: &'a [T], predicate: P) -> Self {
        Matches { candidates: Candidates::new(tokens), predicate, seen: HashSet::new() }
    }

    /// Number of candidates tested so far.
    pub fn checked(&self) -> u64 {
        self.candidates.checked()
    }
}

impl<P> Iterator for Matches<'_, P>
where
    P: FnMut(&str) -> bool,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for candidate in self.candidates.by_ref() {
            if (self.predicate)(&candidate) && !self.seen.contains(&candidate) {
                self.seen.insert(candidate.clone());
                return Some(candidate);
            }
        }
        None
    }
}

impl<P> std::fmt::Debug for Matches<'_, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matches")
            .field("candidates", &self.candidates)
            .field("predicate", &"<function>")
            .field("seen", &self.seen.len())
            .finish()
    }
}
