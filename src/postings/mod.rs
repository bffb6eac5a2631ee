// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Postings cursors and the combinators that compose them.
//!
//! A query arrives as a set of label selectors. Each selector resolves to
//! one postings list; the query's boolean structure decides how the lists
//! combine. AND becomes [`intersect`], OR becomes [`merge`], and the result
//! of either is just another cursor, so the shapes nest arbitrarily:
//!
//! ```text
//!                intersect
//!               /         \
//!         merge             BigEndianPostings   (on-disk block)
//!        /     \
//!  ListPostings ListPostings                    (head block, via MemPostings)
//! ```
//!
//! Every node in that tree speaks the same four-method [`Postings`]
//! contract, and every composite owns its children outright. Nothing here
//! allocates beyond the cursor structs themselves; the heavy lifting is in
//! `seek`, which lets intersection skip runs of non-matching ids in one
//! binary search instead of a linear crawl.

mod intersect;
mod list;
mod merge;
mod sentinel;

pub use intersect::{intersect, IntersectPostings};
pub use list::ListPostings;
pub use merge::{merge, MergedPostings};
pub use sentinel::{EmptyPostings, ErrorPostings};

use crate::types::{PostingsError, SeriesId};

/// Forward-only, seekable cursor over a strictly increasing sequence of
/// series ids.
///
/// A cursor starts positioned *before* its first element; `at` is only
/// meaningful after `next` or `seek` returned true. Once `next` or `seek`
/// returns false the cursor is exhausted for good, and `err` tells natural
/// end-of-sequence (`None`) apart from a failed input.
///
/// Cursors are single-threaded and exclusively owned: handing one to a
/// combinator transfers it, and nothing else may advance it afterwards.
pub trait Postings {
    /// Advance to the next id. Returns false once the sequence is over or
    /// an input failed; check [`err`](Postings::err) afterwards.
    fn next(&mut self) -> bool;

    /// Advance to the first id `>= target`, which may be the current one.
    /// Never moves backwards: a target at or below the current position is
    /// a no-op returning true. Returns false, exhausting the cursor, when
    /// no such id exists.
    fn seek(&mut self, target: SeriesId) -> bool;

    /// The id at the current position.
    ///
    /// Calling this before a successful `next`/`seek`, or after exhaustion,
    /// is a bug in the caller: leaf cursors panic on the out-of-range
    /// index and composites `debug_assert`.
    fn at(&self) -> SeriesId;

    /// The terminal error, if iteration ended in failure rather than
    /// natural exhaustion. `None` while the cursor is still live and after
    /// a clean end.
    fn err(&self) -> Option<&PostingsError>;
}

/// Drain a cursor into a vector, surfacing its terminal error.
///
/// Useful when a result set is known to be small; large results should be
/// streamed through the cursor directly.
pub fn expand<P: Postings + ?Sized>(p: &mut P) -> Result<Vec<SeriesId>, PostingsError> {
    let mut ids = Vec::new();
    while p.next() {
        ids.push(p.at());
    }
    match p.err() {
        Some(e) => Err(e.clone()),
        None => Ok(ids),
    }
}
