// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the postings layer.
//!
//! A postings list is the set of series that carry one particular label
//! pair, stored as a strictly increasing sequence of [`SeriesId`]s.
//! Everything else in this crate is a way of walking such sequences: one at
//! a time through a cursor, or several at once through the intersect/merge
//! combinators.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Strictly increasing ids**: within one postings sequence, every id is
//!   greater than the one before it. The index writer guarantees this and
//!   the cursors trust it. A violated ordering does not fail loudly; it
//!   silently drops or duplicates ids in combined output. `MemPostings`
//!   tracks out-of-order appends and repairs them in `ensure_order`.
//!
//! - **Buffer length ≡ 0 (mod 4)**: an encoded postings buffer is a bare
//!   array of 4-byte groups, nothing else. The length is checked once, at
//!   cursor construction, never during iteration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a single series.
///
/// Postings sequences are ordered by the natural numeric order on this
/// type. Allocation and recycling of ids happens elsewhere; this layer only
/// ever compares them.
pub type SeriesId = u32;

/// A label name/value pair, the unit a postings list is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelPair {
    pub name: String,
    pub value: String,
}

impl LabelPair {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Errors surfaced by the postings layer.
///
/// Leaf cursors over validated in-memory data never fail, so the only
/// errors that travel through a cursor chain are the ones a caller planted
/// via [`ErrorPostings`](crate::ErrorPostings), plus the construction-time
/// rejection of a malformed buffer.
///
/// Errors are never returned from `next`/`seek` themselves. A failing
/// cursor reports exhaustion and keeps the error queryable through
/// [`Postings::err`](crate::Postings::err); callers check it once iteration
/// ends to tell "no results" from "results truncated by failure".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostingsError {
    /// An encoded postings buffer whose length is not a multiple of 4.
    #[error("postings buffer length {len} is not a multiple of 4")]
    MalformedBuffer { len: usize },

    /// A failure in whatever produced a postings input, carried through the
    /// combinator chain verbatim.
    #[error("postings source failed: {0}")]
    Source(String),
}
