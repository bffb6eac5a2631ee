// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The on-disk postings encoding and its lazy cursor.
//!
//! A persisted postings list is as plain as a wire format gets: the sorted
//! ids, each as a 4-byte big-endian group, packed back to back. No length
//! prefix (the buffer length over 4 *is* the element count), no separators,
//! no per-entry framing. Fixed width is the point: it buys random access,
//! and random access buys a binary-search `seek` instead of a linear crawl.
//!
//! ```text
//! ┌─────────────┬─────────────┬─────────────┬───  ───┬─────────────┐
//! │ id[0]  (BE) │ id[1]  (BE) │ id[2]  (BE) │  ...   │ id[n-1] (BE)│
//! │   4 bytes   │   4 bytes   │   4 bytes   │        │   4 bytes   │
//! └─────────────┴─────────────┴─────────────┴───  ───┴─────────────┘
//!   buffer length = n * 4, ids strictly increasing
//! ```
//!
//! The index writer owns the sortedness invariant; this side only validates
//! what it can check in O(1), the length, and does that once at cursor
//! construction. [`BigEndianPostings`] then decodes groups on demand and
//! never materializes the list.

mod encoding;
mod postings;

pub use encoding::{encode_postings, GROUP_BYTES};
pub use postings::BigEndianPostings;
