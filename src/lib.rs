//! Postings layer for a time-series storage engine.
//!
//! Label selectors resolve to postings lists: strictly increasing sequences
//! of series ids, one list per label pair. This crate walks those lists
//! through a single cursor contract and combines them with intersection
//! (series matching all selectors) and union (series matching any), both
//! over in-memory lists and over the raw on-disk encoding, which is
//! decoded lazily and never materialized.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────────┐     ┌──────────────────┐
//! │  types.rs   │────▶│    postings/       │◀────│     binary/      │
//! │ (SeriesId,  │     │ (Postings trait,   │     │ (wire format,    │
//! │  LabelPair, │     │  list cursor,      │     │  BigEndian       │
//! │  errors)    │     │  intersect, merge, │     │  cursor)         │
//! └─────────────┘     │  sentinels)        │     └──────────────────┘
//!                     └────────────────────┘
//!                               ▲
//!                     ┌────────────────────┐
//!                     │      mem.rs        │
//!                     │ (head-block store, │
//!                     │  pair → id list)   │
//!                     └────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use tempix::{expand, intersect, ListPostings, Postings};
//!
//! let mut matching = intersect(vec![
//!     Box::new(ListPostings::new(&[2, 4, 9, 12])) as Box<dyn Postings>,
//!     Box::new(ListPostings::new(&[4, 5, 9, 20])),
//! ]);
//! assert_eq!(expand(matching.as_mut()).unwrap(), vec![4, 9]);
//! ```
//!
//! Cursors are single-pass and exclusively owned. Always check
//! [`Postings::err`] after iteration ends; it is the only way to tell an
//! empty result from a truncated one.

// Module declarations
pub mod binary;
mod mem;
mod postings;
mod types;

// Re-exports for public API
pub use binary::{encode_postings, BigEndianPostings, GROUP_BYTES};
pub use mem::MemPostings;
pub use postings::{
    expand, intersect, merge, EmptyPostings, ErrorPostings, IntersectPostings, ListPostings,
    MergedPostings, Postings,
};
pub use types::{LabelPair, PostingsError, SeriesId};
