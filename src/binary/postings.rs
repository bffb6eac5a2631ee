// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy cursor over an encoded postings buffer.

use crate::binary::encoding::GROUP_BYTES;
use crate::postings::Postings;
use crate::types::{PostingsError, SeriesId};

/// Cursor over a buffer of fixed-width big-endian series ids.
///
/// Decodes one 4-byte group at a time as the cursor moves; the buffer is
/// never materialized into a list. Because the groups are fixed-width,
/// `seek` is a binary search over byte offsets rather than a scan, which is
/// what keeps intersection against a large on-disk list cheap.
///
/// The buffer is borrowed and immutable; any number of independent cursors
/// may read the same bytes.
#[derive(Debug)]
pub struct BigEndianPostings<'a> {
    data: &'a [u8],
    /// Index of the group `at` reports. Meaningful only once `started`.
    idx: usize,
    started: bool,
}

impl<'a> BigEndianPostings<'a> {
    /// Wrap an encoded buffer.
    ///
    /// Rejects a length that is not a multiple of 4; that is the one
    /// malformation detectable without trusting the writer. Sortedness is
    /// the writer's contract and is not validated. A rejected buffer makes
    /// a natural [`ErrorPostings`](crate::ErrorPostings) input.
    pub fn new(data: &'a [u8]) -> Result<Self, PostingsError> {
        if data.len() % GROUP_BYTES != 0 {
            return Err(PostingsError::MalformedBuffer { len: data.len() });
        }
        Ok(Self {
            data,
            idx: 0,
            started: false,
        })
    }

    fn count(&self) -> usize {
        self.data.len() / GROUP_BYTES
    }

    fn group(&self, i: usize) -> SeriesId {
        let off = i * GROUP_BYTES;
        u32::from_be_bytes([
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        ])
    }
}

impl Postings for BigEndianPostings<'_> {
    fn next(&mut self) -> bool {
        if self.started {
            if self.idx < self.count() {
                self.idx += 1;
            }
        } else {
            self.started = true;
        }
        self.idx < self.count()
    }

    fn seek(&mut self, target: SeriesId) -> bool {
        // Binary search over groups, flooring at the current position so a
        // seek never moves backwards.
        let mut lo = if self.started { self.idx } else { 0 };
        let mut hi = self.count();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.group(mid) < target {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        self.idx = lo;
        self.started = true;
        self.idx < self.count()
    }

    fn at(&self) -> SeriesId {
        self.group(self.idx)
    }

    fn err(&self) -> Option<&PostingsError> {
        None
    }
}
