// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output assembly shared by every strategy.

use std::ops::Range;

/// Builds the output of one pass: unmatched text is copied verbatim, each
/// replaced span is swapped for its literal.
///
/// Spans must be fed in ascending, non-overlapping order, which is what
/// `find_iter`/`captures_iter` yield.
pub(crate) struct Splicer<'t> {
    text: &'t [u8],
    out: Vec<u8>,
    cursor: usize,
}

impl<'t> Splicer<'t> {
    pub(crate) fn new(text: &'t [u8]) -> Self {
        Self {
            text,
            out: Vec::with_capacity(text.len()),
            cursor: 0,
        }
    }

    /// Copy everything before `span`, then `replacement`, and resume after `span`.
    pub(crate) fn replace(&mut self, span: Range<usize>, replacement: &[u8]) {
        debug_assert!(span.start >= self.cursor, "spans must not overlap");
        self.out.extend_from_slice(&self.text[self.cursor..span.start]);
        self.out.extend_from_slice(replacement);
        self.cursor = span.end;
    }

    /// Copy the tail after the last replaced span.
    pub(crate) fn finish(mut self) -> Vec<u8> {
        self.out.extend_from_slice(&self.text[self.cursor..]);
        self.out
    }
}

#[cfg(test)]
#[path = "splice_tests.rs"]
mod tests;
