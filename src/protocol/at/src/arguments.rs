// Copyright 2023 Pelikan Foundation LLC.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::parse::{ParseError, ParseResult};
use crate::ARGUMENTS_MAX;

use arrayvec::ArrayVec;
use bstr::BStr;

use core::fmt;

/// The ordered list of argument views passed to get and set handlers.
///
/// Each argument borrows a comma-delimited range of the caller's input
/// buffer, so the list is only valid for the duration of the parse call that
/// produced it. Arguments may be empty (`=1,,3` carries three arguments, the
/// middle one zero-length) and their content is not interpreted.
pub struct Arguments<'b> {
    slices: ArrayVec<&'b [u8], ARGUMENTS_MAX>,
}

impl<'b> Arguments<'b> {
    pub(crate) fn empty() -> Self {
        Self {
            slices: ArrayVec::new(),
        }
    }

    /// Splits `buf[start..=end]` on commas, rewriting the buffer in place:
    /// each separating comma becomes `NUL`, as does the byte one past `end`
    /// when the buffer extends that far. Reaching `ARGUMENTS_MAX` slices is
    /// an overflow and rejects the whole line, it never truncates.
    pub(crate) fn tokenize(buf: &'b mut [u8], start: usize, end: usize) -> ParseResult<Self> {
        let mut starts: ArrayVec<usize, ARGUMENTS_MAX> = ArrayVec::new();
        starts.push(start);

        let mut i = start;
        while i <= end && starts.len() < ARGUMENTS_MAX {
            if buf[i] == b',' {
                buf[i] = 0;
                starts.push(i + 1);
            }
            i += 1;
        }

        if end + 1 < buf.len() {
            buf[end + 1] = 0;
        }

        if starts.len() == ARGUMENTS_MAX {
            trace!("argument overflow: more than {} slices", ARGUMENTS_MAX - 1);
            return Err(ParseError);
        }

        // the rewrites are done, arguments are read-only views from here on
        let buf: &'b [u8] = buf;

        let mut slices = ArrayVec::new();
        for (n, &arg_start) in starts.iter().enumerate() {
            let arg_end = match starts.get(n + 1) {
                // up to, not including, the rewritten comma
                Some(&next) => next - 1,
                None => end + 1,
            };
            slices.push(&buf[arg_start..arg_end]);
        }

        Ok(Self { slices })
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'b [u8]> {
        self.slices.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'b [u8]> + '_ {
        self.slices.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'b [u8]] {
        &self.slices
    }
}

impl<'b> fmt::Debug for Arguments<'b> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slices.iter().map(|s| BStr::new(s)))
            .finish()
    }
}
