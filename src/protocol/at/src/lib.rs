// Copyright 2023 Pelikan Foundation LLC.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A parser for AT-style command lines as spoken by modems and similar
//! firmware: a fixed marker prefix (eg. `AT+`) followed by a keyword and one
//! of four operation forms.
//!
//! ```text
//! AT+CFG          execute
//! AT+CFG?         get
//! AT+CFG=?        test
//! AT+CFG=1,2,3    set
//! ```
//!
//! A [`CommandParser`] is built once from a marker and a table of
//! [`Command`] descriptors, then classifies inbound lines and dispatches to
//! the bound handler. Parsing borrows the caller's buffer exclusively for
//! the duration of the call and rewrites it in place: separating commas and
//! the byte one past the trimmed end become `NUL`. Argument slices handed to
//! a handler borrow from that buffer and do not outlive the call.
//!
//! The parse path performs no heap allocation.

#[macro_use]
extern crate log;

mod arguments;
mod command;

pub mod parse;

pub use arguments::Arguments;
pub use command::{Command, ExecuteHandler, GetHandler, SetHandler, TestHandler};
pub use parse::{CommandParser, ParseError, ParseResult};

/// Maximum marker length the parser can store. Registration with a longer
/// marker is a precondition violation.
pub const MARKER_MAX_LEN: usize = 8;

/// Capacity of the argument list. A command line whose argument count
/// reaches this limit is rejected rather than truncated.
pub const ARGUMENTS_MAX: usize = 16;

#[cfg(feature = "metrics")]
use metriken::{metric, Counter};

#[cfg(feature = "metrics")]
#[metric(name = "parse")]
pub static PARSE: Counter = Counter::new();

#[cfg(feature = "metrics")]
#[metric(name = "parse_ex")]
pub static PARSE_EX: Counter = Counter::new();

#[cfg(feature = "metrics")]
#[metric(name = "execute")]
pub static EXECUTE: Counter = Counter::new();

#[cfg(feature = "metrics")]
#[metric(name = "get")]
pub static GET: Counter = Counter::new();

#[cfg(feature = "metrics")]
#[metric(name = "set")]
pub static SET: Counter = Counter::new();

#[cfg(feature = "metrics")]
#[metric(name = "test")]
pub static TEST: Counter = Counter::new();

#[cfg(feature = "metrics")]
#[metric(name = "marker_only")]
pub static MARKER_ONLY: Counter = Counter::new();
