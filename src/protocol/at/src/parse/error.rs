// Copyright 2023 Pelikan Foundation LLC.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use thiserror::Error;

/// The single error value produced by the parser.
///
/// It covers every way a line can fail to dispatch: no marker, unknown
/// keyword, an operator the matched command does not support, an unbound
/// handler slot, and argument overflow. Richer failure detail belongs to the
/// handlers' own result domain, not this layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unrecognized or malformed command")]
pub struct ParseError;

/// Result of a parse call: a handler's return value passed through
/// verbatim, or the single [`ParseError`] value.
pub type ParseResult<R> = Result<R, ParseError>;
