// Copyright 2023 Pelikan Foundation LLC.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::*;

use arrayvec::ArrayVec;
use bstr::BStr;

use core::fmt;

/// bytes stripped from the end of the line before classification
const TRAILING: [u8; 5] = [b'\0', b'\n', b'\r', b' ', b'\t'];

enum Op<R> {
    Execute(ExecuteHandler<R>),
    Get(GetHandler<R>),
    Set(SetHandler<R>),
    Test(TestHandler<R>),
}

impl<R> Op<R> {
    fn name(&self) -> &'static str {
        match self {
            Self::Execute(_) => "execute",
            Self::Get(_) => "get",
            Self::Set(_) => "set",
            Self::Test(_) => "test",
        }
    }
}

/// Parser for AT-style command lines.
///
/// Built once from a marker and a command table, immutable afterwards. A
/// single parser may be shared across threads as long as each call operates
/// on its own buffer.
pub struct CommandParser<'a, R> {
    marker: ArrayVec<u8, MARKER_MAX_LEN>,
    commands: &'a [Command<R>],
    marker_only: Option<ExecuteHandler<R>>,
}

impl<'a, R> CommandParser<'a, R> {
    /// Creates a parser recognizing `marker` and the given command table.
    ///
    /// The marker is copied into owned storage; the table is borrowed and
    /// must outlive the parser.
    ///
    /// # Panics
    ///
    /// An empty marker, a marker longer than [`MARKER_MAX_LEN`], or an empty
    /// table is a precondition violation and panics.
    pub fn new(marker: &[u8], commands: &'a [Command<R>]) -> Self {
        assert!(!marker.is_empty(), "marker must not be empty");
        assert!(
            marker.len() <= MARKER_MAX_LEN,
            "marker longer than MARKER_MAX_LEN"
        );
        assert!(!commands.is_empty(), "command table must not be empty");

        let mut owned = ArrayVec::new();
        owned.extend(marker.iter().copied());

        debug!(
            "command parser registered: marker {:?}, {} commands",
            BStr::new(marker),
            commands.len()
        );

        Self {
            marker: owned,
            commands,
            marker_only: None,
        }
    }

    /// Binds a handler for lines consisting of the bare marker.
    pub fn marker_only(mut self, handler: ExecuteHandler<R>) -> Self {
        self.marker_only = Some(handler);
        self
    }

    pub fn marker(&self) -> &[u8] {
        &self.marker
    }

    /// Classifies one command line and dispatches it to the bound handler,
    /// returning the handler's result verbatim. Every classification or
    /// binding failure collapses to the single [`ParseError`] value.
    ///
    /// The buffer is borrowed exclusively for the call and rewritten in
    /// place: each argument-separating comma and the byte one past the
    /// trimmed end (when the buffer extends that far) become `NUL`.
    pub fn parse(&self, input: &mut [u8]) -> ParseResult<R> {
        #[cfg(feature = "metrics")]
        PARSE.increment();

        let result = self.parse_inner(input);

        #[cfg(feature = "metrics")]
        if result.is_err() {
            PARSE_EX.increment();
        }

        result
    }

    fn parse_inner(&self, input: &mut [u8]) -> ParseResult<R> {
        let marker = self.marker.as_slice();
        let marker_len = marker.len();

        // forward scan for the marker. The final window, where the remaining
        // length equals the marker length, is compared like any other:
        // marker presence is never assumed without verification.
        let mut start = 0;
        let mut len = input.len();
        loop {
            if len < marker_len {
                return Err(ParseError);
            }
            if &input[start..start + marker_len] == marker {
                break;
            }
            start += 1;
            len -= 1;
        }

        // strip trailing separators, leaving at least the byte at `start`
        let mut end = start + len - 1;
        while start < end && TRAILING.contains(&input[end]) {
            end -= 1;
            len -= 1;
        }

        // nothing after the marker
        if len == marker_len {
            return match self.marker_only {
                Some(handler) => {
                    #[cfg(feature = "metrics")]
                    MARKER_ONLY.increment();
                    handler()
                }
                None => Err(ParseError),
            };
        }

        // scan the whole table rather than stopping at the first hit: when
        // several keywords match, the last entry in table order wins
        let keyword_start = start + marker_len;
        let mut matched = None;
        for command in self.commands {
            if command.keyword.len() > len {
                continue;
            }
            if input[keyword_start..].starts_with(command.keyword) {
                matched = Some(command);
            }
        }
        let command = match matched {
            Some(command) => command,
            None => {
                trace!(
                    "no keyword match: {:?}",
                    BStr::new(&input[keyword_start..end + 1])
                );
                return Err(ParseError);
            }
        };

        // classify the operator from the byte after the keyword. A form
        // whose pattern matches but whose handler slot is unbound rejects
        // the line, it does not fall through to a later form.
        let mut arg_start = keyword_start + command.keyword.len();
        let op = if arg_start == end + 1 {
            command.execute.map(Op::Execute)
        } else if input.get(arg_start) == Some(&b'?') {
            match command.get {
                Some(handler) => {
                    arg_start += 1;
                    Some(Op::Get(handler))
                }
                None => None,
            }
        } else if arg_start + 1 <= end && input[arg_start] == b'=' && input[arg_start + 1] == b'?' {
            command.test.map(Op::Test)
        } else if arg_start < end && input[arg_start] == b'=' {
            match command.set {
                Some(handler) => {
                    arg_start += 1;
                    Some(Op::Set(handler))
                }
                None => None,
            }
        } else {
            None
        };
        let op = op.ok_or(ParseError)?;

        let arguments = if matches!(&op, Op::Get(_) | Op::Set(_)) && arg_start <= end {
            Arguments::tokenize(input, arg_start, end)?
        } else {
            Arguments::empty()
        };

        trace!(
            "dispatch {} {:?}: {:?}",
            op.name(),
            BStr::new(command.keyword),
            arguments
        );

        match op {
            Op::Execute(handler) => {
                #[cfg(feature = "metrics")]
                EXECUTE.increment();
                handler()
            }
            Op::Get(handler) => {
                #[cfg(feature = "metrics")]
                GET.increment();
                handler(&arguments)
            }
            Op::Set(handler) => {
                #[cfg(feature = "metrics")]
                SET.increment();
                handler(&arguments)
            }
            Op::Test(handler) => {
                #[cfg(feature = "metrics")]
                TEST.increment();
                handler()
            }
        }
    }
}

impl<'a, R> fmt::Debug for CommandParser<'a, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandParser")
            .field("marker", &BStr::new(self.marker.as_slice()))
            .field("commands", &self.commands.len())
            .field("marker_only", &self.marker_only.is_some())
            .finish()
    }
}
