// Copyright 2023 Pelikan Foundation LLC.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::arguments::Arguments;
use crate::parse::ParseResult;

use bstr::BStr;

use core::fmt;

/// Handler for the execute form: `<marker><keyword>`.
pub type ExecuteHandler<R> = fn() -> ParseResult<R>;

/// Handler for the get form: `<marker><keyword>?`.
pub type GetHandler<R> = fn(&Arguments) -> ParseResult<R>;

/// Handler for the set form: `<marker><keyword>=<arg>[,<arg>...]`.
pub type SetHandler<R> = fn(&Arguments) -> ParseResult<R>;

/// Handler for the test form: `<marker><keyword>=?`.
pub type TestHandler<R> = fn() -> ParseResult<R>;

/// A command descriptor: a keyword plus up to four handlers, one per
/// operation form. Any slot may be left unbound; a line classified to an
/// unbound form is rejected.
///
/// The constructors are `const`, so tables can live in a `static`:
///
/// ```
/// use protocol_at::{Command, ParseResult};
///
/// fn reset() -> ParseResult<()> {
///     Ok(())
/// }
///
/// static COMMANDS: [Command<()>; 1] = [Command::new(b"RST").execute(reset)];
/// ```
pub struct Command<R> {
    pub(crate) keyword: &'static [u8],
    pub(crate) execute: Option<ExecuteHandler<R>>,
    pub(crate) get: Option<GetHandler<R>>,
    pub(crate) set: Option<SetHandler<R>>,
    pub(crate) test: Option<TestHandler<R>>,
}

impl<R> Command<R> {
    /// Creates a descriptor for `keyword` with all handler slots unbound.
    pub const fn new(keyword: &'static [u8]) -> Self {
        Self {
            keyword,
            execute: None,
            get: None,
            set: None,
            test: None,
        }
    }

    /// Binds the execute handler.
    pub const fn execute(mut self, handler: ExecuteHandler<R>) -> Self {
        self.execute = Some(handler);
        self
    }

    /// Binds the get handler.
    pub const fn get(mut self, handler: GetHandler<R>) -> Self {
        self.get = Some(handler);
        self
    }

    /// Binds the set handler.
    pub const fn set(mut self, handler: SetHandler<R>) -> Self {
        self.set = Some(handler);
        self
    }

    /// Binds the test handler.
    pub const fn test(mut self, handler: TestHandler<R>) -> Self {
        self.test = Some(handler);
        self
    }

    pub fn keyword(&self) -> &'static [u8] {
        self.keyword
    }
}

impl<R> fmt::Debug for Command<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("keyword", &BStr::new(self.keyword))
            .field("execute", &self.execute.is_some())
            .field("get", &self.get.is_some())
            .field("set", &self.set.is_some())
            .field("test", &self.test.is_some())
            .finish()
    }
}
