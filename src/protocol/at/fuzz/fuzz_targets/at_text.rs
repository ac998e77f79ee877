//! Fuzz test target for the AT command line parser.

#![no_main]
use libfuzzer_sys::fuzz_target;

use protocol_at::*;

static COMMANDS: [Command<usize>; 3] = [
    Command::new(b"C").get(query),
    Command::new(b"CFG")
        .execute(execute)
        .get(query)
        .set(assign)
        .test(execute),
    Command::new(b"CFGX").set(assign),
];

fuzz_target!(|data: &[u8]| {
    let parser = CommandParser::new(b"AT+", &COMMANDS).marker_only(execute);

    // the parser rewrites its input, so it gets a mutable copy
    let mut buf = data.to_vec();
    let _ = parser.parse(&mut buf);
});

fn execute() -> ParseResult<usize> {
    Ok(0)
}

fn query(arguments: &Arguments) -> ParseResult<usize> {
    validate_arguments(arguments);
    Ok(arguments.len())
}

fn assign(arguments: &Arguments) -> ParseResult<usize> {
    validate_arguments(arguments);
    Ok(arguments.len())
}

fn validate_arguments(arguments: &Arguments) {
    if arguments.len() >= ARGUMENTS_MAX {
        panic!("argument list reached the maximum");
    }
    for argument in arguments.iter() {
        if argument.contains(&b',') {
            panic!("argument contains a separating comma: {:?}", argument);
        }
    }
}
