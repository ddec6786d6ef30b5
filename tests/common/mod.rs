#![allow(dead_code)]

use brewin::{BrewinError, Interpreter, ScriptedIo};

/// Runs a program with no input and returns the lines it printed.
pub fn run_brewin(source: &str) -> Vec<String> {
    run_brewin_with_input(source, &[])
}

/// Runs a program against scripted input lines and returns its output.
pub fn run_brewin_with_input(source: &str, inputs: &[&str]) -> Vec<String> {
    let mut interpreter = Interpreter::with_io(ScriptedIo::with_input(inputs));
    if let Err(error) = interpreter.run(source) {
        panic!("program failed: {}", error);
    }
    interpreter.io().outputs.clone()
}

/// Runs a program that is expected to fail and returns its error.
pub fn run_error(source: &str) -> BrewinError {
    let mut interpreter = Interpreter::with_io(ScriptedIo::new());
    match interpreter.run(source) {
        Ok(()) => panic!("expected the program to fail"),
        Err(error) => error,
    }
}
