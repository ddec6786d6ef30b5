/*
 * ==========================================================================
 * BREWIN - A Tree-Walking Interpreter for the Brewin Language
 * ==========================================================================
 *
 * License:
 * This file is part of the Brewin interpreter project.
 *
 * Brewin is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// The interpreter's window to the outside world.
///
/// `print`, `inputi`, and `inputs` go through this trait, which keeps the
/// evaluation core free of any direct console dependency and lets tests
/// observe a program's exact output.
pub trait Io {
    /// Emit one line of program output.
    fn output(&mut self, line: &str);

    /// Read one line of input, without its trailing newline. Returns an
    /// empty string at end of input.
    fn get_input(&mut self) -> String;
}

/// Standard binding to stdout/stdin, used by the `brewin` binary.
#[derive(Debug, Default)]
pub struct ConsoleIo;

impl Io for ConsoleIo {
    fn output(&mut self, line: &str) {
        println!("{}", line);
    }

    fn get_input(&mut self) -> String {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        line
    }
}

/// In-memory I/O with queued input lines and captured output lines.
///
/// This is the harness the test suite runs programs through.
#[derive(Debug, Default)]
pub struct ScriptedIo {
    inputs: VecDeque<String>,
    pub outputs: Vec<String>,
}

impl ScriptedIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(lines: &[&str]) -> Self {
        Self {
            inputs: lines.iter().map(|line| line.to_string()).collect(),
            outputs: Vec::new(),
        }
    }
}

impl Io for ScriptedIo {
    fn output(&mut self, line: &str) {
        self.outputs.push(line.to_string());
    }

    fn get_input(&mut self) -> String {
        self.inputs.pop_front().unwrap_or_default()
    }
}
