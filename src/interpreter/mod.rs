/*
 * ==========================================================================
 * BREWIN - A Tree-Walking Interpreter for the Brewin Language
 * ==========================================================================
 *
 * Interpreter Entry & Runtime Bootstrap
 * -------------------------------------
 * This module is the primary runtime entrypoint for Brewin. It is
 * responsible for:
 *
 *  - Building the top-level function table from a parsed program
 *  - Publishing function names into the root scope as first-class values
 *  - Locating and executing `main/0`
 *
 * All actual evaluation logic is delegated to the following submodules:
 *
 *  - environment.rs  -> scoped name-to-slot stack
 *  - functions.rs    -> (name, arity) function table
 *  - statements.rs   -> statement execution and control-flow signals
 *  - expressions.rs  -> expression evaluation
 *  - operators.rs    -> per-type operator dispatch and coercion
 *  - calls.rs        -> function resolution and argument binding
 *  - builtins.rs     -> print / inputi / inputs
 *  - display.rs      -> printable forms of values
 *
 * --------------------------------------------------------------------------
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

pub mod builtins;
pub mod calls;
pub mod display;
pub mod environment;
pub mod expressions;
pub mod functions;
pub mod operators;
pub mod statements;

use log::debug;

use crate::error::BrewinError;
use crate::io::{ConsoleIo, Io};
use crate::parser::parse_program;

use environment::Environment;
use functions::FunctionTable;

pub use statements::ExecSignal;

/// The Brewin interpreter.
///
/// One instance runs one program at a time; `run` resets all runtime state
/// before executing. The I/O sink is injected so embedders and tests can
/// script input and observe output.
pub struct Interpreter<I: Io = ConsoleIo> {
    env: Environment,
    functions: FunctionTable,
    io: I,
}

impl Interpreter<ConsoleIo> {
    /// An interpreter bound to stdout/stdin.
    pub fn new() -> Self {
        Self::with_io(ConsoleIo)
    }
}

impl Default for Interpreter<ConsoleIo> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Io> Interpreter<I> {
    pub fn with_io(io: I) -> Self {
        Self {
            env: Environment::new(),
            functions: FunctionTable::default(),
            io,
        }
    }

    /// Parses and runs a complete Brewin program.
    ///
    /// Execution starts at `main/0`. The first error of any kind aborts
    /// the program; there is no recovery.
    pub fn run(&mut self, program: &str) -> Result<(), BrewinError> {
        let ast = parse_program(program)?;

        self.env = Environment::new();
        self.functions = FunctionTable::build(&ast);
        self.functions.publish(&mut self.env);
        debug!("loaded {} function declaration(s)", ast.functions.len());

        let main = self
            .functions
            .lookup("main", 0)
            .cloned()
            .ok_or_else(|| BrewinError::name_error("Function main not found"))?;

        self.run_statements(&main.body)?;
        Ok(())
    }

    /// The I/O sink, exposed so embedders and tests can inspect it.
    pub fn io(&self) -> &I {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut I {
        &mut self.io
    }
}

#[cfg(test)]
mod tests {
    use super::Interpreter;
    use crate::error::ErrorKind;
    use crate::io::ScriptedIo;

    #[test]
    fn missing_main_is_a_name_error() {
        let mut interpreter = Interpreter::with_io(ScriptedIo::new());
        let error = interpreter.run("func helper() { return; }").unwrap_err();
        assert_eq!(error.kind, ErrorKind::NameError);
    }

    #[test]
    fn scope_stack_is_balanced_after_a_run() {
        let mut interpreter = Interpreter::with_io(ScriptedIo::new());
        interpreter
            .run("func main() { x = 1; if (x) { y = 2; } }")
            .unwrap();
        assert_eq!(interpreter.env.depth(), 1);
    }

    #[test]
    fn scope_stack_is_balanced_after_an_error() {
        let mut interpreter = Interpreter::with_io(ScriptedIo::new());
        let error = interpreter
            .run("func main() { while (1) { if (true) { x = missing; } } }")
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::NameError);
        assert_eq!(interpreter.env.depth(), 1);
    }

    #[test]
    fn scope_stack_is_balanced_after_an_error_inside_a_call() {
        let mut interpreter = Interpreter::with_io(ScriptedIo::new());
        let error = interpreter
            .run("func f(a) { return a + \"s\"; } func main() { f(1); }")
            .unwrap_err();
        assert_eq!(error.kind, ErrorKind::TypeError);
        assert_eq!(interpreter.env.depth(), 1);
    }
}
