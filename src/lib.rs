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

//! Brewin: a tree-walking interpreter for a small dynamically-typed
//! imperative language.
//!
//! ```text
//! Source -> Lexer -> Tokens -> Parser -> AST -> Interpreter
//! ```
//!
//! Embedding is two lines: construct an [`Interpreter`] around an I/O
//! sink, then hand it a program.
//!
//! ```no_run
//! use brewin::Interpreter;
//!
//! let mut interpreter = Interpreter::new();
//! interpreter.run("func main() { print(\"hello\"); }").unwrap();
//! ```

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod io;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod value;

pub use error::{BrewinError, ErrorKind};
pub use interpreter::Interpreter;
pub use io::{ConsoleIo, Io, ScriptedIo};
pub use value::Value;
