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

use std::error::Error;
use std::fmt;

use crate::span::Span;

/// The error categories a Brewin program can fail with.
///
/// All errors are fatal to the running program; the interpreter performs
/// no recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unresolved variable or function, arity mismatch with no matching
    /// overload, or an ambiguous overloaded-function value.
    NameError,

    /// Operator applied to incompatible operand types, a non-function
    /// value called, or a non-bool/non-int condition.
    TypeError,

    /// Malformed source text, reported by the lexer or parser.
    ParseError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NameError => "NAME_ERROR",
            ErrorKind::TypeError => "TYPE_ERROR",
            ErrorKind::ParseError => "PARSE_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct BrewinError {
    /// Error category, surfaced verbatim to the user.
    pub kind: ErrorKind,

    /// Human-readable error message.
    pub message: String,

    /// Source location, when the front end produced the error. Runtime
    /// errors carry no span.
    pub span: Option<Span>,

    /// Optional note / help text.
    pub help: Option<String>,
}

impl BrewinError {
    /// Generic constructor
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
            help: None,
        }
    }

    /// Unresolved name, bad overload, arity miss
    pub fn name_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NameError, message)
    }

    /// Invalid operation / operand types
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeError, message)
    }

    /// Lexer / parser failure at a known source position
    pub fn parse_error(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ErrorKind::ParseError,
            message: message.into(),
            span: Some(span),
            help: None,
        }
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for BrewinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error for BrewinError {}
