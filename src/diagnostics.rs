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

use crate::error::BrewinError;
use crate::span::Span;

/// Renders human-friendly, compiler-style diagnostics for Brewin errors.
///
/// Spanned (front-end) errors print the offending source line with a
/// caret under the exact position; runtime errors, which carry no span,
/// print a single header line.
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified and designed to remain readable without color:
///
/// ```text
/// error[PARSE_ERROR]: expected ';', found '}'
///   --> example.brw:3:17
///    |
///   3 |     x = inputi()
///    |                 ^
/// ```
pub struct DiagnosticPrinter {
    /// Full source of the program being run, kept as one string so the
    /// offending line can be extracted for display.
    source: String,

    /// Name of the source file, used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted diagnostic to stderr.
    pub fn print(&self, error: &BrewinError) {
        let Some(Span { line, column }) = error.span else {
            eprintln!("error[{}]: {}", error.kind, error.message);
            if let Some(help) = &error.help {
                eprintln!("help: {}", help);
            }
            return;
        };

        // Lines are 1-indexed in diagnostics; `saturating_sub` guards a
        // zero line.
        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).copied().unwrap_or("");

        eprintln!(
            "error[{}]: {}\n  --> {}:{}:{}",
            error.kind,
            error.message,
            self.file_name,
            line,
            column + 1
        );

        eprintln!("   |");
        eprintln!("{:>3} | {}", line, src_line);

        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');
        eprintln!("   | {}", underline);

        if let Some(help) = &error.help {
            eprintln!("\nhelp: {}", help);
        }
    }
}
