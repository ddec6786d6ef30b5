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

/// A position in the source text, tracked by the lexer and carried on
/// parse errors for diagnostic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// 1-based line number.
    pub line: usize,

    /// 0-based column within that line.
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}
