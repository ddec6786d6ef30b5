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

use std::rc::Rc;

use crate::ast::Program;
use crate::error::BrewinError;
use crate::lexer::token::Token;

/// The core Brewin recursive-descent parser.
///
/// This structure maintains the full token stream produced by the lexer
/// and the current cursor position into that stream. The actual grammar
/// logic is implemented through extension modules (`statements`,
/// `expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser {
    pub tokens: Vec<Token>,
    pub current: usize,
}

/// Parses a full token stream into a Brewin program.
pub fn parse(tokens: Vec<Token>) -> Result<Program, BrewinError> {
    let mut parser = Parser { tokens, current: 0 };
    parser.parse()
}

/// Lexes and parses source text in one step.
///
/// ```text
/// Source -> Lexer -> Tokens -> Parser -> AST
/// ```
pub fn parse_program(source: &str) -> Result<Program, BrewinError> {
    parse(crate::lexer::tokenize(source)?)
}

impl Parser {
    /// Parses the entire token stream: a Brewin program is a sequence of
    /// top-level function declarations.
    pub fn parse(&mut self) -> Result<Program, BrewinError> {
        let mut functions = Vec::new();

        while !self.is_at_end() {
            functions.push(Rc::new(self.function_decl()?));
        }

        Ok(Program { functions })
    }
}
