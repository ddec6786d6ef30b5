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
use crate::lexer::token::{Token, TokenKind};

use super::parser::Parser;

impl Parser {
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(crate) fn check_symbol(&self, symbol: &str) -> bool {
        let token = self.peek();
        token.kind == TokenKind::Symbol && token.lexeme == symbol
    }

    /// Consumes the symbol when it is next, reporting whether it was.
    pub(crate) fn match_symbol(&mut self, symbol: &str) -> bool {
        if self.check_symbol(symbol) {
            self.advance();
            return true;
        }
        false
    }

    pub(crate) fn expect_symbol(&mut self, symbol: &str) -> Result<(), BrewinError> {
        if self.match_symbol(symbol) {
            return Ok(());
        }
        Err(self.error_at_current(format!("expected '{}'", symbol)))
    }

    pub(crate) fn check_keyword(&self, keyword: &str) -> bool {
        let token = self.peek();
        token.kind == TokenKind::Keyword && token.lexeme == keyword
    }

    pub(crate) fn match_keyword(&mut self, keyword: &str) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            return true;
        }
        false
    }

    pub(crate) fn expect_keyword(&mut self, keyword: &str) -> Result<(), BrewinError> {
        if self.match_keyword(keyword) {
            return Ok(());
        }
        Err(self.error_at_current(format!("expected '{}'", keyword)))
    }

    /// Consumes and returns an identifier; `what` names the production for
    /// the error message.
    pub(crate) fn expect_identifier(&mut self, what: &str) -> Result<String, BrewinError> {
        if self.peek().kind == TokenKind::Identifier {
            return Ok(self.advance().lexeme.clone());
        }
        Err(self.error_at_current(format!("expected {}", what)))
    }

    /// Builds a parse error anchored at the current token.
    pub(crate) fn error_at_current(&self, message: impl Into<String>) -> BrewinError {
        let token = self.peek();
        let message = message.into();
        if token.kind == TokenKind::Eof {
            BrewinError::parse_error(format!("{}, found end of input", message), token.span)
        } else {
            BrewinError::parse_error(format!("{}, found '{}'", message, token), token.span)
        }
    }
}
