/*
 * ==========================================================================
 * BREWIN - A Tree-Walking Interpreter for the Brewin Language
 * ==========================================================================
 *
 * Lexical Analysis
 * ----------------
 * Converts raw Brewin source text into a stream of classified tokens:
 *
 *   Source -> Lexer -> Tokens -> Parser -> AST -> Interpreter
 *
 * The lexer skips whitespace, line comments, and block comments, folds
 * multi-character operators (`==`, `!=`, `<=`, `>=`, `&&`, `||`), and
 * unescapes string literals. Every token carries the span it started at
 * for diagnostics.
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

pub mod keywords;
pub mod token;

use crate::error::BrewinError;
use crate::span::Span;

use keywords::is_keyword;
use token::{Token, TokenKind};

/// Performs complete lexical analysis over a source string.
pub fn tokenize(source: &str) -> Result<Vec<Token>, BrewinError> {
    Lexer::new(source).scan_tokens()
}

struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    /// Index of the first character of the current line, for columns.
    line_start: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
        }
    }

    fn scan_tokens(mut self) -> Result<Vec<Token>, BrewinError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        let span = self.span_here();
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            span,
        });
        Ok(self.tokens)
    }

    /// Scans and emits at most one token from the source stream.
    fn scan_token(&mut self) -> Result<(), BrewinError> {
        let start = self.span_here();
        let ch = self.advance();

        match ch {
            // Whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => self.newline(),

            // Comments share a leading '/' with division
            '/' => {
                if self.match_char('/') {
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                } else if self.match_char('*') {
                    self.block_comment(start)?;
                } else {
                    self.push(TokenKind::Symbol, "/", start);
                }
            }

            // Single-character symbols
            '(' | ')' | '{' | '}' | ',' | ';' | '+' | '-' | '*' => {
                self.push(TokenKind::Symbol, &ch.to_string(), start);
            }

            // One- or two-character operators
            '=' => {
                let lexeme = if self.match_char('=') { "==" } else { "=" };
                self.push(TokenKind::Symbol, lexeme, start);
            }
            '!' => {
                let lexeme = if self.match_char('=') { "!=" } else { "!" };
                self.push(TokenKind::Symbol, lexeme, start);
            }
            '<' => {
                let lexeme = if self.match_char('=') { "<=" } else { "<" };
                self.push(TokenKind::Symbol, lexeme, start);
            }
            '>' => {
                let lexeme = if self.match_char('=') { ">=" } else { ">" };
                self.push(TokenKind::Symbol, lexeme, start);
            }

            // '&' and '|' only exist doubled
            '&' => {
                if self.match_char('&') {
                    self.push(TokenKind::Symbol, "&&", start);
                } else {
                    return Err(BrewinError::parse_error("unexpected character '&'", start)
                        .with_help("Did you mean '&&'?"));
                }
            }
            '|' => {
                if self.match_char('|') {
                    self.push(TokenKind::Symbol, "||", start);
                } else {
                    return Err(BrewinError::parse_error("unexpected character '|'", start)
                        .with_help("Did you mean '||'?"));
                }
            }

            '"' => self.string(start)?,

            digit if digit.is_ascii_digit() => self.number(digit, start),

            letter if letter.is_alphabetic() || letter == '_' => self.identifier(letter, start),

            other => {
                return Err(BrewinError::parse_error(
                    format!("unexpected character '{}'", other),
                    start,
                ));
            }
        }

        Ok(())
    }

    /// Consumes a `/* ... */` comment; nesting is not supported.
    fn block_comment(&mut self, start: Span) -> Result<(), BrewinError> {
        while !self.is_at_end() {
            let ch = self.advance();
            if ch == '\n' {
                self.newline();
            } else if ch == '*' && self.match_char('/') {
                return Ok(());
            }
        }
        Err(BrewinError::parse_error("unterminated block comment", start))
    }

    /// Consumes a string literal, unescaping as it goes. The opening quote
    /// has already been consumed.
    fn string(&mut self, start: Span) -> Result<(), BrewinError> {
        let mut content = String::new();

        loop {
            if self.is_at_end() || self.peek() == '\n' {
                return Err(BrewinError::parse_error("unterminated string literal", start));
            }
            let ch = self.advance();
            match ch {
                '"' => break,
                '\\' => {
                    if self.is_at_end() {
                        return Err(BrewinError::parse_error("unterminated string literal", start));
                    }
                    let escaped = self.advance();
                    match escaped {
                        'n' => content.push('\n'),
                        't' => content.push('\t'),
                        '\\' => content.push('\\'),
                        '"' => content.push('"'),
                        other => {
                            return Err(BrewinError::parse_error(
                                format!("unknown escape sequence '\\{}'", other),
                                start,
                            ));
                        }
                    }
                }
                other => content.push(other),
            }
        }

        self.push(TokenKind::Str, &content, start);
        Ok(())
    }

    fn number(&mut self, first: char, start: Span) {
        let mut digits = String::from(first);
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            digits.push(self.advance());
        }
        self.push(TokenKind::Int, &digits, start);
    }

    fn identifier(&mut self, first: char, start: Span) {
        let mut word = String::from(first);
        while !self.is_at_end() && (self.peek().is_alphanumeric() || self.peek() == '_') {
            word.push(self.advance());
        }

        let kind = if is_keyword(&word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.push(kind, &word, start);
    }

    fn push(&mut self, kind: TokenKind, lexeme: &str, span: Span) {
        self.tokens.push(Token {
            kind,
            lexeme: lexeme.to_string(),
            span,
        });
    }

    fn span_here(&self) -> Span {
        Span::new(self.line, self.current - self.line_start)
    }

    fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.current;
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    fn peek(&self) -> char {
        self.chars[self.current]
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
