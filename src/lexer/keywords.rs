/*
 * ==========================================================================
 * BREWIN - A Tree-Walking Interpreter for the Brewin Language
 * ==========================================================================
 *
 * File:      lexer/keywords.rs
 * Purpose:   Defines all reserved keywords of the Brewin language.
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

/// Determines whether an identifier is a reserved Brewin keyword.
///
/// Reserved words lex as `TokenKind::Keyword`; everything else is a plain
/// identifier.
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "func" | "ref" | "lambda" | "if" | "else" | "while" | "return" | "true" | "false" | "nil"
    )
}
