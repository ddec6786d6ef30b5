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

use serde::Serialize;

use crate::ast::Stmt;

/// A fully parsed Brewin program: its top-level function declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    pub functions: Vec<Rc<FunctionDecl>>,
}

/// A `func` declaration or a lambda body. Lambdas carry no name.
///
/// Declarations are shared behind `Rc`: the function table, first-class
/// function values, and closures all point at the same node, and function
/// equality is identity of that node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDecl {
    pub name: Option<String>,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

impl FunctionDecl {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Printable name: the declared name, or `Lambda` for anonymous
    /// functions.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Lambda")
    }
}

/// A formal parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub name: String,

    /// `ref` parameters alias the caller's variable cell.
    pub by_ref: bool,
}
