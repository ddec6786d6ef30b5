/*
 * ==========================================================================
 * BREWIN - A Tree-Walking Interpreter for the Brewin Language
 * ==========================================================================
 *
 * Expression Evaluation Engine
 * ----------------------------
 * Converts AST `Expr` nodes into runtime `Value`s: literals, variable
 * lookups, lambda construction, calls, and unary/binary operators.
 *
 * Operator dispatch and coercion live in `operators.rs`; call semantics
 * live in `calls.rs`. This module never executes statements.
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

use std::rc::Rc;

use crate::ast::Expr;
use crate::error::BrewinError;
use crate::io::Io;
use crate::value::{Closure, FunctionRef, Value};

use super::operators;
use super::Interpreter;

impl<I: Io> Interpreter<I> {
    /// Evaluates a single expression to a value.
    ///
    /// Every expression in the language eventually passes through this
    /// dispatcher. Subexpressions evaluate strictly left to right.
    pub(crate) fn eval_expr(&mut self, expression: &Expr) -> Result<Value, BrewinError> {
        match expression {
            Expr::Int(value) => Ok(Value::Int(*value)),
            Expr::Str(value) => Ok(Value::String(value.clone())),
            Expr::Bool(value) => Ok(Value::Bool(*value)),
            Expr::Nil => Ok(Value::Nil),

            Expr::Var(name) => self.eval_var(name),

            // A lambda closes over a by-value snapshot of everything
            // visible at this point.
            Expr::Lambda(decl) => Ok(Value::Function(FunctionRef::Closure(Rc::new(Closure {
                decl: decl.clone(),
                captured: self.env.snapshot(),
            })))),

            Expr::Call(call) => self.call_function(call),

            Expr::Binary { op, lhs, rhs } => {
                // both sides always evaluate, left first; `&&`/`||` do not
                // short-circuit
                let lhs = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                operators::apply_binary(*op, lhs, rhs)
            }

            Expr::Unary { op, operand } => {
                let operand = self.eval_expr(operand)?;
                operators::apply_unary(*op, operand)
            }
        }
    }

    /// Variable lookup. A name bound to an unambiguous overload set
    /// resolves to that function; an ambiguous set cannot be used as a
    /// value.
    fn eval_var(&mut self, name: &str) -> Result<Value, BrewinError> {
        let slot = self
            .env
            .get(name)
            .ok_or_else(|| BrewinError::name_error(format!("Variable {} not found", name)))?;

        let value = slot.borrow().clone();
        match value {
            Value::Overloads(set) => match set.single() {
                Some(decl) => Ok(Value::Function(FunctionRef::Named(decl.clone()))),
                None => Err(BrewinError::name_error(format!(
                    "Cannot assign overloaded function {} to a variable",
                    name
                ))),
            },
            value => Ok(value),
        }
    }
}
