/*
 * ==========================================================================
 * BREWIN - A Tree-Walking Interpreter for the Brewin Language
 * ==========================================================================
 *
 * Statement Executor
 * ------------------
 * Executes all Brewin statements and threads the control-flow signal a
 * `return` produces back up through nested blocks to the enclosing call.
 *
 * Expression evaluation lives in `expressions.rs`; call dispatch lives in
 * `calls.rs`.
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

use log::trace;

use crate::ast::{Expr, Stmt};
use crate::error::BrewinError;
use crate::io::Io;
use crate::value::Value;

use super::Interpreter;

/// Control-flow signal produced by statement execution.
#[derive(Debug)]
pub enum ExecSignal {
    /// Fall through to the next statement.
    Continue,

    /// Unwind to the enclosing call with the given value.
    Return(Value),
}

impl<I: Io> Interpreter<I> {
    /// Runs a statement list inside a fresh scope. The scope is popped on
    /// every exit path, including errors.
    pub(crate) fn run_statements(&mut self, statements: &[Stmt]) -> Result<ExecSignal, BrewinError> {
        self.env.push();
        let signal = self.exec_block(statements);
        self.env.pop();
        signal
    }

    /// Runs statements in the current scope, stopping at the first
    /// `Return`.
    fn exec_block(&mut self, statements: &[Stmt]) -> Result<ExecSignal, BrewinError> {
        for statement in statements {
            match self.exec_stmt(statement)? {
                ExecSignal::Continue => {}
                signal => return Ok(signal),
            }
        }
        Ok(ExecSignal::Continue)
    }

    fn exec_stmt(&mut self, statement: &Stmt) -> Result<ExecSignal, BrewinError> {
        trace!("exec {:?}", statement);

        match statement {
            Stmt::Assign { name, expression } => {
                self.do_assign(name, expression)?;
                Ok(ExecSignal::Continue)
            }

            Stmt::Call(call) => {
                // result discarded in statement position
                self.call_function(call)?;
                Ok(ExecSignal::Continue)
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => self.do_if(condition, then_branch, else_branch.as_deref()),

            Stmt::While { condition, body } => self.do_while(condition, body),

            Stmt::Return(expression) => self.do_return(expression.as_ref()),
        }
    }

    /// Assignment writes through the slot the name already occupies,
    /// which is what makes `ref` parameters observable at the caller.
    fn do_assign(&mut self, name: &str, expression: &Expr) -> Result<(), BrewinError> {
        let value = self.eval_expr(expression)?;
        self.env.set(name, value);
        Ok(())
    }

    fn do_if(
        &mut self,
        condition: &Expr,
        then_branch: &[Stmt],
        else_branch: Option<&[Stmt]>,
    ) -> Result<ExecSignal, BrewinError> {
        if self.eval_condition(condition, "if")? {
            self.run_statements(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.run_statements(else_branch)
        } else {
            Ok(ExecSignal::Continue)
        }
    }

    /// One scope wraps the whole loop, so a name created in one iteration
    /// is still visible in the next.
    fn do_while(&mut self, condition: &Expr, body: &[Stmt]) -> Result<ExecSignal, BrewinError> {
        self.env.push();
        let signal = self.while_loop(condition, body);
        self.env.pop();
        signal
    }

    fn while_loop(&mut self, condition: &Expr, body: &[Stmt]) -> Result<ExecSignal, BrewinError> {
        while self.eval_condition(condition, "while")? {
            match self.exec_block(body)? {
                ExecSignal::Continue => {}
                signal => return Ok(signal),
            }
        }
        Ok(ExecSignal::Continue)
    }

    /// A returned value is an independent copy: evaluation clones values
    /// out of their slots, so returning a local can never alias the frame
    /// that produced it.
    fn do_return(&mut self, expression: Option<&Expr>) -> Result<ExecSignal, BrewinError> {
        let value = match expression {
            Some(expression) => self.eval_expr(expression)?,
            None => Value::Nil,
        };
        Ok(ExecSignal::Return(value))
    }

    /// Conditions accept bools and ints; an int coerces with 0 as false.
    fn eval_condition(&mut self, condition: &Expr, construct: &str) -> Result<bool, BrewinError> {
        match self.eval_expr(condition)? {
            Value::Bool(value) => Ok(value),
            Value::Int(value) => Ok(value != 0),
            _ => Err(BrewinError::type_error(format!(
                "Incompatible type for {} condition",
                construct
            ))),
        }
    }
}
