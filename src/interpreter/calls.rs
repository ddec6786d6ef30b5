/*
 * ==========================================================================
 * BREWIN - A Tree-Walking Interpreter for the Brewin Language
 * ==========================================================================
 *
 * Call Dispatch & Invocation Engine
 * ---------------------------------
 * This module defines the core runtime call semantics for Brewin:
 *
 *  - Resolving a call target through the function table, then through
 *    the environment (first-class functions, closures, overload sets)
 *  - Pushing and popping the callee frame
 *  - Binding arguments by value, by reference, or as freshly captured
 *    lambdas
 *  - Converting the statement executor's Return signal into the call's
 *    result value
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

use crate::ast::{CallExpr, Expr, FunctionDecl, Param};
use crate::error::BrewinError;
use crate::io::Io;
use crate::value::{new_slot, FunctionRef, Slot, Value};

use super::statements::ExecSignal;
use super::Interpreter;

impl<I: Io> Interpreter<I> {
    /// Invokes a call expression or call statement.
    ///
    /// Builtins are intercepted before resolution, so a user-declared
    /// `print` is unreachable.
    pub(crate) fn call_function(&mut self, call: &CallExpr) -> Result<Value, BrewinError> {
        match call.name.as_str() {
            "print" => return self.call_print(call),
            "inputi" | "inputs" => return self.call_input(call),
            _ => {}
        }

        let target = self.resolve_function(&call.name, call.args.len())?;

        // A closure activates on its captured scope; slots are shared with
        // the closure value, so assignments to captured names persist
        // across calls. A named function starts from an empty frame.
        match &target {
            FunctionRef::Named(_) => self.env.push(),
            FunctionRef::Closure(closure) => self.env.push_with(closure.captured.clone()),
        }

        let decl = target.decl().clone();
        let result = self.enter_function(&decl, &call.args);
        self.env.pop();
        result
    }

    /// Resolution order: an exact (name, arity) entry in the function
    /// table wins; otherwise the name is looked up as a first-class value.
    fn resolve_function(&self, name: &str, arity: usize) -> Result<FunctionRef, BrewinError> {
        if let Some(decl) = self.functions.lookup(name, arity) {
            return Ok(FunctionRef::Named(decl.clone()));
        }

        let slot = self
            .env
            .get(name)
            .ok_or_else(|| BrewinError::name_error(format!("Function {} not found", name)))?;

        let value = slot.borrow();
        match &*value {
            // A function-valued variable is callable regardless of its
            // declared arity; the mismatch surfaces while binding.
            Value::Function(target) => Ok(target.clone()),

            Value::Overloads(set) => set
                .lookup(arity)
                .map(|decl| FunctionRef::Named(decl.clone()))
                .ok_or_else(|| {
                    BrewinError::name_error(format!(
                        "Function {} taking {} params not found",
                        name, arity
                    ))
                }),

            _ => Err(BrewinError::type_error(format!(
                "The variable {} cannot be called like a function",
                name
            ))),
        }
    }

    /// Binds the arguments into the already-pushed callee frame and runs
    /// the body. Errors unwind to `call_function`, which owns the frame
    /// pop.
    fn enter_function(
        &mut self,
        decl: &FunctionDecl,
        actuals: &[Expr],
    ) -> Result<Value, BrewinError> {
        if actuals.len() != decl.params.len() {
            return Err(BrewinError::type_error(format!(
                "Function {} with {} args not found",
                decl.display_name(),
                actuals.len()
            )));
        }

        for (formal, actual) in decl.params.iter().zip(actuals) {
            let slot = self.bind_argument(formal, actual)?;
            self.env.adopt(formal.name.clone(), slot);
        }

        match self.run_statements(&decl.body)? {
            ExecSignal::Return(value) => Ok(value),
            ExecSignal::Continue => Ok(Value::Nil),
        }
    }

    /// Produces the slot a formal parameter binds to: the caller's own
    /// slot for a `ref` parameter naming a plain variable, a fresh slot
    /// holding a copy for everything else.
    fn bind_argument(&mut self, formal: &Param, actual: &Expr) -> Result<Slot, BrewinError> {
        if formal.by_ref {
            if let Expr::Var(var_name) = actual {
                // a declared function name binds by copy, so callee
                // assignments cannot reach the function table
                if !self.functions.is_declared(var_name) {
                    return self.caller_slot(var_name);
                }
            }
        }

        let value = self.eval_actual(actual)?;
        Ok(new_slot(value))
    }

    /// Locates the caller-side slot a `ref` formal aliases. The lookup
    /// skips the innermost scope, which is the half-built callee frame.
    fn caller_slot(&self, var_name: &str) -> Result<Slot, BrewinError> {
        let slot = self
            .env
            .get_in_prior(var_name)
            .ok_or_else(|| BrewinError::name_error(format!("Variable {} not found", var_name)))?;

        let unambiguous = match &*slot.borrow() {
            Value::Overloads(set) => match set.single() {
                Some(decl) => Some(decl.clone()),
                None => {
                    return Err(BrewinError::name_error(format!(
                        "Cannot pass overloaded function {} by reference",
                        var_name
                    )))
                }
            },
            _ => None,
        };

        Ok(match unambiguous {
            // an overloaded name resolves to its sole entry and binds by
            // copy; sharing the published set would let the callee rebind
            // the function name globally
            Some(decl) => new_slot(Value::Function(FunctionRef::Named(decl))),
            None => slot,
        })
    }

    /// Evaluates an actual argument with the callee frame already on the
    /// stack. A lambda actual must capture the *caller's* environment, so
    /// the frame is taken off for the duration of its evaluation.
    fn eval_actual(&mut self, actual: &Expr) -> Result<Value, BrewinError> {
        if matches!(actual, Expr::Lambda(_)) {
            let frame = self.env.pop_scope();
            let result = self.eval_expr(actual);
            self.env.push_with(frame);
            return result;
        }
        self.eval_expr(actual)
    }
}
