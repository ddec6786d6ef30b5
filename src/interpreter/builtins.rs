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

use crate::ast::CallExpr;
use crate::error::BrewinError;
use crate::io::Io;
use crate::value::Value;

use super::display::get_printable;
use super::Interpreter;

impl<I: Io> Interpreter<I> {
    /// `print(...)`: concatenates the printable form of every argument
    /// and emits one line. Returns nil.
    pub(crate) fn call_print(&mut self, call: &CallExpr) -> Result<Value, BrewinError> {
        let mut output = String::new();
        for arg in &call.args {
            let value = self.eval_expr(arg)?;
            output.push_str(&get_printable(&value));
        }

        self.io.output(&output);
        Ok(Value::Nil)
    }

    /// `inputi([prompt])` / `inputs([prompt])`: prints the optional
    /// prompt, reads one line, and returns it as an int or a string.
    pub(crate) fn call_input(&mut self, call: &CallExpr) -> Result<Value, BrewinError> {
        if call.args.len() > 1 {
            return Err(BrewinError::name_error(format!(
                "No {}() function that takes > 1 parameter",
                call.name
            )));
        }

        if let Some(prompt) = call.args.first() {
            let value = self.eval_expr(prompt)?;
            self.io.output(&get_printable(&value));
        }

        let line = self.io.get_input();
        if call.name == "inputi" {
            let value = line.trim().parse::<i64>().map_err(|_| {
                BrewinError::type_error(format!("inputi expected an integer, got \"{}\"", line))
            })?;
            return Ok(Value::Int(value));
        }

        Ok(Value::String(line))
    }
}
