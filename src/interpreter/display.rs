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

use crate::value::Value;

/// The language-level printable form of a value, as `print` emits it:
///
///   - Int      -> decimal digits
///   - String   -> its text, unquoted
///   - Bool     -> `true` / `false`
///   - Nil      -> `nil`
///   - Function -> `FUNCTION <name>`, with `Lambda` for anonymous ones
pub fn get_printable(value: &Value) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Nil => "nil".to_string(),
        Value::Function(target) => format!("FUNCTION {}", target.decl().display_name()),
        Value::Overloads(set) => format!("FUNCTION {}", set.name),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::get_printable;
    use crate::ast::FunctionDecl;
    use crate::value::{Closure, FunctionRef, Scope, Value};

    #[test]
    fn primitives_print_their_language_forms() {
        assert_eq!(get_printable(&Value::Int(-3)), "-3");
        assert_eq!(get_printable(&Value::String("hi".to_string())), "hi");
        assert_eq!(get_printable(&Value::Bool(true)), "true");
        assert_eq!(get_printable(&Value::Bool(false)), "false");
        assert_eq!(get_printable(&Value::Nil), "nil");
    }

    #[test]
    fn functions_print_their_name_or_lambda() {
        let named = Rc::new(FunctionDecl {
            name: Some("foo".to_string()),
            params: vec![],
            body: vec![],
        });
        assert_eq!(
            get_printable(&Value::Function(FunctionRef::Named(named))),
            "FUNCTION foo"
        );

        let lambda = Rc::new(FunctionDecl {
            name: None,
            params: vec![],
            body: vec![],
        });
        let closure = FunctionRef::Closure(Rc::new(Closure {
            decl: lambda,
            captured: Scope::new(),
        }));
        assert_eq!(get_printable(&Value::Function(closure)), "FUNCTION Lambda");
    }
}
