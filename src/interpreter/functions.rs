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

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::ast::{FunctionDecl, Program};
use crate::value::{OverloadSet, Value};

use super::environment::Environment;

/// Registry of top-level functions, keyed by name and then arity.
///
/// Overloading is by arity only. The table is built once per run and
/// never changes afterwards; shadowing a function name rebinds its
/// root-scope value, not the table entry.
#[derive(Debug, Default)]
pub struct FunctionTable {
    by_name: HashMap<String, BTreeMap<usize, Rc<FunctionDecl>>>,
}

impl FunctionTable {
    pub fn build(program: &Program) -> Self {
        let mut by_name: HashMap<String, BTreeMap<usize, Rc<FunctionDecl>>> = HashMap::new();

        for func in &program.functions {
            let Some(name) = &func.name else { continue };
            by_name
                .entry(name.clone())
                .or_default()
                .insert(func.arity(), func.clone());
        }

        Self { by_name }
    }

    pub fn lookup(&self, name: &str, arity: usize) -> Option<&Rc<FunctionDecl>> {
        self.by_name.get(name).and_then(|set| set.get(&arity))
    }

    /// Whether `name` is a declared top-level function of any arity.
    pub fn is_declared(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Publishes every function name into the root scope as a first-class
    /// value, so functions can be read, passed, and shadowed like
    /// variables. Names always enter as overload sets; variable lookup
    /// collapses unambiguous sets to plain function values.
    pub fn publish(&self, env: &mut Environment) {
        for (name, by_arity) in &self.by_name {
            env.create(
                name.clone(),
                Value::Overloads(OverloadSet {
                    name: name.clone(),
                    by_arity: by_arity.clone(),
                }),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FunctionTable;
    use crate::parser::parse_program;

    #[test]
    fn overloads_register_by_arity() {
        let program = parse_program(
            "func f() { return; } func f(a) { return; } func main() { return; }",
        )
        .unwrap();
        let table = FunctionTable::build(&program);

        assert!(table.lookup("f", 0).is_some());
        assert!(table.lookup("f", 1).is_some());
        assert!(table.lookup("f", 2).is_none());
        assert!(table.is_declared("main"));
        assert!(!table.is_declared("g"));
    }

    #[test]
    fn a_redefinition_with_the_same_arity_wins() {
        let program = parse_program("func f() { return 1; } func f() { return 2; }").unwrap();
        let table = FunctionTable::build(&program);

        let decl = table.lookup("f", 0).unwrap();
        assert_eq!(decl.body, program.functions[1].body);
    }
}
