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

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::ast::FunctionDecl;

/// A shared, mutable value cell.
///
/// Every environment binding points at one of these. Two names alias the
/// same storage exactly when they hold the same slot, which is how `ref`
/// parameters make callee assignments visible to the caller.
pub type Slot = Rc<RefCell<Value>>;

/// One layer of the environment stack: name to value cell.
pub type Scope = HashMap<String, Slot>;

pub fn new_slot(value: Value) -> Slot {
    Rc::new(RefCell::new(value))
}

/// Brewin runtime value representation.
///
/// This is the tagged union that flows through the interpreter. Every
/// expression ultimately evaluates to one of these. A `Value` carries no
/// interior mutability of its own (mutation lives in slots), so cloning
/// one is a full copy; only function payloads share identity through a
/// clone, which is what keeps function equality meaningful.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    String(String),
    Nil,

    /// A first-class function: either a top-level declaration or a closure.
    Function(FunctionRef),

    /// Dispatch set for an overloaded top-level function name.
    ///
    /// Never the result of an expression: variable lookup resolves a
    /// single-entry set to its function and reports an ambiguous set as a
    /// NAME_ERROR before the value can escape.
    Overloads(OverloadSet),
}

impl Value {
    /// Returns a stable type name string (useful for errors).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::String(_) => "string",
            Value::Nil => "nil",
            Value::Function(_) => "function",
            Value::Overloads(_) => "function",
        }
    }
}

/// Handle to a callable function value.
#[derive(Debug, Clone)]
pub enum FunctionRef {
    /// A top-level `func` declaration.
    Named(Rc<FunctionDecl>),

    /// A lambda bundled with its captured environment.
    Closure(Rc<Closure>),
}

impl FunctionRef {
    /// The declaration behind this function value.
    pub fn decl(&self) -> &Rc<FunctionDecl> {
        match self {
            FunctionRef::Named(decl) => decl,
            FunctionRef::Closure(closure) => &closure.decl,
        }
    }

    /// Identity equality: the same declaration node, or the same closure
    /// allocation (same lambda *and* same captured environment). Two
    /// evaluations of one lambda expression are therefore unequal.
    pub fn identity_eq(a: &FunctionRef, b: &FunctionRef) -> bool {
        match (a, b) {
            (FunctionRef::Named(x), FunctionRef::Named(y)) => Rc::ptr_eq(x, y),
            (FunctionRef::Closure(x), FunctionRef::Closure(y)) => Rc::ptr_eq(x, y),
            _ => false,
        }
    }
}

/// A lambda paired with the environment snapshot taken where it was
/// evaluated.
///
/// The snapshot's slots are shared with every activation of the closure:
/// assignments to captured names persist across calls, while parameter
/// bindings go into a per-call clone of the scope map and do not leak.
#[derive(Debug)]
pub struct Closure {
    pub decl: Rc<FunctionDecl>,
    pub captured: Scope,
}

/// The top-level functions sharing one name, keyed by arity.
#[derive(Debug, Clone)]
pub struct OverloadSet {
    pub name: String,
    pub by_arity: BTreeMap<usize, Rc<FunctionDecl>>,
}

impl OverloadSet {
    pub fn lookup(&self, arity: usize) -> Option<&Rc<FunctionDecl>> {
        self.by_arity.get(&arity)
    }

    /// The sole entry, when the set is unambiguous.
    pub fn single(&self) -> Option<&Rc<FunctionDecl>> {
        if self.by_arity.len() == 1 {
            self.by_arity.values().next()
        } else {
            None
        }
    }
}
