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

use crate::value::{new_slot, Scope, Slot, Value};

/// The runtime scope stack.
///
/// Scopes are pushed on function entry, block entry, and closure
/// activation, and popped on exit; every push is paired with exactly one
/// pop on every exit path, including errors. Lookups scan from the
/// innermost scope outward across the whole stack.
///
/// Each scope maps names to shared slots. Aliasing is expressed purely
/// through slot sharing: a `ref` parameter adopts the caller's slot, so
/// writing through either name mutates the one cell both can see. Normal
/// bindings always allocate a fresh slot.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    /// A stack holding only the root scope, where top-level function
    /// values live.
    pub fn new() -> Self {
        Self {
            scopes: vec![Scope::new()],
        }
    }

    pub fn push(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pushes a pre-populated scope, used when activating a closure with
    /// its captured environment.
    pub fn push_with(&mut self, scope: Scope) {
        self.scopes.push(scope);
    }

    pub fn pop(&mut self) {
        self.pop_scope();
    }

    /// Pops and returns the innermost scope so a caller can temporarily
    /// re-expose the scope below, then `push_with` it back.
    pub fn pop_scope(&mut self) -> Scope {
        self.scopes.pop().expect("scope stack underflow")
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Innermost-to-outermost lookup.
    pub fn get(&self, name: &str) -> Option<Slot> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).cloned())
    }

    /// Lookup that skips the innermost scope. Used while binding call
    /// arguments, where the innermost scope is the half-built callee frame
    /// and the referent lives with the caller.
    pub fn get_in_prior(&self, name: &str) -> Option<Slot> {
        let end = self.scopes.len().saturating_sub(1);
        self.scopes[..end]
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).cloned())
    }

    /// Writes through the slot the name already occupies, at whichever
    /// depth it first resolves; an unknown name is born in the innermost
    /// scope. Writing through the slot rather than rebinding the name is
    /// what makes `ref` aliases observable.
    pub fn set(&mut self, name: &str, value: Value) {
        match self.get(name) {
            Some(slot) => *slot.borrow_mut() = value,
            None => self.create(name, value),
        }
    }

    /// `set`, but skipping the innermost scope. A name that resolves
    /// nowhere is left unbound.
    pub fn set_in_prior(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.get_in_prior(name) {
            *slot.borrow_mut() = value;
        }
    }

    /// Unconditionally binds a fresh slot in the innermost scope,
    /// shadowing any outer binding of the same name.
    pub fn create(&mut self, name: impl Into<String>, value: Value) {
        self.adopt(name, new_slot(value));
    }

    /// Binds an existing slot in the innermost scope. This is the aliasing
    /// primitive behind `ref` parameters.
    pub fn adopt(&mut self, name: impl Into<String>, slot: Slot) {
        self.scopes
            .last_mut()
            .expect("scope stack underflow")
            .insert(name.into(), slot);
    }

    /// Flattens the stack into one scope for lambda capture. Inner scopes
    /// shadow outer ones. Every value is copied into a fresh slot, so the
    /// capture is by value at capture time; function payloads keep their
    /// identity through the copy.
    pub fn snapshot(&self) -> Scope {
        let mut flattened = Scope::new();
        for scope in &self.scopes {
            for (name, slot) in scope {
                flattened.insert(name.clone(), new_slot(slot.borrow().clone()));
            }
        }
        flattened
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Environment;
    use crate::value::{new_slot, Value};

    fn int_in(env: &Environment, name: &str) -> i64 {
        match *env.get(name).expect("name should resolve").borrow() {
            Value::Int(n) => n,
            ref other => panic!("expected an int, got {:?}", other),
        }
    }

    #[test]
    fn get_scans_innermost_first() {
        let mut env = Environment::new();
        env.create("x", Value::Int(1));
        env.push();
        env.create("x", Value::Int(2));

        assert_eq!(int_in(&env, "x"), 2);
        env.pop();
        assert_eq!(int_in(&env, "x"), 1);
    }

    #[test]
    fn set_writes_at_the_depth_the_name_lives() {
        let mut env = Environment::new();
        env.create("x", Value::Int(1));
        env.push();
        env.set("x", Value::Int(5));
        env.pop();

        assert_eq!(int_in(&env, "x"), 5);
    }

    #[test]
    fn set_creates_unknown_names_in_the_innermost_scope() {
        let mut env = Environment::new();
        env.push();
        env.set("fresh", Value::Int(3));
        assert_eq!(int_in(&env, "fresh"), 3);

        env.pop();
        assert!(env.get("fresh").is_none());
    }

    #[test]
    fn prior_variants_skip_the_innermost_scope() {
        let mut env = Environment::new();
        env.create("x", Value::Int(1));
        env.push();
        env.create("x", Value::Int(2));

        let prior = env.get_in_prior("x").unwrap();
        assert!(matches!(*prior.borrow(), Value::Int(1)));

        env.set_in_prior("x", Value::Int(9));
        assert_eq!(int_in(&env, "x"), 2);
        env.pop();
        assert_eq!(int_in(&env, "x"), 9);
    }

    #[test]
    fn adopted_slots_alias_their_origin() {
        let mut env = Environment::new();
        let shared = new_slot(Value::Int(1));
        env.adopt("a", shared.clone());
        env.push();
        env.adopt("b", shared);

        env.set("b", Value::Int(42));
        env.pop();
        assert_eq!(int_in(&env, "a"), 42);
    }

    #[test]
    fn snapshot_copies_values_out_of_their_slots() {
        let mut env = Environment::new();
        env.create("x", Value::Int(1));

        let snapshot = env.snapshot();
        env.set("x", Value::Int(99));

        assert!(matches!(*snapshot["x"].borrow(), Value::Int(1)));
    }

    #[test]
    fn snapshot_lets_inner_scopes_shadow_outer_ones() {
        let mut env = Environment::new();
        env.create("x", Value::Int(1));
        env.push();
        env.create("x", Value::Int(2));

        let snapshot = env.snapshot();
        assert!(matches!(*snapshot["x"].borrow(), Value::Int(2)));
    }

    #[test]
    fn push_and_pop_track_depth() {
        let mut env = Environment::new();
        assert_eq!(env.depth(), 1);
        env.push();
        env.push_with(Default::default());
        assert_eq!(env.depth(), 3);
        env.pop();
        let scope = env.pop_scope();
        assert!(scope.is_empty());
        assert_eq!(env.depth(), 1);
    }
}
