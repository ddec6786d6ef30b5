/*
 * ==========================================================================
 * BREWIN - A Tree-Walking Interpreter for the Brewin Language
 * ==========================================================================
 *
 * Operator Engine
 * ---------------
 * Per-type dispatch for every binary and unary operator, plus the
 * implicit int<->bool coercions applied before dispatch:
 *
 *  - arithmetic (`+ - * /`) pulls int/bool operand mixes to int
 *  - logic (`&& ||`) pulls int/bool operand mixes to bool
 *  - equality (`== !=`) never coerces; different tags compare unequal
 *  - everything else demands matching types
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

use crate::ast::{BinaryOp, UnaryOp};
use crate::error::BrewinError;
use crate::value::{FunctionRef, Value};

/// Applies a binary operator to two already-evaluated operands,
/// dispatching on the (coerced) left operand type.
pub fn apply_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, BrewinError> {
    let (lhs, rhs) = coerce_operands(op, lhs, rhs);

    match (&lhs, &rhs) {
        (Value::Int(a), Value::Int(b)) => int_op(op, *a, *b),
        (Value::String(a), Value::String(b)) => string_op(op, a, b),
        (Value::Bool(a), Value::Bool(b)) => bool_op(op, *a, *b),
        (Value::Nil, Value::Nil) => nil_op(op),
        (Value::Function(a), Value::Function(b)) => function_op(op, a, b),

        // Mismatched tags: equality is defined, everything else fails
        _ => match op {
            BinaryOp::Eq => Ok(Value::Bool(false)),
            BinaryOp::Ne => Ok(Value::Bool(true)),
            _ => Err(incompatible_types(op)),
        },
    }
}

/// `neg` demands an int; `!` accepts bools and coerces ints first.
pub fn apply_unary(op: UnaryOp, operand: Value) -> Result<Value, BrewinError> {
    match op {
        UnaryOp::Neg => match operand {
            Value::Int(value) => Ok(Value::Int(value.wrapping_neg())),
            _ => Err(BrewinError::type_error(
                "Incompatible type for neg operation",
            )),
        },
        UnaryOp::Not => match operand {
            Value::Bool(value) => Ok(Value::Bool(!value)),
            Value::Int(value) => Ok(Value::Bool(value == 0)),
            _ => Err(BrewinError::type_error("Incompatible type for ! operation")),
        },
    }
}

fn coerce_operands(op: BinaryOp, lhs: Value, rhs: Value) -> (Value, Value) {
    if op.is_arithmetic() && is_int_or_bool(&lhs) && is_int_or_bool(&rhs) {
        return (to_int(lhs), to_int(rhs));
    }
    if op.is_logical() && is_int_or_bool(&lhs) && is_int_or_bool(&rhs) {
        return (to_bool(lhs), to_bool(rhs));
    }
    (lhs, rhs)
}

fn is_int_or_bool(value: &Value) -> bool {
    matches!(value, Value::Int(_) | Value::Bool(_))
}

fn to_int(value: Value) -> Value {
    match value {
        Value::Bool(b) => Value::Int(i64::from(b)),
        other => other,
    }
}

fn to_bool(value: Value) -> Value {
    match value {
        Value::Int(n) => Value::Bool(n != 0),
        other => other,
    }
}

fn int_op(op: BinaryOp, a: i64, b: i64) -> Result<Value, BrewinError> {
    match op {
        // arithmetic wraps on overflow
        BinaryOp::Add => Ok(Value::Int(a.wrapping_add(b))),
        BinaryOp::Sub => Ok(Value::Int(a.wrapping_sub(b))),
        BinaryOp::Mul => Ok(Value::Int(a.wrapping_mul(b))),
        BinaryOp::Div => {
            if b == 0 {
                Err(BrewinError::type_error("Division by zero"))
            } else {
                Ok(Value::Int(floor_div(a, b)))
            }
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::Ne => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::Le => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::Ge => Ok(Value::Bool(a >= b)),
        BinaryOp::And | BinaryOp::Or => Err(incompatible_operator(op, "int")),
    }
}

/// Floor division: rounds toward negative infinity, as the language
/// defines it. `i64` division truncates toward zero, so mixed-sign
/// inexact quotients need one step down.
fn floor_div(a: i64, b: i64) -> i64 {
    let quotient = a.wrapping_div(b);
    if a % b != 0 && (a < 0) != (b < 0) {
        quotient - 1
    } else {
        quotient
    }
}

fn string_op(op: BinaryOp, a: &str, b: &str) -> Result<Value, BrewinError> {
    match op {
        BinaryOp::Add => Ok(Value::String(format!("{}{}", a, b))),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::Ne => Ok(Value::Bool(a != b)),
        _ => Err(incompatible_operator(op, "string")),
    }
}

fn bool_op(op: BinaryOp, a: bool, b: bool) -> Result<Value, BrewinError> {
    match op {
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::Ne => Ok(Value::Bool(a != b)),
        _ => Err(incompatible_operator(op, "bool")),
    }
}

fn nil_op(op: BinaryOp) -> Result<Value, BrewinError> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(true)),
        BinaryOp::Ne => Ok(Value::Bool(false)),
        _ => Err(incompatible_operator(op, "nil")),
    }
}

/// Function equality is identity: same declaration node, or same closure
/// allocation.
fn function_op(op: BinaryOp, a: &FunctionRef, b: &FunctionRef) -> Result<Value, BrewinError> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(FunctionRef::identity_eq(a, b))),
        BinaryOp::Ne => Ok(Value::Bool(!FunctionRef::identity_eq(a, b))),
        _ => Err(incompatible_operator(op, "function")),
    }
}

fn incompatible_types(op: BinaryOp) -> BrewinError {
    BrewinError::type_error(format!("Incompatible types for {} operation", op))
}

fn incompatible_operator(op: BinaryOp, type_name: &str) -> BrewinError {
    BrewinError::type_error(format!(
        "Incompatible operator {} for type {}",
        op, type_name
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{apply_binary, apply_unary, floor_div};
    use crate::ast::{BinaryOp, UnaryOp};
    use crate::error::ErrorKind;
    use crate::value::Value;

    fn int(result: Result<Value, crate::error::BrewinError>) -> i64 {
        match result.expect("operation should succeed") {
            Value::Int(n) => n,
            other => panic!("expected an int, got {:?}", other),
        }
    }

    fn boolean(result: Result<Value, crate::error::BrewinError>) -> bool {
        match result.expect("operation should succeed") {
            Value::Bool(b) => b,
            other => panic!("expected a bool, got {:?}", other),
        }
    }

    #[test]
    fn division_floors_toward_negative_infinity() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_div(7, -2), -4);
        assert_eq!(floor_div(-7, -2), 3);
        assert_eq!(floor_div(6, 3), 2);
        assert_eq!(floor_div(-6, 3), -2);
    }

    #[test]
    fn division_by_zero_is_a_type_error() {
        let error = apply_binary(BinaryOp::Div, Value::Int(1), Value::Int(0)).unwrap_err();
        assert_eq!(error.kind, ErrorKind::TypeError);
    }

    #[test]
    fn bools_coerce_to_ints_under_arithmetic() {
        assert_eq!(int(apply_binary(BinaryOp::Add, Value::Bool(true), Value::Int(1))), 2);
        assert_eq!(int(apply_binary(BinaryOp::Mul, Value::Bool(false), Value::Int(9))), 0);
        assert_eq!(
            int(apply_binary(BinaryOp::Sub, Value::Bool(true), Value::Bool(true))),
            0
        );
    }

    #[test]
    fn ints_coerce_to_bools_under_logic() {
        assert!(!boolean(apply_binary(BinaryOp::And, Value::Int(1), Value::Int(0))));
        assert!(boolean(apply_binary(BinaryOp::Or, Value::Int(0), Value::Int(7))));
        assert!(boolean(apply_binary(BinaryOp::And, Value::Bool(true), Value::Int(3))));
    }

    #[test]
    fn equality_across_tags_never_coerces_and_never_fails() {
        assert!(!boolean(apply_binary(BinaryOp::Eq, Value::Int(1), Value::Bool(true))));
        assert!(boolean(apply_binary(BinaryOp::Ne, Value::Int(1), Value::Bool(true))));
        assert!(!boolean(apply_binary(
            BinaryOp::Eq,
            Value::String("1".to_string()),
            Value::Int(1)
        )));
        assert!(!boolean(apply_binary(BinaryOp::Eq, Value::Nil, Value::Int(0))));
    }

    #[test]
    fn strings_concatenate_and_compare() {
        let joined = apply_binary(
            BinaryOp::Add,
            Value::String("ab".to_string()),
            Value::String("cd".to_string()),
        )
        .unwrap();
        assert!(matches!(joined, Value::String(s) if s == "abcd"));

        let error = apply_binary(
            BinaryOp::Sub,
            Value::String("a".to_string()),
            Value::String("b".to_string()),
        )
        .unwrap_err();
        assert_eq!(error.kind, ErrorKind::TypeError);
    }

    #[test]
    fn nil_supports_only_equality() {
        assert!(boolean(apply_binary(BinaryOp::Eq, Value::Nil, Value::Nil)));
        assert!(!boolean(apply_binary(BinaryOp::Ne, Value::Nil, Value::Nil)));

        let error = apply_binary(BinaryOp::Add, Value::Nil, Value::Nil).unwrap_err();
        assert_eq!(error.kind, ErrorKind::TypeError);
    }

    #[test]
    fn mismatched_arithmetic_operands_fail() {
        let error = apply_binary(
            BinaryOp::Add,
            Value::Int(1),
            Value::String("s".to_string()),
        )
        .unwrap_err();
        assert_eq!(error.kind, ErrorKind::TypeError);
    }

    #[test]
    fn unary_neg_requires_an_int() {
        assert_eq!(int(apply_unary(UnaryOp::Neg, Value::Int(5))), -5);

        let error = apply_unary(UnaryOp::Neg, Value::Bool(true)).unwrap_err();
        assert_eq!(error.kind, ErrorKind::TypeError);
    }

    #[test]
    fn unary_not_coerces_ints() {
        assert!(!boolean(apply_unary(UnaryOp::Not, Value::Bool(true))));
        assert!(boolean(apply_unary(UnaryOp::Not, Value::Int(0))));
        assert!(!boolean(apply_unary(UnaryOp::Not, Value::Int(42))));

        let error = apply_unary(UnaryOp::Not, Value::String("x".to_string())).unwrap_err();
        assert_eq!(error.kind, ErrorKind::TypeError);
    }
}
