mod common;

use brewin::ErrorKind;
use common::{run_brewin, run_error};

#[test]
fn overloads_dispatch_by_arity() {
    let output = run_brewin(
        "func f() { return 0; }
        func f(a) { return 1; }
        func f(a, b) { return 2; }
        func main() {
            print(f());
            print(f(9));
            print(f(1, 2));
        }",
    );
    assert_eq!(output, vec!["0", "1", "2"]);
}

#[test]
fn calling_a_missing_function_is_a_name_error() {
    let error = run_error("func main() { ghost(); }");
    assert_eq!(error.kind, ErrorKind::NameError);
}

#[test]
fn calling_with_an_unknown_arity_is_a_name_error() {
    let error = run_error(
        "func f(a) { return a; }
        func main() { f(1, 2); }",
    );
    assert_eq!(error.kind, ErrorKind::NameError);
}

#[test]
fn calling_a_non_function_value_is_a_type_error() {
    let error = run_error(
        "func main() {
            x = 5;
            x();
        }",
    );
    assert_eq!(error.kind, ErrorKind::TypeError);
}

#[test]
fn functions_are_first_class_values() {
    let output = run_brewin(
        "func double(n) { return n * 2; }
        func apply(f, v) { return f(v); }
        func main() {
            g = double;
            print(g(21));
            print(apply(double, 5));
        }",
    );
    assert_eq!(output, vec!["42", "10"]);
}

#[test]
fn a_function_variable_ignores_declared_arity_until_binding() {
    // resolution through a variable succeeds; the arity mismatch is a
    // TYPE_ERROR at binding time
    let error = run_error(
        "func double(n) { return n * 2; }
        func main() {
            g = double;
            g(1, 2);
        }",
    );
    assert_eq!(error.kind, ErrorKind::TypeError);
}

#[test]
fn reading_an_ambiguous_overload_is_a_name_error() {
    let error = run_error(
        "func f() { return 0; }
        func f(a) { return 1; }
        func main() { g = f; }",
    );
    assert_eq!(error.kind, ErrorKind::NameError);
}

#[test]
fn an_unambiguous_function_name_reads_as_its_value() {
    let output = run_brewin(
        "func solo() { return 7; }
        func main() {
            print(solo);
            print(solo == solo);
        }",
    );
    assert_eq!(output, vec!["FUNCTION solo", "true"]);
}

#[test]
fn shadowing_a_function_name_rebinds_the_variable_not_the_table() {
    let output = run_brewin(
        "func f() { return 1; }
        func main() {
            f = 99;
            print(f);
            print(f());
        }",
    );
    // the direct call still resolves through the function table
    assert_eq!(output, vec!["99", "1"]);
}

#[test]
fn function_equality_is_identity() {
    let output = run_brewin(
        "func a() { return 1; }
        func b() { return 1; }
        func main() {
            x = a;
            y = a;
            z = b;
            print(x == y);
            print(x == z);
            print(x != z);
        }",
    );
    assert_eq!(output, vec!["true", "false", "true"]);
}

#[test]
fn arguments_evaluate_left_to_right() {
    let output = run_brewin(
        "func note(v) { print(v); return v; }
        func sum3(a, b, c) { return a + b + c; }
        func main() {
            print(sum3(note(1), note(2), note(3)));
        }",
    );
    assert_eq!(output, vec!["1", "2", "3", "6"]);
}

#[test]
fn call_results_are_discarded_in_statement_position() {
    let output = run_brewin(
        "func value() { return 42; }
        func main() {
            value();
            print(\"done\");
        }",
    );
    assert_eq!(output, vec!["done"]);
}
