mod common;

use brewin::ErrorKind;
use common::{run_brewin, run_error};

#[test]
fn capture_is_by_value_at_creation_time() {
    let output = run_brewin(
        "func main() {
            x = 5;
            f = lambda() { return x; };
            x = 99;
            print(f());
        }",
    );
    assert_eq!(output, vec!["5"]);
}

#[test]
fn lambdas_take_parameters() {
    let output = run_brewin(
        "func main() {
            add = lambda(a, b) { return a + b; };
            print(add(2, 3));
        }",
    );
    assert_eq!(output, vec!["5"]);
}

#[test]
fn closure_state_persists_across_calls() {
    let output = run_brewin(
        "func main() {
            count = 0;
            tick = lambda() {
                count = count + 1;
                return count;
            };
            print(tick());
            print(tick());
            print(tick());
            print(count);
        }",
    );
    // the captured count is the closure's own copy; the caller's stays 0
    assert_eq!(output, vec!["1", "2", "3", "0"]);
}

#[test]
fn lambdas_pass_as_arguments_and_capture_the_call_site() {
    let output = run_brewin(
        "func apply(f) { return f(); }
        func main() {
            secret = 42;
            print(apply(lambda() { return secret; }));
        }",
    );
    assert_eq!(output, vec!["42"]);
}

#[test]
fn lambdas_return_from_functions() {
    let output = run_brewin(
        "func make_adder(n) {
            return lambda(v) { return v + n; };
        }
        func main() {
            add5 = make_adder(5);
            add9 = make_adder(9);
            print(add5(1));
            print(add9(1));
        }",
    );
    assert_eq!(output, vec!["6", "10"]);
}

#[test]
fn captured_functions_keep_their_identity() {
    let output = run_brewin(
        "func helper() { return 3; }
        func main() {
            f = lambda() { return helper(); };
            print(f());
        }",
    );
    assert_eq!(output, vec!["3"]);
}

#[test]
fn lambdas_print_as_lambda() {
    let output = run_brewin(
        "func main() {
            f = lambda() { return 1; };
            print(f);
        }",
    );
    assert_eq!(output, vec!["FUNCTION Lambda"]);
}

#[test]
fn copies_of_a_closure_compare_equal_but_reevaluation_differs() {
    let output = run_brewin(
        "func main() {
            f = lambda() { return 1; };
            g = f;
            h = lambda() { return 1; };
            print(f == g);
            print(f == h);
        }",
    );
    assert_eq!(output, vec!["true", "false"]);
}

#[test]
fn lambda_arity_mismatch_is_a_type_error() {
    let error = run_error(
        "func main() {
            f = lambda(a) { return a; };
            f(1, 2);
        }",
    );
    assert_eq!(error.kind, ErrorKind::TypeError);
}

#[test]
fn lambdas_take_ref_parameters() {
    let output = run_brewin(
        "func main() {
            x = 1;
            bump = lambda(ref v) { v = v + 10; };
            bump(x);
            print(x);
        }",
    );
    assert_eq!(output, vec!["11"]);
}
