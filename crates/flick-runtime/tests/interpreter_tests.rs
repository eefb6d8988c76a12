//! End-to-end program tests: source text through lexer, parser and
//! interpreter, asserting on captured output.

use flick_runtime::Flick;
use pretty_assertions::assert_eq;

fn output_of(source: &str) -> String {
    let (result, output) = Flick::new().run_with_output(source);
    assert!(result.is_ok(), "program failed: {:?}", result.unwrap_err());
    output
}

#[test]
fn test_factorial() {
    let source = "\
fu factorial(n) {
    if n lse 1 {
        ret 1
    }
    ret n * factorial(n - 1)
}
p factorial(5)";
    assert_eq!(output_of(source), "120\n");
}

#[test]
fn test_bubble_sort() {
    let source = "\
.. sort in place, then print each element
a = [7, 3, 10, 5]
n = 4
i = 0
w i ls n {
    j = 0
    w j ls n - i - 1 {
        if a[j] gr a[j + 1] {
            tmp = a[j]
            a[j] = a[j + 1]
            a[j + 1] = tmp
        }
        j += 1
    }
    i += 1
}
i = 0
w i ls n {
    p a[i]
    i += 1
}";
    assert_eq!(output_of(source), "3\n5\n7\n10\n");
}

#[test]
fn test_arithmetic_semantics() {
    let source = "\
p 10 + 5
p 3 * 5
p 20 - 10
p 10 / 2
p 10 % 5";
    assert_eq!(output_of(source), "15\n15\n10\n5.0\n0\n");
}

#[test]
fn test_trailing_dot_number() {
    assert_eq!(output_of("p 5."), "5.0\n");
}

#[test]
fn test_print_space_joins_mixed_values() {
    assert_eq!(
        output_of("x = 3\np 'x =', x, 'and half is', x / 2"),
        "x = 3 and half is 1.5\n"
    );
}

#[test]
fn test_string_comparison_and_concat() {
    let source = "\
a = 'ab'
b = a + 'cd'
if b eq 'abcd' { p 'concat ok' }
if 'a' ls 'b' { p 'order ok' }";
    assert_eq!(output_of(source), "concat ok\norder ok\n");
}

#[test]
fn test_array_aliasing_is_visible_through_all_bindings() {
    let source = "\
a = [1, 2, 3]
b = a
b[1] = 9
p a[1]
p a[-1]";
    assert_eq!(output_of(source), "9\n3\n");
}

#[test]
fn test_function_environment_isolation() {
    // The body's assignment binds only inside the call
    let source = "\
x = 1
fu f(x) {
    x = 99
    ret x
}
p f(5)
p x";
    assert_eq!(output_of(source), "99\n1\n");
}

#[test]
fn test_return_inside_nested_block_exits_that_block() {
    let source = "\
fu classify(n) {
    if n gr 0 {
        ret 'unused'
    }
    ret 'fell through'
}
p classify(5)";
    assert_eq!(output_of(source), "fell through\n");
}

#[test]
fn test_recursive_fibonacci() {
    let source = "\
fu fib(n) {
    if n ls 2 {
        ret n
    }
    ret fib(n - 1) + fib(n - 2)
}
p fib(10)";
    assert_eq!(output_of(source), "55\n");
}

#[test]
fn test_elif_ladder_runs_one_branch() {
    let source = "\
fu name(n) {
    if n eq 1 {
        p 'one'
    } eli n eq 2 {
        p 'two'
    } eli n eq 3 {
        p 'three'
    } el {
        p 'many'
    }
    ret 0
}
name(2)
name(3)
name(9)";
    assert_eq!(output_of(source), "two\nthree\nmany\n");
}

#[test]
fn test_comments_and_blank_lines_are_ignored() {
    let source = "\
.. leading comment
x = 1 .. trailing comment

.. another
p x";
    assert_eq!(output_of(source), "1\n");
}

#[test]
fn test_float_arithmetic_prints_fraction() {
    assert_eq!(output_of("p 2.5 + 2.5"), "5.0\n");
    assert_eq!(output_of("p 1.5 * 2"), "3.0\n");
}

#[test]
fn test_negative_numbers_in_programs() {
    let source = "\
x = -5
p x
p -x
p x * -2";
    assert_eq!(output_of(source), "-5\n5\n10\n");
}
