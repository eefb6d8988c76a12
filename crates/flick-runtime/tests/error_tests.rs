//! Error taxonomy tests: every failure class a program can hit, checked
//! through the single pipeline error type.

use flick_runtime::{Error, Flick, LexError, RuntimeError};
use rstest::rstest;

fn fail(source: &str) -> (Error, String) {
    let (result, output) = Flick::new().run_with_output(source);
    (result.unwrap_err(), output)
}

#[test]
fn test_unrecognized_character_with_position() {
    let (err, _) = fail("x = 1\ny = @");
    let Error::Lex(LexError::UnrecognizedCharacter { ch, position }) = err else {
        panic!("expected UnrecognizedCharacter, got {err:?}");
    };
    assert_eq!(ch, '@');
    assert_eq!(position, 10);
}

#[test]
fn test_unterminated_string_points_at_opening_quote() {
    let (err, _) = fail("x = 'oops");
    assert_eq!(err, Error::Lex(LexError::UnterminatedString { position: 4 }));
}

#[test]
fn test_parse_error_messages_name_the_token() {
    let (err, _) = fail("fu f( { p 1 }");
    let message = err.to_string();
    assert!(message.starts_with("parse error:"), "got: {message}");
}

#[rstest]
#[case::undefined_variable("p missing", RuntimeError::UndefinedVariable { name: "missing".to_string() })]
#[case::undefined_function("f(1)", RuntimeError::UndefinedFunction { name: "f".to_string() })]
#[case::division_by_zero("p 1 / 0", RuntimeError::DivisionByZero)]
#[case::modulo_by_zero("p 1 % 0", RuntimeError::ModuloByZero)]
#[case::compound_division_by_zero("x = 4\nx /= 0", RuntimeError::DivisionByZero)]
#[case::compound_modulo_by_zero("y = 7\ny %= 0", RuntimeError::ModuloByZero)]
#[case::non_boolean_condition("if 1 { p 1 }", RuntimeError::NonBooleanCondition)]
#[case::not_an_array("x = 1\nx[0]", RuntimeError::NotAnArray { found: "integer" })]
#[case::non_integer_index("a = [1]\na[1.5]", RuntimeError::NonIntegerIndex { found: "float" })]
#[case::index_out_of_bounds("a = [1, 2]\np a[2]", RuntimeError::IndexOutOfBounds { index: 2 })]
#[case::negative_index_out_of_bounds("a = [1, 2]\np a[-3]", RuntimeError::IndexOutOfBounds { index: -3 })]
#[case::overflow("p 9223372036854775807 * 2", RuntimeError::Overflow)]
fn test_runtime_error_cases(#[case] source: &str, #[case] expected: RuntimeError) {
    let (err, _) = fail(source);
    assert_eq!(err, Error::Runtime(expected));
}

#[test]
fn test_division_by_zero_message_mentions_zero() {
    let (err, _) = fail("p 1 / 0");
    assert!(err.to_string().contains("division by zero"));
}

#[test]
fn test_type_errors_name_both_operand_types() {
    let (err, _) = fail("p 'a' + 1");
    let message = err.to_string();
    assert!(message.contains("string") && message.contains("integer"), "got: {message}");
}

#[test]
fn test_no_output_is_produced_before_a_static_error() {
    // Parsing fails before anything runs, so nothing prints
    let (_, output) = fail("p 'first'\nx + 1");
    assert_eq!(output, "");
}

#[test]
fn test_output_before_a_runtime_error_is_kept() {
    let (_, output) = fail("p 'first'\np 1 / 0");
    assert_eq!(output, "first\n");
}

#[test]
fn test_arity_and_return_errors() {
    let (err, _) = fail("fu f(a) { ret a }\np f(1, 2)");
    assert_eq!(
        err,
        Error::Runtime(RuntimeError::ArityMismatch {
            name: "f".to_string(),
            expected: 1,
            found: 2
        })
    );

    let (err, _) = fail("fu f(a) { p a }\nx = f(1)");
    assert_eq!(
        err,
        Error::Runtime(RuntimeError::MissingReturnValue {
            name: "f".to_string()
        })
    );
}
