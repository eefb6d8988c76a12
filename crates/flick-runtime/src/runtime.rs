//! High-level pipeline: source text in, effects out
//!
//! Wires the lexer, parser and interpreter together behind one error type so
//! embedders and the CLI deal with a single `Result`.

use crate::error::{LexError, ParseError};
use crate::interpreter::Interpreter;
use crate::lexer::tokenize;
use crate::parser::parse;
use crate::value::RuntimeError;
use std::io::Write;
use thiserror::Error;

/// Any error a program can fail with, from first character to last effect
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Entry point for running programs
///
/// Each `run` is an independent execution with a fresh environment.
#[derive(Debug, Default)]
pub struct Flick;

impl Flick {
    pub fn new() -> Self {
        Flick
    }

    /// Run a program, printing to standard output
    pub fn run(&self, source: &str) -> Result<(), Error> {
        let mut interpreter = Interpreter::new();
        run_with(source, &mut interpreter)
    }

    /// Run a program with captured output
    ///
    /// The returned string holds whatever the program printed before it
    /// finished or failed, so partial output survives a runtime error.
    pub fn run_with_output(&self, source: &str) -> (Result<(), Error>, String) {
        let mut interpreter = Interpreter::with_output(Vec::new());
        let result = run_with(source, &mut interpreter);
        let output = String::from_utf8_lossy(&interpreter.into_output()).into_owned();
        (result, output)
    }
}

/// Run a program through an existing interpreter, keeping its environment
///
/// This is what a session host (such as a REPL) uses to carry bindings from
/// one submission to the next.
pub fn run_with<W: Write>(source: &str, interpreter: &mut Interpreter<W>) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    let program = parse(tokens)?;
    interpreter.interpret(&program)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_output_captures_prints() {
        let (result, output) = Flick::new().run_with_output("p 1 + 2");
        assert!(result.is_ok());
        assert_eq!(output, "3\n");
    }

    #[test]
    fn test_errors_from_every_stage() {
        let flick = Flick::new();
        assert!(matches!(
            flick.run_with_output("x = '@'@").0,
            Err(Error::Lex(_))
        ));
        assert!(matches!(
            flick.run_with_output("x + 1").0,
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            flick.run_with_output("p 1 / 0").0,
            Err(Error::Runtime(_))
        ));
    }

    #[test]
    fn test_partial_output_survives_a_runtime_error() {
        let (result, output) = Flick::new().run_with_output("p 'before'\np 1 / 0");
        assert!(result.is_err());
        assert_eq!(output, "before\n");
    }

    #[test]
    fn test_runs_are_independent() {
        let flick = Flick::new();
        assert!(flick.run_with_output("x = 1").0.is_ok());
        assert!(flick.run_with_output("p x").0.is_err());
    }

    #[test]
    fn test_run_with_keeps_bindings() {
        let mut interpreter = Interpreter::with_output(Vec::new());
        run_with("x = 41", &mut interpreter).unwrap();
        run_with("p x + 1", &mut interpreter).unwrap();
        let output = String::from_utf8(interpreter.into_output()).unwrap();
        assert_eq!(output, "42\n");
    }
}
