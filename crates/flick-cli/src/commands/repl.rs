//! REPL command implementation

use anyhow::Result;
use flick_runtime::{run_with, Interpreter};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
///
/// One interpreter lives for the whole session, so variables and functions
/// defined on earlier lines stay available. Errors are printed and the
/// session continues.
pub fn run() -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut interpreter = Interpreter::new();

    println!("Flick v{} REPL", flick_runtime::VERSION);
    println!("Type statements, or :quit to exit");
    println!();

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                if trimmed == "exit" || trimmed == ":quit" || trimmed == ":q" {
                    println!("Goodbye!");
                    break;
                }

                if trimmed == ":reset" {
                    interpreter = Interpreter::new();
                    println!("REPL state reset");
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Err(err) = run_with(&line, &mut interpreter) {
                    eprintln!("{}", err);
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C clears the current line but keeps the session
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("readline error: {}", err);
                break;
            }
        }
    }

    Ok(())
}
