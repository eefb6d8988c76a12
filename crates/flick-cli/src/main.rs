use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

/// Flick programming language runtime.
///
/// Flick is a small dynamically typed language with terse keywords:
/// `p` prints, `w` loops, `fu` declares a function and `ret` returns.
/// This CLI runs Flick source files and provides an interactive REPL.
///
/// EXAMPLES:
///     flick run main.fl            Run a Flick program
///     flick repl                   Start interactive REPL
#[derive(Parser)]
#[command(name = "flick")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Flick source file
    ///
    /// Executes the file top to bottom; whatever the program prints with
    /// `p` goes to stdout, errors go to stderr.
    #[command(visible_alias = "r")]
    Run {
        /// Path to the Flick source file
        file: String,
    },

    /// Start an interactive REPL
    ///
    /// Variables and functions persist between submissions. Type `exit`,
    /// `:quit` or press Ctrl-D to leave.
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { file }) => commands::run::run(&file),
        Some(Commands::Repl) | None => commands::repl::run(),
    }
}
