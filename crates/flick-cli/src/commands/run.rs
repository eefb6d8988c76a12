//! Run command - execute Flick source files

use anyhow::{Context, Result};
use flick_runtime::Flick;
use std::fs;

/// Run a Flick source file
///
/// Reads and executes the file, with program output going straight to
/// stdout.
pub fn run(file_path: &str) -> Result<()> {
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path))?;

    // One message per failure; main lets anyhow report it on stderr
    Flick::new()
        .run(&source)
        .map_err(|err| anyhow::anyhow!("{}: {}", file_path, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_run_simple_program() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "x = 1 + 2").unwrap();

        let result = run(temp_file.path().to_str().unwrap());
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_missing_file() {
        let result = run("nonexistent.fl");
        assert!(result.is_err());
    }

    #[test]
    fn test_run_program_with_runtime_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "x = 1 / 0").unwrap();

        let result = run(temp_file.path().to_str().unwrap());
        assert!(result.is_err());
    }
}
