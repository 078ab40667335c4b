//! Interactive confirmation for CLI commands
//!
//! Uses dialoguer when both stdin and stderr are terminals and a plain line
//! read otherwise, so answers can be piped in and stderr redirected.

use std::cell::RefCell;
use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use dialoguer::Confirm;
use stack_core::{ConfirmationProvider, Error, Result, parse_answer};

/// Asks the operator on the controlling terminal, defaulting to no.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractivePrompt;

impl InteractivePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmationProvider for InteractivePrompt {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if use_terminal_dialog(io::stdin().is_terminal(), io::stderr().is_terminal()) {
            return Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .map_err(|e| Error::prompt(e.to_string()));
        }

        let stdin = io::stdin();
        LinePrompt::new(stdin.lock(), io::stderr()).confirm(prompt)
    }
}

/// dialoguer draws on stderr and reads keys from stdin; it needs both to be
/// terminals.
fn use_terminal_dialog(stdin_is_terminal: bool, stderr_is_terminal: bool) -> bool {
    stdin_is_terminal && stderr_is_terminal
}

/// Reads a single answer line from `input` after writing the question to
/// `output`.
///
/// End of input counts as no.
pub struct LinePrompt<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }
}

impl<R: BufRead, W: Write> ConfirmationProvider for LinePrompt<R, W> {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let mut output = self.output.borrow_mut();
        write!(output, "{} {} [y|N] : ", "?".yellow().bold(), prompt)
            .and_then(|_| output.flush())
            .map_err(|e| Error::prompt(e.to_string()))?;

        let mut answer = String::new();
        self.input
            .borrow_mut()
            .read_line(&mut answer)
            .map_err(|e| Error::prompt(e.to_string()))?;

        // Keep the log output on its own line when the answer was piped
        if !answer.ends_with('\n') {
            writeln!(output).map_err(|e| Error::prompt(e.to_string()))?;
        }

        Ok(parse_answer(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn ask(input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let answer = {
            let prompt = LinePrompt::new(Cursor::new(input.as_bytes()), &mut out);
            prompt.confirm("Overwrite?").unwrap()
        };
        (answer, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_line_prompt_yes() {
        let (answer, out) = ask("y\n");
        assert!(answer);
        assert!(out.contains("Overwrite? [y|N] : "));
    }

    #[test]
    fn test_line_prompt_default_is_no() {
        assert!(!ask("\n").0);
    }

    #[test]
    fn test_line_prompt_eof_is_no() {
        let (answer, out) = ask("");
        assert!(!answer);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_line_prompt_reads_one_line_per_question() {
        let mut out = Vec::new();
        let prompt = LinePrompt::new(Cursor::new("Yes\nno\n".as_bytes()), &mut out);
        assert!(prompt.confirm("first?").unwrap());
        assert!(!prompt.confirm("second?").unwrap());
    }

    #[rstest]
    #[case::both_terminals(true, true, true)]
    #[case::stderr_redirected(true, false, false)]
    #[case::stdin_piped(false, true, false)]
    #[case::neither(false, false, false)]
    fn test_terminal_dialog_needs_stdin_and_stderr(
        #[case] stdin_is_terminal: bool,
        #[case] stderr_is_terminal: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(
            use_terminal_dialog(stdin_is_terminal, stderr_is_terminal),
            expected
        );
    }

    /// Takes the question but refuses the bare newline written after it.
    struct RejectNewline;

    impl Write for RejectNewline {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf == b"\n" {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_line_prompt_reports_failed_newline() {
        let prompt = LinePrompt::new(Cursor::new("y".as_bytes()), RejectNewline);

        let err = prompt.confirm("Overwrite?").unwrap_err();

        assert!(matches!(err, Error::Prompt { .. }), "got {err:?}");
    }
}
