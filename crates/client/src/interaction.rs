//! Interactive seams between the view logic and a concrete front end.

use std::io::{self, BufRead, Write};

/// Blocking user interaction used by [`CatalogView`](crate::view::CatalogView).
pub trait Interaction {
    /// Ask for a single value. `None` means cancelled or left blank.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Ask a yes/no question; anything but an explicit yes is a no.
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user must see (failures, guard rejections).
    fn notify(&mut self, message: &str);
}

/// Line-oriented terminal interaction over any reader/writer pair.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `text` without a newline and read one trimmed line.
    ///
    /// Returns `None` at end of input or on an I/O failure.
    pub fn read_line(&mut self, text: &str) -> Option<String> {
        if let Err(err) = write!(self.output, "{text}").and_then(|()| self.output.flush()) {
            tracing::warn!(error = %err, "Failed to write to terminal");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read from terminal");
                None
            }
        }
    }

    /// Print one line of output.
    pub fn println(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            tracing::warn!(error = %err, "Failed to write to terminal");
        }
    }
}

impl<R: BufRead, W: Write> Interaction for Terminal<R, W> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.read_line(&format!("{message} "))
            .filter(|value| !value.is_empty())
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.read_line(&format!("{message} [y/N] "))
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    fn notify(&mut self, message: &str) {
        self.println(&format!("! {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(input: &str) -> Terminal<&[u8], Vec<u8>> {
        Terminal::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn prompt_trims_and_treats_blank_as_cancel() {
        let mut term = terminal("  Batman \n\n");
        assert_eq!(term.prompt("Name:").as_deref(), Some("Batman"));
        assert_eq!(term.prompt("Name:"), None);
        assert_eq!(term.prompt("Name:"), None, "end of input cancels");
    }

    #[test]
    fn confirm_requires_explicit_yes() {
        let mut term = terminal("YES\nn\nmaybe\ny\n");
        assert!(term.confirm("Delete?"));
        assert!(!term.confirm("Delete?"));
        assert!(!term.confirm("Delete?"));
        assert!(term.confirm("Delete?"));
        assert!(!term.confirm("Delete?"));
    }

    #[test]
    fn notify_writes_a_marked_line() {
        let mut term = terminal("");
        term.notify("Could not delete character");
        assert_eq!(
            String::from_utf8(term.output).unwrap(),
            "! Could not delete character\n"
        );
    }
}
