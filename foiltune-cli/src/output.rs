//! Output abstraction for command handlers.
//!
//! Handlers write through [`Output`] instead of calling `println!` directly
//! so their output can be captured in tests.

#[cfg(test)]
use std::cell::RefCell;

use console::style;

/// Line-oriented text sink.
pub trait Output {
    /// Print a section header.
    fn header(&self, text: &str);

    /// Print a subsection header.
    fn subheader(&self, text: &str);

    /// Print a line.
    fn println(&self, text: &str);

    /// Print a line indented by two spaces.
    fn indented(&self, text: &str) {
        self.println(&format!("  {}", text));
    }

    /// Print an empty line.
    fn newline(&self) {
        self.println("");
    }
}

/// Writes to stdout, styling headers when the terminal supports it.
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl ConsoleOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for ConsoleOutput {
    fn header(&self, text: &str) {
        println!("{}", style(text).bold().cyan());
        println!("{}", "=".repeat(text.chars().count()));
    }

    fn subheader(&self, text: &str) {
        println!("{}", style(text).bold());
    }

    fn println(&self, text: &str) {
        println!("{}", text);
    }
}

/// Collects output in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct BufferOutput {
    lines: RefCell<Vec<String>>,
}

#[cfg(test)]
impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Everything written so far, joined with newlines.
    pub fn text(&self) -> String {
        self.lines.borrow().join("\n")
    }
}

#[cfg(test)]
impl Output for BufferOutput {
    fn header(&self, text: &str) {
        self.println(text);
    }

    fn subheader(&self, text: &str) {
        self.println(text);
    }

    fn println(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}
