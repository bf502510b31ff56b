//! Console used by the I/O builtins.
//!
//! Output and input can be directed to different places:
//! - Stdout: the real terminal (default)
//! - Buffer: captured output and scripted input, for tests and embedding
//! - Silent: output discarded, no input
//!
//! Uses enum dispatch instead of trait objects; the set of consoles is
//! fixed.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// ANSI "erase display, cursor home".
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Console backed by the process's stdout and stdin.
#[derive(Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    pub fn print(&self, msg: &str) {
        print!("{msg}");
    }

    /// Read one line without its terminator. `None` at end of input.
    pub fn read_line(&self) -> Option<String> {
        // Prompts written with `print` must be visible before blocking.
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(trim_line_end(line)),
        }
    }

    pub fn clear(&self) {
        print!("{CLEAR_SCREEN}");
        let _ = io::stdout().flush();
    }
}

fn trim_line_end(mut line: String) -> String {
    while line.ends_with(&['\n', '\r'][..]) {
        line.pop();
    }
    line
}

/// Console that records output and replays queued input lines.
pub struct BufferConsole {
    output: Mutex<String>,
    input: Mutex<VecDeque<String>>,
}

impl BufferConsole {
    pub fn new() -> Self {
        BufferConsole {
            output: Mutex::new(String::new()),
            input: Mutex::new(VecDeque::new()),
        }
    }

    /// Buffer whose `read_line` returns `lines` in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferConsole {
            output: Mutex::new(String::new()),
            input: Mutex::new(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.output.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.output.lock().push_str(msg);
    }

    pub fn read_line(&self) -> Option<String> {
        self.input.lock().pop_front()
    }

    pub fn output(&self) -> String {
        self.output.lock().clone()
    }

    /// Clearing the screen empties the captured output.
    pub fn clear(&self) {
        self.output.lock().clear();
    }
}

impl Default for BufferConsole {
    fn default() -> Self {
        Self::new()
    }
}

pub enum ConsoleHandler {
    Stdout(StdConsole),
    Buffer(BufferConsole),
    Silent,
}

impl ConsoleHandler {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(c) => c.println(msg),
            Self::Buffer(c) => c.println(msg),
            Self::Silent => {}
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(c) => c.print(msg),
            Self::Buffer(c) => c.print(msg),
            Self::Silent => {}
        }
    }

    pub fn read_line(&self) -> Option<String> {
        match self {
            Self::Stdout(c) => c.read_line(),
            Self::Buffer(c) => c.read_line(),
            Self::Silent => None,
        }
    }

    pub fn clear(&self) {
        match self {
            Self::Stdout(c) => c.clear(),
            Self::Buffer(c) => c.clear(),
            Self::Silent => {}
        }
    }

    /// Captured output. Empty for consoles that don't capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(c) => c.output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }
}

pub type SharedConsole = Arc<ConsoleHandler>;

pub fn stdout_console() -> SharedConsole {
    Arc::new(ConsoleHandler::Stdout(StdConsole))
}

pub fn buffer_console() -> SharedConsole {
    Arc::new(ConsoleHandler::Buffer(BufferConsole::new()))
}

/// Buffer console pre-loaded with input lines.
pub fn scripted_console<I, S>(lines: I) -> SharedConsole
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(ConsoleHandler::Buffer(BufferConsole::with_input(lines)))
}

pub fn silent_console() -> SharedConsole {
    Arc::new(ConsoleHandler::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_println_appends_newline() {
        let console = BufferConsole::new();
        console.println("hello");
        console.print("a");
        console.print("b");
        assert_eq!(console.output(), "hello\nab");
    }

    #[test]
    fn buffer_replays_input_in_order() {
        let console = BufferConsole::with_input(["one", "two", "three"]);
        assert_eq!(console.read_line().as_deref(), Some("one"));
        assert_eq!(console.read_line().as_deref(), Some("two"));
        assert_eq!(console.read_line().as_deref(), Some("three"));
        assert_eq!(console.read_line(), None);
    }

    #[test]
    fn clear_empties_buffer() {
        let console = buffer_console();
        console.println("x");
        console.clear();
        assert_eq!(console.output(), "");
    }

    #[test]
    fn silent_discards_everything() {
        let console = silent_console();
        console.println("x");
        assert_eq!(console.output(), "");
        assert_eq!(console.read_line(), None);
    }

    #[test]
    fn line_terminators_are_trimmed() {
        assert_eq!(trim_line_end("abc\r\n".to_string()), "abc");
        assert_eq!(trim_line_end("abc".to_string()), "abc");
    }
}
