// prompt.rs
use crate::domain::ViewMode;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

pub const MODE_QUESTION: &str = "If you are a client, enter your apartment listings (a series of comma-separated numbers). Otherwise, press enter";

/// A blocking question/answer surface. `Ok(None)` means the user cancelled.
pub trait Prompt {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// Asks on a writer and reads one line from a reader (stdin/stdout in `main`).
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{question}\n> ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            // A closed terminal can never answer, so re-asking would spin.
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a view mode was chosen",
            ));
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Asks until the answer selects a mode. Cancelled and malformed answers are
/// asked again; only I/O failures end the loop.
pub fn select_mode<P: Prompt + ?Sized>(prompt: &mut P) -> io::Result<ViewMode> {
    loop {
        let Some(answer) = prompt.ask(MODE_QUESTION)? else {
            continue;
        };

        match ViewMode::parse_selection(&answer) {
            Some(mode) => {
                info!(mode = mode.label(), "View mode selected");
                return Ok(mode);
            }
            None => warn!(answer = %answer, "Unrecognised view mode answer, asking again"),
        }
    }
}
