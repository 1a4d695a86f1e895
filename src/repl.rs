//! The read-eval-print loop.
//!
//! Single-threaded and synchronous: one prompt, one line, one reply, until
//! `close`/`exit` or end of input. Generic over the reader and writer so
//! whole sessions run under test without a terminal.

use crate::commands::{self, Flow};
use crate::models::AddressBook;
use std::io::{self, BufRead, Write};

/// Run the command loop over `input`, writing all prompts and replies to
/// `output`. Returns once the user closes the session or `input` is
/// exhausted; the caller persists the book afterwards.
pub fn run<R, W>(book: &mut AddressBook, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut lines = input.lines();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        // EOF behaves like `close` so piped sessions end cleanly.
        let Some(line) = lines.next() else {
            writeln!(output, "Good bye!")?;
            return Ok(());
        };

        match commands::dispatch(book, &line?) {
            Flow::Continue(reply) => writeln!(output, "{}", reply)?,
            Flow::Exit => {
                writeln!(output, "Good bye!")?;
                return Ok(());
            }
        }
    }
}
