//! Command parsing and dispatch.
//!
//! A line of input becomes `(command, args)` via [`parse_input`]; [`dispatch`]
//! routes it to a handler and converts any [`CommandError`] to its display
//! string. This is the single point where errors turn into user-facing text.

mod handlers;

use crate::error::CommandResult;
use crate::models::AddressBook;

/// What the loop should do after one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the reply and keep reading
    Continue(String),
    /// Say goodbye and stop the loop
    Exit,
}

/// Split a line into a lowercased command and the untouched remainder.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.split_once(char::is_whitespace) {
        Some((command, args)) => Some((command.to_lowercase(), args)),
        None => Some((trimmed.to_lowercase(), "")),
    }
}

/// Route one input line to its handler and render the reply.
pub fn dispatch(book: &mut AddressBook, line: &str) -> Flow {
    let Some((command, args)) = parse_input(line) else {
        return Flow::Continue("Invalid command.".to_string());
    };

    let reply = match command.as_str() {
        "close" | "exit" => return Flow::Exit,
        "hello" => "How can I help you?".to_string(),
        "add" => render(handlers::add_contact(book, args)),
        "change" => render(handlers::change_contact(book, args)),
        "phone" => render(handlers::show_phone(book, args)),
        "all" => handlers::show_all(book),
        "add-birthday" => render(handlers::add_birthday(book, args)),
        "show-birthday" => render(handlers::show_birthday(book, args)),
        "birthdays" => {
            handlers::show_birthdays(book, chrono::Local::now().date_naive())
        }
        _ => "Invalid command.".to_string(),
    };

    Flow::Continue(reply)
}

/// The error-to-message translation step: any handler failure becomes its
/// `Display` line.
fn render(result: CommandResult<String>) -> String {
    result.unwrap_or_else(|e| e.to_string())
}
