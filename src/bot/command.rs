//! Tokenizing input lines into bot commands.

use crate::error::{CommandError, CommandResult};

/// A parsed bot command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Exit,
}

/// Verb, argument count and usage line of every recognised command.
pub const USAGES: &[(&str, usize, &str)] = &[
    ("hello", 0, "hello"),
    ("help", 0, "help"),
    ("add", 2, "add [name] [phone]"),
    ("change", 2, "change [name] [new_phone]"),
    ("phone", 1, "phone [name]"),
    ("all", 0, "all"),
    ("add-birthday", 2, "add-birthday [name] [DD.MM.YYYY]"),
    ("show-birthday", 1, "show-birthday [name]"),
    ("birthdays", 0, "birthdays"),
    ("close", 0, "close"),
    ("exit", 0, "exit"),
];

/// Parse one line of user input.
///
/// The line is split on whitespace. The first token is the verb, matched
/// case-insensitively; the rest are its arguments, which must match the
/// verb's arity exactly.
pub fn parse_input(line: &str) -> CommandResult<Command> {
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().ok_or(CommandError::Empty)?.to_lowercase();
    let args: Vec<String> = tokens.map(str::to_string).collect();

    let (_, arity, usage) = USAGES
        .iter()
        .find(|(known, _, _)| *known == verb)
        .ok_or_else(|| CommandError::Unknown(verb.clone()))?;

    if args.len() != *arity {
        return Err(CommandError::Arity {
            verb,
            usage: *usage,
        });
    }

    let mut args = args.into_iter();
    let mut next = || args.next().unwrap_or_default();

    let command = match verb.as_str() {
        "hello" => Command::Hello,
        "help" => Command::Help,
        "add" => Command::Add {
            name: next(),
            phone: next(),
        },
        "change" => Command::Change {
            name: next(),
            phone: next(),
        },
        "phone" => Command::Phone { name: next() },
        "all" => Command::All,
        "add-birthday" => Command::AddBirthday {
            name: next(),
            birthday: next(),
        },
        "show-birthday" => Command::ShowBirthday { name: next() },
        "birthdays" => Command::Birthdays,
        "close" | "exit" => Command::Exit,
        _ => return Err(CommandError::Unknown(verb.clone())),
    };

    Ok(command)
}
