//! Command handlers: run a parsed command against the contact service and
//! render the reply shown to the user.

use super::command::{Command, USAGES};
use crate::services::ContactService;
use chrono::{Local, NaiveDate};
use tracing::warn;

/// Text to show the user, and whether the session should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub exit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit: false,
        }
    }

    fn farewell() -> Self {
        Self {
            text: "Good bye!".to_string(),
            exit: true,
        }
    }
}

/// Execute `command`, using the local calendar date for birthday queries.
pub fn execute<C: ContactService>(service: &mut C, command: Command) -> Reply {
    execute_on(service, command, Local::now().date_naive())
}

/// Execute `command` as if the current date were `today`.
///
/// Failures are rendered into the reply; no error escapes a single command.
pub fn execute_on<C: ContactService>(service: &mut C, command: Command, today: NaiveDate) -> Reply {
    match command {
        Command::Hello => Reply::say("How can I help you?"),
        Command::Help => Reply::say(help_text()),
        Command::Exit => Reply::farewell(),

        Command::Add { name, phone } => match service.add_contact(&name, &phone) {
            Ok(()) => Reply::say("Contact added successfully."),
            Err(e) => rejected("add", e),
        },

        Command::Change { name, phone } => match service.change_phone(&name, &phone) {
            Ok(()) => Reply::say("Phone number changed successfully."),
            Err(e) => rejected("change", e),
        },

        Command::Phone { name } => match service.get_phone(&name) {
            Some(record) => Reply::say(format!("The phone number for {name} is {record}.")),
            None => Reply::say("Contact not found."),
        },

        Command::All => {
            let book = service.list_all();
            let mut lines = vec!["All contacts:".to_string()];
            lines.extend(book.iter().map(|(name, record)| format!("{name}: {record}")));
            Reply::say(lines.join("\n"))
        }

        Command::AddBirthday { name, birthday } => {
            match service.add_birthday(&name, &birthday) {
                Ok(()) => Reply::say("Birthday added successfully."),
                Err(e) => rejected("add-birthday", e),
            }
        }

        Command::ShowBirthday { name } => match service.show_birthday(&name) {
            Ok(Some(birthday)) => Reply::say(format!("The birthday for {name} is {birthday}.")),
            Ok(None) => Reply::say("No birthday found."),
            Err(e) => rejected("show-birthday", e),
        },

        Command::Birthdays => {
            let names = service.upcoming_birthday_names_on(today);
            let mut lines = vec!["Upcoming birthdays for the next week:".to_string()];
            if names.is_empty() {
                lines.push("No upcoming birthdays.".to_string());
            }
            lines.extend(names.iter().map(ToString::to_string));
            Reply::say(lines.join("\n"))
        }
    }
}

fn rejected(verb: &str, error: impl std::fmt::Display) -> Reply {
    warn!(verb, %error, "Command rejected");
    Reply::say(error.to_string())
}

fn help_text() -> String {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(USAGES.iter().map(|(_, _, usage)| format!("  {usage}")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::command::parse_input;
    use crate::services::ContactServiceImpl;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn run(service: &mut ContactServiceImpl, line: &str) -> String {
        let command = parse_input(line).unwrap();
        execute_on(service, command, today()).text
    }

    #[test]
    fn test_hello_and_exit() {
        let mut service = ContactServiceImpl::default();
        assert_eq!(run(&mut service, "hello"), "How can I help you?");

        let reply = execute_on(&mut service, Command::Exit, today());
        assert_eq!(reply.text, "Good bye!");
        assert!(reply.exit);
    }

    #[test]
    fn test_add_and_phone() {
        let mut service = ContactServiceImpl::default();
        assert_eq!(
            run(&mut service, "add Alice 1234567890"),
            "Contact added successfully."
        );
        assert_eq!(
            run(&mut service, "phone Alice"),
            "The phone number for Alice is Contact name: Alice, phones: 1234567890."
        );
        assert_eq!(run(&mut service, "phone Bob"), "Contact not found.");
    }

    #[test]
    fn test_add_invalid_phone_reports_error() {
        let mut service = ContactServiceImpl::default();
        assert_eq!(
            run(&mut service, "add Alice 12345"),
            "Phone number must contain 10 digits."
        );
    }

    #[test]
    fn test_change() {
        let mut service = ContactServiceImpl::default();
        run(&mut service, "add Bob 5555555555");
        assert_eq!(
            run(&mut service, "change Bob 1112223334"),
            "Phone number changed successfully."
        );
        assert!(run(&mut service, "phone Bob").ends_with("phones: 1112223334."));
    }

    #[test]
    fn test_all() {
        let mut service = ContactServiceImpl::default();
        assert_eq!(run(&mut service, "all"), "All contacts:");

        run(&mut service, "add Bob 5555555555");
        run(&mut service, "add Alice 1234567890");
        assert_eq!(
            run(&mut service, "all"),
            "All contacts:\n\
             Alice: Contact name: Alice, phones: 1234567890\n\
             Bob: Contact name: Bob, phones: 5555555555"
        );
    }

    #[test]
    fn test_birthday_commands() {
        let mut service = ContactServiceImpl::default();
        assert_eq!(
            run(&mut service, "add-birthday Carol 01.01.1990"),
            "Contact not found."
        );
        assert_eq!(run(&mut service, "show-birthday Carol"), "Contact not found.");

        run(&mut service, "add Carol 1234567890");
        assert_eq!(run(&mut service, "show-birthday Carol"), "No birthday found.");
        assert_eq!(
            run(&mut service, "add-birthday Carol 1990-01-01"),
            "Invalid date format. Use DD.MM.YYYY"
        );
        assert_eq!(
            run(&mut service, "add-birthday Carol 15.03.1990"),
            "Birthday added successfully."
        );
        assert_eq!(
            run(&mut service, "show-birthday Carol"),
            "The birthday for Carol is 15.03.1990."
        );
    }

    #[test]
    fn test_birthdays() {
        let mut service = ContactServiceImpl::default();
        assert_eq!(
            run(&mut service, "birthdays"),
            "Upcoming birthdays for the next week:\nNo upcoming birthdays."
        );

        run(&mut service, "add Carol 1234567890");
        run(&mut service, "add-birthday Carol 15.03.1990");
        assert_eq!(
            run(&mut service, "birthdays"),
            "Upcoming birthdays for the next week:\nCarol"
        );
    }

    #[test]
    fn test_help_lists_usages() {
        let mut service = ContactServiceImpl::default();
        let text = run(&mut service, "help");
        assert!(text.contains("add [name] [phone]"));
        assert!(text.contains("show-birthday [name]"));
    }
}
