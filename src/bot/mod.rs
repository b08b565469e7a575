//! The assistant bot: a line-oriented front end over the contact service.
//!
//! - **command**: tokenizes a line into a [`Command`]
//! - **handlers**: runs a command and renders the [`Reply`]
//! - **repl**: the interactive loop that loads, converses and saves

pub mod command;
pub mod handlers;
pub mod repl;

pub use command::{parse_input, Command};
pub use handlers::{execute, execute_on, Reply};
pub use repl::Bot;
