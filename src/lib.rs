//! Contact Book - a personal address book with birthday reminders.
//!
//! This library provides the contact data model, the upcoming-birthday query
//! and the assistant bot that drives them from a line-oriented conversation.
//!
//! # Architecture
//!
//! - **domain**: Validated value types (name, phone, birthday)
//! - **models**: The `Record` aggregate and the `AddressBook` collection
//! - **birthdays**: Which contacts have a birthday in the coming week
//! - **services**: The contact service facade used by the bot
//! - **repositories**: Loading and saving the whole book
//! - **bot**: Command parsing, handlers and the interactive loop
//! - **config**: Configuration from environment variables and flags
//! - **error**: Custom error types for precise error handling

pub mod birthdays;
pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use birthdays::upcoming_birthdays;
pub use bot::{parse_input, Bot, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, ContactError, StoreError};
pub use models::{AddressBook, Record};
pub use repositories::{BookStore, JsonFileStore};
pub use services::{ContactService, ContactServiceImpl};
