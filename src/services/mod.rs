//! Application service layer.
//!
//! Services contain business logic over the address book. They provide a
//! clean boundary between the bot's command handlers and the data model.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};
