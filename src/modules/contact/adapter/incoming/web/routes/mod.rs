mod get_contact_messages;
mod mark_message_replied;
mod submit_contact_message;

pub use get_contact_messages::*;
pub use mark_message_replied::*;
pub use submit_contact_message::*;
