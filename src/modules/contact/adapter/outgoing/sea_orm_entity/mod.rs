pub mod contact_messages;
