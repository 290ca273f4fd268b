mod list_messages_service;
mod mark_message_replied_service;
mod submit_message_service;

pub use list_messages_service::ListMessagesService;
pub use mark_message_replied_service::MarkMessageRepliedService;
pub use submit_message_service::SubmitMessageService;
