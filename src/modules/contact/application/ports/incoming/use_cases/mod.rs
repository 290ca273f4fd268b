mod list_messages;
mod mark_message_replied;
mod submit_message;

pub use list_messages::{ListMessagesError, ListMessagesUseCase, MESSAGE_LIST_LIMIT};
pub use mark_message_replied::{MarkMessageRepliedError, MarkMessageRepliedUseCase};
pub use submit_message::{SubmitMessageError, SubmitMessageUseCase};
