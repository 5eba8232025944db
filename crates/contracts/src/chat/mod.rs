pub mod conversation;
pub mod share;

pub use conversation::{Conversation, FileAttachment, Language, Message};
