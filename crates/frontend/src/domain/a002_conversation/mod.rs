pub mod store;
pub mod ui;

pub use store::{use_conversation, ConversationStore};
