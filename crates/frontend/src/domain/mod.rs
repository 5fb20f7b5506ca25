pub mod a001_model;
pub mod a002_conversation;
