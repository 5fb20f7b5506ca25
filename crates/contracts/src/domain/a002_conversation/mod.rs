pub mod message;
pub mod parameters;
pub mod reply;
pub mod session;

pub use message::ChatMessage;
pub use parameters::Parameters;
pub use reply::{compose_reply, SimulatedReply, SimulationFailure, Submission};
pub use session::Session;
