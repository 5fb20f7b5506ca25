pub mod sender;
pub mod theme;

pub use sender::Sender;
pub use theme::Theme;
