pub mod events;
pub mod types;

pub use events::ChatEvent;
pub use types::{Author, ChatMessage};
