pub mod controller;
pub mod responses;
pub mod scheduler;

pub use controller::ChatController;
pub use responses::{CannedResponses, RandomSelector, ReplySelector};
pub use scheduler::ReplyScheduler;
