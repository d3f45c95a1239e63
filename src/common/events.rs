use crate::common::types::ChatMessage;

/// Events delivered from background reply tasks to the UI thread.
#[derive(Debug, Clone)]
pub enum ChatEvent {
    ReplyReady(ChatMessage),
}
