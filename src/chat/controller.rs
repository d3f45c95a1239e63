use std::iter;
use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};

use crate::common::{Author, ChatMessage};

use super::responses::{CannedResponses, ReplySelector, CLEARED_GREETING, WELCOME_GREETING};
use super::scheduler::ReplyScheduler;

/// State and behaviour of the floating chat widget.
///
/// The conversation is an immutable shared slice: appends build a new sequence
/// so snapshots handed to the view never change underneath it.
pub struct ChatController {
    open: bool,
    input: String,
    conversation: Arc<[ChatMessage]>,
    responses: CannedResponses,
    selector: Box<dyn ReplySelector>,
    scheduler: ReplyScheduler,
    cancel_on_clear: bool,
    scroll_request: bool,
}

impl ChatController {
    pub fn new(
        responses: CannedResponses,
        selector: Box<dyn ReplySelector>,
        scheduler: ReplyScheduler,
    ) -> Self {
        let greeting = ChatMessage::at(
            Author::assistant(),
            WELCOME_GREETING,
            Utc::now() - ChronoDuration::minutes(1),
        );
        Self {
            open: false,
            input: String::new(),
            conversation: Arc::from(vec![greeting]),
            responses,
            selector,
            scheduler,
            cancel_on_clear: false,
            scroll_request: true,
        }
    }

    /// Abort replies still in flight when the conversation is cleared.
    pub fn with_cancel_on_clear(mut self, cancel: bool) -> Self {
        self.cancel_on_clear = cancel;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.scroll_request = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Snapshot of the conversation in display order.
    pub fn conversation(&self) -> Arc<[ChatMessage]> {
        Arc::clone(&self.conversation)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.conversation
    }

    pub fn pending_replies(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn attach_repaint(&mut self, ctx: eframe::egui::Context) {
        self.scheduler.attach_repaint(ctx);
    }

    /// Submit whatever is in the input buffer. Blank input stays untouched.
    pub fn submit_input(&mut self) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }
        let text = std::mem::take(&mut self.input);
        self.submit(&text)
    }

    /// Append a visitor message now and schedule one canned reply.
    pub fn submit(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        self.append(ChatMessage::from_visitor(text));
        self.input.clear();

        let body = self.responses.pick(self.selector.as_mut()).to_string();
        self.scheduler.schedule(body);
        log::debug!(
            "Visitor message queued a reply in {:?}",
            self.scheduler.delay()
        );
        true
    }

    /// Replace the conversation with a fresh greeting.
    pub fn clear(&mut self) {
        if self.cancel_on_clear {
            let aborted = self.scheduler.cancel_all();
            log::debug!("Aborted {aborted} pending replies on clear");
        }
        self.conversation = Arc::from(vec![ChatMessage::from_assistant(CLEARED_GREETING)]);
        self.scroll_request = true;
        log::info!("Conversation cleared");
    }

    /// Append replies whose timer fired. Returns how many were appended.
    pub fn poll(&mut self) -> usize {
        let ready = self.scheduler.drain();
        let count = ready.len();
        for reply in ready {
            self.append(reply);
        }
        if count > 0 {
            log::debug!("Delivered {count} assistant replies");
        }
        count
    }

    /// Whether the message list should scroll to the bottom on this frame.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_request)
    }

    fn append(&mut self, message: ChatMessage) {
        self.conversation = self
            .conversation
            .iter()
            .cloned()
            .chain(iter::once(message))
            .collect();
        self.scroll_request = true;
    }
}
