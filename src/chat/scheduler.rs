use std::time::Duration;

use eframe::egui;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::common::{ChatEvent, ChatMessage};

const CHANNEL_CAPACITY: usize = 100;

/// Delivers assistant replies after a fixed delay.
///
/// Each scheduled reply is its own tokio task; finished replies come back over
/// a channel that the UI thread drains once per frame.
pub struct ReplyScheduler {
    runtime: Handle,
    delay: Duration,
    event_sender: mpsc::Sender<ChatEvent>,
    event_receiver: mpsc::Receiver<ChatEvent>,
    in_flight: Vec<AbortHandle>,
    repaint: Option<egui::Context>,
}

impl ReplyScheduler {
    pub fn new(runtime: Handle, delay: Duration) -> Self {
        let (event_sender, event_receiver) = mpsc::channel(CHANNEL_CAPACITY);
        Self {
            runtime,
            delay,
            event_sender,
            event_receiver,
            in_flight: Vec::new(),
            repaint: None,
        }
    }

    /// Wake the UI when a reply lands so it is painted without user input.
    pub fn attach_repaint(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, body: String) {
        let delay = self.delay;
        let sender = self.event_sender.clone();
        let repaint = self.repaint.clone();

        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // Stamped when the timer fires, not when it was scheduled.
            let reply = ChatMessage::from_assistant(body);
            if let Err(err) = sender.send(ChatEvent::ReplyReady(reply)).await {
                log::debug!("Reply dropped, chat receiver is gone: {err}");
                return;
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });

        self.in_flight.retain(|handle| !handle.is_finished());
        self.in_flight.push(task.abort_handle());
    }

    /// Replies whose timer has fired, in arrival order.
    pub fn drain(&mut self) -> Vec<ChatMessage> {
        let mut ready = Vec::new();
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                ChatEvent::ReplyReady(message) => ready.push(message),
            }
        }
        ready
    }

    pub fn pending(&self) -> usize {
        self.in_flight
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Abort every reply that has not fired yet. Returns how many were aborted.
    pub fn cancel_all(&mut self) -> usize {
        let pending = self.pending();
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
        pending
    }
}
