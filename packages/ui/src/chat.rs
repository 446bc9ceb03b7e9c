//! Conversation state of the assistant chat page.

pub const GREETING: &str =
    "Hello! I'm your AI attendance assistant. How can I help you today?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    /// Local wall-clock time, `HH:MM`.
    pub timestamp: String,
}

/// Ordered messages plus the in-flight flag. Lives only as long as the page.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    next_id: u64,
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    /// A log holding only the assistant's greeting.
    pub fn new() -> Self {
        let mut log = Self {
            next_id: 0,
            messages: Vec::new(),
            pending: false,
        };
        log.append(Sender::Assistant, GREETING.to_string());
        log
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    fn append(&mut self, sender: Sender, content: String) {
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_id,
            content,
            sender,
            timestamp: now(),
        });
    }

    /// Record the user's message and mark a request in flight.
    ///
    /// Returns the text to send, or `None` when the input is blank or a
    /// request is already pending.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.append(Sender::User, text.to_string());
        self.pending = true;
        Some(text.to_string())
    }

    pub fn receive(&mut self, reply: String) {
        self.append(Sender::Assistant, reply);
        self.pending = false;
    }

    /// The request failed; the user's message stays, nothing is appended.
    pub fn fail(&mut self) {
        self.pending = false;
    }
}

fn now() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}
