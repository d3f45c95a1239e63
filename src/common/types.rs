use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const VISITOR_ID: &str = "user";
pub const ASSISTANT_ID: &str = "ai-assistant";

/// Who wrote a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub display_name: String,
    pub avatar: Option<String>,
}

impl Author {
    pub fn visitor() -> Self {
        Self {
            id: VISITOR_ID.to_string(),
            display_name: "You".to_string(),
            avatar: None,
        }
    }

    pub fn assistant() -> Self {
        Self {
            id: ASSISTANT_ID.to_string(),
            display_name: "AI Assistant".to_string(),
            avatar: Some("🤖".to_string()),
        }
    }
}

/// A single chat message. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub author: Author,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(author: Author, text: impl Into<String>) -> Self {
        Self::at(author, text, Utc::now())
    }

    pub fn at(author: Author, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            author,
            created_at,
        }
    }

    pub fn from_visitor(text: impl Into<String>) -> Self {
        Self::new(Author::visitor(), text)
    }

    pub fn from_assistant(text: impl Into<String>) -> Self {
        Self::new(Author::assistant(), text)
    }

    pub fn is_from_visitor(&self) -> bool {
        self.author.id == VISITOR_ID
    }
}
