use serde::{Deserialize, Serialize};

/// One turn of a conversation: a role (`"system"`, `"user"`, `"model"`) and its parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    /// A block the provider returned that carries no plain text (reasoning,
    /// images, tool use). Only the block kind is kept.
    Other {
        kind: String,
    },
}

impl Content {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into(), parts: Vec::new() }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Text { text: text.into() });
        self
    }

    /// First text part of this content, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.parts.iter().find_map(Part::text)
    }
}

impl Part {
    /// Returns the text content if this is a Text part.
    pub fn text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::Other { .. } => None,
        }
    }

    pub fn text_part(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_with_text() {
        let content = Content::new("user").with_text("hello");
        assert_eq!(content.role, "user");
        assert_eq!(content.parts.len(), 1);
        assert_eq!(content.parts[0].text(), Some("hello"));
    }

    #[test]
    fn test_first_text_skips_non_text_blocks() {
        let content = Content {
            role: "model".to_string(),
            parts: vec![
                Part::Other { kind: "reasoning".to_string() },
                Part::text_part("first"),
                Part::text_part("second"),
            ],
        };
        assert_eq!(content.first_text(), Some("first"));
    }

    #[test]
    fn test_first_text_none_without_text() {
        let content = Content {
            role: "model".to_string(),
            parts: vec![Part::Other { kind: "image".into() }],
        };
        assert_eq!(content.first_text(), None);
    }
}
