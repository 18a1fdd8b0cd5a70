use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A classified fragment of the input with its extracted content.
///
/// Tokens own their strings and never refer back to the lexer that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Token {
    /// Literal text, including degraded markup.
    Text(String),
    /// `# Title` through `###### Title`. `level` is in `1..=6`.
    Heading { level: u8, content: String },
    /// `**bold**`
    Bold(String),
    /// `*italic*`
    Italic(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](src)`
    Image { alt: String, src: String },
    /// `- item`
    ListItem(String),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Text(_) => TokenKind::Text,
            Token::Heading { level, .. } => TokenKind::Heading(*level),
            Token::Bold(_) => TokenKind::Bold,
            Token::Italic(_) => TokenKind::Italic,
            Token::Link { .. } => TokenKind::Link,
            Token::Image { .. } => TokenKind::Image,
            Token::ListItem(_) => TokenKind::ListItem,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Token::Text(content.into())
    }

    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        Token::Heading {
            level,
            content: content.into(),
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Token::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Token::Image {
            alt: alt.into(),
            src: src.into(),
        }
    }
}

/// Field-less mirror of [`Token`], used by the renderer to decide block
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    Text,
    Heading(u8),
    Bold,
    Italic,
    Link,
    Image,
    ListItem,
}

impl TokenKind {
    /// Block kinds force the surrounding paragraph to close.
    pub fn is_block(self) -> bool {
        matches!(self, TokenKind::Heading(_) | TokenKind::ListItem)
    }

    /// Kinds that live inside a paragraph. Plain text counts as inline.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            TokenKind::Text
                | TokenKind::Bold
                | TokenKind::Italic
                | TokenKind::Link
                | TokenKind::Image
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Text => f.write_str("text"),
            TokenKind::Heading(level) => write!(f, "heading({level})"),
            TokenKind::Bold => f.write_str("bold"),
            TokenKind::Italic => f.write_str("italic"),
            TokenKind::Link => f.write_str("link"),
            TokenKind::Image => f.write_str("image"),
            TokenKind::ListItem => f.write_str("list_item"),
        }
    }
}
