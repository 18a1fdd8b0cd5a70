//! Lexical analysis for the supported Markdown subset.
//!
//! The lexer walks the input one grapheme cluster at a time and produces
//! [`Token`]s lazily. It never fails: every malformed construct degrades to a
//! [`Token::Text`] that keeps the original characters.
use crate::config::LexerConfig;
use tracing::trace;

mod cursor;
mod position;
mod token;

pub use cursor::CharStream;
pub use position::Position;
pub use token::{Token, TokenKind};

/// Graphemes that end a plain text run.
fn is_marker(grapheme: &str) -> bool {
    matches!(grapheme, "#" | "*" | "[" | "!" | "-")
}

/// Outcome of scanning a `[text](url)` construct.
enum LinkScan {
    Complete { text: String, url: String },
    /// The literal characters that were consumed, with `\[` unescaped.
    Degraded(String),
}

/// Single-pass tokenizer over a borrowed input.
///
/// Each call to [`Lexer::next_token`] advances the cursor; the stream is
/// finite and cannot be rewound.
pub struct Lexer<'input> {
    char_stream: CharStream<'input>,
    config: LexerConfig,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    pub fn with_config(input: &'input str, config: LexerConfig) -> Self {
        Lexer {
            char_stream: CharStream::new(input),
            config,
        }
    }

    /// Returns the current cursor position.
    pub fn position(&self) -> Position {
        self.char_stream.position()
    }

    /// Produces the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            self.skip_line_breaks();
            let start = self.char_stream.position();

            let token = match self.char_stream.current()? {
                "#" => self.tokenize_heading(),
                "*" => self.tokenize_emphasis(),
                "[" => self.tokenize_link(),
                "!" => self.tokenize_image(),
                "-" => self.tokenize_list_item(),
                _ => match self.tokenize_text() {
                    Some(token) => token,
                    None => continue,
                },
            };

            trace!(kind = %token.kind(), at = %start, "emitted token");
            return Some(token);
        }
    }

    fn skip_line_breaks(&mut self) {
        while self.char_stream.current_is_line_break() {
            self.char_stream.advance();
        }
    }

    /// Advances to the end of the current line and returns what was passed.
    /// The line break itself is left in place.
    fn take_until_line_end(&mut self) -> &'input str {
        let start = self.char_stream.offset();
        while !self.char_stream.is_at_end() && !self.char_stream.current_is_line_break() {
            self.char_stream.advance();
        }
        self.char_stream.slice_from(start)
    }

    /// Like [`Self::take_until_line_end`], but also stops before `delimiter`.
    fn take_until(&mut self, delimiter: char) -> &'input str {
        let start = self.char_stream.offset();
        while !self.char_stream.is_at_end()
            && !self.char_stream.current_is_line_break()
            && !self.char_stream.current_is(delimiter)
        {
            self.char_stream.advance();
        }
        self.char_stream.slice_from(start)
    }

    fn consume_line_break(&mut self) {
        if self.char_stream.current_is_line_break() {
            self.char_stream.advance();
        }
    }

    fn degrade(&self, literal: String, construct: &str) -> Token {
        trace!(construct, at = %self.char_stream.position(), "degraded to text");
        Token::Text(literal)
    }

    /// Tokenizes `#` runs into headings.
    fn tokenize_heading(&mut self) -> Token {
        let start = self.char_stream.offset();
        let at_line_start = self.char_stream.at_line_start();

        let mut level = 0u8;
        while level < 6 && self.char_stream.current_is('#') {
            level += 1;
            self.char_stream.advance();
        }

        if self.config.block_markers_at_line_start && !at_line_start {
            return Token::Text(self.char_stream.slice_from(start).to_owned());
        }

        if !self.char_stream.current_is_inline_whitespace()
            && !self.char_stream.current_is_line_break()
        {
            self.take_until_line_end();
            let literal = self.char_stream.slice_from(start).to_owned();
            self.consume_line_break();
            return self.degrade(literal, "heading");
        }

        while self.char_stream.current_is_inline_whitespace() {
            self.char_stream.advance();
        }
        let content = self.take_until_line_end().to_owned();
        self.consume_line_break();

        Token::Heading { level, content }
    }

    /// Tokenizes `*italic*` and `**bold**`.
    fn tokenize_emphasis(&mut self) -> Token {
        self.char_stream.advance();

        if self.char_stream.current_is('*') {
            self.char_stream.advance();
            let content = self.take_until('*');

            if self.char_stream.current_is('*') && self.char_stream.peek() == Some("*") {
                self.char_stream.advance();
                self.char_stream.advance();
                return Token::Bold(content.to_owned());
            }

            let mut literal = format!("**{content}");
            if self.char_stream.current_is('*') {
                self.char_stream.advance();
                literal.push('*');
            }
            return self.degrade(literal, "bold");
        }

        let content = self.take_until('*');
        if self.char_stream.current_is('*') {
            self.char_stream.advance();
            Token::Italic(content.to_owned())
        } else {
            self.degrade(format!("*{content}"), "italic")
        }
    }

    fn tokenize_link(&mut self) -> Token {
        match self.scan_link() {
            LinkScan::Complete { text, url } => Token::Link { text, url },
            LinkScan::Degraded(literal) => self.degrade(literal, "link"),
        }
    }

    /// Tokenizes `![alt](src)`; a bare `!` is literal text.
    fn tokenize_image(&mut self) -> Token {
        self.char_stream.advance();
        if !self.char_stream.current_is('[') {
            return Token::Text("!".to_owned());
        }

        match self.scan_link() {
            LinkScan::Complete { text, url } => Token::Image { alt: text, src: url },
            LinkScan::Degraded(literal) => self.degrade(format!("!{literal}"), "image"),
        }
    }

    /// Scans `[text](url)` starting at the opening bracket.
    ///
    /// Brackets nest, and `\[` stands for a literal `[` that does not count
    /// towards nesting. The bracketed text may span lines; the url may not.
    fn scan_link(&mut self) -> LinkScan {
        self.char_stream.advance();

        let mut text = String::new();
        let mut depth = 1usize;
        let mut balanced = false;

        while let Some(grapheme) = self.char_stream.current() {
            if grapheme == "\\" && self.char_stream.peek() == Some("[") {
                text.push('[');
                self.char_stream.advance();
                self.char_stream.advance();
                continue;
            }

            match grapheme {
                "[" => depth += 1,
                "]" => {
                    depth -= 1;
                    if depth == 0 {
                        self.char_stream.advance();
                        balanced = true;
                        break;
                    }
                }
                _ => {}
            }
            text.push_str(grapheme);
            self.char_stream.advance();
        }

        if !balanced {
            return LinkScan::Degraded(format!("[{text}"));
        }
        if !self.char_stream.current_is('(') {
            return LinkScan::Degraded(format!("[{text}]"));
        }

        self.char_stream.advance();
        let url = self.take_until(')');
        if !self.char_stream.current_is(')') {
            return LinkScan::Degraded(format!("[{text}]({url}"));
        }
        self.char_stream.advance();

        LinkScan::Complete {
            text,
            url: url.to_owned(),
        }
    }

    /// Tokenizes `- item` lines.
    fn tokenize_list_item(&mut self) -> Token {
        let at_line_start = self.char_stream.at_line_start();
        self.char_stream.advance();

        if self.config.block_markers_at_line_start && !at_line_start {
            return Token::Text("-".to_owned());
        }

        if !self.char_stream.current_is_inline_whitespace()
            && !self.char_stream.current_is_line_break()
        {
            let rest = self.take_until_line_end();
            self.consume_line_break();
            return self.degrade(format!("-{rest}"), "list item");
        }

        // A line break after the marker counts as its whitespace; the item
        // body is then the following line.
        self.char_stream.advance();
        let content = self.take_until_line_end().to_owned();
        self.consume_line_break();

        Token::ListItem(content)
    }

    /// Collects plain text up to the next marker or blank line.
    ///
    /// Returns `None` when the run is empty once trailing line breaks are
    /// trimmed.
    fn tokenize_text(&mut self) -> Option<Token> {
        let start = self.char_stream.offset();

        while let Some(grapheme) = self.char_stream.current() {
            if is_marker(grapheme) || self.char_stream.at_blank_line() {
                break;
            }
            self.char_stream.advance();
        }

        let run = self
            .char_stream
            .slice_from(start)
            .trim_end_matches(|c: char| c == '\n' || c == '\r');

        if run.is_empty() {
            return None;
        }
        Some(Token::Text(run.to_owned()))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
