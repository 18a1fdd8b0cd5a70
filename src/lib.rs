// Core modules
pub mod codegen;
pub mod config;
pub mod error;
pub mod escape;
pub mod lexer;

// Re-export key types for public API
pub use codegen::{HtmlRenderer, HtmlWriter, OutputConfig, OutputConfigBuilder};
pub use config::{EngineConfig, EngineConfigBuilder, LexerConfig, MarkdownEngine};
pub use error::{MarkdownError, Result};
pub use escape::escape_html;
pub use lexer::{Lexer, Position, Token, TokenKind};

/// Converts Markdown text to HTML.
///
/// This is the main entry point. It lexes the whole input with the default
/// configuration and renders the resulting tokens. It never fails: malformed
/// constructs come out as literal text, and an empty input gives an empty
/// string.
///
/// # Examples
///
/// ```
/// use mdlite::render_markdown;
///
/// let html = render_markdown("- Item 1\n- Item 2");
/// assert_eq!(html, "<ul>\n<li>Item 1</li>\n<li>Item 2</li>\n</ul>\n");
/// ```
pub fn render_markdown(input: &str) -> String {
    codegen::render(&tokenize(input))
}

/// Lexes Markdown text into its token stream using the default configuration.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}
