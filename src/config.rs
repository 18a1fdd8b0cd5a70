//! Configuration module for the Markdown engine public API.
//!
//! This module provides configuration structs and the `MarkdownEngine`
//! that ties the lexer and the HTML renderer together.
use crate::codegen::{HtmlRenderer, OutputConfig};
use crate::error::{MarkdownError, Result};
use crate::lexer::{Lexer, Token};
use tracing::debug;

/// Configuration for the lexer component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    /// Only recognize `#` headings and `-` list items at the start of a line.
    /// Mid-line markers are then kept as literal text. Off by default.
    pub block_markers_at_line_start: bool,
    /// Maximum input size in bytes, checked by [`MarkdownEngine`]
    pub max_input_size: Option<usize>,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            block_markers_at_line_start: false,
            max_input_size: None,
        }
    }
}

/// Main configuration struct for the Markdown engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub lexer: LexerConfig,
    pub output: OutputConfig,
}

impl EngineConfig {
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }
}

/// Builder for EngineConfig to provide a fluent configuration API.
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lexer(mut self, lexer_config: LexerConfig) -> Self {
        self.config.lexer = lexer_config;
        self
    }

    pub fn output(mut self, output_config: OutputConfig) -> Self {
        self.config.output = output_config;
        self
    }

    pub fn block_markers_at_line_start(mut self, enabled: bool) -> Self {
        self.config.lexer.block_markers_at_line_start = enabled;
        self
    }

    /// Sets the input size limit; `None` removes it.
    pub fn max_input_size(mut self, max: Option<usize>) -> Self {
        self.config.lexer.max_input_size = max;
        self
    }

    pub fn escape_html(mut self, enabled: bool) -> Self {
        self.config.output.escape_html = enabled;
        self
    }

    pub fn xhtml_style(mut self, enabled: bool) -> Self {
        self.config.output.xhtml_style = enabled;
        self
    }

    pub fn build(self) -> EngineConfig {
        self.config
    }
}

/// Markdown engine with a configurable lexer and renderer.
///
/// The engine is immutable once built and can be shared across threads;
/// every call lexes with a fresh [`Lexer`].
///
/// ```
/// use mdlite::{EngineConfig, MarkdownEngine};
///
/// let engine = MarkdownEngine::with_config(
///     EngineConfig::builder().xhtml_style(true).build(),
/// );
/// let html = engine.render_to_html("![logo](logo.png)").unwrap();
/// assert_eq!(html, "<p><img src=\"logo.png\" alt=\"logo\" /></p>\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkdownEngine {
    config: EngineConfig,
}

impl MarkdownEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Lexes `markdown` into its full token stream.
    pub fn tokenize(&self, markdown: &str) -> Result<Vec<Token>> {
        self.check_input_size(markdown)?;
        let tokens: Vec<Token> =
            Lexer::with_config(markdown, self.config.lexer.clone()).collect();
        debug!(tokens = tokens.len(), bytes = markdown.len(), "tokenized input");
        Ok(tokens)
    }

    /// Renders an already lexed token stream.
    pub fn render_tokens(&self, tokens: &[Token]) -> String {
        HtmlRenderer::new(self.config.output.clone()).render(tokens)
    }

    /// Converts Markdown to HTML.
    ///
    /// Fails only when the input exceeds the configured size limit.
    pub fn render_to_html(&self, markdown: &str) -> Result<String> {
        let tokens = self.tokenize(markdown)?;
        Ok(self.render_tokens(&tokens))
    }

    fn check_input_size(&self, markdown: &str) -> Result<()> {
        match self.config.lexer.max_input_size {
            Some(max) if markdown.len() > max => {
                Err(MarkdownError::input_too_large(markdown.len(), max))
            }
            _ => Ok(()),
        }
    }
}
