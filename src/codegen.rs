use crate::escape::escape_html;
use crate::lexer::{Token, TokenKind};
use tracing::debug;

/// Configuration options for HTML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to escape HTML special characters in payloads
    pub escape_html: bool,
    /// Whether to write void elements as `<img ... />`
    pub xhtml_style: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            escape_html: true,
            xhtml_style: false,
        }
    }
}

impl OutputConfig {
    pub fn builder() -> OutputConfigBuilder {
        OutputConfigBuilder::new()
    }
}

/// Builder pattern for OutputConfig
#[derive(Debug, Default)]
pub struct OutputConfigBuilder {
    config: OutputConfig,
}

impl OutputConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable HTML escaping
    pub fn with_html_escaping(mut self, enabled: bool) -> Self {
        self.config.escape_html = enabled;
        self
    }

    /// Enable or disable XHTML-style self-closing tags
    pub fn with_xhtml_style(mut self, enabled: bool) -> Self {
        self.config.xhtml_style = enabled;
        self
    }

    pub fn build(self) -> OutputConfig {
        self.config
    }
}

/// Low-level HTML writing utilities with escaping applied per configuration
#[derive(Debug)]
pub struct HtmlWriter {
    buffer: String,
    config: OutputConfig,
}

impl HtmlWriter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            buffer: String::new(),
            config,
        }
    }

    /// Writes text content, escaped unless escaping is disabled
    pub fn write_text(&mut self, text: &str) {
        if self.config.escape_html {
            self.buffer.push_str(&escape_html(text));
        } else {
            self.buffer.push_str(text);
        }
    }

    pub fn write_opening_tag(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        self.write_attributes(attributes);
        self.buffer.push('>');
    }

    pub fn write_closing_tag(&mut self, tag: &str) {
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    /// Writes an element that has no closing tag, such as `img`
    pub fn write_void_element(&mut self, tag: &str, attributes: &[(&str, &str)]) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        self.write_attributes(attributes);
        if self.config.xhtml_style {
            self.buffer.push_str(" />");
        } else {
            self.buffer.push('>');
        }
    }

    /// Writes `<tag>text</tag>`
    pub fn write_element(&mut self, tag: &str, text: &str) {
        self.write_opening_tag(tag, &[]);
        self.write_text(text);
        self.write_closing_tag(tag);
    }

    pub fn write_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn write_attributes(&mut self, attributes: &[(&str, &str)]) {
        for (name, value) in attributes {
            self.buffer.push(' ');
            self.buffer.push_str(name);
            self.buffer.push_str("=\"");
            self.write_text(value);
            self.buffer.push('"');
        }
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

/// Assembles a token stream into HTML.
///
/// The renderer wraps runs of inline tokens in `<p>` and runs of list items
/// in `<ul>`. Headings and list items are block tokens: they close an open
/// paragraph before they are written.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    config: OutputConfig,
}

impl HtmlRenderer {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    pub fn render(&self, tokens: &[Token]) -> String {
        let mut writer = HtmlWriter::new(self.config.clone());
        let mut in_list = false;
        let mut in_paragraph = false;

        for (index, token) in tokens.iter().enumerate() {
            let kind = token.kind();

            if kind == TokenKind::ListItem {
                if in_paragraph {
                    close_block(&mut writer, "p");
                    in_paragraph = false;
                }
                if !in_list {
                    writer.write_opening_tag("ul", &[]);
                    writer.write_newline();
                    in_list = true;
                }
            } else if in_list {
                close_block(&mut writer, "ul");
                in_list = false;
            }

            if kind.is_inline() && !in_paragraph {
                writer.write_opening_tag("p", &[]);
                in_paragraph = true;
            } else if in_paragraph && kind.is_block() {
                close_block(&mut writer, "p");
                in_paragraph = false;
            }

            self.render_token(token, &mut writer);

            let next_is_block = tokens
                .get(index + 1)
                .is_none_or(|next| next.kind().is_block());
            if in_paragraph && next_is_block {
                close_block(&mut writer, "p");
                in_paragraph = false;
            }
        }

        if in_list {
            close_block(&mut writer, "ul");
        }
        if in_paragraph {
            close_block(&mut writer, "p");
        }

        let html = writer.into_output();
        debug!(tokens = tokens.len(), bytes = html.len(), "rendered token stream");
        html
    }

    fn render_token(&self, token: &Token, writer: &mut HtmlWriter) {
        match token {
            Token::Text(content) => writer.write_text(content),
            Token::Heading { level, content } => {
                let tag = format!("h{}", (*level).clamp(1, 6));
                writer.write_element(&tag, content);
                writer.write_newline();
            }
            Token::Bold(content) => writer.write_element("strong", content),
            Token::Italic(content) => writer.write_element("em", content),
            Token::ListItem(content) => {
                writer.write_element("li", content);
                writer.write_newline();
            }
            Token::Link { text, url } => {
                writer.write_opening_tag("a", &[("href", url.as_str())]);
                writer.write_text(text);
                writer.write_closing_tag("a");
            }
            Token::Image { alt, src } => {
                writer.write_void_element("img", &[("src", src.as_str()), ("alt", alt.as_str())]);
            }
        }
    }
}

fn close_block(writer: &mut HtmlWriter, tag: &str) {
    writer.write_closing_tag(tag);
    writer.write_newline();
}

/// Renders `tokens` with the default output configuration.
pub fn render(tokens: &[Token]) -> String {
    HtmlRenderer::default().render(tokens)
}
