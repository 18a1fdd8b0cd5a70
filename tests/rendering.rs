//! End-to-end rendering cases: Markdown in, HTML out.

use mdlite::{EngineConfig, MarkdownEngine, Token, render_markdown, tokenize};
use rstest::rstest;

#[rstest]
#[case::header("# Header 1", "<h1>Header 1</h1>\n")]
#[case::multiple_headers("## Header 2\n### Header 3", "<h2>Header 2</h2>\n<h3>Header 3</h3>\n")]
#[case::bold("This is **bold** text.", "<p>This is <strong>bold</strong> text.</p>\n")]
#[case::italic("This is *italic* text.", "<p>This is <em>italic</em> text.</p>\n")]
#[case::link(
    "This is a [link](http://example.com).",
    "<p>This is a <a href=\"http://example.com\">link</a>.</p>\n"
)]
#[case::image(
    "This is an image ![Alt text](image.png).",
    "<p>This is an image <img src=\"image.png\" alt=\"Alt text\">.</p>\n"
)]
#[case::list("- Item 1\n- Item 2", "<ul>\n<li>Item 1</li>\n<li>Item 2</li>\n</ul>\n")]
#[case::mixed(
    "# Title\nSome **bold** text.\n- item",
    "<h1>Title</h1>\n<p>Some <strong>bold</strong> text.</p>\n<ul>\n<li>item</li>\n</ul>\n"
)]
fn renders_well_formed_constructs(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render_markdown(input), expected);
}

#[rstest]
#[case::unclosed_bold("**bold", "<p>**bold</p>\n")]
#[case::heading_without_space("#Invalid", "<p>#Invalid</p>\n")]
#[case::list_without_space("-Invalid list item", "<p>-Invalid list item</p>\n")]
#[case::unclosed_url("[a](http://x", "<p>[a](http://x</p>\n")]
#[case::unbalanced_brackets("[a [b] c", "<p>[a [b] c</p>\n")]
#[case::brackets_without_url("[just brackets]", "<p>[just brackets]</p>\n")]
#[case::bare_bang("Hello!", "<p>Hello!</p>\n")]
#[case::broken_image("![invalid image(image.jpg", "<p>![invalid image(image.jpg</p>\n")]
#[case::unclosed_italic("an *open one", "<p>an *open one</p>\n")]
fn degrades_malformed_constructs_to_text(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render_markdown(input), expected);
}

#[rstest]
#[case::dash_mid_line("a - b", "<p>a </p>\n<ul>\n<li>b</li>\n</ul>\n")]
#[case::hash_mid_line("C# rocks", "<p>C</p>\n<h1>rocks</h1>\n")]
#[case::dash_inside_word("well-known", "<p>well-known</p>\n")]
fn block_markers_apply_anywhere_by_default(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render_markdown(input), expected);
}

#[test]
fn line_start_blocks_keep_mid_line_markers_as_text() {
    let engine = MarkdownEngine::with_config(
        EngineConfig::builder()
            .block_markers_at_line_start(true)
            .build(),
    );
    assert_eq!(engine.render_to_html("a - b").unwrap(), "<p>a - b</p>\n");
    assert_eq!(engine.render_to_html("C# rocks").unwrap(), "<p>C# rocks</p>\n");
}

#[test]
fn list_marker_on_its_own_line_takes_the_next_line() {
    assert_eq!(
        render_markdown("-\nfoo"),
        "<ul>\n<li>foo</li>\n</ul>\n"
    );
}

#[test]
fn trailing_whitespace_is_kept_as_text() {
    assert_eq!(render_markdown("**a**  "), "<p><strong>a</strong>  </p>\n");
    assert_eq!(render_markdown("# T\n  "), "<h1>T</h1>\n<p>  </p>\n");
}

#[test]
fn existing_character_references_pass_through() {
    assert_eq!(
        render_markdown("AT&amp;T &copy; & co"),
        "<p>AT&amp;T &copy; &amp; co</p>\n"
    );
}

#[test]
fn empty_input_renders_empty_string() {
    assert_eq!(render_markdown(""), "");
    assert_eq!(render_markdown("\n\n\n"), "");
}

#[test]
fn plain_text_is_escaped_and_wrapped() {
    assert_eq!(
        render_markdown("Tom & Jerry say \"<hi>\""),
        "<p>Tom &amp; Jerry say &quot;&lt;hi&gt;&quot;</p>\n"
    );
}

#[test]
fn nested_emphasis_splits_at_first_closing_asterisk() {
    let tokens = tokenize("*outer **inner** outer*");
    assert_eq!(tokens[0], Token::Italic("outer ".into()));
    assert_eq!(
        render_markdown("*outer **inner** outer*"),
        "<p><em>outer </em><em>inner</em><em> outer</em></p>\n"
    );
}

#[test]
fn pipe_in_link_text_does_not_split_fields() {
    assert_eq!(
        render_markdown("[a|b](http://x/?q=1|2)"),
        "<p><a href=\"http://x/?q=1|2\">a|b</a></p>\n"
    );
}

#[test]
fn single_line_break_stays_inside_paragraph() {
    assert_eq!(render_markdown("one\ntwo"), "<p>one\ntwo</p>\n");
}

#[test]
fn sample_document() {
    let markdown = "# Valid heading 1\n\
                    #Invalid heading\n\
                    ## Valid heading 2\n\
                    This is **bold** and *italic* text.\n\
                    - Valid list item\n\
                    -Invalid list item\n\
                    Here's a [valid link](https://example.com)\n";

    let expected = "<h1>Valid heading 1</h1>\n\
                    <p>#Invalid heading</p>\n\
                    <h2>Valid heading 2</h2>\n\
                    <p>This is <strong>bold</strong> and <em>italic</em> text.</p>\n\
                    <ul>\n<li>Valid list item</li>\n</ul>\n\
                    <p>-Invalid list itemHere's a <a href=\"https://example.com\">valid link</a></p>\n";

    assert_eq!(render_markdown(markdown), expected);
}

#[test]
fn engine_options_change_output() {
    let engine = MarkdownEngine::with_config(
        EngineConfig::builder()
            .escape_html(false)
            .xhtml_style(true)
            .build(),
    );
    assert_eq!(
        engine.render_to_html("<b>hi</b> ![x](y.png)").unwrap(),
        "<p><b>hi</b> <img src=\"y.png\" alt=\"x\" /></p>\n"
    );
}
