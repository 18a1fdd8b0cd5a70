//! Property-based tests for the lexer and renderer.
//!
//! The converter is total: any input must produce HTML without panicking,
//! and escaping must never double-escape.

use mdlite::{Lexer, escape_html, render_markdown, tokenize};
use proptest::prelude::*;

/// Text built from the characters the lexer treats specially, mixed with
/// ordinary ones, so malformed constructs show up often.
fn markdownish() -> impl Strategy<Value = String> {
    const PIECES: &[&str] = &[
        "#", "*", "[", "]", "(", ")", "!", "-", "\\", " ", "\n", "\r\n", "&", "<",
    ];

    proptest::collection::vec(
        prop_oneof![
            proptest::sample::select(PIECES).prop_map(str::to_owned),
            "[a-z]{1,4}",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn render_never_panics(input in any::<String>()) {
        let _ = render_markdown(&input);
    }

    #[test]
    fn render_never_panics_on_markup(input in markdownish()) {
        let _ = render_markdown(&input);
    }

    #[test]
    fn plain_text_becomes_one_paragraph(input in "[a-zA-Z0-9 .,;:?&<>\"']{1,60}") {
        prop_assert_eq!(
            render_markdown(&input),
            format!("<p>{}</p>\n", escape_html(&input))
        );
    }

    #[test]
    fn escaping_is_idempotent(input in any::<String>()) {
        let once = escape_html(&input);
        prop_assert_eq!(escape_html(&once), once);
    }

    #[test]
    fn escaped_output_has_no_raw_specials(input in any::<String>()) {
        let escaped = escape_html(&input);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
    }

    #[test]
    fn lexer_is_fused(input in markdownish()) {
        let mut lexer = Lexer::new(&input);
        while lexer.next_token().is_some() {}
        prop_assert!(lexer.next_token().is_none());
        prop_assert_eq!(lexer.position().offset, input.len());
    }

    #[test]
    fn tokenizing_is_deterministic(input in markdownish()) {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }
}
