//! HTML escaping for text and attribute payloads.
//!
//! Only `<`, `>`, `&` and `"` are rewritten. An `&` that already starts a
//! well-formed character reference is passed through, which makes escaping
//! idempotent.
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while_m_n};
use nom::character::complete::char;
use nom::combinator::{recognize, verify};
use nom::sequence::{preceded, tuple};

fn is_special(c: char) -> bool {
    matches!(c, '<' | '>' | '&' | '"')
}

/// `&#x1F600;` / `&#X1f;`
fn hex_reference(input: &str) -> IResult<&str, &str> {
    preceded(
        alt((tag("#x"), tag("#X"))),
        take_while_m_n(1, 6, |c: char| c.is_ascii_hexdigit()),
    )(input)
}

/// `&#160;`
fn decimal_reference(input: &str) -> IResult<&str, &str> {
    preceded(
        char('#'),
        take_while_m_n(1, 7, |c: char| c.is_ascii_digit()),
    )(input)
}

/// `&amp;`, `&nbsp;`
fn named_reference(input: &str) -> IResult<&str, &str> {
    verify(
        take_while_m_n(1, 32, |c: char| c.is_ascii_alphanumeric()),
        |name: &str| name.starts_with(|c: char| c.is_ascii_alphabetic()),
    )(input)
}

/// Recognizes a complete character reference at the start of `input`.
pub(crate) fn character_reference(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        char('&'),
        alt((hex_reference, decimal_reference, named_reference)),
        char(';'),
    )))(input)
}

/// Escapes `text` for use in HTML text content or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(index) = rest.find(is_special) {
        escaped.push_str(&rest[..index]);
        let tail = &rest[index..];

        if let Ok((after, reference)) = character_reference(tail) {
            escaped.push_str(reference);
            rest = after;
            continue;
        }

        // Every special character is a single ASCII byte.
        escaped.push_str(match &tail[..1] {
            "<" => "&lt;",
            ">" => "&gt;",
            "&" => "&amp;",
            _ => "&quot;",
        });
        rest = &tail[1..];
    }

    escaped.push_str(rest);
    escaped
}
