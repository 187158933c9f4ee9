#![forbid(unsafe_code)]

//! Static tag classification tables.
//!
//! These sets drive the builder and the converter. They are fixed
//! constants, not runtime configuration:
//!
//! | Set | Effect |
//! |-----|--------|
//! | self-closing | never opens a nesting scope |
//! | auto-close | opening one implicitly ends still-open siblings of its class |
//! | ignored | subtree is dropped entirely during conversion |
//! | inline | contributes a flat atom run to its block ancestor |
//! | transparent | elided when it has exactly one surviving child |

use crate::event::AttrList;

/// Void tags: they never open a nesting scope and their end tag is a no-op.
#[must_use]
pub fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Implicit-end relation: opening `tag` ends a still-open `open` frame.
///
/// Each tag closes its own sibling class, never its container: a `td`
/// ends another cell but not its row, while a `tr` ends both the
/// previous row and any cell still open inside it.
#[must_use]
pub fn auto_closes(tag: &str, open: &str) -> bool {
    match tag {
        "p" => open == "p",
        "li" => open == "li",
        "dt" | "dd" => matches!(open, "dt" | "dd"),
        "td" | "th" => matches!(open, "td" | "th"),
        "tr" => matches!(open, "tr" | "td" | "th"),
        "option" => open == "option",
        _ => false,
    }
}

/// Tags whose entire subtree is dropped during conversion.
#[must_use]
pub fn is_ignored(tag: &str) -> bool {
    matches!(
        tag,
        "script" | "style" | "head" | "title" | "meta" | "link" | "template" | "noscript"
    )
}

/// Inline tags: never become render nodes, only markup markers around
/// their flattened children.
#[must_use]
pub fn is_inline(tag: &str) -> bool {
    matches!(
        tag,
        "a" | "b"
            | "i"
            | "u"
            | "em"
            | "strong"
            | "code"
            | "tt"
            | "s"
            | "strike"
            | "small"
            | "big"
            | "sub"
            | "sup"
            | "mark"
            | "kbd"
            | "samp"
            | "var"
            | "cite"
            | "q"
            | "abbr"
    )
}

/// Wrapper tags that are elided when they hold exactly one surviving child.
#[must_use]
pub fn is_transparent(tag: &str) -> bool {
    matches!(
        tag,
        "div" | "span" | "html" | "body" | "main" | "article" | "section" | "center" | "font"
    )
}

/// The forced line-break tag.
#[must_use]
pub fn is_break(tag: &str) -> bool {
    tag == "br"
}

/// Hidden form inputs carry no visible content.
#[must_use]
pub fn is_hidden_input(tag: &str, attrs: &AttrList) -> bool {
    tag == "input"
        && attrs
            .iter()
            .any(|(name, value)| name == "type" && value.eq_ignore_ascii_case("hidden"))
}

/// Textual stand-in for a void tag.
///
/// Images use their alt text when present; everything else gets a
/// bracketed label.
#[must_use]
pub fn placeholder(tag: &str, attrs: &AttrList) -> String {
    match tag {
        "img" => {
            let alt = attrs
                .iter()
                .find(|(name, _)| name == "alt")
                .map(|(_, value)| value.trim());
            match alt {
                Some(alt) if !alt.is_empty() => format!("[{alt}]"),
                _ => "[IMG]".to_string(),
            }
        }
        "hr" => "----".to_string(),
        "input" => "[INPUT]".to_string(),
        _ => format!("[{}]", tag.to_ascii_uppercase()),
    }
}
