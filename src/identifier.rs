//! Shape tests for DOM identifiers.
//!
//! An element identifier is a quoted selector behind a `$`, e.g. `$".form"` or
//! `$".item":2`. Appending `.name` makes it an attribute identifier. Descendant
//! identifiers scope a child beneath a parent, either as `$".parent" >> $".child"`
//! or in the nested form `$"{{ $".parent" }} .child"`.

use regex::Regex;
use std::sync::OnceLock;

const DESCENDANT_SEPARATOR: &str = " >> ";
const NESTED_PREFIX: &str = "$\"{{ ";
const NESTED_OPEN: &str = "{{";
const NESTED_CLOSE: &str = "}}";

fn element_regex() -> &'static Regex {
    static ELEMENT_RE: OnceLock<Regex> = OnceLock::new();
    ELEMENT_RE.get_or_init(|| {
        Regex::new(r#"^\$"(?:[^"\\]|\\.)+"(?::(?:-?[0-9]+|first|last))?$"#)
            .expect("element identifier regex should be valid")
    })
}

fn attribute_regex() -> &'static Regex {
    static ATTRIBUTE_RE: OnceLock<Regex> = OnceLock::new();
    ATTRIBUTE_RE.get_or_init(|| {
        Regex::new(r#"^\$"(?:[^"\\]|\\.)+"(?::(?:-?[0-9]+|first|last))?\.[A-Za-z0-9_\-]+$"#)
            .expect("attribute identifier regex should be valid")
    })
}

fn page_element_reference_regex() -> &'static Regex {
    static PAGE_ELEMENT_RE: OnceLock<Regex> = OnceLock::new();
    PAGE_ELEMENT_RE.get_or_init(|| {
        Regex::new(r"^\$[A-Za-z0-9_\-]+$").expect("page element reference regex should be valid")
    })
}

fn page_url_reference_regex() -> &'static Regex {
    static PAGE_URL_RE: OnceLock<Regex> = OnceLock::new();
    PAGE_URL_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_\-]+\.url$").expect("page url reference regex should be valid")
    })
}

pub fn is_element_identifier(value: &str) -> bool {
    element_regex().is_match(value)
}

pub fn is_attribute_identifier(value: &str) -> bool {
    attribute_regex().is_match(value)
}

/// Element or attribute identifier.
pub fn is_dom_identifier(value: &str) -> bool {
    is_element_identifier(value) || is_attribute_identifier(value)
}

/// A descendant identifier whose child is an element.
pub fn is_descendant_dom_identifier(value: &str) -> bool {
    let segments = split_chain(value);
    match segments.split_last() {
        Some((child, ancestors)) if !ancestors.is_empty() => {
            is_element_identifier(child) && is_chain(ancestors)
        }
        _ => is_nested_descendant_identifier(value),
    }
}

/// A `>>` descendant identifier whose child is an attribute.
pub fn is_descendant_attribute_identifier(value: &str) -> bool {
    let segments = split_chain(value);
    match segments.split_last() {
        Some((child, ancestors)) if !ancestors.is_empty() => {
            is_attribute_identifier(child) && is_chain(ancestors)
        }
        _ => false,
    }
}

pub fn is_dom_or_descendant_dom_identifier(value: &str) -> bool {
    is_dom_identifier(value)
        || is_descendant_dom_identifier(value)
        || is_descendant_attribute_identifier(value)
}

/// `<page import name>.url`, a reference resolved against an imported page.
pub fn is_page_url_reference(value: &str) -> bool {
    page_url_reference_regex().is_match(value)
}

/// Splits on every ` >> ` outside quotes and outside `{{ }}`.
fn split_chain(value: &str) -> Vec<&str> {
    let bytes = value.as_bytes();
    let mut segments = Vec::new();
    let mut segment_start = 0;
    let mut depth = 0usize;
    let mut in_quote = false;
    let mut index = 0;

    while index < bytes.len() {
        let rest = &bytes[index..];
        if rest[0] == b'\\' {
            index += 2;
        } else if rest.starts_with(NESTED_OPEN.as_bytes()) {
            depth += 1;
            index += NESTED_OPEN.len();
        } else if rest.starts_with(NESTED_CLOSE.as_bytes()) {
            depth = depth.saturating_sub(1);
            index += NESTED_CLOSE.len();
        } else if rest[0] == b'"' {
            in_quote = !in_quote;
            index += 1;
        } else if depth == 0 && !in_quote && rest.starts_with(DESCENDANT_SEPARATOR.as_bytes()) {
            segments.push(&value[segment_start..index]);
            index += DESCENDANT_SEPARATOR.len();
            segment_start = index;
        } else {
            index += 1;
        }
    }

    segments.push(&value[segment_start..]);
    segments
}

/// The head of a chain may be an element, a page element reference or a
/// nested descendant; every later link must be an element.
fn is_chain(segments: &[&str]) -> bool {
    let Some((head, rest)) = segments.split_first() else {
        return false;
    };

    rest.iter().all(|segment| is_element_identifier(segment))
        && (is_element_identifier(head)
            || page_element_reference_regex().is_match(head)
            || is_nested_descendant_identifier(head))
}

/// Splits `$"{{ parent }} child"` at the `}}` matching the opening `{{`.
fn split_nested(value: &str) -> Option<(&str, &str)> {
    let rest = value.strip_prefix(NESTED_PREFIX)?;
    let bytes = rest.as_bytes();
    let mut depth = 1usize;
    let mut index = 0;
    let mut close = None;

    while index < bytes.len() {
        let remaining = &bytes[index..];
        if remaining.starts_with(NESTED_OPEN.as_bytes()) {
            depth += 1;
            index += NESTED_OPEN.len();
        } else if remaining.starts_with(NESTED_CLOSE.as_bytes()) {
            depth -= 1;
            if depth == 0 {
                close = Some(index);
                break;
            }
            index += NESTED_CLOSE.len();
        } else {
            index += 1;
        }
    }

    let close = close?;
    let parent = rest[..close].strip_suffix(' ')?;
    let child = rest[close + NESTED_CLOSE.len()..]
        .strip_prefix(' ')?
        .strip_suffix('"')?;

    Some((parent, child))
}

fn is_nested_descendant_identifier(value: &str) -> bool {
    let mut current = value;

    // Each pass peels one level of nesting off the parent.
    loop {
        let Some((parent, child)) = split_nested(current) else {
            return false;
        };
        if child.trim().is_empty() {
            return false;
        }
        if is_element_identifier(parent) {
            return true;
        }

        let segments = split_chain(parent);
        match segments.split_first() {
            Some((head, rest)) if !rest.is_empty() => {
                if !rest.iter().all(|segment| is_element_identifier(segment)) {
                    return false;
                }
                if is_element_identifier(head) || page_element_reference_regex().is_match(head) {
                    return true;
                }
                current = head;
            }
            _ => current = parent,
        }
    }
}
