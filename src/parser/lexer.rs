//! Byte-index scanners over a single statement line.

const DESCENDANT_SEPARATOR: &str = " >> ";
const NESTED_OPEN: &str = "{{";
const NESTED_CLOSE: &str = "}}";

pub fn skip_whitespace(input: &str, start_byte_index: usize) -> usize {
    let remaining = match input.get(start_byte_index..) {
        Some(s) => s,
        None => return start_byte_index,
    };

    let mut byte_index = start_byte_index;
    for ch in remaining.chars() {
        if !ch.is_whitespace() {
            break;
        }
        byte_index += ch.len_utf8();
    }
    byte_index
}

/// Scans up to the next whitespace character.
pub fn scan_word(input: &str, start_byte_index: usize) -> usize {
    let remaining = match input.get(start_byte_index..) {
        Some(s) => s,
        None => return start_byte_index,
    };

    remaining
        .char_indices()
        .find(|(_, ch)| ch.is_whitespace())
        .map(|(byte_offset, _)| start_byte_index + byte_offset)
        .unwrap_or(input.len())
}

/// Scans a quoted string starting at `start_byte_index`, honouring backslash
/// escapes. Returns the byte index just past the closing quote.
pub fn scan_quoted(input: &str, start_byte_index: usize) -> Option<usize> {
    let remaining = input.get(start_byte_index..)?;
    let mut chars = remaining.char_indices();

    let (_, quote) = chars.next()?;
    if quote != '"' {
        return None;
    }

    let mut escaped = false;
    for (byte_offset, ch) in chars {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return Some(start_byte_index + byte_offset + ch.len_utf8());
        }
    }

    None
}

/// Scans the nested `$"{{ parent }} child"` form, tracking `{{`/`}}` depth so
/// quotes inside the parent do not end the identifier.
fn scan_nested(input: &str, start_byte_index: usize) -> Option<usize> {
    let body_start = start_byte_index + 2;
    let remaining = input.get(body_start..)?;
    if !remaining.starts_with(NESTED_OPEN) {
        return None;
    }

    let mut depth = 0usize;
    let mut byte_offset = 0;
    while byte_offset < remaining.len() {
        let rest = &remaining[byte_offset..];
        if rest.starts_with(NESTED_OPEN) {
            depth += 1;
            byte_offset += NESTED_OPEN.len();
            continue;
        }
        if rest.starts_with(NESTED_CLOSE) {
            depth = depth.saturating_sub(1);
            byte_offset += NESTED_CLOSE.len();
            if depth == 0 {
                break;
            }
            continue;
        }
        byte_offset += rest.chars().next().map(char::len_utf8).unwrap_or(1);
    }

    let closing = remaining[byte_offset..].find('"')?;
    Some(body_start + byte_offset + closing + 1)
}

fn scan_single_identifier(input: &str, start_byte_index: usize) -> usize {
    let remaining = match input.get(start_byte_index..) {
        Some(s) => s,
        None => return start_byte_index,
    };

    let quoted_end = if remaining.starts_with("$\"") {
        scan_nested(input, start_byte_index).or_else(|| scan_quoted(input, start_byte_index + 1))
    } else if remaining.starts_with('"') {
        scan_quoted(input, start_byte_index)
    } else {
        None
    };

    // Position and attribute suffixes run up to the next whitespace
    match quoted_end {
        Some(end) => scan_word(input, end),
        None => scan_word(input, start_byte_index),
    }
}

/// Scans an identifier, following any `>>` descendant chain. Returns the byte
/// index just past it.
pub fn scan_identifier(input: &str, start_byte_index: usize) -> usize {
    let mut end = scan_single_identifier(input, start_byte_index);

    while input
        .get(end..)
        .is_some_and(|rest| rest.starts_with(DESCENDANT_SEPARATOR))
    {
        let child_start = end + DESCENDANT_SEPARATOR.len();
        let child_end = scan_single_identifier(input, child_start);
        if child_end == child_start {
            break;
        }
        end = child_end;
    }

    end
}
