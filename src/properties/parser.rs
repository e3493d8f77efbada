use tracing::debug;

use super::ParameterMap;

// Whitespace as understood by the properties format, not the unicode one.
const BLANKS: [char; 3] = [' ', '\t', '\u{c}'];
const COMMENT_MARKERS: [char; 2] = ['#', '!'];

/// Parses the text of a properties file.
///
/// Parsing is best effort: lines without an unescaped `=` are skipped, and when a key is
/// repeated the last occurrence wins.
pub fn parse(raw: &str) -> ParameterMap {
    let mut parameters = ParameterMap::default();

    for (line_number, line) in logical_lines(raw) {
        match split_key_value(&line) {
            Some((key, value)) => parameters.insert(
                unescape(trim_key_end(key)),
                unescape(value.trim_start_matches(BLANKS)),
            ),
            None => debug!(line_number, "skipping properties line without `=` separator"),
        }
    }

    parameters
}

/// Joins continued lines and drops blanks and comments. Each entry carries the number of the
/// physical line it started on.
fn logical_lines(raw: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut physical = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate();

    while let Some((index, line)) = physical.next() {
        let line = line.trim_start_matches(BLANKS);
        if line.is_empty() || line.starts_with(COMMENT_MARKERS) {
            continue;
        }

        let mut logical = line.to_string();
        while ends_with_unescaped_backslash(&logical) {
            logical.pop();
            match physical.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(BLANKS)),
                None => break,
            }
        }
        lines.push((index + 1, logical));
    }

    lines
}

fn ends_with_unescaped_backslash(s: &str) -> bool {
    s.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '=' => return Some((&line[..i], &line[i + 1..])),
            _ => {}
        }
    }
    None
}

// Trailing blanks are not part of the key unless the first of them is escaped.
fn trim_key_end(key: &str) -> &str {
    let trimmed = key.trim_end_matches(BLANKS);
    if trimmed.len() < key.len() && ends_with_unescaped_backslash(trimmed) {
        let escaped_blank_len = key[trimmed.len()..].chars().next().map_or(0, char::len_utf8);
        &key[..trimmed.len() + escaped_blank_len]
    } else {
        trimmed
    }
}

fn unescape(raw: &str) -> String {
    let mut unescaped = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => unescaped.push('\t'),
            Some('n') => unescaped.push('\n'),
            Some('r') => unescaped.push('\r'),
            Some('f') => unescaped.push('\u{c}'),
            Some('u') => {
                let rest = chars.as_str();
                match decode_unicode_escape(rest) {
                    Some((decoded, consumed)) => {
                        unescaped.push(decoded);
                        chars = rest[consumed..].chars();
                    }
                    None => unescaped.push_str("\\u"),
                }
            }
            // `\:`, `\=`, `\\`, `\ `, `\#`... all stand for the escaped character itself
            Some(other) => unescaped.push(other),
            None => {}
        }
    }

    unescaped
}

fn hex4(s: &str) -> Option<u16> {
    let hex = s.get(..4)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(hex, 16).ok()
}

/// Decodes the digits following a `\u`, returning the character and how many bytes of `rest`
/// it spans. Surrogate pairs are written as two consecutive escapes.
fn decode_unicode_escape(rest: &str) -> Option<(char, usize)> {
    let first = hex4(rest)?;
    if let Some(c) = char::from_u32(first.into()) {
        return Some((c, 4));
    }
    let low = rest[4..].strip_prefix("\\u").and_then(hex4)?;
    let decoded = char::decode_utf16([first, low]).next()?.ok()?;
    Some((decoded, 10))
}
