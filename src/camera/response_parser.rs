//! Scanner for the `key=value;` text the camera's query endpoints answer with.
//!
//! Responses look like `var alias='Porch';\nvar id='000DC5D0A1B2';` or, on some
//! firmware, ` brightness=96; resolution='8';` on a single line. An assignment is
//! only recognised when a space precedes the key and a `;` terminates the value.

use std::collections::HashMap;

/// Parses every assignment in `body`. Later duplicates overwrite earlier ones and
/// anything that is not an assignment is skipped.
///
/// A value opening with `'` runs to the next `';` on the same line, so quoted values
/// may contain `;`. An unquoted value runs to the next `;` and must not cross a line break.
pub fn parse_assignments(body: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    let mut cursor = 0;
    while let Some(offset) = body[cursor..].find('=') {
        let eq = cursor + offset;
        let value_start = eq + 1;
        let Some((value, next)) = scan_value(body, value_start) else {
            // Unterminated: resume at the line break, or stop at end of input.
            match find_line_break(body, value_start) {
                Some(line_end) => {
                    cursor = line_end;
                    continue;
                }
                None => break,
            }
        };
        if let Some(key) = scan_key(&body[cursor..eq]) {
            if !value.is_empty() && !value.ends_with('\'') {
                values.insert(key.to_string(), value.to_string());
            }
        }
        cursor = next;
    }
    values
}

/// The key is the text after the last space of the current statement.
fn scan_key(lhs: &str) -> Option<&str> {
    let statement = lhs.rsplit([';', '\n', '\r']).next().unwrap_or(lhs);
    let (_, key) = statement.rsplit_once(' ')?;
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Returns the value starting at `start`, quotes removed, and the index just past its `;`.
fn scan_value(body: &str, start: usize) -> Option<(&str, usize)> {
    let line_end = find_line_break(body, start).unwrap_or(body.len());
    let line = &body[start..line_end];
    if let Some(quoted) = line.strip_prefix('\'') {
        if let Some(close) = quoted.find("';") {
            // `'` + value + `';`
            return Some((&quoted[..close], start + 1 + close + 2));
        }
    }
    let semi = line.find(';')?;
    let raw = &line[..semi];
    let raw = raw.strip_prefix('\'').unwrap_or(raw);
    let raw = raw.strip_suffix('\'').unwrap_or(raw);
    Some((raw, start + semi + 1))
}

fn find_line_break(body: &str, from: usize) -> Option<usize> {
    body[from..].find(['\n', '\r']).map(|i| from + i)
}
