//! Bare `NaN` / `Infinity` tokens.
//!
//! Generators that dump floats without a JSON-strict encoder write these
//! tokens for missing values. They are not JSON, so they are rewritten to
//! `null` before parsing and the affected values decode as absent.

use std::borrow::Cow;

const TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// Replace non-finite number tokens outside string literals with `null`
pub fn null_non_finite(content: &str) -> Cow<'_, str> {
    let bytes = content.as_bytes();
    let mut output: Option<String> = None;
    let mut copied = 0;
    let mut in_string = false;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if b == b'"' {
            in_string = true;
            i += 1;
            continue;
        }

        let token = TOKENS
            .iter()
            .find(|t| bytes[i..].starts_with(t.as_bytes()) && is_standalone(bytes, i, t.len()));

        match token {
            Some(token) => {
                let out = output.get_or_insert_with(|| String::with_capacity(content.len()));
                out.push_str(&content[copied..i]);
                out.push_str("null");
                i += token.len();
                copied = i;
            }
            None => i += 1,
        }
    }

    match output {
        Some(mut out) => {
            out.push_str(&content[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(content),
    }
}

fn is_standalone(bytes: &[u8], start: usize, len: usize) -> bool {
    let word = |b: u8| b.is_ascii_alphanumeric() || b == b'_' || b == b'.';

    let before = start == 0 || !word(bytes[start - 1]);
    let after = bytes.get(start + len).is_none_or(|&b| !word(b));
    before && after
}
