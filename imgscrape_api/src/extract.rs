//! Recovery of provider payloads from raw response bodies.
//!
//! Three shapes show up in practice: a session token assigned inside an HTML
//! page, a bracketed literal passed to a script callback, and a plain JSON
//! document (sometimes behind an anti-XSSI prefix). Every function here is
//! pure and works on an already-fetched body.

use serde_json::Value;

use crate::navigate::{Node, Step};
use crate::types::SessionToken;

/// Page-level extraction failures. Record-level problems are never errors.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// The session token marker (or its closing delimiter) is missing.
    #[error("session token not found")]
    TokenNotFound,
    /// The embedded data marker or the expected document root is missing.
    #[error("embedded data block not found")]
    BlockNotFound,
    /// The block was located but its contents failed to parse.
    #[error("embedded data block is not parseable: {0}")]
    BlockUnparseable(#[source] serde_json::Error),
}

const XSSI_PREFIX: &[u8] = b")]}'";

/// Returns the text strictly between the first `marker` and the next `delimiter`.
///
/// The search is byte-oriented; only the matched slice has to be valid UTF-8.
pub fn extract_token(
    buf: &[u8],
    marker: &[u8],
    delimiter: u8,
) -> Result<SessionToken, ExtractError> {
    let start = find_bytes(buf, marker).ok_or(ExtractError::TokenNotFound)? + marker.len();
    let rest = &buf[start..];
    let end = rest
        .iter()
        .position(|&b| b == delimiter)
        .ok_or(ExtractError::TokenNotFound)?;
    let token = std::str::from_utf8(&rest[..end]).map_err(|_| ExtractError::TokenNotFound)?;
    if token.is_empty() {
        return Err(ExtractError::TokenNotFound);
    }
    tracing::debug!("Extracted session token ({} bytes)", token.len());
    Ok(SessionToken::new(token))
}

/// Recovers and parses the bracketed literal passed to the callback named by `marker`.
///
/// The right edge is the last `]` before `boundary` (or before the end of the
/// page when the boundary is missing), so trailing script content after the
/// literal is tolerated.
pub fn extract_block(page: &str, marker: &str, boundary: &str) -> Result<Value, ExtractError> {
    let marker_at = find_ignore_ascii_case(page, marker, 0).ok_or(ExtractError::BlockNotFound)?;
    let start = page[marker_at..]
        .find('[')
        .map(|i| marker_at + i)
        .ok_or(ExtractError::BlockNotFound)?;
    let limit = find_ignore_ascii_case(page, boundary, start + 1).unwrap_or(page.len());
    let end = page[start..limit]
        .rfind(']')
        .map(|i| start + i + 1)
        .unwrap_or(limit);

    let literal = normalize_js_escapes(&page[start..end]);
    tracing::debug!("Extracted embedded block ({} bytes)", literal.len());
    serde_json::from_str(&literal).map_err(ExtractError::BlockUnparseable)
}

/// Parses a JSON document, skipping a leading anti-XSSI prefix if present.
pub fn parse_document(body: &[u8]) -> Result<Value, ExtractError> {
    let body = match body.strip_prefix(XSSI_PREFIX) {
        Some(rest) => rest,
        None => body,
    };
    serde_json::from_slice(body).map_err(ExtractError::BlockUnparseable)
}

/// Moves the sub-tree at `path` out of `root`. Returns `Value::Null` when the
/// path does not resolve.
pub fn locate(mut root: Value, path: &[Step]) -> Value {
    let mut cursor = &mut root;
    for step in path {
        let next = match (step, cursor) {
            (Step::Index(i), Value::Array(items)) => {
                usize::try_from(*i).ok().and_then(|i| items.get_mut(i))
            }
            (Step::Key(key), Value::Object(map)) => map.get_mut(*key),
            (Step::First, Value::Array(items)) => items.first_mut(),
            (Step::Last, Value::Array(items)) => items.last_mut(),
            _ => None,
        };
        match next {
            Some(value) => cursor = value,
            None => return Value::Null,
        }
    }
    cursor.take()
}

/// Like [`locate`] but only checks that the path resolves to an object or array.
pub fn has_root(root: &Value, path: &[Step]) -> bool {
    matches!(
        Node::new(root).path(path).value(),
        Some(Value::Object(_)) | Some(Value::Array(_))
    )
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    let first = needle[0];
    let mut offset = 0;
    while offset + needle.len() <= haystack.len() {
        let pos = haystack[offset..=haystack.len() - needle.len()]
            .iter()
            .position(|&b| b == first)?;
        let at = offset + pos;
        if haystack[at..].starts_with(needle) {
            return Some(at);
        }
        offset = at + 1;
    }
    None
}

fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if from > hay.len() || needle.len() > hay.len() - from {
        return None;
    }
    (from..=hay.len() - needle.len()).find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Rewrites JavaScript `\xNN` escapes, which JSON does not allow, as `\u00NN`.
fn normalize_js_escapes(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('x') => {
                let hex: String = chars.clone().take(2).collect();
                if hex.len() == 2 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                    out.push_str("\\u00");
                    out.push_str(&hex);
                    chars.next();
                    chars.next();
                } else {
                    out.push_str("\\x");
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
