//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields and text encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::SafeSearchLevel;

/// Everything except the RFC 3986 unreserved characters.
const QUERY_TEXT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Trait implemented by all query builders. Provides access to the fields
/// every provider understands and the builder methods that set them.
pub trait Query {
    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Returns the common query fields.
    fn common(&self) -> &QueryCommon;

    /// Free search text, unencoded.
    fn text(&self) -> &str {
        &self.common().text
    }

    /// Sets the safe search level.
    fn with_safe_search(mut self, safe_search: SafeSearchLevel) -> Self
    where
        Self: Sized,
    {
        self.get_common().safe_search = safe_search;
        self
    }
}

/// Fields shared by all query types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Free search text.
    pub text: String,
    /// Safe search level. The default differs per provider.
    pub safe_search: SafeSearchLevel,
}

impl QueryCommon {
    pub fn new(text: &str, safe_search: SafeSearchLevel) -> Self {
        QueryCommon {
            text: text.to_string(),
            safe_search,
        }
    }

    /// Search text, percent-encoded for use as a query parameter value.
    pub fn encoded_text(&self) -> String {
        encode(&self.text)
    }
}

pub(crate) fn encode(text: &str) -> String {
    utf8_percent_encode(text, QUERY_TEXT).to_string()
}

/// Appends positional filter slots, each followed by a comma except the last.
/// Empty slots keep their comma so positions never shift.
pub(crate) fn push_slots(url: &mut String, slots: &[Option<String>]) {
    for (i, slot) in slots.iter().enumerate() {
        if let Some(slot) = slot {
            url.push_str(slot);
        }
        if i + 1 < slots.len() {
            url.push(',');
        }
    }
}
