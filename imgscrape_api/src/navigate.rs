//! Total, panic-free navigation over parsed JSON trees.
//!
//! Provider payloads are walked by position and key through [`Node`], a
//! borrowed cursor that degrades to an absent node instead of failing. Chains
//! of accesses compose without null checks; the caller decides at the end
//! whether the defaulted leaves make a record unusable.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

/// One access in a navigation path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Array element by position. Negative positions never match.
    Index(i64),
    /// Object member by key.
    Key(&'static str),
    /// First array element.
    First,
    /// Last array element.
    Last,
}

/// Borrowed cursor into a [`Value`] tree. `Node(None)` is the absent node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Node<'a>(Option<&'a Value>);

impl<'a> Node<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(Some(value))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// The underlying value, if the node is present.
    pub fn value(&self) -> Option<&'a Value> {
        self.0
    }

    /// Element `index` of an array. Anything else yields the absent node.
    pub fn index(self, index: i64) -> Node<'a> {
        let Ok(index) = usize::try_from(index) else {
            return Node::absent();
        };
        Node(self.array().and_then(|items| items.get(index)))
    }

    /// Member `key` of an object. Anything else yields the absent node.
    pub fn key(self, key: &str) -> Node<'a> {
        Node(self.0.and_then(Value::as_object).and_then(|map| map.get(key)))
    }

    pub fn first(self) -> Node<'a> {
        Node(self.array().and_then(|items| items.first()))
    }

    pub fn last(self) -> Node<'a> {
        Node(self.array().and_then(|items| items.last()))
    }

    pub fn step(self, step: Step) -> Node<'a> {
        match step {
            Step::Index(index) => self.index(index),
            Step::Key(key) => self.key(key),
            Step::First => self.first(),
            Step::Last => self.last(),
        }
    }

    /// Applies every step of `path` in order.
    pub fn path(self, path: &[Step]) -> Node<'a> {
        path.iter().fold(self, |node, step| node.step(*step))
    }

    /// Elements of an array; empty for any other kind of node.
    pub fn items(self) -> impl Iterator<Item = Node<'a>> {
        self.array().into_iter().flatten().map(Node::new)
    }

    /// Number of array elements; 0 for any other kind of node.
    pub fn len(self) -> usize {
        self.array().map_or(0, Vec::len)
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// True for absent, null, empty strings, empty arrays and empty objects.
    pub fn is_blank(self) -> bool {
        match self.0 {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(Value::Array(items)) => items.is_empty(),
            Some(Value::Object(map)) => map.is_empty(),
            Some(_) => false,
        }
    }

    pub fn opt_str(self) -> Option<&'a str> {
        self.0.and_then(Value::as_str)
    }

    /// String leaf, or `""`. Numbers are not stringified.
    pub fn str(self) -> &'a str {
        self.opt_str().unwrap_or("")
    }

    pub fn string(self) -> String {
        self.str().to_string()
    }

    /// Integer leaf. Integral floats count; quoted numbers do not.
    pub fn opt_int(self) -> Option<i64> {
        match self.0? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
            _ => None,
        }
    }

    /// Integer leaf, or `0`.
    pub fn int(self) -> i64 {
        self.opt_int().unwrap_or(0)
    }

    /// Pixel dimension: negative values clamp to 0, as does anything non-numeric.
    pub fn dimension(self) -> u32 {
        self.opt_int()
            .map(|v| v.clamp(0, i64::from(u32::MAX)) as u32)
            .unwrap_or(0)
    }

    pub fn opt_bool(self) -> Option<bool> {
        self.0.and_then(Value::as_bool)
    }

    /// Boolean leaf, or `false`.
    pub fn boolean(self) -> bool {
        self.opt_bool().unwrap_or(false)
    }

    /// Timestamp leaf in RFC 3339 or zone-less ISO 8601 (read as UTC).
    pub fn opt_timestamp(self) -> Option<DateTime<Utc>> {
        let raw = self.opt_str()?.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.with_timezone(&Utc));
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }

    /// Timestamp leaf, or the Unix epoch.
    pub fn timestamp(self) -> DateTime<Utc> {
        self.opt_timestamp().unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    fn array(&self) -> Option<&'a Vec<Value>> {
        self.0.and_then(Value::as_array)
    }
}

impl<'a> From<&'a Value> for Node<'a> {
    fn from(value: &'a Value) -> Self {
        Node::new(value)
    }
}
