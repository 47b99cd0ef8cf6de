//! Lazy, single-pass iteration over extracted records.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;

use crate::navigate::Node;
use crate::types::Provider;

/// Maps one raw entry to a record, or `None` to skip it.
pub type Mapper<T> = fn(Node<'_>) -> Option<T>;

/// Yields normalized records in the provider's native order.
///
/// Each entry is mapped only when it is pulled, so a consumer that stops early
/// pays only for what it consumed. Entries the mapper rejects are counted in
/// [`ResultIter::skipped`] rather than surfaced as errors.
pub struct ResultIter<T> {
    provider: Provider,
    entries: std::vec::IntoIter<Value>,
    map: Mapper<T>,
    skipped: usize,
    yielded: usize,
    cancel: Option<Arc<AtomicBool>>,
}

impl<T> ResultIter<T> {
    /// Builds an iterator over the elements of `root`. A root that is not an
    /// array produces an empty iterator.
    pub fn new(provider: Provider, root: Value, map: Mapper<T>) -> Self {
        let entries = match root {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            other => {
                tracing::warn!(
                    "{} results root is not an array (found {}), yielding nothing",
                    provider,
                    kind_of(&other)
                );
                Vec::new()
            }
        };
        tracing::debug!("{} payload holds {} candidate entries", provider, entries.len());
        Self {
            provider,
            entries: entries.into_iter(),
            map,
            skipped: 0,
            yielded: 0,
            cancel: None,
        }
    }

    /// Stops iteration as soon as `flag` is set.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Entries rejected by the mapper so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Records produced so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Entries not pulled yet.
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }

    /// True when entries were seen and every one of them was skipped, which
    /// usually means the provider changed its layout.
    pub fn is_drifting(&self) -> bool {
        self.skipped > 0 && self.yielded == 0
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

impl<T> Iterator for ResultIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if self.cancelled() {
                return None;
            }
            let entry = self.entries.next()?;
            match (self.map)(Node::new(&entry)) {
                Some(record) => {
                    self.yielded += 1;
                    return Some(record);
                }
                None => {
                    self.skipped += 1;
                    tracing::debug!(
                        "{} entry {} skipped",
                        self.provider,
                        self.yielded + self.skipped - 1
                    );
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cancelled() {
            return (0, Some(0));
        }
        (0, Some(self.entries.len()))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn positive(node: Node<'_>) -> Option<i64> {
        node.opt_int().filter(|n| *n > 0)
    }

    #[test]
    fn skips_rejected_entries_in_order() {
        let mut iter = ResultIter::new(Provider::Brave, json!([1, -1, "x", 2, 3]), positive);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.by_ref().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(iter.skipped(), 2);
        assert_eq!(iter.yielded(), 3);
        assert!(!iter.is_drifting());
    }

    #[test]
    fn bounded_consumption_leaves_rest_untouched() {
        let mut iter = ResultIter::new(Provider::Google, json!([1, 2, 3, 4]), positive);
        let first_two: Vec<i64> = iter.by_ref().take(2).collect();
        assert_eq!(first_two, vec![1, 2]);
        assert_eq!(iter.remaining(), 2);
        assert_eq!(iter.skipped(), 0);
    }

    #[test]
    fn all_skipped_reports_drift() {
        let mut iter = ResultIter::new(Provider::DuckDuckGo, json!(["a", "b"]), positive);
        assert_eq!(iter.next(), None);
        assert!(iter.is_drifting());
    }

    #[test]
    fn non_array_root_is_empty() {
        let iter = ResultIter::new(Provider::Google, json!({"not": "an array"}), positive);
        assert_eq!(iter.count(), 0);
        let iter = ResultIter::new(Provider::Google, Value::Null, positive);
        assert!(!iter.is_drifting());
    }

    #[test]
    fn cancellation_stops_iteration() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut iter =
            ResultIter::new(Provider::Brave, json!([1, 2, 3]), positive).with_cancel(flag.clone());
        assert_eq!(iter.next(), Some(1));
        flag.store(true, Ordering::Relaxed);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.remaining(), 2);
    }
}
