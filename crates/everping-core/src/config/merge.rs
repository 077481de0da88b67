//! Defaulting pass (Immutable functional pattern)
//!
//! Inserts the hard-coded template for every message key the document lacks.
//! A key whose value is not a scalar (left empty, or a nested mapping) counts
//! as missing and is overwritten in place. Usable keys are never touched, and
//! existing keys keep their position in the file.

use serde_yaml::{Mapping, Value};
use strum::IntoEnumIterator;
use tracing::warn;

use super::types::{is_template, Config, MessageKey, MESSAGES_KEY};

impl Config {
    /// Fill in missing message templates - immutable pattern
    ///
    /// Returns the merged configuration and the keys that were inserted, in
    /// declaration order. An empty list means the document was already
    /// complete and nothing needs to be persisted.
    pub fn with_defaults(self) -> (Self, Vec<MessageKey>) {
        let mut doc = self.into_mapping();

        match doc.get(MESSAGES_KEY) {
            Some(Value::Mapping(_)) => {}
            Some(other) => {
                warn!("`{MESSAGES_KEY}` is not a mapping ({other:?}), replacing it with defaults");
                doc.insert(Value::from(MESSAGES_KEY), Value::Mapping(Mapping::new()));
            }
            None => {
                doc.insert(Value::from(MESSAGES_KEY), Value::Mapping(Mapping::new()));
            }
        }

        let patched = doc
            .get_mut(MESSAGES_KEY)
            .and_then(Value::as_mapping_mut)
            .map(fill_missing)
            .unwrap_or_default();

        (Self::from_mapping(doc), patched)
    }

    /// Whether the defaulting pass would change anything.
    pub fn is_complete(&self) -> bool {
        MessageKey::iter().all(|key| self.has_message(key))
    }
}

fn fill_missing(messages: &mut Mapping) -> Vec<MessageKey> {
    let patched: Vec<MessageKey> = MessageKey::iter()
        .filter(|key| !messages.get(key.as_str()).is_some_and(is_template))
        .collect();

    for key in &patched {
        messages.insert(
            Value::from(key.as_str()),
            Value::from(key.default_template()),
        );
    }

    patched
}
