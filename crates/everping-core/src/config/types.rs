//! Configuration structure definitions
//!
//! The document is kept as a generic YAML mapping rather than a fixed struct
//! so that keys this crate does not know about survive a defaulting pass and
//! get written back exactly as the user left them.

use serde_yaml::{Mapping, Value};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::defaults::EXPECTED_VERSION;
use crate::{Error, Result};

/// Top-level key holding the version tag.
pub const VERSION_KEY: &str = "version";

/// Top-level key holding the message templates.
pub const MESSAGES_KEY: &str = "messages";

/// Message templates the command routers rely on.
///
/// The string form of each variant is the key used under `messages:` in the
/// configuration file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum MessageKey {
    /// Shown to a session asking for its own latency. Placeholders: `{ping}`
    OwnPing,
    /// Shown when asking for another session. Placeholders: `{player}`, `{ping}`
    OtherPing,
    /// Target name did not resolve to a live session
    PlayerNotFound,
    /// Self-query from a source with no session (console)
    PlayerOnly,
    /// Wrong number of arguments
    Usage,
}

impl MessageKey {
    /// Key name under `messages:`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    doc: Mapping,
}

impl Config {
    /// Wrap an already-built mapping.
    pub const fn from_mapping(doc: Mapping) -> Self {
        Self { doc }
    }

    /// Parse a YAML document.
    ///
    /// An empty document is accepted and yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the text is not valid YAML or its top level
    /// is not a mapping.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(text)?;
        match value {
            Value::Null => Ok(Self::from_mapping(Mapping::new())),
            Value::Mapping(doc) => Ok(Self::from_mapping(doc)),
            other => Err(Error::parse_error(format!(
                "Expected a mapping at the top level, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Serialize back to YAML text.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.doc)?)
    }

    /// The raw document.
    pub const fn as_mapping(&self) -> &Mapping {
        &self.doc
    }

    pub(crate) fn into_mapping(self) -> Mapping {
        self.doc
    }

    /// The version tag in its canonical string form, if present and scalar.
    ///
    /// YAML reads `version: 1.0` as a float; it is rendered back as `1.0`
    /// so that quoted and unquoted tags compare the same.
    pub fn version(&self) -> Option<String> {
        self.doc.get(VERSION_KEY).and_then(scalar_to_string)
    }

    /// Whether the version tag matches the one this build expects.
    pub fn is_current(&self) -> bool {
        self.version().as_deref() == Some(EXPECTED_VERSION)
    }

    /// The `messages` mapping, if present and actually a mapping.
    pub fn messages(&self) -> Option<&Mapping> {
        self.doc.get(MESSAGES_KEY).and_then(Value::as_mapping)
    }

    /// Whether a usable template exists for `key`.
    ///
    /// An empty entry (`own_ping:`) or a nested mapping does not count.
    pub fn has_message(&self, key: MessageKey) -> bool {
        self.message(key.as_str()).is_some()
    }

    /// Look up a template by raw key name.
    pub fn message(&self, key: &str) -> Option<String> {
        self.messages()
            .and_then(|messages| messages.get(key))
            .and_then(scalar_to_string)
    }

    /// Look up the template for `key`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingKey` if the template is absent or not a scalar.
    pub fn get_message(&self, key: MessageKey) -> Result<String> {
        self.message(key.as_str())
            .ok_or_else(|| Error::missing_key(key.as_str()))
    }
}

/// Whether `value` can be used as a message template.
pub(super) const fn is_template(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
