//! String descriptors and translation requests.
//!
//! A [`LocaleStr`] is what calling code hands over when it wants a
//! user-facing string: the source-language message, an optional explicit key,
//! and named extras to substitute into the selected template. Extras may
//! themselves be descriptors, which are resolved against the same locale
//! before substitution.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name of the extra that carries an explicit key rather than a placeholder.
pub const RESERVED_KEY_EXTRA: &str = "key";

/// A source-language string descriptor.
///
/// # Example
///
/// ```
/// use lexicon_core::LocaleStr;
///
/// let greeting = LocaleStr::new("Hi {name}").with_extra("name", "Ann");
/// assert_eq!(greeting.message(), "Hi {name}");
/// assert!(greeting.explicit_key().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleStr {
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    extras: BTreeMap<String, ExtraValue>,
}

impl LocaleStr {
    /// Creates a descriptor without a key or extras.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            key: None,
            extras: BTreeMap::new(),
        }
    }

    /// Sets the explicit lookup key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Adds a named extra.
    #[must_use]
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<ExtraValue>) -> Self {
        self.extras.insert(name.into(), value.into());
        self
    }

    /// Returns the source-language message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the extras, including any reserved `key` entry.
    #[must_use]
    pub const fn extras(&self) -> &BTreeMap<String, ExtraValue> {
        &self.extras
    }

    /// Returns the explicit key, if one was supplied.
    ///
    /// The dedicated field wins; otherwise a textual `key` extra is used, which
    /// is how keys arrive from hosts that only know about extras.
    #[must_use]
    pub fn explicit_key(&self) -> Option<&str> {
        self.key.as_deref().or_else(|| match self.extras.get(RESERVED_KEY_EXTRA) {
            Some(ExtraValue::Text(key)) => Some(key.as_str()),
            _ => None,
        })
    }
}

/// A named substitution value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtraValue {
    /// A nested descriptor, translated before substitution.
    Localized(LocaleStr),
    /// A sequence whose items are resolved one by one and joined with `/`.
    ///
    /// Descriptor items are translated; any other item renders as itself.
    List(Vec<ExtraValue>),
    /// Plain text, substituted verbatim.
    Text(String),
    /// An integer scalar.
    Integer(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A boolean scalar.
    Bool(bool),
}

impl ExtraValue {
    /// Converts a JSON value into an extra.
    ///
    /// Objects must be descriptors and `null` is rejected, both at the top
    /// level and inside arrays.
    fn from_json(value: Value) -> Result<Self, String> {
        match value {
            Value::String(text) => Ok(Self::Text(text)),
            Value::Bool(flag) => Ok(Self::Bool(flag)),
            Value::Number(number) => number
                .as_i64()
                .map(Self::Integer)
                .or_else(|| number.as_f64().map(Self::Float))
                .ok_or_else(|| format!("unsupported number '{number}'")),
            Value::Object(map) => serde_json::from_value(Value::Object(map))
                .map(Self::Localized)
                .map_err(|error| format!("invalid string descriptor: {error}")),
            Value::Array(items) => items
                .into_iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Null => Err(String::from("extras cannot be null")),
        }
    }
}

impl<'de> Deserialize<'de> for ExtraValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ExtraValue {
    /// Renders scalars; descriptors render as their untranslated messages.
    ///
    /// Floats always carry a fractional part or an exponent, so `1.0` stays
    /// `1.0` rather than collapsing to `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Localized(string) => f.write_str(string.message()),
            Self::List(items) => {
                let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
                f.write_str(&joined.join("/"))
            }
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<LocaleStr> for ExtraValue {
    fn from(value: LocaleStr) -> Self {
        Self::Localized(value)
    }
}

impl From<Vec<LocaleStr>> for ExtraValue {
    fn from(value: Vec<LocaleStr>) -> Self {
        Self::List(value.into_iter().map(Self::Localized).collect())
    }
}

impl From<Vec<ExtraValue>> for ExtraValue {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<&str> for ExtraValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ExtraValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ExtraValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ExtraValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ExtraValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// The payload of a translation call.
///
/// Plain strings are already final and pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Translatable {
    /// Already-rendered text.
    Plain(String),
    /// A descriptor to resolve.
    Localized(LocaleStr),
}

impl From<&str> for Translatable {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_owned())
    }
}

impl From<String> for Translatable {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

impl From<LocaleStr> for Translatable {
    fn from(value: LocaleStr) -> Self {
        Self::Localized(value)
    }
}

/// A descriptor paired with the locale it should be rendered in.
///
/// Deserialises from `{ "message": ..., "key": ..., "extras": {...},
/// "locale": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringRequest {
    #[serde(flatten)]
    string: LocaleStr,
    locale: String,
}

impl StringRequest {
    /// Creates a request for `string` in `locale`.
    #[must_use]
    pub fn new(string: LocaleStr, locale: impl Into<String>) -> Self {
        Self {
            string,
            locale: locale.into(),
        }
    }

    /// Returns the descriptor.
    #[must_use]
    pub const fn string(&self) -> &LocaleStr {
        &self.string
    }

    /// Returns the target locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}
