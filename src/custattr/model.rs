//! Core data types for custom address attributes.
//!
//! An [`AttributeSet`] maps attribute codes to [`AttributeRecord`]s as they arrive
//! from the address entity. [`AttributeMetadata`], [`AttributeConfig`] and
//! [`AttrOption`] are what the collaborators hand back when the set is decorated.
//!
//! Option values and record values are carried as text. Sources that store them
//! as JSON numbers (option ids usually are) are accepted and converted to their
//! textual form on the way in, so `1` and `"1"` deserialize to the same value.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Custom attributes of one address, keyed by attribute code.
///
/// Ordering carries no meaning; a sorted map keeps serialized output stable.
pub type AttributeSet = BTreeMap<String, AttributeRecord>;

/// The stored data of a single custom attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    /// Raw stored value: one option id, a comma-separated list of ids, or free text.
    #[serde(
        default,
        deserialize_with = "text::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<String>,

    /// Human readable option label(s), joined with `", "`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Any other fields of the record, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AttributeRecord {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// The stored value, or `None` when it is absent, empty or `"0"`.
    ///
    /// A lone `0` is the "nothing selected" value of a select attribute.
    pub fn non_empty_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty() && *v != "0")
    }
}

/// Storefront metadata for one address attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeMetadata {
    pub attribute_code: String,
    pub is_visible: bool,
    /// Forms as reported alongside the metadata. Informational only: the
    /// visibility filter reads form assignments from the attribute config.
    #[serde(default)]
    pub used_in_forms: Vec<String>,
}

impl AttributeMetadata {
    pub fn new(attribute_code: impl Into<String>, is_visible: bool) -> Self {
        Self {
            attribute_code: attribute_code.into(),
            is_visible,
            used_in_forms: Vec::new(),
        }
    }
}

/// Entity configuration of an attribute, as resolved by a [`crate::providers::ConfigProvider`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeConfig {
    #[serde(default)]
    pub attribute_code: String,
    #[serde(default)]
    pub used_in_forms: Option<Vec<String>>,
}

impl AttributeConfig {
    pub fn new<I, S>(attribute_code: impl Into<String>, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attribute_code: attribute_code.into(),
            used_in_forms: Some(forms.into_iter().map(Into::into).collect()),
        }
    }

    /// Forms the attribute is assigned to. Empty when none are declared.
    pub fn used_in_forms(&self) -> &[String] {
        self.used_in_forms.as_deref().unwrap_or_default()
    }
}

/// One allowed value of a fixed-choice attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrOption {
    #[serde(deserialize_with = "text::deserialize")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AttrOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
        }
    }

    /// An option with no label of its own.
    pub fn unlabeled(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    /// The label to show for this option, falling back to its value.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// Deserializers accepting either JSON strings or numbers as text.
mod text {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    impl From<TextOrNumber> for String {
        fn from(raw: TextOrNumber) -> Self {
            match raw {
                TextOrNumber::Text(s) => s,
                TextOrNumber::Number(n) => n.to_string(),
            }
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        TextOrNumber::deserialize(deserializer).map(String::from)
    }

    pub(super) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(String::from))
    }
}
