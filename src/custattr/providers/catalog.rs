use super::{ConfigProvider, MetadataProvider, OptionProvider};
use crate::error::{AttrError, Result};
use crate::model::{AttrOption, AttributeConfig, AttributeMetadata};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Identifies one of the three collaborator calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderCall {
    Metadata,
    Attribute,
    Options,
}

type ErrorCtor = fn(String) -> AttrError;

/// Serde-backed attribute catalog implementing every collaborator trait.
///
/// Config and options are keyed by entity type, then attribute code:
///
/// ```json
/// {
///   "metadata": [{"attribute_code": "color", "is_visible": true}],
///   "attributes": {"customer_address": {"color": {"used_in_forms": ["customer_address_edit"]}}},
///   "options": {"customer_address": {"color": [{"value": 1, "label": "Red"}]}}
/// }
/// ```
///
/// Asking for the config of an attribute the catalog does not know is an
/// input error. Asking for options of an attribute without any yields an
/// empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    metadata: Vec<AttributeMetadata>,
    #[serde(default)]
    attributes: BTreeMap<String, BTreeMap<String, AttributeConfig>>,
    #[serde(default)]
    options: BTreeMap<String, BTreeMap<String, Vec<AttrOption>>>,
    #[serde(skip)]
    failures: HashMap<ProviderCall, (ErrorCtor, String)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(AttrError::Io)?;
        Self::from_json(&content)
    }

    /// Register metadata for an attribute.
    pub fn with_metadata(mut self, attribute_code: &str, is_visible: bool) -> Self {
        self.metadata.push(AttributeMetadata::new(attribute_code, is_visible));
        self
    }

    /// Register the entity configuration of an attribute.
    pub fn with_attribute(
        mut self,
        entity_type: &str,
        attribute_code: &str,
        forms: &[&str],
    ) -> Self {
        self.attributes
            .entry(entity_type.to_string())
            .or_default()
            .insert(
                attribute_code.to_string(),
                AttributeConfig::new(attribute_code, forms.iter().copied()),
            );
        self
    }

    /// Register the options of an attribute.
    pub fn with_options(
        mut self,
        entity_type: &str,
        attribute_code: &str,
        options: Vec<AttrOption>,
    ) -> Self {
        self.options
            .entry(entity_type.to_string())
            .or_default()
            .insert(attribute_code.to_string(), options);
        self
    }

    /// Make every subsequent `call` fail with `make(message)`.
    ///
    /// Used to exercise error propagation, e.g.
    /// `catalog.fail_on(ProviderCall::Options, AttrError::State, "options unavailable")`.
    pub fn fail_on(mut self, call: ProviderCall, make: ErrorCtor, message: &str) -> Self {
        self.failures.insert(call, (make, message.to_string()));
        self
    }

    fn check(&self, call: ProviderCall) -> Result<()> {
        match self.failures.get(&call) {
            Some((make, message)) => Err(make(message.clone())),
            None => Ok(()),
        }
    }
}

impl MetadataProvider for Catalog {
    fn get_all_attributes_metadata(&self) -> Result<Vec<AttributeMetadata>> {
        self.check(ProviderCall::Metadata)?;
        Ok(self.metadata.clone())
    }
}

impl ConfigProvider for Catalog {
    fn get_attribute(&self, entity_type: &str, attribute_code: &str) -> Result<AttributeConfig> {
        self.check(ProviderCall::Attribute)?;
        let config = self
            .attributes
            .get(entity_type)
            .and_then(|by_code| by_code.get(attribute_code))
            .ok_or_else(|| {
                AttrError::Input(format!(
                    "attribute \"{}\" does not exist for entity \"{}\"",
                    attribute_code, entity_type
                ))
            })?;

        Ok(AttributeConfig {
            attribute_code: attribute_code.to_string(),
            used_in_forms: config.used_in_forms.clone(),
        })
    }
}

impl OptionProvider for Catalog {
    fn get_items(&self, entity_type: &str, attribute_code: &str) -> Result<Vec<AttrOption>> {
        self.check(ProviderCall::Options)?;
        Ok(self
            .options
            .get(entity_type)
            .and_then(|by_code| by_code.get(attribute_code))
            .cloned()
            .unwrap_or_default())
    }
}
