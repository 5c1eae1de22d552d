//! # Attribute Decorator
//!
//! Prepares an address's custom attributes for storefront display in two passes:
//!
//! 1. **Visibility filter**: every attribute known to the [`MetadataProvider`] is
//!    checked. Invisible attributes are dropped. Visible attributes assigned to
//!    forms are dropped unless at least one of those forms is a storefront form.
//!    Attributes with no form assignment are kept.
//! 2. **Labeling**: each surviving record with a non-empty value has its
//!    comma-separated option ids resolved against the attribute's option list,
//!    and the matching labels are joined with `", "` into `label`.
//!
//! Labels are listed in option order, one per matching option, however many
//! tokens match it. A record with no matching option gets no `label`.
//!
//! Codes to drop are collected first and the filtered set is built afterwards.
//! Any collaborator error aborts the whole call.

use crate::config::DecoratorConfig;
use crate::error::Result;
use crate::matching::Tokens;
use crate::model::{AttrOption, AttributeRecord, AttributeSet};
use crate::providers::{ConfigProvider, MetadataProvider, OptionProvider};
use std::collections::BTreeSet;
use tracing::debug;

/// Filters and labels custom address attributes for storefront use.
///
/// Generic over its collaborators; any type implementing the provider traits
/// (including shared references to one) can be plugged in.
#[derive(Debug)]
pub struct AttributeDecorator<M, C, O> {
    metadata: M,
    attributes: C,
    options: O,
    config: DecoratorConfig,
}

impl<M, C, O> AttributeDecorator<M, C, O>
where
    M: MetadataProvider,
    C: ConfigProvider,
    O: OptionProvider,
{
    pub fn new(metadata: M, attributes: C, options: O) -> Self {
        Self {
            metadata,
            attributes,
            options,
            config: DecoratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DecoratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Drop attributes not visible on storefront forms, then attach option labels.
    ///
    /// The result never contains a code absent from `attributes`.
    #[tracing::instrument(level = "debug", skip_all, fields(attributes = attributes.len()))]
    pub fn filter_visible(&self, attributes: AttributeSet) -> Result<AttributeSet> {
        let hidden = self.hidden_codes()?;

        let visible: AttributeSet = attributes
            .into_iter()
            .filter(|(code, _)| !hidden.contains(code))
            .collect();

        self.attach_labels(visible)
    }

    /// Codes of every attribute that must not reach the storefront.
    fn hidden_codes(&self) -> Result<BTreeSet<String>> {
        let mut hidden = BTreeSet::new();

        for meta in self.metadata.get_all_attributes_metadata()? {
            if !meta.is_visible {
                debug!(attribute = %meta.attribute_code, "hiding invisible attribute");
                hidden.insert(meta.attribute_code);
                continue;
            }

            let attribute = self
                .attributes
                .get_attribute(&self.config.entity_type, &meta.attribute_code)?;
            let forms = attribute.used_in_forms();

            if !forms.is_empty() && !forms.iter().any(|f| self.config.is_storefront_form(f)) {
                debug!(
                    attribute = %meta.attribute_code,
                    forms = ?forms,
                    "hiding attribute not used in storefront forms"
                );
                hidden.insert(meta.attribute_code);
            }
        }

        Ok(hidden)
    }

    /// Set `label` on every record whose value resolves to at least one option.
    pub(crate) fn attach_labels(&self, mut attributes: AttributeSet) -> Result<AttributeSet> {
        for (code, record) in attributes.iter_mut() {
            if let Some(label) = self.resolve_label(code, record)? {
                debug!(attribute = %code, %label, "attached option label");
                record.label = Some(label);
            }
        }
        Ok(attributes)
    }

    fn resolve_label(&self, code: &str, record: &AttributeRecord) -> Result<Option<String>> {
        let Some(value) = record.non_empty_value() else {
            return Ok(None);
        };

        let tokens = Tokens::split(value);
        let options = self.options.get_items(&self.config.option_entity, code)?;

        let labels: Vec<&str> = options
            .iter()
            .filter(|opt| tokens.option_matches(&opt.value))
            .map(AttrOption::display_label)
            .collect();

        if labels.is_empty() {
            Ok(None)
        } else {
            Ok(Some(labels.join(", ")))
        }
    }
}
