//! # Collaborator Interfaces
//!
//! The decorator never looks attribute data up itself. Everything it needs comes
//! from three collaborators:
//!
//! - [`MetadataProvider`]: the full list of address attribute metadata
//! - [`ConfigProvider`]: per-attribute entity configuration (form assignments)
//! - [`OptionProvider`]: the option list of a fixed-choice attribute
//!
//! All three are plain synchronous reads. Errors they raise are returned as-is
//! to the caller of [`crate::decorator::AttributeDecorator::filter_visible`].
//!
//! [`catalog::Catalog`] implements all three from serde data and is what tests
//! and the CLI run against.

use crate::error::Result;
use crate::model::{AttrOption, AttributeConfig, AttributeMetadata};

pub mod catalog;

pub use catalog::{Catalog, ProviderCall};

/// Source of address attribute metadata.
pub trait MetadataProvider {
    /// All address attribute metadata, not limited to any particular record set.
    fn get_all_attributes_metadata(&self) -> Result<Vec<AttributeMetadata>>;
}

/// Source of attribute entity configuration.
pub trait ConfigProvider {
    /// Configuration of `attribute_code` on `entity_type`.
    fn get_attribute(&self, entity_type: &str, attribute_code: &str) -> Result<AttributeConfig>;
}

/// Source of attribute options.
pub trait OptionProvider {
    /// Every option of `attribute_code` on `entity_type`, in display order.
    fn get_items(&self, entity_type: &str, attribute_code: &str) -> Result<Vec<AttrOption>>;
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for &T {
    fn get_all_attributes_metadata(&self) -> Result<Vec<AttributeMetadata>> {
        (**self).get_all_attributes_metadata()
    }
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for &T {
    fn get_attribute(&self, entity_type: &str, attribute_code: &str) -> Result<AttributeConfig> {
        (**self).get_attribute(entity_type, attribute_code)
    }
}

impl<T: OptionProvider + ?Sized> OptionProvider for &T {
    fn get_items(&self, entity_type: &str, attribute_code: &str) -> Result<Vec<AttrOption>> {
        (**self).get_items(entity_type, attribute_code)
    }
}
