//! # Configuration
//!
//! Decorator settings are managed by [`confique`], which layers TOML files,
//! environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Environment variables**: `CUSTATTR_ENTITY_TYPE`, `CUSTATTR_OPTION_ENTITY`,
//!    `CUSTATTR_STOREFRONT_FORMS` (comma separated).
//! 2. **Explicit file**: passed with `--config`; must exist.
//! 3. **Project file**: `custattr.toml` in the working directory.
//! 4. **User file**: `custattr.toml` in the OS config directory (via `directories`).
//! 5. **Compiled defaults**.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `entity_type` | `customer_address` | Entity type for attribute config lookups |
//! | `option_entity` | `customer_address` | Address indexer entity for option lookups |
//! | `storefront_forms` | `["customer_register_address", "customer_address_edit"]` | Forms that expose an attribute on the storefront |

use crate::error::{AttrError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILENAME: &str = "custattr.toml";

/// Entity type the address attribute configuration is registered under.
pub const ADDRESS_ENTITY_TYPE: &str = "customer_address";

/// Entity the address indexer registers attribute options under.
pub const ADDRESS_INDEXER_ENTITY: &str = "customer_address";

/// Forms through which customers see address attributes on the storefront.
pub const STOREFRONT_FORMS: [&str; 2] = ["customer_register_address", "customer_address_edit"];

/// Settings for [`crate::decorator::AttributeDecorator`], stored in `custattr.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DecoratorConfig {
    /// Entity type used when resolving an attribute's form assignments.
    #[config(default = "customer_address", env = "CUSTATTR_ENTITY_TYPE")]
    pub entity_type: String,

    /// Entity used when fetching an attribute's options.
    #[config(default = "customer_address", env = "CUSTATTR_OPTION_ENTITY")]
    pub option_entity: String,

    /// Forms that make an attribute visible on the storefront.
    #[config(
        default = ["customer_register_address", "customer_address_edit"],
        env = "CUSTATTR_STOREFRONT_FORMS",
        parse_env = confique::env::parse::list_by_comma
    )]
    pub storefront_forms: Vec<String>,
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            entity_type: ADDRESS_ENTITY_TYPE.to_string(),
            option_entity: ADDRESS_INDEXER_ENTITY.to_string(),
            storefront_forms: STOREFRONT_FORMS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl DecoratorConfig {
    /// Load the layered configuration.
    ///
    /// `explicit` is a file named on the command line and is required to exist.
    /// `project_dir` is searched for an optional `custattr.toml`.
    pub fn load(explicit: Option<&Path>, project_dir: &Path) -> Result<Self> {
        let mut builder = Self::builder().env();

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(AttrError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.file(path);
        }

        builder = builder.file(project_dir.join(CONFIG_FILENAME));

        if let Some(dirs) = ProjectDirs::from("", "", "custattr") {
            builder = builder.file(dirs.config_dir().join(CONFIG_FILENAME));
        }

        Ok(builder.load()?)
    }

    /// Whether `form` is one of the storefront forms.
    pub fn is_storefront_form(&self, form: &str) -> bool {
        self.storefront_forms.iter().any(|f| f == form)
    }

    /// Look up a single setting by key, formatted for display.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "entity_type" => Some(self.entity_type.clone()),
            "option_entity" => Some(self.option_entity.clone()),
            "storefront_forms" => Some(self.storefront_forms.join(",")),
            _ => None,
        }
    }

    /// Every setting as `(key, value)` pairs.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        ["entity_type", "option_entity", "storefront_forms"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|v| (key, v)))
            .collect()
    }
}
