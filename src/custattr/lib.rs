//! # Custattr Architecture
//!
//! Custattr prepares the custom attributes of a customer address for storefront
//! display. It is a library first; the `custattr` binary is a thin client used
//! to run it against JSON catalogs.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, reads JSON, prints JSON                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Decorator (decorator.rs)                                   │
//! │  - Visibility filter + option labeling                      │
//! │  - Pure transform over an AttributeSet                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Providers (providers/)                                     │
//! │  - Metadata / Config / Option traits                        │
//! │  - Catalog: serde-backed implementation of all three        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use custattr::decorator::AttributeDecorator;
//! use custattr::model::{AttrOption, AttributeRecord, AttributeSet};
//! use custattr::providers::Catalog;
//!
//! let catalog = Catalog::new()
//!     .with_metadata("color", true)
//!     .with_attribute("customer_address", "color", &["customer_address_edit"])
//!     .with_options(
//!         "customer_address",
//!         "color",
//!         vec![AttrOption::new("1", "Red"), AttrOption::new("3", "Blue")],
//!     );
//!
//! let mut attributes = AttributeSet::new();
//! attributes.insert("color".to_string(), AttributeRecord::new("1,3"));
//!
//! let decorator = AttributeDecorator::new(&catalog, &catalog, &catalog);
//! let out = decorator.filter_visible(attributes).unwrap();
//! assert_eq!(out["color"].label.as_deref(), Some("Red, Blue"));
//! ```
//!
//! ## Module Overview
//!
//! - [`decorator`]: The filter/label transform
//! - [`providers`]: Collaborator traits and the JSON catalog
//! - [`model`]: Attribute records, metadata, config and options
//! - [`matching`]: Option value normalization
//! - [`config`]: Layered configuration
//! - [`error`]: Error types

pub mod config;
pub mod decorator;
pub mod error;
pub mod matching;
pub mod model;
pub mod providers;
