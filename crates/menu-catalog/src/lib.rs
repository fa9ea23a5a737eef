//! In-memory restaurant menu catalog.
//!
//! This crate holds the domain core of the menu app: an append-only catalog
//! of dishes, the validator that admits new dishes, and the course filter
//! used to browse them. It has no persistence; a catalog lives as long as the
//! value that owns it.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Ordered, append-only storage with change listeners ([`Catalog`])
//! - Validation of user-entered fields into a [`MenuItem`] ([`validate`])
//! - Stable filtering by [`CourseSelection`] ([`filter`])
//! - Clock-derived unique ids ([`ItemIdGenerator`])
//! - Built-in and JSON seed menus ([`default_menu`], [`MenuSeed`])
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use menu_catalog::{
//!     CandidateFields, Catalog, Course, CourseSelection, ItemIdGenerator, PricePolicy,
//!     default_menu, filter, validate,
//! };
//! use mockable::DefaultClock;
//!
//! let mut catalog = Catalog::from_items(default_menu());
//! let ids = ItemIdGenerator::new(Arc::new(DefaultClock));
//!
//! let fields = CandidateFields {
//!     name: "Tiramisu".to_owned(),
//!     description: "Coffee-soaked sponge with mascarpone".to_owned(),
//!     price_text: "8.50".to_owned(),
//!     course: Some(Course::Dessert),
//! };
//! let item = validate(&fields, PricePolicy::NonNegative, &ids).expect("valid item");
//! catalog.append(item);
//!
//! let desserts = filter(catalog.list(), CourseSelection::Course(Course::Dessert));
//! assert_eq!(desserts.len(), 2);
//! assert_eq!(catalog.len(), 5);
//! ```

mod catalog;
mod course;
mod error;
mod filter;
mod id;
mod item;
mod seed;
mod validation;

pub use catalog::Catalog;
pub use course::{Course, CourseSelection};
pub use error::{SeedError, UnknownCourse, ValidationError};
pub use filter::filter;
pub use id::ItemIdGenerator;
pub use item::{DEFAULT_IMAGE, MenuItem, MenuItemId, Price};
pub use seed::{MenuSeed, default_menu};
pub use validation::{CandidateFields, PricePolicy, validate};
