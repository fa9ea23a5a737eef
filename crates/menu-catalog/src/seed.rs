//! Seed menus: the built-in dishes and versioned JSON seed files.
//!
//! Seed files look like:
//!
//! ```json
//! {
//!   "version": 1,
//!   "items": [
//!     {"id": "1", "name": "Caesar Salad", "course": "Appetizer",
//!      "description": "Crisp romaine", "price": 12.99, "image": "assets/icon.png"}
//!   ]
//! }
//! ```
//!
//! `image` may be omitted and defaults to [`DEFAULT_IMAGE`]. Seed prices are
//! checked against [`PricePolicy::NonNegative`] regardless of the policy used
//! for new items.

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::Deserialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::course::Course;
use crate::error::SeedError;
use crate::item::{DEFAULT_IMAGE, ItemParts, MenuItem, MenuItemId, Price};
use crate::validation::{PricePolicy, check_price, non_empty};

/// Current supported seed menu version.
const SUPPORTED_VERSION: u32 = 1;

/// The four dishes every fresh catalog starts with, one per course.
#[must_use]
pub fn default_menu() -> Vec<MenuItem> {
    [
        (
            "1",
            "Caesar Salad",
            Course::Appetizer,
            "Crisp romaine lettuce with homemade caesar dressing",
            12.99,
        ),
        (
            "2",
            "Ribeye Steak",
            Course::MainCourse,
            "Perfectly grilled 16oz ribeye with seasonal vegetables",
            34.99,
        ),
        (
            "3",
            "Chocolate Lava Cake",
            Course::Dessert,
            "Warm chocolate cake with molten center and vanilla ice cream",
            9.99,
        ),
        (
            "4",
            "Red Wine",
            Course::Beverage,
            "Selection of premium red wines from around the world",
            15.99,
        ),
    ]
    .into_iter()
    .map(|(id, name, course, description, price)| {
        MenuItem::from_parts(ItemParts {
            id: MenuItemId::from_owned(id.to_owned()),
            name: name.to_owned(),
            description: description.to_owned(),
            course,
            price: Price::from_validated(price),
            image: DEFAULT_IMAGE.to_owned(),
        })
    })
    .collect()
}

/// A validated seed menu loaded from JSON.
///
/// # Example
///
/// ```
/// use menu_catalog::MenuSeed;
///
/// let json = r#"{
///     "version": 1,
///     "items": [
///         {"id": "1", "name": "Soup", "course": "Appetizer", "description": "Hot", "price": 6.5}
///     ]
/// }"#;
///
/// let seed = MenuSeed::from_json(json).expect("valid seed");
/// let catalog = seed.into_catalog();
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSeed {
    items: Vec<MenuItem>,
}

impl MenuSeed {
    /// Parses a seed menu from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if:
    /// - The JSON is malformed or has unknown fields
    /// - The version is unsupported
    /// - The item list is empty
    /// - An id is blank, padded, or repeated
    /// - An item has a blank name or description or a negative price
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let raw: RawMenuSeed = serde_json::from_str(json).map_err(|e| SeedError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a seed menu from `path` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, SeedError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| SeedError::IoError {
                path: path.as_std_path().to_path_buf(),
                message: e.to_string(),
            })?;

        let seed = Self::from_json(&contents)?;
        info!(path = %path, item_count = seed.items.len(), "seed menu loaded");
        Ok(seed)
    }

    fn from_raw(raw: RawMenuSeed) -> Result<Self, SeedError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(SeedError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.items.is_empty() {
            return Err(SeedError::EmptyItems);
        }

        let mut seen = HashSet::new();
        let items = raw
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if item.id.is_empty() || item.id.trim() != item.id {
                    return Err(SeedError::InvalidId { index, id: item.id });
                }
                if !seen.insert(item.id.clone()) {
                    return Err(SeedError::DuplicateId { index, id: item.id });
                }
                item.into_menu_item()
                    .map_err(|source| SeedError::InvalidItem { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { items })
    }

    /// Items in file order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Consume the seed, yielding its items.
    #[must_use]
    pub fn into_items(self) -> Vec<MenuItem> {
        self.items
    }

    /// Build a catalog holding the seed items.
    #[must_use]
    pub fn into_catalog(self) -> Catalog {
        Catalog::from_items(self.items)
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawMenuSeed {
    version: u32,
    items: Vec<RawMenuItem>,
}

/// Raw JSON representation of a seed item.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawMenuItem {
    id: String,
    name: String,
    course: Course,
    description: String,
    price: f64,
    #[serde(default = "default_image")]
    image: String,
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_owned()
}

impl RawMenuItem {
    fn into_menu_item(self) -> Result<MenuItem, crate::error::ValidationError> {
        let name = non_empty(&self.name, "name")?.to_owned();
        let description = non_empty(&self.description, "description")?.to_owned();
        let price = check_price(self.price, &self.price.to_string(), PricePolicy::NonNegative)?;

        Ok(MenuItem::from_parts(ItemParts {
            id: MenuItemId::from_owned(self.id),
            name,
            description,
            course: self.course,
            price,
            image: self.image,
        }))
    }
}
