//! Menu item data model.

use std::fmt;

use serde::Serialize;

use crate::course::Course;

/// Display asset attached to items admitted through the validator.
pub const DEFAULT_IMAGE: &str = "assets/icon.png";

/// Opaque item identifier, unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MenuItemId(String);

impl MenuItemId {
    pub(crate) const fn from_owned(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for MenuItemId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<MenuItemId> for String {
    fn from(value: MenuItemId) -> Self {
        value.0
    }
}

/// Finite, non-negative item price.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub(crate) const fn from_validated(value: f64) -> Self {
        Self(value)
    }

    /// Numeric value of the price.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    /// Formats with a currency sign and two decimals, e.g. `$12.99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// A dish on the menu.
///
/// ## Invariants
/// - `name` and `description` are trimmed and non-empty.
/// - `price` is finite and non-negative.
///
/// Items are immutable once built; they can only be produced by
/// [`crate::validate`] or by loading a [`crate::MenuSeed`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    id: MenuItemId,
    name: String,
    description: String,
    course: Course,
    price: Price,
    image: String,
}

/// Already-validated fields used to assemble a [`MenuItem`].
pub(crate) struct ItemParts {
    pub(crate) id: MenuItemId,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) course: Course,
    pub(crate) price: Price,
    pub(crate) image: String,
}

impl MenuItem {
    pub(crate) fn from_parts(parts: ItemParts) -> Self {
        let ItemParts {
            id,
            name,
            description,
            course,
            price,
            image,
        } = parts;
        Self {
            id,
            name,
            description,
            course,
            price,
            image,
        }
    }

    /// Identifier assigned at creation.
    #[must_use]
    pub const fn id(&self) -> &MenuItemId {
        &self.id
    }

    /// Dish name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Dish description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Course the dish belongs to.
    #[must_use]
    pub const fn course(&self) -> Course {
        self.course
    }

    /// Dish price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Display asset reference.
    #[must_use]
    pub fn image(&self) -> &str {
        self.image.as_str()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(12.99, "$12.99")]
    #[case(0.0, "$0.00")]
    #[case(8.5, "$8.50")]
    #[case(100.0, "$100.00")]
    fn price_formats_with_two_decimals(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(Price::from_validated(value).to_string(), expected);
    }

    #[test]
    fn menu_item_serializes_to_camel_case() {
        let item = MenuItem::from_parts(ItemParts {
            id: MenuItemId::from_owned("7".to_owned()),
            name: "Tiramisu".to_owned(),
            description: "Coffee-soaked sponge".to_owned(),
            course: Course::Dessert,
            price: Price::from_validated(8.5),
            image: DEFAULT_IMAGE.to_owned(),
        });
        let json = serde_json::to_value(&item).expect("serialize");

        assert_eq!(json["id"], "7");
        assert_eq!(json["course"], "Dessert");
        assert_eq!(json["price"], 8.5);
        assert_eq!(json["image"], DEFAULT_IMAGE);
    }
}
