//! Admission checks for candidate menu items.
//!
//! # Validation Rules
//!
//! - `name`, `description` and `price` text must be non-empty once trimmed
//! - a course must be selected
//! - the price must parse as a finite decimal number
//! - the price must not be negative; under [`PricePolicy::StrictlyPositive`]
//!   it must also be greater than zero
//!
//! Checks run in that order and the first failure is reported.

use crate::course::Course;
use crate::error::ValidationError;
use crate::id::ItemIdGenerator;
use crate::item::{DEFAULT_IMAGE, ItemParts, MenuItem, Price};

/// Which prices are admissible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PricePolicy {
    /// Zero and positive prices are accepted.
    #[default]
    NonNegative,
    /// Only prices greater than zero are accepted.
    StrictlyPositive,
}

impl PricePolicy {
    /// Select the policy from a "strict price" toggle.
    #[must_use]
    pub const fn from_strict(strict: bool) -> Self {
        if strict {
            Self::StrictlyPositive
        } else {
            Self::NonNegative
        }
    }
}

/// Raw, user-entered fields for a new menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFields {
    /// Dish name as typed.
    pub name: String,
    /// Dish description as typed.
    pub description: String,
    /// Price text as typed.
    pub price_text: String,
    /// Selected course, if any.
    pub course: Option<Course>,
}

/// Validate candidate fields and build a menu item ready for the catalog.
///
/// # Errors
///
/// Returns [`ValidationError`] describing the first rule the fields break.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use menu_catalog::{CandidateFields, Course, ItemIdGenerator, PricePolicy, validate};
/// use mockable::DefaultClock;
///
/// let ids = ItemIdGenerator::new(Arc::new(DefaultClock));
/// let fields = CandidateFields {
///     name: " Grilled Salmon ".to_owned(),
///     description: "Fresh salmon with lemon butter sauce".to_owned(),
///     price_text: "29.99".to_owned(),
///     course: Some(Course::MainCourse),
/// };
///
/// let item = validate(&fields, PricePolicy::NonNegative, &ids).expect("valid item");
/// assert_eq!(item.name(), "Grilled Salmon");
/// assert_eq!(item.price().to_string(), "$29.99");
/// ```
pub fn validate(
    fields: &CandidateFields,
    policy: PricePolicy,
    ids: &ItemIdGenerator,
) -> Result<MenuItem, ValidationError> {
    let name = non_empty(&fields.name, "name")?;
    let description = non_empty(&fields.description, "description")?;
    let price_text = non_empty(&fields.price_text, "price")?;
    let course = fields.course.ok_or(ValidationError::MissingCourse)?;
    let price = parse_price(price_text, policy)?;

    Ok(MenuItem::from_parts(ItemParts {
        id: ids.next_id(),
        name: name.to_owned(),
        description: description.to_owned(),
        course,
        price,
        image: DEFAULT_IMAGE.to_owned(),
    }))
}

pub(crate) fn non_empty<'a>(
    value: &'a str,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed)
}

fn parse_price(text: &str, policy: PricePolicy) -> Result<Price, ValidationError> {
    let value = text
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidPrice {
            value: text.to_owned(),
        })?;
    check_price(value, text, policy)
}

pub(crate) fn check_price(
    value: f64,
    text: &str,
    policy: PricePolicy,
) -> Result<Price, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidPrice {
            value: text.to_owned(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativePrice {
            value: text.to_owned(),
        });
    }
    if policy == PricePolicy::StrictlyPositive && value <= 0.0 {
        return Err(ValidationError::NonPositivePrice {
            value: text.to_owned(),
        });
    }
    // Folds -0.0 into 0.0.
    let normalised = if value > 0.0 { value } else { 0.0 };
    Ok(Price::from_validated(normalised))
}
