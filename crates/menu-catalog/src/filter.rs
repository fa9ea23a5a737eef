//! Course filter over a sequence of menu items.

use crate::course::CourseSelection;
use crate::item::MenuItem;

/// Items passing `selected`, in their original order.
///
/// [`CourseSelection::All`] yields every item.
///
/// # Example
///
/// ```
/// use menu_catalog::{Course, CourseSelection, default_menu, filter};
///
/// let menu = default_menu();
/// let desserts = filter(&menu, CourseSelection::Course(Course::Dessert));
/// assert_eq!(desserts.len(), 1);
/// assert_eq!(filter(&menu, CourseSelection::All).len(), menu.len());
/// ```
#[must_use]
pub fn filter(items: &[MenuItem], selected: CourseSelection) -> Vec<&MenuItem> {
    items
        .iter()
        .filter(|item| selected.matches(item.course()))
        .collect()
}
