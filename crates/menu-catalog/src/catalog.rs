//! Append-only, in-memory menu catalog.

use std::fmt;

use tracing::debug;

use crate::item::MenuItem;

type AppendListener = Box<dyn FnMut(&MenuItem)>;

/// Ordered collection of menu items owned for the lifetime of the process.
///
/// Items keep their insertion order and are never updated or removed.
/// Listeners registered with [`Catalog::subscribe`] run after every append,
/// letting dependent views refresh.
///
/// # Example
///
/// ```
/// use menu_catalog::{Catalog, default_menu};
///
/// let catalog = Catalog::from_items(default_menu());
/// assert_eq!(catalog.len(), 4);
/// assert_eq!(catalog.list()[0].name(), "Caesar Salad");
/// ```
#[derive(Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
    revision: u64,
    listeners: Vec<AppendListener>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding `items` in the given order.
    #[must_use]
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Current items in insertion order.
    #[must_use]
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    /// Add `item` at the end and notify listeners.
    pub fn append(&mut self, item: MenuItem) {
        debug!(
            item_id = %item.id(),
            course = %item.course(),
            position = self.items.len(),
            "menu item appended"
        );
        self.items.push(item);
        self.revision = self.revision.saturating_add(1);
        if let Some(appended) = self.items.last() {
            for listener in &mut self.listeners {
                listener(appended);
            }
        }
    }

    /// Register `listener` to run after every append.
    pub fn subscribe(&mut self, listener: impl FnMut(&MenuItem) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counter bumped by every append; zero for a fresh catalog.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("items", &self.items)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
