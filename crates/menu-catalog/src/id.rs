//! Clock-derived item identifiers.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use mockable::Clock;

use crate::item::MenuItemId;

/// Issues item ids from the current time in milliseconds.
///
/// When the clock has not moved past the last issued value the next id is
/// `last + 1`, so ids from one generator are strictly increasing.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use menu_catalog::ItemIdGenerator;
/// use mockable::DefaultClock;
///
/// let ids = ItemIdGenerator::new(Arc::new(DefaultClock));
/// let first = ids.next_id();
/// let second = ids.next_id();
/// assert_ne!(first, second);
/// ```
pub struct ItemIdGenerator {
    clock: Arc<dyn Clock>,
    last_issued: AtomicI64,
}

impl ItemIdGenerator {
    /// Create a generator backed by `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last_issued: AtomicI64::new(i64::MIN),
        }
    }

    /// Issue the next id.
    #[must_use]
    pub fn next_id(&self) -> MenuItemId {
        let now = self.clock.utc().timestamp_millis();
        let previous = self
            .last_issued
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|current| current);
        let issued = now.max(previous.saturating_add(1));
        MenuItemId::from_owned(issued.to_string())
    }

    /// Mark `id` as taken so later ids are issued above it.
    ///
    /// Ids that are not decimal integers can never clash with issued ids
    /// and are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    ///
    /// use menu_catalog::{ItemIdGenerator, MenuSeed};
    /// use mockable::DefaultClock;
    ///
    /// let seed = MenuSeed::from_json(
    ///     r#"{"version": 1, "items": [{"id": "99999999999999", "name": "Tea",
    ///        "course": "Beverage", "description": "Green", "price": 3}]}"#,
    /// )
    /// .expect("valid seed");
    /// let ids = ItemIdGenerator::new(Arc::new(DefaultClock));
    /// for item in seed.items() {
    ///     ids.observe(item.id());
    /// }
    /// assert_eq!(ids.next_id().as_ref(), "100000000000000");
    /// ```
    pub fn observe(&self, id: &MenuItemId) {
        if let Ok(value) = id.as_ref().parse::<i64>() {
            self.last_issued.fetch_max(value, Ordering::SeqCst);
        }
    }
}

impl fmt::Debug for ItemIdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemIdGenerator")
            .field("last_issued", &self.last_issued.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
