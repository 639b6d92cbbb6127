//! Session-scoped basket of parcels the user intends to purchase.
//!
//! DESIGN
//! ======
//! The basket is an injected store owned by the app root rather than a
//! global. Views subscribe by reading the signal; writes happen only from
//! user-triggered handlers, each replacing the whole value, so no locking is
//! needed on the single-threaded UI loop.

#[cfg(test)]
#[path = "basket_test.rs"]
mod basket_test;

use leptos::prelude::*;

use crate::util::analytics::AnalyticsEvent;

/// Parcel ids pending purchase, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BasketState {
    pub parcel_ids: Vec<String>,
}

impl BasketState {
    /// Append `parcel_id`. Callers check [`BasketState::contains`] first.
    pub fn add(&mut self, parcel_id: &str) {
        self.parcel_ids.push(parcel_id.to_owned());
    }

    /// Add from the preview card. Returns the analytics event to report, or
    /// `None` when the parcel is already in the basket. The caller notifies
    /// and closes the preview after a successful add.
    pub fn add_from_preview(&mut self, parcel_id: &str) -> Option<AnalyticsEvent> {
        if parcel_id.is_empty() || self.contains(parcel_id) {
            return None;
        }
        self.add(parcel_id);
        Some(AnalyticsEvent::AddToBasket { parcel_id: parcel_id.to_owned() })
    }

    /// Remove every occurrence of `parcel_id`. Returns whether anything was removed.
    pub fn remove(&mut self, parcel_id: &str) -> bool {
        let before = self.parcel_ids.len();
        self.parcel_ids.retain(|id| id != parcel_id);
        self.parcel_ids.len() != before
    }

    #[must_use]
    pub fn contains(&self, parcel_id: &str) -> bool {
        self.parcel_ids.iter().any(|id| id == parcel_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parcel_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parcel_ids.is_empty()
    }
}

/// Reactive handle to the basket, provided through context.
#[derive(Clone, Copy, Debug)]
pub struct BasketStore {
    state: RwSignal<BasketState>,
}

impl Default for BasketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BasketStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(BasketState::default()) }
    }

    pub fn add(&self, parcel_id: &str) {
        self.state.update(|basket| basket.add(parcel_id));
    }

    pub fn remove(&self, parcel_id: &str) -> bool {
        let mut removed = false;
        self.state.update(|basket| removed = basket.remove(parcel_id));
        removed
    }

    /// Mutate the underlying selection in one notification.
    pub fn update(&self, f: impl FnOnce(&mut BasketState)) {
        self.state.update(f);
    }

    /// Tracked membership check; re-runs the calling effect on change.
    #[must_use]
    pub fn contains(&self, parcel_id: &str) -> bool {
        self.state.with(|basket| basket.contains(parcel_id))
    }

    #[must_use]
    pub fn contains_untracked(&self, parcel_id: &str) -> bool {
        self.state.with_untracked(|basket| basket.contains(parcel_id))
    }

    /// Tracked basket size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.with(BasketState::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tracked snapshot for views that render the whole list.
    #[must_use]
    pub fn snapshot(&self) -> BasketState {
        self.state.get()
    }
}
