//! Purchase modal flow for a single parcel.
//!
//! The modal owns a `pending` flag that disables the primary action while the
//! remote purchase is in flight. Reconciliation after success is strictly
//! ordered: cache eviction first, then the basket mutation.

#[cfg(test)]
#[path = "purchase_test.rs"]
mod purchase_test;

use crate::net::error::ApiError;
use crate::state::basket::BasketState;
use crate::state::query_cache::QueryCache;
use crate::util::analytics::AnalyticsEvent;

/// Cache root fields invalidated by a successful purchase.
pub const PURCHASE_EVICTED_FIELDS: [&str; 2] = ["organizationProperties", "property"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PurchaseState {
    pub modal_open: bool,
    pub pending: bool,
    pub last_error: Option<ApiError>,
}

impl PurchaseState {
    pub fn open(&mut self, parcel_id: &str) -> Option<AnalyticsEvent> {
        if self.modal_open {
            return None;
        }
        self.modal_open = true;
        self.last_error = None;
        Some(AnalyticsEvent::PurchaseOpen { parcel_id: parcel_id.to_owned() })
    }

    /// Close without purchasing. Ignored while a purchase is in flight.
    pub fn cancel(&mut self, parcel_id: &str) -> Option<AnalyticsEvent> {
        if !self.modal_open || self.pending {
            return None;
        }
        self.modal_open = false;
        Some(AnalyticsEvent::PurchaseClose { parcel_id: parcel_id.to_owned() })
    }

    /// Start a submission. Returns `None` when one is already pending.
    pub fn begin_submit(&mut self, parcel_id: &str) -> Option<AnalyticsEvent> {
        if !self.modal_open || self.pending {
            return None;
        }
        self.pending = true;
        self.last_error = None;
        Some(AnalyticsEvent::PurchaseClick { parcel_id: parcel_id.to_owned() })
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.modal_open && !self.pending
    }

    /// Reconcile local state after the remote purchase succeeded.
    pub fn apply_success(
        &mut self,
        parcel_id: &str,
        cache: &mut QueryCache,
        basket: &mut BasketState,
    ) -> AnalyticsEvent {
        for field in PURCHASE_EVICTED_FIELDS {
            cache.evict_field(field);
        }
        basket.remove(parcel_id);
        self.pending = false;
        self.modal_open = false;
        AnalyticsEvent::PurchaseSuccess { parcel_id: parcel_id.to_owned() }
    }

    /// Keep the modal open for retry; basket and cache are left untouched.
    pub fn apply_failure(&mut self, err: ApiError) {
        self.pending = false;
        self.last_error = Some(err);
    }
}
