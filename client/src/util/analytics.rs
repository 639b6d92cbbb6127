//! Fire-and-forget product analytics for the Scout property views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Events are always written to the browser log. When an analytics collector
//! is configured they are also POSTed to it; the response is never read.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use serde_json::{Value, json};

/// User interactions tracked by the property preview and detail views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalyticsEvent {
    DetailOpen { parcel_id: String },
    DetailClose { parcel_id: String },
    PreviewOpen { parcel_id: String },
    PreviewClose { parcel_id: String },
    AddToBasket { parcel_id: String },
    PurchaseOpen { parcel_id: String },
    PurchaseClose { parcel_id: String },
    PurchaseClick { parcel_id: String },
    PurchaseSuccess { parcel_id: String },
    PaginationChange { page: u32 },
    ExportCsv { parcel_id: String },
    ExportXlsx { parcel_id: String },
}

impl AnalyticsEvent {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DetailOpen { .. } => "Scout Property Detail Open",
            Self::DetailClose { .. } => "Scout Property Detail Close",
            Self::PreviewOpen { .. } => "Scout Property Preview Open",
            Self::PreviewClose { .. } => "Scout Property Preview Close",
            Self::AddToBasket { .. } => "Scout Property Preview Add To Basket",
            Self::PurchaseOpen { .. } => "Scout Property Preview Purchase Now Open",
            Self::PurchaseClose { .. } => "Scout Property Preview Purchase Now Close",
            Self::PurchaseClick { .. } => "Scout Property Preview Purchase Now Click",
            Self::PurchaseSuccess { .. } => "Scout Property Preview Purchase Now Success",
            Self::PaginationChange { .. } => "Scout Property Detail Pagination Change",
            Self::ExportCsv { .. } => "Scout Property Preview Export CSV",
            Self::ExportXlsx { .. } => "Scout Property Preview Export XLSX",
        }
    }

    #[must_use]
    pub fn properties(&self) -> Value {
        match self {
            Self::PaginationChange { page } => json!({ "page": page }),
            Self::DetailOpen { parcel_id }
            | Self::DetailClose { parcel_id }
            | Self::PreviewOpen { parcel_id }
            | Self::PreviewClose { parcel_id }
            | Self::AddToBasket { parcel_id }
            | Self::PurchaseOpen { parcel_id }
            | Self::PurchaseClose { parcel_id }
            | Self::PurchaseClick { parcel_id }
            | Self::PurchaseSuccess { parcel_id }
            | Self::ExportCsv { parcel_id }
            | Self::ExportXlsx { parcel_id } => json!({ "parcelId": parcel_id }),
        }
    }

    /// Body sent to the collector.
    #[must_use]
    pub fn payload(&self) -> Value {
        json!({ "event": self.name(), "properties": self.properties() })
    }
}

/// Analytics sink shared through context.
#[derive(Clone, Debug, Default)]
pub struct Analytics {
    collector_url: Option<String>,
}

impl Analytics {
    #[must_use]
    pub fn new(collector_url: Option<String>) -> Self {
        Self { collector_url }
    }

    pub fn track(&self, event: &AnalyticsEvent) {
        #[cfg(feature = "hydrate")]
        {
            log::debug!("analytics: {} {}", event.name(), event.properties());
            if let Some(url) = self.collector_url.clone() {
                let payload = event.payload();
                leptos::task::spawn_local(async move {
                    crate::net::api::post_analytics(&url, &payload).await;
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (event, &self.collector_url);
        }
    }
}
