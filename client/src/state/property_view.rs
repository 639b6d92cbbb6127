//! View-state controller for the property preview card and its detail panel.
//!
//! ARCHITECTURE
//! ============
//! The card shows one parcel in one of two modes, `Collapsed` (summary row)
//! or `Expanded` (charts, stand table, pagination). Four independent reads
//! feed it: bbox, preview, details and one stand page. This controller is a
//! plain state machine: every transition returns the reads to issue and the
//! analytics events to emit, and every completion is checked against the
//! parcel (and page) it was issued for. The Leptos layer only executes what
//! it is told.
//!
//! | Trigger                | Collapsed reads              | Expanded reads           |
//! |------------------------|------------------------------|--------------------------|
//! | parcel selected        | bbox?, preview, details*     | bbox?, preview, details, stands |
//! | mode toggled           | preview, details*            | preview, details, stands |
//! | stand page changed     | none                         | stands                   |
//! | preview completed      | details* if purchased        | none                     |
//!
//! `bbox?` only when no bbox is known for the parcel; `details*` only when the
//! preview reports the property as purchased.

#[cfg(test)]
#[path = "property_view_test.rs"]
mod property_view_test;

use forest::{Bbox, Property, PropertyDetails, StandPage};

use crate::net::error::ApiError;
use crate::util::analytics::AnalyticsEvent;

/// Lifecycle of one remote read.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    NotStarted,
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> Remote<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailMode {
    #[default]
    Collapsed,
    Expanded,
}

/// A read the view layer must issue, tagged with what it was issued for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReadRequest {
    Bbox { parcel_id: String },
    Preview { parcel_id: String },
    Details { parcel_id: String },
    Stands { parcel_id: String, page: u32 },
}

impl ReadRequest {
    #[must_use]
    pub fn parcel_id(&self) -> &str {
        match self {
            Self::Bbox { parcel_id }
            | Self::Preview { parcel_id }
            | Self::Details { parcel_id }
            | Self::Stands { parcel_id, .. } => parcel_id,
        }
    }
}

/// Completed read payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ReadOutcome {
    Bbox(Result<Bbox, ApiError>),
    Preview(Result<Property, ApiError>),
    Details(Result<PropertyDetails, ApiError>),
    Stands(Result<StandPage, ApiError>),
}

/// Side effects requested by a state change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    pub reads: Vec<ReadRequest>,
    pub events: Vec<AnalyticsEvent>,
}

impl Transition {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reads.is_empty() && self.events.is_empty()
    }
}

/// Ownership/availability label shown on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyStatus {
    Purchased,
    InBasket,
    Available,
}

impl PropertyStatus {
    #[must_use]
    pub fn translation_key(self) -> &'static str {
        match self {
            Self::Purchased => "property.status.purchased",
            Self::InBasket => "property.status.inBasket",
            Self::Available => "property.status.available",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyViewState {
    pub parcel_id: Option<String>,
    pub mode: DetailMode,
    /// 1-indexed stand table page.
    pub stands_page: u32,
    pub bbox: Remote<Bbox>,
    pub preview: Remote<Property>,
    pub details: Remote<PropertyDetails>,
    pub stands: Remote<StandPage>,
}

impl Default for PropertyViewState {
    fn default() -> Self {
        Self {
            parcel_id: None,
            mode: DetailMode::Collapsed,
            stands_page: 1,
            bbox: Remote::NotStarted,
            preview: Remote::NotStarted,
            details: Remote::NotStarted,
            stands: Remote::NotStarted,
        }
    }
}

impl PropertyViewState {
    /// Switch to `parcel_id`, discarding the previous parcel's data and
    /// resetting the stand page. An empty id clears the selection.
    pub fn select_parcel(&mut self, parcel_id: &str, bbox_known: bool) -> Transition {
        if self.parcel_id.as_deref() == Some(parcel_id) {
            return Transition::default();
        }
        let mode = self.mode;
        *self = Self { mode, ..Self::default() };
        if parcel_id.is_empty() {
            return Transition::default();
        }
        self.parcel_id = Some(parcel_id.to_owned());

        let mut reads = Vec::new();
        if !bbox_known {
            reads.push(ReadRequest::Bbox { parcel_id: parcel_id.to_owned() });
        }
        reads.extend(self.mode_reads());
        Transition { reads, events: vec![AnalyticsEvent::PreviewOpen { parcel_id: parcel_id.to_owned() }] }
    }

    pub fn set_expanded(&mut self, expanded: bool) -> Transition {
        let mode = if expanded { DetailMode::Expanded } else { DetailMode::Collapsed };
        if mode == self.mode {
            return Transition::default();
        }
        self.mode = mode;
        let Some(parcel_id) = self.parcel_id.clone() else {
            return Transition::default();
        };
        let event = match mode {
            DetailMode::Expanded => AnalyticsEvent::DetailOpen { parcel_id },
            DetailMode::Collapsed => AnalyticsEvent::DetailClose { parcel_id },
        };
        Transition { reads: self.mode_reads(), events: vec![event] }
    }

    pub fn toggle_expanded(&mut self) -> Transition {
        self.set_expanded(self.mode == DetailMode::Collapsed)
    }

    /// Change the stand table page; pages below 1 are treated as 1.
    pub fn set_stands_page(&mut self, page: u32) -> Transition {
        let page = page.max(1);
        if page == self.stands_page {
            return Transition::default();
        }
        self.stands_page = page;
        let reads = match (&self.parcel_id, self.mode) {
            (Some(parcel_id), DetailMode::Expanded) => {
                vec![ReadRequest::Stands { parcel_id: parcel_id.clone(), page }]
            }
            _ => Vec::new(),
        };
        Transition { reads, events: vec![AnalyticsEvent::PaginationChange { page }] }
    }

    fn mode_reads(&self) -> Vec<ReadRequest> {
        let Some(parcel_id) = self.parcel_id.clone() else {
            return Vec::new();
        };
        match self.mode {
            DetailMode::Collapsed => {
                let mut reads = vec![ReadRequest::Preview { parcel_id: parcel_id.clone() }];
                if self.preview_is_purchased() && self.details.ready().is_none() && !self.details.is_loading() {
                    reads.push(ReadRequest::Details { parcel_id });
                }
                reads
            }
            DetailMode::Expanded => vec![
                ReadRequest::Preview { parcel_id: parcel_id.clone() },
                ReadRequest::Details { parcel_id: parcel_id.clone() },
                ReadRequest::Stands { parcel_id, page: self.stands_page },
            ],
        }
    }

    /// Whether a response for `req` still belongs on screen.
    #[must_use]
    pub fn is_current(&self, req: &ReadRequest) -> bool {
        if self.parcel_id.as_deref() != Some(req.parcel_id()) {
            return false;
        }
        match req {
            ReadRequest::Stands { page, .. } => *page == self.stands_page,
            _ => true,
        }
    }

    /// Mark `req` in flight. Data already loaded for the same request stays
    /// visible. Returns `false` for a stale request.
    pub fn begin(&mut self, req: &ReadRequest) -> bool {
        if !self.is_current(req) {
            return false;
        }
        match req {
            ReadRequest::Bbox { .. } => begin_remote(&mut self.bbox),
            ReadRequest::Preview { .. } => begin_remote(&mut self.preview),
            ReadRequest::Details { .. } => begin_remote(&mut self.details),
            ReadRequest::Stands { page, .. } => {
                let same_page = self
                    .stands
                    .ready()
                    .is_some_and(|loaded| loaded.pagination.page == *page);
                if !same_page {
                    self.stands = Remote::Loading;
                }
            }
        }
        true
    }

    /// Apply a completed read. Returns `None` when the response is stale and
    /// was dropped, otherwise any follow-up reads.
    pub fn complete(&mut self, req: &ReadRequest, outcome: ReadOutcome) -> Option<Transition> {
        if !self.is_current(req) {
            return None;
        }
        let mut follow_up = Transition::default();
        match outcome {
            ReadOutcome::Bbox(result) => self.bbox = Remote::from_result(result),
            ReadOutcome::Preview(result) => {
                self.preview = Remote::from_result(result);
                if self.mode == DetailMode::Collapsed {
                    follow_up.reads = self.mode_reads().into_iter().filter(|r| matches!(r, ReadRequest::Details { .. })).collect();
                }
            }
            ReadOutcome::Details(result) => self.details = Remote::from_result(result),
            ReadOutcome::Stands(result) => self.stands = Remote::from_result(result),
        }
        Some(follow_up)
    }

    fn preview_is_purchased(&self) -> bool {
        self.preview.ready().is_some_and(|p| p.is_purchased)
    }

    /// Summary row is shown once the preview loaded and, for purchased
    /// properties, the details too.
    #[must_use]
    pub fn should_show_preview(&self) -> bool {
        match self.preview.ready() {
            Some(property) => !property.is_purchased || self.details.ready().is_some(),
            None => false,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.bbox.is_loading() || self.preview.is_loading() || self.details.is_loading()
    }

    #[must_use]
    pub fn show_detail_panel(&self) -> bool {
        self.mode == DetailMode::Expanded
            && self.details.ready().is_some()
            && !self.stands.is_failed()
    }

    /// Details of a purchased property, for purchased-only figures.
    #[must_use]
    pub fn purchased_details(&self) -> Option<&PropertyDetails> {
        self.details.ready().filter(|d| d.property.is_purchased)
    }

    /// Loaded stand page, or an empty first page while none is available.
    #[must_use]
    pub fn stand_page_or_empty(&self, limit: u32) -> StandPage {
        self.stands
            .ready()
            .cloned()
            .unwrap_or_else(|| StandPage::empty(limit))
    }

    #[must_use]
    pub fn status(&self, in_basket: bool) -> PropertyStatus {
        if self.preview_is_purchased() {
            PropertyStatus::Purchased
        } else if in_basket {
            PropertyStatus::InBasket
        } else {
            PropertyStatus::Available
        }
    }
}

fn begin_remote<T>(remote: &mut Remote<T>) {
    if remote.ready().is_none() {
        *remote = Remote::Loading;
    }
}
