//! Executes the reads requested by the property-view controller.
//!
//! Each read is marked in flight, fetched on the local task queue and fed
//! back through [`PropertyViewState::complete`], which drops responses for a
//! parcel or page that is no longer on screen.

#[cfg(feature = "hydrate")]
use leptos::logging::warn;
use leptos::prelude::*;

use crate::config::ScoutConfig;
use crate::state::map::MapViewState;
use crate::state::property_view::{PropertyViewState, ReadRequest, Transition};
use crate::state::query_cache::QueryCache;
use crate::util::analytics::Analytics;

/// Shared handles a read needs, pulled from context once per component.
#[derive(Clone)]
pub struct ReadDeps {
    pub config: ScoutConfig,
    pub analytics: Analytics,
    pub cache: RwSignal<QueryCache>,
    pub map: RwSignal<MapViewState>,
}

impl ReadDeps {
    #[must_use]
    pub fn from_context() -> Self {
        Self {
            config: expect_context::<ScoutConfig>(),
            analytics: expect_context::<Analytics>(),
            cache: expect_context::<RwSignal<QueryCache>>(),
            map: expect_context::<RwSignal<MapViewState>>(),
        }
    }
}

/// Emit the transition's analytics events and issue its reads.
pub fn run_transition(deps: &ReadDeps, view: RwSignal<PropertyViewState>, transition: Transition) {
    for event in &transition.events {
        deps.analytics.track(event);
    }
    for req in transition.reads {
        issue(deps.clone(), view, req);
    }
}

fn issue(deps: ReadDeps, view: RwSignal<PropertyViewState>, req: ReadRequest) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::api;
        use crate::state::property_view::ReadOutcome;

        if !view.try_update(|s| s.begin(&req)).unwrap_or(false) {
            warn!("skipping read for inactive parcel: {req:?}");
            return;
        }
        leptos::task::spawn_local(async move {
            let config = &deps.config;
            let outcome = match &req {
                ReadRequest::Bbox { parcel_id } => ReadOutcome::Bbox(api::fetch_bbox(config, deps.cache, parcel_id).await),
                ReadRequest::Preview { parcel_id } => {
                    ReadOutcome::Preview(api::fetch_preview(config, deps.cache, parcel_id).await)
                }
                ReadRequest::Details { parcel_id } => {
                    ReadOutcome::Details(api::fetch_details(config, deps.cache, parcel_id).await)
                }
                ReadRequest::Stands { parcel_id, page } => {
                    ReadOutcome::Stands(api::fetch_stands(config, deps.cache, parcel_id, *page).await)
                }
            };
            log_failure(&req, &outcome);
            let bbox = match &outcome {
                ReadOutcome::Bbox(Ok(bbox)) => Some(*bbox),
                _ => None,
            };

            match view.try_update(|s| s.complete(&req, outcome)).flatten() {
                None => warn!("discarded stale response: {req:?}"),
                Some(follow_up) => {
                    if let Some(bbox) = bbox {
                        frame_parcel(&deps, req.parcel_id(), bbox);
                    }
                    run_transition(&deps, view, follow_up);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (deps, view, req);
    }
}

#[cfg(feature = "hydrate")]
fn log_failure(req: &ReadRequest, outcome: &crate::state::property_view::ReadOutcome) {
    use crate::state::property_view::ReadOutcome;

    let err = match outcome {
        ReadOutcome::Bbox(Err(e)) => e,
        ReadOutcome::Preview(Err(e)) => e,
        ReadOutcome::Details(Err(e)) => e,
        ReadOutcome::Stands(Err(e)) => e,
        _ => return,
    };
    warn!("read failed for {req:?}: {err}");
}

/// Store the parcel bbox and frame the map on it.
#[cfg(feature = "hydrate")]
fn frame_parcel(deps: &ReadDeps, parcel_id: &str, bbox: forest::Bbox) {
    let padding = deps.config.map_padding_px;
    let max_zoom = deps.config.map_max_zoom;
    deps.map.update(|map| {
        map.set_parcel_bbox(parcel_id, bbox);
        map.request_zoom();
        map.apply_zoom(padding, max_zoom);
    });
}
