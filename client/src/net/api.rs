//! HTTP calls to the Scout API.
//!
//! Client-side (hydrate): real requests via `gloo-net`, credentials included.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-OK responses are decoded as
//! a GraphQL error envelope when possible so structured codes survive.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;
use serde_json::Value;

use super::error::ApiError;
use super::queries::{self, Operation};
use super::types::{Bbox, Profile, Property, PropertyDetails, StandPage};
use crate::config::ScoutConfig;
use crate::state::query_cache::QueryCache;

/// Error for a non-OK response, preferring a structured GraphQL error in the body.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_status(status: u16, body: Option<Value>) -> ApiError {
    match body.map(queries::into_data) {
        Some(Err(err @ ApiError::GraphQl { .. })) => err,
        _ => ApiError::Status(status),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn transport(err: impl std::fmt::Display) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// POST one operation and unwrap its `data`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status, envelope or GraphQL failures.
pub async fn execute(config: &ScoutConfig, op: &Operation, variables: &Value) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = queries::request_body(op, variables);
        let resp = gloo_net::http::Request::post(&config.graphql_url())
            .credentials(web_sys::RequestCredentials::Include)
            .json(&body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            let status = resp.status();
            return Err(error_from_status(status, resp.json::<Value>().await.ok()));
        }
        let body: Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        queries::into_data(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, op, variables);
        Err(ApiError::Unavailable)
    }
}

/// Cache-first variant of [`execute`]: a cached response is returned without
/// touching the network, a fresh one is stored.
///
/// # Errors
///
/// Same as [`execute`]; failures are never cached.
pub async fn cached_query(
    config: &ScoutConfig,
    cache: RwSignal<QueryCache>,
    op: &Operation,
    variables: Value,
) -> Result<Value, ApiError> {
    if let Some(hit) = cache.with_untracked(|c| c.get(op, &variables).cloned()) {
        return Ok(hit);
    }
    let data = execute(config, op, &variables).await?;
    cache.update(|c| c.insert(op, &variables, data.clone()));
    Ok(data)
}

/// # Errors
///
/// Returns [`ApiError`] when the read or decoding fails.
pub async fn fetch_bbox(config: &ScoutConfig, cache: RwSignal<QueryCache>, parcel_id: &str) -> Result<Bbox, ApiError> {
    let data = cached_query(config, cache, &queries::PROPERTY_BBOX, queries::parcel_variables(parcel_id)).await?;
    queries::decode_bbox(&data)
}

/// # Errors
///
/// Returns [`ApiError`] when the read or decoding fails.
pub async fn fetch_preview(
    config: &ScoutConfig,
    cache: RwSignal<QueryCache>,
    parcel_id: &str,
) -> Result<Property, ApiError> {
    let data = cached_query(config, cache, &queries::PROPERTY_PREVIEW, queries::parcel_variables(parcel_id)).await?;
    queries::decode_preview(&data)
}

/// # Errors
///
/// Returns [`ApiError`] when the read or decoding fails.
pub async fn fetch_details(
    config: &ScoutConfig,
    cache: RwSignal<QueryCache>,
    parcel_id: &str,
) -> Result<PropertyDetails, ApiError> {
    let data = cached_query(config, cache, &queries::PROPERTY_DETAILS, queries::parcel_variables(parcel_id)).await?;
    queries::decode_details(&data)
}

/// # Errors
///
/// Returns [`ApiError`] when the read or decoding fails.
pub async fn fetch_stands(
    config: &ScoutConfig,
    cache: RwSignal<QueryCache>,
    parcel_id: &str,
    page: u32,
) -> Result<StandPage, ApiError> {
    let data = cached_query(config, cache, &queries::STANDS, queries::stands_variables(parcel_id, page)).await?;
    queries::decode_stands(&data)
}

/// # Errors
///
/// Returns [`ApiError`] when the read or decoding fails.
pub async fn fetch_organization_properties(
    config: &ScoutConfig,
    cache: RwSignal<QueryCache>,
) -> Result<Vec<Property>, ApiError> {
    let data = cached_query(config, cache, &queries::ORGANIZATION_PROPERTIES, serde_json::json!({})).await?;
    queries::decode_organization_properties(&data)
}

/// Always hits the network so account state is fresh.
///
/// # Errors
///
/// Returns [`ApiError`] when the read or decoding fails.
pub async fn fetch_profile(config: &ScoutConfig) -> Result<Profile, ApiError> {
    let data = execute(config, &queries::PROFILE, &serde_json::json!({})).await?;
    queries::decode_profile(&data)
}

/// Purchase the given parcels in one atomic call.
///
/// # Errors
///
/// Returns [`ApiError`] when the mutation fails or reports `success: false`.
pub async fn purchase_properties(config: &ScoutConfig, parcel_ids: &[String]) -> Result<(), ApiError> {
    let data = execute(config, &queries::SCOUT_PURCHASE, &queries::purchase_variables(parcel_ids)).await?;
    queries::decode_purchase(&data)
}

/// Short-lived token authorising file downloads.
///
/// # Errors
///
/// Returns [`ApiError`] on transport, status or decoding failures.
pub async fn fetch_access_token(config: &ScoutConfig) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.access_token_url())
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: super::types::AccessTokenResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

/// Download raw file bytes from an API-relative `path`.
///
/// # Errors
///
/// Returns [`ApiError`] on transport or status failures.
pub async fn fetch_export_file(config: &ScoutConfig, path: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.api_url(path))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.binary().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, path);
        Err(ApiError::Unavailable)
    }
}

/// Fire-and-forget analytics POST; failures are only logged.
pub async fn post_analytics(url: &str, payload: &Value) {
    #[cfg(feature = "hydrate")]
    {
        let request = match gloo_net::http::Request::post(url).json(payload) {
            Ok(request) => request,
            Err(e) => {
                leptos::logging::warn!("analytics encode failed: {e}");
                return;
            }
        };
        if let Err(e) = request.send().await {
            leptos::logging::warn!("analytics post failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload);
    }
}
