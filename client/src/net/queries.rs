//! GraphQL operation documents, variables and response decoding.
//!
//! DESIGN
//! ======
//! Each operation declares the root fields it reads so the query cache can
//! evict every cached response touching a field after a mutation.

#[cfg(test)]
#[path = "queries_test.rs"]
mod queries_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::error::ApiError;
use super::types::{Bbox, Profile, Property, PropertyDetails, PurchaseResult, StandPage};

/// A named GraphQL document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub root_fields: &'static [&'static str],
    pub document: &'static str,
}

pub const PROPERTY_BBOX: Operation = Operation {
    name: "PropertyBbox",
    root_fields: &["propertyBbox"],
    document: "query PropertyBbox($parcelId: String!) {
  propertyBbox(parcelId: $parcelId) { bbox }
}",
};

pub const PROPERTY_PREVIEW: Operation = Operation {
    name: "PropertyPreview",
    root_fields: &["property"],
    document: "query PropertyPreview($parcelId: String!) {
  property(parcelId: $parcelId) {
    cadastralId parcelId propertyAreaHa forestAreaHa isPurchased
  }
}",
};

pub const PROPERTY_DETAILS: Operation = Operation {
    name: "PropertyDetails",
    root_fields: &["property", "standsByDevelopmentClass"],
    document: "query PropertyDetails($parcelId: String!) {
  property(parcelId: $parcelId) {
    cadastralId parcelId propertyAreaHa forestAreaHa isPurchased ccCarbonTCO2eq
    ccTotalM3 ccPineM3 ccSpruceM3 ccDeciduousM3
    ccTotalTimberM3 ccPineTimberM3 ccSpruceTimberM3 ccDeciduousTimberM3
    ccTotalFiberM3 ccPineFiberM3 ccSpruceFiberM3 ccDeciduousFiberM3
  }
  standsByDevelopmentClass(parcelId: $parcelId) {
    standsTotalArea
    standGroups { key data { mkStandId mkStandNumber standAreaHa } }
  }
}",
};

pub const STANDS: Operation = Operation {
    name: "Stands",
    root_fields: &["stands"],
    document: "query Stands($parcelId: String!, $pagination: PaginationInput) {
  stands(parcelId: $parcelId, pagination: $pagination) {
    count
    pagination { limit page }
    data {
      mkStandId mkStandNumber standAreaHa mkFertilityClass ccMeanHeightM
      ccMainSpecies mkDevelopmentClass
      ccPineTimberM3Ha ccSpruceTimberM3Ha ccDeciduousTimberM3Ha
      ccPineFiberM3Ha ccSpruceFiberM3Ha ccDeciduousFiberM3Ha
      ccTotalM3Ha ccCarbonTCO2eq
    }
  }
}",
};

pub const ORGANIZATION_PROPERTIES: Operation = Operation {
    name: "OrganizationProperties",
    root_fields: &["organizationProperties"],
    document: "query OrganizationProperties {
  organizationProperties {
    cadastralId parcelId propertyAreaHa forestAreaHa isPurchased
  }
}",
};

pub const PROFILE: Operation = Operation {
    name: "Profile",
    root_fields: &["profile"],
    document: "query Profile {
  profile { id name email organization { id name credits } }
}",
};

pub const SCOUT_PURCHASE: Operation = Operation {
    name: "ScoutPurchase",
    root_fields: &["scoutPurchase"],
    document: "mutation ScoutPurchase($parcelIds: [String!]!) {
  scoutPurchase(parcelIds: $parcelIds) { success }
}",
};

#[must_use]
pub fn parcel_variables(parcel_id: &str) -> Value {
    json!({ "parcelId": parcel_id })
}

#[must_use]
pub fn stands_variables(parcel_id: &str, page: u32) -> Value {
    json!({ "parcelId": parcel_id, "pagination": { "page": page } })
}

#[must_use]
pub fn purchase_variables(parcel_ids: &[String]) -> Value {
    json!({ "parcelIds": parcel_ids })
}

/// JSON body POSTed to the GraphQL endpoint.
#[must_use]
pub fn request_body(op: &Operation, variables: &Value) -> Value {
    json!({
        "operationName": op.name,
        "query": op.document,
        "variables": variables,
    })
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    #[serde(default)]
    message: String,
    #[serde(default)]
    extensions: Option<GraphqlErrorExtensions>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorExtensions {
    #[serde(default)]
    code: Option<String>,
}

/// Unwrap a GraphQL response envelope into its `data` object.
///
/// The first reported error wins, even when partial data came back.
///
/// # Errors
///
/// Returns [`ApiError::GraphQl`] for reported errors (code `UNKNOWN` when the
/// server sent none), [`ApiError::Decode`] for a malformed envelope and
/// [`ApiError::MissingData`] when `data` is absent.
pub fn into_data(body: Value) -> Result<Value, ApiError> {
    let response: GraphqlResponse = serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(first) = response.errors.into_iter().next() {
        let code = first
            .extensions
            .and_then(|ext| ext.code)
            .unwrap_or_else(|| "UNKNOWN".to_owned());
        return Err(ApiError::GraphQl { code, message: first.message });
    }
    match response.data {
        Some(Value::Null) | None => Err(ApiError::MissingData("data")),
        Some(data) => Ok(data),
    }
}

fn decode_field<T: DeserializeOwned>(data: &Value, field: &'static str) -> Result<T, ApiError> {
    let value = data.get(field).filter(|v| !v.is_null()).ok_or(ApiError::MissingData(field))?;
    T::deserialize(value).map_err(|e| ApiError::Decode(format!("{field}: {e}")))
}

/// `propertyBbox.bbox`
///
/// # Errors
///
/// Returns [`ApiError::MissingData`] or [`ApiError::Decode`] on an unexpected shape.
pub fn decode_bbox(data: &Value) -> Result<Bbox, ApiError> {
    #[derive(Deserialize)]
    struct PropertyBbox {
        bbox: Bbox,
    }
    decode_field::<PropertyBbox>(data, "propertyBbox").map(|b| b.bbox)
}

/// `property` with the preview selection.
///
/// # Errors
///
/// Returns [`ApiError::MissingData`] or [`ApiError::Decode`] on an unexpected shape.
pub fn decode_preview(data: &Value) -> Result<Property, ApiError> {
    decode_field(data, "property")
}

/// `property` plus `standsByDevelopmentClass`.
///
/// # Errors
///
/// Returns [`ApiError::MissingData`] or [`ApiError::Decode`] on an unexpected shape.
pub fn decode_details(data: &Value) -> Result<PropertyDetails, ApiError> {
    Ok(PropertyDetails {
        property: decode_field(data, "property")?,
        stands_by_development_class: decode_field(data, "standsByDevelopmentClass")?,
    })
}

/// # Errors
///
/// Returns [`ApiError::MissingData`] or [`ApiError::Decode`] on an unexpected shape.
pub fn decode_stands(data: &Value) -> Result<StandPage, ApiError> {
    decode_field(data, "stands")
}

/// # Errors
///
/// Returns [`ApiError::MissingData`] or [`ApiError::Decode`] on an unexpected shape.
pub fn decode_organization_properties(data: &Value) -> Result<Vec<Property>, ApiError> {
    decode_field(data, "organizationProperties")
}

/// # Errors
///
/// Returns [`ApiError::MissingData`] or [`ApiError::Decode`] on an unexpected shape.
pub fn decode_profile(data: &Value) -> Result<Profile, ApiError> {
    decode_field(data, "profile")
}

/// A purchase reported as unsuccessful without a GraphQL error is still a failure.
///
/// # Errors
///
/// Returns [`ApiError::GraphQl`] with code `PURCHASE_FAILED` when `success` is false.
pub fn decode_purchase(data: &Value) -> Result<(), ApiError> {
    let result: PurchaseResult = decode_field(data, "scoutPurchase")?;
    if result.success {
        Ok(())
    } else {
        Err(ApiError::GraphQl { code: "PURCHASE_FAILED".to_owned(), message: "purchase was not completed".to_owned() })
    }
}
