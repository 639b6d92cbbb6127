//! Wire DTOs specific to the client that are not forestry records.
//!
//! DESIGN
//! ======
//! Property and stand records live in the `forest` crate; this module only
//! holds account and envelope types the views need.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use forest::{Bbox, Property, PropertyDetails, StandPage};

/// The signed-in account as returned by the `profile` query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub organization: Option<Organization>,
}

/// Organization owning purchased properties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    /// Remaining purchase credits, when the plan is credit based.
    #[serde(default)]
    pub credits: Option<i64>,
}

/// Body of the access-token endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Result payload of the `scoutPurchase` mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct PurchaseResult {
    pub success: bool,
}
