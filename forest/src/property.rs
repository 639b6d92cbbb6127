//! Property, stand and bounding-box records as served by the Scout API.
//!
//! DESIGN
//! ======
//! Records are immutable snapshots: a refetch replaces them wholesale. Every
//! measure the API may omit is an `Option` so views can tell "no data" apart
//! from a real zero.

#[cfg(test)]
#[path = "property_test.rs"]
mod property_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Development-class keys the API uses for stands without a class.
pub const UNCLASSIFIED_KEYS: [&str; 2] = ["null", "none"];

/// A forestry real-estate unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub cadastral_id: String,
    pub parcel_id: String,
    #[serde(default)]
    pub property_area_ha: f64,
    #[serde(default)]
    pub forest_area_ha: f64,
    #[serde(default)]
    pub is_purchased: bool,
    #[serde(default, rename = "ccCarbonTCO2eq")]
    pub cc_carbon_tco2eq: Option<f64>,

    #[serde(default)]
    pub cc_total_m3: Option<f64>,
    #[serde(default)]
    pub cc_pine_m3: Option<f64>,
    #[serde(default)]
    pub cc_spruce_m3: Option<f64>,
    #[serde(default)]
    pub cc_deciduous_m3: Option<f64>,

    #[serde(default)]
    pub cc_total_timber_m3: Option<f64>,
    #[serde(default)]
    pub cc_pine_timber_m3: Option<f64>,
    #[serde(default)]
    pub cc_spruce_timber_m3: Option<f64>,
    #[serde(default)]
    pub cc_deciduous_timber_m3: Option<f64>,

    #[serde(default)]
    pub cc_total_fiber_m3: Option<f64>,
    #[serde(default)]
    pub cc_pine_fiber_m3: Option<f64>,
    #[serde(default)]
    pub cc_spruce_fiber_m3: Option<f64>,
    #[serde(default)]
    pub cc_deciduous_fiber_m3: Option<f64>,
}

/// A homogeneous sub-area of a property.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stand {
    #[serde(deserialize_with = "deserialize_string_from_any")]
    pub mk_stand_id: String,
    #[serde(deserialize_with = "deserialize_string_from_any")]
    pub mk_stand_number: String,
    #[serde(default)]
    pub stand_area_ha: f64,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_any")]
    pub mk_fertility_class: Option<String>,
    #[serde(default)]
    pub cc_mean_height_m: Option<f64>,
    #[serde(default)]
    pub cc_main_species: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_any")]
    pub mk_development_class: Option<String>,

    #[serde(default)]
    pub cc_pine_timber_m3_ha: Option<f64>,
    #[serde(default)]
    pub cc_spruce_timber_m3_ha: Option<f64>,
    #[serde(default)]
    pub cc_deciduous_timber_m3_ha: Option<f64>,
    #[serde(default)]
    pub cc_pine_fiber_m3_ha: Option<f64>,
    #[serde(default)]
    pub cc_spruce_fiber_m3_ha: Option<f64>,
    #[serde(default)]
    pub cc_deciduous_fiber_m3_ha: Option<f64>,
    #[serde(default)]
    pub cc_total_m3_ha: Option<f64>,
    #[serde(default, rename = "ccCarbonTCO2eq")]
    pub cc_carbon_tco2eq: Option<f64>,
}

/// Page window metadata for a stand listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub page: u32,
}

/// One page of stands for a parcel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandPage {
    pub count: u32,
    pub pagination: Pagination,
    #[serde(default)]
    pub data: Vec<Stand>,
}

impl StandPage {
    /// Placeholder page used while the real page has not loaded.
    #[must_use]
    pub fn empty(limit: u32) -> Self {
        Self { count: 0, pagination: Pagination { limit, page: 1 }, data: Vec::new() }
    }

    /// Whether the page number addresses a real window over `count` items.
    ///
    /// An empty listing accepts only page 1.
    #[must_use]
    pub fn is_valid_window(&self) -> bool {
        let Pagination { limit, page } = self.pagination;
        if page == 0 {
            return false;
        }
        if self.count == 0 {
            return page == 1;
        }
        u64::from(page - 1) * u64::from(limit) < u64::from(self.count)
    }

    /// Stands ordered by their numeric stand number.
    ///
    /// Stand numbers that do not parse as numbers sort after all numeric ones,
    /// keeping their original relative order.
    #[must_use]
    pub fn sorted_by_stand_number(&self) -> Vec<&Stand> {
        let mut stands: Vec<&Stand> = self.data.iter().collect();
        stands.sort_by(|a, b| {
            let a = a.mk_stand_number.trim().parse::<f64>().ok();
            let b = b.mk_stand_number.trim().parse::<f64>().ok();
            match (a, b) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        });
        stands
    }
}

/// Stands of one development class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandGroup {
    #[serde(default, deserialize_with = "deserialize_opt_string_from_any")]
    pub key: Option<String>,
    #[serde(default)]
    pub data: Vec<Stand>,
}

impl StandGroup {
    /// True when the group collects stands without a development class.
    #[must_use]
    pub fn is_unclassified(&self) -> bool {
        self.key
            .as_deref()
            .map_or(true, |key| UNCLASSIFIED_KEYS.contains(&key))
    }

    /// Sum of stand areas in hectares.
    #[must_use]
    pub fn area_ha(&self) -> f64 {
        self.data.iter().map(|stand| stand.stand_area_ha).sum()
    }
}

/// All stands of a property grouped by development class.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandsByDevelopmentClass {
    #[serde(default)]
    pub stands_total_area: f64,
    #[serde(default)]
    pub stand_groups: Vec<StandGroup>,
}

/// Full property record plus its development-class breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub property: Property,
    #[serde(default)]
    pub stands_by_development_class: StandsByDevelopmentClass,
}

/// Geographic rectangle framing a parcel, `[minLon, minLat, maxLon, maxLat]` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Bbox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl From<[f64; 4]> for Bbox {
    fn from([min_lon, min_lat, max_lon, max_lat]: [f64; 4]) -> Self {
        Self { min_lon, min_lat, max_lon, max_lat }
    }
}

impl From<Bbox> for [f64; 4] {
    fn from(bbox: Bbox) -> Self {
        [bbox.min_lon, bbox.min_lat, bbox.max_lon, bbox.max_lat]
    }
}

impl Bbox {
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        ((self.min_lon + self.max_lon) * 0.5, (self.min_lat + self.max_lat) * 0.5)
    }
}

fn value_to_string<E: serde::de::Error>(value: serde_json::Value) -> Result<Option<String>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(E::custom(format!("expected string or number, got {other}"))),
    }
}

fn deserialize_string_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    value_to_string(value)?.ok_or_else(|| D::Error::custom("expected string or number, got null"))
}

fn deserialize_opt_string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    value_to_string(value)
}
