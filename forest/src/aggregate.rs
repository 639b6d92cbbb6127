//! Chart-ready aggregates derived from property and stand records.
//!
//! Every helper is pure: the same snapshot in always yields the same rows out,
//! so views can recompute them on each render without caching.

#[cfg(test)]
#[path = "aggregate_test.rs"]
mod aggregate_test;

use serde::{Deserialize, Serialize};

use crate::property::{Property, StandsByDevelopmentClass};

/// Tree species tracked by the volume estimates, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Pine,
    Spruce,
    Deciduous,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Pine, Species::Spruce, Species::Deciduous];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Pine => "pine",
            Self::Spruce => "spruce",
            Self::Deciduous => "deciduous",
        }
    }

    /// Parse an API species key. `"none"` and unknown keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "pine" => Some(Self::Pine),
            "spruce" => Some(Self::Spruce),
            "deciduous" => Some(Self::Deciduous),
            _ => None,
        }
    }
}

/// Which volume estimate a chart shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VolumeKind {
    /// Standing volume.
    Total,
    Timber,
    Fiber,
}

impl VolumeKind {
    pub const ALL: [VolumeKind; 3] = [VolumeKind::Total, VolumeKind::Timber, VolumeKind::Fiber];
}

impl Property {
    /// Volume estimate in m³ for one species.
    #[must_use]
    pub fn volume(&self, kind: VolumeKind, species: Species) -> Option<f64> {
        match (kind, species) {
            (VolumeKind::Total, Species::Pine) => self.cc_pine_m3,
            (VolumeKind::Total, Species::Spruce) => self.cc_spruce_m3,
            (VolumeKind::Total, Species::Deciduous) => self.cc_deciduous_m3,
            (VolumeKind::Timber, Species::Pine) => self.cc_pine_timber_m3,
            (VolumeKind::Timber, Species::Spruce) => self.cc_spruce_timber_m3,
            (VolumeKind::Timber, Species::Deciduous) => self.cc_deciduous_timber_m3,
            (VolumeKind::Fiber, Species::Pine) => self.cc_pine_fiber_m3,
            (VolumeKind::Fiber, Species::Spruce) => self.cc_spruce_fiber_m3,
            (VolumeKind::Fiber, Species::Deciduous) => self.cc_deciduous_fiber_m3,
        }
    }

    /// Volume estimate in m³ summed over species, as reported by the API.
    #[must_use]
    pub fn volume_total(&self, kind: VolumeKind) -> Option<f64> {
        match kind {
            VolumeKind::Total => self.cc_total_m3,
            VolumeKind::Timber => self.cc_total_timber_m3,
            VolumeKind::Fiber => self.cc_total_fiber_m3,
        }
    }
}

/// One bar of a chart. `value` is `None` when the source had no data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub label: String,
    pub value: Option<f64>,
}

/// Round to zero decimals, keeping missing and non-finite values missing.
#[must_use]
pub fn round0(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite()).map(f64::round)
}

/// Per-species volume rows for `kind`, in [`Species::ALL`] order.
pub fn species_volumes<F>(property: &Property, kind: VolumeKind, label: F) -> Vec<ChartDatum>
where
    F: Fn(Species) -> String,
{
    Species::ALL
        .into_iter()
        .map(|species| ChartDatum { label: label(species), value: round0(property.volume(kind, species)) })
        .collect()
}

/// Share of total stand area per development class, in percent.
///
/// Groups keep the API's order. Unclassified groups are labelled with
/// `other_label`. When the total area is not positive every share is `None`.
pub fn development_class_shares(grouped: &StandsByDevelopmentClass, other_label: &str) -> Vec<ChartDatum> {
    let total = grouped.stands_total_area;
    grouped
        .stand_groups
        .iter()
        .map(|group| {
            let label = if group.is_unclassified() {
                other_label.to_owned()
            } else {
                group.key.clone().unwrap_or_default()
            };
            let value = if total > 0.0 { round0(Some(group.area_ha() * 100.0 / total)) } else { None };
            ChartDatum { label, value }
        })
        .collect()
}
