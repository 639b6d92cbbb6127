//! Forestry property domain models and derivation helpers for Scout views.
//!
//! This crate is UI-framework agnostic so the Leptos client can consume it
//! directly for rendering property previews, detail charts and stand tables.

pub mod aggregate;
pub mod export;
pub mod format;
pub mod pagination;
pub mod property;
pub mod viewport;

pub use aggregate::{ChartDatum, Species, VolumeKind};
pub use export::ExportFormat;
pub use property::{Bbox, Pagination, Property, PropertyDetails, Stand, StandGroup, StandPage, StandsByDevelopmentClass};
pub use viewport::MapViewport;
