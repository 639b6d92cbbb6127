//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate cross-cutting concerns (analytics, translations)
//! from page and component logic to improve reuse and testability.

pub mod analytics;
pub mod i18n;
