//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each model is plain data with synchronous transitions so it can be tested
//! without a browser; components wrap them in `RwSignal`s provided as context.

pub mod basket;
pub mod map;
pub mod profile;
pub mod property_view;
pub mod purchase;
pub mod query_cache;
pub mod toasts;
