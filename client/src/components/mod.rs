//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render property views and shared chrome while reading/writing
//! shared state from Leptos context providers.

pub mod bar_chart;
pub mod carousel;
pub mod export_menu;
pub mod pagination;
pub mod property_detail;
pub mod property_preview;
pub mod purchase_modal;
pub mod toast_stack;
