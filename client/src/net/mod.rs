//! Networking modules for the Scout GraphQL API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `queries` holds operation documents and
//! envelope decoding, `reads` executes controller-requested reads, `export`
//! downloads property files and `types` defines account DTOs.

pub mod api;
pub mod error;
pub mod export;
pub mod queries;
pub mod reads;
pub mod types;
