//! Domain layer for the multilingual FAQ service.
//!
//! Holds the pieces that do not depend on storage or HTTP: shared id and
//! timestamp types, the domain error, the supported-language table, the
//! key-value cache capability, and the per-record translation cache.

pub mod cache;
pub mod error;
pub mod language;
pub mod translation;
pub mod types;
