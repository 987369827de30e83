//! Authorization extractors.
//!
//! - [`admin::RequireAdmin`] -- Requires the configured admin bearer token.

pub mod admin;
