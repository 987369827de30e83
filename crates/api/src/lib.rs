//! FAQ API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! page rendering) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod page;
pub mod page_cache;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod service;
pub mod state;
