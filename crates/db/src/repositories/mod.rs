//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod cache_entry_repo;
pub mod faq_repo;

pub use cache_entry_repo::CacheEntryRepo;
pub use faq_repo::FaqRepo;
