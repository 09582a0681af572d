//! Shared article publishing domain primitives.
//!
//! This crate owns the request/response contracts, identifier generation,
//! record projections and storage key layout. It intentionally excludes AWS
//! SDK and Lambda runtime concerns, which live in `articles_lambda`.

pub mod contract;
pub mod identifiers;
pub mod records;
pub mod storage_keys;
