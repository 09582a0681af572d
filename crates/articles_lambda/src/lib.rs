//! AWS-oriented adapters and handlers for article publishing.
//!
//! This crate owns runtime integration details (Lambda handlers, DynamoDB and
//! S3 store adapters, environment configuration). Domain contracts, record
//! projections and key layout come from `articles_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod logging;
pub mod runtime;
