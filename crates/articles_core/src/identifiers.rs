//! Article identifiers.
//!
//! Identifiers are opaque strings shared by both stores. New identifiers are
//! drawn from a 128-bit random space (UUID v4), so generation needs no
//! counter, no lock and no coordination between concurrent invocations.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<Uuid> for ArticleId {
    fn from(value: Uuid) -> Self {
        Self(value.hyphenated().to_string())
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait IdentifierGenerator {
    fn generate(&self) -> ArticleId;
}

/// Random UUID v4 rendered in canonical lowercase hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdentifierGenerator;

impl IdentifierGenerator for RandomIdentifierGenerator {
    fn generate(&self) -> ArticleId {
        ArticleId::from(Uuid::new_v4())
    }
}

/// Deterministic generator for tests: `{prefix}-0`, `{prefix}-1`, ...
#[derive(Debug)]
pub struct SequentialIdentifierGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdentifierGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }
}

impl IdentifierGenerator for SequentialIdentifierGenerator {
    fn generate(&self) -> ArticleId {
        let value = self.next.fetch_add(1, Ordering::Relaxed);
        ArticleId::new(format!("{}-{value}", self.prefix))
    }
}
