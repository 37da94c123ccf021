//! Identifier generation.

use uuid::Uuid;

/// Produces globally unique IDs carrying a fixed textual prefix.
pub trait IdGenerator: Send + Sync {
    /// Returns a new unique ID starting with `prefix`.
    fn generate(&self, prefix: &str) -> String;
}

/// `PREFIX:uuid-v4` identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self, prefix: &str) -> String {
        format!("{prefix}:{}", Uuid::new_v4())
    }
}
