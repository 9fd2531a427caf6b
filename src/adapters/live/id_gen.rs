//! Live adapters for the `IdGenerator` port.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::error::{DataLayerError, Result};
use crate::ports::IdGenerator;

/// Live ID generator that produces random UUIDs.
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates a new live ID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiveIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counter-backed generator issuing `"1"`, `"2"`, `"3"`, ...
///
/// Each instance counts independently; ids are unique per instance.
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id is `"1"`.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first id is `first`.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self { next: AtomicU64::new(first) }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        self.try_generate_id().unwrap_or_else(|e| panic!("{e}"))
    }

    fn try_generate_id(&self) -> Result<String> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
            .map(|id| id.to_string())
            .map_err(|_| DataLayerError::Internal("sequential id space exhausted".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_unique_ids() {
        let gen = LiveIdGenerator::new();
        let id1 = gen.generate_id();
        let id2 = gen.generate_id();

        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36); // UUID format: 8-4-4-4-12
    }

    #[test]
    fn sequential_counts_from_one() {
        let gen = SequentialIdGenerator::new();
        assert_eq!(gen.generate_id(), "1");
        assert_eq!(gen.generate_id(), "2");
        assert_eq!(gen.generate_id(), "3");
    }

    #[test]
    fn sequential_instances_are_independent() {
        let a = SequentialIdGenerator::starting_at(10);
        let b = SequentialIdGenerator::new();
        assert_eq!(a.generate_id(), "10");
        assert_eq!(b.generate_id(), "1");
        assert_eq!(a.generate_id(), "11");
    }

    #[test]
    fn sequential_reports_exhaustion_as_internal_error() {
        let gen = SequentialIdGenerator::starting_at(u64::MAX - 1);
        assert_eq!(gen.try_generate_id().unwrap(), (u64::MAX - 1).to_string());
        assert_eq!(
            gen.try_generate_id().unwrap_err(),
            DataLayerError::Internal("sequential id space exhausted".into())
        );
    }
}
