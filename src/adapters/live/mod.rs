//! Live adapters used outside of record/replay.
//!
//! The live `DataLayer` is `crate::store::TodoStore` itself.

pub mod id_gen;

pub use id_gen::{LiveIdGenerator, SequentialIdGenerator};
