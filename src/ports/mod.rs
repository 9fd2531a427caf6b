//! Port traits defining the boundaries of the todo core.
//!
//! `DataLayer` is the storage interface callers program against and
//! `IdGenerator` supplies identifiers to the store. Implementations live in
//! `src/adapters/` and `src/store/`.

pub mod data_layer;
pub mod id_gen;

pub use data_layer::DataLayer;
pub use id_gen::IdGenerator;
