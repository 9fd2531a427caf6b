//! ID generator port for producing todo identifiers.

use crate::error::Result;

/// Generates unique identifiers.
///
/// Implementations must never hand out the same value twice over their
/// lifetime. Substituting a predictable sequence makes store output
/// deterministic in tests and cassette playback.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;

    /// Fallible form of [`generate_id`](Self::generate_id), used by the
    /// store. Generators that can run dry report it here as `Internal`.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if no further id can be produced.
    fn try_generate_id(&self) -> Result<String> {
        Ok(self.generate_id())
    }
}
