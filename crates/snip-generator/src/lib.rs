pub mod random;

pub use random::RandomGenerator;

use snip_core::{GenerationError, ShortCode};

/// Trait for generating short codes.
///
/// Implementations are pure generators that don't interact with storage.
/// Generation may fail when the underlying entropy source is unavailable.
pub trait Generator: Send + Sync + 'static {
    /// Generates a new short code.
    ///
    /// Codes should be unique with overwhelming probability; the store does
    /// not retry when a collision happens.
    fn generate(&self) -> Result<ShortCode, GenerationError>;
}
