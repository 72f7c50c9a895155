use crate::error::Result;
use crate::shortcode::ShortCode;

/// The URL store contract consumed by the HTTP layer.
///
/// Implementations must be safe to share between request handlers: reads may
/// run concurrently with each other, writes are exclusive. Both operations are
/// synchronous and hold any internal lock only for a single map access.
pub trait UrlStore: Send + Sync + 'static {
    /// Generates a fresh short code for `original_url` and records the mapping.
    ///
    /// The URL is stored verbatim; validating it is the caller's job.
    /// Returns `Err(Generation)` if no short code could be produced, and
    /// `Err(Conflict)` if the generated code is already taken; the existing
    /// mapping is left untouched in that case.
    fn save(&self, original_url: String) -> Result<ShortCode>;

    /// Resolves a short code to the URL it was created for.
    /// Returns `Err(NotFound)` if the code has no entry.
    fn get(&self, code: &str) -> Result<String>;
}
