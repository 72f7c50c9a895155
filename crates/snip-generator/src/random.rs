use crate::Generator;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use snip_core::{GenerationError, ShortCode};

/// Number of random bytes drawn per short code.
///
/// Six bytes encode to exactly eight base64 characters, so no padding is
/// ever produced.
pub const CODE_BYTES: usize = 6;

/// Length of every code produced by [`RandomGenerator`].
pub const CODE_LENGTH: usize = 8;

/// Generates short codes from the operating system CSPRNG.
///
/// Each code is six random bytes encoded with the URL-safe base64 alphabet
/// (`A-Z a-z 0-9 - _`), giving 2^48 possible codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }

    fn encode(bytes: [u8; CODE_BYTES]) -> ShortCode {
        ShortCode::new(URL_SAFE_NO_PAD.encode(bytes))
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> Result<ShortCode, GenerationError> {
        let mut bytes = [0u8; CODE_BYTES];
        getrandom::getrandom(&mut bytes).map_err(|e| GenerationError::new(e.to_string()))?;
        Ok(Self::encode(bytes))
    }
}
