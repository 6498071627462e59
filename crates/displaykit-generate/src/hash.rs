//! Salted digest generation.

use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::debug;

use crate::error::{GenerateError, Result};

/// Longest hex prefix a caller may request.
const MAX_HASH_LENGTH: usize = 64;

/// Digest algorithm for [`generate_hash`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

/// Digests the salt and returns the first `length` hex characters.
///
/// The sole fallible operation in the library: `length` outside `[0, 64]`
/// is rejected with [`GenerateError::InvalidLength`]. All supported
/// digests produce at least 64 hex characters, so any accepted length can
/// be served.
///
/// ```
/// use displaykit_generate::{HashAlgorithm, generate_hash};
///
/// let hash = generate_hash(10, "pepper", HashAlgorithm::Sha256)?;
/// assert_eq!(hash.len(), 10);
/// # Ok::<(), displaykit_generate::GenerateError>(())
/// ```
pub fn generate_hash(length: usize, salt: &str, algorithm: HashAlgorithm) -> Result<String> {
    if length > MAX_HASH_LENGTH {
        return Err(GenerateError::InvalidLength(length));
    }

    let mut digest = match algorithm {
        HashAlgorithm::Sha256 => hex::encode(Sha256::digest(salt.as_bytes())),
        HashAlgorithm::Sha384 => hex::encode(Sha384::digest(salt.as_bytes())),
        HashAlgorithm::Sha512 => hex::encode(Sha512::digest(salt.as_bytes())),
    };
    debug!(length, ?algorithm, "digest computed");

    digest.truncate(length);
    Ok(digest)
}
