use std::fmt;

use rand::Rng;

/// Characters a generated identifier is drawn from.
pub const BASE62_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of the random part of a [`UniqueId`].
pub const UNIQUE_ID_LEN: usize = 6;

/// A short random identifier used to keep resource names from colliding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniqueId(String);

impl UniqueId {
    /// Generate a fresh identifier from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a fresh identifier from the given RNG.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..UNIQUE_ID_LEN)
            .map(|_| BASE62_ALPHABET[rng.gen_range(0..BASE62_ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    /// Generate an identifier prepended with `prefix`.
    pub fn with_prefix(prefix: &str) -> Self {
        let UniqueId(id) = Self::generate();
        Self(format!("{}{}", prefix, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UniqueId> for String {
    fn from(val: UniqueId) -> Self {
        val.0
    }
}
