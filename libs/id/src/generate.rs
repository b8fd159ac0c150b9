//! Identifier generation.

use rand::Rng;
use uuid::Uuid;

use crate::config::IdConfig;
use crate::value::TypeId;

/// Alphabet for the non-entropy portion of the tail.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Number of characters taken from the UUID-derived entropy segment.
pub const ENTROPY_SEGMENT: usize = 8;

/// Generates a fresh identifier for the given configuration.
///
/// The tail opens with the first [`ENTROPY_SEGMENT`] hex characters of a
/// new UUID v4 and is padded to the configured length with characters
/// drawn uniformly from [`ALPHABET`]. When the configured length is
/// shorter than the entropy segment, the segment is truncated and the
/// alphabet loop contributes nothing.
///
/// Collisions across calls are probabilistically negligible but not
/// impossible; no check against prior allocations is made. The storage
/// layer's unique-key constraint is the authoritative backstop.
///
/// Safe for concurrent callers: both random sources are thread-local and
/// take no process-wide lock.
pub fn generate(config: &IdConfig) -> TypeId {
    let length = config.length();
    let mut id = String::with_capacity(config.prefix().len() + 1 + length);
    id.push_str(config.prefix());
    id.push('_');

    let hex = Uuid::new_v4().simple().to_string();
    id.push_str(&hex[..ENTROPY_SEGMENT.min(length)]);

    let mut rng = rand::rng();
    for _ in 0..length.saturating_sub(ENTROPY_SEGMENT) {
        id.push(ALPHABET[rng.random_range(0..ALPHABET.len())] as char);
    }

    TypeId::from_generated(id)
}
