//! Identifier generation: v4-shaped UUIDs and timestamp-based short IDs.

use chrono::Utc;
use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
const RADIX_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const UUID_TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// Minimum short-ID length; shorter requests are clamped up.
const MIN_SHORT_ID_LENGTH: usize = 4;

/// Generates a v4-shaped UUID from random hex nibbles.
///
/// The layout matches UUID v4 (version nibble `4`, variant nibble in
/// `8..=b`) but no uniqueness is guaranteed beyond the randomness of the
/// nibbles.
pub fn generate_uuid() -> String {
    let mut rng = rand::thread_rng();
    let mut out = String::with_capacity(UUID_TEMPLATE.len());
    for c in UUID_TEMPLATE.chars() {
        match c {
            'x' => {
                let nibble: usize = rng.gen_range(0..16);
                out.push(char::from(HEX_DIGITS[nibble]));
            }
            'y' => {
                // variant nibble: 8, 9, a, or b
                let nibble: usize = rng.gen_range(8..12);
                out.push(char::from(HEX_DIGITS[nibble]));
            }
            other => out.push(other),
        }
    }
    out
}

/// Generates a short uppercase ID seeded by the current timestamp.
///
/// The millisecond timestamp is encoded in base `min(length, 36)` and
/// padded with random alphanumeric characters, then truncated to `length`.
/// Lengths under 4 are clamped up to 4.
pub fn generate_short_id(length: usize) -> String {
    let length = length.max(MIN_SHORT_ID_LENGTH);
    let radix = length.min(36) as u64;

    let timestamp = Utc::now().timestamp_millis().unsigned_abs();
    let mut id = encode_radix(timestamp, radix);

    let mut rng = rand::thread_rng();
    while id.len() < length {
        let digit: usize = rng.gen_range(0..36);
        id.push(char::from(RADIX_DIGITS[digit]));
    }

    id.truncate(length);
    id
}

/// Encodes an integer in the given radix (2-36) using uppercase digits.
fn encode_radix(mut value: u64, radix: u64) -> String {
    let radix = radix.clamp(2, 36);
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(RADIX_DIGITS[(value % radix) as usize]);
        value /= radix;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}
