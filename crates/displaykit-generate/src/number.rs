//! Random number generation.

use rand::Rng;
use tracing::warn;

/// Generates a random integer with up to `digits` decimal digits, i.e.
/// uniform in `[0, 10^digits)`.
pub fn generate_number(digits: u32) -> u64 {
    let upper = 10u64.saturating_pow(digits).max(1);
    rand::thread_rng().gen_range(0..upper)
}

/// Generates a random integer in `[min, max]`.
///
/// When `min > max` a warning is logged and the unmodified arithmetic is
/// kept: the reversed bounds feed straight into
/// `⌊r · (max − min + 1)⌋ + min`, leaving the resulting range undefined
/// rather than silently swapping the arguments.
pub fn generate_number_between(min: i64, max: i64) -> i64 {
    if min > max {
        warn!(min, max, "min value is higher than max value");
    }
    let r: f64 = rand::random();
    (r * ((max - min + 1) as f64) + min as f64).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_stays_under_digit_bound() {
        for _ in 0..200 {
            assert!(generate_number(3) < 1000);
        }
        assert_eq!(generate_number(0), 0);
    }

    #[test]
    fn between_covers_the_inclusive_range() {
        for _ in 0..200 {
            let value = generate_number_between(-5, 5);
            assert!((-5..=5).contains(&value));
        }
        assert_eq!(generate_number_between(7, 7), 7);
    }

    #[test]
    fn between_with_reversed_bounds_does_not_panic() {
        // Reversed bounds keep the original arithmetic; the resulting
        // range is awaiting product confirmation, so only invocation is
        // exercised here.
        let _ = generate_number_between(10, 1);
    }
}
