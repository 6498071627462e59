//! Numeric predicates over mathematical values, not string forms.

/// Checks whether an integer is even.
pub fn is_even(value: i64) -> bool {
    value % 2 == 0
}

/// Checks whether an integer is odd.
pub fn is_odd(value: i64) -> bool {
    (value % 2).abs() == 1
}

/// Checks whether a number is strictly positive.
pub fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Checks whether a number is strictly negative.
pub fn is_negative(value: f64) -> bool {
    value < 0.0
}

/// Checks whether a number equals zero.
pub fn is_zero(value: f64) -> bool {
    value == 0.0
}

/// Checks whether an integer is prime, by trial division.
pub fn is_prime(value: u64) -> bool {
    if value < 2 {
        return false;
    }
    let mut divisor = 2u64;
    while divisor * divisor <= value {
        if value % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Checks whether a number has no fractional part.
pub fn is_integer(value: f64) -> bool {
    value.fract() == 0.0
}

/// Checks whether a number has a fractional part.
pub fn is_float(value: f64) -> bool {
    !is_integer(value)
}

/// Checks whether a value lies within `[min, max]` inclusive.
///
/// Reversed bounds are normalized first: `is_between(5, 10, 1)` is `true`.
/// This swap is the defined behavior of the predicate, not a repair.
pub fn is_between(value: f64, mut min: f64, mut max: f64) -> bool {
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    value >= min && value <= max
}

/// Checks whether `value` divides evenly by `divisor`.
///
/// A zero divisor yields `false` (the remainder is NaN).
pub fn is_divisible_by(value: f64, divisor: f64) -> bool {
    value % divisor == 0.0
}

/// Checks for a valid TCP/UDP port number (1-65535).
pub fn is_port(value: i64) -> bool {
    value > 0 && value <= 65_535
}

/// Checks whether a year is a leap year in the Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity() {
        assert!(is_even(0));
        assert!(is_even(-4));
        assert!(!is_even(7));
        assert!(is_odd(7));
        assert!(is_odd(-3));
        assert!(!is_odd(8));
    }

    #[test]
    fn signs() {
        assert!(is_positive(0.1));
        assert!(!is_positive(0.0));
        assert!(is_negative(-0.1));
        assert!(!is_negative(0.0));
        assert!(is_zero(0.0));
        assert!(is_zero(-0.0));
    }

    #[test]
    fn primality() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(97));
        assert!(!is_prime(7919 * 7919));
        assert!(is_prime(7919));
    }

    #[test]
    fn integer_and_float() {
        assert!(is_integer(4.0));
        assert!(is_integer(-3.0));
        assert!(!is_integer(4.5));
        assert!(is_float(4.5));
        assert!(!is_float(4.0));
        assert!(!is_integer(f64::NAN));
    }

    #[test]
    fn between_swaps_reversed_bounds() {
        assert!(is_between(5.0, 1.0, 10.0));
        assert!(is_between(5.0, 10.0, 1.0));
        assert!(is_between(1.0, 1.0, 10.0));
        assert!(!is_between(0.5, 1.0, 10.0));
    }

    #[test]
    fn divisibility() {
        assert!(is_divisible_by(10.0, 5.0));
        assert!(!is_divisible_by(10.0, 3.0));
        assert!(!is_divisible_by(10.0, 0.0));
    }

    #[test]
    fn port_range() {
        assert!(is_port(1));
        assert!(is_port(65_535));
        assert!(!is_port(0));
        assert!(!is_port(65_536));
        assert!(!is_port(-80));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }
}
