//! Decimal rounding shared by the numeric formatters.
//!
//! Rounding is half-up (away from zero), not half-even: 0.125 at zero
//! fraction digits must display as 13%, not 12%. Rust's `{:.*}` formatting
//! rounds ties to even on the binary value, so the rounding decision is made
//! here on a decimal rendering carrying guard digits instead.

/// Extra fraction digits rendered before the half-up decision is applied.
const GUARD_DIGITS: usize = 3;

/// Rounds the absolute value of `value` to `decimals` fraction digits,
/// half-up, returning the integer and fraction digit strings.
pub(crate) fn round_half_up(value: f64, decimals: usize) -> (String, String) {
    let abs = value.abs();
    let rendered = format!("{abs:.prec$}", prec = decimals + GUARD_DIGITS);
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|b| *b >= b'5');

    let mut int_len = int_part.len();
    if round_up {
        let mut idx = digits.len();
        loop {
            if idx == 0 {
                digits.insert(0, 1);
                int_len += 1;
                break;
            }
            idx -= 1;
            if digits[idx] == 9 {
                digits[idx] = 0;
            } else {
                digits[idx] += 1;
                break;
            }
        }
    }

    let int_digits: String = digits[..int_len].iter().map(|d| char::from(b'0' + d)).collect();
    let frac_digits: String = digits[int_len..].iter().map(|d| char::from(b'0' + d)).collect();
    (int_digits, frac_digits)
}
