//! Locale-aware number, currency, valuation, and percentage formatting.

use crate::locale::{self, Grouping, LocaleSpec, SymbolPlacement};
use crate::rounding::round_half_up;

/// Upper bound for the `decimals` option; values beyond are clamped, never
/// rejected.
const MAX_DECIMALS: usize = 20;

/// Default number of fraction digits.
const DEFAULT_DECIMALS: usize = 2;

/// Default locale tag used when none is given.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Options shared by the numeric formatters.
///
/// Defaults match the documented contract: two fraction digits, `en-US`.
#[derive(Debug, Clone)]
pub struct NumberOptions {
    /// Maximum fraction digits, silently clamped to `[0, 20]`.
    pub decimals: usize,
    /// BCP 47 locale tag; unmapped tags fall back to `en-US` conventions.
    pub locale: String,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl NumberOptions {
    /// Set the maximum fraction digits.
    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the locale tag.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// Compact-notation magnitude suffixes, largest first.
const COMPACT_STEPS: [(f64, &str); 4] = [
    (1e12, "T"),
    (1e9, "B"),
    (1e6, "M"),
    (1e3, "K"),
];

/// Formats a number as a grouped decimal string per the locale's digit
/// grouping and decimal separator.
///
/// ```
/// use displaykit_format::{format_number, NumberOptions};
///
/// assert_eq!(format_number(1000.95, &NumberOptions::default()), "1,000.95");
/// let id = NumberOptions::default().with_locale("id-ID");
/// assert_eq!(format_number(1000.95, &id), "1.000,95");
/// ```
pub fn format_number(value: f64, options: &NumberOptions) -> String {
    let spec = locale::lookup(&options.locale);
    let decimals = options.decimals.min(MAX_DECIMALS);
    render(value, decimals, &spec)
}

/// Formats a number as local currency with the locale's narrow symbol.
///
/// The currency code comes from the fixed locale table; unmapped locales
/// render as `USD` in `en-US` conventions.
pub fn format_currency(value: f64, options: &NumberOptions) -> String {
    let spec = locale::lookup(&options.locale);
    let decimals = options.decimals.min(MAX_DECIMALS);
    let number = render(value.abs(), decimals, &spec);
    attach_symbol(&number, value.is_sign_negative() && value != 0.0, &spec)
}

/// Formats a number as a compact currency valuation (K/M/B/T suffixes).
///
/// Rounding applies to the compacted value, so 12,345,678 at two decimals
/// is `$12.35M`, not `$12.34M`.
pub fn format_valuation(value: f64, options: &NumberOptions) -> String {
    let spec = locale::lookup(&options.locale);
    let decimals = options.decimals.min(MAX_DECIMALS);

    let abs = value.abs();
    let (scaled, suffix) = COMPACT_STEPS
        .iter()
        .find(|(step, _)| abs >= *step)
        .map_or((abs, ""), |(step, suffix)| (abs / step, *suffix));

    let number = format!("{}{}", render(scaled, decimals, &spec), suffix);
    attach_symbol(&number, value.is_sign_negative() && value != 0.0, &spec)
}

/// Formats a fraction as a percentage: 0.1234 becomes `12.34%`.
///
/// Rounding is half-up, so 0.125 at zero decimals is `13%`.
pub fn format_percentage(value: f64, options: &NumberOptions) -> String {
    let spec = locale::lookup(&options.locale);
    let decimals = options.decimals.min(MAX_DECIMALS);
    let number = render(value * 100.0, decimals, &spec);
    if spec.percent_spaced {
        format!("{number}\u{a0}%")
    } else {
        format!("{number}%")
    }
}

/// Renders a signed decimal number with grouping and the min/max fraction
/// digit rule: min digits are 0 when `decimals` is 0, 1 when it is 1, and
/// 2 otherwise; max digits are `decimals`.
fn render(value: f64, decimals: usize, spec: &LocaleSpec) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let (int_digits, mut frac_digits) = round_half_up(value, decimals);

    let min_digits = match decimals {
        0 => 0,
        1 => 1,
        _ => 2,
    };
    while frac_digits.len() > min_digits && frac_digits.ends_with('0') {
        frac_digits.pop();
    }

    let grouped = group_digits(&int_digits, spec);
    let sign = if value < 0.0 && int_digits.bytes().chain(frac_digits.bytes()).any(|b| b != b'0')
    {
        "-"
    } else {
        ""
    };

    if frac_digits.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}{}{frac_digits}", spec.decimal_sep)
    }
}

/// Inserts the locale's group separator into an unsigned digit string.
fn group_digits(digits: &str, spec: &LocaleSpec) -> String {
    let bytes = digits.as_bytes();
    let mut boundaries: Vec<usize> = Vec::new();

    match spec.grouping {
        Grouping::Western => {
            let mut pos = bytes.len();
            while pos > 3 {
                pos -= 3;
                boundaries.push(pos);
            }
        }
        Grouping::Indian => {
            if bytes.len() > 3 {
                let mut pos = bytes.len() - 3;
                boundaries.push(pos);
                while pos > 2 {
                    pos -= 2;
                    boundaries.push(pos);
                }
            }
        }
    }

    let mut out = String::with_capacity(digits.len() + boundaries.len() * spec.group_sep.len());
    for (idx, byte) in bytes.iter().enumerate() {
        if boundaries.contains(&idx) && idx != 0 {
            out.push_str(spec.group_sep);
        }
        out.push(char::from(*byte));
    }
    out
}

/// Places the narrow currency symbol around a rendered number.
fn attach_symbol(number: &str, negative: bool, spec: &LocaleSpec) -> String {
    let sign = if negative { "-" } else { "" };
    match spec.placement {
        SymbolPlacement::Prefix => format!("{sign}{}{number}", spec.symbol),
        SymbolPlacement::PrefixSpaced => format!("{sign}{}\u{a0}{number}", spec.symbol),
        SymbolPlacement::SuffixSpaced => format!("{sign}{number}\u{a0}{}", spec.symbol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EN_US;

    #[test]
    fn groups_western_digits_in_threes() {
        assert_eq!(group_digits("1234567", &EN_US), "1,234,567");
        assert_eq!(group_digits("100", &EN_US), "100");
        assert_eq!(group_digits("1000", &EN_US), "1,000");
    }

    #[test]
    fn groups_indian_digits() {
        let spec = crate::locale::lookup("hi-IN");
        assert_eq!(group_digits("1234567", &spec), "12,34,567");
        assert_eq!(group_digits("123456", &spec), "1,23,456");
        assert_eq!(group_digits("1000", &spec), "1,000");
        assert_eq!(group_digits("100", &spec), "100");
    }

    #[test]
    fn render_respects_min_fraction_digits() {
        assert_eq!(render(1000.9, 2, &EN_US), "1,000.90");
        assert_eq!(render(1.5, 5, &EN_US), "1.50");
        assert_eq!(render(2.0, 1, &EN_US), "2.0");
        assert_eq!(render(2.0, 0, &EN_US), "2");
    }

    #[test]
    fn render_handles_non_finite_values() {
        assert_eq!(render(f64::NAN, 2, &EN_US), "NaN");
        assert_eq!(render(f64::INFINITY, 2, &EN_US), "∞");
        assert_eq!(render(f64::NEG_INFINITY, 2, &EN_US), "-∞");
    }

    #[test]
    fn render_drops_sign_when_rounded_to_zero() {
        assert_eq!(render(-0.001, 2, &EN_US), "0.00");
        assert_eq!(render(-0.5, 2, &EN_US), "-0.50");
    }
}
