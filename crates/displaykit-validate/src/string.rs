//! String-shape predicates.
//!
//! Every predicate is a total function: malformed input yields `false`,
//! never an error.

use chrono::NaiveDate;

use crate::patterns;

/// Checks for a valid email address shape.
pub fn is_email(value: &str) -> bool {
    patterns::EMAIL.is_match(value)
}

/// Checks for a valid URL: optional `http(s)` scheme, domain name or IPv4
/// address, optional port, path, query string, and fragment.
pub fn is_url(value: &str) -> bool {
    patterns::URL.is_match(value)
}

/// Checks for the standard 8-4-4-4-12 hex UUID layout, case-insensitive.
pub fn is_uuid(value: &str) -> bool {
    patterns::UUID.is_match(value)
}

/// Checks for a hex color code with 3, 4, 6, or 8 digits and an optional
/// leading `#`.
pub fn is_hex_color(value: &str) -> bool {
    patterns::HEX_COLOR.is_match(value)
}

/// Checks that the input contains only ASCII letters.
pub fn is_alpha(value: &str) -> bool {
    patterns::ALPHA.is_match(value)
}

/// Checks that the input contains only ASCII letters and digits.
pub fn is_alphanumeric(value: &str) -> bool {
    patterns::ALPHANUMERIC.is_match(value)
}

/// Checks that the input is a nonempty run of decimal digits.
pub fn is_numeric_string(value: &str) -> bool {
    patterns::DIGITS.is_match(value)
}

/// Checks for the empty string.
pub fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// Checks for a 24-hour `H:mm` or `HH:mm` time.
pub fn is_time(value: &str) -> bool {
    patterns::TIME.is_match(value)
}

/// Checks for a complete `YYYY-MM-DD` date that exists on the calendar.
pub fn is_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Checks for a dotted-quad IPv4 address with an optional `:port` suffix.
pub fn is_ip_address(value: &str) -> bool {
    patterns::IP_ADDRESS.is_match(value)
}

/// Checks for a MAC address of six colon- or hyphen-separated octet pairs.
pub fn is_mac_address(value: &str) -> bool {
    patterns::MAC_ADDRESS.is_match(value)
}

/// Checks for a `lat,lng` coordinate pair.
pub fn is_lat_lng(value: &str) -> bool {
    patterns::LAT_LNG.is_match(value)
}

/// Checks for a standalone latitude (-90 to 90, at most six decimals).
pub fn is_latitude(value: &str) -> bool {
    patterns::LATITUDE.is_match(value)
}

/// Checks for a standalone longitude (-180 to 180, at most six decimals).
pub fn is_longitude(value: &str) -> bool {
    patterns::LONGITUDE.is_match(value)
}

/// Checks for a credit card number with a recognized issuer prefix
/// (Visa, Mastercard, Discover, Amex, Diners Club, JCB).
pub fn is_credit_card_number(value: &str) -> bool {
    patterns::CREDIT_CARD.is_match(value)
}

/// Checks for the literal strings `"true"` or `"false"`.
///
/// This deliberately preserves the loose contract of the original API,
/// which accepted boolean literals in string form.
pub fn is_boolean(value: &str) -> bool {
    value == "true" || value == "false"
}

/// Checks whether the input is exactly "Optimus Prime" (or the fire truck).
pub fn is_optimus_prime(value: &str) -> bool {
    value == "Optimus Prime" || value == "🚒"
}
