//! Compiled pattern constants for the shape predicates.
//!
//! Each pattern is the grammar of the predicate it backs and is ported
//! literally; re-deriving a pattern from its prose description would change
//! the accepted input set through subtle character-class differences.

use std::sync::LazyLock;

use regex::Regex;

pub(crate) static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$").expect("invalid email regex")
});

/// Optional scheme, domain name or IPv4 address, optional port, path,
/// query string, and fragment.
pub(crate) static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(https?://)?((([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}|((\d{1,3}\.){3}\d{1,3}))(:\d+)?(/[-a-z\d%_.~+]*)*(\?[;&a-z\d%_.~+=-]*)?(#[-a-z\d_]*)?$",
    )
    .expect("invalid URL regex")
});

/// The standard 8-4-4-4-12 hex layout, case-insensitive.
pub(crate) static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-f\d]{8}(-[a-f\d]{4}){4}[a-f\d]{8}$").expect("invalid UUID regex")
});

/// Hex color with 3, 4, 6, or 8 digits and an optional leading `#`.
pub(crate) static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9A-Fa-f]{3,4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$")
        .expect("invalid hex color regex")
});

pub(crate) static ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("invalid alpha regex"));

pub(crate) static ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("invalid alphanumeric regex"));

pub(crate) static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("invalid digits regex"));

/// `H:mm` or `HH:mm`, 24-hour clock.
pub(crate) static TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("invalid time regex")
});

/// Dotted-quad IPv4 with an optional `:port` suffix.
pub(crate) static IP_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)((?::\d+)?|)$",
    )
    .expect("invalid IP address regex")
});

/// Six colon- or hyphen-separated octet pairs.
pub(crate) static MAC_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$").expect("invalid MAC address regex")
});

/// `lat,lng` pair with optional whitespace after the comma.
pub(crate) static LAT_LNG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([-+]?([1-8]?\d(\.\d+)?|90(\.0+)?)),\s*([-+]?(180(\.0+)?|((1[0-7]\d)|([1-9]?\d))(\.\d+)?))$",
    )
    .expect("invalid lat/lng regex")
});

/// Standalone latitude, at most six decimal places.
pub(crate) static LATITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?([1-8]?\d(\.\d{1,6})?|90(\.0{1,6})?)$").expect("invalid latitude regex")
});

/// Standalone longitude, at most six decimal places.
pub(crate) static LONGITUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(180(\.0{1,6})?|((1[0-7]\d)|([1-9]?\d))(\.\d{1,6})?)$")
        .expect("invalid longitude regex")
});

/// Issuer prefixes for Visa, Mastercard, Discover, Amex, Diners Club, and
/// JCB card numbers.
pub(crate) static CREDIT_CARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9][0-9])[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35\d{3})\d{11})$",
    )
    .expect("invalid credit card regex")
});
