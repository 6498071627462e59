//! Boolean shape and type predicates for UI input values.
//!
//! Each predicate is independent, side-effect-free, and total: malformed
//! input yields `false`, never a panic or an error. Shape predicates are
//! backed by compiled pattern constants (see `patterns`); numeric
//! predicates operate on the mathematical value, not its string form.

mod numeric;
mod object;
mod patterns;
mod string;

pub use numeric::{
    is_between, is_divisible_by, is_even, is_float, is_integer, is_leap_year, is_negative,
    is_odd, is_port, is_positive, is_prime, is_zero,
};
pub use object::{has_keys, is_json, is_present};
pub use string::{
    is_alpha, is_alphanumeric, is_boolean, is_credit_card_number, is_date, is_email, is_empty,
    is_hex_color, is_ip_address, is_lat_lng, is_latitude, is_longitude, is_mac_address,
    is_numeric_string, is_optimus_prime, is_time, is_url, is_uuid,
};
