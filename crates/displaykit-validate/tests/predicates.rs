//! Contract tests for the predicate library.

use displaykit_validate as validate;
use proptest::prelude::*;

#[test]
fn between_auto_swaps_reversed_bounds() {
    assert!(validate::is_between(5.0, 10.0, 1.0));
    assert!(validate::is_between(5.0, 1.0, 10.0));
}

#[test]
fn validators_reject_unrelated_shapes() {
    let garbage = "qwerty \u{0} 123 !!";
    assert!(!validate::is_email(garbage));
    assert!(!validate::is_url(garbage));
    assert!(!validate::is_uuid(garbage));
    assert!(!validate::is_hex_color(garbage));
    assert!(!validate::is_ip_address(garbage));
    assert!(!validate::is_mac_address(garbage));
    assert!(!validate::is_lat_lng(garbage));
    assert!(!validate::is_credit_card_number(garbage));
    assert!(!validate::is_time(garbage));
    assert!(!validate::is_date(garbage));
    assert!(!validate::is_json(garbage));
}

#[test]
fn known_good_shapes() {
    assert!(validate::is_email("ops@example.org"));
    assert!(validate::is_url("https://example.org/a/b?c=1"));
    assert!(validate::is_uuid("f47ac10b-58cc-4372-a567-0e02b2c3d479"));
    assert!(validate::is_hex_color("#1a2b3c"));
    assert!(validate::is_ip_address("10.0.0.1:443"));
    assert!(validate::is_mac_address("de:ad:be:ef:00:01"));
    assert!(validate::is_lat_lng("-33.865143, 151.209900"));
    assert!(validate::is_json(r#"{"ok": true}"#));
}

proptest! {
    // Predicates are total: any input produces a boolean, never a panic.
    #[test]
    fn string_predicates_never_panic(s in ".*") {
        let _ = validate::is_email(&s);
        let _ = validate::is_url(&s);
        let _ = validate::is_uuid(&s);
        let _ = validate::is_hex_color(&s);
        let _ = validate::is_alpha(&s);
        let _ = validate::is_alphanumeric(&s);
        let _ = validate::is_numeric_string(&s);
        let _ = validate::is_time(&s);
        let _ = validate::is_date(&s);
        let _ = validate::is_ip_address(&s);
        let _ = validate::is_mac_address(&s);
        let _ = validate::is_lat_lng(&s);
        let _ = validate::is_latitude(&s);
        let _ = validate::is_longitude(&s);
        let _ = validate::is_credit_card_number(&s);
        let _ = validate::is_json(&s);
    }

    // Any finite value is inside bounds given in either order.
    #[test]
    fn between_is_order_insensitive(value in -1e9f64..1e9, a in -1e9f64..1e9, b in -1e9f64..1e9) {
        prop_assert_eq!(
            validate::is_between(value, a, b),
            validate::is_between(value, b, a)
        );
    }
}
