//! Tests for duration rendering.

use displaykit_format::{
    DurationOptions, LabelStyle, format_duration_labels, format_duration_numbers,
};

#[test]
fn zero_seconds() {
    assert_eq!(
        format_duration_labels(0, &DurationOptions::default()),
        "0 seconds"
    );
    assert_eq!(
        format_duration_labels(0, &DurationOptions::default().with_labels(LabelStyle::Short)),
        "0s"
    );
}

#[test]
fn long_labels_pluralize() {
    let opts = DurationOptions::default();
    assert_eq!(format_duration_labels(3600, &opts), "1 hour");
    assert_eq!(format_duration_labels(7200, &opts), "2 hours");
    assert_eq!(
        format_duration_labels(3600 * 2 + 60 + 1, &opts),
        "2 hours 1 minute 1 second"
    );
}

#[test]
fn components_are_largest_first_and_nonzero_only() {
    let opts = DurationOptions::default();
    // 1 day + 1 second, no hour or minute component
    assert_eq!(format_duration_labels(86_401, &opts), "1 day 1 second");
    assert_eq!(
        format_duration_labels(31_536_000 + 604_800, &opts),
        "1 year 1 week"
    );
}

#[test]
fn round_keeps_only_the_largest_unit() {
    let opts = DurationOptions::default().with_round(true);
    assert_eq!(format_duration_labels(3661, &opts), "1 hour");
    assert_eq!(format_duration_labels(59, &opts), "59 seconds");
}

#[test]
fn short_labels() {
    let opts = DurationOptions::default().with_labels(LabelStyle::Short);
    assert_eq!(format_duration_labels(3600, &opts), "1hr");
    assert_eq!(format_duration_labels(3600 * 2 + 60, &opts), "2hr 1min");
}

#[test]
fn numeric_form_is_zero_padded() {
    assert_eq!(format_duration_numbers(59), "00:00:59");
    assert_eq!(format_duration_numbers(3661), "01:01:01");
}

#[test]
fn numeric_form_has_no_day_rollover() {
    assert_eq!(format_duration_numbers(25 * 3600), "25:00:00");
    assert_eq!(format_duration_numbers(100 * 3600 + 1), "100:00:01");
}
