//! Duration rendering, both labelled ("2 hours 1 minute") and numeric
//! ("02:01:00").

/// Label style for [`format_duration_labels`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// Full unit names, pluralized: "2 hours 1 minute".
    #[default]
    Long,
    /// Abbreviated units, no space: "2hr 1min".
    Short,
}

/// Options for [`format_duration_labels`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationOptions {
    pub labels: LabelStyle,
    /// Truncate to the single largest nonzero unit.
    pub round: bool,
}

impl DurationOptions {
    #[must_use]
    pub fn with_labels(mut self, labels: LabelStyle) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }
}

struct Unit {
    short: &'static str,
    long: &'static str,
    seconds: u64,
}

/// Fixed divisors: a month is 1/12 of a 365-day year.
const UNITS: [Unit; 7] = [
    Unit { short: "yr", long: "year", seconds: 31_536_000 },
    Unit { short: "mo", long: "month", seconds: 2_628_000 },
    Unit { short: "wk", long: "week", seconds: 604_800 },
    Unit { short: "d", long: "day", seconds: 86_400 },
    Unit { short: "hr", long: "hour", seconds: 3_600 },
    Unit { short: "min", long: "minute", seconds: 60 },
    Unit { short: "s", long: "second", seconds: 1 },
];

/// Decomposes a second count into human-readable unit labels.
///
/// Only nonzero components are emitted, largest first, space separated.
/// With `round`, the value is truncated to the largest nonzero unit before
/// decomposition (3661 seconds renders as "1 hour").
///
/// ```
/// use displaykit_format::{format_duration_labels, DurationOptions};
///
/// let opts = DurationOptions::default();
/// assert_eq!(format_duration_labels(0, &opts), "0 seconds");
/// assert_eq!(format_duration_labels(7261, &opts), "2 hours 1 minute 1 second");
/// ```
pub fn format_duration_labels(seconds: u64, options: &DurationOptions) -> String {
    if seconds == 0 {
        return match options.labels {
            LabelStyle::Short => "0s".to_string(),
            LabelStyle::Long => "0 seconds".to_string(),
        };
    }

    let mut remaining = seconds;
    if options.round {
        for unit in &UNITS {
            if seconds >= unit.seconds {
                remaining = seconds - seconds % unit.seconds;
                break;
            }
        }
    }

    let mut parts = Vec::new();
    for unit in &UNITS {
        let count = remaining / unit.seconds;
        if count > 0 {
            match options.labels {
                LabelStyle::Short => parts.push(format!("{count}{}", unit.short)),
                LabelStyle::Long => {
                    if count == 1 {
                        parts.push(format!("{count} {}", unit.long));
                    } else {
                        parts.push(format!("{count} {}s", unit.long));
                    }
                }
            }
            remaining -= count * unit.seconds;
        }
    }

    parts.join(" ")
}

/// Renders a second count as zero-padded `HH:MM:SS`.
///
/// There is no day rollover; hours may exceed 24.
pub fn format_duration_numbers(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}
