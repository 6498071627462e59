//! Locale-aware display formatting rules for UI layers.
//!
//! Every function here is a pure, single-pass transformation from a raw
//! value to a display string:
//!
//! - **number**: grouped decimals, currency, compact valuations, percentages
//! - **duration**: labelled ("2 hours 1 minute") and numeric ("02:01:00")
//! - **words**: English cardinal-word expansion
//! - **text**: title case, sentence case, initials, orphan-word prevention
//! - **list**: readable lists with limits and conjunctions
//! - **time**: Unix timestamp rendering
//!
//! Options follow a clamp-and-continue policy: out-of-range `decimals` are
//! clamped to `[0, 20]` and unknown locales fall back to `en-US`, never
//! erroring.

mod duration;
mod list;
mod locale;
mod number;
mod rounding;
mod text;
mod time;
mod words;

pub use duration::{DurationOptions, LabelStyle, format_duration_labels, format_duration_numbers};
pub use list::{ListInput, ListOptions, format_list};
pub use number::{
    DEFAULT_LOCALE, NumberOptions, format_currency, format_number, format_percentage,
    format_valuation,
};
pub use text::{
    InitialsOptions, format_initials, format_sentence_case, format_text_wrap, format_title,
};
pub use time::format_unix_time;
pub use words::format_number_to_words;
