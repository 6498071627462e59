//! English cardinal-word expansion of integers.

const UNDER_TWENTY: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words for each three-digit group, smallest first.
const SCALES: [&str; 7] = [
    "",
    " thousand",
    " million",
    " billion",
    " trillion",
    " quadrillion",
    " quintillion",
];

/// Expands an integer into English cardinal words.
///
/// Three-digit groups are joined by `", "`; within a group, "and" sits
/// between the hundreds and the remainder (British convention).
///
/// ```
/// use displaykit_format::format_number_to_words;
///
/// assert_eq!(format_number_to_words(0), "zero");
/// assert_eq!(
///     format_number_to_words(1234),
///     "one thousand, two hundred and thirty-four"
/// );
/// ```
pub fn format_number_to_words(number: u64) -> String {
    if number == 0 {
        return "zero".to_string();
    }

    let mut remaining = number;
    let mut scale_index = 0;
    let mut result = String::new();

    while remaining > 0 {
        let group = remaining % 1000;
        if group > 0 {
            let group_words = format!("{}{}", format_group(group), SCALES[scale_index]);
            if result.is_empty() {
                result = group_words;
            } else {
                result = format!("{group_words}, {result}");
            }
        }
        remaining /= 1000;
        scale_index += 1;
    }

    result
}

/// Renders a value below 1000 as words.
fn format_group(number: u64) -> String {
    if number >= 100 {
        let remainder = number % 100;
        if remainder == 0 {
            format!("{} hundred", UNDER_TWENTY[(number / 100) as usize])
        } else {
            format!(
                "{} hundred and {}",
                UNDER_TWENTY[(number / 100) as usize],
                format_group(remainder)
            )
        }
    } else if number >= 20 {
        let unit = number % 10;
        if unit == 0 {
            TENS[(number / 10 - 2) as usize].to_string()
        } else {
            format!("{}-{}", TENS[(number / 10 - 2) as usize], UNDER_TWENTY[unit as usize])
        }
    } else {
        UNDER_TWENTY[number as usize].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        assert_eq!(format_number_to_words(7), "seven");
        assert_eq!(format_number_to_words(13), "thirteen");
        assert_eq!(format_number_to_words(20), "twenty");
        assert_eq!(format_number_to_words(34), "thirty-four");
        assert_eq!(format_number_to_words(99), "ninety-nine");
    }

    #[test]
    fn hundreds_take_and_before_remainder() {
        assert_eq!(format_number_to_words(100), "one hundred");
        assert_eq!(format_number_to_words(101), "one hundred and one");
        assert_eq!(format_number_to_words(999), "nine hundred and ninety-nine");
    }

    #[test]
    fn groups_join_with_comma() {
        assert_eq!(format_number_to_words(1000), "one thousand");
        assert_eq!(
            format_number_to_words(1_000_001),
            "one million, one"
        );
        assert_eq!(
            format_number_to_words(2_000_000_000),
            "two billion"
        );
    }

    #[test]
    fn skips_zero_groups() {
        // 1,000,234: the thousands group is zero and must not appear
        assert_eq!(
            format_number_to_words(1_000_234),
            "one million, two hundred and thirty-four"
        );
    }
}
