//! Locale conventions for numeric display.
//!
//! The table below is the contract: every supported locale is listed
//! exhaustively with its digit grouping, separators, and narrow currency
//! symbol. Nothing is inferred from the runtime environment. Unmapped
//! locale tags fall back to `en-US` conventions (`USD`).

use std::collections::HashMap;
use std::sync::LazyLock;

/// Digit grouping style for the integer part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Grouping {
    /// Groups of three: 1,234,567
    Western,
    /// Last three digits, then groups of two: 12,34,567
    Indian,
}

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SymbolPlacement {
    /// Symbol immediately before the number: $1,000.95
    Prefix,
    /// Symbol before the number with a no-break space: kr 1 000,95
    PrefixSpaced,
    /// Symbol after the number with a no-break space: 1.000,95 €
    SuffixSpaced,
}

/// Number and currency conventions for one locale tag.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocaleSpec {
    pub group_sep: &'static str,
    pub decimal_sep: &'static str,
    pub grouping: Grouping,
    /// ISO 4217 currency code for the locale.
    pub currency: &'static str,
    /// Narrow currency symbol ($ rather than US$).
    pub symbol: &'static str,
    pub placement: SymbolPlacement,
    /// Whether the percent sign is separated by a no-break space.
    pub percent_spaced: bool,
}

/// Fallback conventions used for any unmapped locale tag.
pub(crate) const EN_US: LocaleSpec = LocaleSpec {
    group_sep: ",",
    decimal_sep: ".",
    grouping: Grouping::Western,
    currency: "USD",
    symbol: "$",
    placement: SymbolPlacement::Prefix,
    percent_spaced: false,
};

macro_rules! locale {
    ($group:expr, $dec:expr, $grouping:ident, $code:expr, $sym:expr, $placement:ident, $pct:expr) => {
        LocaleSpec {
            group_sep: $group,
            decimal_sep: $dec,
            grouping: Grouping::$grouping,
            currency: $code,
            symbol: $sym,
            placement: SymbolPlacement::$placement,
            percent_spaced: $pct,
        }
    };
}

/// The fixed locale table, keyed by BCP 47 tag.
static LOCALES: LazyLock<HashMap<&'static str, LocaleSpec>> = LazyLock::new(|| {
    HashMap::from([
        ("en-US", EN_US),
        ("en-GB", locale!(",", ".", Western, "GBP", "£", Prefix, false)),
        ("en-AU", locale!(",", ".", Western, "AUD", "$", Prefix, false)),
        ("en-CA", locale!(",", ".", Western, "CAD", "$", Prefix, false)),
        ("en-NZ", locale!(",", ".", Western, "NZD", "$", Prefix, false)),
        ("en-ZA", locale!("\u{a0}", ",", Western, "ZAR", "R", Prefix, false)),
        ("de-DE", locale!(".", ",", Western, "EUR", "€", SuffixSpaced, true)),
        ("fr-FR", locale!("\u{202f}", ",", Western, "EUR", "€", SuffixSpaced, true)),
        ("es-ES", locale!(".", ",", Western, "EUR", "€", SuffixSpaced, true)),
        ("it-IT", locale!(".", ",", Western, "EUR", "€", SuffixSpaced, false)),
        ("pt-PT", locale!("\u{a0}", ",", Western, "EUR", "€", SuffixSpaced, false)),
        ("nl-NL", locale!(".", ",", Western, "EUR", "€", PrefixSpaced, false)),
        ("da-DK", locale!(".", ",", Western, "DKK", "kr.", SuffixSpaced, true)),
        ("sv-SE", locale!("\u{a0}", ",", Western, "SEK", "kr", SuffixSpaced, true)),
        ("nb-NO", locale!("\u{a0}", ",", Western, "NOK", "kr", PrefixSpaced, true)),
        ("fi-FI", locale!("\u{a0}", ",", Western, "EUR", "€", SuffixSpaced, true)),
        ("pl-PL", locale!("\u{a0}", ",", Western, "PLN", "zł", SuffixSpaced, false)),
        ("tr-TR", locale!(".", ",", Western, "TRY", "₺", Prefix, false)),
        ("ru-RU", locale!("\u{a0}", ",", Western, "RUB", "₽", SuffixSpaced, true)),
        ("ja-JP", locale!(",", ".", Western, "JPY", "¥", Prefix, false)),
        ("zh-CN", locale!(",", ".", Western, "CNY", "¥", Prefix, false)),
        ("ko-KR", locale!(",", ".", Western, "KRW", "₩", Prefix, false)),
        ("ar-SA", locale!(",", ".", Western, "SAR", "﷼", SuffixSpaced, false)),
        ("he-IL", locale!(",", ".", Western, "ILS", "₪", Prefix, false)),
        ("id-ID", locale!(".", ",", Western, "IDR", "Rp", Prefix, false)),
        ("ms-MY", locale!(",", ".", Western, "MYR", "RM", Prefix, false)),
        ("th-TH", locale!(",", ".", Western, "THB", "฿", Prefix, false)),
        ("vi-VN", locale!(".", ",", Western, "VND", "₫", SuffixSpaced, false)),
        ("hi-IN", locale!(",", ".", Indian, "INR", "₹", Prefix, false)),
        ("bn-IN", locale!(",", ".", Indian, "INR", "₹", Prefix, false)),
        ("pa-IN", locale!(",", ".", Indian, "INR", "₹", Prefix, false)),
        ("gu-IN", locale!(",", ".", Indian, "INR", "₹", Prefix, false)),
        ("or-IN", locale!(",", ".", Indian, "INR", "₹", Prefix, false)),
        ("ta-IN", locale!(",", ".", Indian, "INR", "₹", Prefix, false)),
        ("te-IN", locale!(",", ".", Indian, "INR", "₹", Prefix, false)),
        ("kn-IN", locale!(",", ".", Indian, "INR", "₹", Prefix, false)),
        ("ml-IN", locale!(",", ".", Indian, "INR", "₹", Prefix, false)),
    ])
});

/// Look up a locale tag, falling back to `en-US` conventions when unmapped.
pub(crate) fn lookup(tag: &str) -> LocaleSpec {
    LOCALES.get(tag).copied().unwrap_or(EN_US)
}
