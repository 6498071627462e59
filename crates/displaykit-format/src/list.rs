//! Human-readable list rendering with an optional item limit.

/// Accepted list shapes.
///
/// The original contract accepted a comma-delimited string, an array, or a
/// key-value mapping (values only, insertion order); each shape is an
/// explicit variant here.
#[derive(Debug, Clone)]
pub enum ListInput {
    /// Comma-delimited text; items are trimmed.
    Delimited(String),
    /// Items used as-is.
    Items(Vec<String>),
    /// Key-value pairs; only the values are rendered, in order.
    Mapping(Vec<(String, String)>),
}

impl ListInput {
    fn into_items(self) -> Vec<String> {
        match self {
            Self::Delimited(text) => text.split(',').map(|item| item.trim().to_string()).collect(),
            Self::Items(items) => items,
            Self::Mapping(pairs) => pairs.into_iter().map(|(_, value)| value).collect(),
        }
    }
}

impl From<&str> for ListInput {
    fn from(text: &str) -> Self {
        Self::Delimited(text.to_string())
    }
}

impl From<String> for ListInput {
    fn from(text: String) -> Self {
        Self::Delimited(text)
    }
}

impl From<Vec<String>> for ListInput {
    fn from(items: Vec<String>) -> Self {
        Self::Items(items)
    }
}

impl From<Vec<&str>> for ListInput {
    fn from(items: Vec<&str>) -> Self {
        Self::Items(items.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<(String, String)>> for ListInput {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self::Mapping(pairs)
    }
}

/// Options for [`format_list`].
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Maximum items listed before collapsing to "N more". No limit when
    /// unset.
    pub limit: Option<usize>,
    /// Word joining the final item (or the "N more" tail).
    pub conjunction: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: None,
            conjunction: "and".to_string(),
        }
    }
}

impl ListOptions {
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_conjunction(mut self, conjunction: impl Into<String>) -> Self {
        self.conjunction = conjunction.into();
        self
    }
}

/// Joins items into a readable list.
///
/// Empty input renders as `""`; one or two items are joined directly by
/// the conjunction; up to `limit` items use serial style (`"a, b and c"`);
/// beyond the limit the tail collapses to a count (`"a, b and 2 more"`).
///
/// ```
/// use displaykit_format::{format_list, ListOptions};
///
/// let opts = ListOptions::default();
/// assert_eq!(format_list(vec!["A", "B"], &opts), "A and B");
/// let limited = ListOptions::default().with_limit(2);
/// assert_eq!(format_list(vec!["A", "B", "C"], &limited), "A, B and 1 more");
/// ```
pub fn format_list(items: impl Into<ListInput>, options: &ListOptions) -> String {
    let items = items.into().into_items();
    if items.is_empty() {
        return String::new();
    }
    if items.len() == 1 {
        return items.into_iter().next().unwrap_or_default();
    }
    if items.len() == 2 {
        return format!("{} {} {}", items[0], options.conjunction, items[1]);
    }

    let limit = options.limit.unwrap_or(items.len());
    if items.len() <= limit {
        let (last, head) = items.split_last().unwrap_or((&items[0], &[]));
        return format!("{} {} {last}", head.join(", "), options.conjunction);
    }

    let listed = items[..limit].join(", ");
    let remaining = items.len() - limit;
    format!("{listed} {} {remaining} more", options.conjunction)
}
