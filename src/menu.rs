//! Insertion menu entries.
//!
//! Hosts that offer a "insert placeholder" context menu populate it from
//! [`menu_entries`]. The list is fixed; only the prefix and the availability of
//! the regex generator change it.

use serde::Serialize;

use crate::placeholder::render_placeholder;

/// One menu item: what to show and what to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    /// Text shown in the menu
    pub label: String,
    /// Placeholder inserted at the selection
    pub template: String,
    /// Whether the item can be chosen
    pub enabled: bool,
}

/// (label, kind, arguments) of every entry, in display order.
const ENTRIES: [(&str, &str, &str); 8] = [
    ("Insert uuid", "uuid", ""),
    ("Insert alphanumeric(16)", "alphanumeric", "16"),
    ("Insert alpha(10)", "alpha", "10"),
    ("Insert lower(10)", "lower", "10"),
    ("Insert upper(10)", "upper", "10"),
    ("Insert numeric(10)", "numeric", "10"),
    ("Insert custom(10, abc123!@#)", "custom", "10, abc123!@#"),
    ("Insert regex", "regex", "[a-z]{3}[0-9]{2}"),
];

/// Menu entries rendered with `prefix`.
///
/// The regex entry is always listed but only enabled when `regex_available`.
///
/// # Examples
///
/// ```rust
/// use reqfaker::menu::menu_entries;
///
/// let entries = menu_entries("faker", false);
/// assert_eq!(entries[0].template, "{{faker.uuid()}}");
/// assert!(!entries.last().unwrap().enabled);
/// ```
#[must_use]
pub fn menu_entries(prefix: &str, regex_available: bool) -> Vec<MenuEntry> {
    ENTRIES
        .iter()
        .map(|(label, kind, args)| MenuEntry {
            label: (*label).to_string(),
            template: render_placeholder(prefix, kind, args),
            enabled: *kind != "regex" || regex_available,
        })
        .collect()
}
