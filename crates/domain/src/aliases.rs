//! Three-letter weekday and month names.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Weekday names, Sunday first (`sun` = 0).
pub const WEEKDAYS: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// Month names, January first (`jan` = 1).
pub const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

static ALIAS_TOKEN: OnceLock<Regex> = OnceLock::new();

fn alias_token() -> &'static Regex {
    ALIAS_TOKEN.get_or_init(|| Regex::new(r"(?i)[a-z]{3}").expect("invalid regex pattern"))
}

/// Numeric value of an alias, case-insensitive. `None` for unknown names.
pub fn lookup(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    if let Some(i) = WEEKDAYS.iter().position(|d| *d == lower) {
        return Some(i as u32);
    }
    MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|i| i as u32 + 1)
}

/// Replace every alias in `field` with its number in one left-to-right scan.
///
/// Unknown three-letter runs are left untouched. Borrows when nothing changes.
pub fn substitute(field: &str) -> Cow<'_, str> {
    alias_token().replace_all(field, |caps: &Captures<'_>| match lookup(&caps[0]) {
        Some(n) => n.to_string(),
        None => caps[0].to_string(),
    })
}
