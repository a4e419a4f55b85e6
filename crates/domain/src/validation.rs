//! Syntax gate for cron lines: token count, per-field grammar, command path.
//!
//! Each time field must match one of:
//! - `*` or `*/step`
//! - a single value (number in the field's domain, or a month/weekday name)
//! - a range `start-end`, optionally followed by `/step`
//! - a comma list of values and ranges
//!
//! `?`, `L`, `W` and `#` are not accepted anywhere.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::field::{FieldKind, FieldSpec, FIELDS};
use crate::line::RawCronLine;

/// Decides whether the command token is acceptable as a filesystem path.
///
/// Only syntax is judged; implementations must not touch the filesystem.
pub trait PathSyntax {
    fn is_valid_path(&self, candidate: &str) -> bool;
}

/// Path rules of the host platform.
///
/// Rejects the empty string and NUL everywhere, and additionally the
/// reserved characters `< > " | ? *` on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformPathSyntax;

impl PathSyntax for PlatformPathSyntax {
    fn is_valid_path(&self, candidate: &str) -> bool {
        if candidate.is_empty() || candidate.contains('\0') {
            return false;
        }
        if cfg!(windows) {
            return !candidate
                .chars()
                .any(|c| matches!(c, '<' | '>' | '"' | '|' | '?' | '*'));
        }
        true
    }
}

// ── Field grammar ────────────────────────────────────────────────────

fn value_pattern(kind: FieldKind) -> String {
    match kind {
        FieldKind::Minute => r"[0-5]?[0-9]".into(),
        FieldKind::Hour => r"[01]?[0-9]|2[0-3]".into(),
        FieldKind::DayOfMonth => r"0?[1-9]|[12][0-9]|3[01]".into(),
        FieldKind::Month => format!(r"[1-9]|1[012]|(?i:{})", crate::aliases::MONTHS.join("|")),
        FieldKind::DayOfWeek => format!(r"[0-6]|(?i:{})", crate::aliases::WEEKDAYS.join("|")),
    }
}

/// Whole-field pattern for one domain.
fn field_pattern(kind: FieldKind) -> String {
    let value = value_pattern(kind);
    let range = format!(r"(?:{value})(?:-(?:{value})(?:/[0-9]+)?)?");
    format!(r"^(?:\*(?:/[0-9]+)?|{range}(?:,{range})*)$")
}

static FIELD_REGEXES: OnceLock<Vec<(FieldKind, Regex)>> = OnceLock::new();

fn field_regex(kind: FieldKind) -> &'static Regex {
    let table = FIELD_REGEXES.get_or_init(|| {
        FIELDS
            .iter()
            .map(|f| {
                let re = Regex::new(&field_pattern(f.kind)).expect("invalid regex pattern");
                (f.kind, re)
            })
            .collect()
    });
    table
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, re)| re)
        .expect("every field kind has a pattern")
}

/// Check one time field against its domain grammar.
///
/// Steps must also be non-zero and fit in a `u32`; anything the expander
/// could not evaluate is rejected here.
pub fn validate_field(field: &str, spec: &FieldSpec) -> Result<()> {
    let reject = || {
        tracing::debug!(field = spec.name, value = field, "field rejected");
        Error::FieldSyntax {
            field: spec.name,
            value: field.to_string(),
        }
    };

    if !field_regex(spec.kind).is_match(field) {
        return Err(reject());
    }
    for part in field.split(',') {
        if let Some((_, step)) = part.split_once('/') {
            match step.parse::<u32>() {
                Ok(n) if n > 0 => {}
                _ => return Err(reject()),
            }
        }
    }
    Ok(())
}

/// Check the command token with the given path checker.
pub fn validate_command(command: &str, paths: &dyn PathSyntax) -> Result<()> {
    if paths.is_valid_path(command) {
        Ok(())
    } else {
        tracing::debug!(command, "command rejected");
        Err(Error::InvalidCommand(command.to_string()))
    }
}

/// Split and validate a whole line, stopping at the first failure.
///
/// Order: token count, minute, hour, day-of-month, month, day-of-week,
/// command.
pub fn validate_line(line: &str, paths: &dyn PathSyntax) -> Result<RawCronLine> {
    let raw = RawCronLine::split(line)?;
    for (field, spec) in raw.fields.iter().zip(FIELDS.iter()) {
        validate_field(field, spec)?;
    }
    validate_command(&raw.command, paths)?;
    Ok(raw)
}

/// Boolean form of [`validate_line`] using [`PlatformPathSyntax`].
pub fn is_valid(line: &str) -> bool {
    validate_line(line, &PlatformPathSyntax).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{DAY_OF_MONTH, DAY_OF_WEEK, HOUR, MINUTE, MONTH};

    struct RejectAll;

    impl PathSyntax for RejectAll {
        fn is_valid_path(&self, _candidate: &str) -> bool {
            false
        }
    }

    // ── Line shape ───────────────────────────────────────────────────

    #[test]
    fn accepts_reference_lines() {
        assert!(is_valid("23 0-20/2 1,15 * 1-5 /usr/bin/find"));
        assert!(is_valid("5 4 * * SUN /usr/bin/find"));
        assert!(is_valid("10,44 14 * 3 SUN-SAT /usr/bin/find"));
        assert!(is_valid("10,44 14 * 3 SUN-FRI/2 /usr/bin/find"));
        assert!(is_valid("10,44 14 * 3 */2 /usr/bin/find"));
        assert!(is_valid("15 10 * * MON-FRI /usr/bin/find"));
        assert!(is_valid("*/15 0 1,15 * 1-5 /usr/bin/find"));
    }

    #[test]
    fn rejects_wrong_token_count() {
        assert_eq!(
            validate_line("*/15 0 1,15 * 1-5 7 /usr/bin/find", &PlatformPathSyntax),
            Err(Error::MalformedLine { found: 7 })
        );
        assert!(!is_valid("* * * * *"));
        assert!(!is_valid(""));
    }

    #[test]
    fn extra_whitespace_between_fields_is_collapsed() {
        assert!(is_valid("  0   12\t* *  MON   /bin/true "));
    }

    #[test]
    fn first_failing_field_is_reported() {
        let err = validate_line("60 24 * * * /bin/true", &PlatformPathSyntax).unwrap_err();
        assert_eq!(
            err,
            Error::FieldSyntax {
                field: "minute",
                value: "60".into()
            }
        );
    }

    #[test]
    fn command_checker_gates_the_line() {
        let err = validate_line("* * * * * /bin/true", &RejectAll).unwrap_err();
        assert_eq!(err, Error::InvalidCommand("/bin/true".into()));
    }

    // ── Field grammar ────────────────────────────────────────────────

    #[test]
    fn minute_domain() {
        assert!(validate_field("0", &MINUTE).is_ok());
        assert!(validate_field("59", &MINUTE).is_ok());
        assert!(validate_field("07", &MINUTE).is_ok());
        assert!(validate_field("60", &MINUTE).is_err());
        assert!(validate_field("100/15", &MINUTE).is_err());
    }

    #[test]
    fn hour_domain() {
        assert!(validate_field("23", &HOUR).is_ok());
        assert!(validate_field("0-20/2", &HOUR).is_ok());
        assert!(validate_field("24", &HOUR).is_err());
    }

    #[test]
    fn day_of_month_domain() {
        assert!(validate_field("1,15", &DAY_OF_MONTH).is_ok());
        assert!(validate_field("31", &DAY_OF_MONTH).is_ok());
        assert!(validate_field("0", &DAY_OF_MONTH).is_err());
        assert!(validate_field("32", &DAY_OF_MONTH).is_err());
    }

    #[test]
    fn month_domain_and_names() {
        assert!(validate_field("12", &MONTH).is_ok());
        assert!(validate_field("NOV-APR", &MONTH).is_ok());
        assert!(validate_field("jan,Jul", &MONTH).is_ok());
        assert!(validate_field("13", &MONTH).is_err());
        assert!(validate_field("0", &MONTH).is_err());
        assert!(validate_field("MON", &MONTH).is_err());
    }

    #[test]
    fn day_of_week_domain_and_names() {
        assert!(validate_field("0-6", &DAY_OF_WEEK).is_ok());
        assert!(validate_field("FRI-THU", &DAY_OF_WEEK).is_ok());
        assert!(validate_field("fri-thu", &DAY_OF_WEEK).is_ok());
        assert!(validate_field("7", &DAY_OF_WEEK).is_err());
        assert!(validate_field("JAN", &DAY_OF_WEEK).is_err());
    }

    #[test]
    fn special_characters_are_rejected() {
        for field in ["?", "L", "15W", "5#3", "5L"] {
            assert!(validate_field(field, &DAY_OF_WEEK).is_err(), "{field}");
            assert!(validate_field(field, &DAY_OF_MONTH).is_err(), "{field}");
        }
    }

    #[test]
    fn wildcard_forms() {
        assert!(validate_field("*", &MINUTE).is_ok());
        assert!(validate_field("*/15", &MINUTE).is_ok());
        assert!(validate_field("*/", &MINUTE).is_err());
        assert!(validate_field("*-5", &MINUTE).is_err());
        assert!(validate_field("*,5", &MINUTE).is_err());
        assert!(validate_field("5,*", &MINUTE).is_err());
    }

    #[test]
    fn step_requires_range_or_wildcard() {
        assert!(validate_field("5/2", &MINUTE).is_err());
        assert!(validate_field("/2", &MINUTE).is_err());
    }

    #[test]
    fn zero_or_overflowing_step_is_rejected() {
        assert!(validate_field("*/0", &MINUTE).is_err());
        assert!(validate_field("1-5/0", &MINUTE).is_err());
        assert!(validate_field("*/99999999999", &MINUTE).is_err());
    }

    #[test]
    fn lists_of_ranges_are_accepted() {
        assert!(validate_field("1-5,10-20/5,30", &MINUTE).is_ok());
        assert!(validate_field("1,,2", &MINUTE).is_err());
        assert!(validate_field("1,", &MINUTE).is_err());
    }

    #[test]
    fn validation_is_repeatable() {
        for line in ["*/15 0 1,15 * 1-5 /usr/bin/find", "100/15 0 1,15 * 1-5 /x"] {
            assert_eq!(is_valid(line), is_valid(line));
        }
    }

    // ── Command path ─────────────────────────────────────────────────

    #[test]
    fn platform_paths() {
        let p = PlatformPathSyntax;
        assert!(p.is_valid_path("/usr/bin/find"));
        assert!(p.is_valid_path("relative/script.sh"));
        assert!(!p.is_valid_path(""));
        assert!(!p.is_valid_path("/bin/\0oops"));
    }
}
