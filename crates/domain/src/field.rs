//! The five time fields of a cron line and their numeric domains.

/// Which time component a field describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldKind {
    /// Machine-readable key, used for JSON output.
    pub fn key(self) -> &'static str {
        match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day_of_month",
            Self::Month => "month",
            Self::DayOfWeek => "day_of_week",
        }
    }
}

/// Immutable descriptor of one field's domain.
///
/// `zero_indexed` controls wrap-around: a zero-indexed domain wraps from
/// `max` to `0` (`max + 1` steps back to `min`), a one-indexed domain wraps
/// from `max` to `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub kind: FieldKind,
    /// Identifier used in diagnostics (`day-of-month`).
    pub name: &'static str,
    /// Label used in the report (`day of month`).
    pub label: &'static str,
    pub min: u32,
    pub max: u32,
    pub zero_indexed: bool,
}

impl FieldSpec {
    /// Number of distinct values in `[min, max]`.
    pub fn domain_len(&self) -> usize {
        (self.max - self.min + 1) as usize
    }
}

pub const MINUTE: FieldSpec = FieldSpec {
    kind: FieldKind::Minute,
    name: "minute",
    label: "minute",
    min: 0,
    max: 59,
    zero_indexed: true,
};

pub const HOUR: FieldSpec = FieldSpec {
    kind: FieldKind::Hour,
    name: "hour",
    label: "hour",
    min: 0,
    max: 23,
    zero_indexed: true,
};

pub const DAY_OF_MONTH: FieldSpec = FieldSpec {
    kind: FieldKind::DayOfMonth,
    name: "day-of-month",
    label: "day of month",
    min: 1,
    max: 31,
    zero_indexed: false,
};

pub const MONTH: FieldSpec = FieldSpec {
    kind: FieldKind::Month,
    name: "month",
    label: "month",
    min: 1,
    max: 12,
    zero_indexed: false,
};

pub const DAY_OF_WEEK: FieldSpec = FieldSpec {
    kind: FieldKind::DayOfWeek,
    name: "day-of-week",
    label: "day of week",
    min: 0,
    max: 6,
    zero_indexed: true,
};

/// Time fields in line order.
pub const FIELDS: [FieldSpec; 5] = [MINUTE, HOUR, DAY_OF_MONTH, MONTH, DAY_OF_WEEK];

/// Report label for the trailing command token.
pub const COMMAND_LABEL: &str = "command";

/// Width of the longest report label, used to check `output.label_width`.
pub fn longest_label() -> usize {
    FIELDS
        .iter()
        .map(|f| f.label.len())
        .chain(std::iter::once(COMMAND_LABEL.len()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_match_cron_conventions() {
        let bounds: Vec<(u32, u32)> = FIELDS.iter().map(|f| (f.min, f.max)).collect();
        assert_eq!(bounds, vec![(0, 59), (0, 23), (1, 31), (1, 12), (0, 6)]);
    }

    #[test]
    fn zero_indexed_iff_min_is_zero() {
        for f in FIELDS {
            assert_eq!(f.zero_indexed, f.min == 0, "{}", f.name);
        }
    }

    #[test]
    fn longest_label_is_day_of_month() {
        assert_eq!(longest_label(), "day of month".len());
    }

    #[test]
    fn keys_are_snake_case_names() {
        let keys: Vec<&str> = FIELDS.iter().map(|f| f.kind.key()).collect();
        assert_eq!(
            keys,
            vec!["minute", "hour", "day_of_month", "month", "day_of_week"]
        );
    }

    #[test]
    fn domain_len_counts_inclusive_bounds() {
        assert_eq!(MINUTE.domain_len(), 60);
        assert_eq!(MONTH.domain_len(), 12);
        assert_eq!(DAY_OF_WEEK.domain_len(), 7);
    }
}
