use crate::error::{Error, Result};
use crate::field::{FieldKind, FieldSpec};

/// The six tokens of a cron line, before validation of their contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCronLine {
    /// Minute, hour, day-of-month, month, day-of-week.
    pub fields: [String; 5],
    pub command: String,
}

impl RawCronLine {
    /// Split on runs of whitespace. Leading and trailing whitespace is ignored.
    pub fn split(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [minute, hour, dom, month, dow, command] => Ok(Self {
                fields: [
                    minute.to_string(),
                    hour.to_string(),
                    dom.to_string(),
                    month.to_string(),
                    dow.to_string(),
                ],
                command: command.to_string(),
            }),
            _ => Err(Error::MalformedLine {
                found: tokens.len(),
            }),
        }
    }
}

/// Every concrete value one field denotes, in generation order.
///
/// Values are kept as text: bare integers and list elements are emitted
/// verbatim (`05` stays `05`). No sorting, no de-duplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedField {
    pub kind: FieldKind,
    pub values: Vec<String>,
}

impl ExpandedField {
    pub fn new(spec: &FieldSpec, values: Vec<String>) -> Self {
        Self {
            kind: spec.kind,
            values,
        }
    }

    pub fn join(&self, separator: &str) -> String {
        self.values.join(separator)
    }
}

/// A fully expanded cron line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedLine {
    pub minute: ExpandedField,
    pub hour: ExpandedField,
    pub day_of_month: ExpandedField,
    pub month: ExpandedField,
    pub day_of_week: ExpandedField,
    pub command: String,
}

impl ExpandedLine {
    /// Time fields in line order.
    pub fn fields(&self) -> [&ExpandedField; 5] {
        [
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ]
    }
}
