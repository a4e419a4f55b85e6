//! Entry point: validate, expand, render.

use serde_json::{json, Map, Value};

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::expand::expand_field;
use crate::field::{COMMAND_LABEL, DAY_OF_MONTH, DAY_OF_WEEK, FIELDS, HOUR, MINUTE, MONTH};
use crate::line::ExpandedLine;
use crate::validation::{validate_line, PathSyntax, PlatformPathSyntax};

/// Printed in place of a report for any rejected line.
pub const INVALID_PATTERN: &str = "Invalid cron pattern";

/// Validate and expand a whole line.
pub fn expand_line(line: &str, paths: &dyn PathSyntax) -> Result<ExpandedLine> {
    let raw = validate_line(line, paths)?;
    let [minute, hour, dom, month, dow] = &raw.fields;
    Ok(ExpandedLine {
        minute: expand_field(minute, &MINUTE)?,
        hour: expand_field(hour, &HOUR)?,
        day_of_month: expand_field(dom, &DAY_OF_MONTH)?,
        month: expand_field(month, &MONTH)?,
        day_of_week: expand_field(dow, &DAY_OF_WEEK)?,
        command: raw.command,
    })
}

/// Six newline-terminated lines, labels padded to `label_width`.
pub fn render_text(expanded: &ExpandedLine, output: &OutputConfig) -> String {
    let width = output.label_width;
    let mut out = String::new();
    for (spec, field) in FIELDS.iter().zip(expanded.fields()) {
        out.push_str(&format!(
            "{:<width$}{}\n",
            spec.label,
            field.join(&output.separator)
        ));
    }
    out.push_str(&format!("{:<width$}{}\n", COMMAND_LABEL, expanded.command));
    out
}

/// One JSON object keyed by field, each holding its value list.
pub fn render_json(expanded: &ExpandedLine) -> String {
    let mut object = Map::new();
    for field in expanded.fields() {
        object.insert(field.kind.key().to_string(), json!(field.values));
    }
    object.insert("command".into(), json!(expanded.command));
    Value::Object(object).to_string()
}

/// Render a line per `output`, or [`INVALID_PATTERN`] if it is rejected.
pub fn report(line: &str, output: &OutputConfig, paths: &dyn PathSyntax) -> String {
    let span = tracing::debug_span!("report", line);
    let _enter = span.enter();

    match expand_line(line, paths) {
        Ok(expanded) => match output.format {
            OutputFormat::Text => render_text(&expanded, output),
            OutputFormat::Json => render_json(&expanded),
        },
        Err(e) => {
            tracing::debug!(error = %e, "invalid cron line");
            INVALID_PATTERN.to_string()
        }
    }
}

/// Text report with default settings, or [`INVALID_PATTERN`].
pub fn parse(line: &str) -> String {
    report(line, &OutputConfig::default(), &PlatformPathSyntax)
}
