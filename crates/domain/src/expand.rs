//! Field expansion: compact cron syntax to the explicit values it denotes.
//!
//! Input is trusted to have passed [`crate::validation::validate_field`].
//! Dispatch order (first match wins):
//!
//! 1. bare integer, emitted verbatim
//! 2. comma list, elements emitted verbatim in input order
//! 3. `start-end`
//! 4. `*/step`
//! 5. `start-end/step`
//! 6. `*`
//!
//! Ranges with `start > end` wrap past `max` back to the bottom of the
//! domain, so `FRI-THU` yields `5 6 0 1 2 3 4`.

use crate::aliases;
use crate::error::{Error, Result};
use crate::field::FieldSpec;
use crate::line::ExpandedField;

/// Expand one validated field.
///
/// Anything unparseable that slipped past validation surfaces as
/// [`Error::FieldSyntax`] rather than a panic.
pub fn expand_field(field: &str, spec: &FieldSpec) -> Result<ExpandedField> {
    let field = aliases::substitute(field);
    let field: &str = &field;
    let syntax = || Error::FieldSyntax {
        field: spec.name,
        value: field.to_string(),
    };

    let values = if field.parse::<u32>().is_ok() {
        tracing::trace!(field = spec.name, "bare value");
        vec![field.to_string()]
    } else if field.contains(',') {
        tracing::trace!(field = spec.name, "list");
        field.split(',').map(str::to_string).collect()
    } else if field.contains('-') && !field.contains('/') {
        tracing::trace!(field = spec.name, "range");
        let (start, end) = parse_range(field).ok_or_else(syntax)?;
        expand_range(start, end, 1, spec)
    } else if field.contains('/') && !field.contains('-') {
        tracing::trace!(field = spec.name, "wildcard step");
        let step = field
            .split_once('/')
            .and_then(|(_, step)| parse_step(step))
            .ok_or_else(syntax)?;
        (spec.min..=spec.max)
            .filter(|i| i % step == 0)
            .map(|i| i.to_string())
            .collect()
    } else if let Some((range, step)) = field.split_once('/') {
        tracing::trace!(field = spec.name, "range step");
        let (start, end) = parse_range(range).ok_or_else(syntax)?;
        let step = parse_step(step).ok_or_else(syntax)?;
        expand_range(start, end, step, spec)
    } else if field == "*" {
        tracing::trace!(field = spec.name, "wildcard");
        (spec.min..=spec.max).map(|i| i.to_string()).collect()
    } else {
        return Err(syntax());
    };

    Ok(ExpandedField::new(spec, values))
}

fn parse_range(range: &str) -> Option<(u32, u32)> {
    let (start, end) = range.split_once('-')?;
    Some((start.parse().ok()?, end.parse().ok()?))
}

fn parse_step(step: &str) -> Option<u32> {
    step.parse().ok().filter(|n| *n > 0)
}

/// Walk `start..=end`, continuing past `max` when the range wraps.
///
/// Values above `max` are folded back into the domain: to `i - max - 1` for
/// zero-indexed domains, `i - max` otherwise. With a step, `i > max` is
/// folded when `(i - max) % step == 0`; every other `i` (in-domain or not)
/// is emitted as-is when `i % step == 0`. A stepped wrap can therefore emit
/// raw values above `max`.
fn expand_range(start: u32, end: u32, step: u32, spec: &FieldSpec) -> Vec<String> {
    let end = if start > end {
        if spec.zero_indexed {
            spec.max + end + 1
        } else {
            spec.max + end
        }
    } else {
        end
    };

    let mut values = Vec::new();
    for i in start..=end {
        if i > spec.max && (i - spec.max) % step == 0 {
            let wrapped = if spec.zero_indexed {
                i - spec.max - 1
            } else {
                i - spec.max
            };
            values.push(wrapped.to_string());
        } else if i % step == 0 {
            values.push(i.to_string());
        }
    }
    values
}
