//! Validation and expansion of cron lines into explicit value listings.
//!
//! ```
//! let report = ce_domain::parse("*/15 0 1,15 * 1-5 /usr/bin/find");
//! assert!(report.starts_with("minute        0 15 30 45\n"));
//! assert_eq!(ce_domain::parse("* * * *"), ce_domain::INVALID_PATTERN);
//! ```

pub mod aliases;
pub mod config;
pub mod error;
pub mod expand;
pub mod field;
pub mod line;
pub mod report;
pub mod validation;

pub use error::{Error, Result};
pub use expand::expand_field;
pub use field::{FieldKind, FieldSpec};
pub use line::{ExpandedField, ExpandedLine, RawCronLine};
pub use report::{expand_line, parse, report, INVALID_PATTERN};
pub use validation::{is_valid, validate_field, validate_line, PathSyntax, PlatformPathSyntax};
