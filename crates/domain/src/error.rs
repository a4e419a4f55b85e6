/// Why a cron line was rejected.
///
/// Callers of [`crate::parse`] never see these; every variant collapses to
/// [`crate::INVALID_PATTERN`]. The `check` path surfaces them verbatim.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("expected 6 fields (minute hour dom month dow command), got {found}")]
    MalformedLine { found: usize },

    #[error("{field}: invalid value '{value}'")]
    FieldSyntax { field: &'static str, value: String },

    #[error("command: '{0}' is not a valid path")]
    InvalidCommand(String),

    #[error("config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
