use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Report output
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One padded line per field.
    #[default]
    Text,
    /// A single JSON object with per-field arrays.
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Column labels are right-padded with spaces to this width.
    #[serde(default = "d_label_width")]
    pub label_width: usize,
    #[serde(default)]
    pub format: OutputFormat,
    /// Placed between expanded values on a line.
    #[serde(default = "d_separator")]
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            label_width: 14,
            format: OutputFormat::Text,
            separator: d_separator(),
        }
    }
}

fn d_label_width() -> usize {
    14
}
fn d_separator() -> String {
    " ".into()
}
