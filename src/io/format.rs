//! Output format selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain lines, byte-for-byte what the stand-alone programs print
    #[default]
    Text,
    /// One JSON envelope per invocation
    Json,
}

impl OutputFormat {
    /// `--json` wins; otherwise fall back to the configured format.
    pub fn from_json_flag(json: bool, configured: OutputFormat) -> Self {
        if json { OutputFormat::Json } else { configured }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_overrides_config() {
        assert_eq!(
            OutputFormat::from_json_flag(true, OutputFormat::Text),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_json_flag(false, OutputFormat::Json),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_json_flag(false, OutputFormat::Text),
            OutputFormat::Text
        );
    }
}
