use serde::{Deserialize, Serialize};

/// How reports are presented. The classification rule itself is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub suspicious_only: bool,
    #[serde(default = "default_marker_open")]
    pub marker_open: String,
    #[serde(default = "default_marker_close")]
    pub marker_close: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            suspicious_only: false,
            marker_open: default_marker_open(),
            marker_close: default_marker_close(),
        }
    }
}

/// Filters applied to files found by walking directories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// On-disk shape of `glyphwatch.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphwatchToml {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

const fn default_true() -> bool { true }
fn default_marker_open() -> String { "[[".to_string() }
fn default_marker_close() -> String { "]]".to_string() }
