//! Runtime options for one sift run. Built by the CLI from flags; there is
//! no on-disk configuration.

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain lines with optional score prefix and reason suffix.
    #[default]
    Text,
    /// One JSON object per emitted URL.
    Json,
}

/// Options steering filtering, scoring, and output.
#[derive(Debug, Clone)]
pub struct SiftConfig {
    /// Append matched rule names to emitted lines; also surfaces per-line
    /// parse failures in the logs.
    pub verbose: bool,
    /// Prefix emitted lines with `[<score>] `.
    pub show_score: bool,
    /// Minimum total score required for emission.
    pub min_score: u32,
    /// Drop boring static assets before scoring.
    pub exclude_static: bool,
    /// Treat script files as interesting; disables static filtering wholesale.
    pub include_scripts: bool,
    /// Suppress repeats of the same host+path+parameter-name identity.
    pub dedupe: bool,
    /// Rendering mode for emitted URLs.
    pub output: OutputFormat,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            show_score: false,
            min_score: 1,
            exclude_static: true,
            include_scripts: false,
            dedupe: true,
            output: OutputFormat::Text,
        }
    }
}
