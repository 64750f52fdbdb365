//! Extraction patterns and their defaults.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Knobs for milestone extraction and file discovery.
///
/// The defaults match the engine's current log vocabulary. Earlier engine
/// versions spelled the milestone `id=<uuid> ... Request handled locally`;
/// point `milestone_label` and `milestone_phrase` at those spellings
/// instead of editing code.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Field label directly preceding the request id token.
    pub milestone_label: String,

    /// Phrase later in the same line marking local completion.
    pub milestone_phrase: String,

    /// Regex for the id token itself.
    pub request_id_pattern: String,

    /// File-name suffix selecting log files during discovery.
    pub log_suffix: String,

    /// Regex recovering the group token from a file name.
    pub group_id_pattern: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            milestone_label: "RID".to_string(),
            milestone_phrase: "Request locally handled".to_string(),
            request_id_pattern: r"\w{8}-\w{4}-\w{4}-\w{4}-\w{12}".to_string(),
            log_suffix: ".log".to_string(),
            group_id_pattern: r"g\d+".to_string(),
        }
    }
}

/// Compiled form of [`AnalysisConfig`], built once per run.
#[derive(Clone, Debug)]
pub struct Patterns {
    pub milestone: Regex,
    pub group: Regex,
}

impl AnalysisConfig {
    /// Compile the milestone and group regexes.
    ///
    /// The label and phrase are matched literally; only
    /// `request_id_pattern` and `group_id_pattern` are interpreted as
    /// regex. A pattern that fails to compile aborts the run before any
    /// file is opened.
    pub fn compile(&self) -> Result<Patterns, InputError> {
        let milestone = Regex::new(&format!(
            "{}=({}).+{}",
            regex::escape(&self.milestone_label),
            self.request_id_pattern,
            regex::escape(&self.milestone_phrase),
        ))?;
        let group = Regex::new(&self.group_id_pattern)?;
        Ok(Patterns { milestone, group })
    }
}
