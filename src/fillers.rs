use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::config::SetupError;

/// Word list for fillers that are always cut.
pub const UNCONDITIONAL_LIST: &str = "fillers_normal.txt";
/// Word list for fillers cut only past the duration/gap threshold.
pub const CONDITIONAL_LIST: &str = "fillers_threshold.txt";

/// The two disjoint filler word sets, loaded once per run.
///
/// Matching is exact and case-sensitive; no stemming or normalization.
#[derive(Debug, Clone, Default)]
pub struct FillerLexicon {
    unconditional: HashSet<String>,
    conditional: HashSet<String>,
}

impl FillerLexicon {
    pub fn new(unconditional: &[&str], conditional: &[&str]) -> Self {
        Self {
            unconditional: unconditional.iter().map(|w| w.to_string()).collect(),
            conditional: conditional.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Load both word lists from the install directory.
    ///
    /// A missing list file is a fatal setup error, checked before any
    /// probing, extraction or transcription starts.
    pub async fn load(install_dir: &Path) -> Result<Self> {
        let unconditional_path = install_dir.join(UNCONDITIONAL_LIST);
        let conditional_path = install_dir.join(CONDITIONAL_LIST);

        for path in [&unconditional_path, &conditional_path] {
            if !path.exists() {
                return Err(SetupError::MissingFillerList(path.clone()).into());
            }
        }

        let unconditional = parse_word_list(&tokio::fs::read_to_string(&unconditional_path).await?);
        let conditional = parse_word_list(&tokio::fs::read_to_string(&conditional_path).await?);

        let lexicon = Self {
            unconditional,
            conditional,
        };

        info!(
            "📚 Loaded filler lexicon: {} unconditional, {} conditional",
            lexicon.unconditional.len(),
            lexicon.conditional.len()
        );

        Ok(lexicon)
    }

    pub fn is_unconditional(&self, word: &str) -> bool {
        self.unconditional.contains(word)
    }

    pub fn is_conditional(&self, word: &str) -> bool {
        self.conditional.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.unconditional.is_empty() && self.conditional.is_empty()
    }
}

/// One word per line; blank lines and `#` comments are skipped.
fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
