use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;
use crate::types::letter::Letter;

// Frozen, serializable counting configuration.
// Embedded in every report so the output says how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountingRules {
    pub version: String,
    pub case_fold: bool,
}

impl CountingRules {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            case_fold: true,
        }
    }
}

impl Default for CountingRules {
    fn default() -> Self {
        Self::v0()
    }
}

/// The winning letter of a frequency scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostCommonLetter {
    pub letter: Letter,
    pub count: usize,

    pub why: SelectionWhy,
}

/// Explanation for why a letter was selected.
/// `tied_with` lists the other letters at the same count, ascending; the
/// selected letter always sorts before all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionWhy {
    pub tied_with: Vec<Letter>,
    pub distinct_letters: usize,
}

/// The full outcome of counting one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub text_version: String,
    pub rules: CountingRules,

    pub letters_counted: usize,
    pub characters_ignored: usize,

    pub most_common: Option<MostCommonLetter>,
    pub counts: FrequencyTable,
}
