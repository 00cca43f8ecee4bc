pub mod letter;
pub mod report;

pub use letter::{Letter, LetterError};
pub use report::{CountingRules, FrequencyReport, MostCommonLetter, SelectionWhy};
