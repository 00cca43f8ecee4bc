use crate::frequency::table::FrequencyTable;
use crate::types::letter::Letter;
use crate::types::report::CountingRules;

pub trait LetterCounter {
    fn count(&self, text: &str, rules: &CountingRules) -> FrequencyTable;
}

/// Single pass over the text, accumulating into the table.
/// O(n) time, table bounded by the alphabet.
#[derive(Debug, Default, Clone, Copy)]
pub struct TableCounter;

impl LetterCounter for TableCounter {
    fn count(&self, text: &str, rules: &CountingRules) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for c in text.chars() {
            if let Some(letter) = Letter::fold(c, rules.case_fold) {
                table.record(letter);
            }
        }
        table
    }
}

/// One full pass over the text per letter of the alphabet.
///
/// Still O(n), but with a coefficient of 26.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphabetSweepCounter;

impl LetterCounter for AlphabetSweepCounter {
    fn count(&self, text: &str, rules: &CountingRules) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for letter in Letter::alphabet() {
            let count = text
                .chars()
                .filter(|&c| Letter::fold(c, rules.case_fold) == Some(letter))
                .count();
            table.set(letter, count);
        }
        table
    }
}
