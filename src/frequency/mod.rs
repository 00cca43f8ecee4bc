pub mod counting;
pub mod selection;
pub mod table;

use crate::text::Text;
use crate::types::report::{CountingRules, FrequencyReport, MostCommonLetter};
pub use counting::{AlphabetSweepCounter, LetterCounter, TableCounter};
pub use selection::select_most_common;
pub use table::{FrequencyTable, FrequencyTableError};

/// Most frequent Latin letter of `text`, case-insensitive.
///
/// Ties go to the lowest letter. Returns `None` when the text holds no
/// `a-z` letters at all.
///
/// ```
/// use tally_core::most_common;
///
/// assert_eq!(most_common("hello"), Some('l'));
/// assert_eq!(most_common("Mississippi"), Some('i'));
/// assert_eq!(most_common("12345!@#$%"), None);
/// ```
pub fn most_common(text: &str) -> Option<char> {
	MostCommonSelector::default()
		.select(text)
		.map(|selected| selected.letter.as_char())
}

pub struct MostCommonSelector<C> {
	counter: C,
	rules: CountingRules,
}

impl Default for MostCommonSelector<TableCounter> {
	fn default() -> Self {
		Self {
			counter: TableCounter,
			rules: CountingRules::v0(),
		}
	}
}

impl<C> MostCommonSelector<C>
where
	C: LetterCounter,
{
	pub fn new(counter: C, rules: CountingRules) -> Self {
		Self { counter, rules }
	}

	pub fn rules(&self) -> &CountingRules {
		&self.rules
	}

	pub fn count(&self, text: &str) -> FrequencyTable {
		self.counter.count(text, &self.rules)
	}

	pub fn select(&self, text: &str) -> Option<MostCommonLetter> {
		select_most_common(&self.count(text))
	}

	pub fn report(&self, text: &Text) -> FrequencyReport {
		// 1. Counting Phase
		let counts = self.count(text.as_str());

		// 2. Selection Phase
		let most_common = select_most_common(&counts);

		let letters_counted = counts.total();
		let characters_ignored = text.as_str().chars().count() - letters_counted;

		debug_assert!(
			most_common
				.as_ref()
				.map_or(counts.is_empty(), |m| counts.iter().all(|(_, count)| count <= m.count))
		);

		FrequencyReport {
			text_version: text.version().as_str().to_string(),
			rules: self.rules.clone(),
			letters_counted,
			characters_ignored,
			most_common,
			counts,
		}
	}
}
