use crate::frequency::table::FrequencyTable;
use crate::types::report::{MostCommonLetter, SelectionWhy};

/// Pick the letter with the highest count.
///
/// The table is scanned in ascending letter order and the running best is
/// only replaced by a strictly greater count, so among tied letters the
/// lowest one wins. Returns `None` for an empty table.
pub fn select_most_common(table: &FrequencyTable) -> Option<MostCommonLetter> {
    let mut best = None;
    for (letter, count) in table.iter() {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((letter, count)),
        }
    }

    let (letter, count) = best?;
    let tied_with = table
        .iter()
        .filter(|&(other, other_count)| other != letter && other_count == count)
        .map(|(other, _)| other)
        .collect::<Vec<_>>();

    debug_assert!(tied_with.iter().all(|other| letter < *other));

    Some(MostCommonLetter {
        letter,
        count,
        why: SelectionWhy {
            tied_with,
            distinct_letters: table.len(),
        },
    })
}
