use std::cmp::Ordering;

use tally_core::max;
use tally_core::maximum::{max_by, max_index};

#[test]
fn max_of_empty_is_none() {
    let empty: [i32; 0] = [];
    assert_eq!(max(&empty), None);
    assert_eq!(max_index(&empty), None);
}

#[test]
fn max_of_single_element() {
    assert_eq!(max(&[5]), Some(&5));
    assert_eq!(max_index(&[5]), Some(0));
}

#[test]
fn max_of_mixed_sequence() {
    let items = [3, 1, 4, 1, 5, 9, 2, 6];
    assert_eq!(max(&items), Some(&9));
    assert_eq!(max_index(&items), Some(5));
}

#[test]
fn max_handles_negative_values() {
    assert_eq!(max(&[-7, -3, -12]), Some(&-3));
}

#[test]
fn max_works_on_strings() {
    let words = ["pear", "apple", "zucchini", "fig"];
    assert_eq!(max(&words), Some(&"zucchini"));
}

#[test]
fn max_is_an_element_and_nothing_exceeds_it() {
    let items = [12, 40, 7, 40, 0, 39, 18];
    let found = max(&items).unwrap();

    assert!(items.contains(found));
    assert!(items.iter().all(|item| item <= found));
}

#[test]
fn ties_resolve_to_first_encountered() {
    // Equal under Ord but distinguishable by the second field.
    #[derive(Debug, PartialEq, Eq)]
    struct Tagged(u32, &'static str);

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    let items = [Tagged(1, "a"), Tagged(8, "first"), Tagged(3, "b"), Tagged(8, "second")];
    assert_eq!(max(&items).map(|t| t.1), Some("first"));
    assert_eq!(max_index(&items), Some(1));
}

#[test]
fn max_by_uses_supplied_order() {
    let words = ["kiwi", "banana", "fig", "cherry"];

    let longest = max_by(&words, |a, b| a.len().cmp(&b.len()));
    // banana and cherry tie on length; the first wins.
    assert_eq!(longest, Some(&"banana"));

    let reversed = max_by(&[4i32, 2, 9], |a, b| b.cmp(a));
    assert_eq!(reversed, Some(&2));
}

#[test]
fn max_does_not_mutate_input() {
    let items = vec![3, 1, 2];
    let snapshot = items.clone();
    let _ = max(&items);
    assert_eq!(items, snapshot);
}
