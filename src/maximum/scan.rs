use std::cmp::Ordering;

/// Returns the greatest element of `items`, or [`None`] if it is empty.
///
/// Single forward pass: the running maximum starts at the first element and
/// is replaced only by an element that compares strictly greater, so the
/// first of several equal maxima is the one returned.
///
/// # Time Complexity
///
/// *O*(*n*) time, *O*(1) extra space.
///
/// # Examples
///
/// ```
/// use tally_core::max;
///
/// assert_eq!(max(&[3, 1, 4, 1, 5, 9, 2, 6]), Some(&9));
/// assert_eq!(max::<i32>(&[]), None);
/// ```
pub fn max<T: Ord>(items: &[T]) -> Option<&T> {
    max_by(items, Ord::cmp)
}

/// [`max`] under a caller-supplied total order.
pub fn max_by<T, F>(items: &[T], mut compare: F) -> Option<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (first, rest) = items.split_first()?;

    let mut current = first;
    for item in rest {
        if compare(item, current) == Ordering::Greater {
            current = item;
        }
    }
    Some(current)
}

/// Position of the element [`max`] returns.
pub fn max_index<T: Ord>(items: &[T]) -> Option<usize> {
    let (first, rest) = items.split_first()?;

    let mut best = 0;
    let mut current = first;
    for (offset, item) in rest.iter().enumerate() {
        if item > current {
            current = item;
            best = offset + 1;
        }
    }
    Some(best)
}
