//! Recursive partition-exchange sort.
//!
//! The midpoint element is moved to the front of the range and serves as pivot. A single forward
//! scan swaps every element that is less than the pivot into a growing zone behind it, then the
//! pivot is swapped to the end of that zone, which is its final position. Both sides are then
//! sorted the same way.
//!
//! The smaller side is sorted by recursion and the larger side by the enclosing loop, which bounds
//! the stack depth to `O(log(n))` even for adversarial inputs. Elements are only ever exchanged
//! with `swap`, so whatever the comparator does, including panicking or returning an error, the
//! slice always holds a permutation of its original elements.

use core::cmp::Ordering;
use core::convert::Infallible;

use crate::error::SortError;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not allocate),
/// and *O*(*n* \* log(*n*)) on average, *O*(*n*^2) worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [8, 3, 5, 1, 9, 2];
/// partition_sort::quicksort::sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 5, 8, 9]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, T::cmp);
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator should define a total order. If it doesn't, the resulting order is unspecified,
/// but the sort still terminates and the slice still contains exactly its original elements.
/// The same holds if `compare` panics.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut is_less = |a: &T, b: &T| Ok::<_, Infallible>(compare(a, b) == Ordering::Less);
    into_ok(quicksort(v, &mut is_less));
}

/// Sorts `v[left..=right]` with [`Ord`], see [`sort_range_by`].
#[inline]
pub fn sort_range<T>(v: &mut [T], left: isize, right: isize) -> Result<(), SortError>
where
    T: Ord,
{
    sort_range_by(v, left, right, T::cmp)
}

/// Sorts the inclusive range `v[left..=right]` with a comparator function.
///
/// `left > right` denotes an empty range and is a no-op, whatever the values. For a non-empty
/// range both bounds must lie in `[0, v.len())`, otherwise [`SortError::OutOfRange`] is returned
/// before any element is accessed. Elements outside the range are never touched.
///
/// # Examples
///
/// ```
/// use partition_sort::quicksort::sort_range_by;
///
/// let mut v = [4, 9, 7, 8, 0];
/// sort_range_by(&mut v, 1, 3, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(v, [4, 7, 8, 9, 0]);
///
/// assert!(sort_range_by(&mut v, 0, -1, |a, b| a.cmp(b)).is_ok());
/// assert!(sort_range_by(&mut v, 0, 5, |a, b| a.cmp(b)).is_err());
/// ```
pub fn sort_range_by<T, F>(
    v: &mut [T],
    left: isize,
    right: isize,
    compare: F,
) -> Result<(), SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Some((l, r)) = checked_range(v.len(), left, right)? {
        sort_by(&mut v[l..=r], compare);
    }

    Ok(())
}

/// Sorts the slice with a fallible comparator function.
///
/// The first `Err` returned by `compare` aborts the sort and is propagated as
/// [`SortError::Comparator`]. The slice is then left in an unspecified order, but contains
/// exactly its original elements. There is no rollback.
#[inline]
pub fn try_sort_by<T, E, F>(v: &mut [T], mut compare: F) -> Result<(), SortError<E>>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let mut is_less = |a: &T, b: &T| compare(a, b).map(|ord| ord == Ordering::Less);
    quicksort(v, &mut is_less).map_err(SortError::Comparator)
}

/// Range variant of [`try_sort_by`], with the bounds semantics of [`sort_range_by`].
pub fn try_sort_range_by<T, E, F>(
    v: &mut [T],
    left: isize,
    right: isize,
    compare: F,
) -> Result<(), SortError<E>>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    match checked_range(v.len(), left, right).map_err(SortError::widen)? {
        Some((l, r)) => try_sort_by(&mut v[l..=r], compare),
        None => Ok(()),
    }
}

/// Performs a single partition pass around `v[pivot_pos]`.
///
/// Returns the final position `mid` of the pivot. Afterwards every element in `v[..mid]` compares
/// less than the pivot and every element in `v[mid + 1..]` compares greater or equal to it.
/// Equal elements all end up on the right side.
pub fn partition_by<T, F>(
    v: &mut [T],
    pivot_pos: usize,
    mut compare: F,
) -> Result<usize, SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if pivot_pos >= v.len() {
        let pos = isize::try_from(pivot_pos).unwrap_or(isize::MAX);
        log::debug!("rejected pivot position {pivot_pos} for length {}", v.len());

        return Err(SortError::OutOfRange {
            left: pos,
            right: pos,
            len: v.len(),
        });
    }

    let mut is_less = |a: &T, b: &T| Ok::<_, Infallible>(compare(a, b) == Ordering::Less);
    Ok(into_ok(partition(v, pivot_pos, &mut is_less)))
}

// --- IMPL ---

fn quicksort<T, E, F>(mut v: &mut [T], is_less: &mut F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    loop {
        let len = v.len();
        if len < 2 {
            return Ok(());
        }

        // Midpoint of the inclusive range [0, len - 1]. Picking it over the first element avoids
        // quadratic behavior for ascending and descending inputs.
        let mid = partition(v, (len - 1) / 2, is_less)?;

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less)?;
            v = right;
        } else {
            quicksort(right, is_less)?;
            v = left;
        }
    }
}

/// `pivot_pos` must be in-bounds.
fn partition<T, E, F>(v: &mut [T], pivot_pos: usize, is_less: &mut F) -> Result<usize, E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    // Place the pivot at the beginning of slice.
    v.swap(0, pivot_pos);
    let (pivot, v_without_pivot) = v.split_at_mut(1);
    let pivot = &pivot[0];

    let mut num_lt = 0;
    for i in 0..v_without_pivot.len() {
        if is_less(&v_without_pivot[i], pivot)? {
            v_without_pivot.swap(num_lt, i);
            num_lt += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(0, num_lt);

    Ok(num_lt)
}

/// Translates caller bounds into slice indices. `Ok(None)` means the range is empty.
fn checked_range(
    len: usize,
    left: isize,
    right: isize,
) -> Result<Option<(usize, usize)>, SortError> {
    if left > right {
        return Ok(None);
    }

    match (usize::try_from(left), usize::try_from(right)) {
        (Ok(l), Ok(r)) if r < len => Ok(Some((l, r))),
        _ => {
            log::debug!("rejected sort range [{left}, {right}] for length {len}");
            Err(SortError::OutOfRange { left, right, len })
        }
    }
}

fn into_ok<T>(res: Result<T, Infallible>) -> T {
    match res {
        Ok(val) => val,
        Err(never) => match never {},
    }
}
