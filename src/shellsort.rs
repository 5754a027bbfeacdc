//! Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.
//!
//! Early passes exchange far apart elements, which removes large amounts of disorder quickly, so
//! the final gap 1 pass, a plain exchange based insertion sort, has little work left to do.

use core::cmp::Ordering;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// In-place, *O*(*n*^2) worst-case with the halving gap sequence.
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
/// All loops are bounded by indices, so the sort terminates for any comparator and only ever
/// exchanges elements.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    let mut gap = len / 2;
    while gap > 0 {
        for i in gap..len {
            // Walk the gap-strided chain ending at `i` backwards, exchanging out of order pairs.
            let mut j = i - gap;
            loop {
                if compare(&v[j], &v[j + gap]) != Ordering::Greater {
                    break;
                }

                v.swap(j, j + gap);

                if j < gap {
                    break;
                }
                j -= gap;
            }
        }

        gap /= 2;
    }
}
