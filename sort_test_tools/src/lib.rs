//! Shared conformance tests and input patterns for in-place sorts.
//!
//! A sort implementation plugs in by implementing [`Sort`] and invoking
//! [`instantiate_sort_tests!`] in an integration test crate.

use std::cmp::Ordering;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(v: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts the inclusive range `v[left..=right]`, with `left <= right < v.len()`.
    ///
    /// Implementations with their own range entry point should override this, the default sorts
    /// the sub-slice.
    fn sort_range_by<T, F>(v: &mut [T], left: usize, right: usize, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        Self::sort_by(&mut v[left..=right], compare);
    }
}

pub mod patterns;
