//! In-place, comparator driven sorts over sequences of element references.
//!
//! The main entry point is [`quicksort`], a recursive partition-exchange sort with midpoint
//! pivot selection. [`shellsort`] offers a gap based exchange sort with the same comparator
//! contract and [`compare`] the classic string comparators. Both sorts only reorder the elements
//! of the slice they are given: sort `&mut [&T]` or `&mut [usize]` handles to reorder references
//! to payloads owned elsewhere.

pub mod compare;
pub mod error;
pub mod quicksort;
pub mod shellsort;

pub use error::SortError;
pub use quicksort::{
    partition_by, sort, sort_by, sort_range, sort_range_by, try_sort_by, try_sort_range_by,
};
