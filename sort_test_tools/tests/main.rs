//! Checks the suite itself against the standard library sort.

use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::Sort;

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    fn sort<T>(v: &mut [T])
    where
        T: Ord,
    {
        v.sort_unstable();
    }

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        v.sort_unstable_by(compare);
    }
}

instantiate_sort_tests!(SortImpl);
