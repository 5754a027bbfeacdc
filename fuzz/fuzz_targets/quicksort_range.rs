#![no_main]

use libfuzzer_sys::fuzz_target;

use partition_sort::quicksort as test_sort;

// The first two bytes select the bounds, signed so that empty and negative ranges are reachable.
fuzz_target!(|data: &[u8]| {
    let Some((&[left, right], rest)) = data.split_first_chunk::<2>() else {
        return;
    };
    let (left, right) = (left as i8 as isize, right as i8 as isize);

    let original = rest.to_vec();
    let mut v = original.clone();

    match test_sort::sort_range(&mut v, left, right) {
        Ok(()) if left > right => assert_eq!(v, original),
        Ok(()) => {
            let (l, r) = (left as usize, right as usize);
            let mut expected = original.clone();
            expected[l..=r].sort_unstable();
            assert_eq!(v, expected);
        }
        Err(err) => {
            assert!(err.is_out_of_range());
            assert_eq!(v, original);
        }
    }
});
