//! In-place sorting algorithms.
//!
//! Three sorts over mutable slices of ordered elements. All of them
//! rearrange the slice in place: after a call the slice is non-decreasing
//! and holds exactly the values it held before.
//!
//! ##### Algorithms
//!
//! ###### `insertion_sort`
//!
//! A stable, shift-based insertion sort. Quadratic in general but linear
//! on already sorted input. `insertion_sort` should be preferred for
//! short or nearly sorted slices.
//!
//! ###### `quick_sort_recursive`
//!
//! A recursive quicksort around a Lomuto partition which always picks the
//! last element of a segment as the pivot. Averages O(n log n), but the
//! fixed pivot choice degrades to quadratic time and O(n) recursion depth
//! on already sorted or reverse sorted input, so a large adversarial
//! slice can exhaust the call stack.
//!
//! ###### `quick_sort`
//!
//! The iterative equivalent of `quick_sort_recursive`, driving the same
//! partition from an explicit stack of segment bounds which grows on the
//! heap. It has no call-stack failure mode and should be preferred when
//! the input size or shape is not under the caller's control.
//!
//! Neither quicksort is stable: the shared partition places elements
//! equal to the pivot in the upper segment, and the two variants may
//! order equal elements differently while agreeing on the value sequence.

/// Sort a slice with shift-based insertion sort.
///
/// Stable: elements which compare equal keep their relative order. Runs
/// in O(n²) time in the worst case and O(n) on already sorted input.
///
/// ### Example
///
/// ```
/// use setsort::sort::insertion_sort;
///
/// let mut values = [5, -3, 0, 5, 2];
/// insertion_sort(&mut values);
/// assert_eq!(values, [-3, 0, 2, 5, 5]);
/// ```
pub fn insertion_sort<T: Ord>(values: &mut [T]) {
    for unsorted in 1..values.len() {
        let mut i = unsorted;
        while i > 0 && values[i - 1] > values[i] {
            values.swap(i - 1, i);
            i -= 1;
        }
    }
}

/// Sort a slice with recursive quicksort.
///
/// Averages O(n log n) comparisons but recurses once per partition, and
/// the last-element pivot makes already sorted and reverse sorted input
/// degrade to O(n) recursion depth. Use [`quick_sort`] when such input
/// may be large enough to exhaust the call stack.
///
/// Not stable.
///
/// ### Example
///
/// ```
/// use setsort::sort::quick_sort_recursive;
///
/// let mut values = [5, -3, 0, 5, 2];
/// quick_sort_recursive(&mut values);
/// assert_eq!(values, [-3, 0, 2, 5, 5]);
/// ```
pub fn quick_sort_recursive<T: Ord>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }
    let pivot = partition(values);
    let (lower, upper) = values.split_at_mut(pivot);
    quick_sort_recursive(lower);
    quick_sort_recursive(&mut upper[1..]);
}

/// Sort a slice with iterative quicksort.
///
/// Behaves exactly like [`quick_sort_recursive`] but replaces the call
/// stack with an explicit, growable stack of segment bounds, so
/// pathological input costs time rather than stack space.
///
/// Not stable.
///
/// ### Example
///
/// ```
/// use setsort::sort::quick_sort;
///
/// let mut values = [5, -3, 0, 5, 2];
/// quick_sort(&mut values);
/// assert_eq!(values, [-3, 0, 2, 5, 5]);
/// ```
pub fn quick_sort<T: Ord>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }

    // Only segments of two or more elements are ever pushed.
    let mut pending = vec![(0, values.len() - 1)];
    while let Some((left, right)) = pending.pop() {
        let pivot = left + partition(&mut values[left..=right]);
        if pivot > left + 1 {
            pending.push((left, pivot - 1));
        }
        if pivot + 1 < right {
            pending.push((pivot + 1, right));
        }
    }
}

/// Partition a non-empty slice around its last element.
///
/// Rearranges the slice so that every element strictly less than the
/// pivot precedes it and every other element follows it, then returns the
/// pivot's final index. Elements equal to the pivot land in the upper
/// segment, which is what makes both quicksorts unstable.
fn partition<T: Ord>(values: &mut [T]) -> usize {
    let last = values.len() - 1;
    let mut boundary = 0;
    for i in 0..last {
        if values[i] < values[last] {
            values.swap(boundary, i);
            boundary += 1;
        }
    }
    values.swap(boundary, last);
    boundary
}

#[cfg(test)]
mod test {
    use quickcheck_macros::quickcheck;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::{insertion_sort, partition, quick_sort, quick_sort_recursive};

    const SORTS: [fn(&mut [i32]); 3] = [insertion_sort, quick_sort_recursive, quick_sort];

    fn is_sorted(values: &[i32]) -> bool {
        values.windows(2).all(|pair| pair[0] <= pair[1])
    }

    #[test]
    fn worked_example() {
        for sort in SORTS {
            let mut values = [5, -3, 0, 5, 2];
            sort(&mut values);
            assert_eq!(values, [-3, 0, 2, 5, 5]);
        }
    }

    #[test]
    fn empty_and_single_element() {
        for sort in SORTS {
            let mut empty: [i32; 0] = [];
            sort(&mut empty);

            let mut single = [7];
            sort(&mut single);
            assert_eq!(single, [7]);
        }
    }

    #[test]
    fn degenerate_pivot_input() {
        // Already sorted and reverse sorted input keeps the Lomuto pivot
        // in a corner on every partition.
        for sort in SORTS {
            let mut ascending: Vec<i32> = (0..200).collect();
            sort(&mut ascending);
            assert!(is_sorted(&ascending));

            let mut descending: Vec<i32> = (0..200).rev().collect();
            sort(&mut descending);
            assert!(is_sorted(&descending));

            let mut constant = vec![3; 200];
            sort(&mut constant);
            assert_eq!(constant, vec![3; 200]);
        }
    }

    #[test]
    fn partition_splits_around_pivot() {
        let mut values = [9, 1, 8, 2, 5];
        let pivot = partition(&mut values);
        assert_eq!(values[pivot], 5);
        assert!(values[..pivot].iter().all(|v| *v < 5));
        assert!(values[pivot + 1..].iter().all(|v| *v >= 5));
    }

    #[test]
    fn random_trials_agree_with_std() {
        let mut rng = SmallRng::seed_from_u64(0x5e75);
        for _ in 0..200 {
            let len = rng.random_range(0..100);
            let values: Vec<i32> = (0..len).map(|_| rng.random_range(-100..100)).collect();

            let mut expected = values.clone();
            expected.sort();

            for sort in SORTS {
                let mut sorted = values.clone();
                sort(&mut sorted);
                assert_eq!(sorted, expected);
            }
        }
    }

    #[quickcheck]
    fn check_insertion_sort_matches_std(mut values: Vec<i32>) -> bool {
        let mut expected = values.clone();
        expected.sort();
        insertion_sort(&mut values);
        values == expected
    }

    #[quickcheck]
    fn check_quick_sort_recursive_matches_std(mut values: Vec<i32>) -> bool {
        let mut expected = values.clone();
        expected.sort();
        quick_sort_recursive(&mut values);
        values == expected
    }

    #[quickcheck]
    fn check_quick_sort_matches_std(mut values: Vec<i32>) -> bool {
        let mut expected = values.clone();
        expected.sort();
        quick_sort(&mut values);
        values == expected
    }

    #[quickcheck]
    fn check_sorting_is_idempotent(mut values: Vec<i32>) -> bool {
        quick_sort(&mut values);
        let once = values.clone();
        quick_sort(&mut values);
        values == once
    }

    #[quickcheck]
    fn check_algorithms_agree(values: Vec<i32>) -> bool {
        let mut a = values.clone();
        let mut b = values.clone();
        let mut c = values;
        insertion_sort(&mut a);
        quick_sort_recursive(&mut b);
        quick_sort(&mut c);
        a == b && b == c
    }
}
