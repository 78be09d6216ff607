use std::mem;
use crate::base_case::insertion_sort;

pub fn quicksort<T: Ord + Copy>(arr: &mut [T]) {
    // ranges of length <= 1 are left to the (no-op) base case
    quicksort_with_cutoff(arr, 1);
}

/// Quicksort that hands every range of at most `threshold` elements to
/// insertion sort. A `threshold` of 0 behaves like 1.
pub fn hybrid_sort<T: Ord + Copy>(arr: &mut [T], threshold: usize) {
    quicksort_with_cutoff(arr, threshold.max(1));
}

// Recurses only into the smaller side and loops on the larger one, so the
// stack never grows beyond log2(n) frames regardless of pivot quality.
fn quicksort_with_cutoff<T: Ord + Copy>(mut arr: &mut [T], cutoff: usize) {
    while arr.len() > cutoff {
        let pivot = partition(arr);
        let (left, right) = mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort_with_cutoff(left, cutoff);
            arr = right;
        } else {
            quicksort_with_cutoff(right, cutoff);
            arr = left;
        }
    }
    insertion_sort(arr);
}

/// Lomuto partition around the median of first, middle and last element.
/// Returns the final pivot position `p`: `arr[..p] <= arr[p] < arr[p + 1..]`.
/// `arr` must hold at least two elements.
fn partition<T: Ord + Copy>(arr: &mut [T]) -> usize {
    let hi = arr.len() - 1;
    let mid = hi / 2;
    if arr[mid] < arr[0] {
        arr.swap(mid, 0);
    }
    if arr[hi] < arr[0] {
        arr.swap(hi, 0);
    }
    if arr[hi] < arr[mid] {
        arr.swap(hi, mid);
    }
    arr.swap(mid, hi);

    let pivot = arr[hi];
    let mut store = 0;
    for j in 0..hi {
        if arr[j] <= pivot {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, hi);
    store
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use super::*;

    fn verify_sorted(arr: &[u64]) {
        for i in 1..arr.len() {
            assert!(arr[i - 1] <= arr[i], "Array not sorted! {} (i={}) > {} (i={})", arr[i - 1], i - 1, arr[i], i);
        }
    }

    #[test]
    fn test_partition() {
        let mut arr = [5, 1, 9, 3, 7, 3, 8];
        let p = partition(&mut arr);
        for i in 0..p {
            assert!(arr[i] <= arr[p]);
        }
        for i in p + 1..arr.len() {
            assert!(arr[i] > arr[p]);
        }
    }

    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(12345);
        for n in [0, 1, 2, 3, 10, 100, 1000] {
            let arr: Vec<u64> = (0..n).map(|_| rng.gen_range(0..50)).collect();
            let mut expected = arr.clone();
            expected.sort();

            let mut quick = arr.clone();
            quicksort(&mut quick);
            verify_sorted(&quick);
            assert_eq!(quick, expected);

            for threshold in [0, 1, 4, 16, 2000] {
                let mut hybrid = arr.clone();
                hybrid_sort(&mut hybrid, threshold);
                assert_eq!(hybrid, expected, "threshold {threshold}");
            }
        }
    }

    #[test]
    fn test_sorted_and_reversed_big() {
        let mut arr: Vec<u64> = (0..1_000_000).collect();
        quicksort(&mut arr);
        verify_sorted(&arr);

        let mut arr: Vec<u64> = (0..1_000_000).rev().collect();
        hybrid_sort(&mut arr, 16);
        verify_sorted(&arr);
    }

    #[test]
    fn test_all_equal() {
        let mut arr = vec![42u64; 5000];
        quicksort(&mut arr);
        assert!(arr.iter().all(|&x| x == 42));
        assert_eq!(arr.len(), 5000);
    }
}
