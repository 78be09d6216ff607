/// Stable, in place. Runs in close to linear time when `arr` is nearly sorted,
/// which is what the hybrid quicksort relies on for its small ranges.
pub fn insertion_sort<T: Ord + Copy>(arr: &mut [T]) {
    for j in 1..arr.len() {
        let key = arr[j];
        let mut i = j;
        // strict comparison keeps equal elements in their original order
        while i > 0 && arr[i - 1] > key {
            arr[i] = arr[i - 1];
            i -= 1;
        }
        arr[i] = key;
    }
}

/// Stable, in place. Stops after the first pass without a swap, so at most
/// `n - 1` passes are made.
pub fn bubble_sort<T: Ord>(arr: &mut [T]) {
    let mut end = arr.len();
    while end > 1 {
        let mut last_swap = 0;
        for i in 1..end {
            if arr[i - 1] > arr[i] {
                arr.swap(i - 1, i);
                last_swap = i;
            }
        }
        if last_swap == 0 {
            break;
        }
        // everything behind the last swap is already in place
        end = last_swap;
    }
}
