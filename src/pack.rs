use log::debug;
use crate::config::KEY_SPACE;
use crate::record::Record;

/// Counting sort over the whole (price, capacity, category) key space.
///
/// Counts every record under its `pack_index`, then rebuilds `arr` by
/// decoding each non-empty slot back into a record. Records sharing a slot are
/// field-equal, so the rebuilt array is indistinguishable from a sorted
/// permutation of the input.
pub fn pack_sort(arr: &mut [Record]) {
    let mut counts = vec![0usize; KEY_SPACE];
    for record in arr.iter() {
        counts[record.pack_index()] += 1;
    }
    debug!("Pack sort: {} of {} key slots used", counts.iter().filter(|&&c| c > 0).count(), KEY_SPACE);

    let mut write = 0;
    // Record::all() decodes the slots in index order
    for (record, &count) in Record::all().zip(counts.iter()) {
        if count == 0 {
            continue;
        }
        arr[write..write + count].fill(record);
        write += count;
    }
    debug_assert_eq!(write, arr.len());
}
