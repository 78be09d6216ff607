use std::fmt;
use crate::base_case::{bubble_sort, insertion_sort};
use crate::bucket::bucket_sort;
use crate::config::DEFAULT_HYBRID_THRESHOLDS;
use crate::pack::pack_sort;
use crate::quicksort::{hybrid_sort, quicksort};
use crate::radix::radix_sort_by_key;
use crate::record::Record;

/// Takes the records by value and hands them back sorted, whether the
/// algorithm worked in place or rebuilt the array.
pub type SortFn = fn(Vec<Record>) -> Vec<Record>;

#[derive(Clone, Copy)]
pub struct Algorithm {
    pub name: &'static str,
    pub sort: SortFn,
}

impl Algorithm {
    pub fn run(&self, records: Vec<Record>) -> Vec<Record> {
        (self.sort)(records)
    }
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm").field("name", &self.name).finish()
    }
}

/// Every benchmarked algorithm, in run order.
pub const REGISTRY: &[Algorithm] = &[
    Algorithm { name: "librarySort", sort: library },
    Algorithm { name: "bubbleSort", sort: bubble },
    Algorithm { name: "radixSort", sort: radix },
    Algorithm { name: "packSort", sort: pack },
    Algorithm { name: "bucketSort", sort: bucket },
    Algorithm { name: "quickSort", sort: quick },
    Algorithm { name: "insertionSort", sort: insertion },
    Algorithm { name: "hybridSort10", sort: hybrid::<{ DEFAULT_HYBRID_THRESHOLDS[0] }> },
    Algorithm { name: "hybridSort20", sort: hybrid::<{ DEFAULT_HYBRID_THRESHOLDS[1] }> },
    Algorithm { name: "hybridSort40", sort: hybrid::<{ DEFAULT_HYBRID_THRESHOLDS[2] }> },
];

pub fn lookup(name: &str) -> Option<&'static Algorithm> {
    REGISTRY.iter().find(|algorithm| algorithm.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|algorithm| algorithm.name)
}

/// The standard library's stable sort, as a baseline.
pub fn library_sort(arr: &mut [Record]) {
    arr.sort();
}

pub fn radix_sort(arr: &mut [Record]) {
    radix_sort_by_key(arr, Record::radix_key);
}

fn library(mut records: Vec<Record>) -> Vec<Record> {
    library_sort(&mut records);
    records
}

fn bubble(mut records: Vec<Record>) -> Vec<Record> {
    bubble_sort(&mut records);
    records
}

fn radix(mut records: Vec<Record>) -> Vec<Record> {
    radix_sort(&mut records);
    records
}

fn pack(mut records: Vec<Record>) -> Vec<Record> {
    pack_sort(&mut records);
    records
}

fn bucket(mut records: Vec<Record>) -> Vec<Record> {
    bucket_sort(&mut records);
    records
}

fn quick(mut records: Vec<Record>) -> Vec<Record> {
    quicksort(&mut records);
    records
}

fn insertion(mut records: Vec<Record>) -> Vec<Record> {
    insertion_sort(&mut records);
    records
}

fn hybrid<const THRESHOLD: usize>(mut records: Vec<Record>) -> Vec<Record> {
    hybrid_sort(&mut records, THRESHOLD);
    records
}
