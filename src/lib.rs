pub mod sort;
pub mod base_case;
pub mod bucket;
pub mod config;
pub mod dataset;
pub mod harness;
pub mod pack;
pub mod quicksort;
pub mod radix;
pub mod record;
pub mod verify;

pub use base_case::{bubble_sort, insertion_sort};
pub use bucket::{bucket_pass, bucket_sort};
pub use config::*;
pub use dataset::{generate, Distribution};
pub use harness::{Harness, Outcome};
pub use pack::pack_sort;
pub use quicksort::{hybrid_sort, quicksort};
pub use radix::radix_sort_by_key;
pub use record::{Category, Domain, Record, RecordError};
pub use sort::{library_sort, lookup, names, radix_sort, Algorithm, SortFn, REGISTRY};
pub use verify::{broken_order, CountMismatch, Signature, Verdict};
