use crate::config::{CAPACITY, CATEGORIES, PRICE};
use crate::record::{Domain, Record};

const CATEGORY: Domain = Domain::new(0, CATEGORIES as u32 - 1, 1);

/// One stable bucket pass: writes `src` into `dst` grouped by `field`, groups in
/// ascending field order, input order kept inside every group.
///
/// # Panics
/// If the lengths differ or a field value lies outside `domain` or off its step.
pub fn bucket_pass<T, F>(src: &[T], dst: &mut [T], field: F, domain: Domain)
where
    T: Copy,
    F: Fn(&T) -> u32,
{
    assert_eq!(src.len(), dst.len(), "bucket pass needs equally sized buffers");

    let bucket_of = |element: &T| {
        let value = field(element);
        match domain.index_of(value) {
            Some(bucket) => bucket,
            None => panic!("Field value {} is outside of bucket domain {}", value, domain),
        }
    };

    let mut starts = vec![0usize; domain.len()];
    for element in src {
        starts[bucket_of(element)] += 1;
    }
    let mut sum = 0;
    for start in starts.iter_mut() {
        let count = *start;
        *start = sum;
        sum += count;
    }
    for element in src {
        let bucket = bucket_of(element);
        dst[starts[bucket]] = *element;
        starts[bucket] += 1;
    }
}

/// Three stable passes from the least significant field (category) to the most
/// significant one (price), alternating between `arr` and a scratch buffer.
pub fn bucket_sort(arr: &mut [Record]) {
    let mut scratch = arr.to_vec();
    bucket_pass(arr, &mut scratch, |r| r.category().index() as u32, CATEGORY);
    bucket_pass(&scratch, arr, Record::capacity, CAPACITY);
    bucket_pass(arr, &mut scratch, Record::price, PRICE);
    arr.copy_from_slice(&scratch);
}

#[cfg(test)]
mod tests {
    use crate::record::Category;
    use super::*;

    fn record(price: u32, capacity: u32, category: Category) -> Record {
        Record::new(price, capacity, category).unwrap()
    }

    #[test]
    fn test_single_pass_is_stable() {
        let src = [(8u32, 'a'), (4, 'b'), (8, 'c'), (12, 'd'), (4, 'e')];
        let mut dst = [(0u32, ' '); 5];
        bucket_pass(&src, &mut dst, |x| x.0, Domain::new(4, 12, 4));
        assert_eq!(dst, [(4, 'b'), (4, 'e'), (8, 'a'), (8, 'c'), (12, 'd')]);
    }

    #[test]
    fn test_category_survives_price_pass() {
        let mut arr = vec![
            record(700, 8, Category::C3),
            record(700, 8, Category::C1),
            record(500, 4, Category::C2),
            record(700, 8, Category::C0),
            record(700, 4, Category::C5),
        ];
        bucket_sort(&mut arr);
        assert_eq!(arr, vec![
            record(500, 4, Category::C2),
            record(700, 4, Category::C5),
            record(700, 8, Category::C0),
            record(700, 8, Category::C1),
            record(700, 8, Category::C3),
        ]);
    }

    #[test]
    fn test_full_domain_reversed() {
        let expected: Vec<Record> = Record::all().collect();
        let mut arr: Vec<Record> = expected.iter().rev().copied().collect();
        bucket_sort(&mut arr);
        assert_eq!(arr, expected);
    }

    #[test]
    #[should_panic(expected = "outside of bucket domain")]
    fn test_misaligned_value_panics() {
        let src = [4u32, 6];
        let mut dst = [0u32; 2];
        bucket_pass(&src, &mut dst, |x| *x, Domain::new(4, 12, 4));
    }

    #[test]
    #[should_panic(expected = "outside of bucket domain")]
    fn test_out_of_range_value_panics() {
        let src = [16u32];
        let mut dst = [0u32; 1];
        bucket_pass(&src, &mut dst, |x| *x, Domain::new(4, 12, 4));
    }
}
