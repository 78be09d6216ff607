use log::debug;
use crate::config::{RADIX, RADIX_BITS};

const DIGIT_MASK: u32 = (RADIX - 1) as u32;

/// LSD radix sort over `key(element)`, one stable counting pass per
/// `RADIX_BITS` wide digit of the largest key.
///
/// `key` must be order preserving: `a < b` implies `key(a) < key(b)` and
/// equal elements map to equal keys. Otherwise the result is ordered by key,
/// which is not necessarily the element order.
pub fn radix_sort_by_key<T, F>(arr: &mut [T], key: F)
where
    T: Copy,
    F: Fn(&T) -> u32,
{
    let max_key = match arr.iter().map(&key).max() {
        Some(max) => max,
        None => return,
    };
    let passes = digit_count(max_key);
    debug!("Radix sort: {} elements, max key {}, {} passes", arr.len(), max_key, passes);

    let mut scratch: Vec<T> = arr.to_vec();
    let mut in_scratch = false;
    for pass in 0..passes {
        let shift = pass * RADIX_BITS;
        if in_scratch {
            counting_pass(&scratch, arr, &key, shift);
        } else {
            counting_pass(arr, &mut scratch, &key, shift);
        }
        in_scratch = !in_scratch;
    }
    if in_scratch {
        arr.copy_from_slice(&scratch);
    }
}

/// Number of digits needed to represent `key`, 0 for a key of 0.
fn digit_count(key: u32) -> usize {
    let bits = (u32::BITS - key.leading_zeros()) as usize;
    bits.div_ceil(RADIX_BITS)
}

// stable scatter of src into dst by the digit at `shift`
fn counting_pass<T, F>(src: &[T], dst: &mut [T], key: &F, shift: usize)
where
    T: Copy,
    F: Fn(&T) -> u32,
{
    debug_assert_eq!(src.len(), dst.len());
    let digit = |element: &T| ((key(element) >> shift) & DIGIT_MASK) as usize;

    let mut offsets = [0usize; RADIX];
    for element in src {
        offsets[digit(element)] += 1;
    }
    let mut sum = 0;
    for offset in offsets.iter_mut() {
        let count = *offset;
        *offset = sum;
        sum += count;
    }
    for element in src {
        let d = digit(element);
        dst[offsets[d]] = *element;
        offsets[d] += 1;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 0);
        assert_eq!(digit_count(1), 1);
        assert_eq!(digit_count(255), 1);
        assert_eq!(digit_count(256), 2);
        assert_eq!(digit_count(u32::MAX), 4);
    }

    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(12345);
        let mut arr: Vec<u32> = (0..10_000).map(|_| rng.gen_range(0..u32::MAX)).collect();
        arr.push(0);
        arr.push(u32::MAX);
        let mut expected = arr.clone();
        expected.sort();
        radix_sort_by_key(&mut arr, |x| *x);
        assert_eq!(arr, expected);
    }

    #[test]
    fn test_fewer_elements_than_radix() {
        let mut arr = [300u32, 7, 0, 65_536, 7];
        radix_sort_by_key(&mut arr, |x| *x);
        assert_eq!(arr, [0, 7, 7, 300, 65_536]);
    }

    #[test]
    fn test_all_zero_keys() {
        let mut arr = [(0u32, 'a'), (0, 'b'), (0, 'c')];
        radix_sort_by_key(&mut arr, |x| x.0);
        assert_eq!(arr, [(0, 'a'), (0, 'b'), (0, 'c')]);
    }

    #[test]
    fn test_stable() {
        // keys differ only in the second digit, ties must keep input order
        let mut arr = [(512u32, 0), (256, 1), (512, 2), (256, 3), (1, 4)];
        radix_sort_by_key(&mut arr, |x| x.0);
        assert_eq!(arr, [(1, 4), (256, 1), (256, 3), (512, 0), (512, 2)]);
    }
}
