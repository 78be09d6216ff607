use crate::record::Domain;

pub const PRICE: Domain = Domain::new(500, 2000, 50);
pub const CAPACITY: Domain = Domain::new(4, 24, 4);
pub const CATEGORIES: usize = 6;

// one histogram slot per (price, capacity, category) combination
pub const KEY_SPACE: usize = PRICE.len() * CAPACITY.len() * CATEGORIES;

pub const RADIX_BITS: usize = 8;
pub const RADIX: usize = 1 << RADIX_BITS;

pub const DEFAULT_SEED: u64 = 12348;
pub const DEFAULT_SIZE: usize = 10_000;
pub const DEFAULT_HYBRID_THRESHOLDS: [usize; 3] = [10, 20, 40];
pub const MAX_REPORTED_BREAKS: usize = 4;

const fn is_aligned(domain: Domain) -> bool {
    domain.step > 0 && domain.min <= domain.max && (domain.max - domain.min) % domain.step == 0
}

const _: () = {
    assert!(RADIX_BITS > 0 && RADIX_BITS <= 16, "RADIX_BITS must be in 1..=16");
    assert!(is_aligned(PRICE), "PRICE domain is not step aligned");
    assert!(is_aligned(CAPACITY), "CAPACITY domain is not step aligned");
    assert!(KEY_SPACE == 31 * 6 * 6);
    // radix key of the largest record must fit into u32
    assert!((PRICE.max as u64) * 36 + (CAPACITY.max as u64) * 6 + (CATEGORIES as u64 - 1) <= u32::MAX as u64);
};
