use clap::ValueEnum;
use log::{debug, warn};
use rand::Rng;
use rand_distr::{Distribution as _, Zipf};
use crate::config::{CAPACITY, KEY_SPACE, PRICE};
use crate::record::{Category, Domain, Record};

const ZIPF_EXPONENT: f64 = 1.1;

/// Shape of the generated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Distribution {
    /// every field drawn uniformly from its domain
    Uniform,
    Sorted,
    Reversed,
    /// sorted, then 5% random swaps
    AlmostSorted,
    /// key space ranks drawn from a Zipf distribution
    Zipf,
    /// one random record repeated
    Constant,
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, n: usize, distribution: Distribution) -> Vec<Record> {
    debug!("Generating {} records, distribution {:?}", n, distribution);
    match distribution {
        Distribution::Uniform => generate_uniform(rng, n),
        Distribution::Sorted => {
            let mut data = generate_uniform(rng, n);
            data.sort();
            data
        }
        Distribution::Reversed => {
            let mut data = generate_uniform(rng, n);
            data.sort_by(|a, b| b.cmp(a));
            data
        }
        Distribution::AlmostSorted => generate_almost_sorted(rng, n),
        Distribution::Zipf => generate_zipf(rng, n),
        Distribution::Constant => {
            let record = random_record(rng);
            vec![record; n]
        }
    }
}

fn random_from<R: Rng + ?Sized>(rng: &mut R, domain: Domain) -> u32 {
    domain.value_at(rng.gen_range(0..domain.len()))
}

fn random_record<R: Rng + ?Sized>(rng: &mut R) -> Record {
    let price = random_from(rng, PRICE);
    let capacity = random_from(rng, CAPACITY);
    let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
    Record::from_domain_values(price, capacity, category)
}

// uniform distribution
fn generate_uniform<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Record> {
    (0..n).map(|_| random_record(rng)).collect()
}

// 95% sorted
fn generate_almost_sorted<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Record> {
    let mut data = generate_uniform(rng, n);
    data.sort();
    if n == 0 {
        return data;
    }
    for _ in 0..(n / 20) {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        data.swap(i, j);
    }
    data
}

// zipf distribution over the key space, rank 1 is the smallest record
fn generate_zipf<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Record> {
    let zipf = match Zipf::new(KEY_SPACE as u64, ZIPF_EXPONENT) {
        Ok(zipf) => zipf,
        Err(err) => {
            warn!("Zipf distribution unavailable ({:?}), falling back to uniform", err);
            return generate_uniform(rng, n);
        }
    };
    (0..n)
        .filter_map(|_| Record::from_pack_index(zipf.sample(rng) as usize - 1))
        .collect()
}
