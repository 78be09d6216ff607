use std::time::{Duration, Instant};
use log::{debug, info, warn};
use crate::config::MAX_REPORTED_BREAKS;
use crate::record::Record;
use crate::sort::Algorithm;
use crate::verify::{Signature, Verdict};

#[derive(Debug, Clone)]
pub struct Outcome {
    pub name: &'static str,
    pub elapsed: Duration,
    pub verdict: Verdict,
}

/// Owns the reference dataset and its frozen multiset signature. Every run
/// sorts a fresh copy, so algorithms never see each other's output.
pub struct Harness {
    dataset: Vec<Record>,
    signature: Signature,
}

impl Harness {
    pub fn new(dataset: Vec<Record>) -> Harness {
        let signature = Signature::of(&dataset);
        debug!("Dataset: {} records, {} distinct", signature.len(), signature.distinct());
        Harness { dataset, signature }
    }

    pub fn dataset(&self) -> &[Record] {
        &self.dataset
    }

    pub fn run(&self, algorithm: &Algorithm) -> Outcome {
        let data = self.dataset.clone();

        let start = Instant::now();
        let sorted = algorithm.run(data);
        let elapsed = start.elapsed();

        let verdict = Verdict::check(&self.signature, &sorted, MAX_REPORTED_BREAKS);
        if sorted.len() != self.dataset.len() {
            warn!("{:>20} returned {} of {} records", algorithm.name, sorted.len(), self.dataset.len());
        }
        for i in &verdict.broken {
            warn!("{:>20} broken order [{}] > [{}]", algorithm.name, i, i + 1);
        }
        for mismatch in &verdict.mismatches {
            warn!("{:>20} {}", algorithm.name, mismatch);
        }
        info!("{}: {:?}", algorithm.name, elapsed);

        Outcome { name: algorithm.name, elapsed, verdict }
    }

    pub fn run_all<'a, I>(&self, algorithms: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = &'a Algorithm>,
    {
        algorithms.into_iter().map(|algorithm| self.run(algorithm)).collect()
    }
}
