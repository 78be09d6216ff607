use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;
use crate::record::Record;

/// Multiset of records: how often every distinct record occurs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    counts: HashMap<Record, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    pub record: Record,
    pub expected: usize,
    pub actual: usize,
}

impl Display for CountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "different counts {} and {} for {}", self.expected, self.actual, self.record)
    }
}

impl Signature {
    pub fn of(records: &[Record]) -> Signature {
        let mut counts = HashMap::new();
        for record in records {
            *counts.entry(*record).or_insert(0) += 1;
        }
        Signature { counts }
    }

    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Records whose multiplicity differs between `self` (expected) and `other`,
    /// ascending by record.
    pub fn diff(&self, other: &Signature) -> Vec<CountMismatch> {
        let mut mismatches: Vec<CountMismatch> = self
            .counts
            .keys()
            .chain(other.counts.keys().filter(|k| !self.counts.contains_key(*k)))
            .filter_map(|record| {
                let expected = self.counts.get(record).copied().unwrap_or(0);
                let actual = other.counts.get(record).copied().unwrap_or(0);
                (expected != actual).then_some(CountMismatch { record: *record, expected, actual })
            })
            .collect();
        mismatches.sort_by_key(|m| m.record);
        mismatches
    }
}

/// Indices `i` where `records[i] > records[i + 1]`, at most `limit` of them.
pub fn broken_order(records: &[Record], limit: usize) -> Vec<usize> {
    records
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] > pair[1])
        .map(|(i, _)| i)
        .take(limit)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    pub broken: Vec<usize>,
    pub mismatches: Vec<CountMismatch>,
}

impl Verdict {
    pub fn check(expected: &Signature, output: &[Record], limit: usize) -> Verdict {
        Verdict {
            broken: broken_order(output, limit),
            mismatches: expected.diff(&Signature::of(output)),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.broken.is_empty() && self.mismatches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::record::Category;
    use super::*;

    fn record(price: u32, capacity: u32, category: Category) -> Record {
        Record::new(price, capacity, category).unwrap()
    }

    #[test]
    fn test_broken_order() {
        let a = record(500, 4, Category::C0);
        let b = record(550, 4, Category::C0);
        assert!(broken_order(&[a, b, b], 4).is_empty());
        assert_eq!(broken_order(&[b, a, b, a, b, a], 4), vec![0, 2, 4]);
        assert_eq!(broken_order(&[b, a, b, a, b, a], 2), vec![0, 2]);
        assert!(broken_order(&[], 4).is_empty());
    }

    #[test]
    fn test_diff() {
        let a = record(500, 4, Category::C0);
        let b = record(550, 4, Category::C0);
        let c = record(600, 4, Category::C0);
        let expected = Signature::of(&[a, a, b]);
        assert!(expected.diff(&Signature::of(&[b, a, a])).is_empty());
        assert_eq!(expected.diff(&Signature::of(&[a, b, c])), vec![
            CountMismatch { record: a, expected: 2, actual: 1 },
            CountMismatch { record: c, expected: 0, actual: 1 },
        ]);
        assert_eq!(expected.len(), 3);
        assert_eq!(expected.distinct(), 2);
    }

    #[test]
    fn test_verdict() {
        let a = record(500, 4, Category::C0);
        let b = record(550, 4, Category::C0);
        let expected = Signature::of(&[b, a]);
        assert!(Verdict::check(&expected, &[a, b], 4).is_ok());
        let verdict = Verdict::check(&expected, &[b, a], 4);
        assert_eq!(verdict.broken, vec![0]);
        assert!(verdict.mismatches.is_empty());
        assert!(!Verdict::check(&expected, &[a, a], 4).is_ok());
    }
}
