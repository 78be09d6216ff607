use std::fmt;
use std::fmt::Display;
use thiserror::Error;
use crate::config::{CAPACITY, CATEGORIES, KEY_SPACE, PRICE};

/// Inclusive arithmetic progression `min, min + step, ..., max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Domain {
    pub const fn new(min: u32, max: u32, step: u32) -> Domain {
        Domain { min, max, step }
    }

    pub const fn len(&self) -> usize {
        ((self.max - self.min) / self.step) as usize + 1
    }

    /// Position of `value` in the progression, `None` if out of range or off-step.
    pub const fn index_of(&self, value: u32) -> Option<usize> {
        if value < self.min || value > self.max || (value - self.min) % self.step != 0 {
            return None;
        }
        Some(((value - self.min) / self.step) as usize)
    }

    pub const fn value_at(&self, index: usize) -> u32 {
        self.min + index as u32 * self.step
    }

    pub const fn contains(&self, value: u32) -> bool {
        self.index_of(value).is_some()
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len()).map(|i| self.value_at(i))
    }
}

impl Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..={} step {}]", self.min, self.max, self.step)
    }
}

/// Ordered by declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    C0,
    C1,
    C2,
    C3,
    C4,
    C5,
}

impl Category {
    pub const ALL: [Category; CATEGORIES] = [
        Category::C0,
        Category::C1,
        Category::C2,
        Category::C3,
        Category::C4,
        Category::C5,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("{field} = {value} is outside of {domain}")]
    OutOfDomain {
        field: &'static str,
        value: u32,
        domain: Domain,
    },
}

/// The benchmark element. Field order matters: the derived `Ord` compares
/// price, then capacity, then category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Record {
    price: u32,
    capacity: u32,
    category: Category,
}

impl Record {
    pub fn new(price: u32, capacity: u32, category: Category) -> Result<Record, RecordError> {
        if !PRICE.contains(price) {
            return Err(RecordError::OutOfDomain { field: "price", value: price, domain: PRICE });
        }
        if !CAPACITY.contains(capacity) {
            return Err(RecordError::OutOfDomain { field: "capacity", value: capacity, domain: CAPACITY });
        }
        Ok(Record { price, capacity, category })
    }

    // caller guarantees both values lie in their domains
    pub(crate) fn from_domain_values(price: u32, capacity: u32, category: Category) -> Record {
        debug_assert!(PRICE.contains(price) && CAPACITY.contains(capacity));
        Record { price, capacity, category }
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Order preserving integer key: `price * 36 + capacity * 6 + category`.
    pub fn radix_key(&self) -> u32 {
        self.price * RADIX_PRICE_WEIGHT + self.capacity * RADIX_CAPACITY_WEIGHT + self.category.index() as u32
    }

    /// Dense index into `0..KEY_SPACE`, ascending with the record order.
    pub fn pack_index(&self) -> usize {
        let price = (self.price - PRICE.min) / PRICE.step;
        let capacity = (self.capacity - CAPACITY.min) / CAPACITY.step;
        (price as usize * CAPACITY.len() + capacity as usize) * CATEGORIES + self.category.index()
    }

    pub fn from_pack_index(index: usize) -> Option<Record> {
        if index >= KEY_SPACE {
            return None;
        }
        let category = Category::from_index(index % CATEGORIES)?;
        let capacity = CAPACITY.value_at(index / CATEGORIES % CAPACITY.len());
        let price = PRICE.value_at(index / (CATEGORIES * CAPACITY.len()));
        Some(Record::from_domain_values(price, capacity, category))
    }

    /// Every representable record, ascending.
    pub fn all() -> impl Iterator<Item = Record> {
        (0..KEY_SPACE).filter_map(Record::from_pack_index)
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.price, self.capacity, self.category)
    }
}

const RADIX_CAPACITY_WEIGHT: u32 = CATEGORIES as u32;
const RADIX_PRICE_WEIGHT: u32 = (CATEGORIES * CAPACITY.len()) as u32;

// one step of a more significant field must outweigh the full span of the lesser ones
const _: () = {
    assert!(CAPACITY.step * RADIX_CAPACITY_WEIGHT > CATEGORIES as u32 - 1);
    assert!(
        PRICE.step * RADIX_PRICE_WEIGHT
            > (CAPACITY.max - CAPACITY.min) * RADIX_CAPACITY_WEIGHT + CATEGORIES as u32 - 1
    );
};
