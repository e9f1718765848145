//! Record grouping.
//!
//! Each record is appended to its category's group in input order. Repeated
//! labels are kept as separate bars.

use crate::domain::{Dataset, Record};

pub fn group_records<I>(records: I) -> Dataset
where
    I: IntoIterator<Item = Record>,
{
    let mut dataset = Dataset::new();
    for record in records {
        dataset
            .group_mut(record.category)
            .push(record.label, record.value);
    }
    dataset
}
