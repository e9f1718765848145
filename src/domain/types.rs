//! Shared domain types.
//!
//! A `Dataset` always carries exactly one `CategoryGroup` per `Category`, in
//! `Category::ALL` order. Groups are only appended to by the grouper; outside
//! the crate a dataset is read-only.

use std::fmt;

/// A time-grouping dimension of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Day,
    Hour,
    Month,
    WeekDay,
}

impl Category {
    /// Display order of the generated charts.
    pub const ALL: [Category; 4] = [
        Category::Day,
        Category::Hour,
        Category::Month,
        Category::WeekDay,
    ];

    /// The literal category name used in the input file.
    pub fn name(self) -> &'static str {
        match self {
            Category::Day => "Day",
            Category::Hour => "Hour",
            Category::Month => "Month",
            Category::WeekDay => "Week Day",
        }
    }

    /// Match an input-file category name exactly (no case folding).
    pub fn from_name(name: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn index(self) -> usize {
        match self {
            Category::Day => 0,
            Category::Hour => 1,
            Category::Month => 2,
            Category::WeekDay => 3,
        }
    }

    pub fn chart_title(self) -> String {
        format!("{} Distribution", self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub category: Category,
    pub label: String,
    pub value: i64,
}

/// Bars of one category, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    category: Category,
    entries: Vec<(String, i64)>,
}

impl CategoryGroup {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            entries: Vec::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn entries(&self) -> &[(String, i64)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|&(_, value)| value)
    }

    pub(crate) fn push(&mut self, label: String, value: i64) {
        self.entries.push((label, value));
    }
}

/// All four category groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    groups: [CategoryGroup; 4],
}

impl Dataset {
    pub fn new() -> Self {
        Self {
            groups: Category::ALL.map(CategoryGroup::new),
        }
    }

    pub fn group(&self, category: Category) -> &CategoryGroup {
        &self.groups[category.index()]
    }

    /// Groups in `Category::ALL` order, including empty ones.
    pub fn groups(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter()
    }

    /// Groups that received at least one record.
    pub fn non_empty_groups(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.groups.iter().filter(|g| !g.is_empty())
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(CategoryGroup::len).sum()
    }

    pub(crate) fn group_mut(&mut self, category: Category) -> &mut CategoryGroup {
        &mut self.groups[category.index()]
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}
