//! Render-ready bar chart descriptions.
//!
//! A `BarChart` is built once per non-empty category and shared by both
//! front-ends (ASCII printing and the TUI), so titles, bar order and tick
//! rotation are decided in one place.

use crate::domain::{Category, CategoryGroup, Dataset};

/// Charts with more labels than this get diagonal tick labels.
pub const ROTATE_LABELS_ABOVE: usize = 10;

/// Angle of x-axis tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickRotation {
    /// 0 degrees.
    Horizontal,
    /// 45 degrees.
    Diagonal,
}

impl TickRotation {
    pub fn for_label_count(count: usize) -> Self {
        if count > ROTATE_LABELS_ABOVE {
            TickRotation::Diagonal
        } else {
            TickRotation::Horizontal
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            TickRotation::Horizontal => 0,
            TickRotation::Diagonal => 45,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub category: Category,
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    pub rotation: TickRotation,
}

impl BarChart {
    /// `None` for an empty group: absent categories get no chart.
    pub fn from_group(group: &CategoryGroup) -> Option<Self> {
        if group.is_empty() {
            return None;
        }
        let labels: Vec<String> = group.labels().map(str::to_string).collect();
        let values: Vec<i64> = group.values().collect();
        Some(Self {
            category: group.category(),
            title: group.category().chart_title(),
            rotation: TickRotation::for_label_count(labels.len()),
            labels,
            values,
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value range covered by the bars, always including the zero baseline.
    pub fn value_bounds(&self) -> (i64, i64) {
        let min = self.values.iter().copied().min().unwrap_or(0).min(0);
        let max = self.values.iter().copied().max().unwrap_or(0).max(0);
        (min, max)
    }

    /// Longest label in characters.
    pub fn max_label_len(&self) -> usize {
        self.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0)
    }
}

/// One chart per non-empty category, in `Category::ALL` order.
pub fn build_charts(dataset: &Dataset) -> Vec<BarChart> {
    dataset.non_empty_groups().filter_map(BarChart::from_group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use crate::group::group_records;

    fn records(category: Category, n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record {
                category,
                label: format!("{i:02}"),
                value: i as i64,
            })
            .collect()
    }

    #[test]
    fn rotation_threshold() {
        assert_eq!(TickRotation::for_label_count(0), TickRotation::Horizontal);
        assert_eq!(TickRotation::for_label_count(10), TickRotation::Horizontal);
        assert_eq!(TickRotation::for_label_count(11), TickRotation::Diagonal);
        assert_eq!(TickRotation::Horizontal.degrees(), 0);
        assert_eq!(TickRotation::Diagonal.degrees(), 45);
    }

    #[test]
    fn one_chart_per_present_category() {
        let mut input = records(Category::Hour, 24);
        input.extend(records(Category::WeekDay, 7));
        let charts = build_charts(&group_records(input));

        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].category, Category::Hour);
        assert_eq!(charts[0].title, "Hour Distribution");
        assert_eq!(charts[0].len(), 24);
        assert_eq!(charts[0].rotation, TickRotation::Diagonal);

        assert_eq!(charts[1].title, "Week Day Distribution");
        assert_eq!(charts[1].len(), 7);
        assert_eq!(charts[1].rotation, TickRotation::Horizontal);
    }

    #[test]
    fn bars_keep_input_order() {
        let dataset = group_records(vec![
            Record {
                category: Category::Month,
                label: "Mar".to_string(),
                value: 9,
            },
            Record {
                category: Category::Month,
                label: "Jan".to_string(),
                value: 4,
            },
        ]);
        let charts = build_charts(&dataset);
        assert_eq!(charts[0].labels, vec!["Mar", "Jan"]);
        assert_eq!(charts[0].values, vec![9, 4]);
    }

    #[test]
    fn empty_dataset_has_no_charts() {
        assert!(build_charts(&Dataset::new()).is_empty());
    }

    #[test]
    fn value_bounds_include_zero() {
        let dataset = group_records(vec![
            Record {
                category: Category::Day,
                label: "01".to_string(),
                value: 5,
            },
            Record {
                category: Category::Day,
                label: "02".to_string(),
                value: 12,
            },
        ]);
        let chart = &build_charts(&dataset)[0];
        assert_eq!(chart.value_bounds(), (0, 12));
        assert_eq!(chart.max_label_len(), 2);
    }
}
