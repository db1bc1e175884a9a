use std::cmp::Ordering;

use super::model::{Dataset, RiaRecord};

/// Number of rows shown by the top-by-AUM view.
pub const TOP_N: usize = 10;

/// Table columns the user can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Crd,
    BusinessName,
    City,
    State,
    Accounts,
    Aum,
    AumRange,
}

impl SortColumn {
    /// Table order of the columns.
    pub const ALL: [SortColumn; 7] = [
        SortColumn::Crd,
        SortColumn::BusinessName,
        SortColumn::City,
        SortColumn::State,
        SortColumn::Accounts,
        SortColumn::Aum,
        SortColumn::AumRange,
    ];

    pub fn header(self) -> &'static str {
        match self {
            SortColumn::Crd => "CRD",
            SortColumn::BusinessName => "RIA",
            SortColumn::City => "City",
            SortColumn::State => "State",
            SortColumn::Accounts => "Accounts",
            SortColumn::Aum => "AUM",
            SortColumn::AumRange => "AUM Range",
        }
    }

    fn compare(self, a: &RiaRecord, b: &RiaRecord) -> Ordering {
        match self {
            SortColumn::Crd => a.crd.cmp(&b.crd),
            SortColumn::BusinessName => a.business_name.cmp(&b.business_name),
            SortColumn::City => a.city.cmp(&b.city),
            SortColumn::State => a.state.cmp(&b.state),
            SortColumn::Accounts => a.total_accounts.cmp(&b.total_accounts),
            SortColumn::Aum => a.total_aum.total_cmp(&b.total_aum),
            SortColumn::AumRange => a.aum_range.cmp(&b.aum_range),
        }
    }
}

/// Current table ordering; `None` column keeps dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub column: Option<SortColumn>,
    pub descending: bool,
}

impl SortOrder {
    /// Header click: a new column sorts ascending, the same column flips.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.descending = !self.descending;
        } else {
            self.column = Some(column);
            self.descending = false;
        }
    }
}

/// Stable in-place sort of a view's indices.
pub fn sort_indices(dataset: &Dataset, indices: &mut [usize], order: SortOrder) {
    let Some(column) = order.column else {
        return;
    };
    indices.sort_by(|&a, &b| {
        let ord = column.compare(&dataset.records[a], &dataset.records[b]);
        if order.descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

/// Indices of the `n` records with the largest raw total AUM, ignoring any
/// filter. Ties keep dataset order.
pub fn top_by_aum(dataset: &Dataset, n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..dataset.len()).collect();
    sort_indices(
        dataset,
        &mut indices,
        SortOrder {
            column: Some(SortColumn::Aum),
            descending: true,
        },
    );
    indices.truncate(n);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn sample() -> Dataset {
        let mut rows = Vec::new();
        for (i, aum) in [5e6, 900e6, 5e6, 120e6].into_iter().enumerate() {
            let mut r = record("NY", aum);
            r.crd = format!("{}", 100 + i);
            r.total_accounts = 10 - i as i64;
            rows.push(r);
        }
        Dataset::from_records(rows)
    }

    #[test]
    fn test_toggle_flips_same_column() {
        let mut order = SortOrder::default();
        order.toggle(SortColumn::Aum);
        assert_eq!(order.column, Some(SortColumn::Aum));
        assert!(!order.descending);
        order.toggle(SortColumn::Aum);
        assert!(order.descending);
        order.toggle(SortColumn::City);
        assert_eq!(order.column, Some(SortColumn::City));
        assert!(!order.descending);
    }

    #[test]
    fn test_numeric_sort_is_stable() {
        let ds = sample();
        let mut idx = vec![0, 1, 2, 3];
        sort_indices(
            &ds,
            &mut idx,
            SortOrder {
                column: Some(SortColumn::Aum),
                descending: false,
            },
        );
        assert_eq!(idx, vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_sort_keeps_row_set() {
        let ds = sample();
        let mut idx = vec![3, 1];
        sort_indices(
            &ds,
            &mut idx,
            SortOrder {
                column: Some(SortColumn::Accounts),
                descending: true,
            },
        );
        assert_eq!(idx, vec![1, 3]);
    }

    #[test]
    fn test_unsorted_order_is_untouched() {
        let ds = sample();
        let mut idx = vec![2, 0, 3];
        sort_indices(&ds, &mut idx, SortOrder::default());
        assert_eq!(idx, vec![2, 0, 3]);
    }

    #[test]
    fn test_top_by_aum() {
        let ds = sample();
        assert_eq!(top_by_aum(&ds, 3), vec![1, 3, 0]);
        assert_eq!(top_by_aum(&ds, TOP_N).len(), 4);
    }
}
