use std::collections::BTreeSet;
use std::fmt;

use super::model::{AccountType, AumRange, Dataset, RiaRecord};

// ---------------------------------------------------------------------------
// Filter selection: what the user picked in the side panel
// ---------------------------------------------------------------------------

/// Single-select state filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StateFilter {
    #[default]
    All,
    Only(String),
}

/// Single-select account-type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountTypeFilter {
    #[default]
    All,
    Only(AccountType),
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateFilter::All => write!(f, "All"),
            StateFilter::Only(state) => write!(f, "{state}"),
        }
    }
}

impl fmt::Display for AccountTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountTypeFilter::All => write!(f, "All"),
            AccountTypeFilter::Only(kind) => write!(f, "{kind}"),
        }
    }
}

impl AccountTypeFilter {
    /// Choices in side-panel order.
    pub fn choices() -> impl Iterator<Item = AccountTypeFilter> {
        std::iter::once(AccountTypeFilter::All)
            .chain(AccountType::ALL.into_iter().map(AccountTypeFilter::Only))
    }
}

/// State choices: `All` followed by the dataset's sorted states.
pub fn state_choices(dataset: &Dataset) -> Vec<StateFilter> {
    std::iter::once(StateFilter::All)
        .chain(dataset.states.iter().cloned().map(StateFilter::Only))
        .collect()
}

/// The complete filter selection. All three predicates are ANDed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub state: StateFilter,
    pub account_type: AccountTypeFilter,
    /// Selected AUM ranges. Empty means nothing passes.
    pub aum_ranges: BTreeSet<AumRange>,
}

impl FilterSelection {
    /// Initial selection: every state, every account type, every range
    /// present in the dataset.
    pub fn select_all(dataset: &Dataset) -> Self {
        FilterSelection {
            state: StateFilter::All,
            account_type: AccountTypeFilter::All,
            aum_ranges: dataset.aum_ranges.clone(),
        }
    }

    /// Whether a single record passes every predicate.
    pub fn matches(&self, record: &RiaRecord) -> bool {
        let state_ok = match &self.state {
            StateFilter::All => true,
            StateFilter::Only(wanted) => record.state.as_deref() == Some(wanted.as_str()),
        };
        let account_ok = match self.account_type {
            AccountTypeFilter::All => true,
            AccountTypeFilter::Only(kind) => record.accounts_of(kind).is_some(),
        };
        state_ok && account_ok && self.aum_ranges.contains(&record.aum_range)
    }
}

/// Return indices of records that pass the selection, in dataset order.
pub fn filtered_indices(dataset: &Dataset, selection: &FilterSelection) -> Vec<usize> {
    if selection.aum_ranges.is_empty() {
        // Nothing selected for the range list → hide everything
        return Vec::new();
    }
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| selection.matches(record))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    fn sample() -> Dataset {
        let mut a = record("NY", 50e6);
        a.individuals = Some(10);
        let mut b = record("NY", 150e6);
        b.corporations = Some(0);
        let mut c = record("CA", 900e6);
        c.individuals = Some(3);
        c.pensions = Some(1);
        let d = record("", 100e6);
        Dataset::from_records(vec![a, b, c, d])
    }

    #[test]
    fn test_choice_lists() {
        let ds = sample();
        let labels: Vec<String> = state_choices(&ds).iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["All", "CA", "NY"]);

        let kinds: Vec<String> = AccountTypeFilter::choices().map(|c| c.to_string()).collect();
        assert_eq!(kinds, vec!["All", "Individuals", "Corporations", "Pensions"]);
    }

    #[test]
    fn test_select_all_keeps_everything() {
        let ds = sample();
        let sel = FilterSelection::select_all(&ds);
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_state_filter() {
        let ds = sample();
        let mut sel = FilterSelection::select_all(&ds);
        sel.state = StateFilter::Only("NY".to_string());
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 1]);
    }

    #[test]
    fn test_account_type_is_presence_not_threshold() {
        let ds = sample();
        let mut sel = FilterSelection::select_all(&ds);
        sel.account_type = AccountTypeFilter::Only(AccountType::Corporations);
        // Record 1 serves zero corporate accounts but still serves the type.
        assert_eq!(filtered_indices(&ds, &sel), vec![1]);

        sel.account_type = AccountTypeFilter::Only(AccountType::Individuals);
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 2]);
    }

    #[test]
    fn test_empty_range_selection_yields_nothing() {
        let ds = sample();
        let mut sel = FilterSelection::select_all(&ds);
        sel.aum_ranges.clear();
        assert!(filtered_indices(&ds, &sel).is_empty());

        sel.state = StateFilter::Only("CA".to_string());
        sel.account_type = AccountTypeFilter::All;
        assert!(filtered_indices(&ds, &sel).is_empty());
    }

    #[test]
    fn test_range_filter_and_conjunction() {
        let ds = sample();
        let mut sel = FilterSelection::select_all(&ds);
        sel.aum_ranges = [AumRange::Band(100)].into_iter().collect();
        assert_eq!(filtered_indices(&ds, &sel), vec![0, 3]);

        sel.state = StateFilter::Only("NY".to_string());
        assert_eq!(filtered_indices(&ds, &sel), vec![0]);
    }

    #[test]
    fn test_filtered_view_is_subset_and_all_is_idempotent() {
        let ds = sample();
        let mut sel = FilterSelection::select_all(&ds);
        sel.aum_ranges = [AumRange::Band(100), AumRange::Over800].into_iter().collect();
        let once = filtered_indices(&ds, &sel);
        assert_eq!(once, vec![0, 2, 3]);
        assert!(once.windows(2).all(|w| w[0] < w[1]));
        assert!(once.iter().all(|&i| i < ds.len()));

        // Filtering the filtered view again keeps exactly the same records.
        let first: Vec<RiaRecord> = once.iter().map(|&i| ds.records[i].clone()).collect();
        let narrowed = Dataset::from_records(first.clone());
        let twice = filtered_indices(&narrowed, &sel);
        let second: Vec<RiaRecord> = twice.iter().map(|&i| narrowed.records[i].clone()).collect();
        assert_eq!(second, first);

        // "All" for state and account type is the same as checking ranges only.
        let ranges_only: Vec<usize> = ds
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| sel.aum_ranges.contains(&r.aum_range))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(once, ranges_only);
    }
}
