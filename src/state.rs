use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::config::DashboardConfig;
use crate::data::aggregate::{summarize, Summary};
use crate::data::filter::{filtered_indices, AccountTypeFilter, FilterSelection, StateFilter};
use crate::data::loader;
use crate::data::model::{AumRange, Dataset};
use crate::data::sort::{sort_indices, top_by_aum, SortColumn, SortOrder, TOP_N};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which rows the dashboard describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Rows passing the side-panel filters.
    #[default]
    Filtered,
    /// The largest advisors by raw AUM, filters ignored.
    TopByAum,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Path of the file currently shown (or last attempted).
    pub data_path: PathBuf,

    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Arc<Dataset>>,

    /// Side-panel filter selection.
    pub selection: FilterSelection,

    pub view_mode: ViewMode,

    /// Indices of records in the current view, in table order (cached).
    pub visible_indices: Vec<usize>,

    /// Metrics and chart input for `visible_indices` (cached).
    pub summary: Summary,

    /// Table ordering chosen by header clicks.
    pub sort: SortOrder,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            data_path: config.data_path.clone(),
            dataset: None,
            selection: FilterSelection::default(),
            view_mode: ViewMode::default(),
            visible_indices: Vec::new(),
            summary: Summary::default(),
            sort: SortOrder::default(),
            status_message: None,
        }
    }

    /// Load `path` through the process-wide cache. On failure the previous
    /// dataset (if any) stays on screen and the error goes to the status bar.
    pub fn load(&mut self, path: &Path) {
        self.data_path = path.to_path_buf();
        match loader::load_cached(path).context("loading advisor data") {
            Ok(dataset) => {
                let unchanged = self
                    .dataset
                    .as_ref()
                    .is_some_and(|current| Arc::ptr_eq(current, &dataset));
                if unchanged {
                    // Same cached table: keep the user's filters.
                    self.status_message = None;
                    self.refilter();
                } else {
                    self.set_dataset(dataset);
                }
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Re-request the current path. Served from the cache after the first
    /// successful load, so the current selection survives.
    pub fn reload(&mut self) {
        let path = self.data_path.clone();
        self.load(&path);
    }

    /// Ingest a newly loaded dataset and reset the filters to "everything".
    pub fn set_dataset(&mut self, dataset: Arc<Dataset>) {
        self.selection = FilterSelection::select_all(&dataset);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute `visible_indices` and `summary` after any change.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            self.visible_indices.clear();
            self.summary = Summary::default();
            return;
        };
        let mut indices = match self.view_mode {
            ViewMode::Filtered => filtered_indices(ds, &self.selection),
            ViewMode::TopByAum => top_by_aum(ds, TOP_N),
        };
        self.summary = summarize(ds, &indices);
        sort_indices(ds, &mut indices, self.sort);
        log::debug!("{} of {} records visible", indices.len(), ds.len());
        self.visible_indices = indices;
    }

    pub fn set_state_filter(&mut self, state: StateFilter) {
        self.selection.state = state;
        self.refilter();
    }

    pub fn set_account_type(&mut self, account_type: AccountTypeFilter) {
        self.selection.account_type = account_type;
        self.refilter();
    }

    /// Toggle a single AUM range in the multi-select.
    pub fn toggle_range(&mut self, range: AumRange) {
        if !self.selection.aum_ranges.remove(&range) {
            self.selection.aum_ranges.insert(range);
        }
        self.refilter();
    }

    /// Select every AUM range present in the dataset.
    pub fn select_all_ranges(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selection.aum_ranges = ds.aum_ranges.clone();
            self.refilter();
        }
    }

    /// Deselect all AUM ranges (the view becomes empty).
    pub fn select_no_ranges(&mut self) {
        self.selection.aum_ranges.clear();
        self.refilter();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.refilter();
    }

    /// Header click on the table.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        if let Some(ds) = &self.dataset {
            sort_indices(ds, &mut self.visible_indices, self.sort);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{record, AccountType};

    fn state_with(records: Vec<crate::data::model::RiaRecord>) -> AppState {
        let mut state = AppState::new(&DashboardConfig::default());
        state.set_dataset(Arc::new(Dataset::from_records(records)));
        state
    }

    fn sample() -> AppState {
        let mut a = record("NY", 50e6);
        a.individuals = Some(4);
        a.total_accounts = 4;
        let mut b = record("CA", 950e6);
        b.pensions = Some(2);
        b.total_accounts = 2;
        let c = record("NY", 250e6);
        state_with(vec![a, b, c])
    }

    #[test]
    fn test_initial_view_shows_everything() {
        let state = sample();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.summary.businesses, 3);
        assert_eq!(state.summary.total_accounts, 6);
        assert_eq!(state.selection.aum_ranges.len(), 3);
    }

    #[test]
    fn test_filters_update_view_and_summary() {
        let mut state = sample();
        state.set_state_filter(StateFilter::Only("NY".to_string()));
        assert_eq!(state.visible_indices, vec![0, 2]);

        state.set_account_type(AccountTypeFilter::Only(AccountType::Individuals));
        assert_eq!(state.visible_indices, vec![0]);
        assert_eq!(state.summary.account_mix.individuals, 4);

        state.set_state_filter(StateFilter::All);
        state.set_account_type(AccountTypeFilter::All);
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_range_toggles() {
        let mut state = sample();
        state.toggle_range(AumRange::Over800);
        assert_eq!(state.visible_indices, vec![0, 2]);
        state.toggle_range(AumRange::Over800);
        assert_eq!(state.visible_indices, vec![0, 1, 2]);

        state.select_no_ranges();
        assert!(state.visible_indices.is_empty());
        assert_eq!(state.summary.businesses, 0);
        assert!(!state.summary.account_mix.has_data());

        state.select_all_ranges();
        assert_eq!(state.visible_indices.len(), 3);
    }

    #[test]
    fn test_sort_applies_to_view_and_survives_refilter() {
        let mut state = sample();
        state.sort_by(SortColumn::Aum);
        state.sort_by(SortColumn::Aum);
        assert_eq!(state.visible_indices, vec![1, 2, 0]);

        state.set_state_filter(StateFilter::Only("NY".to_string()));
        assert_eq!(state.visible_indices, vec![2, 0]);
    }

    #[test]
    fn test_top_by_aum_ignores_filters() {
        let mut state = sample();
        state.select_no_ranges();
        state.set_view_mode(ViewMode::TopByAum);
        assert_eq!(state.visible_indices, vec![1, 2, 0]);
        assert_eq!(state.summary.businesses, 3);

        state.set_view_mode(ViewMode::Filtered);
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn test_reload_keeps_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reload.csv");
        std::fs::write(
            &path,
            "CRD,State,Total,Accts-Individuals\n1,NY,$5,3\n2,CA,\"$950,000,000\",\n",
        )
        .unwrap();

        let mut state = AppState::new(&DashboardConfig {
            data_path: path.clone(),
        });
        state.reload();
        assert_eq!(state.visible_indices, vec![0, 1]);

        state.set_state_filter(StateFilter::Only("NY".to_string()));
        state.set_account_type(AccountTypeFilter::Only(AccountType::Individuals));
        state.toggle_range(AumRange::Over800);
        let selection = state.selection.clone();

        state.reload();
        assert_eq!(state.selection, selection);
        assert_eq!(state.visible_indices, vec![0]);

        // A different file resets the filters.
        let other = dir.path().join("other.csv");
        std::fs::write(&other, "CRD,State,Total\n9,WA,$1\n").unwrap();
        state.load(&other);
        assert_eq!(state.selection.state, StateFilter::All);
        assert_eq!(state.visible_indices, vec![0]);
    }

    #[test]
    fn test_failed_load_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = sample();
        state.load(&dir.path().join("missing.csv"));
        assert!(state.dataset.is_some());
        let msg = state.status_message.unwrap();
        assert!(msg.starts_with("Error: loading advisor data"));
        assert!(msg.contains("not found"));
    }
}
