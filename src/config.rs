use std::path::PathBuf;

/// File read at startup when no path is given.
pub const DEFAULT_DATA_PATH: &str = "finalDataSet.csv";

/// Startup configuration. The data file path is the only setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl DashboardConfig {
    /// Build from process arguments (program name already skipped): a single
    /// positional path replaces the default.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        match args.into_iter().next() {
            Some(path) if !path.trim().is_empty() => Self {
                data_path: PathBuf::from(path),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let cfg = DashboardConfig::from_args(Vec::new());
        assert_eq!(cfg.data_path, PathBuf::from("finalDataSet.csv"));
    }

    #[test]
    fn test_positional_path_overrides() {
        let cfg = DashboardConfig::from_args(vec!["data/ria.csv".to_string()]);
        assert_eq!(cfg.data_path, PathBuf::from("data/ria.csv"));
    }

    #[test]
    fn test_blank_argument_is_ignored() {
        let cfg = DashboardConfig::from_args(vec!["  ".to_string()]);
        assert_eq!(cfg, DashboardConfig::default());
    }
}
