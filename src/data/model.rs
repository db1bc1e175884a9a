use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// AccountType – the three account categories an advisor may serve
// ---------------------------------------------------------------------------

/// Account categories tracked per advisor. Each maps to one source column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountType {
    Individuals,
    Corporations,
    Pensions,
}

impl AccountType {
    pub const ALL: [AccountType; 3] = [
        AccountType::Individuals,
        AccountType::Corporations,
        AccountType::Pensions,
    ];

    /// Name of the source column holding this account type's count.
    pub fn column(self) -> &'static str {
        match self {
            AccountType::Individuals => "Accts-Individuals",
            AccountType::Corporations => "Accts-Corps",
            AccountType::Pensions => "Accts-Pensions",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountType::Individuals => "Individuals",
            AccountType::Corporations => "Corporations",
            AccountType::Pensions => "Pensions",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// AumRange – fixed $100MM-wide AUM bands
// ---------------------------------------------------------------------------

const BAND_WIDTH: f64 = 100e6;

/// Categorical AUM band. Variant order is the display order of the bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AumRange {
    /// Upper edge of the band in millions: `Band(100)` is `$0MM - $100MM`.
    Band(u16),
    Over800,
    /// Only reachable for values that compare false against every edge (NaN).
    Unclassified,
}

impl fmt::Display for AumRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AumRange::Band(upper) => write!(f, "${}MM - ${}MM", upper - 100, upper),
            AumRange::Over800 => write!(f, ">$800MM"),
            AumRange::Unclassified => write!(f, "N/A"),
        }
    }
}

/// Bucket a total AUM into its band. Upper edges are inclusive, so exactly
/// $100,000,000 lands in `$0MM - $100MM`.
pub fn categorize(total: f64) -> AumRange {
    if total > 8.0 * BAND_WIDTH {
        return AumRange::Over800;
    }
    for i in 1..=8u16 {
        if total <= f64::from(i) * BAND_WIDTH {
            return AumRange::Band(i * 100);
        }
    }
    AumRange::Unclassified
}

// ---------------------------------------------------------------------------
// RiaRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single registered investment advisor after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RiaRecord {
    pub crd: String,
    pub business_name: String,
    pub city: String,
    /// `None` when the source cell is empty.
    pub state: Option<String>,
    /// Total AUM in dollars; always finite.
    pub total_aum: f64,
    pub total_accounts: i64,
    /// `None` means the advisor does not serve individuals at all.
    pub individuals: Option<i64>,
    pub corporations: Option<i64>,
    pub pensions: Option<i64>,
    pub aum_range: AumRange,
}

impl RiaRecord {
    /// Count for the given account type, `None` when the type is not served.
    pub fn accounts_of(&self, account_type: AccountType) -> Option<i64> {
        match account_type {
            AccountType::Individuals => self.individuals,
            AccountType::Corporations => self.corporations,
            AccountType::Pensions => self.pensions,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The normalized dataset with pre-computed choice lists. Never mutated after
/// load; filtering works on index views.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Vec<RiaRecord>,
    /// Sorted unique non-empty states.
    pub states: BTreeSet<String>,
    /// Sorted unique AUM ranges present in `records`.
    pub aum_ranges: BTreeSet<AumRange>,
}

impl Dataset {
    /// Build choice indices from the normalized records.
    pub fn from_records(records: Vec<RiaRecord>) -> Self {
        let states = records.iter().filter_map(|r| r.state.clone()).collect();
        let aum_ranges = records.iter().map(|r| r.aum_range).collect();
        Dataset {
            records,
            states,
            aum_ranges,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn record(state: &str, total_aum: f64) -> RiaRecord {
    RiaRecord {
        crd: String::new(),
        business_name: String::new(),
        city: String::new(),
        state: (!state.is_empty()).then(|| state.to_string()),
        total_aum,
        total_accounts: 0,
        individuals: None,
        corporations: None,
        pensions: None,
        aum_range: categorize(total_aum),
    }
}
