use std::f64::consts::{FRAC_PI_2, TAU};

use super::model::{AccountType, Dataset};

// ---------------------------------------------------------------------------
// Summary metrics over a filtered view
// ---------------------------------------------------------------------------

/// Headline numbers for the currently visible records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub businesses: usize,
    pub total_accounts: i64,
    pub total_aum: f64,
    pub account_mix: AccountMix,
}

/// Summed account counts per account type. Absent counts contribute 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccountMix {
    pub individuals: i64,
    pub corporations: i64,
    pub pensions: i64,
}

/// One wedge of the account-type pie. Angles are in radians, measured
/// counter-clockwise from the positive x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub account_type: AccountType,
    pub fraction: f64,
    pub start_angle: f64,
    pub sweep: f64,
}

impl PieSlice {
    /// Angle through the middle of the wedge, used to place its label.
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep / 2.0
    }
}

impl AccountMix {
    pub fn get(&self, account_type: AccountType) -> i64 {
        match account_type {
            AccountType::Individuals => self.individuals,
            AccountType::Corporations => self.corporations,
            AccountType::Pensions => self.pensions,
        }
    }

    /// Saturates at `i64::MAX` instead of wrapping.
    pub fn total(&self) -> i64 {
        self.individuals
            .saturating_add(self.corporations)
            .saturating_add(self.pensions)
    }

    /// Whether the chart has anything to show.
    pub fn has_data(&self) -> bool {
        self.total() > 0
    }

    /// Pie wedges starting at 12 o'clock and running counter-clockwise.
    /// Zero-valued types get no wedge. Empty when [`has_data`](Self::has_data)
    /// is false.
    pub fn slices(&self) -> Vec<PieSlice> {
        if !self.has_data() {
            return Vec::new();
        }
        let total = self.total() as f64;
        let mut angle = FRAC_PI_2;
        let mut slices = Vec::with_capacity(AccountType::ALL.len());
        for kind in AccountType::ALL {
            let value = self.get(kind);
            if value <= 0 {
                continue;
            }
            let fraction = value as f64 / total;
            let sweep = fraction * TAU;
            slices.push(PieSlice {
                account_type: kind,
                fraction,
                start_angle: angle,
                sweep,
            });
            angle += sweep;
        }
        slices
    }
}

/// Aggregate the records at `indices`. Integer sums saturate.
pub fn summarize(dataset: &Dataset, indices: &[usize]) -> Summary {
    let mut summary = Summary::default();
    for record in indices.iter().filter_map(|&i| dataset.records.get(i)) {
        summary.businesses += 1;
        summary.total_accounts = summary.total_accounts.saturating_add(record.total_accounts);
        summary.total_aum += record.total_aum;

        let mix = &mut summary.account_mix;
        mix.individuals = mix.individuals.saturating_add(record.individuals.unwrap_or(0));
        mix.corporations = mix.corporations.saturating_add(record.corporations.unwrap_or(0));
        mix.pensions = mix.pensions.saturating_add(record.pensions.unwrap_or(0));
    }
    log::debug!(
        "Summarized {} businesses, {} accounts, AUM {}",
        summary.businesses,
        summary.total_accounts,
        summary.total_aum
    );
    summary
}
