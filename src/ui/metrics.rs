use eframe::egui::{RichText, Ui};

use crate::data::aggregate::Summary;
use crate::format::{format_count, format_currency};

/// Three headline metrics side by side.
pub fn key_metrics(ui: &mut Ui, summary: &Summary) {
    ui.heading("Key Sales Insights");
    ui.columns(3, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Businesses", summary.businesses.to_string());
        metric(&mut cols[1], "Total Accounts", format_count(summary.total_accounts));
        metric(&mut cols[2], "Total AUM", format_currency(summary.total_aum));
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.label(RichText::new(label).weak());
    ui.label(RichText::new(value).size(28.0).strong());
}
