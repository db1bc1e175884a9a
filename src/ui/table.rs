use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::RiaRecord;
use crate::data::sort::SortColumn;
use crate::format::{format_count, format_currency};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Opportunities table
// ---------------------------------------------------------------------------

/// Render the visible records; header clicks change the sort order.
pub fn opportunities_table(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Sales Opportunities");

    let Some(dataset) = state.dataset.clone() else {
        return;
    };
    let row_height = egui::TextStyle::Body.resolve(ui.style()).size + 6.0;
    let mut clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(60.0), SortColumn::ALL.len() - 1)
        .column(Column::remainder())
        .header(24.0, |mut header| {
            for column in SortColumn::ALL {
                header.col(|ui: &mut Ui| {
                    let marker = match state.sort.column {
                        Some(c) if c == column && state.sort.descending => " ⬇",
                        Some(c) if c == column => " ⬆",
                        _ => "",
                    };
                    let label = RichText::new(format!("{}{marker}", column.header())).strong();
                    if ui.button(label).clicked() {
                        clicked = Some(column);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(row_height, state.visible_indices.len(), |mut row| {
                let record = &dataset.records[state.visible_indices[row.index()]];
                for column in SortColumn::ALL {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell_text(record, column));
                    });
                }
            });
        });

    if let Some(column) = clicked {
        state.sort_by(column);
    }
}

/// Display text of one table cell.
fn cell_text(record: &RiaRecord, column: SortColumn) -> String {
    match column {
        SortColumn::Crd => record.crd.clone(),
        SortColumn::BusinessName => record.business_name.clone(),
        SortColumn::City => record.city.clone(),
        SortColumn::State => record.state.clone().unwrap_or_default(),
        SortColumn::Accounts => format_count(record.total_accounts),
        SortColumn::Aum => format_currency(record.total_aum),
        SortColumn::AumRange => record.aum_range.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;

    #[test]
    fn test_cells_use_display_formats() {
        let mut r = record("TX", 2_500_000.0);
        r.total_accounts = 12_345;
        r.business_name = "Lone Star RIA".to_string();
        assert_eq!(cell_text(&r, SortColumn::BusinessName), "Lone Star RIA");
        assert_eq!(cell_text(&r, SortColumn::Accounts), "12,345");
        assert_eq!(cell_text(&r, SortColumn::Aum), "$2.50MM");
        assert_eq!(cell_text(&r, SortColumn::AumRange), "$0MM - $100MM");
        assert_eq!(cell_text(&r, SortColumn::State), "TX");
    }

    #[test]
    fn test_missing_state_and_zero_aum() {
        let r = record("", 0.0);
        assert_eq!(cell_text(&r, SortColumn::State), "");
        assert_eq!(cell_text(&r, SortColumn::Aum), "N/A");
    }
}
