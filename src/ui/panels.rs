use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::{state_choices, AccountTypeFilter};
use crate::data::sort::TOP_N;
use crate::state::{AppState, ViewMode};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => Arc::clone(ds),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };
    let states = state_choices(&dataset);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let filters_active = state.view_mode == ViewMode::Filtered;
            if !filters_active {
                ui.label(RichText::new(format!("Filters are ignored in the top {TOP_N} view.")).weak());
            }

            ui.add_enabled_ui(filters_active, |ui: &mut Ui| {
                // ---- State ----
                ui.strong("Select State");
                let current_state = state.selection.state.clone();
                egui::ComboBox::from_id_salt("state_filter")
                    .selected_text(current_state.to_string())
                    .show_ui(ui, |ui: &mut Ui| {
                        for choice in &states {
                            if ui
                                .selectable_label(current_state == *choice, choice.to_string())
                                .clicked()
                            {
                                state.set_state_filter(choice.clone());
                            }
                        }
                    });
                ui.add_space(6.0);

                // ---- Account type ----
                ui.strong("Select Account Type");
                let current_type = state.selection.account_type;
                egui::ComboBox::from_id_salt("account_type_filter")
                    .selected_text(current_type.to_string())
                    .show_ui(ui, |ui: &mut Ui| {
                        for choice in AccountTypeFilter::choices() {
                            if ui
                                .selectable_label(current_type == choice, choice.to_string())
                                .clicked()
                            {
                                state.set_account_type(choice);
                            }
                        }
                    });
                ui.separator();

                // ---- AUM ranges (multi-select) ----
                let n_selected = state.selection.aum_ranges.len();
                let n_total = dataset.aum_ranges.len();
                let header_text = format!("Select AUM Ranges  ({n_selected}/{n_total})");

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt("aum_ranges")
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all_ranges();
                            }
                            if ui.small_button("None").clicked() {
                                state.select_no_ranges();
                            }
                        });

                        for range in &dataset.aum_ranges {
                            let mut checked = state.selection.aum_ranges.contains(range);
                            if ui.checkbox(&mut checked, range.to_string()).changed() {
                                state.toggle_range(*range);
                            }
                        }
                    });
            });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} advisors loaded, {} visible",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        ui.separator();

        let top_mode = state.view_mode == ViewMode::TopByAum;
        if ui
            .selectable_label(top_mode, format!("Top {TOP_N} by AUM"))
            .clicked()
        {
            state.set_view_mode(if top_mode {
                ViewMode::Filtered
            } else {
                ViewMode::TopByAum
            });
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open advisor data")
        .add_filter("CSV", &["csv"])
        .add_filter("Text", &["txt"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Opening {}", path.display());
        state.load(&path);
    }
}
