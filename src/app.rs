use eframe::egui::{self, ScrollArea, Ui};

use crate::color::SliceColors;
use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{chart, metrics, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RiaDashboardApp {
    pub state: AppState,
    colors: SliceColors,
}

impl RiaDashboardApp {
    /// Create the app and load the configured data file.
    pub fn new(config: &DashboardConfig) -> Self {
        let mut state = AppState::new(config);
        state.reload();
        Self {
            state,
            colors: SliceColors::default(),
        }
    }
}

impl eframe::App for RiaDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, chart, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.heading("Open a file to view advisors  (File → Open…)");
                });
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.heading(egui::RichText::new("Sales Opportunities Dashboard").size(26.0));
                    ui.add_space(8.0);

                    metrics::key_metrics(ui, &self.state.summary);
                    ui.separator();

                    chart::account_pie(ui, &self.state.summary.account_mix, &self.colors);
                    ui.separator();

                    table::opportunities_table(ui, &mut self.state);
                    ui.add_space(8.0);

                    ui.label("Use the filters on the left to refine insights!");
                });
        });
    }
}
