use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::color::SliceColors;
use crate::data::aggregate::{AccountMix, PieSlice};
use crate::format::format_percent;

/// Arc resolution: points per full turn.
const ARC_STEPS: f64 = 180.0;
/// Radius of the percentage labels inside the wedges.
const LABEL_RADIUS: f64 = 0.6;

// ---------------------------------------------------------------------------
// Account-type pie (central panel)
// ---------------------------------------------------------------------------

/// Render the account-type distribution, or a notice when it is all zero.
pub fn account_pie(ui: &mut Ui, mix: &AccountMix, colors: &SliceColors) {
    ui.heading("Account Type Distribution");

    let slices = mix.slices();
    if slices.is_empty() {
        ui.label("No data available for the selected filters.");
        return;
    }

    Plot::new("account_pie")
        .legend(Legend::default())
        .height(300.0)
        .data_aspect(1.0)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.2)
        .include_y(1.2)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for slice in &slices {
                let color = colors.color_for(slice.account_type);
                let name = slice.account_type.column();

                // egui_plot fills polygons as convex shapes; wide wedges are
                // drawn in pieces under one legend name.
                for piece in wedge_pieces(slice) {
                    let polygon = Polygon::new(PlotPoints::from(piece))
                        .name(name)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE));
                    plot_ui.polygon(polygon);
                }

                let [x, y] = polar(LABEL_RADIUS, slice.mid_angle());
                plot_ui.text(Text::new(
                    PlotPoint::new(x, y),
                    RichText::new(format_percent(slice.fraction))
                        .color(Color32::WHITE)
                        .strong(),
                ));
            }
        });
}

fn polar(radius: f64, angle: f64) -> [f64; 2] {
    [radius * angle.cos(), radius * angle.sin()]
}

/// Outline of a unit-radius wedge, split into pieces no wider than a
/// quarter turn so each piece is convex.
fn wedge_pieces(slice: &PieSlice) -> Vec<Vec<[f64; 2]>> {
    let n_pieces = (slice.sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let piece_sweep = slice.sweep / n_pieces as f64;
    let steps = ((piece_sweep / TAU) * ARC_STEPS).ceil().max(1.0) as usize;

    (0..n_pieces)
        .map(|p| {
            let start = slice.start_angle + p as f64 * piece_sweep;
            let mut points = Vec::with_capacity(steps + 2);
            points.push([0.0, 0.0]);
            for s in 0..=steps {
                points.push(polar(1.0, start + piece_sweep * s as f64 / steps as f64));
            }
            points
        })
        .collect()
}
