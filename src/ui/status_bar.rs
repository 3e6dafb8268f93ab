use eframe::egui;

use crate::app::PaintApp;

/// Bottom strip echoing the active tool and stroke width.
pub fn status_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Tool: {} | Stroke: {}",
                app.tool.label(),
                app.stroke_width
            ));
        });
    });
}
