use eframe::egui;

use crate::app::{PaintApp, PRESET_COLORS};

/// Right panel: preset swatches plus a free color picker.
pub fn color_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::right("color_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Colors");
            ui.separator();
            egui::Grid::new("preset_colors").num_columns(3).show(ui, |ui| {
                for (i, preset) in PRESET_COLORS.iter().enumerate() {
                    let size = egui::vec2(24.0, 24.0);
                    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
                    ui.painter().rect_filled(rect, 2.0, *preset);
                    if app.color == *preset {
                        ui.painter().rect_stroke(
                            rect,
                            2.0,
                            egui::Stroke::new(2.0, ui.visuals().strong_text_color()),
                        );
                    }
                    if response.clicked() {
                        app.color = *preset;
                    }
                    if i % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
            ui.separator();
            ui.label("Custom");
            ui.color_edit_button_srgba(&mut app.color);
        });
}
