use eframe::egui;

use crate::app::{PaintApp, Tool};

/// Left panel: tool buttons, stroke width slider and the clear action.
pub fn tool_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tool_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();
            for tool in Tool::ALL {
                if ui
                    .selectable_label(app.tool == tool, tool.label())
                    .clicked()
                {
                    app.select_tool(tool);
                }
            }
            ui.separator();
            ui.label("Stroke width");
            ui.add(egui::Slider::new(&mut app.stroke_width, 1..=20));
            ui.separator();
            if ui.button("Clear All").clicked() {
                app.show_clear_confirm = true;
            }
        });
}
