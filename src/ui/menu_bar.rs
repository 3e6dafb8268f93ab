use eframe::egui;

use crate::app::PaintApp;

/// File / Edit / Help menus across the top of the window.
pub fn menu_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New").clicked() {
                    app.show_clear_confirm = true;
                    ui.close_menu();
                }
                if ui.button("Open...").clicked() {
                    app.open_image();
                    ui.close_menu();
                }
                if ui.button("Save...").clicked() {
                    app.save_image();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(app.history.can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    app.undo();
                    ui.close_menu();
                }
                if ui
                    .add_enabled(app.history.can_redo(), egui::Button::new("Redo"))
                    .clicked()
                {
                    app.redo();
                    ui.close_menu();
                }
            });
            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.show_about = true;
                    ui.close_menu();
                }
            });
        });
    });
}
