use eframe::egui;

use crate::app::PaintApp;

/// All modal-ish windows: text input, clear confirmation, error, about.
pub fn dialogs(app: &mut PaintApp, ctx: &egui::Context) {
    text_prompt(app, ctx);
    clear_confirm(app, ctx);
    error_dialog(app, ctx);
    about(app, ctx);
}

fn text_prompt(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(mut prompt) = app.text_prompt.take() else {
        return;
    };
    let mut confirmed = false;
    let mut cancelled = false;
    egui::Window::new("Enter text")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut prompt.input).hint_text("Text to place"),
            );
            response.request_focus();
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                confirmed = true;
            }
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    confirmed = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });
    if confirmed {
        app.stamp_text(prompt.anchor, prompt.input.trim());
    } else if !cancelled {
        app.text_prompt = Some(prompt);
    }
}

fn clear_confirm(app: &mut PaintApp, ctx: &egui::Context) {
    if !app.show_clear_confirm {
        return;
    }
    egui::Window::new("Clear canvas")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Discard the current drawing?");
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.clear_canvas();
                    app.show_clear_confirm = false;
                }
                if ui.button("Cancel").clicked() {
                    app.show_clear_confirm = false;
                }
            });
        });
}

fn error_dialog(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(message) = app.error_message.clone() else {
        return;
    };
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(message);
            if ui.button("OK").clicked() {
                app.error_message = None;
            }
        });
}

fn about(app: &mut PaintApp, ctx: &egui::Context) {
    if !app.show_about {
        return;
    }
    egui::Window::new("About Easel")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(format!("Easel {}", env!("CARGO_PKG_VERSION")));
            ui.label("A small raster paint program.");
            if ui.button("Close").clicked() {
                app.show_about = false;
            }
        });
}
