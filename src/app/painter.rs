use eframe::egui;
use eframe::egui::{Color32, Pos2, Rect, TextureHandle, TextureOptions};

use crate::app::gesture::Gesture;
use crate::app::tools::Tool;
use crate::canvas::history::{History, MAX_UNDO};
use crate::canvas::stroke::StrokeBuilder;
use crate::canvas::surface::{oval_points, Surface};
use crate::canvas::text::TextStamper;
use crate::io;
use crate::ui;

/// Default surface size before the first layout pass adapts it to the panel.
const DEFAULT_CANVAS: (usize, usize) = (800, 600);

/// Canvas background; the eraser paints with this.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Swatches offered in the color panel next to the custom picker.
pub const PRESET_COLORS: [Color32; 9] = [
    Color32::BLACK,
    Color32::RED,
    Color32::GREEN,
    Color32::BLUE,
    Color32::YELLOW,
    Color32::from_rgb(0, 255, 255),
    Color32::from_rgb(255, 0, 255),
    Color32::from_rgb(255, 165, 0),
    Color32::GRAY,
];

/// State of the text tool's input dialog, anchored at the press position.
pub struct TextPrompt {
    pub anchor: Pos2,
    pub input: String,
}

/// Main application: owns the raster surface, its history, the active
/// drawing settings and all dialog state. Everything runs on the UI thread.
pub struct PaintApp {
    pub surface: Surface,
    pub history: History,

    pub tool: Tool,
    pub color: Color32,
    pub stroke_width: u32,

    pub gesture: Gesture,
    pub stroke: StrokeBuilder,
    pub stamper: TextStamper,

    pub text_prompt: Option<TextPrompt>,
    pub show_about: bool,
    pub show_clear_confirm: bool,
    pub error_message: Option<String>,

    texture: Option<TextureHandle>,
    surface_dirty: bool,
}

impl PaintApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let surface = Surface::new(DEFAULT_CANVAS.0, DEFAULT_CANVAS.1, BACKGROUND);
        let history = History::new(MAX_UNDO, surface.clone());
        Self {
            surface,
            history,
            tool: Tool::Pencil,
            color: Color32::BLACK,
            stroke_width: 3,
            gesture: Gesture::Idle,
            stroke: StrokeBuilder::new(),
            stamper: TextStamper::new(),
            text_prompt: None,
            show_about: false,
            show_clear_confirm: false,
            error_message: None,
            texture: None,
            surface_dirty: true,
        }
    }

    /// Color the current tool paints with; the eraser destructively paints
    /// the background color rather than erasing to transparency.
    pub fn paint_color(&self) -> Color32 {
        if self.tool == Tool::Eraser {
            BACKGROUND
        } else {
            self.color
        }
    }

    fn mark_dirty(&mut self) {
        self.surface_dirty = true;
    }

    /// Record the completed action in the history.
    fn commit(&mut self) {
        self.history.commit(self.surface.clone());
        self.mark_dirty();
    }

    pub fn undo(&mut self) {
        if self.history.undo(&mut self.surface) {
            self.mark_dirty();
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo(&mut self.surface) {
            self.mark_dirty();
        }
    }

    /// Switching tools mid-gesture abandons the gesture.
    pub fn select_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            self.gesture.cancel();
            self.stroke.clear();
            self.tool = tool;
        }
    }

    /// Clear to background and commit (invoked after user confirmation).
    pub fn clear_canvas(&mut self) {
        self.surface.clear();
        self.commit();
    }

    /// Open an image file and copy it onto the cleared canvas.
    pub fn open_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image files", &io::OPEN_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        match io::load_image(&path) {
            Ok(img) => {
                self.surface.place_image(&img);
                self.commit();
            }
            Err(err) => {
                log::warn!("open {} failed: {err}", path.display());
                self.error_message = Some(err.to_string());
            }
        }
    }

    /// Save the canvas; the format follows the chosen extension.
    pub fn save_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("drawing.png")
            .add_filter("PNG image", &["png"])
            .add_filter("JPEG image", &["jpg", "jpeg"])
            .add_filter("BMP image", &["bmp"])
            .save_file()
        else {
            return;
        };
        let format = io::SaveFormat::from_path(&path);
        if let Err(err) = io::save_surface(&self.surface, path, format) {
            log::warn!("save failed: {err}");
            self.error_message = Some(err.to_string());
        }
    }

    /// Confirmed text prompt: stamp the string at the press point with a
    /// font size derived from the stroke width.
    pub fn stamp_text(&mut self, anchor: Pos2, text: &str) {
        if text.is_empty() {
            return;
        }
        let size = (self.stroke_width * 5) as f32;
        if self.stamper.stamp(&mut self.surface, text, anchor, size, self.color) {
            self.commit();
        }
    }

    fn pointer_pressed(&mut self, pos: Pos2) {
        if !self.gesture.press(pos) {
            return;
        }
        match self.tool {
            Tool::Pencil | Tool::Eraser => self.stroke.begin(pos),
            Tool::Line | Tool::Rectangle | Tool::Oval => {}
            Tool::Text => {
                // The text tool acts on the press alone; no drag, no preview.
                self.gesture.cancel();
                self.text_prompt = Some(TextPrompt {
                    anchor: pos,
                    input: String::new(),
                });
            }
        }
    }

    fn pointer_dragged(&mut self, pos: Pos2) {
        if self.gesture.drag(pos).is_some() && self.tool.is_freehand() {
            self.stroke.add_point(pos);
        }
    }

    fn pointer_released(&mut self, pos: Pos2) {
        let Some((start, end)) = self.gesture.release(pos) else {
            return;
        };
        let width = self.stroke_width as f32;
        let color = self.paint_color();
        match self.tool {
            Tool::Pencil | Tool::Eraser => {
                self.stroke.finish(end);
                let points = self.stroke.flattened();
                self.surface.stroke_polyline(&points, width, color);
                self.stroke.clear();
                self.commit();
            }
            Tool::Line => {
                self.surface.stroke_segment(start, end, width, color);
                self.commit();
            }
            Tool::Rectangle => {
                self.surface.stroke_rect(start, end, width, color);
                self.commit();
            }
            Tool::Oval => {
                self.surface.stroke_oval(start, end, width, color);
                self.commit();
            }
            Tool::Text => {}
        }
    }

    /// Upload the surface to the GPU when it changed since the last frame.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        if !self.surface_dirty && self.texture.is_some() {
            return;
        }
        let img = self.surface.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(img, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("canvas", img, TextureOptions::NEAREST));
            }
        }
        self.surface_dirty = false;
    }

    /// Live preview of the in-progress gesture, drawn on the egui painter
    /// overlay without touching the committed surface.
    fn paint_preview(&self, painter: &egui::Painter, origin: Pos2) {
        let Some((start, current)) = self.gesture.span() else {
            return;
        };
        let to_screen = |p: Pos2| Pos2::new(p.x + origin.x, p.y + origin.y);
        let stroke = egui::Stroke::new(self.stroke_width as f32, self.paint_color());
        match self.tool {
            Tool::Pencil | Tool::Eraser => {
                let points: Vec<Pos2> = self.stroke.flattened().into_iter().map(to_screen).collect();
                match points.as_slice() {
                    [] => {}
                    [p] => {
                        painter.circle_filled(*p, stroke.width * 0.5, stroke.color);
                    }
                    _ => {
                        painter.add(egui::Shape::line(points, stroke));
                    }
                }
            }
            Tool::Line => {
                painter.line_segment([to_screen(start), to_screen(current)], stroke);
            }
            Tool::Rectangle => {
                let rect = Rect::from_two_pos(to_screen(start), to_screen(current));
                painter.rect_stroke(rect, 0.0, stroke);
            }
            Tool::Oval => {
                let rect = Rect::from_two_pos(to_screen(start), to_screen(current));
                let rx = rect.width() * 0.5;
                let ry = rect.height() * 0.5;
                let points = oval_points(rect.center(), rx, ry);
                painter.add(egui::Shape::closed_line(points, stroke));
            }
            Tool::Text => {}
        }
    }

    fn handle_pointer_events(&mut self, ctx: &egui::Context, response: &egui::Response, origin: Pos2) {
        // Dialogs are modal: the canvas ignores the pointer while one is up.
        if self.text_prompt.is_some()
            || self.show_about
            || self.show_clear_confirm
            || self.error_message.is_some()
        {
            return;
        }

        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let canvas_pos = Pos2::new(pos.x - origin.x, pos.y - origin.y);
                    if pressed {
                        let inside = canvas_pos.x >= 0.0
                            && canvas_pos.y >= 0.0
                            && canvas_pos.x < self.surface.width() as f32
                            && canvas_pos.y < self.surface.height() as f32;
                        if inside && response.hovered() {
                            self.pointer_pressed(canvas_pos);
                        }
                    } else {
                        self.pointer_released(canvas_pos);
                    }
                }
                egui::Event::PointerMoved(pos) => {
                    // Dragging may leave the panel; out-of-bounds pixels are
                    // clipped at raster time, so no clamping here.
                    self.pointer_dragged(Pos2::new(pos.x - origin.x, pos.y - origin.y));
                }
                _ => {}
            }
        }
    }
}

impl eframe::App for PaintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::Z)) {
            if ctx.input(|i| i.modifiers.shift) {
                self.redo();
            } else {
                self.undo();
            }
        }

        ui::menu_bar::menu_bar(self, ctx);
        ui::tool_panel::tool_panel(self, ctx);
        ui::color_panel::color_panel(self, ctx);
        ui::status_bar::status_bar(self, ctx);
        ui::dialogs::dialogs(self, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_at_least(ui.available_size(), egui::Sense::click_and_drag());

            // Track the panel size; skipped mid-gesture so an active drag
            // never sees its coordinate space change.
            if !self.gesture.is_active() {
                let want_w = rect.width().floor().max(1.0) as usize;
                let want_h = rect.height().floor().max(1.0) as usize;
                if (want_w, want_h) != (self.surface.width(), self.surface.height()) {
                    self.surface.resize(want_w, want_h);
                    self.mark_dirty();
                }
            }

            self.sync_texture(ctx);

            let origin = rect.min;
            if let Some(texture) = &self.texture {
                let size = egui::vec2(
                    self.surface.width() as f32,
                    self.surface.height() as f32,
                );
                ui.painter().image(
                    texture.id(),
                    Rect::from_min_size(origin, size),
                    Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                    Color32::WHITE,
                );
            }

            self.handle_pointer_events(ctx, &response, origin);
            self.paint_preview(ui.painter(), origin);

            if self.gesture.is_active() {
                ctx.request_repaint();
            }
        });
    }
}
