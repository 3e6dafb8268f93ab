use ab_glyph::{point, Font, FontArc, ScaleFont};
use eframe::egui::{Color32, Pos2};
use font_kit::family_name::FamilyName;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;

use crate::canvas::surface::Surface;

/// Rasterizes text into the surface using the system sans-serif font.
pub struct TextStamper {
    font: Option<FontArc>,
}

impl TextStamper {
    /// Load the default system font once at startup. The text tool becomes a
    /// no-op when no font can be found; everything else keeps working.
    pub fn new() -> Self {
        let font = load_system_sans();
        if font.is_none() {
            log::warn!("no system font found; the text tool will be disabled");
        }
        Self { font }
    }

    #[cfg(test)]
    pub fn disabled() -> Self {
        Self { font: None }
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Stamp a single line of text with its baseline starting at `origin`.
    /// Returns `true` when any pixels were written.
    pub fn stamp(
        &self,
        surface: &mut Surface,
        text: &str,
        origin: Pos2,
        size: f32,
        color: Color32,
    ) -> bool {
        let Some(font) = &self.font else {
            return false;
        };
        if text.is_empty() || size <= 0.0 {
            return false;
        }

        let scaled = font.as_scaled(size);
        let mut cursor_x = origin.x;
        let mut last_glyph = None;
        let mut drawn = false;

        for ch in text.chars() {
            let glyph_id = font.glyph_id(ch);
            if let Some(prev) = last_glyph {
                cursor_x += scaled.kern(prev, glyph_id);
            }
            let glyph = glyph_id.with_scale_and_position(size, point(cursor_x, origin.y));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let x = bounds.min.x as i32 + px as i32;
                    let y = bounds.min.y as i32 + py as i32;
                    surface.blend_pixel(x, y, color, coverage);
                });
                drawn = true;
            }
            cursor_x += scaled.h_advance(glyph_id);
            last_glyph = Some(glyph_id);
        }
        drawn
    }
}

impl Default for TextStamper {
    fn default() -> Self {
        Self::new()
    }
}

/// Ask font-kit for the best sans-serif match and hand its bytes to ab_glyph.
fn load_system_sans() -> Option<FontArc> {
    let handle = SystemSource::new()
        .select_best_match(&[FamilyName::SansSerif], &Properties::new())
        .ok()?;
    let font = handle.load().ok()?;
    let bytes: Vec<u8> = (*font.copy_font_data()?).clone();
    FontArc::try_from_vec(bytes).ok()
}
