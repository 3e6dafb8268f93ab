use eframe::egui::{Color32, ColorImage, Pos2};
use image::RgbaImage;

/// Owned mutable RGBA pixel buffer that backs the canvas.
///
/// All drawing mutates this buffer directly; rendering is a pure read of it.
/// Pixels are opaque `Color32` values, row-major.
#[derive(Clone)]
pub struct Surface {
    width: usize,
    height: usize,
    background: Color32,
    pixels: Vec<Color32>,
}

impl Surface {
    /// Allocate a surface filled with the background color.
    pub fn new(width: usize, height: usize, background: Color32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            background,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color32> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Write a single pixel; out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color32) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Blend `color` over the existing pixel with the given coverage in 0..1.
    /// Coverage 1 is an opaque overwrite; used by anti-aliased text stamping.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color32, coverage: f32) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        let cov = coverage.clamp(0.0, 1.0);
        if cov <= 0.0 {
            return;
        }
        if cov >= 1.0 {
            self.pixels[idx] = color;
            return;
        }
        let dst = self.pixels[idx];
        let mix = |s: u8, d: u8| -> u8 { (s as f32 * cov + d as f32 * (1.0 - cov)).round() as u8 };
        self.pixels[idx] = Color32::from_rgb(
            mix(color.r(), dst.r()),
            mix(color.g(), dst.g()),
            mix(color.b(), dst.b()),
        );
    }

    /// Fill the whole surface with one color.
    pub fn fill(&mut self, color: Color32) {
        self.pixels.fill(color);
    }

    /// Reset to the background color.
    pub fn clear(&mut self) {
        self.fill(self.background);
    }

    /// Stamp a filled disc with its center at `center`. A radius below half a
    /// pixel still covers the center pixel, so width-1 strokes stay visible.
    pub fn fill_disc(&mut self, center: Pos2, radius: f32, color: Color32) {
        let r = radius.max(0.5);
        let min_x = (center.x - r).floor() as i32;
        let max_x = (center.x + r).ceil() as i32;
        let min_y = (center.y - r).floor() as i32;
        let max_y = (center.y + r).ceil() as i32;
        let r2 = r * r;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw one thick segment by stamping discs along it; gives round caps
    /// and round joins for free, matching the stroke style of the app.
    pub fn stroke_segment(&mut self, a: Pos2, b: Pos2, width: f32, color: Color32) {
        let radius = (width * 0.5).max(0.5);
        let delta = b - a;
        let len = delta.length();
        if len <= f32::EPSILON {
            self.fill_disc(a, radius, color);
            return;
        }
        // Half-pixel spacing leaves no gaps at any angle for radius >= 0.5.
        let steps = (len / 0.5).ceil() as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.fill_disc(a + delta * t, radius, color);
        }
    }

    /// Stroke consecutive points as connected segments.
    pub fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        match points {
            [] => {}
            [p] => self.fill_disc(*p, (width * 0.5).max(0.5), color),
            _ => {
                for pair in points.windows(2) {
                    self.stroke_segment(pair[0], pair[1], width, color);
                }
            }
        }
    }

    /// Outline the axis-aligned rectangle spanned by two opposite corners.
    /// The drag direction does not matter: the box is normalized first.
    pub fn stroke_rect(&mut self, a: Pos2, b: Pos2, width: f32, color: Color32) {
        let (min, max) = corner_box(a, b);
        let corners = [
            min,
            Pos2::new(max.x, min.y),
            max,
            Pos2::new(min.x, max.y),
            min,
        ];
        self.stroke_polyline(&corners, width, color);
    }

    /// Outline the oval inscribed in the rectangle spanned by two corners.
    pub fn stroke_oval(&mut self, a: Pos2, b: Pos2, width: f32, color: Color32) {
        let (min, max) = corner_box(a, b);
        let center = Pos2::new((min.x + max.x) * 0.5, (min.y + max.y) * 0.5);
        let rx = (max.x - min.x) * 0.5;
        let ry = (max.y - min.y) * 0.5;
        let points = oval_points(center, rx, ry);
        self.stroke_polyline(&points, width, color);
    }

    /// Reallocate to a new size, copying the overlapping region and filling
    /// any newly uncovered area with the background color.
    pub fn resize(&mut self, width: usize, height: usize) {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return;
        }
        let mut pixels = vec![self.background; width * height];
        let copy_w = self.width.min(width);
        let copy_h = self.height.min(height);
        for y in 0..copy_h {
            let src = y * self.width;
            let dst = y * width;
            pixels[dst..dst + copy_w].copy_from_slice(&self.pixels[src..src + copy_w]);
        }
        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }

    /// Clear the surface and copy a decoded image onto its top-left corner.
    /// Pixels outside the surface are dropped; alpha is composited onto the
    /// background since the canvas itself is opaque.
    pub fn place_image(&mut self, img: &RgbaImage) {
        self.clear();
        let w = self.width.min(img.width() as usize);
        let h = self.height.min(img.height() as usize);
        for y in 0..h {
            for x in 0..w {
                let px = img.get_pixel(x as u32, y as u32).0;
                let cov = px[3] as f32 / 255.0;
                self.blend_pixel(
                    x as i32,
                    y as i32,
                    Color32::from_rgb(px[0], px[1], px[2]),
                    cov,
                );
            }
        }
    }

    /// Snapshot into an egui image for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage {
            size: [self.width, self.height],
            pixels: self.pixels.clone(),
        }
    }

    /// Convert to an `image` buffer for encoding to disk.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut bytes = Vec::with_capacity(self.width * self.height * 4);
        for px in &self.pixels {
            let [r, g, b, a] = px.to_srgba_unmultiplied();
            bytes.extend_from_slice(&[r, g, b, a]);
        }
        // The byte count always matches width * height * 4.
        RgbaImage::from_raw(self.width as u32, self.height as u32, bytes)
            .unwrap_or_else(|| RgbaImage::new(self.width as u32, self.height as u32))
    }
}

/// Normalize two drag corners into (min, max) so a drag in any diagonal
/// direction produces the same box.
pub fn corner_box(a: Pos2, b: Pos2) -> (Pos2, Pos2) {
    (
        Pos2::new(a.x.min(b.x), a.y.min(b.y)),
        Pos2::new(a.x.max(b.x), a.y.max(b.y)),
    )
}

/// Sample an ellipse outline as a closed polyline. The step count grows with
/// the radii so large ovals stay visually round.
pub fn oval_points(center: Pos2, rx: f32, ry: f32) -> Vec<Pos2> {
    let perimeter = std::f32::consts::PI * 2.0 * rx.max(ry).max(0.5);
    let steps = (perimeter.ceil() as usize).clamp(16, 512);
    (0..=steps)
        .map(|i| {
            let t = i as f32 / steps as f32 * std::f32::consts::TAU;
            Pos2::new(center.x + rx * t.cos(), center.y + ry * t.sin())
        })
        .collect()
}
