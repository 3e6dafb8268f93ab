use eframe::egui::Pos2;

/// Raw pointer positions accepted while a new point is at least this far
/// from the last one. Keeps slow drags from crowding the point list.
pub const MIN_DISTANCE: f32 = 2.0;

/// One command of a smoothed stroke path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Pos2),
    LineTo(Pos2),
    QuadTo { control: Pos2, end: Pos2 },
}

/// Collects the points of one freehand gesture and turns them into a smooth
/// path.
///
/// The smoothing walks the accepted points using each interior point as the
/// control point of a quadratic curve that ends at the midpoint of that
/// point and the next one. Successive midpoints line up tangentially, which
/// turns the raw polyline into a C1-continuous curve without any spline
/// fitting. The path always starts at the first raw point and ends at the
/// last one.
#[derive(Clone, Debug, Default)]
pub struct StrokeBuilder {
    points: Vec<Pos2>,
}

impl StrokeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh gesture at `pos`, discarding any previous points.
    pub fn begin(&mut self, pos: Pos2) {
        self.points.clear();
        self.points.push(pos);
    }

    /// Feed a new raw point. Returns `false` when the point is dropped for
    /// being within [`MIN_DISTANCE`] of the last accepted point.
    pub fn add_point(&mut self, pos: Pos2) -> bool {
        match self.points.last() {
            None => {
                self.points.push(pos);
                true
            }
            Some(last) => {
                if (pos - *last).length() < MIN_DISTANCE {
                    return false;
                }
                self.points.push(pos);
                true
            }
        }
    }

    /// Append the release position even when it is inside the distance
    /// threshold, so the committed stroke ends exactly under the pointer.
    pub fn finish(&mut self, pos: Pos2) {
        if self.points.last() != Some(&pos) {
            self.points.push(pos);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Build the smoothed path. Fewer than three points fall back to plain
    /// line segments.
    pub fn path(&self) -> Vec<PathSegment> {
        let pts = &self.points;
        let mut path = Vec::new();
        let Some(&first) = pts.first() else {
            return path;
        };
        path.push(PathSegment::MoveTo(first));

        if pts.len() < 3 {
            for &p in &pts[1..] {
                path.push(PathSegment::LineTo(p));
            }
            return path;
        }

        for i in 1..pts.len() - 1 {
            let control = pts[i];
            let next = pts[i + 1];
            let end = midpoint(control, next);
            path.push(PathSegment::QuadTo { control, end });
        }
        path.push(PathSegment::LineTo(pts[pts.len() - 1]));
        path
    }

    /// Flatten the smoothed path into a polyline for rasterization or for
    /// the live preview overlay.
    pub fn flattened(&self) -> Vec<Pos2> {
        flatten_path(&self.path())
    }
}

fn midpoint(a: Pos2, b: Pos2) -> Pos2 {
    Pos2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}

/// Evaluate a quadratic Bezier at parameter `t`.
fn quad_point(start: Pos2, control: Pos2, end: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    Pos2::new(
        u * u * start.x + 2.0 * u * t * control.x + t * t * end.x,
        u * u * start.y + 2.0 * u * t * control.y + t * t * end.y,
    )
}

/// Expand path segments into points. Curves are subdivided proportionally to
/// their chord length so long sweeps stay smooth and short ones stay cheap.
pub fn flatten_path(path: &[PathSegment]) -> Vec<Pos2> {
    let mut out: Vec<Pos2> = Vec::new();
    for segment in path {
        match *segment {
            PathSegment::MoveTo(p) => {
                out.clear();
                out.push(p);
            }
            PathSegment::LineTo(p) => out.push(p),
            PathSegment::QuadTo { control, end } => {
                let start = *out.last().unwrap_or(&control);
                let chord = (control - start).length() + (end - control).length();
                let steps = (chord / 2.0).ceil().clamp(2.0, 64.0) as usize;
                for i in 1..=steps {
                    out.push(quad_point(start, control, end, i as f32 / steps as f32));
                }
            }
        }
    }
    out
}
