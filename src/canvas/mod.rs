pub mod history;
pub mod stroke;
pub mod surface;
pub mod text;

pub use history::{History, MAX_UNDO};
pub use stroke::{PathSegment, StrokeBuilder, MIN_DISTANCE};
pub use surface::Surface;
pub use text::TextStamper;
