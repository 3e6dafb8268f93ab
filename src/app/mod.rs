pub mod gesture;
pub mod painter;
pub mod tools;

pub use gesture::Gesture;
pub use painter::{PaintApp, BACKGROUND, PRESET_COLORS};
pub use tools::Tool;
