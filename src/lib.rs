pub mod app;
pub mod canvas;
pub mod io;
pub mod ui;

pub use app::PaintApp;
