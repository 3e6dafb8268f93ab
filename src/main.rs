use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Easel"),
        ..Default::default()
    };

    eframe::run_native(
        "Easel",
        options,
        Box::new(|cc| Ok(Box::new(easel::PaintApp::new(cc)))),
    )
}
