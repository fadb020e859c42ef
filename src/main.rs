use duelscope::gui::DuelscopeApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Duelscope"),
        ..Default::default()
    };

    eframe::run_native(
        "duelscope",
        native_options,
        Box::new(|cc| Ok(Box::new(DuelscopeApp::new(cc)))),
    )
}
