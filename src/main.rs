// Ramadan Studio
// Main entry point

use ramadan_studio::ui::StudioApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Ramadan Studio");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Ramadan Studio")
            .with_inner_size([520.0, 780.0])
            .with_min_inner_size([440.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Ramadan Studio",
        options,
        Box::new(|cc| Ok(Box::new(StudioApp::new(cc)))),
    )
}
