/*
 * Toolkit rendition of the dynamic-ellipse demo: one eframe/egui window with
 * an "App > Exit" menu and a red ellipse behind a centered greeting. The
 * event loop's result becomes the process exit status.
 */
fn main() -> eframe::Result {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init();
    dynamic_ellipse::toolkit::run()
}
