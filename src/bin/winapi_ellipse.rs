/*
 * Native rendition of the dynamic-ellipse demo: one raw Win32 window with an
 * "App > Exit" menu and a GDI-painted red ellipse behind a centered
 * greeting. The message loop's WM_QUIT code becomes the process exit
 * status. Only meaningful on Windows; elsewhere it reports and fails.
 */
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init();
    run()
}

#[cfg(target_os = "windows")]
fn run() -> ExitCode {
    match dynamic_ellipse::win32::run() {
        Ok(code) => ExitCode::from(code.clamp(0, u8::MAX as i32) as u8),
        Err(e) => {
            log::error!("winapi_ellipse failed: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_os = "windows"))]
fn run() -> ExitCode {
    eprintln!("winapi_ellipse targets the Win32 API and only runs on Windows.");
    ExitCode::FAILURE
}
