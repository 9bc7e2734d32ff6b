/*
 * Native Win32 rendition of the demo, built directly on the windows crate:
 * window class registration, a WndProc that routes messages to per-message
 * handlers, a menu bar built from the shared menu records, and a GDI paint
 * routine. Compiled only on Windows.
 */
pub(crate) mod menu_bar;
pub(crate) mod painting;
pub(crate) mod window;

pub use window::{EXIT_ACCELERATOR, WINDOW_CONFIG, run};
