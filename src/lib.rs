/*
 * Shared core for the two "dynamic ellipse" demo programs. Each demo opens a
 * single window with an "App > Exit" menu and paints a red ellipse inscribed
 * in the client area behind a centered greeting that reports the area's
 * current size.
 *
 * The portable pieces (client-area geometry, greeting text, menu records,
 * error types) live here and are testable on every platform. The eframe
 * front end is portable as well; the raw Win32 front end is scoped to
 * Windows via conditional compilation so non-Windows builds still compile
 * and test everything else.
 */
pub mod client_area;
pub mod error;
pub mod menu;
pub mod toolkit;
pub mod types;
#[cfg(target_os = "windows")]
pub mod win32;

pub use client_area::{ClientRect, MENU_BAR_HEIGHT, client_area_rect, greeting_text};
pub use error::{PlatformError, Result as PlatformResult};
pub use menu::{MenuAction, MenuActionRegistry, MenuGroup, MenuItem, default_menu_bar};
pub use types::{AccelKey, Accelerator, WindowConfig};
