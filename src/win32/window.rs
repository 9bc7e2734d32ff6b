/*
 * Win32 window plumbing: class registration, window creation, the message
 * loop, and the window procedure. The WndProc is a router that dispatches
 * each message id to a dedicated handler; per-window state travels through
 * `lpCreateParams` into GWLP_USERDATA and is freed on WM_NCDESTROY.
 */
use crate::client_area::{INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH};
use crate::error::{PlatformError, Result as PlatformResult};
use crate::menu::{MenuAction, MenuActionRegistry, default_menu_bar};
use crate::types::{Accelerator, WindowConfig};
use crate::win32::{menu_bar, painting};

use std::ffi::c_void;

use windows::{
    Win32::{
        Foundation::{GetLastError, HINSTANCE, HWND, LPARAM, LRESULT, WPARAM},
        Graphics::Gdi::{
            BeginPaint, COLOR_WINDOW, EndPaint, HBRUSH, InvalidateRect, PAINTSTRUCT, UpdateWindow,
        },
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CREATESTRUCTW, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, CreateWindowExW, DefWindowProcW,
            DestroyWindow, DispatchMessageW, GWLP_USERDATA, GetClassInfoExW, GetMessageW,
            GetSystemMetrics, GetWindowLongPtrW, IDC_ARROW, IDI_APPLICATION, LoadCursorW,
            LoadIconW, MSG, PostMessageW, PostQuitMessage, RegisterClassExW, SIZE_RESTORED,
            SM_CXSCREEN, SM_CYSCREEN, SW_SHOW, SetWindowLongPtrW, ShowWindow, TranslateMessage,
            WINDOW_EX_STYLE, WM_CLOSE, WM_COMMAND, WM_DESTROY, WM_NCCREATE,
            WM_NCDESTROY, WM_PAINT, WM_SIZE, WNDCLASSEXW, WS_CLIPCHILDREN, WS_OVERLAPPEDWINDOW,
        },
    },
    core::{HSTRING, PCWSTR},
};

pub const WINDOW_CONFIG: WindowConfig = WindowConfig {
    title: "Windows API dynamic ellipse",
    width: INITIAL_WINDOW_WIDTH,
    height: INITIAL_WINDOW_HEIGHT,
};

/// The native variant leaves Exit on the system-provided Alt+F4 close; the
/// menu label advertises it from this same record.
pub const EXIT_ACCELERATOR: Accelerator = Accelerator::alt_function(4);

const WINDOW_CLASS_NAME: &str = "DynamicEllipse_WindowClass";

/// Per-window native state, owned by the window through GWLP_USERDATA.
struct WindowState {
    menu_actions: MenuActionRegistry,
}

/*
 * Builds the one window with its menu bar, shows it, and blocks in the
 * message loop. Returns the loop's exit code (the WM_QUIT wParam) so the
 * caller can surface it as the process exit status.
 */
pub fn run() -> PlatformResult<i32> {
    let h_instance: HINSTANCE = unsafe {
        GetModuleHandleW(None)
            .map_err(|e| {
                PlatformError::InitializationFailed(format!("GetModuleHandleW failed: {e:?}"))
            })?
            .into()
    };

    register_window_class(h_instance)?;

    let mut state = Box::new(WindowState {
        menu_actions: MenuActionRegistry::new(),
    });
    let menu = menu_bar::build_menu_bar(
        &default_menu_bar(EXIT_ACCELERATOR),
        &mut state.menu_actions,
    )?;

    let hwnd = create_native_window(h_instance, state)?;
    menu_bar::attach_menu_bar(hwnd, menu)?;

    unsafe {
        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = UpdateWindow(hwnd);
    }
    log::debug!("Win32: window shown, entering message loop.");

    run_message_loop()
}

fn run_message_loop() -> PlatformResult<i32> {
    let mut msg = MSG::default();
    loop {
        let result = unsafe { GetMessageW(&mut msg, None, 0, 0) };
        match result.0 {
            -1 => {
                let error = unsafe { GetLastError() };
                log::error!("Win32: GetMessageW failed: {error:?}");
                return Err(PlatformError::OperationFailed(format!(
                    "GetMessageW failed: {error:?}"
                )));
            }
            0 => break,
            _ => unsafe {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            },
        }
    }
    Ok(msg.wParam.0 as i32)
}

/*
 * Registers the window class if not already registered. Idempotent so a
 * hypothetical second call is harmless.
 */
fn register_window_class(h_instance: HINSTANCE) -> PlatformResult<()> {
    let class_name_hstring = HSTRING::from(WINDOW_CLASS_NAME);
    let class_name_pcwstr = PCWSTR(class_name_hstring.as_ptr());

    unsafe {
        let mut wc_test = WNDCLASSEXW::default();
        if GetClassInfoExW(Some(h_instance), class_name_pcwstr, &mut wc_test).is_ok() {
            log::debug!("Win32: window class '{WINDOW_CLASS_NAME}' already registered.");
            return Ok(());
        }

        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wnd_proc_router),
            cbClsExtra: 0,
            cbWndExtra: 0,
            hInstance: h_instance,
            hIcon: LoadIconW(None, IDI_APPLICATION).map_err(|e| {
                PlatformError::InitializationFailed(format!("LoadIconW failed: {e:?}"))
            })?,
            hCursor: LoadCursorW(None, IDC_ARROW).map_err(|e| {
                PlatformError::InitializationFailed(format!("LoadCursorW failed: {e:?}"))
            })?,
            hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as *mut c_void),
            lpszMenuName: PCWSTR::null(),
            lpszClassName: class_name_pcwstr,
            hIconSm: LoadIconW(None, IDI_APPLICATION).map_err(|e| {
                PlatformError::InitializationFailed(format!("LoadIconW failed: {e:?}"))
            })?,
        };

        if RegisterClassExW(&wc) == 0 {
            let error = GetLastError();
            log::error!("Win32: RegisterClassExW failed: {error:?}");
            return Err(PlatformError::InitializationFailed(format!(
                "RegisterClassExW failed: {error:?}"
            )));
        }
    }
    Ok(())
}

/*
 * Creates the top-level window, centered on the primary monitor the way the
 * dialog-style original presented itself. Ownership of `state` transfers to
 * the window via `lpCreateParams`; `wnd_proc_router` reclaims it on
 * WM_NCDESTROY.
 */
fn create_native_window(
    h_instance: HINSTANCE,
    state: Box<WindowState>,
) -> PlatformResult<HWND> {
    let class_name_hstring = HSTRING::from(WINDOW_CLASS_NAME);

    let (x, y) = centered_position(WINDOW_CONFIG.width, WINDOW_CONFIG.height);

    unsafe {
        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE(0),
            &class_name_hstring,
            &HSTRING::from(WINDOW_CONFIG.title),
            WS_OVERLAPPEDWINDOW | WS_CLIPCHILDREN,
            x,
            y,
            WINDOW_CONFIG.width,
            WINDOW_CONFIG.height,
            None,
            None,
            Some(h_instance),
            Some(Box::into_raw(state) as *mut c_void),
        )
        .map_err(|e| {
            PlatformError::InitializationFailed(format!("CreateWindowExW failed: {e:?}"))
        })?;
        Ok(hwnd)
    }
}

fn centered_position(width: i32, height: i32) -> (i32, i32) {
    let screen_w = unsafe { GetSystemMetrics(SM_CXSCREEN) };
    let screen_h = unsafe { GetSystemMetrics(SM_CYSCREEN) };
    if screen_w <= 0 || screen_h <= 0 {
        return (CW_USEDEFAULT, CW_USEDEFAULT);
    }
    (((screen_w - width) / 2).max(0), ((screen_h - height) / 2).max(0))
}

/*
 * Window procedure router. WM_NCCREATE stores the `WindowState` pointer in
 * GWLP_USERDATA; subsequent messages read it back and dispatch through
 * `handle_window_message`. WM_NCDESTROY is the final message, so the state
 * box is reclaimed there.
 */
unsafe extern "system" fn wnd_proc_router(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let state_ptr = if msg == WM_NCCREATE {
        let create_struct = unsafe { &*(lparam.0 as *const CREATESTRUCTW) };
        let state_raw_ptr = create_struct.lpCreateParams as *mut WindowState;
        unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, state_raw_ptr as isize) };
        state_raw_ptr
    } else {
        unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *mut WindowState }
    };

    if state_ptr.is_null() {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    }

    let state = unsafe { &*state_ptr };
    let result = handle_window_message(state, hwnd, msg, wparam, lparam);

    if msg == WM_NCDESTROY {
        let _ = unsafe { Box::from_raw(state_ptr) };
        unsafe { SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0) };
    }
    result
}

/*
 * Dispatches a window message to its handler. Unhandled messages fall
 * through to DefWindowProcW.
 */
fn handle_window_message(
    state: &WindowState,
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_COMMAND => handle_wm_command(state, hwnd, wparam, lparam),
        WM_SIZE => handle_wm_size(hwnd, wparam, lparam),
        WM_PAINT => handle_wm_paint(hwnd),
        WM_CLOSE => handle_wm_close(hwnd),
        WM_DESTROY => {
            log::debug!("Win32: WM_DESTROY, posting quit.");
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

/*
 * Handles WM_COMMAND: only menu commands exist in this program, identified
 * by a null control handle. The numeric id is translated back into a
 * `MenuAction` through the registry populated at menu construction.
 */
fn handle_wm_command(state: &WindowState, hwnd: HWND, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if lparam.0 != 0 {
        // No child controls exist; nothing to route.
        return LRESULT(0);
    }
    let command_id = loword_from_wparam(wparam);
    match state.menu_actions.get(command_id) {
        Some(MenuAction::ExitApplication) => {
            log::debug!("Win32: Exit menu command, posting WM_CLOSE.");
            unsafe {
                if let Err(e) = PostMessageW(Some(hwnd), WM_CLOSE, WPARAM(0), LPARAM(0)) {
                    log::error!("Win32: failed to post WM_CLOSE: {e:?}");
                }
            }
        }
        None => {
            log::warn!("Win32: WM_COMMAND with unregistered menu id {command_id}.");
        }
    }
    LRESULT(0)
}

/*
 * Handles WM_SIZE: a restored-size change invalidates the whole client
 * area so the ellipse and greeting recompute against the new dimensions.
 * Minimize/maximize transitions skip the repaint, as the original did.
 */
fn handle_wm_size(hwnd: HWND, wparam: WPARAM, _lparam: LPARAM) -> LRESULT {
    if wparam.0 as u32 == SIZE_RESTORED {
        unsafe {
            let _ = InvalidateRect(Some(hwnd), None, true);
        }
    }
    LRESULT(0)
}

fn handle_wm_paint(hwnd: HWND) -> LRESULT {
    unsafe {
        let mut ps = PAINTSTRUCT::default();
        let hdc = BeginPaint(hwnd, &mut ps);
        if !hdc.is_invalid() {
            painting::paint_client_area(hwnd, hdc);
            let _ = EndPaint(hwnd, &ps);
        }
    }
    LRESULT(0)
}

fn handle_wm_close(hwnd: HWND) -> LRESULT {
    log::debug!("Win32: WM_CLOSE, destroying window.");
    unsafe {
        if let Err(e) = DestroyWindow(hwnd) {
            log::error!("Win32: DestroyWindow failed: {e:?}");
        }
    }
    LRESULT(0)
}

#[inline]
fn loword_from_wparam(wparam: WPARAM) -> i32 {
    (wparam.0 & 0xFFFF) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loword_extracts_command_id() {
        // Arrange: notification code in the high word, command id in the low.
        let wparam = WPARAM((1usize << 16) | 30000);
        // Act / Assert
        assert_eq!(loword_from_wparam(wparam), 30000);
    }
}
