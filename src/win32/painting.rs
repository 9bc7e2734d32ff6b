/*
 * GDI paint routine for the client area: a 12-px solid red ellipse stroked
 * exactly along the client rectangle, behind the centered greeting in the
 * system's default message font. All transient DC state (pen, brush, clip,
 * background mode, font) sits between SaveDC/RestoreDC so nothing leaks
 * into later paints.
 */
use crate::client_area::{ELLIPSE_STROKE_WIDTH, greeting_text};

use std::ffi::c_void;
use std::sync::OnceLock;

use windows::Win32::{
    Foundation::{COLORREF, HWND, RECT},
    Graphics::Gdi::{
        CreateFontIndirectW, CreatePen, DT_CALCRECT, DT_CENTER, DT_NOPREFIX, DeleteObject,
        DrawTextW, Ellipse, GetStockObject, HDC, HFONT, HGDIOBJ, IntersectClipRect, NULL_BRUSH,
        PS_SOLID, RestoreDC, SaveDC, SelectObject, SetBkMode, TRANSPARENT,
    },
    UI::WindowsAndMessaging::{
        GetClientRect, NONCLIENTMETRICSW, SPI_GETNONCLIENTMETRICS,
        SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, SystemParametersInfoW,
    },
};

const STROKE_RED: COLORREF = COLORREF(0x0000_00FF);

/// Handle bits of the cached default UI font. Initialized once for the
/// process lifetime; no teardown since the font lives as long as we do.
static DEFAULT_UI_FONT: OnceLock<isize> = OnceLock::new();

/*
 * The system's default message font (the one dialogs use), cached for the
 * process. A failed metrics query falls back to a null handle, which
 * SelectObject treats as a no-op, so text simply renders in the DC's
 * current font.
 */
pub(crate) fn default_ui_font() -> HFONT {
    let handle = DEFAULT_UI_FONT.get_or_init(|| {
        let mut metrics = NONCLIENTMETRICSW {
            cbSize: std::mem::size_of::<NONCLIENTMETRICSW>() as u32,
            ..Default::default()
        };
        let queried = unsafe {
            SystemParametersInfoW(
                SPI_GETNONCLIENTMETRICS,
                metrics.cbSize,
                Some(&mut metrics as *mut NONCLIENTMETRICSW as *mut c_void),
                SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
            )
        };
        match queried {
            Ok(()) => {
                let font = unsafe { CreateFontIndirectW(&metrics.lfMessageFont) };
                font.0 as isize
            }
            Err(e) => {
                log::warn!("Win32: SPI_GETNONCLIENTMETRICS failed, using DC font: {e:?}");
                0
            }
        }
    });
    HFONT(*handle as *mut c_void)
}

/*
 * Paints the whole client area on the given DC. Rendering failures are not
 * observable; a failed draw call simply leaves that part blank.
 */
pub(crate) fn paint_client_area(hwnd: HWND, hdc: HDC) {
    let mut rect = RECT::default();
    if unsafe { GetClientRect(hwnd, &mut rect) }.is_err() {
        return;
    }
    let width = rect.right - rect.left;
    let height = rect.bottom - rect.top;
    // Guard against degenerate sizes during creation / collapse.
    if width <= 0 || height <= 0 {
        return;
    }

    let text = greeting_text(width, height);
    let wide_pen = unsafe { CreatePen(PS_SOLID, ELLIPSE_STROKE_WIDTH, STROKE_RED) };

    let saved_dc = unsafe { SaveDC(hdc) };
    unsafe {
        let _ = IntersectClipRect(hdc, rect.left, rect.top, rect.right, rect.bottom);

        SelectObject(hdc, GetStockObject(NULL_BRUSH)); // Unfilled ellipse.
        SetBkMode(hdc, TRANSPARENT); // Text over the ellipse stroke.

        SelectObject(hdc, wide_pen.into());
        let _ = Ellipse(hdc, rect.left, rect.top, rect.right, rect.bottom);

        SelectObject(hdc, HGDIOBJ(default_ui_font().0));
        draw_text_centered(hdc, &text, &rect);
    }
    unsafe {
        let _ = RestoreDC(hdc, saved_dc);
        let _ = DeleteObject(wide_pen.into());
    }
}

/*
 * Draws multi-line text centered both ways in `rect`. DT_VCENTER only works
 * for single-line text, so the vertical centering is done by measuring with
 * DT_CALCRECT first and offsetting the draw rectangle. DT_NOPREFIX keeps
 * "&" characters literal.
 */
fn draw_text_centered(hdc: HDC, text: &str, rect: &RECT) {
    let mut wide: Vec<u16> = text.encode_utf16().collect();

    let mut calc_rect = *rect;
    let text_height = unsafe {
        DrawTextW(
            hdc,
            &mut wide,
            &mut calc_rect,
            DT_CENTER | DT_NOPREFIX | DT_CALCRECT,
        )
    };

    let mut draw_rect = RECT {
        left: rect.left,
        top: rect.top + ((rect.bottom - rect.top) - text_height) / 2,
        right: rect.right,
        bottom: rect.bottom,
    };
    unsafe {
        DrawTextW(hdc, &mut wide, &mut draw_rect, DT_CENTER | DT_NOPREFIX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_color_is_pure_red_in_colorref_layout() {
        // COLORREF is 0x00BBGGRR; red occupies the low byte.
        assert_eq!(STROKE_RED.0 & 0xFF, 0xFF);
        assert_eq!(STROKE_RED.0 >> 8, 0);
    }
}
