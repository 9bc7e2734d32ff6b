/*
 * Pure geometry and text for the drawable client area. Both front ends draw
 * the same thing: an ellipse inscribed exactly in the client rectangle and a
 * two-line greeting centered inside it. Everything here is plain arithmetic
 * so the observable paint contract is testable without any native window.
 */

/// Fixed menu bar height in logical pixels for the toolkit front end. The
/// native front end gets its menu bar as window chrome outside the client
/// rectangle, so only the toolkit layout subtracts this.
pub const MENU_BAR_HEIGHT: i32 = 22;

/// Initial window size shared by both demos.
pub const INITIAL_WINDOW_WIDTH: i32 = 340;
pub const INITIAL_WINDOW_HEIGHT: i32 = 180;

/// Stroke width of the ellipse outline, in logical units.
pub const ELLIPSE_STROKE_WIDTH: i32 = 12;

/// A client rectangle in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Computes the drawable area of a window: everything below the menu bar.
/// The menu bar keeps its fixed height across resizes; only the drawable
/// area grows or shrinks. Degenerate window heights clamp to zero rather
/// than producing a negative rectangle.
pub fn client_area_rect(window_width: i32, window_height: i32) -> ClientRect {
    ClientRect {
        x: 0,
        y: MENU_BAR_HEIGHT,
        width: window_width.max(0),
        height: (window_height - MENU_BAR_HEIGHT).max(0),
    }
}

/// The message painted in the client area. `width` and `height` are the
/// client rectangle's current extent in pixels.
pub fn greeting_text(width: i32, height: i32) -> String {
    format!("Hello, world! 😃\nThis client area is {width}×{height} pixels.")
}

/// The ellipse's bounding box is the client rectangle itself, with no
/// margin. Kept as an explicit function so the invariant has a name.
pub fn ellipse_bounds(rect: ClientRect) -> ClientRect {
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_reports_exact_client_dimensions() {
        assert_eq!(
            greeting_text(340, 158),
            "Hello, world! 😃\nThis client area is 340×158 pixels."
        );
        assert_eq!(
            greeting_text(500, 278),
            "Hello, world! 😃\nThis client area is 500×278 pixels."
        );
    }

    #[test]
    fn greeting_uses_decimal_integers_and_two_lines() {
        let text = greeting_text(1, 99999);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Hello, world! 😃");
        assert_eq!(lines[1], "This client area is 1×99999 pixels.");
    }

    #[test]
    fn initial_window_yields_expected_drawable_rect() {
        // Arrange / Act
        let rect = client_area_rect(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT);
        // Assert
        assert_eq!(
            rect,
            ClientRect {
                x: 0,
                y: 22,
                width: 340,
                height: 158
            }
        );
    }

    #[test]
    fn resize_only_changes_the_drawable_area() {
        let before = client_area_rect(340, 180);
        let after = client_area_rect(500, 300);
        // The menu bar keeps its offset; only width/height move.
        assert_eq!(after.x, before.x);
        assert_eq!(after.y, before.y);
        assert_eq!(after.y, MENU_BAR_HEIGHT);
        assert_eq!(
            after,
            ClientRect {
                x: 0,
                y: 22,
                width: 500,
                height: 278
            }
        );
    }

    #[test]
    fn degenerate_window_height_clamps_to_empty_rect() {
        let rect = client_area_rect(100, 10);
        assert_eq!(rect.height, 0);
        assert_eq!(rect.y, MENU_BAR_HEIGHT);
    }

    #[test]
    fn ellipse_inscribes_the_client_rect_exactly() {
        let rect = client_area_rect(500, 300);
        assert_eq!(ellipse_bounds(rect), rect);
    }
}
