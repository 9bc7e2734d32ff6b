/*
 * The cross-platform toolkit rendition of the demo, built on eframe/egui.
 * One top-level window: a fixed-height menu bar panel on top, and a central
 * panel whose whole rectangle is the drawable client area. The client area
 * repaints from current dimensions on every frame, so resize handling falls
 * out of the immediate-mode model for free.
 */
use crate::client_area::{
    ELLIPSE_STROKE_WIDTH, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MENU_BAR_HEIGHT,
    greeting_text,
};
use crate::menu::{MenuAction, MenuGroup, default_menu_bar};
use crate::types::{AccelKey, Accelerator, WindowConfig};

use eframe::egui::{
    self, Align, Color32, Context, FontId, Key, KeyboardShortcut, Modifiers, Pos2, Rect, Stroke,
    TextStyle, Vec2, pos2,
};

pub const WINDOW_CONFIG: WindowConfig = WindowConfig {
    title: "egui dynamic ellipse",
    width: INITIAL_WINDOW_WIDTH,
    height: INITIAL_WINDOW_HEIGHT,
};

/// The toolkit variant binds Exit to Ctrl+Q.
pub const EXIT_ACCELERATOR: Accelerator = Accelerator::ctrl('Q');

/// Builds the window and blocks in the event loop until the window closes.
/// The loop's result becomes the process exit status.
pub fn run() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_CONFIG.title)
            .with_inner_size([WINDOW_CONFIG.width as f32, WINDOW_CONFIG.height as f32]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_CONFIG.title,
        options,
        Box::new(|_cc| Ok(Box::new(EllipseApp::new()))),
    )
}

pub struct EllipseApp {
    /// Immutable (label, accelerator, action) records, built once.
    menu_bar: Vec<MenuGroup>,
}

impl EllipseApp {
    pub fn new() -> Self {
        Self {
            menu_bar: default_menu_bar(EXIT_ACCELERATOR),
        }
    }

    fn perform(&self, action: MenuAction, ctx: &Context) {
        match action {
            MenuAction::ExitApplication => {
                log::debug!("Toolkit: Exit selected, closing the window.");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn handle_accelerators(&self, ctx: &Context) {
        for group in &self.menu_bar {
            for item in &group.items {
                if let Some(shortcut) = item.accelerator.and_then(to_egui_shortcut)
                    && ctx.input_mut(|input| input.consume_shortcut(&shortcut))
                {
                    self.perform(item.action, ctx);
                }
            }
        }
    }

    fn show_menu_bar(&self, ctx: &Context) {
        egui::TopBottomPanel::top("menu_bar")
            .exact_height(MENU_BAR_HEIGHT as f32)
            .show(ctx, |ui| {
                egui::menu::bar(ui, |ui| {
                    for group in &self.menu_bar {
                        ui.menu_button(strip_mnemonic(group.label), |ui| {
                            for item in &group.items {
                                let mut button = egui::Button::new(strip_mnemonic(item.label));
                                if let Some(accel) = &item.accelerator {
                                    button = button.shortcut_text(accel.display());
                                }
                                if ui.add(button).clicked() {
                                    ui.close_menu();
                                    self.perform(item.action, ctx);
                                }
                            }
                        });
                    }
                });
            });
    }

    fn paint_client_area(&self, ctx: &Context) {
        // No frame margin: the drawable area must be the panel rect exactly,
        // or the ellipse would no longer inscribe it.
        let frame = egui::Frame::NONE.fill(ctx.style().visuals.panel_fill);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let rect = ui.max_rect();
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }
            let painter = ui.painter().with_clip_rect(rect);

            let (center, radius) = inscribed_ellipse(rect);
            painter.add(egui::Shape::Ellipse(egui::epaint::EllipseShape {
                center,
                radius,
                fill: Color32::TRANSPARENT,
                stroke: Stroke::new(ELLIPSE_STROKE_WIDTH as f32, Color32::RED),
            }));

            let text = greeting_text(rect.width().round() as i32, rect.height().round() as i32);
            let font_id = default_ui_font(ui);
            // Center each line, not just the block; matches how the native
            // variant's DT_CENTER behaves.
            let mut job =
                egui::text::LayoutJob::simple(text, font_id, Color32::BLACK, f32::INFINITY);
            job.halign = Align::Center;
            let galley = ui.fonts(|fonts| fonts.layout_job(job));
            let top = rect.center().y - galley.size().y / 2.0;
            painter.galley(pos2(rect.center().x, top), galley, Color32::BLACK);
        });
    }
}

impl Default for EllipseApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for EllipseApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_accelerators(ctx);
        self.show_menu_bar(ctx);
        self.paint_client_area(ctx);
    }
}

/// Center and half-extents of the ellipse inscribed exactly in `rect`.
fn inscribed_ellipse(rect: Rect) -> (Pos2, Vec2) {
    (rect.center(), rect.size() / 2.0)
}

/// The process-wide default UI font, as egui resolves it for body text.
fn default_ui_font(ui: &egui::Ui) -> FontId {
    TextStyle::Body.resolve(ui.style())
}

/// Menu labels may carry `&` mnemonic markers for the native front end;
/// egui renders labels verbatim, so the markers are dropped here.
fn strip_mnemonic(label: &str) -> String {
    label.replace('&', "")
}

fn to_egui_shortcut(accel: Accelerator) -> Option<KeyboardShortcut> {
    let key = match accel.key {
        AccelKey::Char(c) => Key::from_name(&c.to_ascii_uppercase().to_string())?,
        AccelKey::Function(n) => Key::from_name(&format!("F{n}"))?,
    };
    let mut modifiers = Modifiers::NONE;
    if accel.ctrl {
        modifiers = modifiers.plus(Modifiers::CTRL);
    }
    if accel.alt {
        modifiers = modifiers.plus(Modifiers::ALT);
    }
    Some(KeyboardShortcut::new(modifiers, key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipse_inscribes_the_drawable_rect() {
        // Drawable rect of the initial 340x180 window below a 22 px bar.
        let rect = Rect::from_min_size(pos2(0.0, 22.0), Vec2::new(340.0, 158.0));
        let (center, radius) = inscribed_ellipse(rect);
        assert_eq!(center, pos2(170.0, 101.0));
        assert_eq!(radius, Vec2::new(170.0, 79.0));
    }

    #[test]
    fn mnemonic_markers_are_stripped_for_egui_labels() {
        assert_eq!(strip_mnemonic("&App"), "App");
        assert_eq!(strip_mnemonic("E&xit"), "Exit");
        assert_eq!(strip_mnemonic("Plain"), "Plain");
    }

    #[test]
    fn exit_accelerator_translates_to_ctrl_q() {
        let shortcut = to_egui_shortcut(EXIT_ACCELERATOR).expect("Ctrl+Q must translate");
        assert_eq!(shortcut.logical_key, Key::Q);
        assert!(shortcut.modifiers.ctrl);
        assert!(!shortcut.modifiers.alt);
    }

    #[test]
    fn function_key_accelerator_translates() {
        let shortcut = to_egui_shortcut(Accelerator::alt_function(4)).expect("Alt+F4");
        assert_eq!(shortcut.logical_key, Key::F4);
        assert!(shortcut.modifiers.alt);
    }

    #[test]
    fn menu_bar_panel_height_matches_layout_constant() {
        // The drawable-area math in `client_area` assumes this exact height.
        assert_eq!(MENU_BAR_HEIGHT, 22);
    }
}
