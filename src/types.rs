/*
 * Platform-agnostic value types shared by both front ends: the compile-time
 * window configuration and the keyboard accelerator description used by menu
 * records. Keeping the accelerator as data (instead of a pre-rendered label
 * suffix) lets each front end derive both the key binding and the text shown
 * in the menu from the same source, so the two cannot drift apart.
 */

/// Compile-time description of the single top-level window each demo opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: &'static str,
    pub width: i32,
    pub height: i32,
}

/// Key half of an accelerator. Only the keys the demos actually bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelKey {
    /// A letter key, stored uppercase.
    Char(char),
    /// A function key, e.g. `Function(4)` for F4.
    Function(u8),
}

/// A keyboard shortcut bound to a menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accelerator {
    pub ctrl: bool,
    pub alt: bool,
    pub key: AccelKey,
}

impl Accelerator {
    pub const fn ctrl(key: char) -> Self {
        Self {
            ctrl: true,
            alt: false,
            key: AccelKey::Char(key),
        }
    }

    pub const fn alt_function(n: u8) -> Self {
        Self {
            ctrl: false,
            alt: true,
            key: AccelKey::Function(n),
        }
    }

    /// Human-readable form, e.g. "Ctrl+Q" or "Alt+F4". This is the one
    /// source for any accelerator text rendered into a menu label.
    pub fn display(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.alt {
            parts.push("Alt".to_string());
        }
        match self.key {
            AccelKey::Char(c) => parts.push(c.to_ascii_uppercase().to_string()),
            AccelKey::Function(n) => parts.push(format!("F{n}")),
        }
        parts.join("+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_letter_accelerator_displays_as_ctrl_plus_key() {
        let accel = Accelerator::ctrl('q');
        assert_eq!(accel.display(), "Ctrl+Q");
    }

    #[test]
    fn alt_function_accelerator_displays_as_alt_plus_fkey() {
        let accel = Accelerator::alt_function(4);
        assert_eq!(accel.display(), "Alt+F4");
    }
}
