/*
 * Data-driven menu configuration. The menu is an immutable, ordered list of
 * (label, accelerator, action) records built once at window construction;
 * front ends walk the records to build their native menu and never consult
 * anything else for labels or bindings.
 *
 * `MenuActionRegistry` assigns the numeric command ids a native menu needs
 * and maps them back to actions when a command notification arrives. The
 * registry is pure bookkeeping so it stays testable off-Windows.
 */
use crate::types::Accelerator;

use std::collections::HashMap;

/// First numeric id handed out for menu items. Keeps menu command ids well
/// clear of any control id range.
const MENU_ITEM_ID_BASE: i32 = 30000;

/// The one thing a menu item in these demos can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    ExitApplication,
}

/// One command entry inside a menu group. `label` may contain a `&`
/// mnemonic marker; the accelerator is kept as data and rendered into the
/// visible label by the front end, never hard-coded into `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub accelerator: Option<Accelerator>,
    pub action: MenuAction,
}

impl MenuItem {
    /// Label with the accelerator text appended after a tab, the form Win32
    /// menus expect ("E&xit\tAlt+F4"). Derived from the item's own
    /// accelerator record so label and binding cannot drift apart.
    pub fn label_with_accelerator(&self) -> String {
        match &self.accelerator {
            Some(accel) => format!("{}\t{}", self.label, accel.display()),
            None => self.label.to_string(),
        }
    }
}

/// A top-level menu entry and its dropdown items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub label: &'static str,
    pub items: Vec<MenuItem>,
}

/// The whole menu bar for either demo: one "App" group holding one "Exit"
/// command bound to the front end's accelerator.
pub fn default_menu_bar(exit_accelerator: Accelerator) -> Vec<MenuGroup> {
    vec![MenuGroup {
        label: "&App",
        items: vec![MenuItem {
            label: "E&xit",
            accelerator: Some(exit_accelerator),
            action: MenuAction::ExitApplication,
        }],
    }]
}

/// Hands out consecutive numeric command ids and remembers which action
/// each id stands for, so a WM_COMMAND-style notification can be translated
/// back into a `MenuAction`.
#[derive(Debug, Default)]
pub struct MenuActionRegistry {
    actions: HashMap<i32, MenuAction>,
    next_id: i32,
}

impl MenuActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            next_id: MENU_ITEM_ID_BASE,
        }
    }

    pub fn register(&mut self, action: MenuAction) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        self.actions.insert(id, action);
        id
    }

    pub fn get(&self, id: i32) -> Option<MenuAction> {
        self.actions.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Accelerator;

    #[test]
    fn default_menu_bar_is_one_app_group_with_one_exit_item() {
        // Arrange / Act
        let bar = default_menu_bar(Accelerator::ctrl('Q'));
        // Assert
        assert_eq!(bar.len(), 1);
        assert_eq!(bar[0].label, "&App");
        assert_eq!(bar[0].items.len(), 1);
        let item = &bar[0].items[0];
        assert_eq!(item.label, "E&xit");
        assert_eq!(item.action, MenuAction::ExitApplication);
    }

    #[test]
    fn native_label_pairs_the_item_with_its_own_accelerator() {
        let bar = default_menu_bar(Accelerator::alt_function(4));
        assert_eq!(bar[0].items[0].label_with_accelerator(), "E&xit\tAlt+F4");

        let bar = default_menu_bar(Accelerator::ctrl('q'));
        assert_eq!(bar[0].items[0].label_with_accelerator(), "E&xit\tCtrl+Q");
    }

    #[test]
    fn item_without_accelerator_renders_bare_label() {
        let item = MenuItem {
            label: "&About",
            accelerator: None,
            action: MenuAction::ExitApplication,
        };
        assert_eq!(item.label_with_accelerator(), "&About");
    }

    #[test]
    fn registry_hands_out_consecutive_ids_mapping_back_to_actions() {
        // Arrange
        let mut registry = MenuActionRegistry::new();
        // Act
        let id1 = registry.register(MenuAction::ExitApplication);
        let id2 = registry.register(MenuAction::ExitApplication);
        // Assert
        assert_eq!(id2, id1 + 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(id1), Some(MenuAction::ExitApplication));
        assert_eq!(registry.get(id2), Some(MenuAction::ExitApplication));
        assert_eq!(registry.get(id2 + 1), None);
    }
}
