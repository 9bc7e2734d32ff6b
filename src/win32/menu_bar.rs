/*
 * Builds the native menu bar from the shared menu records. Each item's
 * numeric command id comes from the `MenuActionRegistry`, which WM_COMMAND
 * handling later consults; the visible label (including its accelerator
 * suffix) is rendered from the same record the binding comes from.
 */
use crate::error::{PlatformError, Result as PlatformResult};
use crate::menu::{MenuActionRegistry, MenuGroup};

use windows::{
    Win32::UI::WindowsAndMessaging::{
        AppendMenuW, CreateMenu, CreatePopupMenu, HMENU, MF_ENABLED, MF_POPUP, MF_STRING, SetMenu,
    },
    core::HSTRING,
};
use windows::Win32::Foundation::HWND;

/*
 * Creates the menu bar handle for the given records. The bar is not yet
 * attached to a window; `attach_menu_bar` does that once the window exists.
 */
pub(crate) fn build_menu_bar(
    groups: &[MenuGroup],
    registry: &mut MenuActionRegistry,
) -> PlatformResult<HMENU> {
    unsafe {
        let bar = CreateMenu().map_err(|e| {
            PlatformError::OperationFailed(format!("CreateMenu failed: {e:?}"))
        })?;

        for group in groups {
            let popup = CreatePopupMenu().map_err(|e| {
                PlatformError::OperationFailed(format!("CreatePopupMenu failed: {e:?}"))
            })?;

            for item in &group.items {
                let command_id = registry.register(item.action);
                let label = HSTRING::from(item.label_with_accelerator());
                AppendMenuW(popup, MF_ENABLED | MF_STRING, command_id as usize, &label).map_err(
                    |e| {
                        PlatformError::OperationFailed(format!(
                            "AppendMenuW for item '{}' failed: {e:?}",
                            item.label
                        ))
                    },
                )?;
            }

            let group_label = HSTRING::from(group.label);
            AppendMenuW(bar, MF_POPUP, popup.0 as usize, &group_label).map_err(|e| {
                PlatformError::OperationFailed(format!(
                    "AppendMenuW for group '{}' failed: {e:?}",
                    group.label
                ))
            })?;
        }

        log::debug!(
            "Win32: menu bar built with {} registered command(s).",
            registry.len()
        );
        Ok(bar)
    }
}

pub(crate) fn attach_menu_bar(hwnd: HWND, menu: HMENU) -> PlatformResult<()> {
    unsafe {
        SetMenu(hwnd, Some(menu))
            .map_err(|e| PlatformError::OperationFailed(format!("SetMenu failed: {e:?}")))
    }
}
