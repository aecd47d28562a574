#[cfg(any(target_os = "windows", target_os = "macos"))]
use muda::ContextMenu;
#[cfg(any(target_os = "windows", target_os = "macos"))]
use muda::dpi::{LogicalPosition, Position};
use muda::{Menu, MenuEvent, MenuItem, PredefinedMenuItem};

use crate::controller::PopupRenderer;
use crate::editor::ScreenPosition;
use crate::error::{Error, Result};
use crate::menu::{MenuEntry, MenuItemId, mnemonic_label};

/// Native view the popup is attached to.
#[derive(Clone, Copy, Debug)]
pub enum NativeParent {
    /// Win32 `HWND`.
    Hwnd(isize),
    /// AppKit `NSView` pointer.
    NsView(*const std::ffi::c_void),
}

/// Converts menu entries to a native menu. Item ids are the stable
/// [`MenuItemId::as_str`] strings, so click events map back directly.
pub fn build_native_menu(entries: &[MenuEntry], show_access_keys: bool) -> Result<Menu> {
    let menu = Menu::new();
    for entry in entries {
        match entry {
            MenuEntry::Separator => menu.append(&PredefinedMenuItem::separator())?,
            MenuEntry::Item(item) => {
                let label = if show_access_keys {
                    mnemonic_label(&item.label, item.access_key)
                } else {
                    mnemonic_label(&item.label, "")
                };
                let native = MenuItem::with_id(item.id.as_str(), label, item.enabled, None);
                menu.append(&native)?;
            }
        }
    }
    Ok(menu)
}

/// Shows editor menus as platform popups through `muda`.
pub struct NativeMenuRenderer {
    parent: NativeParent,
    show_access_keys: bool,
}

impl NativeMenuRenderer {
    pub fn new(parent: NativeParent, show_access_keys: bool) -> Self {
        Self {
            parent,
            show_access_keys,
        }
    }

    /// Maps a native click event to the editor menu item it came from.
    pub fn item_for_event(event: &MenuEvent) -> Option<MenuItemId> {
        MenuItemId::parse(event.id.0.as_str())
    }

    fn show(&self, menu: &Menu, at: ScreenPosition) -> Result<()> {
        match self.parent {
            #[cfg(target_os = "windows")]
            NativeParent::Hwnd(hwnd) => {
                let position = Position::Logical(LogicalPosition::new(at.x, at.y));
                unsafe {
                    menu.show_context_menu_for_hwnd(hwnd, Some(position));
                }
                Ok(())
            }
            #[cfg(target_os = "macos")]
            NativeParent::NsView(view) => {
                let position = Position::Logical(LogicalPosition::new(at.x, at.y));
                unsafe {
                    menu.show_context_menu_for_nsview(view, Some(position));
                }
                Ok(())
            }
            #[allow(unreachable_patterns)]
            _ => {
                let _ = (menu, at);
                Err(Error::UnsupportedPlatform)
            }
        }
    }
}

impl PopupRenderer for NativeMenuRenderer {
    fn display(&mut self, position: ScreenPosition, entries: &[MenuEntry]) {
        let shown = build_native_menu(entries, self.show_access_keys)
            .and_then(|menu| self.show(&menu, position));
        if let Err(e) = shown {
            tracing::warn!("Failed to show editor context menu: {e}");
        }
    }
}
