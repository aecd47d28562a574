mod slot;

use crate::config::MenuConfig;
use crate::editor::{EditorSurface, IdentityLines, LineMapper, ScreenPosition, locate_coordinate};
use crate::i18n::{self, Translations};
use crate::menu::{EditorActions, MenuContext, MenuEntry, MenuItemId, build_editor_menu, find_item};
use crate::source::{SourceDescriptor, SourceId, SourceLocation};
use crate::symbols::SymbolTable;

pub use slot::{ControllerState, MenuKind, MenuRequestSlot, PendingMenuRequest};

/// Read-only queries against the debugger's state container.
pub trait DebuggerState {
    fn selected_source(&self) -> Option<&SourceDescriptor>;
    fn selected_location(&self) -> Option<&SourceLocation>;
    fn symbols_for(&self, source: &SourceDescriptor) -> Option<&SymbolTable>;
    fn source_text(&self, source_id: &SourceId) -> Option<&str>;
    /// A pretty-printed version of the source exists.
    fn has_pretty_version(&self, source_id: &SourceId) -> bool;
    /// Generated source a pretty-printed source was rendered from, with the
    /// line table leading back to it. `None` for raw sources.
    fn pretty_origin(&self, source_id: &SourceId) -> Option<(SourceId, &dyn LineMapper)>;
}

/// Shows built menus to the user.
pub trait PopupRenderer {
    fn display(&mut self, position: ScreenPosition, entries: &[MenuEntry]);
}

/// Owns the `Editor` menu kind: consumes its requests and dispatches clicks.
pub struct ContextMenuController {
    slot: MenuRequestSlot,
    options: MenuConfig,
    translations: Option<&'static Translations>,
    active: Vec<MenuEntry>,
}

impl ContextMenuController {
    pub fn new(slot: MenuRequestSlot, options: MenuConfig) -> Self {
        Self {
            slot,
            options,
            translations: None,
            active: Vec::new(),
        }
    }

    /// Pins the label language instead of following the global locale.
    pub fn with_translations(mut self, translations: &'static Translations) -> Self {
        self.translations = Some(translations);
        self
    }

    /// Items of the menu most recently shown and not yet dispatched.
    pub fn active_menu(&self) -> &[MenuEntry] {
        &self.active
    }

    /// Handles an editor context-menu trigger.
    ///
    /// Called by the host after every state change. Does nothing unless an
    /// `Editor` request is pending. The request leaves the slot before the
    /// menu is built, so nested reads during display see it consumed. The
    /// previous menu is forgotten even if no new one can be shown.
    pub fn on_state_change(
        &mut self,
        state: &dyn DebuggerState,
        editor: &dyn EditorSurface,
        renderer: &mut dyn PopupRenderer,
    ) {
        let Some(request) = self.slot.take_if(MenuKind::Editor) else {
            return;
        };
        self.active.clear();

        let Some(entries) = self.build(&request, state, editor) else {
            tracing::debug!("no selected source, editor menu not shown");
            return;
        };

        self.active = entries;
        renderer.display(request.event.position, &self.active);
    }

    fn build(
        &self,
        request: &PendingMenuRequest,
        state: &dyn DebuggerState,
        editor: &dyn EditorSurface,
    ) -> Option<Vec<MenuEntry>> {
        let source = state.selected_source()?;
        let location_source_id = state
            .selected_location()
            .map_or_else(|| source.id.clone(), |loc| loc.source_id.clone());

        let coord = editor.pointer_to_coordinate(&request.event);
        let location = match state.pretty_origin(&source.id) {
            Some((generated_id, lines)) if source.is_pretty_printed => {
                locate_coordinate(coord, &generated_id, lines)
            }
            _ => locate_coordinate(coord, &location_source_id, &IdentityLines),
        };
        let source_line = coord.source_line();
        tracing::trace!(editor_line = coord.line, ?location, "resolved context menu location");

        let empty = SymbolTable::default();
        let ctx = MenuContext {
            location,
            source_line,
            location_source_id,
            source,
            source_text: state.source_text(&source.id).unwrap_or_default(),
            symbols: state.symbols_for(source).unwrap_or(&empty),
            selection_text: editor.selection_text(),
            has_pretty_print: state.has_pretty_version(&source.id),
            translations: self.translations.unwrap_or_else(i18n::t),
            options: self.options,
        };
        Some(build_editor_menu(&ctx))
    }

    /// Runs the command of the clicked item and closes the active menu.
    ///
    /// Returns `false` for disabled items and ids not in the active menu.
    pub fn dispatch(&mut self, id: MenuItemId, actions: &mut dyn EditorActions) -> bool {
        let entries = std::mem::take(&mut self.active);
        match find_item(&entries, id) {
            Some(item) if item.enabled => {
                tracing::debug!(item = id.as_str(), "dispatching editor menu command");
                item.command.execute(actions);
                true
            }
            _ => {
                tracing::debug!(item = id.as_str(), "ignored click on unavailable menu item");
                false
            }
        }
    }

    /// Forgets the active menu, e.g. when the popup is dismissed.
    pub fn dismiss(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller.rs"]
mod tests;
