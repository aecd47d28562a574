use super::command::{EditorCommand, LineRange};
use super::context::MenuContext;
use super::item::{MenuEntry, MenuItemDescriptor, MenuItemId};
use crate::source::raw_source_url;

fn item(
    id: MenuItemId,
    label: impl Into<String>,
    access_key: &'static str,
    enabled: bool,
    command: EditorCommand,
) -> MenuEntry {
    MenuEntry::Item(MenuItemDescriptor {
        id,
        label: label.into(),
        access_key,
        enabled,
        command,
    })
}

fn copy_function_command(ctx: &MenuContext<'_>) -> (bool, EditorCommand) {
    let Some(func) = ctx.symbols.enclosing_function(ctx.source_line) else {
        return (false, EditorCommand::CopyText(String::new()));
    };
    let Some(text) = ctx.symbols.function_text(ctx.source_line, ctx.source_text) else {
        return (false, EditorCommand::CopyText(String::new()));
    };
    if !ctx.options.flash_copied_function {
        return (true, EditorCommand::CopyText(text));
    }
    let range = LineRange {
        source_id: ctx.location_source_id.clone(),
        start: func.location.start.line,
        end: func.location.end.line,
    };
    (true, EditorCommand::CopyFunction { range, text })
}

/// Builds the editor context menu for `ctx`.
///
/// Every item is always present except the watch expression item, which
/// only appears while text is selected. Unavailable items are disabled
/// rather than hidden.
pub fn build_editor_menu(ctx: &MenuContext<'_>) -> Vec<MenuEntry> {
    let tr = ctx.translations;
    let source = ctx.source;
    let is_original = ctx.is_original();
    let is_pretty_printed = ctx.is_pretty_printed();
    let has_source_map = ctx.has_source_map();
    let text_selected = ctx.text_selected();

    let (copy_function_enabled, copy_function) = copy_function_command(ctx);

    let blackbox_label = if source.is_black_boxed {
        tr.menu_unblackbox
    } else {
        tr.menu_blackbox
    };

    let mut entries = vec![
        item(
            MenuItemId::CopySource,
            tr.menu_copy_source,
            tr.menu_copy_source_key,
            text_selected,
            EditorCommand::CopyText(ctx.selection_text.trim().to_string()),
        ),
        item(
            MenuItemId::CopySourceUrl,
            tr.menu_copy_source_url,
            tr.menu_copy_source_url_key,
            true,
            EditorCommand::CopyText(raw_source_url(&source.url).to_string()),
        ),
        item(
            MenuItemId::CopyFunction,
            tr.menu_copy_function,
            tr.menu_copy_function_key,
            copy_function_enabled,
            copy_function,
        ),
        MenuEntry::Separator,
        item(
            MenuItemId::JumpToMappedLocation,
            tr.jump_to_mapped_location(is_original),
            tr.menu_jump_to_mapped_location_key,
            ctx.is_mapped() || ctx.is_prettified(),
            EditorCommand::JumpToMappedLocation(ctx.location.clone()),
        ),
        item(
            MenuItemId::ShowSource,
            tr.menu_reveal_in_tree,
            tr.menu_reveal_in_tree_key,
            !is_pretty_printed,
            EditorCommand::RevealInTree(source.id.clone()),
        ),
        item(
            MenuItemId::ToggleBlackBox,
            blackbox_label,
            tr.menu_blackbox_key,
            !(is_original || is_pretty_printed || has_source_map),
            EditorCommand::ToggleBlackBox(source.clone()),
        ),
    ];

    if text_selected {
        entries.push(item(
            MenuItemId::AddWatchExpression,
            tr.menu_add_watch_expression,
            tr.menu_add_watch_expression_key,
            true,
            EditorCommand::AddWatchExpression(ctx.selection_text.clone()),
        ));
    }

    tracing::debug!(
        source = %source.id,
        line = ctx.source_line,
        is_original,
        is_pretty_printed,
        has_source_map,
        text_selected,
        items = entries.len(),
        "built editor context menu"
    );
    entries
}
