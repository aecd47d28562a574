mod builder;
mod command;
mod context;
mod item;

pub use builder::build_editor_menu;
pub use command::{EditorActions, EditorCommand, LineRange};
pub use context::MenuContext;
pub use item::{MenuEntry, MenuItemDescriptor, MenuItemId, find_item, mnemonic_label};

#[cfg(test)]
#[path = "../../tests/unit/menu_builder.rs"]
mod tests;
