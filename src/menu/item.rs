use super::command::EditorCommand;

/// Identifiers of the editor context menu items, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuItemId {
    CopySource,
    CopySourceUrl,
    CopyFunction,
    JumpToMappedLocation,
    ShowSource,
    ToggleBlackBox,
    AddWatchExpression,
}

impl MenuItemId {
    pub const ALL: &'static [MenuItemId] = &[
        MenuItemId::CopySource,
        MenuItemId::CopySourceUrl,
        MenuItemId::CopyFunction,
        MenuItemId::JumpToMappedLocation,
        MenuItemId::ShowSource,
        MenuItemId::ToggleBlackBox,
        MenuItemId::AddWatchExpression,
    ];

    /// Stable string id, used as the native menu item id.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuItemId::CopySource => "node-menu-copy-source",
            MenuItemId::CopySourceUrl => "node-menu-copy-source-url",
            MenuItemId::CopyFunction => "node-menu-copy-function",
            MenuItemId::JumpToMappedLocation => "node-menu-jump",
            MenuItemId::ShowSource => "node-menu-show-source",
            MenuItemId::ToggleBlackBox => "node-menu-blackbox",
            MenuItemId::AddWatchExpression => "node-menu-add-watch-expression",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|item| item.as_str() == id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItemDescriptor {
    pub id: MenuItemId,
    pub label: String,
    pub access_key: &'static str,
    pub enabled: bool,
    pub command: EditorCommand,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuItemDescriptor),
    Separator,
}

impl MenuEntry {
    pub fn as_item(&self) -> Option<&MenuItemDescriptor> {
        match self {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Separator => None,
        }
    }
}

/// Looks up an item by id.
pub fn find_item(entries: &[MenuEntry], id: MenuItemId) -> Option<&MenuItemDescriptor> {
    entries
        .iter()
        .filter_map(MenuEntry::as_item)
        .find(|item| item.id == id)
}

/// Marks the first case-insensitive occurrence of `access_key` in `label`
/// with `&`, escaping literal ampersands. Labels without the key are only
/// escaped.
pub fn mnemonic_label(label: &str, access_key: &str) -> String {
    let key = access_key.chars().next().map(|c| c.to_lowercase().collect::<String>());
    let mut marked = false;
    let mut out = String::with_capacity(label.len() + 1);
    for ch in label.chars() {
        if ch == '&' {
            out.push_str("&&");
            continue;
        }
        if !marked && key.as_deref() == Some(ch.to_lowercase().collect::<String>().as_str()) {
            out.push('&');
            marked = true;
        }
        out.push(ch);
    }
    out
}
