use crate::config::MenuConfig;
use crate::i18n::Translations;
use crate::source::{SourceDescriptor, SourceId, SourceLocation};
use crate::symbols::SymbolTable;

/// Immutable snapshot of everything the editor menu depends on.
pub struct MenuContext<'a> {
    /// Location under the pointer, used as the jump target.
    pub location: SourceLocation,
    /// 1-based displayed line under the pointer, used for function lookup.
    pub source_line: u32,
    /// Source of the selected location. Decides whether we are looking at
    /// an original source.
    pub location_source_id: SourceId,
    pub source: &'a SourceDescriptor,
    pub source_text: &'a str,
    pub symbols: &'a SymbolTable,
    /// Raw editor selection, untrimmed.
    pub selection_text: String,
    /// A pretty-printed version of `source` exists.
    pub has_pretty_print: bool,
    pub translations: &'static Translations,
    pub options: MenuConfig,
}

impl MenuContext<'_> {
    pub fn is_original(&self) -> bool {
        self.location_source_id.is_original()
    }

    /// The selected source is itself the pretty-printed rendering.
    pub fn is_pretty_printed(&self) -> bool {
        self.source.is_pretty_printed
    }

    pub fn is_prettified(&self) -> bool {
        self.is_pretty_printed() || self.has_pretty_print
    }

    pub fn has_source_map(&self) -> bool {
        self.source.has_source_map()
    }

    pub fn is_mapped(&self) -> bool {
        self.is_original() || self.has_source_map()
    }

    pub fn text_selected(&self) -> bool {
        !self.selection_text.trim().is_empty()
    }
}
