/// All user-facing strings of the editor context menu.
///
/// Each item carries a label and an access key. Access keys must occur in
/// the label (case-insensitively) to be shown as a mnemonic.
pub struct Translations {
    // --- Copy ---
    pub menu_copy_source: &'static str,
    pub menu_copy_source_key: &'static str,
    pub menu_copy_source_url: &'static str,
    pub menu_copy_source_url_key: &'static str,
    pub menu_copy_function: &'static str,
    pub menu_copy_function_key: &'static str,

    // --- Navigation ---
    /// Format string — use `{}` as placeholder for `generated` / `original`.
    pub menu_jump_to_mapped_location: &'static str,
    pub menu_jump_to_mapped_location_key: &'static str,
    pub generated: &'static str,
    pub original: &'static str,
    pub menu_reveal_in_tree: &'static str,
    pub menu_reveal_in_tree_key: &'static str,

    // --- Blackbox ---
    pub menu_blackbox: &'static str,
    pub menu_unblackbox: &'static str,
    pub menu_blackbox_key: &'static str,

    // --- Watch expressions ---
    pub menu_add_watch_expression: &'static str,
    pub menu_add_watch_expression_key: &'static str,
}

impl Translations {
    fn fields(&self) -> [&'static str; 17] {
        [
            self.menu_copy_source,
            self.menu_copy_source_key,
            self.menu_copy_source_url,
            self.menu_copy_source_url_key,
            self.menu_copy_function,
            self.menu_copy_function_key,
            self.menu_jump_to_mapped_location,
            self.menu_jump_to_mapped_location_key,
            self.generated,
            self.original,
            self.menu_reveal_in_tree,
            self.menu_reveal_in_tree_key,
            self.menu_blackbox,
            self.menu_unblackbox,
            self.menu_blackbox_key,
            self.menu_add_watch_expression,
            self.menu_add_watch_expression_key,
        ]
    }

    /// Returns `true` if no string in the table is empty.
    pub fn all_non_empty(&self) -> bool {
        self.fields().iter().all(|s| !s.is_empty())
    }

    /// Label of the jump item, pointing at the generated source when
    /// `to_generated` is set and at the original source otherwise.
    pub fn jump_to_mapped_location(&self, to_generated: bool) -> String {
        let target = if to_generated {
            self.generated
        } else {
            self.original
        };
        format_one(self.menu_jump_to_mapped_location, target)
    }
}

/// Substitutes the first `{}` in `template` with `arg`.
pub fn format_one(template: &str, arg: &str) -> String {
    template.replacen("{}", arg, 1)
}
