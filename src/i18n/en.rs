use super::translations::Translations;

static EN: Translations = Translations {
    // --- Copy ---
    menu_copy_source: "Copy source text",
    menu_copy_source_key: "y",
    menu_copy_source_url: "Copy source URI",
    menu_copy_source_url_key: "u",
    menu_copy_function: "Copy function",
    menu_copy_function_key: "F",

    // --- Navigation ---
    menu_jump_to_mapped_location: "Jump to {} location",
    menu_jump_to_mapped_location_key: "m",
    generated: "generated",
    original: "original",
    menu_reveal_in_tree: "Reveal in tree",
    menu_reveal_in_tree_key: "r",

    // --- Blackbox ---
    menu_blackbox: "Blackbox source",
    menu_unblackbox: "Unblackbox source",
    menu_blackbox_key: "B",

    // --- Watch expressions ---
    menu_add_watch_expression: "Add watch expression",
    menu_add_watch_expression_key: "e",
};

pub fn translations() -> &'static Translations {
    &EN
}
