use super::translations::Translations;

static UK: Translations = Translations {
    // --- Copy ---
    menu_copy_source: "Копіювати текст джерела",
    menu_copy_source_key: "К",
    menu_copy_source_url: "Копіювати URI джерела",
    menu_copy_source_url_key: "U",
    menu_copy_function: "Копіювати функцію",
    menu_copy_function_key: "ф",

    // --- Navigation ---
    menu_jump_to_mapped_location: "Перейти до {} розташування",
    menu_jump_to_mapped_location_key: "П",
    generated: "згенерованого",
    original: "оригінального",
    menu_reveal_in_tree: "Показати в дереві",
    menu_reveal_in_tree_key: "д",

    // --- Blackbox ---
    menu_blackbox: "Ігнорувати джерело",
    menu_unblackbox: "Не ігнорувати джерело",
    menu_blackbox_key: "І",

    // --- Watch expressions ---
    menu_add_watch_expression: "Додати вираз спостереження",
    menu_add_watch_expression_key: "в",
};

pub fn translations() -> &'static Translations {
    &UK
}
