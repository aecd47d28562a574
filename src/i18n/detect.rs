use super::Locale;

/// Environment variables consulted for the UI language, highest precedence first.
const LOCALE_VARS: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Detects the UI locale from the process environment.
pub fn detect_locale() -> Locale {
    detect_with(|var| std::env::var(var).ok())
}

/// Uses the first non-empty variable; anything other than Ukrainian is English.
pub(super) fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    LOCALE_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.is_empty())
        .map_or(Locale::En, |value| locale_from_tag(&value))
}

/// Parses tags such as `uk_UA.UTF-8` or `uk:en`.
fn locale_from_tag(tag: &str) -> Locale {
    if tag.starts_with("uk") {
        Locale::Uk
    } else {
        Locale::En
    }
}
