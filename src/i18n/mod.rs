mod detect;
mod en;
mod translations;
mod uk;

use std::sync::{OnceLock, RwLock};

use serde::{Deserialize, Serialize};

pub use translations::{Translations, format_one};

/// Supported UI locales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Uk,
}

impl Locale {
    /// All variants in display order.
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Uk];

    /// Returns the static translation table for this locale.
    pub fn translations(self) -> &'static Translations {
        match self {
            Locale::En => en::translations(),
            Locale::Uk => uk::translations(),
        }
    }

    /// Detects the locale from OS environment variables.
    pub fn detect() -> Self {
        detect::detect_locale()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::detect()
    }
}

static CURRENT: OnceLock<RwLock<&'static Translations>> = OnceLock::new();

fn current_lock() -> &'static RwLock<&'static Translations> {
    CURRENT.get_or_init(|| RwLock::new(Locale::default().translations()))
}

/// Returns the active translation table.
pub fn t() -> &'static Translations {
    *current_lock().read().expect("i18n RwLock poisoned")
}

/// Switches the active locale. Menus built afterwards use the new strings.
pub fn set_locale(locale: Locale) {
    let translations = locale.translations();
    debug_assert!(translations.all_non_empty());
    let mut guard = current_lock().write().expect("i18n RwLock poisoned");
    *guard = translations;
    tracing::debug!(?locale, "switched menu locale");
}
