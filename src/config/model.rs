use serde::{Deserialize, Serialize};

use crate::i18n::{self, Locale};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Menu language. `None` follows the OS locale.
    pub language: Option<Locale>,
    pub menu: MenuConfig,
}

impl AppConfig {
    /// Switches the global locale if one is configured.
    pub fn apply_language(&self) {
        if let Some(locale) = self.language {
            i18n::set_locale(locale);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Underline access keys in native menus.
    pub show_access_keys: bool,
    /// Highlight a function's lines before copying it.
    pub flash_copied_function: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            show_access_keys: true,
            flash_copied_function: true,
        }
    }
}
