use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] ron::Error),

    #[error("no config directory (XDG_CONFIG_HOME, HOME and USERPROFILE are unset)")]
    NoConfigDir,

    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[cfg(feature = "native-menu")]
    #[error("native menu error: {0}")]
    NativeMenu(#[from] muda::Error),

    #[error("native popup menus are not supported on this platform")]
    UnsupportedPlatform,
}

pub type Result<T> = std::result::Result<T, Error>;
