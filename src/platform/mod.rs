mod clipboard;
#[cfg(feature = "native-menu")]
mod native_menu;

pub use clipboard::{Clipboard, ClipboardActions, SystemClipboard, copy_to_clipboard};
#[cfg(feature = "native-menu")]
pub use native_menu::{NativeMenuRenderer, NativeParent, build_native_menu};
