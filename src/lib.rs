//! Context menu for the source editor pane of a debugger.
//!
//! A right-click publishes a [`controller::PendingMenuRequest`]; the
//! [`controller::ContextMenuController`] consumes it, resolves the source
//! location under the pointer, builds the menu items and hands them to a
//! [`controller::PopupRenderer`]. Clicks come back through
//! [`controller::ContextMenuController::dispatch`].

pub mod config;
pub mod controller;
pub mod editor;
pub mod error;
pub mod i18n;
pub mod menu;
pub mod platform;
pub mod source;
pub mod symbols;

pub use error::{Error, Result};
