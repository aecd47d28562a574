use std::cell::RefCell;
use std::rc::Rc;

use crate::editor::PointerEvent;

/// Menu kinds of the debugger UI. Each kind is owned by one controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuKind {
    Editor,
    Gutter,
    Tab,
    SourceTree,
    Settings,
}

/// A request to open a context menu at the position of `event`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingMenuRequest {
    pub kind: MenuKind,
    pub event: PointerEvent,
}

impl PendingMenuRequest {
    pub fn new(kind: MenuKind, event: PointerEvent) -> Self {
        Self { kind, event }
    }
}

/// Whether a menu request is waiting to be consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    MenuRequested(MenuKind),
}

/// Single-slot mailbox shared by menu triggers and controllers.
///
/// Holds at most one request; publishing replaces an unconsumed one.
/// Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MenuRequestSlot {
    inner: Rc<RefCell<Option<PendingMenuRequest>>>,
}

impl MenuRequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `request`, returning the request it superseded, if any.
    pub fn publish(&self, request: PendingMenuRequest) -> Option<PendingMenuRequest> {
        let superseded = self.inner.borrow_mut().replace(request);
        if let Some(old) = &superseded {
            tracing::debug!(kind = ?old.kind, "superseded unconsumed menu request");
        }
        superseded
    }

    pub fn state(&self) -> ControllerState {
        match *self.inner.borrow() {
            Some(request) => ControllerState::MenuRequested(request.kind),
            None => ControllerState::Idle,
        }
    }

    pub fn peek(&self) -> Option<PendingMenuRequest> {
        *self.inner.borrow()
    }

    /// Removes and returns the pending request if it is of `kind`.
    /// Requests of other kinds stay in the slot.
    pub fn take_if(&self, kind: MenuKind) -> Option<PendingMenuRequest> {
        let mut slot = self.inner.borrow_mut();
        if slot.is_some_and(|request| request.kind == kind) {
            slot.take()
        } else {
            None
        }
    }
}
