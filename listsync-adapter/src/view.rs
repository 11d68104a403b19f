use core::cell::RefCell;

use alloc::vec::Vec;

use listsync::{RefreshState, ViewCommand};

/// A handle to the native list view instance.
///
/// Commands are fire-and-forget: the controller awaits no acknowledgment and
/// relies purely on dispatch ordering. Implementations must not call back
/// into the controller synchronously from `dispatch` (queue the work for the
/// next turn of the UI loop instead).
pub trait NativeView {
    fn dispatch(&self, command: ViewCommand);
}

/// A [`NativeView`] that records every dispatched command, in order.
///
/// Useful in tests and headless simulations of the native layer.
#[derive(Debug, Default)]
pub struct RecordingView {
    commands: RefCell<Vec<ViewCommand>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns and clears the recorded commands.
    pub fn take(&self) -> Vec<ViewCommand> {
        core::mem::take(&mut *self.commands.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }
}

impl NativeView for RecordingView {
    fn dispatch(&self, command: ViewCommand) {
        self.commands.borrow_mut().push(command);
    }
}

/// The configuration/prop surface produced for the native view layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewProps {
    pub item_count: usize,
    pub initial_list_size: usize,
    pub window_size: usize,
    pub initial_scroll_index: Option<usize>,
    pub initial_scroll_offset: Option<f32>,
    pub item_animator_enabled: bool,
    pub can_refresh: bool,
    pub can_load_more: bool,
    pub refresh_state: RefreshState,
}
