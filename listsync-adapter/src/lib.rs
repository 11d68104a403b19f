//! Adapter workflows for the `listsync` crate.
//!
//! The `listsync` crate is UI-agnostic and focuses on the synchronization
//! protocol itself. This crate provides the component-facing glue a real
//! list binding needs:
//!
//! - [`ListController`]: mount/unmount listener lifecycle, mutation-event
//!   routing, render passes, and the application-facing scroll/refresh API
//! - [`NativeView`]: the fire-and-forget command seam toward the platform
//!   list view
//! - the deferred stale-window re-render, consumed via
//!   [`ListController::tick`] and guarded by a liveness flag so a tick that
//!   fires after unmount is a no-op
//!
//! Like the core, everything here is single-threaded by contract.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod key;
mod view;

#[cfg(test)]
mod tests;

pub use controller::{ListController, RenderEntry, ScrollToIndexOptions};
pub use key::ListViewKey;
pub use view::{NativeView, RecordingView, ViewProps};
