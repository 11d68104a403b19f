//! A headless synchronization core for recycler-style native list views.
//!
//! For adapter-level workflows (mount lifecycle, command dispatch, deferred
//! re-renders), see the `listsync-adapter` crate.
//!
//! This crate focuses on the protocol needed to mirror a mutable ordered
//! collection into a native, view-holder-recycling list: an observable
//! [`DataSource`] with a closed vocabulary of mutation events, dirty-key
//! tracking that decides which materialized items must be rebuilt, a
//! translation from mutation events to ordered structural-change commands
//! ([`ViewCommand`]), and a window state machine that keeps the visible index
//! range honest across insertions and removals.
//!
//! It is UI-agnostic. A native/list layer is expected to provide:
//! - item inflation, view-holder recycling, animation, scrolling physics
//! - visible-range callbacks as the user scrolls
//!
//! Everything here is single-threaded by contract: mutation calls, event
//! delivery, and render passes all happen on one logical UI thread, and
//! correctness rests on notification ordering rather than synchronization.
//! No type in this crate is `Send` or `Sync` on purpose.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod command;
mod error;
mod event;
mod key;
mod options;
mod reconcile;
mod source;
mod window;


pub use command::{RefreshState, ViewCommand};
pub use error::{Error, Result};
pub use event::{DataSourceListener, ListenerId, MutationEvent};
pub use options::{ListViewOptions, RefreshCallback, VisibleChangeCallback};
pub use reconcile::{DirtyTracker, Reconciler};
pub use source::{DataSource, ItemKey, KeyFn};
pub use window::{
    InsertOutcome, RenderRange, VisibleRange, WindowState, compute_render_range,
};

#[doc(hidden)]
pub use key::ListKey;
