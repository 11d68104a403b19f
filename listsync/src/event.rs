use crate::source::DataSource;

/// A single collection mutation, delivered to listeners synchronously after
/// the in-memory mutation has been applied.
///
/// Exactly one event is emitted per mutating call, even for multi-item
/// mutations: listeners always observe one coherent event per operation.
/// Payloads borrow from the collection for the duration of the notification.
#[derive(Clone, Copy, Debug)]
pub enum MutationEvent<'a, T> {
    /// Item added at index 0.
    PrependOne { item: &'a T },
    /// Item added at the end; `index` is the new item's index (`len - 1`).
    AppendOne { item: &'a T, index: usize },
    /// Single-item swap with the predecessor at `position - 1`.
    MoveUp { position: usize },
    /// Single-item swap with the successor at `position + 1`.
    MoveDown { position: usize },
    /// General remove+insert at `start`. `delete_count` may be zero or
    /// `inserted` empty, but never both.
    Splice {
        start: usize,
        delete_count: usize,
        inserted: &'a [T],
    },
    /// In-place replacement, no length change. `index` is valid at emission.
    Set { index: usize, item: &'a T },
    /// No structural change; force a full re-render.
    DirtyAll,
}

/// Identifies a registered listener for later removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// The narrow publish/subscribe contract of [`DataSource`].
///
/// Listeners are invoked in registration order, on the mutating thread,
/// before the mutating call returns. The `source` reference allows reading
/// `len()`/`get()`/`key_of()` during notification; the collection cannot be
/// mutated reentrantly (the mutation borrow is still live in the caller).
///
/// A panicking listener propagates to the mutator's caller; the mutation
/// itself is already applied and is not rolled back.
pub trait DataSourceListener<T, K> {
    fn on_event(&self, source: &DataSource<T, K>, event: &MutationEvent<'_, T>);
}
