use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::event::{DataSourceListener, ListenerId, MutationEvent};

/// Default key type for index-keyed collections.
pub type ItemKey = u64;

/// Derives the render identity of an item.
///
/// Keys should be stable across a single item's lifetime, but may depend on
/// the index for keyless data.
pub type KeyFn<T, K> = Arc<dyn Fn(&T, usize) -> K>;

/// The authoritative, observable, ordered collection behind a list view.
///
/// Sequence order is the only source of truth for index-based addressing.
/// Every mutating call applies the in-memory mutation first, then
/// synchronously notifies all listeners with exactly one [`MutationEvent`],
/// in registration order. `&mut self` on the mutators guarantees that event
/// delivery completes before the next mutation is accepted; callers must
/// confine mutation calls to the UI thread.
///
/// There is no hidden deduplication: calling the same mutation twice emits
/// two events.
pub struct DataSource<T, K = ItemKey> {
    items: Vec<T>,
    key_fn: KeyFn<T, K>,
    listeners: Vec<(ListenerId, Arc<dyn DataSourceListener<T, K>>)>,
    next_listener: u64,
}

impl<T> DataSource<T, ItemKey> {
    /// Creates a collection keyed by index (`ItemKey = u64`).
    ///
    /// Suitable for keyless data; prefer [`DataSource::new`] with a stable
    /// per-item key when items can move or be replaced.
    pub fn new_indexed(items: Vec<T>) -> Self {
        Self::new(items, |_, index| index as u64)
    }
}

impl<T, K> DataSource<T, K> {
    /// Creates a collection from an initial sequence and a key function.
    ///
    /// The key function is mandatory: all dirty-tracking depends on it.
    pub fn new(items: Vec<T>, key_fn: impl Fn(&T, usize) -> K + 'static) -> Self {
        ldebug!(len = items.len(), "DataSource::new");
        Self {
            items,
            key_fn: Arc::new(key_fn),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Derives the key of an arbitrary item/index pair.
    pub fn key_of(&self, item: &T, index: usize) -> K {
        (self.key_fn)(item, index)
    }

    /// Derives the key of the item currently at `index`.
    pub fn key_for(&self, index: usize) -> Option<K> {
        self.items.get(index).map(|item| (self.key_fn)(item, index))
    }

    /// Registers a listener; it observes every subsequent mutation until
    /// removed. Listeners must be removed on view teardown so no
    /// notification reaches a destroyed view.
    pub fn add_listener(&mut self, listener: Arc<dyn DataSourceListener<T, K>>) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, listener));
        ltrace!(id = id.0, listeners = self.listeners.len(), "add_listener");
        id
    }

    /// Removes a previously registered listener. Returns `false` when the id
    /// is unknown (already removed).
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        let removed = self.listeners.len() != before;
        if !removed {
            lwarn!(id = id.0, "remove_listener: unknown listener id");
        }
        removed
    }

    /// Adds `item` at index 0.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
        ltrace!(len = self.items.len(), "prepend");
        self.notify(MutationEvent::PrependOne {
            item: &self.items[0],
        });
    }

    /// Adds `item` at the end.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
        let index = self.items.len() - 1;
        ltrace!(index, "append");
        self.notify(MutationEvent::AppendOne {
            item: &self.items[index],
            index,
        });
    }

    /// Swaps the item at `position` with its predecessor.
    ///
    /// Returns `false` (no mutation, no event) at position 0 or out of
    /// range; the move never wraps or clamps.
    pub fn move_up(&mut self, position: usize) -> bool {
        if position == 0 || position >= self.items.len() {
            return false;
        }
        self.items.swap(position, position - 1);
        ltrace!(position, "move_up");
        self.notify(MutationEvent::MoveUp { position });
        true
    }

    /// Swaps the item at `position` with its successor.
    ///
    /// Returns `false` (no mutation, no event) at the last position or out
    /// of range.
    pub fn move_down(&mut self, position: usize) -> bool {
        if position >= self.items.len().saturating_sub(1) {
            return false;
        }
        self.items.swap(position, position + 1);
        ltrace!(position, "move_down");
        self.notify(MutationEvent::MoveDown { position });
        true
    }

    /// Removes `delete_count` items at `start` (clamped to the available
    /// tail), then inserts `items` at `start`.
    ///
    /// Fails with [`Error::SpliceStartOutOfRange`] when `start > len()`, and
    /// with [`Error::EmptySplice`] when the operation would neither delete
    /// nor insert anything.
    pub fn splice(
        &mut self,
        start: usize,
        delete_count: usize,
        items: impl IntoIterator<Item = T>,
    ) -> Result<()> {
        let len = self.items.len();
        if start > len {
            return Err(Error::SpliceStartOutOfRange { start, len });
        }

        let inserted: Vec<T> = items.into_iter().collect();
        let delete_count = delete_count.min(len - start);
        if delete_count == 0 && inserted.is_empty() {
            return Err(Error::EmptySplice);
        }

        let inserted_len = inserted.len();
        self.items.splice(start..start + delete_count, inserted);
        ltrace!(start, delete_count, inserted = inserted_len, "splice");
        self.notify(MutationEvent::Splice {
            start,
            delete_count,
            inserted: &self.items[start..start + inserted_len],
        });
        Ok(())
    }

    /// Replaces the item at `index` in place; the length is unchanged.
    ///
    /// Fails with [`Error::IndexOutOfRange`] when `index >= len()`.
    pub fn set(&mut self, index: usize, item: T) -> Result<()> {
        let len = self.items.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        self.items[index] = item;
        ltrace!(index, "set");
        self.notify(MutationEvent::Set {
            index,
            item: &self.items[index],
        });
        Ok(())
    }

    /// Emits [`MutationEvent::DirtyAll`]: no structural change, but every
    /// materialized item must re-render.
    pub fn mark_all_dirty(&mut self) {
        ltrace!("mark_all_dirty");
        self.notify(MutationEvent::DirtyAll);
    }

    fn notify(&self, event: MutationEvent<'_, T>) {
        for (_, listener) in &self.listeners {
            listener.on_event(self, &event);
        }
    }
}

impl<T: core::fmt::Debug, K> core::fmt::Debug for DataSource<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DataSource")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
