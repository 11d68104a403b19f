use crate::event::MutationEvent;
use crate::key::{DirtyKeySet, ListKey};
use crate::source::DataSource;
use crate::ViewCommand;

/// Coarse/fine dirty tracking for a render pass.
///
/// Either everything is dirty (`all`) or only the items whose keys are in
/// the set. Once set, the state persists until the next render pass consumes
/// it via [`DirtyTracker::commit`]; it never grows across a render boundary.
#[derive(Clone, Debug)]
pub struct DirtyTracker<K> {
    all: bool,
    keys: DirtyKeySet<K>,
}

impl<K: ListKey> DirtyTracker<K> {
    /// Starts all-dirty: the first render pass after construction rebuilds
    /// everything.
    pub fn new() -> Self {
        Self {
            all: true,
            keys: DirtyKeySet::new(),
        }
    }

    pub fn mark_all(&mut self) {
        self.all = true;
    }

    pub fn mark_key(&mut self, key: K) {
        self.keys.insert(key);
    }

    pub fn is_all_dirty(&self) -> bool {
        self.all
    }

    /// Whether the item with `key` must be force-rebuilt this pass.
    pub fn needs_update(&self, key: &K) -> bool {
        self.all || self.keys.contains(key)
    }

    /// Resets after a render pass commits.
    pub fn commit(&mut self) {
        self.all = false;
        self.keys.clear();
    }
}

impl<K: ListKey> Default for DirtyTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Translates mutation events into ordered structural-change commands and
/// dirty-tracking updates.
///
/// Commands are pushed through `emit` in the order the native adapter must
/// observe them; the return value says whether the mutation forces a render
/// pass on its own (insertions instead force or defer a render through the
/// window machine's [`crate::InsertOutcome`]).
#[derive(Clone, Debug)]
pub struct Reconciler<K> {
    dirty: DirtyTracker<K>,
}

impl<K: ListKey> Default for Reconciler<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ListKey> Reconciler<K> {
    pub fn new() -> Self {
        Self {
            dirty: DirtyTracker::new(),
        }
    }

    pub fn dirty(&self) -> &DirtyTracker<K> {
        &self.dirty
    }

    /// Whether the item at `index` with key `key` must re-render this pass.
    ///
    /// Identity-unchanged items otherwise reuse their previous render output;
    /// the native layer owns that reuse, this computes the boolean.
    pub fn needs_update(&self, key: &K) -> bool {
        self.dirty.needs_update(key)
    }

    /// Resets dirty state after a render pass commits.
    pub fn commit(&mut self) {
        self.dirty.commit();
    }

    /// Applies one mutation event: emits the corresponding structural
    /// commands (in order) and updates dirty tracking.
    ///
    /// Returns `true` when the event forces a render pass by itself
    /// (moves, in-place sets, removals, dirty-all). Pure insertions return
    /// `false`: whether they re-render now or on a deferred tick is the
    /// window machine's call.
    pub fn apply_event<T>(
        &mut self,
        source: &DataSource<T, K>,
        event: &MutationEvent<'_, T>,
        mut emit: impl FnMut(ViewCommand),
    ) -> bool {
        match *event {
            MutationEvent::PrependOne { .. } => {
                emit(ViewCommand::ItemRangeInserted {
                    position: 0,
                    count: 1,
                });
                self.dirty.mark_all();
                false
            }
            MutationEvent::AppendOne { index, .. } => {
                emit(ViewCommand::ItemRangeInserted {
                    position: index,
                    count: 1,
                });
                self.dirty.mark_all();
                false
            }
            MutationEvent::MoveUp { position } => {
                emit(ViewCommand::ItemMoved {
                    from: position,
                    to: position - 1,
                });
                self.dirty.mark_all();
                true
            }
            MutationEvent::MoveDown { position } => {
                emit(ViewCommand::ItemMoved {
                    from: position,
                    to: position + 1,
                });
                self.dirty.mark_all();
                true
            }
            MutationEvent::Splice {
                start,
                delete_count,
                inserted,
            } => {
                if delete_count > 0 {
                    emit(ViewCommand::ItemRangeRemoved {
                        position: start,
                        count: delete_count,
                    });
                }
                if !inserted.is_empty() {
                    emit(ViewCommand::ItemRangeInserted {
                        position: start,
                        count: inserted.len(),
                    });
                }
                self.dirty.mark_all();
                // The removal half forces a render; a pure insertion defers
                // to the window machine.
                delete_count > 0
            }
            MutationEvent::Set { index, item } => {
                self.dirty.mark_key(source.key_of(item, index));
                true
            }
            MutationEvent::DirtyAll => {
                self.dirty.mark_all();
                true
            }
        }
    }
}
