use core::cmp;

/// The visible index range reported by the native view, inclusive bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub first: usize,
    pub last: usize,
}

/// The contiguous index range of items to materialize, end exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl RenderRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// Maps a visible range plus an overscan margin onto the range of items to
/// materialize.
///
/// Pure and deterministic; the result always satisfies
/// `0 <= start_index <= end_index <= count`, and growing `overscan` never
/// shrinks the range.
pub fn compute_render_range(
    first_visible: usize,
    last_visible: usize,
    overscan: usize,
    count: usize,
) -> RenderRange {
    let start_index = cmp::min(count, first_visible.saturating_sub(overscan));
    let end_index = cmp::min(count, last_visible.saturating_add(overscan)).max(start_index);
    RenderRange {
        start_index,
        end_index,
    }
}

/// How the window reacted to an insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The collection went from empty to non-empty: there is no valid prior
    /// window to shift, so the window was reset to `[0, initial_list_size]`.
    ResetFromEmpty,
    /// The insertion landed at or before the window start; both bounds were
    /// shifted forward and the window content is unchanged.
    Shifted,
    /// The insertion landed after the window start: the bounds are left
    /// alone, but the window's tail boundary is stale until the next layout
    /// pass. The caller should schedule one deferred re-render.
    StaleTail,
}

/// Tracks the currently visible index range across mutations and scrolls.
///
/// The range value itself is the state; there are no other modes. The
/// machine lives for the component's mount lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowState {
    first_visible: usize,
    last_visible: usize,
    item_count: usize,
    initial_list_size: usize,
}

impl WindowState {
    /// Initial state: `[idx, idx + initial_list_size]` when an initial
    /// scroll index is configured, else `[0, initial_list_size]`.
    ///
    /// `item_count` is the collection size at mount; it is re-synced only on
    /// the empty reset and on [`WindowState::on_data_set_changed`].
    pub fn new(
        initial_scroll_index: Option<usize>,
        initial_list_size: usize,
        item_count: usize,
    ) -> Self {
        let first_visible = initial_scroll_index.unwrap_or(0);
        Self {
            first_visible,
            last_visible: first_visible + initial_list_size,
            item_count,
            initial_list_size,
        }
    }

    pub fn visible(&self) -> VisibleRange {
        VisibleRange {
            first: self.first_visible,
            last: self.last_visible,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Reacts to `notifyItemRangeInserted(position, count)`; `total` is the
    /// collection size after the insertion.
    pub fn on_items_inserted(
        &mut self,
        position: usize,
        count: usize,
        total: usize,
    ) -> InsertOutcome {
        if self.item_count == 0 {
            self.item_count = total;
            self.first_visible = 0;
            self.last_visible = self.initial_list_size;
            ldebug!(total, "window reset from empty");
            return InsertOutcome::ResetFromEmpty;
        }
        if position <= self.first_visible {
            self.first_visible += count;
            self.last_visible += count;
            ltrace!(
                position,
                count,
                first = self.first_visible,
                "window shifted by insertion"
            );
            return InsertOutcome::Shifted;
        }
        ltrace!(position, count, "insertion after window start, tail stale");
        InsertOutcome::StaleTail
    }

    /// Reacts to `notifyItemRangeRemoved`: no bound adjustment is performed;
    /// the native view reports a corrected range via its visibility callback
    /// and the caller forces a re-render in the meantime.
    pub fn on_items_removed(&mut self, _position: usize, _count: usize) {}

    /// Unconditionally overwrites the range with what the native view
    /// reported.
    pub fn on_visible_changed(&mut self, first: usize, last: usize) {
        self.first_visible = first;
        self.last_visible = last;
    }

    /// The backing collection instance was replaced.
    pub fn on_data_set_changed(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    /// A non-animated programmatic scroll: jump to `index` preserving the
    /// window span.
    pub fn on_scroll_to(&mut self, index: usize) {
        let span = self.last_visible.saturating_sub(self.first_visible);
        self.first_visible = index;
        self.last_visible = index + span;
    }

    /// The range of items to materialize for the current window.
    pub fn render_range(&self, overscan: usize, count: usize) -> RenderRange {
        compute_render_range(self.first_visible, self.last_visible, overscan, count)
    }
}
