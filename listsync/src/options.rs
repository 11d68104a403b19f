use alloc::sync::Arc;

use crate::window::VisibleRange;

/// A callback fired when the native view reports a new visible range.
///
/// The raw event is forwarded unmodified, after the window state has been
/// updated.
pub type VisibleChangeCallback = Arc<dyn Fn(VisibleRange)>;

/// A callback fired when the refresh layer requests a refresh or a
/// load-more.
pub type RefreshCallback = Arc<dyn Fn()>;

/// Configuration for a recycler-backed list view.
///
/// This is the closed, typed enumeration of recognized options; defaults
/// match the source component. Cheap to clone: callbacks are stored in
/// `Arc`s.
pub struct ListViewOptions {
    /// How many items the window spans before the first visibility callback
    /// arrives, and after an empty collection becomes non-empty.
    pub initial_list_size: usize,

    /// Overscan: extra items materialized on each side of the visible range
    /// to absorb fast scrolling.
    pub window_size: usize,

    /// Start the window (and the native view) at this index instead of 0.
    pub initial_scroll_index: Option<usize>,

    /// Pixel offset applied with `initial_scroll_index` at mount.
    pub initial_scroll_offset: Option<f32>,

    /// Whether the native item animator runs on structural changes.
    pub item_animator_enabled: bool,

    /// Capability flags forwarded to the refresh layer.
    pub can_refresh: bool,
    pub can_load_more: bool,

    /// Observer for raw visible-range events.
    pub on_visible_change: Option<VisibleChangeCallback>,

    /// Invoked when the refresh layer starts a pull-to-refresh.
    pub on_refresh: Option<RefreshCallback>,

    /// Invoked when the refresh layer hits the load-more threshold.
    pub on_load_more: Option<RefreshCallback>,
}

impl Default for ListViewOptions {
    fn default() -> Self {
        Self {
            initial_list_size: 10,
            window_size: 30,
            initial_scroll_index: None,
            initial_scroll_offset: None,
            item_animator_enabled: true,
            can_refresh: true,
            can_load_more: false,
            on_visible_change: None,
            on_refresh: None,
            on_load_more: None,
        }
    }
}

impl ListViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_list_size(mut self, initial_list_size: usize) -> Self {
        self.initial_list_size = initial_list_size;
        self
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_initial_scroll_index(mut self, index: Option<usize>) -> Self {
        self.initial_scroll_index = index;
        self
    }

    pub fn with_initial_scroll_offset(mut self, offset: Option<f32>) -> Self {
        self.initial_scroll_offset = offset;
        self
    }

    pub fn with_item_animator_enabled(mut self, enabled: bool) -> Self {
        self.item_animator_enabled = enabled;
        self
    }

    pub fn with_can_refresh(mut self, can_refresh: bool) -> Self {
        self.can_refresh = can_refresh;
        self
    }

    pub fn with_can_load_more(mut self, can_load_more: bool) -> Self {
        self.can_load_more = can_load_more;
        self
    }

    pub fn with_on_visible_change(mut self, f: Option<impl Fn(VisibleRange) + 'static>) -> Self {
        self.on_visible_change = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_refresh(mut self, f: Option<impl Fn() + 'static>) -> Self {
        self.on_refresh = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_load_more(mut self, f: Option<impl Fn() + 'static>) -> Self {
        self.on_load_more = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl Clone for ListViewOptions {
    fn clone(&self) -> Self {
        Self {
            initial_list_size: self.initial_list_size,
            window_size: self.window_size,
            initial_scroll_index: self.initial_scroll_index,
            initial_scroll_offset: self.initial_scroll_offset,
            item_animator_enabled: self.item_animator_enabled,
            can_refresh: self.can_refresh,
            can_load_more: self.can_load_more,
            on_visible_change: self.on_visible_change.clone(),
            on_refresh: self.on_refresh.clone(),
            on_load_more: self.on_load_more.clone(),
        }
    }
}

impl core::fmt::Debug for ListViewOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListViewOptions")
            .field("initial_list_size", &self.initial_list_size)
            .field("window_size", &self.window_size)
            .field("initial_scroll_index", &self.initial_scroll_index)
            .field("initial_scroll_offset", &self.initial_scroll_offset)
            .field("item_animator_enabled", &self.item_animator_enabled)
            .field("can_refresh", &self.can_refresh)
            .field("can_load_more", &self.can_load_more)
            .finish_non_exhaustive()
    }
}
