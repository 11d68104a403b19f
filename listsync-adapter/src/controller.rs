use alloc::sync::Arc;
use core::cell::{Cell, RefCell};

use listsync::{
    DataSource, DataSourceListener, InsertOutcome, ItemKey, ListViewOptions, ListenerId,
    MutationEvent, Reconciler, RefreshState, RenderRange, ViewCommand, VisibleRange, WindowState,
};

use crate::key::ListViewKey;
use crate::view::{NativeView, ViewProps};

/// Options for [`ListController::scroll_to_index`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToIndexOptions {
    pub index: usize,
    pub animated: bool,
    pub velocity: Option<f32>,
    pub view_position: Option<f32>,
    pub view_offset: Option<f32>,
}

impl ScrollToIndexOptions {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            animated: true,
            velocity: None,
            view_position: None,
            view_offset: None,
        }
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn with_velocity(mut self, velocity: Option<f32>) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_view_position(mut self, view_position: Option<f32>) -> Self {
        self.view_position = view_position;
        self
    }

    pub fn with_view_offset(mut self, view_offset: Option<f32>) -> Self {
        self.view_offset = view_offset;
        self
    }
}

/// One item of a render pass.
#[derive(Debug)]
pub struct RenderEntry<'a, T, K> {
    pub index: usize,
    pub item: &'a T,
    pub key: K,
    /// Whether this item must be force-rebuilt this pass. Items with
    /// `false` may reuse their previous render output (the native layer
    /// owns that reuse).
    pub needs_update: bool,
}

/// The listener half of the controller, shared with the data source.
///
/// Interior mutability instead of `&mut`: the source notifies through an
/// `Arc`, and the native view may hold a second handle for its callbacks.
struct Shared<K> {
    view: Arc<dyn NativeView>,
    reconciler: RefCell<Reconciler<K>>,
    window: RefCell<WindowState>,
    /// Lowered on unmount; a notification or deferred tick arriving after
    /// teardown is a guarded no-op.
    alive: Cell<bool>,
    render_requested: Cell<bool>,
    deferred_render: Cell<bool>,
}

impl<K: ListViewKey> Shared<K> {
    fn route_structural(&self, command: ViewCommand, total: usize) {
        match command {
            ViewCommand::ItemRangeInserted { position, count } => {
                let outcome = self
                    .window
                    .borrow_mut()
                    .on_items_inserted(position, count, total);
                match outcome {
                    InsertOutcome::ResetFromEmpty | InsertOutcome::Shifted => {
                        self.render_requested.set(true);
                    }
                    InsertOutcome::StaleTail => {
                        self.deferred_render.set(true);
                    }
                }
            }
            ViewCommand::ItemRangeRemoved { position, count } => {
                self.window.borrow_mut().on_items_removed(position, count);
                self.render_requested.set(true);
            }
            _ => {}
        }
    }
}

impl<T, K: ListViewKey> DataSourceListener<T, K> for Shared<K> {
    fn on_event(&self, source: &DataSource<T, K>, event: &MutationEvent<'_, T>) {
        if !self.alive.get() {
            return;
        }
        let total = source.len();
        let forced = self
            .reconciler
            .borrow_mut()
            .apply_event(source, event, |command| {
                self.view.dispatch(command);
                self.route_structural(command, total);
            });
        if forced {
            self.render_requested.set(true);
        }
    }
}

/// Mirrors a [`DataSource`] into a recycler-style native list view.
///
/// The controller is the mount-lifetime owner of the synchronization state:
/// it registers itself as the source's listener on [`mount`], translates
/// every mutation into ordered [`ViewCommand`]s, keeps the visible window
/// honest across structural changes, and answers, per rendered item, whether
/// it must be rebuilt this pass.
///
/// A typical embedding drives it like this:
/// - `mount(source)` when the component appears
/// - `on_visible_items_change(first, last)` whenever the native view reports
///   scrolling
/// - when `needs_render()`, run `render_pass(..)` and then `commit_render()`
/// - `tick()` once per UI-loop turn to absorb the deferred stale-window
///   re-render
/// - `unmount(source)` on teardown
///
/// [`mount`]: ListController::mount
pub struct ListController<K = ItemKey> {
    options: ListViewOptions,
    refresh_state: Cell<RefreshState>,
    shared: Arc<Shared<K>>,
    listener: Option<ListenerId>,
}

impl<K: ListViewKey + 'static> ListController<K> {
    pub fn new(options: ListViewOptions, view: Arc<dyn NativeView>) -> Self {
        let window = WindowState::new(
            options.initial_scroll_index,
            options.initial_list_size,
            0,
        );
        Self {
            options,
            refresh_state: Cell::new(RefreshState::Idle),
            shared: Arc::new(Shared {
                view,
                reconciler: RefCell::new(Reconciler::new()),
                window: RefCell::new(window),
                alive: Cell::new(false),
                render_requested: Cell::new(true),
                deferred_render: Cell::new(false),
            }),
            listener: None,
        }
    }

    pub fn options(&self) -> &ListViewOptions {
        &self.options
    }

    /// Attaches to `source` and brings the window up for its current size.
    ///
    /// When an initial scroll index is configured, the native view is told
    /// to jump there without animation, carrying the configured pixel
    /// offset.
    pub fn mount<T>(&mut self, source: &mut DataSource<T, K>) {
        debug_assert!(self.listener.is_none(), "mount called while mounted");
        *self.shared.window.borrow_mut() = WindowState::new(
            self.options.initial_scroll_index,
            self.options.initial_list_size,
            source.len(),
        );
        self.shared.alive.set(true);
        self.shared.render_requested.set(true);
        self.listener = Some(source.add_listener(self.shared.clone()));

        if let Some(index) = self.options.initial_scroll_index {
            self.shared.view.dispatch(ViewCommand::ScrollToIndex {
                animated: false,
                index: index.min(source.len().saturating_sub(1)),
                velocity: None,
                view_position: Some(0.0),
                view_offset: self.options.initial_scroll_offset,
            });
        }
    }

    /// Detaches from `source`. No notification reaches the controller
    /// afterwards, and a deferred re-render that was still pending is
    /// dropped.
    pub fn unmount<T>(&mut self, source: &mut DataSource<T, K>) {
        if let Some(id) = self.listener.take() {
            source.remove_listener(id);
        }
        self.shared.alive.set(false);
        self.shared.deferred_render.set(false);
    }

    /// The backing collection instance was swapped: re-homes the listener
    /// and tells the native view the whole data set changed.
    pub fn replace_source<T>(
        &mut self,
        old: &mut DataSource<T, K>,
        new: &mut DataSource<T, K>,
    ) {
        if let Some(id) = self.listener.take() {
            old.remove_listener(id);
        }
        self.listener = Some(new.add_listener(self.shared.clone()));
        self.shared
            .view
            .dispatch(ViewCommand::DataSetChanged {
                item_count: new.len(),
            });
        self.shared.window.borrow_mut().on_data_set_changed(new.len());
        self.shared.render_requested.set(true);
    }

    /// The native view reported a new visible range: overwrite the window
    /// state, then forward the raw event to the application's observer.
    pub fn on_visible_items_change(&self, first: usize, last: usize) {
        self.shared.window.borrow_mut().on_visible_changed(first, last);
        self.shared.render_requested.set(true);
        if let Some(observer) = &self.options.on_visible_change {
            observer(VisibleRange { first, last });
        }
    }

    /// Advances the controller by one UI-loop turn.
    ///
    /// Consumes the one-shot deferred re-render scheduled when an insertion
    /// lands after the window start. Returns `true` when a re-render became
    /// due this tick. After [`unmount`](ListController::unmount) this is a
    /// no-op.
    pub fn tick(&self) -> bool {
        if !self.shared.alive.get() {
            return false;
        }
        if self.shared.deferred_render.replace(false) {
            self.shared.render_requested.set(true);
            return true;
        }
        false
    }

    /// Whether a render pass is due.
    pub fn needs_render(&self) -> bool {
        self.shared.render_requested.get()
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.shared.window.borrow().visible()
    }

    /// The index range to materialize for a collection of `item_count`
    /// items.
    pub fn render_range(&self, item_count: usize) -> RenderRange {
        self.shared
            .window
            .borrow()
            .render_range(self.options.window_size, item_count)
    }

    /// Drives `f` once per item in the render range, carrying the per-item
    /// update decision.
    ///
    /// `f` must not mutate the controller or the source reentrantly.
    pub fn render_pass<T>(
        &self,
        source: &DataSource<T, K>,
        mut f: impl FnMut(RenderEntry<'_, T, K>),
    ) {
        let range = self.render_range(source.len());
        let reconciler = self.shared.reconciler.borrow();
        let items = &source.items()[range.start_index..range.end_index];
        for (offset, item) in items.iter().enumerate() {
            let index = range.start_index + offset;
            let key = source.key_of(item, index);
            let needs_update = reconciler.needs_update(&key);
            f(RenderEntry {
                index,
                item,
                key,
                needs_update,
            });
        }
    }

    /// Marks the render pass as committed: dirty tracking resets and the
    /// render request is cleared.
    pub fn commit_render(&self) {
        self.shared.reconciler.borrow_mut().commit();
        self.shared.render_requested.set(false);
    }

    /// Asks the native view to scroll to an index, clamped into the
    /// collection.
    ///
    /// A non-animated scroll also moves the window immediately, preserving
    /// its span, so the next render pass materializes the right items
    /// without waiting for the visibility callback.
    pub fn scroll_to_index<T>(
        &self,
        source: &DataSource<T, K>,
        options: ScrollToIndexOptions,
    ) {
        let index = options.index.min(source.len().saturating_sub(1));
        if !options.animated {
            self.shared.window.borrow_mut().on_scroll_to(index);
            self.shared.render_requested.set(true);
        }
        self.shared.view.dispatch(ViewCommand::ScrollToIndex {
            animated: options.animated,
            index,
            velocity: options.velocity,
            view_position: options.view_position,
            view_offset: options.view_offset,
        });
    }

    pub fn scroll_to_end<T>(
        &self,
        source: &DataSource<T, K>,
        animated: bool,
        velocity: Option<f32>,
    ) {
        self.scroll_to_index(
            source,
            ScrollToIndexOptions::new(source.len().saturating_sub(1))
                .with_animated(animated)
                .with_velocity(velocity),
        );
    }

    pub fn complete_refresh(&self) {
        self.shared.view.dispatch(ViewCommand::CompleteRefresh);
    }

    pub fn complete_load_more(&self) {
        self.shared.view.dispatch(ViewCommand::CompleteLoadMore);
    }

    /// The refresh layer started a pull-to-refresh.
    pub fn notify_refresh(&self) {
        if let Some(on_refresh) = &self.options.on_refresh {
            on_refresh();
        }
    }

    /// The refresh layer hit the load-more threshold.
    pub fn notify_load_more(&self) {
        if let Some(on_load_more) = &self.options.on_load_more {
            on_load_more();
        }
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.refresh_state.get()
    }

    pub fn set_refresh_state(&self, state: RefreshState) {
        self.refresh_state.set(state);
    }

    /// The prop/config surface forwarded to the native view.
    pub fn view_props(&self, item_count: usize) -> ViewProps {
        ViewProps {
            item_count,
            initial_list_size: self.options.initial_list_size,
            window_size: self.options.window_size,
            initial_scroll_index: self.options.initial_scroll_index,
            initial_scroll_offset: self.options.initial_scroll_offset,
            item_animator_enabled: self.options.item_animator_enabled,
            can_refresh: self.options.can_refresh,
            can_load_more: self.options.can_load_more,
            refresh_state: self.refresh_state.get(),
        }
    }
}

impl<K> core::fmt::Debug for ListController<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListController")
            .field("options", &self.options)
            .field("mounted", &self.listener.is_some())
            .field("visible", &self.shared.window.borrow().visible())
            .finish_non_exhaustive()
    }
}
