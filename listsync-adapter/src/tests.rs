use crate::*;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::Cell;

use listsync::{DataSource, ListViewOptions, RefreshState, ViewCommand, VisibleRange};

fn items(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item-{i}")).collect()
}

fn mounted(n: usize) -> (Arc<RecordingView>, ListController, DataSource<String>) {
    mounted_with(n, ListViewOptions::new())
}

fn mounted_with(
    n: usize,
    options: ListViewOptions,
) -> (Arc<RecordingView>, ListController, DataSource<String>) {
    let view = Arc::new(RecordingView::new());
    let mut source = DataSource::new_indexed(items(n));
    let mut controller = ListController::new(options, view.clone());
    controller.mount(&mut source);
    (view, controller, source)
}

#[test]
fn mutations_dispatch_commands_in_mutation_order() {
    let (view, _controller, mut source) = mounted(5);
    assert!(view.is_empty());

    source.prepend("p".to_string());
    source.append("q".to_string());
    source.splice(1, 2, ["x".to_string()]).unwrap();
    assert!(source.move_down(0));
    source.set(0, "z".to_string()).unwrap();

    assert_eq!(
        view.take(),
        vec![
            ViewCommand::ItemRangeInserted {
                position: 0,
                count: 1
            },
            ViewCommand::ItemRangeInserted {
                position: 6,
                count: 1
            },
            ViewCommand::ItemRangeRemoved {
                position: 1,
                count: 2
            },
            ViewCommand::ItemRangeInserted {
                position: 1,
                count: 1
            },
            ViewCommand::ItemMoved { from: 0, to: 1 },
        ]
    );
}

#[test]
fn mount_with_initial_scroll_index_jumps_without_animation() {
    let (view, controller, _source) = mounted_with(
        100,
        ListViewOptions::new()
            .with_initial_scroll_index(Some(40))
            .with_initial_scroll_offset(Some(12.5)),
    );

    assert_eq!(
        view.take(),
        vec![ViewCommand::ScrollToIndex {
            animated: false,
            index: 40,
            velocity: None,
            view_position: Some(0.0),
            view_offset: Some(12.5),
        }]
    );
    assert_eq!(controller.visible_range(), VisibleRange { first: 40, last: 50 });
}

#[test]
fn empty_to_nonempty_splice_resets_window_to_initial_size() {
    let (view, controller, mut source) = mounted(0);
    controller.commit_render();

    source
        .splice(
            0,
            0,
            ["x".to_string(), "y".to_string(), "z".to_string()],
        )
        .unwrap();

    // No valid prior window to shift: reset, not an incremental +3.
    assert_eq!(controller.visible_range(), VisibleRange { first: 0, last: 10 });
    assert!(controller.needs_render());
    assert_eq!(
        view.take(),
        vec![ViewCommand::ItemRangeInserted {
            position: 0,
            count: 3
        }]
    );
}

#[test]
fn insertion_at_or_before_window_start_shifts_window() {
    let (_view, controller, mut source) = mounted(50);
    controller.on_visible_items_change(20, 30);
    controller.commit_render();

    source.prepend("p".to_string());
    assert_eq!(controller.visible_range(), VisibleRange { first: 21, last: 31 });
    assert!(controller.needs_render());
    assert!(!controller.tick()); // nothing was deferred
}

#[test]
fn insertion_after_window_start_defers_one_rerender() {
    let (_view, controller, mut source) = mounted(50);
    controller.on_visible_items_change(0, 10);
    controller.commit_render();

    source.append("tail".to_string());
    assert_eq!(controller.visible_range(), VisibleRange { first: 0, last: 10 });
    assert!(!controller.needs_render());

    assert!(controller.tick());
    assert!(controller.needs_render());
    assert!(!controller.tick()); // one-shot
}

#[test]
fn rapid_insertions_coalesce_into_one_deferred_rerender() {
    let (_view, controller, mut source) = mounted(50);
    controller.on_visible_items_change(0, 10);
    controller.commit_render();

    source.append("a".to_string());
    source.append("b".to_string());
    source.append("c".to_string());

    assert!(controller.tick());
    assert!(!controller.tick());
}

#[test]
fn removal_forces_rerender_without_adjusting_bounds() {
    let (view, controller, mut source) = mounted(50);
    controller.on_visible_items_change(20, 30);
    controller.commit_render();

    source.splice(5, 10, []).unwrap();
    assert_eq!(controller.visible_range(), VisibleRange { first: 20, last: 30 });
    assert!(controller.needs_render());
    assert_eq!(
        view.take(),
        vec![ViewCommand::ItemRangeRemoved {
            position: 5,
            count: 10
        }]
    );

    // The native view reports the corrected range afterwards.
    controller.on_visible_items_change(15, 25);
    assert_eq!(controller.visible_range(), VisibleRange { first: 15, last: 25 });
}

#[test]
fn unmount_detaches_listener_and_disarms_deferred_rerender() {
    let (view, mut controller, mut source) = mounted(50);
    controller.on_visible_items_change(0, 10);
    controller.commit_render();

    source.append("tail".to_string());
    view.take();

    controller.unmount(&mut source);
    assert!(!controller.tick()); // liveness guard: pending tick is a no-op

    source.append("after".to_string());
    assert!(view.is_empty());
    assert!(!controller.needs_render());
}

#[test]
fn replace_source_rehomes_listener_and_notifies_data_set_changed() {
    let (view, mut controller, mut source) = mounted(3);
    let mut next = DataSource::new_indexed(items(7));

    controller.replace_source(&mut source, &mut next);
    assert_eq!(
        view.take(),
        vec![ViewCommand::DataSetChanged { item_count: 7 }]
    );

    source.append("old".to_string());
    assert!(view.is_empty());

    next.append("new".to_string());
    assert_eq!(
        view.take(),
        vec![ViewCommand::ItemRangeInserted {
            position: 7,
            count: 1
        }]
    );
}

#[test]
fn render_pass_rebuilds_only_dirty_keys() {
    let view: Arc<RecordingView> = Arc::new(RecordingView::new());
    let mut source = DataSource::new(items(5), |_item: &String, index| format!("k{index}"));
    let mut controller: ListController<String> =
        ListController::new(ListViewOptions::new(), view.clone());
    controller.mount(&mut source);

    // First pass after mount rebuilds everything.
    let mut updates = Vec::new();
    controller.render_pass(&source, |entry| updates.push(entry.needs_update));
    assert_eq!(updates, vec![true; 5]);
    controller.commit_render();

    source.set(2, "changed".to_string()).unwrap();
    assert!(view.is_empty()); // no structural command for an in-place set
    assert!(controller.needs_render());

    let mut dirty = Vec::new();
    controller.render_pass(&source, |entry| {
        if entry.needs_update {
            dirty.push(entry.key.clone());
        }
    });
    assert_eq!(dirty, vec!["k2".to_string()]);

    controller.commit_render();
    let mut updates = Vec::new();
    controller.render_pass(&source, |entry| updates.push(entry.needs_update));
    assert_eq!(updates, vec![false; 5]);
}

#[test]
fn render_pass_materializes_the_overscanned_window_only() {
    let (_view, controller, source) = mounted(200);
    controller.on_visible_items_change(80, 90);

    let mut indexes = Vec::new();
    controller.render_pass(&source, |entry| indexes.push(entry.index));
    // Window [80, 90] with the default overscan of 30 on each side.
    assert_eq!(indexes.first().copied(), Some(50));
    assert_eq!(indexes.last().copied(), Some(119));
    assert_eq!(indexes.len(), 70);

    assert_eq!(controller.render_range(200).len(), 70);
    assert_eq!(controller.render_range(100).end_index, 100);
}

#[test]
fn scroll_to_index_clamps_and_moves_window_when_not_animated() {
    let (view, controller, source) = mounted(100);
    controller.on_visible_items_change(5, 17);

    controller.scroll_to_index(&source, ScrollToIndexOptions::new(60).with_animated(false));
    assert_eq!(controller.visible_range(), VisibleRange { first: 60, last: 72 });
    assert_eq!(
        view.take(),
        vec![ViewCommand::ScrollToIndex {
            animated: false,
            index: 60,
            velocity: None,
            view_position: None,
            view_offset: None,
        }]
    );

    // An animated scroll waits for the visibility callback instead.
    controller.scroll_to_index(&source, ScrollToIndexOptions::new(500));
    assert_eq!(controller.visible_range(), VisibleRange { first: 60, last: 72 });
    assert_eq!(
        view.take(),
        vec![ViewCommand::ScrollToIndex {
            animated: true,
            index: 99,
            velocity: None,
            view_position: None,
            view_offset: None,
        }]
    );
}

#[test]
fn scroll_to_end_targets_the_last_item() {
    let (view, controller, source) = mounted(42);
    controller.scroll_to_end(&source, true, Some(2.0));
    assert_eq!(
        view.take(),
        vec![ViewCommand::ScrollToIndex {
            animated: true,
            index: 41,
            velocity: Some(2.0),
            view_position: None,
            view_offset: None,
        }]
    );
}

#[test]
fn refresh_and_load_more_round_trip() {
    let refreshed = Arc::new(Cell::new(false));
    let loaded = Arc::new(Cell::new(false));
    let refreshed_flag = refreshed.clone();
    let loaded_flag = loaded.clone();

    let options = ListViewOptions::new()
        .with_can_load_more(true)
        .with_on_refresh(Some(move || refreshed_flag.set(true)))
        .with_on_load_more(Some(move || loaded_flag.set(true)));
    let (view, controller, _source) = mounted_with(10, options);

    controller.notify_refresh();
    assert!(refreshed.get());
    controller.set_refresh_state(RefreshState::HeaderRefreshing);
    controller.complete_refresh();

    controller.notify_load_more();
    assert!(loaded.get());
    controller.complete_load_more();

    assert_eq!(
        view.take(),
        vec![ViewCommand::CompleteRefresh, ViewCommand::CompleteLoadMore]
    );

    let props = controller.view_props(10);
    assert_eq!(props.item_count, 10);
    assert!(props.can_refresh);
    assert!(props.can_load_more);
    assert_eq!(props.refresh_state, RefreshState::HeaderRefreshing);
    assert_eq!(props.window_size, 30);
    assert_eq!(props.initial_list_size, 10);
}

#[test]
fn visible_change_forwards_raw_event_to_observer() {
    let seen = Arc::new(Cell::new(None));
    let seen_by_observer = seen.clone();
    let options = ListViewOptions::new()
        .with_on_visible_change(Some(move |range| seen_by_observer.set(Some(range))));
    let (_view, controller, _source) = mounted_with(30, options);

    controller.on_visible_items_change(4, 9);
    assert_eq!(seen.get(), Some(VisibleRange { first: 4, last: 9 }));
    assert_eq!(controller.visible_range(), VisibleRange { first: 4, last: 9 });
}
