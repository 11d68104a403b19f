//! Drive a `ListController` against a simulated native view.
//!
//! The recording view stands in for the platform list; visibility callbacks
//! are injected by hand the way a scroll would produce them.
//!
//! Run with: `cargo run -p listsync-adapter --example simulated_view`

use std::sync::Arc;

use listsync::{DataSource, ListViewOptions, VisibleRange};
use listsync_adapter::{ListController, RecordingView, ScrollToIndexOptions};

fn main() {
    let view = Arc::new(RecordingView::new());
    let mut source = DataSource::new_indexed((0..100).map(|i| format!("row {i}")).collect());

    let options = ListViewOptions::new()
        .with_initial_list_size(10)
        .with_window_size(5)
        .with_on_visible_change(Some(|range: VisibleRange| {
            println!("visible range is now [{}, {}]", range.first, range.last);
        }));
    let mut controller: ListController = ListController::new(options, view.clone());
    controller.mount(&mut source);

    // The user scrolls; the native view reports what it sees.
    controller.on_visible_items_change(40, 50);
    print_pass(&controller, &source);
    controller.commit_render();

    // Mutations are translated into structural commands for the view.
    source.prepend("breaking news".to_string());
    source.splice(60, 3, []).expect("valid splice");
    source.set(45, "row 45 (edited)".to_string()).expect("valid index");
    for command in view.take() {
        println!("dispatched {command:?}");
    }
    print_pass(&controller, &source);
    controller.commit_render();

    // An insertion after the window start only becomes visible on the next
    // tick of the UI loop.
    source.append("the end".to_string());
    if controller.tick() {
        print_pass(&controller, &source);
        controller.commit_render();
    }

    controller.scroll_to_index(&source, ScrollToIndexOptions::new(0).with_animated(false));
    println!("after jump: {:?}", controller.visible_range());

    controller.unmount(&mut source);
}

fn print_pass(controller: &ListController, source: &DataSource<String>) {
    let range = controller.render_range(source.len());
    let mut rebuilt = 0;
    controller.render_pass(source, |entry| {
        if entry.needs_update {
            rebuilt += 1;
        }
    });
    println!(
        "render pass over [{}, {}): {} of {} rebuilt",
        range.start_index,
        range.end_index,
        rebuilt,
        range.len()
    );
}
