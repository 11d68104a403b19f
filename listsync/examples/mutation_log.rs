//! Attach a listener to a `DataSource` and log every mutation event.
//!
//! Run with: `cargo run -p listsync --example mutation_log`

use std::sync::Arc;

use listsync::{DataSource, DataSourceListener, MutationEvent};

struct Logger;

impl DataSourceListener<String, u64> for Logger {
    fn on_event(&self, source: &DataSource<String, u64>, event: &MutationEvent<'_, String>) {
        match *event {
            MutationEvent::PrependOne { item } => println!("prepend {item:?}"),
            MutationEvent::AppendOne { item, index } => println!("append {item:?} at {index}"),
            MutationEvent::MoveUp { position } => println!("move {position} up"),
            MutationEvent::MoveDown { position } => println!("move {position} down"),
            MutationEvent::Splice {
                start,
                delete_count,
                inserted,
            } => println!("splice at {start}: -{delete_count} +{}", inserted.len()),
            MutationEvent::Set { index, item } => println!("set {index} = {item:?}"),
            MutationEvent::DirtyAll => println!("dirty-all"),
        }
        println!("  len is now {}", source.len());
    }
}

fn main() {
    let mut source = DataSource::new_indexed(vec![
        "alpha".to_string(),
        "beta".to_string(),
        "gamma".to_string(),
    ]);
    source.add_listener(Arc::new(Logger));

    source.prepend("zero".to_string());
    source.append("delta".to_string());
    source.move_down(1);
    source
        .splice(1, 2, ["replacement".to_string()])
        .expect("valid splice");
    source.set(0, "first".to_string()).expect("valid index");
    source.mark_all_dirty();

    println!("final order: {:?}", source.items());
}
