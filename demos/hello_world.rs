//! Registers a text builder and a counter in the process-wide registry, uses them,
//! and unregisters them again. Prints "Hello World 24".
//!
//! Run with: `cargo run --example hello_world`

use instance_registry::global;
use parking_lot::Mutex;

#[derive(Default)]
struct TextBuilder(Mutex<String>);

struct Counter {
    number: i32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let registered =
        global::register(TextBuilder::default()) & global::register(Counter { number: 24 });

    let appended = global::get::<TextBuilder>()
        .map(|builder| builder.0.lock().push_str("Hello World "))
        .is_some();

    let content = global::get::<TextBuilder>()
        .map(|builder| builder.0.lock().clone())
        .unwrap_or_default();
    let number = global::get::<Counter>().map(|c| c.number).unwrap_or(0);

    println!("{content}{number}");

    let unregistered = global::unregister::<TextBuilder>() & global::unregister::<Counter>();

    println!(
        "{}",
        if registered {
            "Instances successfully registered"
        } else {
            "Error registering instances"
        }
    );
    println!(
        "{}",
        if appended {
            "Text successfully appended"
        } else {
            "Error appending text"
        }
    );
    println!(
        "{}",
        if unregistered {
            "Instances successfully unregistered"
        } else {
            "Error unregistering instances"
        }
    );
}
