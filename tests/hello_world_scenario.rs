//! The "Hello World 24" walkthrough: register a text builder and a counter,
//! mutate and read them through the registry, then unregister both.

use instance_registry::InstanceRegistry;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct TextBuilder(Mutex<String>);

impl TextBuilder {
    fn append(&self, text: &str) {
        self.0.lock().push_str(text);
    }

    fn content(&self) -> String {
        self.0.lock().clone()
    }
}

struct Counter {
    number: i32,
}

#[test]
fn test_hello_world_24() {
    let registry = InstanceRegistry::new();

    let builder_registered = registry.register(TextBuilder::default());
    let counter_registered = registry.register(Counter { number: 24 });
    assert!(builder_registered && counter_registered);

    let builder: Arc<TextBuilder> = registry.get().unwrap();
    builder.append("Hello World ");

    let content = registry
        .get::<TextBuilder>()
        .map(|b| b.content())
        .unwrap_or_default();
    let number = registry.get::<Counter>().map(|c| c.number).unwrap_or(0);

    assert_eq!(content, "Hello World ");
    assert_eq!(number, 24);
    assert_eq!(format!("{content}{number}"), "Hello World 24");

    assert!(registry.unregister::<TextBuilder>());
    assert!(registry.unregister::<Counter>());

    assert!(registry.get::<TextBuilder>().is_none());
    assert!(registry.get::<Counter>().is_none());
    assert!(registry.is_empty());
}
