//! Basic usage example for instance-registry.
//!
//! Demonstrates:
//! - Registering primitives, strings, and custom structs
//! - First-wins registration and the rejection reasons from `try_register`
//! - Retrieving values with `get()` (returns `Option<Arc<T>>`)
//! - Listing, checking and unregistering
//!
//! Run with: `cargo run --example basic_usage`

use instance_registry::define_registry;
use std::sync::Arc;

define_registry!(app);

#[derive(Debug, Clone, PartialEq)]
struct AppConfig {
    name: String,
    version: u32,
    debug_mode: bool,
}

fn main() {
    println!("=== instance-registry: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Register values
    // -------------------------------------------------------------------------
    println!("1. Registering values...");

    app::register(42i32);
    app::register(true);
    app::register("Hello, instance-registry!".to_string());
    app::register(AppConfig {
        name: "MyApp".to_string(),
        version: 1,
        debug_mode: true,
    });

    println!("   Registered {} values", app::len());

    // -------------------------------------------------------------------------
    // 2. Second registration of a type is rejected
    // -------------------------------------------------------------------------
    println!("\n2. Registering i32 again...");

    match app::try_register(7i32) {
        Ok(()) => println!("   Unexpectedly replaced i32"),
        Err(e) => println!("   Rejected (expected): {e}"),
    }
    match app::try_register_option::<u8>(None) {
        Ok(()) => println!("   Unexpectedly stored None"),
        Err(e) => println!("   Rejected (expected): {e}"),
    }

    // -------------------------------------------------------------------------
    // 3. Retrieve values
    // -------------------------------------------------------------------------
    println!("\n3. Retrieving values...");

    let number: Option<Arc<i32>> = app::get();
    let cfg: Option<AppConfig> = app::get_cloned();
    println!("   i32:       {number:?}");
    println!("   AppConfig: {cfg:?}");
    println!("   Vec<u8>:   {:?}", app::get::<Vec<u8>>());

    // -------------------------------------------------------------------------
    // 4. List and unregister
    // -------------------------------------------------------------------------
    println!("\n4. Listing and unregistering...");

    let snapshot = app::list_all();
    println!("   Snapshot holds {} values", snapshot.len());
    println!("   unregister::<bool>() = {}", app::unregister::<bool>());
    println!("   unregister::<bool>() = {}", app::unregister::<bool>());
    println!("   has::<bool>()        = {}", app::has::<bool>());
    println!(
        "   Snapshot still holds {} values, registry holds {}",
        snapshot.len(),
        app::len()
    );

    println!("\n=== Example Complete ===");
}
