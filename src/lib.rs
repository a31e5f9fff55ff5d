//! # Instance Registry
//!
//! A thread-safe registry holding at most one instance per type, for programs that
//! want a lightweight service locator without a dependency-injection container.
//!
//! Instances are keyed by their concrete runtime type (`TypeId`) and shared as
//! `Arc<T>`. Registration is first-wins: registering a second value of a type that
//! is already present is rejected and leaves the first in place.
//!
//! ## Quick Start
//!
//! ```rust
//! use instance_registry::InstanceRegistry;
//! use std::sync::Arc;
//!
//! let registry = InstanceRegistry::new();
//!
//! assert!(registry.register("Hello, World!".to_string()));
//! assert!(!registry.register("ignored".to_string()));
//!
//! let message: Arc<String> = registry.get().unwrap();
//! assert_eq!(&*message, "Hello, World!");
//!
//! assert!(registry.unregister::<String>());
//! assert!(!registry.has::<String>());
//! ```
//!
//! ## Process-wide registry
//!
//! [`global`] is a registry living for the whole process, reachable from anywhere:
//!
//! ```rust
//! use instance_registry::global;
//!
//! global::register(7u64);
//! assert_eq!(*global::get::<u64>().unwrap(), 7);
//! ```
//!
//! Further named registries are declared with [`define_registry!`].
//!
//! ## Main Operations
//!
//! - [`InstanceRegistry::register`] - store a value unless its type is already present
//! - [`InstanceRegistry::get`] - retrieve a value as `Option<Arc<T>>`
//! - [`InstanceRegistry::has`] - check whether a type is registered
//! - [`InstanceRegistry::unregister`] - remove the value of a type
//! - [`InstanceRegistry::list_all`] - snapshot of every registered value
//! - [`InstanceRegistry::set_trace_callback`] - observe registry operations

#[macro_use]
mod macros;
mod registry;
mod registry_error;
mod registry_event;
mod registry_trait;

// Re-export the main public API
pub use registry::{Instance, InstanceRegistry, TraceCallback};
pub use registry_error::RegistryError;
pub use registry_event::RegistryEvent;
pub use registry_trait::RegistryApi;

define_registry!(
    /// The process-wide registry.
    ///
    /// Created empty on first use and kept until the process exits. Prefer a
    /// local [`InstanceRegistry`] in tests so they do not share state.
    global
);
