//! Macro for declaring named, process-lifetime registries.

/// Creates a named static registry with a single macro invocation.
///
/// The macro generates a module containing:
/// - a lazily created `static` [`InstanceRegistry`](crate::InstanceRegistry) (hidden)
/// - an `Api` struct implementing [`RegistryApi`](crate::RegistryApi), plus an `API` constant
/// - `registry()`, returning the `&'static InstanceRegistry`
/// - free functions for every registry operation
///
/// Outer attributes (doc comments included) are forwarded to the generated module.
///
/// # Examples
///
/// ```rust
/// use instance_registry::define_registry;
/// use std::sync::Arc;
///
/// define_registry!(app);
///
/// assert!(app::register(42i32));
/// assert!(app::register("Hello".to_string()));
///
/// let num: Arc<i32> = app::get().unwrap();
/// assert_eq!(*num, 42);
/// assert!(app::unregister::<i32>());
/// assert!(!app::has::<i32>());
/// ```
///
/// # Multiple Registries
///
/// Each generated registry is isolated:
///
/// ```rust
/// use instance_registry::define_registry;
///
/// define_registry!(database);
/// define_registry!(cache);
///
/// database::register("db_connection".to_string());
///
/// assert!(database::has::<String>());
/// assert!(!cache::has::<String>());
/// ```
#[macro_export]
macro_rules! define_registry {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[allow(dead_code)]
        pub mod $name {
            use std::sync::{Arc, LazyLock};

            use $crate::{Instance, InstanceRegistry, RegistryApi, RegistryError, RegistryEvent};

            static REGISTRY: LazyLock<InstanceRegistry> = LazyLock::new(InstanceRegistry::new);

            /// Zero-sized handle implementing [`RegistryApi`] for this registry.
            pub struct Api;

            impl RegistryApi for Api {
                fn registry() -> &'static InstanceRegistry {
                    &REGISTRY
                }
            }

            /// Constant for trait-based access to this registry.
            pub const API: Api = Api;

            /// The registry instance behind this module.
            pub fn registry() -> &'static InstanceRegistry {
                &REGISTRY
            }

            /// Register a value. Returns `false` if its type already has an instance.
            pub fn register<T: Send + Sync + 'static>(value: T) -> bool {
                API.register(value)
            }

            pub fn register_arc<T: Send + Sync + 'static>(value: Arc<T>) -> bool {
                API.register_arc(value)
            }

            pub fn register_option<T: Send + Sync + 'static>(value: Option<T>) -> bool {
                API.register_option(value)
            }

            pub fn register_dyn(value: Instance) -> bool {
                API.register_dyn(value)
            }

            pub fn try_register<T: Send + Sync + 'static>(value: T) -> Result<(), RegistryError> {
                API.try_register(value)
            }

            pub fn try_register_option<T: Send + Sync + 'static>(
                value: Option<T>,
            ) -> Result<(), RegistryError> {
                API.try_register_option(value)
            }

            /// Retrieve a value, or `None` if its type is not registered.
            pub fn get<T: Send + Sync + 'static>() -> Option<Arc<T>> {
                API.get()
            }

            pub fn get_cloned<T: Send + Sync + Clone + 'static>() -> Option<T> {
                API.get_cloned()
            }

            pub fn require<T: Send + Sync + 'static>() -> Result<Arc<T>, RegistryError> {
                API.require()
            }

            pub fn has<T: Send + Sync + 'static>() -> bool {
                API.has::<T>()
            }

            pub fn contains<T: Send + Sync + 'static>() -> bool {
                API.contains::<T>()
            }

            /// Remove the value of type `T`. Returns `true` if one was removed.
            pub fn unregister<T: Send + Sync + 'static>() -> bool {
                API.unregister::<T>()
            }

            pub fn take<T: Send + Sync + 'static>() -> Option<Arc<T>> {
                API.take()
            }

            /// Snapshot of all registered values, in no particular order.
            pub fn list_all() -> Vec<Instance> {
                API.list_all()
            }

            pub fn len() -> usize {
                API.len()
            }

            pub fn is_empty() -> bool {
                API.is_empty()
            }

            pub fn set_trace_callback(callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
                API.set_trace_callback(callback)
            }

            pub fn clear_trace_callback() {
                API.clear_trace_callback()
            }

            #[doc(hidden)]
            pub fn clear() {
                API.clear()
            }
        }
    };
}
