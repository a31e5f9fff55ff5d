//! The instance registry: at most one value per concrete type.
//!
//! Values are keyed by the [`TypeId`] of their concrete (runtime) type and stored
//! type-erased as `Arc<dyn Any + Send + Sync>`. Registration is first-wins: a second
//! value of an already registered type is rejected and the existing entry is kept.
//!
//! Every operation runs under one [`RwLock`]. Mutations (`register*`, `unregister`,
//! `take`, `clear`) hold the write lock for the whole check-and-mutate sequence;
//! lookups and snapshots hold the read lock. Trace callbacks and `tracing` events
//! fire after the lock is released.
//!
//! # Examples
//!
//! ```
//! use instance_registry::InstanceRegistry;
//! use std::sync::Arc;
//!
//! let registry = InstanceRegistry::new();
//! assert!(registry.register("Hello, World!".to_string()));
//!
//! let message: Arc<String> = registry.get().unwrap();
//! assert_eq!(&*message, "Hello, World!");
//! ```

use std::{
    any::{type_name, Any, TypeId},
    collections::{hash_map, HashMap},
    fmt,
    sync::Arc,
};

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::{RegistryError, RegistryEvent};

/// A type-erased registered value, as returned by [`InstanceRegistry::list_all`].
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Type alias for the user-supplied tracing callback.
///
/// The callback receives a reference to a `RegistryEvent` every time the registry is
/// interacted with. It must be thread-safe because registries are shared across threads.
pub type TraceCallback = dyn Fn(&RegistryEvent) + Send + Sync + 'static;

/// Name reported for values registered through [`InstanceRegistry::register_dyn`].
const ERASED_TYPE_NAME: &str = "<erased>";

struct Entry {
    value: Instance,
    type_name: &'static str,
}

/// Thread-safe map from concrete type to its single registered instance.
///
/// Construct one per test with [`InstanceRegistry::new`], or use a static one
/// generated by [`define_registry!`](crate::define_registry) such as [`crate::global`].
#[derive(Default)]
pub struct InstanceRegistry {
    entries: RwLock<HashMap<TypeId, Entry>>,
    trace: RwLock<Option<Arc<TraceCallback>>>,
}

impl InstanceRegistry {
    /// Creates an empty registry with no trace callback.
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------------------------------
    // Tracing
    // ---------------------------------------------------------------------------------------------

    /// Sets a tracing callback that will be invoked on every registry interaction.
    ///
    /// Replaces any previous callback. The callback runs with no registry lock held,
    /// so it may use this or any other registry.
    ///
    /// # Example
    /// ```rust
    /// use instance_registry::InstanceRegistry;
    ///
    /// let registry = InstanceRegistry::new();
    /// registry.set_trace_callback(|event| println!("[registry-trace] {event}"));
    /// ```
    pub fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        *self.trace.write() = Some(Arc::new(callback));
    }

    /// Clears the tracing callback. Registered values are not affected.
    pub fn clear_trace_callback(&self) {
        *self.trace.write() = None;
    }

    fn emit_event(&self, event: &RegistryEvent) {
        let callback = self.trace.read().clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Registration
    // ---------------------------------------------------------------------------------------------

    /// Registers `value` under its type `T`.
    ///
    /// Returns `false` and leaves the registry unchanged if an instance of `T` is
    /// already registered. The first registration wins.
    ///
    /// ```
    /// use instance_registry::InstanceRegistry;
    ///
    /// let registry = InstanceRegistry::new();
    /// assert!(registry.register(42i32));
    /// assert!(!registry.register(7i32));
    /// assert_eq!(*registry.get::<i32>().unwrap(), 42);
    /// ```
    pub fn register<T: Send + Sync + 'static>(&self, value: T) -> bool {
        self.try_register(value).is_ok()
    }

    /// Registers an already shared value. The registry keeps a clone of the `Arc`.
    pub fn register_arc<T: Send + Sync + 'static>(&self, value: Arc<T>) -> bool {
        self.try_register_arc(value).is_ok()
    }

    /// Registers an optional value. `None` is rejected.
    pub fn register_option<T: Send + Sync + 'static>(&self, value: Option<T>) -> bool {
        self.try_register_option(value).is_ok()
    }

    /// Registers a type-erased value under the type it actually holds.
    ///
    /// The key is the `TypeId` of the value behind the `dyn Any`, not of the
    /// `Arc`, so a value registered here is found by `get::<Concrete>()` and
    /// collides with a prior `register::<Concrete>()`.
    pub fn register_dyn(&self, value: Instance) -> bool {
        self.try_register_dyn(value).is_ok()
    }

    /// Like [`register`](Self::register), but reports why a registration was rejected.
    pub fn try_register<T: Send + Sync + 'static>(&self, value: T) -> Result<(), RegistryError> {
        self.try_register_arc(Arc::new(value))
    }

    pub fn try_register_arc<T: Send + Sync + 'static>(
        &self,
        value: Arc<T>,
    ) -> Result<(), RegistryError> {
        self.insert(TypeId::of::<T>(), type_name::<T>(), value)
    }

    /// # Errors
    ///
    /// - [`RegistryError::AbsentValue`] for `None`
    /// - [`RegistryError::AlreadyRegistered`] if `T` already has an instance
    pub fn try_register_option<T: Send + Sync + 'static>(
        &self,
        value: Option<T>,
    ) -> Result<(), RegistryError> {
        match value {
            Some(value) => self.try_register(value),
            None => {
                let type_name = type_name::<T>();
                debug!(type_name, "rejected absent value");
                self.emit_event(&RegistryEvent::Register {
                    type_name,
                    accepted: false,
                });
                Err(RegistryError::AbsentValue)
            }
        }
    }

    pub fn try_register_dyn(&self, value: Instance) -> Result<(), RegistryError> {
        // Deref first: `value.type_id()` would be the id of the `Arc` itself.
        let type_id = (*value).type_id();
        self.insert(type_id, ERASED_TYPE_NAME, value)
    }

    fn insert(
        &self,
        type_id: TypeId,
        type_name: &'static str,
        value: Instance,
    ) -> Result<(), RegistryError> {
        let result = match self.entries.write().entry(type_id) {
            hash_map::Entry::Occupied(existing) => Err(RegistryError::AlreadyRegistered {
                type_name: existing.get().type_name,
            }),
            hash_map::Entry::Vacant(slot) => {
                slot.insert(Entry { value, type_name });
                Ok(())
            }
        };

        debug!(type_name, accepted = result.is_ok(), "register");
        self.emit_event(&RegistryEvent::Register {
            type_name,
            accepted: result.is_ok(),
        });

        result
    }

    // ---------------------------------------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------------------------------------

    fn lookup<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        let value = self
            .entries
            .read()
            .get(&TypeId::of::<T>())
            .map(|entry| Arc::clone(&entry.value))?;

        match value.downcast::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(
                    type_name = type_name::<T>(),
                    "registry entry does not hold its key type"
                );
                None
            }
        }
    }

    /// Retrieves the instance of `T`, or `None` if none is registered.
    ///
    /// ```
    /// use instance_registry::InstanceRegistry;
    /// use std::sync::Arc;
    ///
    /// let registry = InstanceRegistry::new();
    /// registry.register(42i32);
    /// let num: Arc<i32> = registry.get().unwrap();
    /// assert_eq!(*num, 42);
    ///
    /// assert!(registry.get::<String>().is_none());
    /// ```
    pub fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        let value = self.lookup::<T>();

        trace!(type_name = type_name::<T>(), found = value.is_some(), "get");
        self.emit_event(&RegistryEvent::Get {
            type_name: type_name::<T>(),
            found: value.is_some(),
        });

        value
    }

    /// Retrieves an owned clone of the instance of `T`.
    pub fn get_cloned<T: Send + Sync + Clone + 'static>(&self) -> Option<T> {
        self.get::<T>().map(|value| (*value).clone())
    }

    /// Retrieves the instance of `T`, turning a miss into an error for `?` chains.
    ///
    /// # Errors
    ///
    /// [`RegistryError::TypeNotFound`] if no instance of `T` is registered.
    pub fn require<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, RegistryError> {
        self.get::<T>().ok_or(RegistryError::TypeNotFound {
            type_name: type_name::<T>(),
        })
    }

    /// Returns whether `get::<T>()` would return a value.
    pub fn has<T: Send + Sync + 'static>(&self) -> bool {
        let found = self.lookup::<T>().is_some();

        trace!(type_name = type_name::<T>(), found, "contains");
        self.emit_event(&RegistryEvent::Contains {
            type_name: type_name::<T>(),
            found,
        });

        found
    }

    /// Alias of [`has`](Self::has).
    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.has::<T>()
    }

    // ---------------------------------------------------------------------------------------------
    // Removal
    // ---------------------------------------------------------------------------------------------

    fn remove<T: Send + Sync + 'static>(&self) -> Option<Instance> {
        let removed = self
            .entries
            .write()
            .remove(&TypeId::of::<T>())
            .map(|entry| entry.value);

        debug!(
            type_name = type_name::<T>(),
            removed = removed.is_some(),
            "unregister"
        );
        self.emit_event(&RegistryEvent::Unregister {
            type_name: type_name::<T>(),
            removed: removed.is_some(),
        });

        removed
    }

    /// Removes the instance of `T`. Returns `true` if one was removed.
    ///
    /// Instances of other types are untouched, and `Arc`s already handed out
    /// for `T` stay valid.
    pub fn unregister<T: Send + Sync + 'static>(&self) -> bool {
        self.remove::<T>().is_some()
    }

    /// Removes the instance of `T` and hands it back.
    pub fn take<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.remove::<T>()?.downcast::<T>().ok()
    }

    /// Removes every instance. Intended for tests sharing a static registry.
    #[doc(hidden)]
    pub fn clear(&self) {
        self.entries.write().clear();

        debug!("clear");
        self.emit_event(&RegistryEvent::Clear {});
    }

    // ---------------------------------------------------------------------------------------------
    // Enumeration
    // ---------------------------------------------------------------------------------------------

    /// Returns a snapshot of every registered instance, in no particular order.
    ///
    /// The returned `Vec` is owned by the caller and is not affected by later
    /// registrations or removals.
    pub fn list_all(&self) -> Vec<Instance> {
        let snapshot: Vec<Instance> = self
            .entries
            .read()
            .values()
            .map(|entry| Arc::clone(&entry.value))
            .collect();

        trace!(count = snapshot.len(), "list_all");
        self.emit_event(&RegistryEvent::ListAll {
            count: snapshot.len(),
        });

        snapshot
    }

    /// Names of the registered types, in no particular order.
    ///
    /// Values registered through [`register_dyn`](Self::register_dyn) report `"<erased>"`.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.entries
            .read()
            .values()
            .map(|entry| entry.type_name)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceRegistry")
            .field("types", &self.type_names())
            .field("traced", &self.trace.read().is_some())
            .finish()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
