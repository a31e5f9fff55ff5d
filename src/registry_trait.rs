//! Trait giving a static registry the full registry API.
//!
//! Implementors provide a single accessor, [`RegistryApi::registry`], and get every
//! operation through default methods. [`define_registry!`](crate::define_registry)
//! generates such an implementor; it can also be written by hand around any
//! `static LazyLock<InstanceRegistry>`.

use std::sync::Arc;

use crate::{Instance, InstanceRegistry, RegistryError, RegistryEvent};

/// Core trait over a process-lifetime registry.
///
/// Each method forwards to the [`InstanceRegistry`] returned by `registry()`, so
/// semantics (first registration wins, runtime-type keying, snapshot listing) are
/// identical to calling the registry directly.
pub trait RegistryApi {
    /// Access the registry static.
    ///
    /// This method must be implemented to provide access to the registry's storage.
    fn registry() -> &'static InstanceRegistry;

    // ---------------------------------------------------------------------------------------------
    // Tracing
    // ---------------------------------------------------------------------------------------------

    /// Set a tracing callback for registry operations.
    fn set_trace_callback(&self, callback: impl Fn(&RegistryEvent) + Send + Sync + 'static) {
        Self::registry().set_trace_callback(callback);
    }

    /// Clear the tracing callback. Registered values are not affected.
    fn clear_trace_callback(&self) {
        Self::registry().clear_trace_callback();
    }

    // ---------------------------------------------------------------------------------------------
    // Registry
    // ---------------------------------------------------------------------------------------------

    /// Register a value. Returns `false` if its type already has an instance.
    fn register<T: Send + Sync + 'static>(&self, value: T) -> bool {
        Self::registry().register(value)
    }

    fn register_arc<T: Send + Sync + 'static>(&self, value: Arc<T>) -> bool {
        Self::registry().register_arc(value)
    }

    /// Register an optional value. `None` is rejected.
    fn register_option<T: Send + Sync + 'static>(&self, value: Option<T>) -> bool {
        Self::registry().register_option(value)
    }

    /// Register a type-erased value under the concrete type it holds.
    fn register_dyn(&self, value: Instance) -> bool {
        Self::registry().register_dyn(value)
    }

    fn try_register<T: Send + Sync + 'static>(&self, value: T) -> Result<(), RegistryError> {
        Self::registry().try_register(value)
    }

    fn try_register_option<T: Send + Sync + 'static>(
        &self,
        value: Option<T>,
    ) -> Result<(), RegistryError> {
        Self::registry().try_register_option(value)
    }

    /// Retrieve a value, or `None` if its type is not registered.
    fn get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        Self::registry().get()
    }

    fn get_cloned<T: Send + Sync + Clone + 'static>(&self) -> Option<T> {
        Self::registry().get_cloned()
    }

    /// # Errors
    ///
    /// [`RegistryError::TypeNotFound`] if `T` is not registered.
    fn require<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, RegistryError> {
        Self::registry().require()
    }

    fn has<T: Send + Sync + 'static>(&self) -> bool {
        Self::registry().has::<T>()
    }

    fn contains<T: Send + Sync + 'static>(&self) -> bool {
        Self::registry().contains::<T>()
    }

    /// Remove the value of type `T`. Returns `true` if one was removed.
    fn unregister<T: Send + Sync + 'static>(&self) -> bool {
        Self::registry().unregister::<T>()
    }

    fn take<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        Self::registry().take()
    }

    /// Snapshot of all registered values, in no particular order.
    fn list_all(&self) -> Vec<Instance> {
        Self::registry().list_all()
    }

    fn len(&self) -> usize {
        Self::registry().len()
    }

    fn is_empty(&self) -> bool {
        Self::registry().is_empty()
    }

    #[doc(hidden)]
    fn clear(&self) {
        Self::registry().clear();
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::RegistryApi;
    use crate::{InstanceRegistry, RegistryError};

    use serial_test::serial;
    use std::sync::{Arc, LazyLock};

    static REGISTRY: LazyLock<InstanceRegistry> = LazyLock::new(InstanceRegistry::new);

    struct Api;

    impl RegistryApi for Api {
        fn registry() -> &'static InstanceRegistry {
            &REGISTRY
        }
    }

    const API: Api = Api;

    #[test]
    #[serial]
    fn test_register_and_get_primitive() -> Result<(), RegistryError> {
        API.clear();

        API.try_register(42i32)?;

        let num: Arc<i32> = API.require()?;
        assert_eq!(*num, 42);

        Ok(())
    }

    #[test]
    #[serial]
    fn test_forwards_to_the_static() {
        API.clear();

        assert!(API.register("test".to_string()));
        assert!(!API.register("again".to_string()));

        assert_eq!(REGISTRY.len(), 1);
        assert_eq!(&*REGISTRY.get::<String>().unwrap(), "test");
        assert_eq!(API.get_cloned::<String>().unwrap(), "test");
    }

    #[test]
    #[serial]
    fn test_absent_value() {
        API.clear();

        assert_eq!(
            API.try_register_option::<u8>(None),
            Err(RegistryError::AbsentValue)
        );
        assert!(!API.register_option::<u8>(None));
        assert!(API.is_empty());
    }

    #[test]
    #[serial]
    fn test_unregister_and_take() {
        API.clear();

        API.register(1u32);
        API.register_arc(Arc::new(2u64));

        assert!(API.has::<u32>());
        assert!(API.unregister::<u32>());
        assert!(!API.contains::<u32>());
        assert!(!API.unregister::<u32>());

        assert_eq!(*API.take::<u64>().unwrap(), 2);
        assert!(API.is_empty());
    }

    #[test]
    #[serial]
    fn test_register_dyn_and_list_all() {
        API.clear();

        assert!(API.register_dyn(Arc::new(7i8)));
        assert!(!API.register(8i8));

        let all = API.list_all();
        assert_eq!(all.len(), API.len());
        assert_eq!(all[0].downcast_ref::<i8>(), Some(&7));
    }

    #[test]
    #[serial]
    fn test_trace_callback_register_event() {
        API.clear();
        let events = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let events_clone = events.clone();

        API.set_trace_callback(move |e| {
            events_clone.lock().push(format!("{}", e));
        });

        API.register(5u8);
        API.clear_trace_callback();
        API.register(6u16);

        let captured = events.lock();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0], "register { type_name: u8, accepted: true }");
    }
}
