/// Events emitted by a registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use instance_registry::RegistryEvent;
///
/// let event = RegistryEvent::Register { type_name: "i32", accepted: true };
/// assert_eq!(event.to_string(), "register { type_name: i32, accepted: true }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A registration was attempted.
    Register {
        /// The type name of the value (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
        /// Whether the value was stored; `false` if absent or already registered
        accepted: bool,
    },

    /// A value was requested from the registry.
    Get {
        type_name: &'static str,
        found: bool,
    },

    /// A type existence check was performed.
    Contains {
        type_name: &'static str,
        found: bool,
    },

    /// An unregistration was attempted.
    Unregister {
        type_name: &'static str,
        /// Whether an entry was actually removed
        removed: bool,
    },

    /// A snapshot of all instances was taken.
    ListAll {
        /// Number of instances in the snapshot
        count: usize,
    },

    /// The registry was cleared.
    Clear {},
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Register {
                type_name,
                accepted,
            } => {
                write!(
                    f,
                    "register {{ type_name: {}, accepted: {} }}",
                    type_name, accepted
                )
            }
            RegistryEvent::Get { type_name, found } => {
                write!(f, "get {{ type_name: {}, found: {} }}", type_name, found)
            }
            RegistryEvent::Contains { type_name, found } => {
                write!(
                    f,
                    "contains {{ type_name: {}, found: {} }}",
                    type_name, found
                )
            }
            RegistryEvent::Unregister { type_name, removed } => {
                write!(
                    f,
                    "unregister {{ type_name: {}, removed: {} }}",
                    type_name, removed
                )
            }
            RegistryEvent::ListAll { count } => write!(f, "list_all {{ count: {} }}", count),
            RegistryEvent::Clear {} => write!(f, "Clearing the Registry"),
        }
    }
}
