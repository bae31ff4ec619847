use crate::TokenGroup;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Thread-safe mapping from group name to its [`TokenGroup`].
///
/// Holds at most one group per name. Lookup and creation happen under one
/// lock, so racing callers asking for the same new name all receive the same
/// group. Groups are never removed.
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: Mutex<HashMap<String, Arc<TokenGroup>>>,
}

impl GroupRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the group registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<Arc<TokenGroup>> {
        self.groups.lock().get(name).cloned()
    }

    /// Returns the group registered under `name`, creating it with `make` if
    /// it does not exist yet. `make` is called at most once per name.
    pub fn get_or_create<F>(&self, name: &str, make: F) -> Arc<TokenGroup>
    where
        F: FnOnce(&str) -> TokenGroup,
    {
        let mut groups = self.groups.lock();

        if let Some(group) = groups.get(name) {
            return Arc::clone(group);
        }

        let group = Arc::new(make(name));
        groups.insert(name.to_string(), Arc::clone(&group));

        debug!(group = name, seed = %group.seed(), "Created token group");

        group
    }

    /// Reports the number of registered groups.
    pub fn len(&self) -> usize {
        self.groups.lock().len()
    }

    /// Reports whether no group has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.groups.lock().is_empty()
    }
}
