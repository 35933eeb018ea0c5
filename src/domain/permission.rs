// SPDX-License-Identifier: MPL-2.0
//! Capability flags supplied by the permission provider.

use std::collections::HashMap;

/// Capabilities the viewer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Create,
}

impl Capability {
    /// Name under which the capability appears in a [`PermissionSet`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Capability::Create => "Create",
        }
    }
}

/// Mapping from capability name to a granted flag.
///
/// Names are compared exactly. Anything not present reads as denied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    flags: HashMap<String, bool>,
}

impl PermissionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a capability flag, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, granted: bool) {
        self.flags.insert(name.into(), granted);
    }

    /// Builder form of [`PermissionSet::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, granted: bool) -> Self {
        self.set(name, granted);
        self
    }

    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Capability check decoupled from the permission object's shape.
#[must_use]
pub fn has_capability(set: &PermissionSet, name: &str) -> bool {
    set.allows(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_capability_is_denied() {
        let set = PermissionSet::new();
        assert!(!has_capability(&set, Capability::Create.name()));
    }

    #[test]
    fn granted_capability_is_allowed() {
        let set = PermissionSet::new().with(Capability::Create.name(), true);
        assert!(has_capability(&set, "Create"));
        assert!(!has_capability(&set, "create"));
    }

    #[test]
    fn explicit_false_is_denied() {
        let set: PermissionSet = [("Create", false), ("Delete", true)].into_iter().collect();
        assert!(!has_capability(&set, "Create"));
        assert!(has_capability(&set, "Delete"));
    }
}
