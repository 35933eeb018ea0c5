// SPDX-License-Identifier: MPL-2.0
//! Permission provider returning a fixed capability set.

use crate::application::port::PermissionProvider;
use crate::config::PermissionsConfig;
use crate::domain::PermissionSet;

/// Serves the same [`PermissionSet`] for every request.
#[derive(Debug, Clone, Default)]
pub struct StaticPermissions {
    set: PermissionSet,
}

impl StaticPermissions {
    #[must_use]
    pub fn new(set: PermissionSet) -> Self {
        Self { set }
    }

    /// Builds the provider from the `[permissions]` config section.
    #[must_use]
    pub fn from_config(config: &PermissionsConfig) -> Self {
        Self::new(config.to_permission_set())
    }
}

impl PermissionProvider for StaticPermissions {
    fn permissions(&self) -> PermissionSet {
        self.set.clone()
    }
}
