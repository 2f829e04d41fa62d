//! Shared constants for the registry engine.

/// Namespace prefix every piece `package` identifier derives from.
pub const PACKAGE_PREFIX: &str = "@activepieces/piece-";

/// Version tag stamped into registries assembled from source extraction.
pub const DEFAULT_REGISTRY_VERSION: &str = "3.0";

/// Version tag stamped into registries assembled from per-piece documents.
pub const DEFAULT_BUILD_VERSION: &str = "2.0.0";

/// Provenance label stamped into pieces extracted from connector source.
pub const DEFAULT_SOURCE_LABEL: &str = "github.com/activepieces/activepieces (community/)";

/// Derive the namespaced package identifier for a piece id.
pub fn package_for(id: &str) -> String {
    format!("{PACKAGE_PREFIX}{id}")
}
