//! # pieceworks-core
//!
//! Foundation crate for the pieceworks registry engine.
//! Defines the piece/action/trigger/property data model, registry documents,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{BuildConfig, ExtractConfig};
pub use errors::{RegistryError, ValidationIssue};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::detail::{ActionDetail, AuthBlock, PieceDetail, TriggerDetail};
pub use types::enums::{AuthType, Category, TriggerKind};
pub use types::piece::{ActionSummary, Piece, Property, TriggerSummary};
pub use types::registry::{Registry, RegistryMetadata};
