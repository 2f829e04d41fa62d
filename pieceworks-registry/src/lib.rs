//! # pieceworks-registry
//!
//! Validate-and-assemble layer over per-piece registry documents: loads
//! `{id}.json` files, validates them structurally, folds the survivors
//! into a versioned registry, and exports pretty-printed documents.

pub mod assemble;
pub mod builder;
pub mod export;
pub mod load;
pub mod validate;

pub use assemble::assemble;
pub use builder::build_registry;
pub use load::{load_piece_files, PieceFile};
pub use validate::{validate_all, ValidationReport};
