//! Data model: pieces, actions, triggers, properties, and registry documents.

pub mod collections;
pub mod detail;
pub mod enums;
pub mod piece;
pub mod registry;
