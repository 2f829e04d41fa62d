//! Fallback reconciliation: the secondary authoritative dataset and the
//! all-or-nothing merge policy.

mod merger;
mod schema;

pub use merger::apply_fallback;
pub use schema::{FallbackDataset, FallbackEntry, FallbackRecord};
