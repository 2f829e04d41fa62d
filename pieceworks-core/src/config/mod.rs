//! Engine configuration.

mod build_config;
mod extract_config;

pub use build_config::BuildConfig;
pub use extract_config::ExtractConfig;
