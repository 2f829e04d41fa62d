//! The validate-and-assemble build run.

use pieceworks_core::constants::DEFAULT_BUILD_VERSION;
use pieceworks_core::errors::RegistryError;
use pieceworks_core::{BuildConfig, Registry};

use crate::assemble::assemble;
use crate::export::write_registry;
use crate::load::load_piece_files;
use crate::validate::validate_all;

/// Load, validate, and assemble a registry from per-piece documents.
/// Any blocking validation error fails the run with every violation
/// attached, and nothing is written.
pub fn build_registry(config: &BuildConfig) -> Result<Registry, RegistryError> {
    let files = load_piece_files(&config.pieces_dir)?;
    let report = validate_all(&files);

    for warning in &report.warnings {
        tracing::warn!(piece = %warning.piece, "{}", warning.message);
    }
    if report.is_blocked() {
        return Err(RegistryError::ValidationFailed {
            errors: report.errors,
            warnings: report.warnings,
        });
    }

    let version = config.version.as_deref().unwrap_or(DEFAULT_BUILD_VERSION);
    let source = config
        .source
        .clone()
        .unwrap_or_else(|| config.pieces_dir.display().to_string());
    let registry = assemble(report.pieces, version, &source, None);

    if !config.check_only {
        write_registry(&config.output_file, &registry)?;
        tracing::info!(path = %config.output_file.display(), "registry written");
    }

    Ok(registry)
}
