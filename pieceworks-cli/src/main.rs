//! `pieceworks` — extract connector metadata and build the registry.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pieceworks_core::errors::RegistryError;
use pieceworks_core::{BuildConfig, ExtractConfig, FxHashMap};
use pieceworks_extract::{ExtractionEngine, FallbackDataset};
use pieceworks_registry::{assemble, export};

#[derive(Parser)]
#[command(name = "pieceworks", version, about = "Connector metadata registry tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract piece metadata from a connector source tree.
    Extract {
        /// Root directory containing one subdirectory per connector.
        #[arg(long)]
        source: Option<PathBuf>,
        /// Secondary fallback dataset (JSON).
        #[arg(long)]
        fallback: Option<PathBuf>,
        /// Output directory for pieces/, details/, and the registry.
        #[arg(long)]
        out: Option<PathBuf>,
        /// TOML config file; command-line flags override it.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Worker threads (0 = library default).
        #[arg(long)]
        threads: Option<usize>,
    },
    /// Validate per-piece documents and assemble the registry.
    Build {
        /// Directory of per-piece `{id}.json` documents.
        #[arg(long)]
        pieces: PathBuf,
        /// Output path for the assembled registry.
        #[arg(long, default_value = "registry.json")]
        out: PathBuf,
        /// Validate only; never write output.
        #[arg(long)]
        check_only: bool,
        /// Print per-category piece counts.
        #[arg(long)]
        stats: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Extract {
            source,
            fallback,
            out,
            config,
            threads,
        } => run_extract(source, fallback, out, config, threads),
        Command::Build {
            pieces,
            out,
            check_only,
            stats,
        } => run_build(pieces, out, check_only, stats),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(RegistryError::ValidationFailed { errors, warnings }) => {
            for warning in &warnings {
                eprintln!("warning: {warning}");
            }
            for error in &errors {
                eprintln!("error: {error}");
            }
            eprintln!("validation failed: {} blocking error(s)", errors.len());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_extract(
    source: Option<PathBuf>,
    fallback: Option<PathBuf>,
    out: Option<PathBuf>,
    config: Option<PathBuf>,
    threads: Option<usize>,
) -> Result<(), RegistryError> {
    let mut cfg = match &config {
        Some(path) => ExtractConfig::from_toml_path(path)?,
        None => ExtractConfig::default(),
    };
    // Flags override the config file.
    if source.is_some() {
        cfg.source_dir = source;
    }
    if fallback.is_some() {
        cfg.fallback_path = fallback;
    }
    if out.is_some() {
        cfg.output_dir = out;
    }
    if threads.is_some() {
        cfg.threads = threads;
    }

    let source_dir = cfg.source_dir.clone().ok_or_else(|| RegistryError::Config {
        path: config.unwrap_or_default(),
        message: "source directory is required (--source or source_dir)".into(),
    })?;
    let output_dir = cfg.output_dir.clone().unwrap_or_else(|| PathBuf::from("out"));

    let worker_threads = cfg.effective_threads();
    if worker_threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(worker_threads)
            .build_global()
            .map_err(|e| RegistryError::Config {
                path: PathBuf::new(),
                message: format!("thread pool: {e}"),
            })?;
    }

    let dataset = match &cfg.fallback_path {
        Some(path) => FallbackDataset::load(path)?,
        None => FallbackDataset::default(),
    };
    tracing::info!(entries = dataset.len(), "fallback dataset loaded");

    let engine = ExtractionEngine::new(dataset, cfg.effective_source_label());
    let extracted = engine.extract_all(&source_dir)?;

    let total_props: usize = extracted.iter().map(|e| e.prop_count).sum();
    let pieces: Vec<_> = extracted.iter().map(|e| e.piece.clone()).collect();
    let details: Vec<_> = extracted.iter().map(|e| e.detail.clone()).collect();

    export::write_piece_docs(&output_dir.join("pieces"), &pieces)?;
    export::write_detail_docs(&output_dir.join("details"), &details)?;

    let registry = assemble(
        pieces,
        cfg.effective_version(),
        cfg.effective_source_label(),
        Some(total_props),
    );
    export::write_registry(&output_dir.join("registry.json"), &registry)?;

    println!(
        "extracted {} pieces ({} actions, {} triggers, {} props) -> {}",
        registry.metadata.total_pieces,
        registry.metadata.total_actions,
        registry.metadata.total_triggers,
        total_props,
        output_dir.display()
    );
    Ok(())
}

fn run_build(
    pieces: PathBuf,
    out: PathBuf,
    check_only: bool,
    stats: bool,
) -> Result<(), RegistryError> {
    let cfg = BuildConfig {
        pieces_dir: pieces,
        output_file: out,
        check_only,
        version: None,
        source: None,
    };
    let registry = pieceworks_registry::build_registry(&cfg)?;

    println!(
        "registry v{}: {} pieces, {} actions, {} triggers ({} verified)",
        registry.metadata.version,
        registry.metadata.total_pieces,
        registry.metadata.total_actions,
        registry.metadata.total_triggers,
        registry.metadata.verified_count
    );

    if stats {
        let mut by_category: FxHashMap<&str, usize> = FxHashMap::default();
        for piece in &registry.pieces {
            *by_category.entry(piece.category.code()).or_default() += 1;
        }
        let mut rows: Vec<_> = by_category.into_iter().collect();
        rows.sort();
        for (category, count) in rows {
            println!("  {category}: {count}");
        }
    }
    Ok(())
}
