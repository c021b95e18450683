//! Log subscriber setup for resolution runs.
//!
//! What the crate emits:
//!
//! | Level | Span / event | Fields |
//! |-------|--------------|--------|
//! | `debug` | `resolve_file` span, one per driver file | `file` |
//! | `debug` | `resolve_root` span, one per resolver pass | `root` (display name) |
//! | `trace` | `classified`, once per node | `node`, `shape`, `depth` |
//! | `trace` | `cycle, emitting reference` | `identity` (`Name#id`) |
//! | `debug` | skipped undeclared property / empty object shell | `property` or `identity` |
//! | `debug` | `resolved declarations`, at the end of each file | `count` |
//!
//! `TSZ_SHAPE_LOG` takes an `EnvFilter` directive (falling back to
//! `RUST_LOG`). `TSZ_SHAPE_LOG_FORMAT` picks `text` (default), `tree` (one
//! indent level per span, so each pass nests under its file) or `json`.
//!
//! ```bash
//! # Watch every classification of one pass, nested under its file
//! TSZ_SHAPE_LOG=tsz_shape=trace TSZ_SHAPE_LOG_FORMAT=tree cargo test -p tsz-shape test_fixture
//!
//! # Only omissions and per-file counts
//! TSZ_SHAPE_LOG=tsz_shape=debug cargo test -p tsz-shape
//! ```
//!
//! Nothing is installed unless one of the two filter variables is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Parse from the `TSZ_SHAPE_LOG_FORMAT` environment variable.
    fn from_env() -> Self {
        Self::parse(&std::env::var("TSZ_SHAPE_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `TSZ_SHAPE_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("TSZ_SHAPE_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `TSZ_SHAPE_LOG` nor `RUST_LOG` is set, or when
/// a global subscriber is already installed (so test helpers may call it
/// repeatedly). Output goes to stderr.
pub fn init_tracing() {
    let has_shape_log = std::env::var("TSZ_SHAPE_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_shape_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    let _ = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => Registry::default()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
}
