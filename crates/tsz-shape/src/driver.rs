//! Resolution Driver
//!
//! Thin orchestration over the resolver: open one frontend session for a
//! set of files, pick the syntax locations of interest in each file, and run
//! one resolver pass per location with the builder's lifecycle hooks around
//! it.

use crate::builder::ShapeBuilder;
use crate::error::Result;
use crate::oracle::{ProgramSession, TypeFrontend};
use crate::resolver::{ResolverOptions, TypeGraphResolver};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, debug_span};

/// How each pass is finalized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutputMode {
    /// `end_resolution`: definitions are embedded in the root.
    #[default]
    Inline,
    /// `end_resolution_with_definitions`: definitions are returned separately.
    SeparateDefinitions,
}

/// Driver configuration.
///
/// ```json
/// { "outputMode": "separateDefinitions", "resolver": { "maxDepth": 200 } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DriverOptions {
    pub output_mode: OutputMode,
    pub resolver: ResolverOptions,
}

impl DriverOptions {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of resolving one selected location.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedDeclaration<T> {
    pub file: PathBuf,
    pub root: T,
    /// Present only in [`OutputMode::SeparateDefinitions`].
    pub definitions: Option<IndexMap<String, T>>,
}

/// Location selection predicate.
pub type LocationFilter<'f, S> = dyn Fn(&S, &<S as ProgramSession>::Location) -> bool + 'f;

/// Drives resolver passes over the files of one frontend session.
pub struct ResolutionDriver<'a, F: TypeFrontend> {
    frontend: &'a F,
    options: DriverOptions,
}

impl<'a, F: TypeFrontend> ResolutionDriver<'a, F> {
    pub fn new(frontend: &'a F) -> Self {
        Self::with_options(frontend, DriverOptions::default())
    }

    pub fn with_options(frontend: &'a F, options: DriverOptions) -> Self {
        Self { frontend, options }
    }

    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    /// Resolve every selected location of `files`, in file then source order.
    ///
    /// `select` defaults to the session's named type declarations. The first
    /// error aborts the run.
    pub fn resolve_files<B: ShapeBuilder>(
        &self,
        files: &[PathBuf],
        frontend_options: &F::Options,
        builder: &mut B,
        select: Option<&LocationFilter<'_, F::Session>>,
    ) -> Result<Vec<ResolvedDeclaration<B::Output>>> {
        let session = self.frontend.open_session(files, frontend_options)?;
        let resolver = TypeGraphResolver::with_options(&session, self.options.resolver);
        let mut resolved = Vec::new();

        for file in files {
            let span = debug_span!("resolve_file", file = %file.display());
            let _guard = span.enter();
            let before = resolved.len();

            for location in session.syntax_locations(file)? {
                let selected = match select {
                    Some(select) => select(&session, &location),
                    None => session.is_named_type_declaration(&location),
                };
                if !selected {
                    continue;
                }

                let root = session.type_at_location(&location);
                builder.start_resolution();
                let built = resolver.resolve(root, builder)?;
                let (root, definitions) = match self.options.output_mode {
                    OutputMode::Inline => (builder.end_resolution(built), None),
                    OutputMode::SeparateDefinitions => {
                        let finished = builder.end_resolution_with_definitions(built);
                        (finished.root, Some(finished.definitions))
                    }
                };

                resolved.push(ResolvedDeclaration {
                    file: file.clone(),
                    root,
                    definitions,
                });
            }

            debug!(count = resolved.len() - before, "resolved declarations");
        }

        Ok(resolved)
    }
}

/// Fold the definitions of a driver run into one map.
///
/// The first definition of a name wins; later passes re-resolving the same
/// named type produce the same definition.
pub fn merge_definitions<T: Clone>(resolved: &[ResolvedDeclaration<T>]) -> IndexMap<String, T> {
    let mut merged = IndexMap::new();
    for definitions in resolved.iter().filter_map(|decl| decl.definitions.as_ref()) {
        for (name, definition) in definitions {
            merged
                .entry(name.clone())
                .or_insert_with(|| definition.clone());
        }
    }
    merged
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod tests;
