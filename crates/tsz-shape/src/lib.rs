//! Type graph to IR resolution for the tsz compiler.
//!
//! This crate converts a statically-resolved type graph into any
//! caller-defined intermediate representation:
//!
//! - [`TypeOracle`]: read-only queries over the type graph, implemented by a
//!   frontend (or by the in-memory [`graph::TypeGraph`])
//! - [`ShapeBuilder`]: one constructor per IR shape, implemented once per
//!   target representation
//! - [`TypeGraphResolver`]: classifies each node, recurses into its
//!   children, cuts cycles, and emits one builder call per node
//! - [`ResolutionDriver`]: runs one resolver pass per selected declaration
//!   across a set of files

pub mod builder;
pub mod classifier;
pub mod driver;
pub mod error;
pub mod graph;
pub mod limits;
pub mod oracle;
pub mod resolver;
pub mod tracing_config;
pub mod tree;
pub mod types;
pub mod visited;

pub use builder::{ShapeBuilder, WithDefinitions};
pub use classifier::{ObjectShape, ShapeClass, classify};
pub use driver::{
    DriverOptions, LocationFilter, OutputMode, ResolutionDriver, ResolvedDeclaration,
    merge_definitions,
};
pub use error::{ResolveError, Result};
pub use oracle::{ProgramSession, TypeFrontend, TypeOracle};
pub use resolver::{ResolverOptions, TypeGraphResolver};
pub use types::{
    DATE_TYPE_NAME, EnumMember, IndexKind, LiteralValue, PseudoBigInt, ResolvedProperty,
    TypeIdentity,
};
pub use visited::VisitedSet;

#[cfg(test)]
#[path = "../tests/test_utils.rs"]
pub(crate) mod test_utils;

#[cfg(test)]
#[path = "../tests/scenario_tests.rs"]
mod scenario_tests;
