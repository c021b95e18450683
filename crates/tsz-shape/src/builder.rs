//! Builder contract: one constructor per IR shape category.
//!
//! A target representation (a schema format, a validator, a documentation
//! tree) implements [`ShapeBuilder`] once and reuses the resolver unchanged.
//! The resolver calls exactly one constructor per type node; arguments that
//! are IR values have already been built by earlier calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use tsz_shape::{ShapeBuilder, TypeGraphResolver};
//!
//! let mut builder = MySchemaBuilder::default();
//! builder.start_resolution();
//! let root = TypeGraphResolver::new(&session).resolve(node, &mut builder)?;
//! let schema = builder.end_resolution(root);
//! ```

use crate::types::{IndexKind, LiteralValue, ResolvedProperty, TypeIdentity};
use indexmap::IndexMap;

/// Root IR paired with the named definitions collected during its pass.
#[derive(Clone, Debug, PartialEq)]
pub struct WithDefinitions<T> {
    pub root: T,
    pub definitions: IndexMap<String, T>,
}

/// Construction interface for a target representation.
pub trait ShapeBuilder {
    /// The IR value produced by every constructor.
    type Output;

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Called before each resolution pass. Reset any per-pass accumulation.
    fn start_resolution(&mut self);

    /// Finalize a pass, embedding collected definitions into the root.
    fn end_resolution(&mut self, root: Self::Output) -> Self::Output;

    /// Finalize a pass, returning collected definitions separately so the
    /// caller can merge them across passes.
    fn end_resolution_with_definitions(
        &mut self,
        root: Self::Output,
    ) -> WithDefinitions<Self::Output>;

    // =========================================================================
    // Constructors
    // =========================================================================

    fn any(&mut self) -> Self::Output;

    fn date(&mut self) -> Self::Output;

    fn primitive(&mut self, name: &str) -> Self::Output;

    fn array(&mut self, element: Self::Output) -> Self::Output;

    /// Members in declaration order.
    fn tuple(&mut self, members: Vec<Self::Output>) -> Self::Output;

    /// Member order carries no meaning but is deterministic for a given graph.
    fn union(&mut self, members: Vec<Self::Output>) -> Self::Output;

    /// Members in declaration order; order is significant.
    fn intersection(&mut self, members: Vec<Self::Output>) -> Self::Output;

    /// `(member name, member type)` in declaration order.
    fn enumeration(&mut self, members: Vec<(String, Self::Output)>) -> Self::Output;

    fn literal(&mut self, value: LiteralValue) -> Self::Output;

    fn object(
        &mut self,
        properties: Vec<ResolvedProperty<Self::Output>>,
        identity: &TypeIdentity,
    ) -> Self::Output;

    /// Back-reference to an object still being expanded in this pass.
    fn reference(&mut self, identity: &TypeIdentity) -> Self::Output;

    fn indexable_object(&mut self, value: Self::Output, key: IndexKind) -> Self::Output;
}
