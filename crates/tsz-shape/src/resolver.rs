//! Type Graph Resolver
//!
//! Walks a type graph depth-first and emits exactly one builder call per
//! node. Each node is classified once (see [`crate::classifier`]), its
//! structural children are resolved first, and the builder receives the
//! already-built children.
//!
//! # Cycles
//!
//! Object-like nodes are the only way a type graph can loop back on itself.
//! While an object's properties are being expanded its key sits in the
//! pass's [`VisitedSet`]; meeting it again produces
//! [`ShapeBuilder::reference`] instead of a second expansion. The mark is
//! removed once the object is built, so a sibling repeat of a finished
//! object is expanded again in full.
//!
//! Indexable objects are the exception: their mark is pinned until the pass
//! ends, so any later occurrence in the same pass, cyclic or not, becomes a
//! reference.
//!
//! # Omissions
//!
//! Properties without a declaration are skipped, and object types whose
//! symbol has no declaration are emitted as an empty object. Both are
//! silent (logged at `debug`), never errors.

use crate::builder::ShapeBuilder;
use crate::classifier::{ObjectShape, ShapeClass, classify};
use crate::error::{ResolveError, Result};
use crate::limits::MAX_RESOLUTION_DEPTH;
use crate::oracle::TypeOracle;
use crate::types::{IndexKind, LiteralValue, ResolvedProperty, TypeIdentity};
use crate::visited::{DepthResult, VisitedSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace};

/// Resolver configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverOptions {
    /// Maximum nesting depth of one pass.
    pub max_depth: u32,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_RESOLUTION_DEPTH,
        }
    }
}

/// Converts type graph nodes into builder IR.
///
/// The resolver itself holds no per-pass state; every call to
/// [`resolve`](Self::resolve) runs a fresh pass with an empty visited set
/// and freshly numbered type identities.
pub struct TypeGraphResolver<'a, O: TypeOracle + ?Sized> {
    oracle: &'a O,
    options: ResolverOptions,
}

impl<'a, O: TypeOracle + ?Sized> TypeGraphResolver<'a, O> {
    pub fn new(oracle: &'a O) -> Self {
        Self::with_options(oracle, ResolverOptions::default())
    }

    pub fn with_options(oracle: &'a O, options: ResolverOptions) -> Self {
        Self { oracle, options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve `root` in a new pass.
    ///
    /// Lifecycle hooks (`start_resolution`/`end_resolution`) are the
    /// caller's responsibility; see [`crate::driver`].
    pub fn resolve<B: ShapeBuilder>(&self, root: O::Node, builder: &mut B) -> Result<B::Output> {
        let span = debug_span!("resolve_root", root = %self.oracle.display_name(root));
        let _guard = span.enter();

        let mut pass = ResolutionPass {
            oracle: self.oracle,
            builder,
            visited: VisitedSet::with_max_depth(self.options.max_depth),
        };
        let output = pass.resolve_node(root)?;
        pass.visited.finish();
        Ok(output)
    }
}

/// State of one root resolution.
struct ResolutionPass<'a, 'b, O: TypeOracle + ?Sized, B: ShapeBuilder> {
    oracle: &'a O,
    builder: &'b mut B,
    visited: VisitedSet,
}

impl<O: TypeOracle + ?Sized, B: ShapeBuilder> ResolutionPass<'_, '_, O, B> {
    fn resolve_node(&mut self, node: O::Node) -> Result<B::Output> {
        if self.visited.descend() == DepthResult::Exceeded {
            return Err(ResolveError::DepthExceeded {
                name: self.oracle.display_name(node),
                limit: self.visited.max_depth(),
            });
        }
        let result = self.dispatch(node);
        self.visited.ascend();
        result
    }

    fn resolve_all(&mut self, nodes: &[O::Node]) -> Result<Vec<B::Output>> {
        let mut built = Vec::with_capacity(nodes.len());
        for &node in nodes {
            built.push(self.resolve_node(node)?);
        }
        Ok(built)
    }

    fn dispatch(&mut self, node: O::Node) -> Result<B::Output> {
        let class = classify(self.oracle, node)?;
        trace!(
            node = ?node,
            shape = class.label(),
            depth = self.visited.depth(),
            "classified"
        );

        match class {
            ShapeClass::BigIntLiteral(digits) => {
                Ok(self.builder.literal(LiteralValue::BigInt(digits)))
            }
            ShapeClass::Literal(value) => Ok(self.builder.literal(value)),
            ShapeClass::Primitive(name) => Ok(self.builder.primitive(&name)),
            ShapeClass::Array(element) => {
                let element = self.resolve_node(element)?;
                Ok(self.builder.array(element))
            }
            ShapeClass::Tuple(members) => {
                let members = self.resolve_all(&members)?;
                Ok(self.builder.tuple(members))
            }
            ShapeClass::Enum(members) => {
                let mut built = Vec::with_capacity(members.len());
                for member in members {
                    let ty = self.resolve_node(member.ty)?;
                    built.push((member.name, ty));
                }
                Ok(self.builder.enumeration(built))
            }
            ShapeClass::Date => Ok(self.builder.date()),
            ShapeClass::ObjectLike(shape) => self.resolve_object_like(node, shape),
            ShapeClass::Generic => Ok(self.builder.any()),
            ShapeClass::Union(members) => self.resolve_union(members),
            ShapeClass::Intersection(members) => {
                let members = self.resolve_all(&members)?;
                Ok(self.builder.intersection(members))
            }
            ShapeClass::Unsupported => Err(ResolveError::UnsupportedTypeShape {
                name: self.oracle.display_name(node),
            }),
        }
    }

    fn resolve_object_like(
        &mut self,
        node: O::Node,
        shape: ObjectShape<O::Node>,
    ) -> Result<B::Output> {
        let key = self.oracle.type_key(node);
        if let Some(identity) = self.visited.marked(key) {
            let identity = identity.clone();
            trace!(identity = %identity, "cycle, emitting reference");
            return Ok(self.builder.reference(&identity));
        }

        let oracle = self.oracle;
        let identity = self.visited.identity(key, || oracle.display_name(node));

        match shape {
            ObjectShape::Indexable { value, key: kind } => self.resolve_indexable(key, value, kind),
            ObjectShape::Plain => self.resolve_object(node, key, identity),
        }
    }

    fn resolve_indexable(
        &mut self,
        key: u64,
        value: O::Node,
        kind: IndexKind,
    ) -> Result<B::Output> {
        // Stays marked for the rest of the pass.
        self.visited.pin(key);
        let value = self.resolve_node(value)?;
        Ok(self.builder.indexable_object(value, kind))
    }

    fn resolve_object(
        &mut self,
        node: O::Node,
        key: u64,
        identity: TypeIdentity,
    ) -> Result<B::Output> {
        if !self.oracle.has_symbol_declarations(node) {
            debug!(identity = %identity, "object symbol has no declarations, emitting empty object");
            return Ok(self.builder.object(Vec::new(), &identity));
        }

        let mut symbols = self.oracle.own_properties(node);
        symbols.extend(self.oracle.symbol_members(node));

        self.visited.mark(key);
        let properties = self.resolve_properties(&symbols);
        self.visited.unmark(key);

        Ok(self.builder.object(properties?, &identity))
    }

    fn resolve_properties(
        &mut self,
        symbols: &[O::Symbol],
    ) -> Result<Vec<ResolvedProperty<B::Output>>> {
        let oracle = self.oracle;
        let mut properties = Vec::with_capacity(symbols.len());

        for &symbol in symbols {
            if oracle.is_prototype_member(symbol) {
                continue;
            }
            let declared = if oracle.has_declaration(symbol) {
                oracle.declared_type(symbol)
            } else {
                None
            };
            let Some(ty) = declared else {
                debug!(property = %oracle.symbol_name(symbol), "skipping undeclared property");
                continue;
            };
            if oracle.is_object_like(ty) && oracle.is_function_like(ty) {
                continue;
            }
            if oracle.is_get_accessor(symbol) || oracle.has_private_modifier(symbol) {
                continue;
            }

            let maybe_undefined = oracle.is_union(ty)
                && oracle
                    .member_types(ty)
                    .into_iter()
                    .any(|member| !oracle.is_defined(member));

            properties.push(ResolvedProperty {
                name: oracle.symbol_name(symbol),
                is_optional: oracle.is_optional(symbol),
                maybe_undefined,
                resolved_type: self.resolve_node(ty)?,
            });
        }

        Ok(properties)
    }

    fn resolve_union(&mut self, members: Vec<O::Node>) -> Result<B::Output> {
        let oracle = self.oracle;
        let members: Vec<O::Node> = members
            .into_iter()
            .filter(|&member| oracle.is_defined(member))
            .collect();

        if oracle.is_boolean_union(&members) {
            return Ok(self.builder.primitive("boolean"));
        }

        let members = self.resolve_all(&members)?;
        Ok(self.builder.union(members))
    }
}

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod tests;
