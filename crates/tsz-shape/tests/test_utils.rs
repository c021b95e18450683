//! Shared helpers for resolver tests.

use crate::builder::{ShapeBuilder, WithDefinitions};
use crate::graph::{NodeId, SymbolId, TypeGraph};
use crate::oracle::TypeOracle;
use crate::resolver::TypeGraphResolver;
use crate::tree::{Shape, TreeBuilder};
use crate::types::{
    EnumMember, IndexKind, LiteralValue, PseudoBigInt, ResolvedProperty, TypeIdentity,
};

/// Resolve `node` in one inline pass.
pub(crate) fn resolve(graph: &TypeGraph, node: NodeId) -> Shape {
    crate::tracing_config::init_tracing();
    let mut builder = TreeBuilder::inline();
    builder.start_resolution();
    let root = TypeGraphResolver::new(graph)
        .resolve(node, &mut builder)
        .expect("resolution should succeed");
    builder.end_resolution(root)
}

pub(crate) fn prop(name: &str, shape: Shape) -> ResolvedProperty<Shape> {
    ResolvedProperty {
        name: name.to_string(),
        is_optional: false,
        maybe_undefined: false,
        resolved_type: shape,
    }
}

pub(crate) fn optional_prop(name: &str, shape: Shape) -> ResolvedProperty<Shape> {
    ResolvedProperty {
        is_optional: true,
        ..prop(name, shape)
    }
}

pub(crate) fn object(name: &str, properties: Vec<ResolvedProperty<Shape>>) -> Shape {
    Shape::Object {
        name: name.to_string(),
        properties,
    }
}

/// Tree builder that also logs every call it receives.
#[derive(Default)]
pub(crate) struct RecordingBuilder {
    inner: TreeBuilder,
    pub(crate) calls: Vec<String>,
}

impl RecordingBuilder {
    pub(crate) fn hoisting() -> Self {
        Self {
            inner: TreeBuilder::hoisting(),
            calls: Vec::new(),
        }
    }

    /// Calls that construct IR (lifecycle hooks excluded).
    pub(crate) fn constructor_calls(&self) -> Vec<&str> {
        self.calls
            .iter()
            .map(String::as_str)
            .filter(|call| !matches!(*call, "start" | "end" | "end_with_definitions"))
            .collect()
    }
}

impl ShapeBuilder for RecordingBuilder {
    type Output = Shape;

    fn start_resolution(&mut self) {
        self.calls.push("start".to_string());
        self.inner.start_resolution();
    }

    fn end_resolution(&mut self, root: Shape) -> Shape {
        self.calls.push("end".to_string());
        self.inner.end_resolution(root)
    }

    fn end_resolution_with_definitions(&mut self, root: Shape) -> WithDefinitions<Shape> {
        self.calls.push("end_with_definitions".to_string());
        self.inner.end_resolution_with_definitions(root)
    }

    fn any(&mut self) -> Shape {
        self.calls.push("any".to_string());
        self.inner.any()
    }

    fn date(&mut self) -> Shape {
        self.calls.push("date".to_string());
        self.inner.date()
    }

    fn primitive(&mut self, name: &str) -> Shape {
        self.calls.push(format!("primitive:{name}"));
        self.inner.primitive(name)
    }

    fn array(&mut self, element: Shape) -> Shape {
        self.calls.push("array".to_string());
        self.inner.array(element)
    }

    fn tuple(&mut self, members: Vec<Shape>) -> Shape {
        self.calls.push("tuple".to_string());
        self.inner.tuple(members)
    }

    fn union(&mut self, members: Vec<Shape>) -> Shape {
        self.calls.push("union".to_string());
        self.inner.union(members)
    }

    fn intersection(&mut self, members: Vec<Shape>) -> Shape {
        self.calls.push("intersection".to_string());
        self.inner.intersection(members)
    }

    fn enumeration(&mut self, members: Vec<(String, Shape)>) -> Shape {
        self.calls.push("enum".to_string());
        self.inner.enumeration(members)
    }

    fn literal(&mut self, value: LiteralValue) -> Shape {
        self.calls.push(format!("literal:{value}"));
        self.inner.literal(value)
    }

    fn object(&mut self, properties: Vec<ResolvedProperty<Shape>>, identity: &TypeIdentity) -> Shape {
        self.calls.push(format!("object:{identity}"));
        self.inner.object(properties, identity)
    }

    fn reference(&mut self, identity: &TypeIdentity) -> Shape {
        self.calls.push(format!("reference:{identity}"));
        self.inner.reference(identity)
    }

    fn indexable_object(&mut self, value: Shape, key: IndexKind) -> Shape {
        self.calls.push(format!("indexable:{key}"));
        self.inner.indexable_object(value, key)
    }
}

/// Oracle over a [`TypeGraph`] that claims literals, arrays and bigint
/// literals but withholds their payloads.
pub(crate) struct WithheldPayloads<'a>(pub(crate) &'a TypeGraph);

impl TypeOracle for WithheldPayloads<'_> {
    type Node = NodeId;
    type Symbol = SymbolId;

    fn type_key(&self, node: NodeId) -> u64 {
        self.0.type_key(node)
    }

    fn display_name(&self, node: NodeId) -> String {
        self.0.display_name(node)
    }

    fn is_primitive(&self, node: NodeId) -> bool {
        self.0.is_primitive(node)
    }

    fn is_literal(&self, node: NodeId) -> bool {
        self.0.is_literal(node)
    }

    fn is_bigint_literal(&self, node: NodeId) -> bool {
        self.0.is_bigint_literal(node)
    }

    fn is_array(&self, node: NodeId) -> bool {
        self.0.is_array(node)
    }

    fn is_tuple(&self, node: NodeId) -> bool {
        self.0.is_tuple(node)
    }

    fn is_enum(&self, node: NodeId) -> bool {
        self.0.is_enum(node)
    }

    fn is_object_like(&self, node: NodeId) -> bool {
        self.0.is_object_like(node)
    }

    fn is_generic(&self, node: NodeId) -> bool {
        self.0.is_generic(node)
    }

    fn is_union(&self, node: NodeId) -> bool {
        self.0.is_union(node)
    }

    fn is_intersection(&self, node: NodeId) -> bool {
        self.0.is_intersection(node)
    }

    fn is_boolean_union(&self, members: &[NodeId]) -> bool {
        self.0.is_boolean_union(members)
    }

    fn is_defined(&self, node: NodeId) -> bool {
        self.0.is_defined(node)
    }

    fn is_function_like(&self, node: NodeId) -> bool {
        self.0.is_function_like(node)
    }

    fn array_element_type(&self, _node: NodeId) -> Option<NodeId> {
        None
    }

    fn member_types(&self, node: NodeId) -> Vec<NodeId> {
        self.0.member_types(node)
    }

    fn enum_members(&self, node: NodeId) -> Vec<EnumMember<NodeId>> {
        self.0.enum_members(node)
    }

    fn own_properties(&self, node: NodeId) -> Vec<SymbolId> {
        self.0.own_properties(node)
    }

    fn symbol_members(&self, node: NodeId) -> Vec<SymbolId> {
        self.0.symbol_members(node)
    }

    fn has_symbol_declarations(&self, node: NodeId) -> bool {
        self.0.has_symbol_declarations(node)
    }

    fn index_signature(&self, node: NodeId, kind: IndexKind) -> Option<NodeId> {
        self.0.index_signature(node, kind)
    }

    fn literal_value(&self, node: NodeId) -> Option<LiteralValue> {
        self.0.literal_value(node)
    }

    fn intrinsic_name(&self, _node: NodeId) -> Option<String> {
        None
    }

    fn bigint_literal_value(&self, _node: NodeId) -> Option<PseudoBigInt> {
        None
    }

    fn symbol_name(&self, symbol: SymbolId) -> String {
        self.0.symbol_name(symbol)
    }

    fn is_optional(&self, symbol: SymbolId) -> bool {
        self.0.is_optional(symbol)
    }

    fn is_prototype_member(&self, symbol: SymbolId) -> bool {
        self.0.is_prototype_member(symbol)
    }

    fn has_declaration(&self, symbol: SymbolId) -> bool {
        self.0.has_declaration(symbol)
    }

    fn declared_type(&self, symbol: SymbolId) -> Option<NodeId> {
        self.0.declared_type(symbol)
    }

    fn is_get_accessor(&self, symbol: SymbolId) -> bool {
        self.0.is_get_accessor(symbol)
    }

    fn has_private_modifier(&self, symbol: SymbolId) -> bool {
        self.0.has_private_modifier(symbol)
    }
}
