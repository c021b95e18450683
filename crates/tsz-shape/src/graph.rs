//! In-memory type graph.
//!
//! [`TypeGraph`] is a hand-built type graph that answers every
//! [`TypeOracle`] query, so the resolver can be driven without a compiler
//! frontend. It also implements [`ProgramSession`] over a list of named
//! declarations grouped by file, and [`GraphFrontend`] opens sessions over
//! it the way a real frontend would.
//!
//! Graphs are plain data and round-trip through JSON, which is how fixture
//! snapshots are stored.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut graph = TypeGraph::new();
//! let number = graph.number();
//! let node = graph.object("Node");
//! graph.add_property(node, Property::new("value", number));
//! graph.add_property(node, Property::new("next", node).optional());
//! graph.declare("list.ts", "Node", DeclarationKind::TypeAlias, node);
//! ```
//!
//! Like the frontend it stands in for, the graph reports overlapping
//! predicates: arrays, tuples and functions are object-like, and enums are
//! unions of their member literals.

use crate::error::{ResolveError, Result};
use crate::oracle::{ProgramSession, TypeFrontend, TypeOracle};
use crate::types::{DATE_TYPE_NAME, EnumMember, IndexKind, LiteralValue, PseudoBigInt};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// =============================================================================
// Handles
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclarationId(pub u32);

// =============================================================================
// Node and symbol data
// =============================================================================

/// One type node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NodeData {
    Primitive {
        name: String,
    },
    Undefined,
    /// String or number literal.
    Literal {
        value: LiteralValue,
    },
    BooleanLiteral {
        value: bool,
    },
    BigIntLiteral {
        value: PseudoBigInt,
    },
    Array {
        element: NodeId,
    },
    Tuple {
        elements: Vec<NodeId>,
    },
    Enum {
        name: String,
        members: Vec<EnumMember<NodeId>>,
    },
    #[serde(rename_all = "camelCase")]
    Object {
        name: String,
        #[serde(default)]
        properties: Vec<SymbolId>,
        #[serde(default)]
        statics: Vec<SymbolId>,
        #[serde(default = "default_true")]
        declared: bool,
        #[serde(default)]
        string_index: Option<NodeId>,
        #[serde(default)]
        number_index: Option<NodeId>,
    },
    Function {
        name: String,
    },
    Generic {
        name: String,
    },
    Union {
        members: Vec<NodeId>,
    },
    Intersection {
        members: Vec<NodeId>,
    },
    /// Answers no classification predicate (e.g. `symbol`, conditional types).
    Opaque {
        name: String,
    },
}

fn default_true() -> bool {
    true
}

/// Children that `display_name` and the resolver reach without passing
/// through an object's members.
fn structural_children(node: &NodeData) -> Vec<NodeId> {
    match node {
        NodeData::Array { element } => vec![*element],
        NodeData::Tuple { elements } => elements.clone(),
        NodeData::Union { members } | NodeData::Intersection { members } => members.clone(),
        NodeData::Enum { members, .. } => members.iter().map(|member| member.ty).collect(),
        _ => Vec::new(),
    }
}

fn invalid(reason: String) -> ResolveError {
    ResolveError::InvalidSnapshot { reason }
}

/// A property symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolData {
    pub name: String,
    /// Type at the declaration site; `None` when the symbol has no declaration.
    pub declared_type: Option<NodeId>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub prototype: bool,
    #[serde(default)]
    pub get_accessor: bool,
    #[serde(default)]
    pub private: bool,
}

/// Fluent constructor for [`SymbolData`].
#[derive(Clone, Debug)]
pub struct Property(SymbolData);

impl Property {
    pub fn new(name: impl Into<String>, ty: NodeId) -> Self {
        Self(SymbolData {
            name: name.into(),
            declared_type: Some(ty),
            optional: false,
            prototype: false,
            get_accessor: false,
            private: false,
        })
    }

    /// A symbol with no declaration (e.g. synthesized by a mapped type).
    pub fn undeclared(name: impl Into<String>) -> Self {
        Self(SymbolData {
            name: name.into(),
            declared_type: None,
            optional: false,
            prototype: false,
            get_accessor: false,
            private: false,
        })
    }

    pub fn optional(mut self) -> Self {
        self.0.optional = true;
        self
    }

    pub fn prototype(mut self) -> Self {
        self.0.prototype = true;
        self
    }

    pub fn getter(mut self) -> Self {
        self.0.get_accessor = true;
        self
    }

    pub fn private(mut self) -> Self {
        self.0.private = true;
        self
    }
}

// =============================================================================
// Declarations
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclarationKind {
    TypeAlias,
    Interface,
    Class,
    Enum,
    Variable,
}

impl DeclarationKind {
    pub fn is_named_type(self) -> bool {
        !matches!(self, DeclarationKind::Variable)
    }
}

/// A named declaration in a source file; the graph's syntax locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub file: PathBuf,
    pub name: String,
    pub kind: DeclarationKind,
    pub ty: NodeId,
}

// =============================================================================
// TypeGraph
// =============================================================================

/// Hand-built type graph implementing the oracle contract.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TypeGraph {
    nodes: Vec<NodeData>,
    symbols: Vec<SymbolData>,
    #[serde(default)]
    declarations: Vec<Declaration>,
    /// Files visible to the session; `None` means every file.
    #[serde(skip)]
    scope: Option<FxHashSet<PathBuf>>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a graph snapshot.
    ///
    /// Every id must point inside the snapshot, and any cycle must pass
    /// through an object node.
    pub fn from_json(json: &str) -> Result<Self> {
        let graph: Self = serde_json::from_str(json)?;
        graph.validate()?;
        Ok(graph)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0 as usize]
    }

    pub fn symbol(&self, id: SymbolId) -> &SymbolData {
        &self.symbols[id.0 as usize]
    }

    pub fn declaration(&self, id: DeclarationId) -> &Declaration {
        &self.declarations[id.0 as usize]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every file mentioned by a declaration, in first-declared order.
    pub fn files(&self) -> Vec<PathBuf> {
        let mut seen = FxHashSet::default();
        self.declarations
            .iter()
            .filter(|decl| seen.insert(decl.file.clone()))
            .map(|decl| decl.file.clone())
            .collect()
    }

    /// Restrict the graph's visible files.
    pub fn scoped(mut self, files: &[PathBuf]) -> Self {
        self.scope = Some(files.iter().cloned().collect());
        self
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    pub fn add(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(data);
        id
    }

    pub fn primitive(&mut self, name: impl Into<String>) -> NodeId {
        self.add(NodeData::Primitive { name: name.into() })
    }

    pub fn string(&mut self) -> NodeId {
        self.primitive("string")
    }

    pub fn number(&mut self) -> NodeId {
        self.primitive("number")
    }

    pub fn boolean(&mut self) -> NodeId {
        self.primitive("boolean")
    }

    pub fn undefined(&mut self) -> NodeId {
        self.add(NodeData::Undefined)
    }

    pub fn string_literal(&mut self, value: impl Into<String>) -> NodeId {
        self.add(NodeData::Literal {
            value: LiteralValue::String(value.into()),
        })
    }

    pub fn number_literal(&mut self, value: f64) -> NodeId {
        self.add(NodeData::Literal {
            value: LiteralValue::Number(value),
        })
    }

    pub fn boolean_literal(&mut self, value: bool) -> NodeId {
        self.add(NodeData::BooleanLiteral { value })
    }

    pub fn bigint_literal(&mut self, negative: bool, base10_value: &str) -> NodeId {
        self.add(NodeData::BigIntLiteral {
            value: PseudoBigInt::new(negative, base10_value),
        })
    }

    pub fn array(&mut self, element: NodeId) -> NodeId {
        self.add(NodeData::Array { element })
    }

    pub fn tuple(&mut self, elements: Vec<NodeId>) -> NodeId {
        self.add(NodeData::Tuple { elements })
    }

    pub fn union(&mut self, members: Vec<NodeId>) -> NodeId {
        self.add(NodeData::Union { members })
    }

    pub fn intersection(&mut self, members: Vec<NodeId>) -> NodeId {
        self.add(NodeData::Intersection { members })
    }

    pub fn enumeration(&mut self, name: impl Into<String>, members: Vec<(&str, NodeId)>) -> NodeId {
        let members = members
            .into_iter()
            .map(|(name, ty)| EnumMember {
                name: name.to_string(),
                ty,
            })
            .collect();
        self.add(NodeData::Enum {
            name: name.into(),
            members,
        })
    }

    pub fn generic(&mut self, name: impl Into<String>) -> NodeId {
        self.add(NodeData::Generic { name: name.into() })
    }

    pub fn function(&mut self, name: impl Into<String>) -> NodeId {
        self.add(NodeData::Function { name: name.into() })
    }

    pub fn opaque(&mut self, name: impl Into<String>) -> NodeId {
        self.add(NodeData::Opaque { name: name.into() })
    }

    /// Declared object type with no members yet. Members may refer back to it.
    pub fn object(&mut self, name: impl Into<String>) -> NodeId {
        self.add(NodeData::Object {
            name: name.into(),
            properties: Vec::new(),
            statics: Vec::new(),
            declared: true,
            string_index: None,
            number_index: None,
        })
    }

    /// Object type whose backing symbol has no declarations.
    pub fn synthetic_object(&mut self, name: impl Into<String>) -> NodeId {
        let id = self.object(name);
        if let NodeData::Object { declared, .. } = &mut self.nodes[id.0 as usize] {
            *declared = false;
        }
        id
    }

    /// The built-in `Date` interface.
    pub fn date(&mut self) -> NodeId {
        let date = self.object(DATE_TYPE_NAME);
        let get_time = self.function("() => number");
        self.add_property(date, Property::new("getTime", get_time).prototype());
        date
    }

    /// Add an instance property. Returns `None`, adding nothing, when
    /// `object` is not an object node.
    ///
    /// # Debug panics
    ///
    /// Panics in debug builds when `object` is not an object node.
    pub fn add_property(&mut self, object: NodeId, property: Property) -> Option<SymbolId> {
        let symbol = SymbolId(self.symbols.len() as u32);
        let Some(NodeData::Object { properties, .. }) = self.object_mut(object) else {
            return None;
        };
        properties.push(symbol);
        self.symbols.push(property.0);
        Some(symbol)
    }

    /// Static or exported member of the object's backing symbol.
    ///
    /// # Debug panics
    ///
    /// Panics in debug builds when `object` is not an object node.
    pub fn add_static_member(&mut self, object: NodeId, property: Property) -> Option<SymbolId> {
        let symbol = SymbolId(self.symbols.len() as u32);
        let Some(NodeData::Object { statics, .. }) = self.object_mut(object) else {
            return None;
        };
        statics.push(symbol);
        self.symbols.push(property.0);
        Some(symbol)
    }

    /// # Debug panics
    ///
    /// Panics in debug builds when `object` is not an object node.
    pub fn set_index_signature(&mut self, object: NodeId, kind: IndexKind, value: NodeId) {
        if let Some(NodeData::Object {
            string_index,
            number_index,
            ..
        }) = self.object_mut(object)
        {
            match kind {
                IndexKind::String => *string_index = Some(value),
                IndexKind::Number => *number_index = Some(value),
            }
        }
    }

    pub fn declare(
        &mut self,
        file: impl Into<PathBuf>,
        name: impl Into<String>,
        kind: DeclarationKind,
        ty: NodeId,
    ) -> DeclarationId {
        let id = DeclarationId(self.declarations.len() as u32);
        self.declarations.push(Declaration {
            file: file.into(),
            name: name.into(),
            kind,
            ty,
        });
        id
    }

    fn validate(&self) -> Result<()> {
        let node_count = self.nodes.len();
        let symbol_count = self.symbols.len();
        let check_node = |id: NodeId, owner: &str| {
            if id.0 as usize >= node_count {
                return Err(invalid(format!("{owner} refers to missing node {}", id.0)));
            }
            Ok(())
        };

        for (index, node) in self.nodes.iter().enumerate() {
            let owner = format!("node {index}");
            for child in structural_children(node) {
                check_node(child, &owner)?;
            }
            if let NodeData::Object {
                properties,
                statics,
                string_index,
                number_index,
                ..
            } = node
            {
                for symbol in properties.iter().chain(statics) {
                    if symbol.0 as usize >= symbol_count {
                        return Err(invalid(format!(
                            "{owner} refers to missing symbol {}",
                            symbol.0
                        )));
                    }
                }
                for value in string_index.iter().chain(number_index) {
                    check_node(*value, &owner)?;
                }
            }
        }

        for (index, symbol) in self.symbols.iter().enumerate() {
            if let Some(ty) = symbol.declared_type {
                check_node(ty, &format!("symbol {index} ('{}')", symbol.name))?;
            }
        }

        for declaration in &self.declarations {
            check_node(declaration.ty, &format!("declaration '{}'", declaration.name))?;
        }

        self.check_structural_cycles()
    }

    /// Reject cycles that avoid object nodes. Those have no finite display
    /// name and no reference point for the resolver.
    fn check_structural_cycles(&self) -> Result<()> {
        #[derive(Copy, Clone, PartialEq)]
        enum State {
            Unvisited,
            Open,
            Done,
        }

        let mut state = vec![State::Unvisited; self.nodes.len()];
        for start in 0..self.nodes.len() {
            if state[start] != State::Unvisited {
                continue;
            }
            state[start] = State::Open;
            let mut stack = vec![(start, structural_children(&self.nodes[start]), 0usize)];

            while let Some((index, children, next)) = stack.last_mut() {
                let Some(&child) = children.get(*next) else {
                    state[*index] = State::Done;
                    stack.pop();
                    continue;
                };
                *next += 1;
                let child = child.0 as usize;
                match state[child] {
                    State::Open => {
                        return Err(invalid(format!(
                            "node {child} contains itself without an object in between"
                        )));
                    }
                    State::Done => {}
                    State::Unvisited => {
                        state[child] = State::Open;
                        stack.push((child, structural_children(&self.nodes[child]), 0));
                    }
                }
            }
        }
        Ok(())
    }

    fn object_mut(&mut self, object: NodeId) -> Option<&mut NodeData> {
        let node = &mut self.nodes[object.0 as usize];
        debug_assert!(
            matches!(node, NodeData::Object { .. }),
            "node {} is not an object type",
            object.0
        );
        matches!(node, NodeData::Object { .. }).then_some(node)
    }

    fn is_visible(&self, file: &Path) -> bool {
        self.scope
            .as_ref()
            .is_none_or(|scope| scope.contains(file))
    }

    fn member_display(&self, members: &[NodeId], separator: &str) -> String {
        members
            .iter()
            .map(|member| {
                let name = self.display_name(*member);
                match self.node(*member) {
                    NodeData::Union { .. } | NodeData::Intersection { .. } => format!("({name})"),
                    _ => name,
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl TypeOracle for TypeGraph {
    type Node = NodeId;
    type Symbol = SymbolId;

    fn type_key(&self, node: NodeId) -> u64 {
        u64::from(node.0)
    }

    fn display_name(&self, node: NodeId) -> String {
        match self.node(node) {
            NodeData::Primitive { name }
            | NodeData::Enum { name, .. }
            | NodeData::Object { name, .. }
            | NodeData::Function { name }
            | NodeData::Generic { name }
            | NodeData::Opaque { name } => name.clone(),
            NodeData::Undefined => "undefined".to_string(),
            NodeData::Literal { value } => value.to_string(),
            NodeData::BooleanLiteral { value } => value.to_string(),
            NodeData::BigIntLiteral { value } => format!("{}n", value.to_decimal_string()),
            NodeData::Array { element } => match self.node(*element) {
                NodeData::Union { .. } | NodeData::Intersection { .. } => {
                    format!("({})[]", self.display_name(*element))
                }
                _ => format!("{}[]", self.display_name(*element)),
            },
            NodeData::Tuple { elements } => format!("[{}]", self.member_display(elements, ", ")),
            NodeData::Union { members } => self.member_display(members, " | "),
            NodeData::Intersection { members } => self.member_display(members, " & "),
        }
    }

    fn is_primitive(&self, node: NodeId) -> bool {
        matches!(
            self.node(node),
            NodeData::Primitive { .. } | NodeData::Undefined
        )
    }

    fn is_literal(&self, node: NodeId) -> bool {
        matches!(
            self.node(node),
            NodeData::Literal { .. } | NodeData::BooleanLiteral { .. }
        )
    }

    fn is_bigint_literal(&self, node: NodeId) -> bool {
        matches!(self.node(node), NodeData::BigIntLiteral { .. })
    }

    fn is_array(&self, node: NodeId) -> bool {
        matches!(self.node(node), NodeData::Array { .. })
    }

    fn is_tuple(&self, node: NodeId) -> bool {
        matches!(self.node(node), NodeData::Tuple { .. })
    }

    fn is_enum(&self, node: NodeId) -> bool {
        matches!(self.node(node), NodeData::Enum { .. })
    }

    fn is_object_like(&self, node: NodeId) -> bool {
        matches!(
            self.node(node),
            NodeData::Array { .. }
                | NodeData::Tuple { .. }
                | NodeData::Object { .. }
                | NodeData::Function { .. }
        )
    }

    fn is_generic(&self, node: NodeId) -> bool {
        matches!(self.node(node), NodeData::Generic { .. })
    }

    fn is_union(&self, node: NodeId) -> bool {
        matches!(
            self.node(node),
            NodeData::Union { .. } | NodeData::Enum { .. }
        )
    }

    fn is_intersection(&self, node: NodeId) -> bool {
        matches!(self.node(node), NodeData::Intersection { .. })
    }

    fn is_boolean_union(&self, members: &[NodeId]) -> bool {
        match members {
            [a, b] => matches!(
                (self.node(*a), self.node(*b)),
                (
                    NodeData::BooleanLiteral { value: x },
                    NodeData::BooleanLiteral { value: y },
                ) if x != y
            ),
            _ => false,
        }
    }

    fn is_defined(&self, node: NodeId) -> bool {
        !matches!(self.node(node), NodeData::Undefined)
    }

    fn is_function_like(&self, node: NodeId) -> bool {
        matches!(self.node(node), NodeData::Function { .. })
    }

    fn array_element_type(&self, node: NodeId) -> Option<NodeId> {
        match self.node(node) {
            NodeData::Array { element } => Some(*element),
            _ => None,
        }
    }

    fn member_types(&self, node: NodeId) -> Vec<NodeId> {
        match self.node(node) {
            NodeData::Tuple { elements } => elements.clone(),
            NodeData::Union { members } | NodeData::Intersection { members } => members.clone(),
            NodeData::Enum { members, .. } => members.iter().map(|member| member.ty).collect(),
            _ => Vec::new(),
        }
    }

    fn enum_members(&self, node: NodeId) -> Vec<EnumMember<NodeId>> {
        match self.node(node) {
            NodeData::Enum { members, .. } => members.clone(),
            _ => Vec::new(),
        }
    }

    fn own_properties(&self, node: NodeId) -> Vec<SymbolId> {
        match self.node(node) {
            NodeData::Object { properties, .. } => properties.clone(),
            _ => Vec::new(),
        }
    }

    fn symbol_members(&self, node: NodeId) -> Vec<SymbolId> {
        match self.node(node) {
            NodeData::Object { statics, .. } => statics.clone(),
            _ => Vec::new(),
        }
    }

    fn has_symbol_declarations(&self, node: NodeId) -> bool {
        match self.node(node) {
            NodeData::Object { declared, .. } => *declared,
            NodeData::Function { .. } => true,
            _ => false,
        }
    }

    fn index_signature(&self, node: NodeId, kind: IndexKind) -> Option<NodeId> {
        match (self.node(node), kind) {
            (NodeData::Object { string_index, .. }, IndexKind::String) => *string_index,
            (NodeData::Object { number_index, .. }, IndexKind::Number) => *number_index,
            _ => None,
        }
    }

    fn literal_value(&self, node: NodeId) -> Option<LiteralValue> {
        match self.node(node) {
            NodeData::Literal { value } => Some(value.clone()),
            _ => None,
        }
    }

    fn intrinsic_name(&self, node: NodeId) -> Option<String> {
        match self.node(node) {
            NodeData::BooleanLiteral { value } => Some(value.to_string()),
            NodeData::Primitive { name } => Some(name.clone()),
            NodeData::Undefined => Some("undefined".to_string()),
            _ => None,
        }
    }

    fn bigint_literal_value(&self, node: NodeId) -> Option<PseudoBigInt> {
        match self.node(node) {
            NodeData::BigIntLiteral { value } => Some(value.clone()),
            _ => None,
        }
    }

    fn symbol_name(&self, symbol: SymbolId) -> String {
        self.symbol(symbol).name.clone()
    }

    fn is_optional(&self, symbol: SymbolId) -> bool {
        self.symbol(symbol).optional
    }

    fn is_prototype_member(&self, symbol: SymbolId) -> bool {
        self.symbol(symbol).prototype
    }

    fn has_declaration(&self, symbol: SymbolId) -> bool {
        self.symbol(symbol).declared_type.is_some()
    }

    fn declared_type(&self, symbol: SymbolId) -> Option<NodeId> {
        self.symbol(symbol).declared_type
    }

    fn is_get_accessor(&self, symbol: SymbolId) -> bool {
        self.symbol(symbol).get_accessor
    }

    fn has_private_modifier(&self, symbol: SymbolId) -> bool {
        self.symbol(symbol).private
    }
}

impl ProgramSession for TypeGraph {
    type Location = DeclarationId;

    fn syntax_locations(&self, file: &Path) -> Result<Vec<DeclarationId>> {
        if !self.is_visible(file) {
            return Err(ResolveError::FileNotInSession {
                file: file.to_path_buf(),
            });
        }
        Ok(self
            .declarations
            .iter()
            .enumerate()
            .filter(|(_, decl)| decl.file == file)
            .map(|(index, _)| DeclarationId(index as u32))
            .collect())
    }

    fn is_named_type_declaration(&self, location: &DeclarationId) -> bool {
        self.declaration(*location).kind.is_named_type()
    }

    fn type_at_location(&self, location: &DeclarationId) -> NodeId {
        self.declaration(*location).ty
    }
}

// =============================================================================
// GraphFrontend
// =============================================================================

/// Frontend serving sessions over a fixed [`TypeGraph`].
#[derive(Clone, Debug)]
pub struct GraphFrontend {
    graph: TypeGraph,
}

impl GraphFrontend {
    pub fn new(graph: TypeGraph) -> Self {
        Self { graph }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(TypeGraph::from_json(json)?))
    }

    pub fn graph(&self) -> &TypeGraph {
        &self.graph
    }
}

impl TypeFrontend for GraphFrontend {
    type Options = ();
    type Session = TypeGraph;

    fn open_session(&self, files: &[PathBuf], _options: &()) -> Result<TypeGraph> {
        let known: FxHashSet<PathBuf> = self.graph.files().into_iter().collect();
        if let Some(missing) = files.iter().find(|file| !known.contains(*file)) {
            return Err(ResolveError::Frontend(format!(
                "file '{}' not found",
                missing.display()
            )));
        }
        Ok(self.graph.clone().scoped(files))
    }
}

#[cfg(test)]
#[path = "../tests/graph_tests.rs"]
mod tests;
