//! Type Oracle contract.
//!
//! The resolver never looks inside a type node. Everything it knows about
//! the graph comes from the queries below, which a frontend (a real type
//! checker, or the in-memory [`crate::graph::TypeGraph`]) answers. All
//! queries are pure reads.
//!
//! Predicates overlap on purpose: an enum is usually also a union, an array
//! is usually also object-like. The resolver resolves the overlap with a
//! fixed precedence (see [`crate::classifier`]), so implementations should
//! report every predicate that holds rather than picking one.

use crate::error::Result;
use crate::types::{EnumMember, IndexKind, LiteralValue, PseudoBigInt};
use std::fmt::Debug;
use std::path::Path;

/// Read-only query surface over a resolved type graph.
pub trait TypeOracle {
    /// Handle to a type node.
    type Node: Copy + Debug;
    /// Handle to a property symbol.
    type Symbol: Copy + Debug;

    // =========================================================================
    // Identity
    // =========================================================================

    /// Identity of `node`, stable for the lifetime of the session.
    fn type_key(&self, node: Self::Node) -> u64;

    /// Human-readable name of `node` (e.g. `Node`, `string[]`, `"x"`).
    fn display_name(&self, node: Self::Node) -> String;

    // =========================================================================
    // Classification predicates
    // =========================================================================

    fn is_primitive(&self, node: Self::Node) -> bool;

    /// String, number and boolean literals. Big-integer literals answer
    /// [`is_bigint_literal`](Self::is_bigint_literal) instead.
    fn is_literal(&self, node: Self::Node) -> bool;

    fn is_bigint_literal(&self, node: Self::Node) -> bool;

    fn is_array(&self, node: Self::Node) -> bool;

    fn is_tuple(&self, node: Self::Node) -> bool;

    fn is_enum(&self, node: Self::Node) -> bool;

    fn is_object_like(&self, node: Self::Node) -> bool;

    /// Unresolved generic type parameter.
    fn is_generic(&self, node: Self::Node) -> bool;

    fn is_union(&self, node: Self::Node) -> bool;

    fn is_intersection(&self, node: Self::Node) -> bool;

    /// True when `members` are exactly the `true` and `false` literals.
    fn is_boolean_union(&self, members: &[Self::Node]) -> bool;

    /// False only for the `undefined` type itself.
    fn is_defined(&self, node: Self::Node) -> bool;

    /// Callable types (functions, methods, constructors).
    fn is_function_like(&self, node: Self::Node) -> bool;

    // =========================================================================
    // Structural accessors
    // =========================================================================

    fn array_element_type(&self, node: Self::Node) -> Option<Self::Node>;

    /// Members of a tuple, union or intersection, in declaration order.
    fn member_types(&self, node: Self::Node) -> Vec<Self::Node>;

    fn enum_members(&self, node: Self::Node) -> Vec<EnumMember<Self::Node>>;

    fn own_properties(&self, node: Self::Node) -> Vec<Self::Symbol>;

    /// Static and exported members of the symbol backing `node`.
    fn symbol_members(&self, node: Self::Node) -> Vec<Self::Symbol>;

    /// Whether the symbol backing `node` has at least one declaration.
    fn has_symbol_declarations(&self, node: Self::Node) -> bool;

    /// Value type of the index signature with the given key kind.
    fn index_signature(&self, node: Self::Node, kind: IndexKind) -> Option<Self::Node>;

    // =========================================================================
    // Literal accessors
    // =========================================================================

    /// Value of a string or number literal. `None` for boolean literals,
    /// which carry only an intrinsic marker.
    fn literal_value(&self, node: Self::Node) -> Option<LiteralValue>;

    /// Intrinsic marker of a boolean literal: `"true"` or `"false"`.
    fn intrinsic_name(&self, node: Self::Node) -> Option<String>;

    fn bigint_literal_value(&self, node: Self::Node) -> Option<PseudoBigInt>;

    // =========================================================================
    // Property symbols
    // =========================================================================

    fn symbol_name(&self, symbol: Self::Symbol) -> String;

    fn is_optional(&self, symbol: Self::Symbol) -> bool;

    fn is_prototype_member(&self, symbol: Self::Symbol) -> bool;

    fn has_declaration(&self, symbol: Self::Symbol) -> bool;

    /// Type of the symbol at its declaration site.
    fn declared_type(&self, symbol: Self::Symbol) -> Option<Self::Node>;

    fn is_get_accessor(&self, symbol: Self::Symbol) -> bool;

    fn has_private_modifier(&self, symbol: Self::Symbol) -> bool;
}

/// One oracle session over a fixed set of source files.
pub trait ProgramSession: TypeOracle {
    /// A syntax location inside a file.
    type Location: Clone + Debug;

    /// Every syntax location of `file` the frontend exposes, in source order.
    fn syntax_locations(&self, file: &Path) -> Result<Vec<Self::Location>>;

    /// Default selection policy: named type declarations.
    fn is_named_type_declaration(&self, location: &Self::Location) -> bool;

    fn type_at_location(&self, location: &Self::Location) -> Self::Node;
}

/// Opens oracle sessions. Implemented by type-checking frontends.
pub trait TypeFrontend {
    /// Frontend configuration (compiler options and the like).
    type Options;
    type Session: ProgramSession;

    /// Open a session scoped to exactly `files`.
    fn open_session(
        &self,
        files: &[std::path::PathBuf],
        options: &Self::Options,
    ) -> Result<Self::Session>;
}
