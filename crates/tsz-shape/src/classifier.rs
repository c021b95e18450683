//! Shape classification.
//!
//! The oracle's predicates overlap (an enum is also a union, an array is
//! also object-like, `Date` is an ordinary object). [`classify`] reduces a
//! node to exactly one [`ShapeClass`] using a fixed precedence, first match
//! wins:
//!
//! | # | Category | Test |
//! |---|----------|------|
//! | 1 | `BigIntLiteral` | `is_bigint_literal` |
//! | 2 | `Literal` | `is_literal` |
//! | 3 | `Primitive` | `is_primitive` |
//! | 4 | `Array` | `is_array` |
//! | 5 | `Tuple` | `is_tuple` |
//! | 6 | `Enum` | `is_enum` |
//! | 7 | `Date` | display name is `Date` |
//! | 8 | `ObjectLike` | `is_object_like` (string index, then number index, then plain) |
//! | 9 | `Generic` | `is_generic` |
//! | 10 | `Union` | `is_union` |
//! | 11 | `Intersection` | `is_intersection` |
//! | 12 | `Unsupported` | nothing matched |
//!
//! This table is the only place overlap is resolved. The resolver matches on
//! the result and never re-queries the category predicates.

use crate::error::{ResolveError, Result};
use crate::oracle::TypeOracle;
use crate::types::{DATE_TYPE_NAME, EnumMember, IndexKind, LiteralValue};

/// How an object-like node exposes its members.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectShape<N> {
    /// Members described by an index signature. Named properties are ignored.
    Indexable { value: N, key: IndexKind },
    /// Members described by a property list.
    Plain,
}

/// The single category a node resolves as, with the children it recurses into.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeClass<N> {
    /// Signed decimal digits.
    BigIntLiteral(String),
    Literal(LiteralValue),
    Primitive(String),
    Array(N),
    Tuple(Vec<N>),
    Enum(Vec<EnumMember<N>>),
    Date,
    ObjectLike(ObjectShape<N>),
    Generic,
    /// Members as declared, `undefined` arms included.
    Union(Vec<N>),
    Intersection(Vec<N>),
    Unsupported,
}

impl<N> ShapeClass<N> {
    /// Short category label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            ShapeClass::BigIntLiteral(_) => "bigint-literal",
            ShapeClass::Literal(_) => "literal",
            ShapeClass::Primitive(_) => "primitive",
            ShapeClass::Array(_) => "array",
            ShapeClass::Tuple(_) => "tuple",
            ShapeClass::Enum(_) => "enum",
            ShapeClass::Date => "date",
            ShapeClass::ObjectLike(ObjectShape::Indexable { .. }) => "indexable-object",
            ShapeClass::ObjectLike(ObjectShape::Plain) => "object",
            ShapeClass::Generic => "generic",
            ShapeClass::Union(_) => "union",
            ShapeClass::Intersection(_) => "intersection",
            ShapeClass::Unsupported => "unsupported",
        }
    }
}

/// Classify `node` into its shape category.
///
/// Fails only when the oracle contradicts itself (an array without an
/// element type, a literal with neither value nor boolean marker).
pub fn classify<O: TypeOracle + ?Sized>(oracle: &O, node: O::Node) -> Result<ShapeClass<O::Node>> {
    if oracle.is_bigint_literal(node) {
        return Ok(match oracle.bigint_literal_value(node) {
            Some(value) => ShapeClass::BigIntLiteral(value.to_decimal_string()),
            None => ShapeClass::Unsupported,
        });
    }

    if oracle.is_literal(node) {
        if let Some(value) = oracle.literal_value(node) {
            return Ok(ShapeClass::Literal(value));
        }
        return match oracle.intrinsic_name(node).as_deref() {
            Some("true") => Ok(ShapeClass::Literal(LiteralValue::Boolean(true))),
            Some("false") => Ok(ShapeClass::Literal(LiteralValue::Boolean(false))),
            _ => Err(ResolveError::MissingBooleanMarker {
                name: oracle.display_name(node),
            }),
        };
    }

    if oracle.is_primitive(node) {
        return Ok(ShapeClass::Primitive(oracle.display_name(node)));
    }

    if oracle.is_array(node) {
        let element =
            oracle
                .array_element_type(node)
                .ok_or_else(|| ResolveError::MissingElementType {
                    name: oracle.display_name(node),
                })?;
        return Ok(ShapeClass::Array(element));
    }

    if oracle.is_tuple(node) {
        return Ok(ShapeClass::Tuple(oracle.member_types(node)));
    }

    if oracle.is_enum(node) {
        return Ok(ShapeClass::Enum(oracle.enum_members(node)));
    }

    if oracle.display_name(node) == DATE_TYPE_NAME {
        return Ok(ShapeClass::Date);
    }

    if oracle.is_object_like(node) {
        for key in IndexKind::PRECEDENCE {
            if let Some(value) = oracle.index_signature(node, key) {
                return Ok(ShapeClass::ObjectLike(ObjectShape::Indexable { value, key }));
            }
        }
        return Ok(ShapeClass::ObjectLike(ObjectShape::Plain));
    }

    if oracle.is_generic(node) {
        return Ok(ShapeClass::Generic);
    }

    if oracle.is_union(node) {
        return Ok(ShapeClass::Union(oracle.member_types(node)));
    }

    if oracle.is_intersection(node) {
        return Ok(ShapeClass::Intersection(oracle.member_types(node)));
    }

    Ok(ShapeClass::Unsupported)
}

#[cfg(test)]
#[path = "../tests/classifier_tests.rs"]
mod tests;
