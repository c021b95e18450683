//! Data model shared by the oracle, the resolver and builders.
//!
//! Everything here is plain data: identities handed to builders, the
//! resolved property record, and the literal/index vocabulary the oracle
//! reports in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical display name of the built-in date type.
///
/// Dates are recognised by name rather than by structure, since the
/// structural form of `Date` is an ordinary object type.
pub const DATE_TYPE_NAME: &str = "Date";

/// Identity of an object-like node within a single resolution pass.
///
/// `id` is assigned by the resolver when the node is first seen in a pass
/// and is meaningless outside that pass. `name` is the oracle's display
/// string and is what builders use to label references and definitions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeIdentity {
    pub id: u32,
    pub name: String,
}

impl TypeIdentity {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

/// A data member of an object type after filtering and resolution.
///
/// `is_optional` mirrors the declared `?` modifier. `maybe_undefined` is set
/// when the declared type is a union with an explicit `undefined` arm. The
/// two flags are independent: `a: string | undefined` is required but may be
/// undefined, `b?: string` is optional but never explicitly undefined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedProperty<T> {
    pub name: String,
    pub is_optional: bool,
    pub maybe_undefined: bool,
    pub resolved_type: T,
}

/// Key type of an index signature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IndexKind {
    String,
    Number,
}

impl IndexKind {
    /// Lookup order for index signatures. String keys shadow number keys.
    pub const PRECEDENCE: [IndexKind; 2] = [IndexKind::String, IndexKind::Number];

    pub fn as_str(self) -> &'static str {
        match self {
            IndexKind::String => "string",
            IndexKind::Number => "number",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arbitrary-precision integer literal as reported by the frontend.
///
/// The magnitude is kept as base-10 digits so no precision is lost.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PseudoBigInt {
    pub negative: bool,
    pub base10_value: String,
}

impl PseudoBigInt {
    pub fn new(negative: bool, base10_value: impl Into<String>) -> Self {
        Self {
            negative,
            base10_value: base10_value.into(),
        }
    }

    /// Signed decimal rendering, e.g. `-42`.
    ///
    /// Negative zero renders as `0`.
    pub fn to_decimal_string(&self) -> String {
        let digits = self.base10_value.trim_start_matches('0');
        if digits.is_empty() {
            return "0".to_string();
        }
        if self.negative {
            format!("-{digits}")
        } else {
            digits.to_string()
        }
    }
}

/// Value carried by a literal type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    /// Decimal string with the sign preserved.
    BigInt(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::String(s) => write!(f, "{s:?}"),
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Boolean(b) => write!(f, "{b}"),
            LiteralValue::BigInt(digits) => write!(f, "{digits}n"),
        }
    }
}

/// A named member of an enum type, in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember<N> {
    pub name: String,
    pub ty: N,
}
