//! Reference builder producing a plain [`Shape`] tree.
//!
//! The tree mirrors the builder calls one-to-one and serializes to JSON,
//! which makes it convenient for snapshots and for checking resolver output
//! in tests. Two modes:
//!
//! - **Inline** ([`TreeBuilder::inline`]): named objects are built in place.
//! - **Hoisting** ([`TreeBuilder::hoisting`]): named objects are collected
//!   as definitions and replaced by `Ref` nodes. `end_resolution` embeds the
//!   definitions in a `Document`; `end_resolution_with_definitions` hands
//!   them back separately.

use crate::builder::{ShapeBuilder, WithDefinitions};
use crate::types::{IndexKind, LiteralValue, ResolvedProperty, TypeIdentity};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Shape {
    Any,
    Date,
    Primitive {
        name: String,
    },
    Array {
        element: Box<Shape>,
    },
    Tuple {
        members: Vec<Shape>,
    },
    Union {
        members: Vec<Shape>,
    },
    Intersection {
        members: Vec<Shape>,
    },
    Enum {
        members: Vec<(String, Shape)>,
    },
    Literal {
        value: LiteralValue,
    },
    Object {
        name: String,
        properties: Vec<ResolvedProperty<Shape>>,
    },
    Ref {
        name: String,
    },
    Indexable {
        key: IndexKind,
        value: Box<Shape>,
    },
    /// Root shape with its named definitions embedded.
    Document {
        root: Box<Shape>,
        definitions: IndexMap<String, Shape>,
    },
}

impl Shape {
    pub fn primitive(name: &str) -> Self {
        Shape::Primitive {
            name: name.to_string(),
        }
    }

    pub fn reference(name: &str) -> Self {
        Shape::Ref {
            name: name.to_string(),
        }
    }

    pub fn string_literal(value: &str) -> Self {
        Shape::Literal {
            value: LiteralValue::String(value.to_string()),
        }
    }

    /// Embed `definitions` into `root`, the way [`TreeBuilder::end_resolution`]
    /// does in hoisting mode.
    pub fn embed(root: Shape, definitions: IndexMap<String, Shape>) -> Shape {
        if definitions.is_empty() {
            root
        } else {
            Shape::Document {
                root: Box::new(root),
                definitions,
            }
        }
    }
}

/// Object names the frontend gives to anonymous types.
pub fn is_anonymous_name(name: &str) -> bool {
    name.is_empty() || name.starts_with("__") || name.starts_with('{')
}

/// [`ShapeBuilder`] producing [`Shape`] trees.
#[derive(Clone, Debug, Default)]
pub struct TreeBuilder {
    hoist_named: bool,
    definitions: IndexMap<String, Shape>,
}

impl TreeBuilder {
    pub fn inline() -> Self {
        Self::default()
    }

    pub fn hoisting() -> Self {
        Self {
            hoist_named: true,
            definitions: IndexMap::new(),
        }
    }

    /// Definitions collected so far in the current pass.
    pub fn definitions(&self) -> &IndexMap<String, Shape> {
        &self.definitions
    }
}

impl ShapeBuilder for TreeBuilder {
    type Output = Shape;

    fn start_resolution(&mut self) {
        self.definitions.clear();
    }

    fn end_resolution(&mut self, root: Shape) -> Shape {
        Shape::embed(root, std::mem::take(&mut self.definitions))
    }

    fn end_resolution_with_definitions(&mut self, root: Shape) -> WithDefinitions<Shape> {
        WithDefinitions {
            root,
            definitions: std::mem::take(&mut self.definitions),
        }
    }

    fn any(&mut self) -> Shape {
        Shape::Any
    }

    fn date(&mut self) -> Shape {
        Shape::Date
    }

    fn primitive(&mut self, name: &str) -> Shape {
        Shape::primitive(name)
    }

    fn array(&mut self, element: Shape) -> Shape {
        Shape::Array {
            element: Box::new(element),
        }
    }

    fn tuple(&mut self, members: Vec<Shape>) -> Shape {
        Shape::Tuple { members }
    }

    fn union(&mut self, members: Vec<Shape>) -> Shape {
        Shape::Union { members }
    }

    fn intersection(&mut self, members: Vec<Shape>) -> Shape {
        Shape::Intersection { members }
    }

    fn enumeration(&mut self, members: Vec<(String, Shape)>) -> Shape {
        Shape::Enum { members }
    }

    fn literal(&mut self, value: LiteralValue) -> Shape {
        Shape::Literal { value }
    }

    fn object(&mut self, properties: Vec<ResolvedProperty<Shape>>, identity: &TypeIdentity) -> Shape {
        let object = Shape::Object {
            name: identity.name.clone(),
            properties,
        };
        if !self.hoist_named || is_anonymous_name(&identity.name) {
            return object;
        }
        self.definitions.insert(identity.name.clone(), object);
        Shape::reference(&identity.name)
    }

    fn reference(&mut self, identity: &TypeIdentity) -> Shape {
        Shape::reference(&identity.name)
    }

    fn indexable_object(&mut self, value: Shape, key: IndexKind) -> Shape {
        Shape::Indexable {
            key,
            value: Box::new(value),
        }
    }
}
