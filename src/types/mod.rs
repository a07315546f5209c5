//! Type descriptors as seen by the reporter.
//!
//! A decoding engine validates input against a tree of [`TypeDescriptor`]s and
//! records, for each failure, the descriptors it passed through. The reporter
//! only ever reads two things from a descriptor: its display name and an
//! optional custom-message hook.
//!
//! Display names are computed once, when the descriptor is built, from the
//! names of its constituents:
//!
//! ```rust
//! use autopsy::TypeDescriptor;
//!
//! let groups = TypeDescriptor::array(TypeDescriptor::array(TypeDescriptor::number()));
//! assert_eq!(groups.name(), "Array<Array<number>>");
//!
//! let gender = TypeDescriptor::union(vec![
//!     TypeDescriptor::literal("Male"),
//!     TypeDescriptor::literal("Female"),
//! ]);
//! assert_eq!(gender.name(), r#"("Male" | "Female")"#);
//! ```

mod message;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

pub use message::{MessageFn, PredicateFn};

/// The primitive types a descriptor can stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Null,
    Unknown,
}

impl Primitive {
    /// Returns the display name of this primitive.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Null => "null",
            Primitive::Unknown => "unknown",
        }
    }
}

/// The closed set of descriptor shapes.
#[derive(Clone)]
pub enum TypeKind {
    /// A primitive type such as `string` or `number`.
    Primitive(Primitive),
    /// Exactly one value.
    Literal(Value),
    /// A homogeneous array.
    Array(TypeDescriptor),
    /// An object with named fields, in declaration order.
    Record(IndexMap<String, TypeDescriptor>),
    /// Any one of several alternatives, in declaration order.
    Union(Vec<TypeDescriptor>),
    /// A base type narrowed by a predicate and identified by a brand name.
    Branded {
        base: TypeDescriptor,
        brand: String,
        predicate: PredicateFn,
    },
}

impl fmt::Debug for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Primitive(p) => f.debug_tuple("Primitive").field(p).finish(),
            TypeKind::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            TypeKind::Array(item) => f.debug_tuple("Array").field(item).finish(),
            TypeKind::Record(fields) => f.debug_tuple("Record").field(fields).finish(),
            TypeKind::Union(members) => f.debug_tuple("Union").field(members).finish(),
            TypeKind::Branded { base, brand, .. } => f
                .debug_struct("Branded")
                .field("base", base)
                .field("brand", brand)
                .finish_non_exhaustive(),
        }
    }
}

struct Node {
    kind: TypeKind,
    name: String,
    message: Option<MessageFn>,
}

/// A named, shareable description of an expected type.
///
/// `TypeDescriptor` is a cheap handle: cloning it shares the underlying node,
/// so context trails can hold descriptors without copying whole type trees.
#[derive(Clone)]
pub struct TypeDescriptor {
    node: Arc<Node>,
}

impl TypeDescriptor {
    fn from_kind(kind: TypeKind) -> Self {
        let name = display_name(&kind);
        Self {
            node: Arc::new(Node {
                kind,
                name,
                message: None,
            }),
        }
    }

    /// Creates a primitive descriptor.
    pub fn primitive(primitive: Primitive) -> Self {
        Self::from_kind(TypeKind::Primitive(primitive))
    }

    /// Creates a `string` descriptor.
    pub fn string() -> Self {
        Self::primitive(Primitive::String)
    }

    /// Creates a `number` descriptor.
    pub fn number() -> Self {
        Self::primitive(Primitive::Number)
    }

    /// Creates a `boolean` descriptor.
    pub fn boolean() -> Self {
        Self::primitive(Primitive::Boolean)
    }

    /// Creates a `null` descriptor.
    pub fn null() -> Self {
        Self::primitive(Primitive::Null)
    }

    /// Creates an `unknown` descriptor.
    pub fn unknown() -> Self {
        Self::primitive(Primitive::Unknown)
    }

    /// Creates a literal descriptor. Its name is the JSON rendering of `value`.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::from_kind(TypeKind::Literal(value.into()))
    }

    /// Creates an `Array<item>` descriptor.
    pub fn array(item: TypeDescriptor) -> Self {
        Self::from_kind(TypeKind::Array(item))
    }

    /// Creates a record descriptor with fields in the given order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use autopsy::TypeDescriptor;
    ///
    /// let person = TypeDescriptor::record([
    ///     ("name", TypeDescriptor::string()),
    ///     ("age", TypeDescriptor::number()),
    /// ]);
    /// assert_eq!(person.name(), "{ name: string, age: number }");
    /// ```
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TypeDescriptor)>,
    {
        let fields = fields
            .into_iter()
            .map(|(key, descriptor)| (key.into(), descriptor))
            .collect();
        Self::from_kind(TypeKind::Record(fields))
    }

    /// Creates a union descriptor over `members`, in declaration order.
    pub fn union(members: Vec<TypeDescriptor>) -> Self {
        Self::from_kind(TypeKind::Union(members))
    }

    /// Creates a branded descriptor: `base` narrowed by `predicate`, reported
    /// under `brand`.
    ///
    /// The predicate is carried for the decoding engine; reporting never calls it.
    pub fn branded<F>(base: TypeDescriptor, brand: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::from_kind(TypeKind::Branded {
            base,
            brand: brand.into(),
            predicate: Arc::new(predicate),
        })
    }

    /// Returns a copy of this descriptor with a different display name.
    pub fn named(&self, name: impl Into<String>) -> Self {
        Self {
            node: Arc::new(Node {
                kind: self.node.kind.clone(),
                name: name.into(),
                message: self.node.message.clone(),
            }),
        }
    }

    /// Returns the display name of this descriptor.
    pub fn name(&self) -> &str {
        &self.node.name
    }

    /// Returns the shape of this descriptor.
    pub fn kind(&self) -> &TypeKind {
        &self.node.kind
    }

    /// Returns the custom-message hook attached to this descriptor, if any.
    pub fn message_hook(&self) -> Option<&MessageFn> {
        self.node.message.as_ref()
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.node.name)
            .field("kind", &self.node.kind)
            .field("has_message", &self.node.message.is_some())
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.node.name)
    }
}

fn display_name(kind: &TypeKind) -> String {
    match kind {
        TypeKind::Primitive(p) => p.name().to_string(),
        TypeKind::Literal(value) => value.to_string(),
        TypeKind::Array(item) => format!("Array<{}>", item.name()),
        TypeKind::Record(fields) if fields.is_empty() => "{}".to_string(),
        TypeKind::Record(fields) => {
            let fields: Vec<String> = fields
                .iter()
                .map(|(key, descriptor)| format!("{}: {}", key, descriptor.name()))
                .collect();
            format!("{{ {} }}", fields.join(", "))
        }
        TypeKind::Union(members) => {
            let members: Vec<&str> = members.iter().map(TypeDescriptor::name).collect();
            format!("({})", members.join(" | "))
        }
        TypeKind::Branded { brand, .. } => brand.clone(),
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<TypeDescriptor>();
    assert_sync::<TypeDescriptor>();
};
