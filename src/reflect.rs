//! Descriptors of reflected program declarations.
//!
//! A language adapter inspects its host reflection facility once per
//! declaration and hands these value objects over; the generation side only
//! ever reads them. Nothing here touches reflection itself.

use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::ast::InputValue;

/// A primitive type of the reflected source language.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Primitive {
    /// The language's boolean type.
    Boolean,
    /// The language's integer type.
    Int,
    /// The language's floating point type.
    Float,
    /// The language's string type.
    String,
}

/// The shape of a reflected type expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeExprKind {
    /// A language primitive.
    Primitive(Primitive),
    /// A user-defined type, referred to by the schema name it registers
    /// under.
    Named(ArcStr),
    /// A homogeneous collection of another type expression.
    List(Box<TypeExpr>),
}

/// A reflected type expression: a shape plus its declared nullability.
///
/// Nullability is carried per nesting level, so `[Int!]` and `[Int]!` stay
/// distinguishable. Expressions start out non-optional; [`TypeExpr::nullable`]
/// opts the outermost level out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeExpr {
    kind: TypeExprKind,
    nullable: bool,
}

impl TypeExpr {
    /// A non-optional primitive type expression.
    #[must_use]
    pub fn primitive(primitive: Primitive) -> Self {
        Self {
            kind: TypeExprKind::Primitive(primitive),
            nullable: false,
        }
    }

    /// A non-optional expression referring to the user-defined type `name`.
    #[must_use]
    pub fn named(name: impl Into<ArcStr>) -> Self {
        Self {
            kind: TypeExprKind::Named(name.into()),
            nullable: false,
        }
    }

    /// A non-optional list of `element` expressions.
    #[must_use]
    pub fn list(element: TypeExpr) -> Self {
        Self {
            kind: TypeExprKind::List(element.into()),
            nullable: false,
        }
    }

    /// Marks the outermost level of this expression as optional.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// The shape of this expression.
    pub fn kind(&self) -> &TypeExprKind {
        &self.kind
    }

    /// Whether the declaration allows an absent value at this level.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

/// A directive declared through metadata: the author-facing identifier and
/// literal argument values, exactly as written on the declaration.
///
/// The identifier may be spelled type style (`SimpleDirective`) or snake
/// case; resolving the marker against a
/// [`DirectiveRegistry`](crate::DirectiveRegistry) normalizes it.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveMarker {
    name: ArcStr,
    arguments: IndexMap<ArcStr, InputValue>,
}

impl DirectiveMarker {
    /// Creates a marker referencing the directive `name`, without arguments.
    #[must_use]
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            arguments: IndexMap::new(),
        }
    }

    /// Adds a literal argument binding.
    ///
    /// A repeated `name` overwrites the earlier binding in place.
    #[must_use]
    pub fn argument(mut self, name: impl Into<ArcStr>, value: impl Into<InputValue>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// The directive identifier, as written by the author.
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// The literal argument bindings, in written order.
    pub fn arguments(&self) -> &IndexMap<ArcStr, InputValue> {
        &self.arguments
    }
}

/// One metadata record attached to a reflected declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum Marker {
    /// Documentation text for the generated schema element.
    Description(ArcStr),
    /// Renames the generated schema element away from its declared name.
    Name(ArcStr),
    /// Requests the ID scalar instead of the default primitive mapping.
    Id,
    /// Declares a directive on the generated schema element.
    Directive(DirectiveMarker),
}

/// The ordered metadata records attached to one declaration.
///
/// Accessors resolve the effective description, name override, and directive
/// set. When a description or name marker repeats, the first one wins and
/// the rest are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    markers: Vec<Marker>,
}

impl Metadata {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a marker, preserving declaration order.
    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// The effective description: the text of the first description marker,
    /// verbatim.
    ///
    /// `None` (rather than an empty string) when no description marker is
    /// attached.
    pub fn description(&self) -> Option<&ArcStr> {
        self.markers.iter().find_map(|m| match m {
            Marker::Description(text) => Some(text),
            _ => None,
        })
    }

    /// The effective name override: the first name marker.
    ///
    /// `None` means the declared name stands.
    pub fn name_override(&self) -> Option<&ArcStr> {
        self.markers.iter().find_map(|m| match m {
            Marker::Name(name) => Some(name),
            _ => None,
        })
    }

    /// Whether any marker requests the ID scalar mapping.
    pub fn has_id_override(&self) -> bool {
        self.markers.iter().any(|m| matches!(m, Marker::Id))
    }

    /// All directive markers, in declaration order, including repeats.
    pub fn directive_markers(&self) -> impl Iterator<Item = &DirectiveMarker> {
        self.markers.iter().filter_map(|m| match m {
            Marker::Directive(marker) => Some(marker),
            _ => None,
        })
    }

    /// The raw marker list, in declaration order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

impl FromIterator<Marker> for Metadata {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        Self {
            markers: iter.into_iter().collect(),
        }
    }
}

/// A reflected function parameter: the unit an argument definition is
/// generated from.
///
/// `name` is expected to already be a valid schema name; adapters map host
/// language spellings before constructing the descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    name: ArcStr,
    type_expr: TypeExpr,
    metadata: Metadata,
}

impl Parameter {
    /// Describes the parameter `name`, declared with `type_expr` and no
    /// metadata.
    #[must_use]
    pub fn new(name: impl Into<ArcStr>, type_expr: TypeExpr) -> Self {
        Self {
            name: name.into(),
            type_expr,
            metadata: Metadata::new(),
        }
    }

    /// Attaches a metadata marker, preserving declaration order.
    #[must_use]
    pub fn marker(mut self, marker: Marker) -> Self {
        self.metadata.push(marker);
        self
    }

    /// The declared parameter name.
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// The declared type expression.
    pub fn type_expr(&self) -> &TypeExpr {
        &self.type_expr
    }

    /// The attached metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
