//! Types used to describe the shapes a generated schema may reference.

use arcstr::ArcStr;

use crate::ast::{Directive, InputValue, Type};

/// Scalar type metadata.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScalarMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub specified_by_url: Option<ArcStr>,
}

/// Enum type metadata.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub values: Vec<EnumValue>,
}

/// Metadata for a single value of an enum type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumValue {
    /// Name of this [`EnumValue`].
    pub name: ArcStr,
    /// Optional description of this [`EnumValue`].
    ///
    /// Absent if the description was not set.
    pub description: Option<ArcStr>,
}

/// Input object type metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub input_fields: Vec<Argument>,
}

/// Interface type metadata.
///
/// Carries no field set: interfaces are registered here only so their names
/// resolve, and resolving one into an input position is what the input
/// legality check rejects.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterfaceMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
}

/// Union type metadata.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnionMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub of_type_names: Vec<ArcStr>,
}

/// Generic type metadata.
///
/// The closed set of shapes a parameter type may resolve to.
#[derive(Clone, Debug, PartialEq)]
pub enum MetaType {
    #[doc(hidden)]
    Scalar(ScalarMeta),
    #[doc(hidden)]
    Enum(EnumMeta),
    #[doc(hidden)]
    InputObject(InputObjectMeta),
    #[doc(hidden)]
    Interface(InterfaceMeta),
    #[doc(hidden)]
    Union(UnionMeta),
}

impl MetaType {
    /// Accesses the name of this [`MetaType`].
    ///
    /// Every shape in the set is named.
    pub fn name(&self) -> &ArcStr {
        match self {
            Self::Scalar(ScalarMeta { name, .. })
            | Self::Enum(EnumMeta { name, .. })
            | Self::InputObject(InputObjectMeta { name, .. })
            | Self::Interface(InterfaceMeta { name, .. })
            | Self::Union(UnionMeta { name, .. }) => name,
        }
    }

    /// Accesses the description of this [`MetaType`], if set.
    pub fn description(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(ScalarMeta { description, .. })
            | Self::Enum(EnumMeta { description, .. })
            | Self::InputObject(InputObjectMeta { description, .. })
            | Self::Interface(InterfaceMeta { description, .. })
            | Self::Union(UnionMeta { description, .. }) => description.as_ref(),
        }
    }

    /// Indicates whether this [`MetaType`] can occur in input positions,
    /// e.g. arguments or input object fields.
    ///
    /// Scalars, enums and input objects are input types; interface and union
    /// shapes have no single concrete input representation.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Scalar(_) | Self::Enum(_) | Self::InputObject(_))
    }

    /// Indicates whether this [`MetaType`] is abstract: an interface or a
    /// union shape.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Union(_))
    }

    /// Indicates whether this [`MetaType`] is a built-in GraphQL type.
    pub fn is_builtin(&self) -> bool {
        let name = self.name();
        // "used exclusively by the introspection system"
        name.starts_with("__")
            || matches!(
                name.as_str(),
                "Boolean" | "String" | "Int" | "Float" | "ID",
            )
    }
}

impl ScalarMeta {
    /// Builds a new [`ScalarMeta`] type with the provided `name`.
    #[must_use]
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by_url: None,
        }
    }

    /// Sets the `description` of this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the [specification URL][0] for this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set URL.
    ///
    /// [0]: https://spec.graphql.org/October2021#sec--specifiedBy
    #[must_use]
    pub fn specified_by_url(mut self, url: impl Into<ArcStr>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    /// Wraps this [`ScalarMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Scalar(self)
    }
}

impl EnumMeta {
    /// Builds a new [`EnumMeta`] type with the provided `name` and `values`.
    #[must_use]
    pub fn new(name: impl Into<ArcStr>, values: &[EnumValue]) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: values.to_vec(),
        }
    }

    /// Sets the `description` of this [`EnumMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`EnumMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Enum(self)
    }
}

impl EnumValue {
    /// Constructs a new [`EnumValue`] with the provided `name`.
    #[must_use]
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the `description` of this [`EnumValue`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl InputObjectMeta {
    /// Builds a new [`InputObjectMeta`] type with the provided `name` and
    /// `input_fields`.
    #[must_use]
    pub fn new(name: impl Into<ArcStr>, input_fields: &[Argument]) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_fields: input_fields.to_vec(),
        }
    }

    /// Sets the `description` of this [`InputObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`InputObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::InputObject(self)
    }
}

impl InterfaceMeta {
    /// Builds a new [`InterfaceMeta`] type with the provided `name`.
    #[must_use]
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the `description` of this [`InterfaceMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`InterfaceMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Interface(self)
    }
}

impl UnionMeta {
    /// Builds a new [`UnionMeta`] type of the provided member type `names`.
    #[must_use]
    pub fn new(name: impl Into<ArcStr>, names: &[ArcStr]) -> Self {
        Self {
            name: name.into(),
            description: None,
            of_type_names: names.to_vec(),
        }
    }

    /// Sets the `description` of this [`UnionMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps this [`UnionMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Union(self)
    }
}

/// Metadata of an argument to a field or a directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arg_type: Type,
    #[doc(hidden)]
    pub default_value: Option<InputValue>,
    #[doc(hidden)]
    pub directives: Vec<Directive>,
}

impl Argument {
    /// Builds a new [`Argument`] of the given [`Type`] with the given `name`.
    #[must_use]
    pub fn new(name: impl Into<ArcStr>, arg_type: Type) -> Self {
        Self {
            name: name.into(),
            description: None,
            arg_type,
            default_value: None,
            directives: vec![],
        }
    }

    /// Sets the `description` of this [`Argument`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value of this [`Argument`].
    ///
    /// Overwrites any previously set default value.
    #[must_use]
    pub fn default_value(mut self, val: InputValue) -> Self {
        self.default_value = Some(val);
        self
    }

    /// Appends the given `directive` to this [`Argument`].
    #[must_use]
    pub fn directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }

    /// Indicates whether this [`Argument`] is used only by the introspection
    /// system.
    pub fn is_builtin(&self) -> bool {
        self.name.starts_with("__")
    }
}
