//! Registries of the shapes and directives a generated schema may use.

use arcstr::ArcStr;
use derive_more::with_trait::Display;
use fnv::FnvHashMap;
use indexmap::IndexMap;

use crate::{
    GenerationError,
    ast::{Directive, InputValue, Type},
    reflect::{DirectiveMarker, Primitive},
    schema::meta::{Argument, MetaType, ScalarMeta},
    types::name::Name,
    util::to_field_name,
};

/// The mapping from reflected primitive types to schema scalar names.
///
/// [`Default`] yields the GraphQL built-in scalars; [`ScalarMap::map`] and
/// [`ScalarMap::id`] override single entries for hosts with custom scalar
/// sets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScalarMap {
    boolean: ArcStr,
    int: ArcStr,
    float: ArcStr,
    string: ArcStr,
    id: ArcStr,
}

impl Default for ScalarMap {
    fn default() -> Self {
        Self {
            boolean: arcstr::literal!("Boolean"),
            int: arcstr::literal!("Int"),
            float: arcstr::literal!("Float"),
            string: arcstr::literal!("String"),
            id: arcstr::literal!("ID"),
        }
    }
}

impl ScalarMap {
    /// Overrides the scalar name the given `primitive` maps to.
    #[must_use]
    pub fn map(mut self, primitive: Primitive, name: impl Into<ArcStr>) -> Self {
        let name = name.into();
        match primitive {
            Primitive::Boolean => self.boolean = name,
            Primitive::Int => self.int = name,
            Primitive::Float => self.float = name,
            Primitive::String => self.string = name,
        }
        self
    }

    /// Overrides the name of the ID scalar.
    #[must_use]
    pub fn id(mut self, name: impl Into<ArcStr>) -> Self {
        self.id = name.into();
        self
    }

    /// The scalar name the given `primitive` maps to by default.
    pub fn scalar_for(&self, primitive: Primitive) -> &ArcStr {
        match primitive {
            Primitive::Boolean => &self.boolean,
            Primitive::Int => &self.int,
            Primitive::Float => &self.float,
            Primitive::String => &self.string,
        }
    }

    /// The scalar name the given `primitive` maps to under the ID override.
    ///
    /// Only integer and string declarations have an ID representation;
    /// everything else returns `None`.
    pub fn id_for(&self, primitive: Primitive) -> Option<&ArcStr> {
        match primitive {
            Primitive::Int | Primitive::String => Some(&self.id),
            Primitive::Boolean | Primitive::Float => None,
        }
    }

    /// The name of the ID scalar.
    pub fn id_scalar(&self) -> &ArcStr {
        &self.id
    }
}

/// The read-only set of type shapes a generated schema may reference, keyed
/// by validated name.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRegistry {
    types: FnvHashMap<Name, MetaType>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry seeded with the five built-in scalars.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for name in [
            arcstr::literal!("Boolean"),
            arcstr::literal!("Int"),
            arcstr::literal!("Float"),
            arcstr::literal!("String"),
            arcstr::literal!("ID"),
        ] {
            registry.register(ScalarMeta::new(name).into_meta());
        }
        registry
    }

    /// Creates a registry without any seeded types.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            types: FnvHashMap::default(),
        }
    }

    /// Registers `meta`, replacing any previous entry with the same name.
    ///
    /// # Panics
    ///
    /// Panics if the meta's name is not a valid [`Name`]. Registration
    /// happens at configuration time, where a bad name is a programming
    /// error rather than an input to recover from.
    pub fn register(&mut self, meta: MetaType) {
        let name = meta
            .name()
            .parse::<Name>()
            .unwrap_or_else(|e| panic!("invalid type name: {e}"));
        self.types.insert(name, meta);
    }

    /// Looks up the shape registered under `name`.
    pub fn concrete_type_by_name(&self, name: &str) -> Option<&MetaType> {
        self.types.get(name)
    }

    /// Indicates whether `name` refers to a registered shape.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// All registered shapes, sorted by name for stable iteration.
    pub fn type_list(&self) -> Vec<&MetaType> {
        let mut types: Vec<_> = self.types.values().collect();
        types.sort_by(|l, r| l.name().cmp(r.name()));
        types
    }
}

/// Schema positions a directive may be declared on.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum DirectiveLocation {
    #[display("schema")]
    Schema,
    #[display("scalar")]
    Scalar,
    #[display("object")]
    Object,
    #[display("field definition")]
    FieldDefinition,
    #[display("argument definition")]
    ArgumentDefinition,
    #[display("interface")]
    Interface,
    #[display("union")]
    Union,
    #[display("enum")]
    Enum,
    #[display("enum value")]
    EnumValue,
    #[display("input object")]
    InputObject,
    #[display("input field definition")]
    InputFieldDefinition,
}

/// The registered definition of a directive: its normalized name, the
/// locations it may appear at, and its declared argument schema.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveType {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub locations: Vec<DirectiveLocation>,
    #[doc(hidden)]
    pub arguments: Vec<Argument>,
}

impl DirectiveType {
    /// Declares the directive `name` at the given `locations` with the given
    /// argument schema.
    ///
    /// `name` is normalized to field style, so `SimpleDirective` and
    /// `simple_directive` both register as `simpleDirective`.
    #[must_use]
    pub fn new(name: &str, locations: &[DirectiveLocation], arguments: &[Argument]) -> Self {
        Self {
            name: to_field_name(name).as_ref().into(),
            description: None,
            locations: locations.to_vec(),
            arguments: arguments.to_vec(),
        }
    }

    /// Sets the `description` of this [`DirectiveType`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn new_deprecated() -> Self {
        Self::new(
            "deprecated",
            &[
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::ArgumentDefinition,
                DirectiveLocation::InputFieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            &[
                Argument::new("reason", Type::Named(arcstr::literal!("String")))
                    .default_value(InputValue::from("No longer supported")),
            ],
        )
    }

    fn new_specified_by() -> Self {
        Self::new(
            "specifiedBy",
            &[DirectiveLocation::Scalar],
            &[Argument::new(
                "url",
                Type::NonNullNamed(arcstr::literal!("String")),
            )],
        )
    }
}

/// The lookup from directive identifiers to registered definitions.
///
/// Identifiers are normalized to field style on both registration and
/// lookup, so author-facing spellings (`SimpleDirective`, `simple_directive`)
/// and registry names (`simpleDirective`) all resolve to the same entry.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveRegistry {
    directives: FnvHashMap<Name, DirectiveType>,
}

impl Default for DirectiveRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveRegistry {
    /// Creates a registry seeded with the built-in `deprecated` and
    /// `specifiedBy` directives.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(DirectiveType::new_deprecated());
        registry.register(DirectiveType::new_specified_by());
        registry
    }

    /// Creates a registry without the built-in directives.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            directives: FnvHashMap::default(),
        }
    }

    /// Registers `directive`, replacing any previous entry with the same
    /// normalized name.
    ///
    /// # Panics
    ///
    /// Panics if the directive's normalized name is not a valid [`Name`].
    /// Registration happens at configuration time, where a bad name is a
    /// programming error rather than an input to recover from.
    pub fn register(&mut self, directive: DirectiveType) {
        let name = directive
            .name
            .parse::<Name>()
            .unwrap_or_else(|e| panic!("invalid directive name: {e}"));
        self.directives.insert(name, directive);
    }

    /// Looks up a definition by `ident`, normalizing it first.
    pub fn directive_by_name(&self, ident: &str) -> Option<&DirectiveType> {
        self.directives.get(to_field_name(ident).as_ref())
    }

    /// All registered definitions, sorted by name for stable iteration.
    pub fn directive_list(&self) -> Vec<&DirectiveType> {
        let mut directives: Vec<_> = self.directives.values().collect();
        directives.sort_by(|l, r| l.name.cmp(&r.name));
        directives
    }

    /// Converts the metadata-declared `marker` into an applied [`Directive`].
    ///
    /// The definition is resolved by normalized name, then the marker's
    /// literal arguments are bound in the definition's declared order.
    /// Declared arguments the marker leaves unbound fall back to their
    /// default value, or are omitted when they have none.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::UnknownDirective`], if no definition matches the
    ///   marker's identifier.
    /// - [`GenerationError::UndeclaredDirectiveArgument`], if the marker
    ///   binds an argument the definition does not declare.
    pub fn materialize(&self, marker: &DirectiveMarker) -> Result<Directive, GenerationError> {
        let definition =
            self.directive_by_name(marker.name())
                .ok_or_else(|| GenerationError::UnknownDirective {
                    name: marker.name().clone(),
                })?;

        for bound in marker.arguments().keys() {
            if !definition.arguments.iter().any(|a| a.name == *bound) {
                return Err(GenerationError::UndeclaredDirectiveArgument {
                    directive: definition.name.clone(),
                    argument: bound.clone(),
                });
            }
        }

        let mut arguments = IndexMap::new();
        for declared in &definition.arguments {
            if let Some(value) = marker.arguments().get(declared.name.as_str()) {
                arguments.insert(declared.name.clone(), value.clone());
            } else if let Some(default) = &declared.default_value {
                arguments.insert(declared.name.clone(), default.clone());
            }
        }

        Ok(Directive {
            name: definition.name.clone(),
            arguments,
        })
    }
}
