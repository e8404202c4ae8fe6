//! Conversion of reflected parameters into schema argument definitions.

use arcstr::ArcStr;
use static_assertions::assert_impl_all;

use crate::{
    GenerationError,
    ast::{Directive, Type},
    reflect::{Parameter, TypeExpr, TypeExprKind},
    schema::{
        meta::Argument,
        model::{DirectiveRegistry, ScalarMap, TypeRegistry},
    },
};

/// Converts reflected [`Parameter`] descriptors into schema [`Argument`]
/// definitions.
///
/// A generator is a pure function of its inputs: it reads the type registry,
/// the scalar map and the directive registry, and keeps no state across
/// calls. Invocations are independent of each other, so arguments for many
/// parameters may be built concurrently from the same generator.
#[derive(Clone, Debug)]
pub struct SchemaGenerator {
    types: TypeRegistry,
    scalars: ScalarMap,
    directives: DirectiveRegistry,
}

assert_impl_all!(SchemaGenerator: Send, Sync);
assert_impl_all!(Argument: Send, Sync);
assert_impl_all!(GenerationError: Send, Sync);

impl SchemaGenerator {
    /// Creates a generator reading the given registries, with the default
    /// GraphQL scalar map.
    #[must_use]
    pub fn new(types: TypeRegistry, directives: DirectiveRegistry) -> Self {
        Self {
            types,
            scalars: ScalarMap::default(),
            directives,
        }
    }

    /// Replaces the scalar map.
    #[must_use]
    pub fn scalar_map(mut self, scalars: ScalarMap) -> Self {
        self.scalars = scalars;
        self
    }

    /// The type registry this generator reads.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// The directive registry this generator reads.
    pub fn directives(&self) -> &DirectiveRegistry {
        &self.directives
    }

    /// Builds one argument definition from one reflected parameter.
    ///
    /// The declared type is mapped to a schema type reference (wrapped
    /// non-null unless declared optional, ID-substituted under the ID
    /// marker) and checked for input legality. The resolved metadata then
    /// contributes the effective name, the description, and the directives:
    /// markers materialize in declaration order, keeping the first instance
    /// per directive name.
    ///
    /// Either a complete definition is returned or the call fails as a
    /// whole; no partial argument escapes, and a failed call leaves the
    /// generator as usable as before.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::UnmappableType`], if the declared type resolves
    ///   to no registered shape.
    /// - [`GenerationError::InvalidIdType`], if the ID marker is present on
    ///   a declaration without an ID representation.
    /// - [`GenerationError::InvalidInputType`], if the declared type maps to
    ///   an interface or union shape.
    /// - [`GenerationError::UnknownDirective`] or
    ///   [`GenerationError::UndeclaredDirectiveArgument`], if a directive
    ///   marker fails to materialize.
    pub fn build_argument(&self, parameter: &Parameter) -> Result<Argument, GenerationError> {
        let metadata = parameter.metadata();

        let arg_type = self.map_type(
            parameter.type_expr(),
            metadata.has_id_override(),
            parameter.name(),
        )?;
        self.ensure_input_type(&arg_type, parameter.name())?;

        // Arguments themselves cannot be deprecated
        // (graphql/graphql-spec#197), so markers are the only directive
        // source here.
        let mut directives = Vec::<Directive>::new();
        for marker in metadata.directive_markers() {
            let directive = self.directives.materialize(marker)?;
            if !directives.iter().any(|d| d.name == directive.name) {
                directives.push(directive);
            }
        }

        let name = metadata.name_override().unwrap_or(parameter.name()).clone();
        let mut argument = Argument::new(name, arg_type);
        if let Some(description) = metadata.description() {
            argument = argument.description(description.clone());
        }
        Ok(directives.into_iter().fold(argument, Argument::directive))
    }

    /// Maps a reflected type expression to a schema type reference.
    ///
    /// Primitives go through the scalar map (or its ID entry when `as_id`
    /// is set), named expressions must refer to a registered shape, and
    /// lists map element-wise. Every nesting level declared non-optional is
    /// wrapped non-null; the wrapping never stacks.
    ///
    /// `parameter` only identifies the offending declaration in errors.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::UnmappableType`], if a name resolves to no
    ///   registered shape.
    /// - [`GenerationError::InvalidIdType`], if `as_id` is set on a
    ///   declaration without an ID representation.
    pub fn map_type(
        &self,
        expr: &TypeExpr,
        as_id: bool,
        parameter: &ArcStr,
    ) -> Result<Type, GenerationError> {
        let mapped = match expr.kind() {
            TypeExprKind::Primitive(primitive) => {
                let name = if as_id {
                    self.scalars.id_for(*primitive).ok_or_else(|| {
                        GenerationError::InvalidIdType {
                            type_name: self.scalars.scalar_for(*primitive).clone(),
                            parameter: parameter.clone(),
                        }
                    })?
                } else {
                    self.scalars.scalar_for(*primitive)
                };
                self.named_type(name, parameter)?
            }
            TypeExprKind::Named(name) => {
                if as_id {
                    return Err(GenerationError::InvalidIdType {
                        type_name: name.clone(),
                        parameter: parameter.clone(),
                    });
                }
                self.named_type(name, parameter)?
            }
            TypeExprKind::List(element) => {
                Type::List(self.map_type(element, as_id, parameter)?.into())
            }
        };
        Ok(if expr.is_nullable() {
            mapped
        } else {
            mapped.non_null()
        })
    }

    /// Checks that the innermost named type of `ty` is legal in input
    /// positions.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::InvalidInputType`], if the shape is an interface
    ///   or a union.
    /// - [`GenerationError::UnmappableType`], if the name is not registered
    ///   at all.
    pub fn ensure_input_type(&self, ty: &Type, parameter: &ArcStr) -> Result<(), GenerationError> {
        let name = ty.innermost_name();
        let meta = self.types.concrete_type_by_name(name).ok_or_else(|| {
            GenerationError::UnmappableType {
                type_name: name.into(),
                parameter: parameter.clone(),
            }
        })?;
        if meta.is_input() {
            Ok(())
        } else {
            Err(GenerationError::InvalidInputType {
                type_name: meta.name().clone(),
                parameter: parameter.clone(),
            })
        }
    }

    fn named_type(&self, name: &ArcStr, parameter: &ArcStr) -> Result<Type, GenerationError> {
        if self.types.contains(name) {
            Ok(Type::Named(name.clone()))
        } else {
            Err(GenerationError::UnmappableType {
                type_name: name.clone(),
                parameter: parameter.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        GenerationError,
        ast::{InputValue, Type},
        reflect::{DirectiveMarker, Marker, Parameter, Primitive, TypeExpr},
        schema::{
            meta::{
                Argument, EnumMeta, EnumValue, InputObjectMeta, InterfaceMeta, ScalarMeta,
                UnionMeta,
            },
            model::{DirectiveLocation, DirectiveRegistry, DirectiveType, ScalarMap, TypeRegistry},
        },
    };

    use super::SchemaGenerator;

    fn test_generator() -> SchemaGenerator {
        let mut types = TypeRegistry::new();
        types.register(
            EnumMeta::new(
                "Episode",
                &[EnumValue::new("NEWHOPE"), EnumValue::new("EMPIRE")],
            )
            .into_meta(),
        );
        types.register(
            InputObjectMeta::new(
                "ReviewInput",
                &[Argument::new(
                    "stars",
                    Type::NonNullNamed(arcstr::literal!("Int")),
                )],
            )
            .into_meta(),
        );
        types.register(InterfaceMeta::new("Character").into_meta());
        types.register(
            UnionMeta::new(
                "SearchResult",
                &[arcstr::literal!("Human"), arcstr::literal!("Droid")],
            )
            .into_meta(),
        );

        let mut directives = DirectiveRegistry::new();
        directives.register(DirectiveType::new(
            "SimpleDirective",
            &[DirectiveLocation::ArgumentDefinition],
            &[],
        ));
        directives.register(DirectiveType::new(
            "length",
            &[DirectiveLocation::ArgumentDefinition],
            &[
                Argument::new("min", Type::Named(arcstr::literal!("Int")))
                    .default_value(InputValue::from(0)),
                Argument::new("max", Type::Named(arcstr::literal!("Int"))),
            ],
        ));

        SchemaGenerator::new(types, directives)
    }

    fn string_parameter() -> Parameter {
        Parameter::new("input", TypeExpr::primitive(Primitive::String))
    }

    #[test]
    fn test_plain_string_parameter() {
        let argument = test_generator().build_argument(&string_parameter()).unwrap();

        assert_eq!(argument.name.as_str(), "input");
        assert_eq!(argument.arg_type.to_string(), "String!");
        assert_eq!(argument.description, None);
        assert_eq!(argument.directives, vec![]);
    }

    #[test]
    fn test_description_is_set_verbatim() {
        let parameter = string_parameter()
            .marker(Marker::Description("Argument description".into()));
        let argument = test_generator().build_argument(&parameter).unwrap();

        assert_eq!(
            argument.description.as_deref(),
            Some("Argument description"),
        );
    }

    #[test]
    fn test_first_description_wins() {
        let parameter = string_parameter()
            .marker(Marker::Description("first".into()))
            .marker(Marker::Description("second".into()));
        let argument = test_generator().build_argument(&parameter).unwrap();

        assert_eq!(argument.description.as_deref(), Some("first"));
    }

    #[test]
    fn test_name_can_be_overridden() {
        let parameter = string_parameter().marker(Marker::Name("newName".into()));
        let argument = test_generator().build_argument(&parameter).unwrap();

        assert_eq!(argument.name.as_str(), "newName");
    }

    #[test]
    fn test_directives_are_materialized() {
        let parameter = string_parameter()
            .marker(Marker::Directive(DirectiveMarker::new("SimpleDirective")));
        let argument = test_generator().build_argument(&parameter).unwrap();

        assert_eq!(argument.directives.len(), 1);
        assert_eq!(argument.directives[0].name.as_str(), "simpleDirective");
        assert!(argument.directives[0].arguments.is_empty());
    }

    #[test]
    fn test_duplicate_directives_keep_the_first_instance() {
        let parameter = string_parameter()
            .marker(Marker::Directive(
                DirectiveMarker::new("length").argument("max", 10),
            ))
            .marker(Marker::Directive(DirectiveMarker::new("SimpleDirective")))
            .marker(Marker::Directive(
                DirectiveMarker::new("length").argument("max", 20),
            ));
        let argument = test_generator().build_argument(&parameter).unwrap();

        let rendered: Vec<_> = argument
            .directives
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, ["@length(min: 0, max: 10)", "@simpleDirective"]);
    }

    #[test]
    fn test_id_override_on_int() {
        let parameter = Parameter::new("idArg", TypeExpr::primitive(Primitive::Int))
            .marker(Marker::Id);
        let argument = test_generator().build_argument(&parameter).unwrap();

        assert_eq!(argument.arg_type.to_string(), "ID!");
    }

    #[test]
    fn test_id_override_on_optional_string() {
        let parameter = Parameter::new(
            "idArg",
            TypeExpr::primitive(Primitive::String).nullable(),
        )
        .marker(Marker::Id);
        let argument = test_generator().build_argument(&parameter).unwrap();

        assert_eq!(argument.arg_type.to_string(), "ID");
    }

    #[test]
    fn test_id_override_rejects_floats() {
        let parameter = Parameter::new("idArg", TypeExpr::primitive(Primitive::Float))
            .marker(Marker::Id);
        let err = test_generator().build_argument(&parameter).unwrap_err();

        assert_eq!(
            err,
            GenerationError::InvalidIdType {
                type_name: "Float".into(),
                parameter: "idArg".into(),
            },
        );
    }

    #[test]
    fn test_id_override_rejects_named_types() {
        let parameter = Parameter::new("idArg", TypeExpr::named("Episode")).marker(Marker::Id);
        let err = test_generator().build_argument(&parameter).unwrap_err();

        assert_eq!(
            err,
            GenerationError::InvalidIdType {
                type_name: "Episode".into(),
                parameter: "idArg".into(),
            },
        );
    }

    #[test]
    fn test_optional_parameters_stay_nullable() {
        let parameter = Parameter::new("input", TypeExpr::primitive(Primitive::Int).nullable());
        let argument = test_generator().build_argument(&parameter).unwrap();

        assert_eq!(argument.arg_type.to_string(), "Int");
        assert!(!argument.arg_type.is_non_null());
    }

    #[test]
    fn test_interface_parameters_are_rejected() {
        let generator = test_generator();
        let parameter = Parameter::new("input", TypeExpr::named("Character"));
        let err = generator.build_argument(&parameter).unwrap_err();

        assert_eq!(
            err,
            GenerationError::InvalidInputType {
                type_name: "Character".into(),
                parameter: "input".into(),
            },
        );

        // A failed call must not poison the generator.
        assert!(generator.build_argument(&string_parameter()).is_ok());
    }

    #[test]
    fn test_union_parameters_are_rejected() {
        let parameter = Parameter::new("input", TypeExpr::named("SearchResult"));
        let err = test_generator().build_argument(&parameter).unwrap_err();

        assert_eq!(
            err,
            GenerationError::InvalidInputType {
                type_name: "SearchResult".into(),
                parameter: "input".into(),
            },
        );
    }

    #[test]
    fn test_enum_and_input_object_parameters_are_accepted() {
        let generator = test_generator();

        let episode = generator
            .build_argument(&Parameter::new("episode", TypeExpr::named("Episode")))
            .unwrap();
        assert_eq!(episode.arg_type.to_string(), "Episode!");

        let review = generator
            .build_argument(&Parameter::new(
                "review",
                TypeExpr::named("ReviewInput").nullable(),
            ))
            .unwrap();
        assert_eq!(review.arg_type.to_string(), "ReviewInput");
    }

    #[test]
    fn test_unregistered_types_are_unmappable() {
        let parameter = Parameter::new("input", TypeExpr::named("Mystery"));
        let err = test_generator().build_argument(&parameter).unwrap_err();

        assert_eq!(
            err,
            GenerationError::UnmappableType {
                type_name: "Mystery".into(),
                parameter: "input".into(),
            },
        );
    }

    #[test]
    fn test_unknown_directives_fail_the_whole_argument() {
        let parameter = string_parameter()
            .marker(Marker::Directive(DirectiveMarker::new("Missing")));
        let err = test_generator().build_argument(&parameter).unwrap_err();

        assert_eq!(
            err,
            GenerationError::UnknownDirective {
                name: "Missing".into(),
            },
        );
    }

    #[test]
    fn test_undeclared_directive_arguments_fail_the_whole_argument() {
        let parameter = string_parameter().marker(Marker::Directive(
            DirectiveMarker::new("SimpleDirective").argument("level", 3),
        ));
        let err = test_generator().build_argument(&parameter).unwrap_err();

        assert_eq!(
            err,
            GenerationError::UndeclaredDirectiveArgument {
                directive: "simpleDirective".into(),
                argument: "level".into(),
            },
        );
    }

    #[test]
    fn test_lists_map_element_wise() {
        let generator = test_generator();

        let required_of_required = generator
            .build_argument(&Parameter::new(
                "input",
                TypeExpr::list(TypeExpr::primitive(Primitive::String)),
            ))
            .unwrap();
        assert_eq!(required_of_required.arg_type.to_string(), "[String!]!");

        let required_of_optional = generator
            .build_argument(&Parameter::new(
                "input",
                TypeExpr::list(TypeExpr::primitive(Primitive::String).nullable()),
            ))
            .unwrap();
        assert_eq!(required_of_optional.arg_type.to_string(), "[String]!");

        let optional_of_required = generator
            .build_argument(&Parameter::new(
                "input",
                TypeExpr::list(TypeExpr::primitive(Primitive::String)).nullable(),
            ))
            .unwrap();
        assert_eq!(optional_of_required.arg_type.to_string(), "[String!]");
    }

    #[test]
    fn test_id_override_propagates_into_lists() {
        let parameter = Parameter::new(
            "ids",
            TypeExpr::list(TypeExpr::primitive(Primitive::Int)),
        )
        .marker(Marker::Id);
        let argument = test_generator().build_argument(&parameter).unwrap();

        assert_eq!(argument.arg_type.to_string(), "[ID!]!");
    }

    #[test]
    fn test_nested_lists() {
        let parameter = Parameter::new(
            "matrix",
            TypeExpr::list(TypeExpr::list(TypeExpr::primitive(Primitive::Float)).nullable()),
        );
        let argument = test_generator().build_argument(&parameter).unwrap();

        assert_eq!(argument.arg_type.to_string(), "[[Float!]]!");
    }

    #[test]
    fn test_building_is_repeatable() {
        let generator = test_generator();
        let parameter = Parameter::new("episode", TypeExpr::named("Episode").nullable())
            .marker(Marker::Description("Episode to fetch.".into()))
            .marker(Marker::Directive(DirectiveMarker::new("SimpleDirective")));

        let first = generator.build_argument(&parameter).unwrap();
        let second = generator.build_argument(&parameter).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.arg_type.to_string(), "Episode");
    }

    #[test]
    fn test_custom_scalar_map() {
        let mut types = TypeRegistry::new();
        types.register(ScalarMeta::new("BigInt").into_meta());
        types.register(ScalarMeta::new("Snowflake").into_meta());
        let generator = SchemaGenerator::new(types, DirectiveRegistry::new())
            .scalar_map(ScalarMap::default().map(Primitive::Int, "BigInt").id("Snowflake"));

        let plain = generator
            .build_argument(&Parameter::new("count", TypeExpr::primitive(Primitive::Int)))
            .unwrap();
        assert_eq!(plain.arg_type.to_string(), "BigInt!");

        let id = generator
            .build_argument(
                &Parameter::new("ref", TypeExpr::primitive(Primitive::Int)).marker(Marker::Id),
            )
            .unwrap();
        assert_eq!(id.arg_type.to_string(), "Snowflake!");
    }

    #[test]
    fn test_remapped_scalars_must_be_registered() {
        let generator = SchemaGenerator::new(TypeRegistry::new(), DirectiveRegistry::new())
            .scalar_map(ScalarMap::default().map(Primitive::Int, "BigInt"));
        let err = generator
            .build_argument(&Parameter::new("count", TypeExpr::primitive(Primitive::Int)))
            .unwrap_err();

        assert_eq!(
            err,
            GenerationError::UnmappableType {
                type_name: "BigInt".into(),
                parameter: "count".into(),
            },
        );
    }
}
