#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};

mod ast;
mod generator;
mod reflect;
pub(crate) mod schema;
mod types;
mod util;

// Needs to be public so adapters can normalize identifiers the same way the
// registries do.
pub use crate::util::to_field_name;

pub use crate::{
    ast::{Directive, InputValue, Type},
    generator::SchemaGenerator,
    reflect::{DirectiveMarker, Marker, Metadata, Parameter, Primitive, TypeExpr, TypeExprKind},
    schema::{
        meta,
        model::{DirectiveLocation, DirectiveRegistry, DirectiveType, ScalarMap, TypeRegistry},
    },
    types::name::{Name, NameParseError},
};

/// An error that prevented an argument definition from being generated.
///
/// Every variant is fatal to the [`SchemaGenerator::build_argument`] call
/// raising it: nothing is substituted or partially returned, and each
/// variant carries the identities needed to report the offending
/// declaration.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum GenerationError {
    /// A declared type resolved to a name with no registered shape.
    #[display("type `{type_name}` of parameter `{parameter}` has no registered schema shape")]
    UnmappableType {
        /// Name the declared type resolved to.
        type_name: ArcStr,
        /// Declared name of the offending parameter.
        parameter: ArcStr,
    },

    /// A declared type mapped to an interface or union shape, which cannot
    /// occur in input positions.
    #[display("type `{type_name}` of parameter `{parameter}` cannot occur in input positions")]
    InvalidInputType {
        /// Name of the non-input shape.
        type_name: ArcStr,
        /// Declared name of the offending parameter.
        parameter: ArcStr,
    },

    /// The ID marker was placed on a declaration that has no ID
    /// representation.
    ///
    /// Only integer and string declarations may be represented as the ID
    /// scalar.
    #[display("parameter `{parameter}` cannot represent type `{type_name}` as the ID scalar")]
    InvalidIdType {
        /// Name the declaration would have mapped to without the marker.
        type_name: ArcStr,
        /// Declared name of the offending parameter.
        parameter: ArcStr,
    },

    /// A directive marker referenced an identifier no registered directive
    /// normalizes to.
    #[display("directive `{name}` is not registered")]
    UnknownDirective {
        /// The marker's identifier, as written.
        name: ArcStr,
    },

    /// A directive marker bound an argument its definition does not declare.
    #[display("directive `{directive}` declares no argument `{argument}`")]
    UndeclaredDirectiveArgument {
        /// Normalized name of the directive definition.
        directive: ArcStr,
        /// The undeclared argument name.
        argument: ArcStr,
    },
}
