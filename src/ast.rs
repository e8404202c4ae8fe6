use std::fmt;

use arcstr::ArcStr;
use indexmap::IndexMap;

/// A reference to a type in the generated schema.
///
/// This enum carries no semantic information about the named type itself;
/// the registry does.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Type {
    /// A nullable named type, e.g. `String`.
    Named(ArcStr),
    /// A nullable list type, e.g. `[String]`.
    ///
    /// The list itself is what's nullable, the element type might be
    /// non-null.
    List(Box<Type>),
    /// A non-null named type, e.g. `String!`.
    NonNullNamed(ArcStr),
    /// A non-null list type, e.g. `[String]!`.
    ///
    /// The list itself is what's non-null, the element type might be null.
    NonNullList(Box<Type>),
}

impl Type {
    /// Gets the name of a named type.
    ///
    /// Only applies to named types; lists will return `None`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(n) | Self::NonNullNamed(n) => Some(n),
            Self::List(..) | Self::NonNullList(..) => None,
        }
    }

    /// Gets the innermost name by unpacking lists.
    ///
    /// All type references contain exactly one named type.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named(n) | Self::NonNullNamed(n) => n,
            Self::List(l) | Self::NonNullList(l) => l.innermost_name(),
        }
    }

    /// Determines if this reference only can represent non-null values.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNullNamed(_) | Self::NonNullList(_))
    }

    /// Wraps this reference into its non-null form.
    ///
    /// An already non-null reference is returned unchanged, so wrapping is
    /// idempotent and never stacks.
    #[must_use]
    pub fn non_null(self) -> Self {
        match self {
            Self::Named(n) => Self::NonNullNamed(n),
            Self::List(l) => Self::NonNullList(l),
            non_null => non_null,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{n}"),
            Self::NonNullNamed(n) => write!(f, "{n}!"),
            Self::List(t) => write!(f, "[{t}]"),
            Self::NonNullList(t) => write!(f, "[{t}]!"),
        }
    }
}

/// A literal value bound to a directive argument or used as an argument
/// default.
///
/// Unlike a query document value, these are always constant: there is no
/// variable form, and no source positions are tracked.
#[derive(Clone, Debug, PartialEq)]
pub enum InputValue {
    /// An explicit `null`.
    Null,
    /// A `true` or `false` literal.
    Boolean(bool),
    /// A 32-bit integer literal.
    Int(i32),
    /// A float literal.
    Float(f64),
    /// A string literal.
    String(String),
    /// An enum value literal, spelled without quotes.
    Enum(String),
    /// A list of values.
    List(Vec<InputValue>),
    /// An input object literal with ordered, unique keys.
    Object(IndexMap<ArcStr, InputValue>),
}

impl InputValue {
    /// Constructs an explicit `null` value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Constructs an enum value literal.
    pub fn enum_value(v: impl Into<String>) -> Self {
        Self::Enum(v.into())
    }

    /// Constructs a list of the given values.
    pub fn list(l: impl IntoIterator<Item = Self>) -> Self {
        Self::List(l.into_iter().collect())
    }

    /// Constructs an object from the given `(key, value)` pairs.
    pub fn object<K: Into<ArcStr>>(o: impl IntoIterator<Item = (K, Self)>) -> Self {
        Self::Object(o.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Indicates whether this value is an explicit `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for InputValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i32> for InputValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for InputValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for InputValue {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for InputValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T: Into<InputValue>> From<Option<T>> for InputValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "\"{v}\""),
            Self::Enum(v) => write!(f, "{v}"),
            Self::List(v) => {
                write!(f, "[")?;
                for (i, value) in v.iter().enumerate() {
                    value.fmt(f)?;
                    if i < v.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "]")
            }
            Self::Object(o) => {
                write!(f, "{{")?;
                for (i, (k, v)) in o.iter().enumerate() {
                    write!(f, "{k}: ")?;
                    v.fmt(f)?;
                    if i < o.len() - 1 {
                        write!(f, ", ")?;
                    }
                }
                write!(f, "}}")
            }
        }
    }
}

/// A directive applied to a schema element.
///
/// Produced by materializing a metadata marker against the registered
/// [`DirectiveType`](crate::DirectiveType) it references: the name is the
/// definition's normalized name, and the arguments follow the definition's
/// declared order.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    /// Normalized (field style) directive name.
    pub name: ArcStr,
    /// Bound argument values, keyed by declared argument name.
    pub arguments: IndexMap<ArcStr, InputValue>,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if self.arguments.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, (k, v)) in self.arguments.iter().enumerate() {
            write!(f, "{k}: {v}")?;
            if i < self.arguments.len() - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, ")")
    }
}
