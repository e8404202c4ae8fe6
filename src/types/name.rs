use std::{borrow::Borrow, fmt, str::FromStr};

use arcstr::ArcStr;
use derive_more::with_trait::{Display, Error};

/// A validated schema name.
///
/// Everything addressable in a generated schema (types, directives,
/// arguments) is keyed by a name matching `/^[_A-Za-z][_0-9A-Za-z]*$/`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Name(ArcStr);

/// Error of an invalid [`Name`] being parsed.
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("names must match /^[_A-Za-z][_0-9A-Za-z]*$/, but `{_0}` does not")]
pub struct NameParseError(#[error(not(source))] ArcStr);

impl Name {
    /// Indicates whether the given `input` is a valid [`Name`].
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        let mut chars = input.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !first.is_ascii_alphabetic() && first != '_' {
            return false;
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Returns this [`Name`] as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Name {
    type Err = NameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.into()))
        } else {
            Err(NameParseError(s.into()))
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Name> for ArcStr {
    fn from(name: Name) -> Self {
        name.0
    }
}
