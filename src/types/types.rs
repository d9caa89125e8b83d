use super::error::TypeError;
use internment::Intern;
use std::fmt;
use std::mem::discriminant;
use std::ops::Deref;

/// The scalar types of the language. The payload is the kind, i.e. the
/// storage width in bytes.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Scalar {
    Integer(u8),
    Real(u8),
}

// Public reference type that hides Intern<Scalar> from users of this module
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Type(Intern<Scalar>);

impl Type {
    pub const DEFAULT_KIND: u8 = 4;

    pub fn integer(kind: u8) -> Self {
        Type(Intern::new(Scalar::Integer(kind)))
    }

    pub fn real(kind: u8) -> Self {
        Type(Intern::new(Scalar::Real(kind)))
    }

    /// Maps a declared type name such as `integer` to its default-kind type.
    pub fn from_name(name: &str) -> Result<Self, TypeError> {
        match name.to_ascii_lowercase().as_str() {
            "integer" => Ok(Self::integer(Self::DEFAULT_KIND)),
            "real" => Ok(Self::real(Self::DEFAULT_KIND)),
            _ => Err(TypeError::UnknownType(name.to_string())),
        }
    }

    pub fn kind(&self) -> u8 {
        match **self {
            Scalar::Integer(kind) | Scalar::Real(kind) => kind,
        }
    }

    /// True when both types are the same scalar variant, regardless of kind.
    pub fn same_variant(&self, other: &Type) -> bool {
        discriminant(&**self) == discriminant(&**other)
    }
}

impl Deref for Type {
    type Target = Scalar;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &**self {
            Scalar::Integer(kind) => write!(f, "integer({})", kind),
            Scalar::Real(kind) => write!(f, "real({})", kind),
        }
    }
}
