use crate::source_location::Location;
use crate::types::{Type, TypeError};
use miette::Diagnostic;
use thiserror::Error;

/// This is the type used by semantic analysis to report errors.
/// Every variant carries the location of the offending syntax.
#[derive(Clone, Debug, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("Dummy argument '{name}' not defined")]
    #[diagnostic(
        code(sema::undeclared_dummy_argument),
        help("every dummy argument must be declared in the routine's specification part")
    )]
    UndeclaredDummyArgument { name: String, location: Location },

    #[error("'{name}' is already defined")]
    #[diagnostic(code(sema::duplicate_definition))]
    DuplicateDefinition { name: String, location: Location },

    #[error("Unsupported type: '{type_name}'")]
    #[diagnostic(
        code(sema::unsupported_type),
        help("only 'integer' and 'real' are supported")
    )]
    UnsupportedType { type_name: String, location: Location },

    #[error("intent() is empty. Must specify intent")]
    #[diagnostic(
        code(sema::empty_intent_specifier),
        help("use one of 'in', 'out' or 'inout'")
    )]
    EmptyIntentSpecifier { location: Location },

    #[error("Incorrect intent specifier: '{value}'")]
    #[diagnostic(
        code(sema::invalid_intent_specifier),
        help("use one of 'in', 'out' or 'inout'")
    )]
    InvalidIntentSpecifier { value: String, location: Location },

    #[error("Type mismatch in binary operation: '{left}' and '{right}'")]
    #[diagnostic(code(sema::operand_type_mismatch))]
    OperandTypeMismatch {
        left: Type,
        right: Type,
        location: Location,
    },

    #[error("Type mismatch in assignment: cannot assign '{value}' to '{target}'")]
    #[diagnostic(code(sema::assignment_type_mismatch))]
    AssignmentTypeMismatch {
        target: Type,
        value: Type,
        location: Location,
    },

    #[error("Symbol '{name}' is not defined")]
    #[diagnostic(code(sema::undefined_symbol))]
    UndefinedSymbol { name: String, location: Location },
}

impl Error {
    pub fn location(&self) -> &Location {
        match self {
            Error::UndeclaredDummyArgument { location, .. } => location,
            Error::DuplicateDefinition { location, .. } => location,
            Error::UnsupportedType { location, .. } => location,
            Error::EmptyIntentSpecifier { location } => location,
            Error::InvalidIntentSpecifier { location, .. } => location,
            Error::OperandTypeMismatch { location, .. } => location,
            Error::AssignmentTypeMismatch { location, .. } => location,
            Error::UndefinedSymbol { location, .. } => location,
        }
    }
}

// lifts errors from lower-level systems such as type name lookup into
// located semantic errors

pub trait ErrorLocation<T> {
    fn err_loc(self, location: &Location) -> Result<T, Error>;
}

impl<T> ErrorLocation<T> for Result<T, TypeError> {
    fn err_loc(self, location: &Location) -> Result<T, Error> {
        self.map_err(|e| match e {
            TypeError::UnknownType(type_name) => Error::UnsupportedType {
                type_name,
                location: location.clone(),
            },
        })
    }
}
