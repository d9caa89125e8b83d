//! The syntax tree handed to semantic analysis by the parser.
//!
//! Nothing here is validated beyond its shape: names are unresolved, type names
//! are plain strings and attributes are uninterpreted.

use crate::source_location::{Locatable, Location};
use derive_more::Display;
use locatable_derive::Locatable;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum BinOpKind {
    #[display(fmt = "+")]
    Add,
    #[display(fmt = "-")]
    Sub,
    #[display(fmt = "*")]
    Mul,
    #[display(fmt = "/")]
    Div,
    #[display(fmt = "**")]
    Pow,
}

#[derive(Clone, Debug, PartialEq, Locatable)]
pub enum Expression {
    BinOp {
        left: Box<Self>,
        op: BinOpKind,
        right: Box<Self>,
        location: Location,
    },
    Name {
        id: String,
        location: Location,
    },
    Num {
        value: i64,
        location: Location,
    },
}

impl Expression {
    pub fn binop(left: Expression, op: BinOpKind, right: Expression) -> Self {
        let location = left.location().merge(&right.location());
        Self::BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
            location,
        }
    }

    pub fn name(id: impl Into<String>, location: Location) -> Self {
        Self::Name {
            id: id.into(),
            location,
        }
    }

    pub fn num(value: i64, location: Location) -> Self {
        Self::Num { value, location }
    }
}

#[derive(Clone, Debug, PartialEq, Locatable)]
pub enum Statement {
    Assignment {
        target: Expression,
        value: Expression,
        location: Location,
    },
}

impl Statement {
    pub fn assignment(target: Expression, value: Expression) -> Self {
        let location = target.location().merge(&value.location());
        Self::Assignment {
            target,
            value,
            location,
        }
    }
}

/// An attribute in a declaration, e.g. `intent(in)`.
#[derive(Clone, Debug, PartialEq, Locatable)]
pub struct Attribute {
    pub name: String,
    pub args: Vec<String>,
    pub location: Location,
}

impl Attribute {
    pub fn new<I, S>(name: impl Into<String>, args: I, location: Location) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
            location,
        }
    }
}

/// A local entity declaration, e.g. `integer, intent(in) :: x`.
#[derive(Clone, Debug, PartialEq, Locatable)]
pub struct Declaration {
    pub name: String,
    pub type_name: String,
    pub attributes: Vec<Attribute>,
    pub location: Location,
}

impl Declaration {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            attributes: Vec::new(),
            location,
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// A formal parameter ("dummy argument") name.
#[derive(Clone, Debug, PartialEq, Locatable)]
pub struct Parameter {
    pub name: String,
    pub location: Location,
}

/// `bind(<language>, name="...")` on a routine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bind {
    pub language: String,
    pub name: Option<String>,
}

/// The shape shared by subroutine and function definitions.
#[derive(Clone, Debug, PartialEq, Locatable)]
pub struct Routine {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub declarations: Vec<Declaration>,
    pub body: Vec<Statement>,
    pub bind: Option<Bind>,
    pub location: Location,
}

impl Routine {
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            declarations: Vec::new(),
            body: Vec::new(),
            bind: None,
            location,
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, location: Location) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            location,
        });
        self
    }

    pub fn with_declaration(mut self, decl: Declaration) -> Self {
        self.declarations.push(decl);
        self
    }

    pub fn with_statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn with_bind(mut self, bind: Bind) -> Self {
        self.bind = Some(bind);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Locatable)]
pub enum Item {
    Subroutine(Routine),
    Function(Routine),
}

impl Item {
    pub fn routine(&self) -> &Routine {
        match self {
            Item::Subroutine(r) | Item::Function(r) => r,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslationUnit {
    pub items: Vec<Item>,
}

impl TranslationUnit {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}
