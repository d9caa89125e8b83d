//! The typed IR produced by semantic analysis.

use super::iterators::ForEachExpression;
use super::untyped::{BinOpKind, Bind};
use crate::source_location::Location;
use crate::symbol_table::{Arena, Scope, ScopeId, ScopeKind, SymbolId};
use crate::types::Type;
use derive_more::Display;
use locatable_derive::Locatable;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Intent {
    #[display(fmt = "local")]
    Local,
    #[display(fmt = "in")]
    In,
    #[display(fmt = "out")]
    Out,
    #[display(fmt = "inout")]
    InOut,
}

impl Intent {
    /// Parses the argument of an `intent(...)` attribute.
    pub fn from_specifier(spec: &str) -> Option<Self> {
        match spec.to_ascii_lowercase().as_str() {
            "in" => Some(Intent::In),
            "out" => Some(Intent::Out),
            "inout" => Some(Intent::InOut),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum BinOp {
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

impl From<BinOpKind> for BinOp {
    fn from(kind: BinOpKind) -> Self {
        match kind {
            BinOpKind::Add => BinOp::Add,
            BinOpKind::Sub => BinOp::Sub,
            BinOpKind::Mul => BinOp::Mul,
            BinOpKind::Div => BinOp::Div,
            BinOpKind::Pow => BinOp::Pow,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Locatable)]
pub enum Expression {
    /// A reference to a `Variable` symbol and the scope it was resolved in
    Var {
        symbol: SymbolId,
        scope: ScopeId,
        type_: Type,
        location: Location,
    },
    NumericLiteral {
        value: i64,
        type_: Type,
        location: Location,
    },
    BinaryOp {
        left: Box<Self>,
        op: BinOp,
        right: Box<Self>,
        type_: Type,
        location: Location,
    },
}

impl Expression {
    pub fn type_(&self) -> Type {
        match self {
            Self::Var { type_, .. } => *type_,
            Self::NumericLiteral { type_, .. } => *type_,
            Self::BinaryOp { type_, .. } => *type_,
        }
    }

    pub fn as_var(&self) -> Option<SymbolId> {
        match self {
            Self::Var { symbol, .. } => Some(*symbol),
            _ => None,
        }
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

#[derive(Clone, Debug, PartialEq, Locatable)]
pub struct Variable {
    pub name: String,
    pub intent: Intent,
    pub type_: Type,
    pub location: Location,
}

/// Language binding info from `bind(c, name="...")`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub language: String,
    pub name: Option<String>,
}

impl From<&Bind> for Binding {
    fn from(bind: &Bind) -> Self {
        Self {
            language: bind.language.clone(),
            name: bind.name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RoutineKind {
    Subroutine,
    /// `return_var` refers to the implicit result variable named after the function
    Function { return_var: Expression },
}

/// A subroutine or function. Each routine owns its own scope.
///
/// `parameters` stays empty until parameter linking has run and `body` stays
/// empty until resolution has run.
#[derive(Clone, Debug, PartialEq, Locatable)]
pub struct Routine {
    pub name: String,
    pub kind: RoutineKind,
    pub scope: ScopeId,
    pub parameters: Box<[Expression]>,
    pub body: Box<[Statement]>,
    pub bind: Option<Binding>,
    pub location: Location,
}

impl Routine {
    pub fn is_function(&self) -> bool {
        matches!(self.kind, RoutineKind::Function { .. })
    }

    pub fn is_subroutine(&self) -> bool {
        matches!(self.kind, RoutineKind::Subroutine)
    }

    pub fn return_var(&self) -> Option<&Expression> {
        match &self.kind {
            RoutineKind::Function { return_var } => Some(return_var),
            RoutineKind::Subroutine => None,
        }
    }

    /// Every variable referenced from the body, in evaluation order, with repeats.
    pub fn referenced_variables(&self) -> Vec<SymbolId> {
        let mut result = Vec::new();
        let _ = self.for_each_expression(|e| {
            if let Some(id) = e.as_var() {
                result.push(id);
            }
        });
        result
    }
}

#[derive(Clone, Debug, PartialEq, Locatable)]
pub enum Symbol {
    Variable(Variable),
    Routine(Routine),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Variable(v) => &v.name,
            Symbol::Routine(r) => &r.name,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Symbol::Variable(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_routine(&self) -> Option<&Routine> {
        match self {
            Symbol::Routine(r) => Some(r),
            _ => None,
        }
    }

    pub(crate) fn as_routine_mut(&mut self) -> Option<&mut Routine> {
        match self {
            Symbol::Routine(r) => Some(r),
            _ => None,
        }
    }
}

/// The result of analyzing one translation unit.
///
/// Owns the arena holding every scope and symbol, the unit-level scope and the
/// routines declared in it, in source order.
#[derive(Debug)]
pub struct CompilationUnit {
    arena: Arena,
    global_scope: ScopeId,
    items: Vec<SymbolId>,
}

impl CompilationUnit {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let global_scope = arena.new_scope(ScopeKind::Unit);
        Self {
            arena,
            global_scope,
            items: Vec::new(),
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub(crate) fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    pub fn global_scope(&self) -> ScopeId {
        self.global_scope
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        self.arena.scope(id)
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        self.arena.symbol(id)
    }

    /// Looks up a name in the unit-level scope.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.arena.lookup(self.global_scope, name)
    }

    pub fn routine(&self, name: &str) -> Option<&Routine> {
        self.lookup(name).and_then(|id| self.symbol(id).as_routine())
    }

    /// Looks up a variable in the scope of the named routine.
    pub fn variable(&self, routine: &str, name: &str) -> Option<&Variable> {
        let scope = self.routine(routine)?.scope;
        let id = self.arena.lookup(scope, name)?;
        self.symbol(id).as_variable()
    }

    pub fn items(&self) -> &[SymbolId] {
        &self.items
    }

    pub fn routines(&self) -> impl Iterator<Item = &Routine> {
        self.items
            .iter()
            .filter_map(|id| self.arena.symbol(*id).as_routine())
    }

    /// Registers a routine in the unit scope. Returns `None` if its name is
    /// already taken.
    pub(crate) fn add_routine(&mut self, routine: Routine) -> Option<SymbolId> {
        let id = self.arena.declare(self.global_scope, Symbol::Routine(routine))?;
        self.items.push(id);
        Some(id)
    }
}

impl Default for CompilationUnit {
    fn default() -> Self {
        Self::new()
    }
}
