use crate::ast::typed::Symbol;
use derive_more::Display;
use std::collections::HashMap;

/// Handle to a `Scope` owned by an `Arena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// Handle to a `Symbol` owned by an `Arena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SymbolId(usize);

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum ScopeKind {
    /// Holds the routines of a compilation unit
    #[display(fmt = "unit")]
    Unit,
    /// Holds the variables of one subroutine or function
    #[display(fmt = "routine")]
    Routine,
}

/// A symbol table for one lexical region.
///
/// A scope has no parent: lookups never fall through to an enclosing scope.
/// Once bound, a name is never removed or rebound.
#[derive(Debug)]
pub struct Scope {
    kind: ScopeKind,
    symbols: HashMap<String, SymbolId>,
}

impl Scope {
    fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            symbols: HashMap::new(),
        }
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.symbols.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Owns every scope and symbol of one compilation unit.
///
/// Allocation only ever appends, so handles stay valid for the lifetime of
/// the arena. Everything is released together when the arena is dropped.
#[derive(Debug, Default)]
pub struct Arena {
    scopes: Vec<Scope>,
    symbols: Vec<Symbol>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_scope(&mut self, kind: ScopeKind) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope::new(kind));
        id
    }

    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0]
    }

    pub(crate) fn symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.0]
    }

    /// Allocates `symbol` and binds it under its own name in `scope`.
    ///
    /// Returns `None` without allocating if the name is already bound there.
    pub fn declare(&mut self, scope: ScopeId, symbol: Symbol) -> Option<SymbolId> {
        if self.scopes[scope.0].contains(symbol.name()) {
            return None;
        }
        let id = SymbolId(self.symbols.len());
        self.scopes[scope.0].symbols.insert(symbol.name().to_string(), id);
        self.symbols.push(symbol);
        Some(id)
    }

    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<SymbolId> {
        self.scope(scope).lookup(name)
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }
}
