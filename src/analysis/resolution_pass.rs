use super::errors::Error;
use super::options::Options;
use crate::ast::typed::{BinOp, CompilationUnit, Expression as TypedExpression, Statement as TypedStatement};
use crate::ast::untyped::{BinOpKind, Expression, Item, Statement, TranslationUnit};
use crate::source_location::Location;
use crate::symbol_table::{ScopeId, SymbolId};
use crate::types::Type;
use log::{debug, trace};

/// Kind of an integer literal.
const LITERAL_KIND: u8 = 8;

/// The second pass: resolves routine bodies into typed statements.
///
/// The active scope is passed explicitly to every call rather than kept as
/// mutable state on the resolver.
struct BodyResolver<'a> {
    unit: &'a CompilationUnit,
    options: &'a Options,
}

impl<'a> BodyResolver<'a> {
    fn new(unit: &'a CompilationUnit, options: &'a Options) -> Self {
        Self { unit, options }
    }

    fn resolve_body(&self, scope: ScopeId, body: &[Statement]) -> Result<Box<[TypedStatement]>, Error> {
        let mut statements = Vec::with_capacity(body.len());
        for stmt in body {
            statements.push(self.resolve_statement(scope, stmt)?);
        }
        Ok(statements.into_boxed_slice())
    }

    fn resolve_statement(&self, scope: ScopeId, stmt: &Statement) -> Result<TypedStatement, Error> {
        match stmt {
            Statement::Assignment {
                target,
                value,
                location,
            } => self.resolve_assignment(scope, target, value, location),
        }
    }

    fn resolve_assignment(
        &self,
        scope: ScopeId,
        untyped_target: &Expression,
        untyped_value: &Expression,
        location: &Location,
    ) -> Result<TypedStatement, Error> {
        let target = self.resolve_expression(scope, untyped_target)?;
        let value = self.resolve_expression(scope, untyped_value)?;

        if self.options.check_assignment_types && !target.type_().same_variant(&value.type_()) {
            return Err(Error::AssignmentTypeMismatch {
                target: target.type_(),
                value: value.type_(),
                location: location.clone(),
            });
        }

        Ok(TypedStatement::Assignment {
            target,
            value,
            location: location.clone(),
        })
    }

    fn resolve_expression(&self, scope: ScopeId, expr: &Expression) -> Result<TypedExpression, Error> {
        match expr {
            Expression::BinOp {
                left,
                op,
                right,
                location,
            } => self.resolve_binop(scope, left, *op, right, location),
            Expression::Name { id, location } => self.resolve_name(scope, id, location),
            Expression::Num { value, location } => Ok(TypedExpression::NumericLiteral {
                value: *value,
                type_: Type::integer(LITERAL_KIND),
                location: location.clone(),
            }),
        }
    }

    fn resolve_binop(
        &self,
        scope: ScopeId,
        untyped_left: &Expression,
        op: BinOpKind,
        untyped_right: &Expression,
        location: &Location,
    ) -> Result<TypedExpression, Error> {
        let left = self.resolve_expression(scope, untyped_left)?;
        let right = self.resolve_expression(scope, untyped_right)?;

        let (left_ty, right_ty) = (left.type_(), right.type_());
        if !left_ty.same_variant(&right_ty) {
            return Err(Error::OperandTypeMismatch {
                left: left_ty,
                right: right_ty,
                location: location.clone(),
            });
        }

        // TODO: derive the result type by numeric promotion of the operand types
        let type_ = Type::real(Type::DEFAULT_KIND);

        Ok(TypedExpression::BinaryOp {
            left: Box::new(left),
            op: BinOp::from(op),
            right: Box::new(right),
            type_,
            location: location.clone(),
        })
    }

    fn resolve_name(&self, scope: ScopeId, name: &str, location: &Location) -> Result<TypedExpression, Error> {
        let undefined = || Error::UndefinedSymbol {
            name: name.to_string(),
            location: location.clone(),
        };
        let symbol = self.unit.arena().lookup(scope, name).ok_or_else(undefined)?;
        let variable = self.unit.symbol(symbol).as_variable().ok_or_else(undefined)?;
        trace!("resolved '{}' to {:?} in {:?}", name, symbol, scope);

        Ok(TypedExpression::Var {
            symbol,
            scope,
            type_: variable.type_,
            location: location.clone(),
        })
    }
}

/// Finds the routine symbol declared for a top-level item.
pub(super) fn routine_symbol(unit: &CompilationUnit, item: &Item) -> Result<(SymbolId, ScopeId), Error> {
    let routine = item.routine();
    unit.lookup(&routine.name)
        .and_then(|id| unit.symbol(id).as_routine().map(|r| (id, r.scope)))
        .ok_or_else(|| Error::UndefinedSymbol {
            name: routine.name.clone(),
            location: routine.location.clone(),
        })
}

/// Runs the resolution pass, writing every routine's body back onto its symbol.
///
/// `unit` must come from running the declaration pass over the same `tu`.
pub fn resolve_unit(tu: &TranslationUnit, unit: &mut CompilationUnit, options: &Options) -> Result<(), Error> {
    for item in &tu.items {
        let (id, scope) = routine_symbol(unit, item)?;
        let body = BodyResolver::new(unit, options).resolve_body(scope, &item.routine().body)?;
        debug!("resolved {} statements in '{}'", body.len(), item.routine().name);

        if let Some(routine) = unit.arena_mut().symbol_mut(id).as_routine_mut() {
            routine.body = body;
        }
    }
    Ok(())
}
