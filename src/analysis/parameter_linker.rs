use super::errors::Error;
use super::resolution_pass::routine_symbol;
use crate::ast::typed::{CompilationUnit, Expression};
use crate::ast::untyped::{Parameter, TranslationUnit};
use crate::symbol_table::ScopeId;
use log::debug;

fn link_parameter(unit: &CompilationUnit, scope: ScopeId, param: &Parameter) -> Result<Expression, Error> {
    let undeclared = || Error::UndeclaredDummyArgument {
        name: param.name.clone(),
        location: param.location.clone(),
    };
    let symbol = unit.arena().lookup(scope, &param.name).ok_or_else(undeclared)?;
    let variable = unit.symbol(symbol).as_variable().ok_or_else(undeclared)?;
    Ok(Expression::Var {
        symbol,
        scope,
        type_: variable.type_,
        location: param.location.clone(),
    })
}

/// Links each routine's dummy arguments to the variables declared for them.
///
/// `unit` must come from running the declaration pass over the same `tu`.
pub fn link_parameters(tu: &TranslationUnit, unit: &mut CompilationUnit) -> Result<(), Error> {
    for item in &tu.items {
        let (id, scope) = routine_symbol(unit, item)?;
        let parameters = item
            .routine()
            .parameters
            .iter()
            .map(|p| link_parameter(unit, scope, p))
            .collect::<Result<Box<[_]>, _>>()?;
        debug!("linked {} parameters of '{}'", parameters.len(), item.routine().name);

        if let Some(routine) = unit.arena_mut().symbol_mut(id).as_routine_mut() {
            routine.parameters = parameters;
        }
    }
    Ok(())
}
