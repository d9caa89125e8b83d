use super::errors::{Error, ErrorLocation};
use crate::ast::typed::{Binding, CompilationUnit, Expression, Intent, Routine, RoutineKind, Symbol, Variable};
use crate::ast::untyped::{self, Attribute, Declaration, Item, TranslationUnit};
use crate::symbol_table::{ScopeId, ScopeKind};
use crate::types::Type;
use log::{debug, trace};

/// Kind of the implicit result variable of a function.
const RETURN_VAR_KIND: u8 = 8;

/// The first pass: builds the unit scope and one populated scope per routine.
///
/// Routines come out of this pass with empty parameter lists and bodies.
struct DeclarationPass {
    unit: CompilationUnit,
}

impl DeclarationPass {
    fn new() -> Self {
        Self {
            unit: CompilationUnit::new(),
        }
    }

    fn declare_item(&mut self, item: &Item) -> Result<(), Error> {
        match item {
            Item::Subroutine(r) => self.declare_routine(r, false),
            Item::Function(r) => self.declare_routine(r, true),
        }
    }

    fn declare_routine(&mut self, routine: &untyped::Routine, is_function: bool) -> Result<(), Error> {
        debug!(
            "declaring {} '{}'",
            if is_function { "function" } else { "subroutine" },
            routine.name
        );
        let scope = self.unit.arena_mut().new_scope(ScopeKind::Routine);

        // the result variable goes in first, so a local declaration of the
        // function's own name cannot change its type
        let kind = if is_function {
            RoutineKind::Function {
                return_var: self.declare_return_variable(scope, routine)?,
            }
        } else {
            RoutineKind::Subroutine
        };

        for decl in &routine.declarations {
            self.declare_variable(scope, decl)?;
        }

        check_dummy_arguments(routine)?;

        let symbol = Routine {
            name: routine.name.clone(),
            kind,
            scope,
            parameters: Box::default(),
            body: Box::default(),
            bind: routine.bind.as_ref().map(Binding::from),
            location: routine.location.clone(),
        };

        self.unit
            .add_routine(symbol)
            .map(|_| ())
            .ok_or_else(|| Error::DuplicateDefinition {
                name: routine.name.clone(),
                location: routine.location.clone(),
            })
    }

    fn declare_return_variable(
        &mut self,
        scope: ScopeId,
        routine: &untyped::Routine,
    ) -> Result<Expression, Error> {
        let type_ = Type::integer(RETURN_VAR_KIND);
        let variable = Variable {
            name: routine.name.clone(),
            intent: Intent::Local,
            type_,
            location: routine.location.clone(),
        };
        let symbol = self
            .unit
            .arena_mut()
            .declare(scope, Symbol::Variable(variable))
            .ok_or_else(|| Error::DuplicateDefinition {
                name: routine.name.clone(),
                location: routine.location.clone(),
            })?;
        Ok(Expression::Var {
            symbol,
            scope,
            type_,
            location: routine.location.clone(),
        })
    }

    fn declare_variable(&mut self, scope: ScopeId, decl: &Declaration) -> Result<(), Error> {
        // the first declaration of a name wins; later ones are ignored
        if self.unit.scope(scope).contains(&decl.name) {
            trace!("ignoring redeclaration of '{}'", decl.name);
            return Ok(());
        }

        let type_ = Type::from_name(&decl.type_name).err_loc(&decl.location)?;
        let intent = analyze_intent(&decl.attributes)?;
        trace!("declaring variable '{}': {} intent({})", decl.name, type_, intent);

        let variable = Variable {
            name: decl.name.clone(),
            intent,
            type_,
            location: decl.location.clone(),
        };
        self.unit
            .arena_mut()
            .declare(scope, Symbol::Variable(variable));
        Ok(())
    }
}

/// Every dummy argument needs an explicit declaration. The implicit result
/// variable of a function does not count as one.
fn check_dummy_arguments(routine: &untyped::Routine) -> Result<(), Error> {
    for param in &routine.parameters {
        if !routine.declarations.iter().any(|d| d.name == param.name) {
            return Err(Error::UndeclaredDummyArgument {
                name: param.name.clone(),
                location: param.location.clone(),
            });
        }
    }
    Ok(())
}

/// Computes the intent of a declaration from its attributes.
///
/// Attributes other than `intent` are ignored. If `intent` appears more than
/// once the last one wins.
fn analyze_intent(attributes: &[Attribute]) -> Result<Intent, Error> {
    let mut intent = Intent::Local;
    for attr in attributes {
        if !attr.name.eq_ignore_ascii_case("intent") {
            continue;
        }
        let spec = attr.args.first().ok_or_else(|| Error::EmptyIntentSpecifier {
            location: attr.location.clone(),
        })?;
        intent = Intent::from_specifier(spec).ok_or_else(|| Error::InvalidIntentSpecifier {
            value: spec.clone(),
            location: attr.location.clone(),
        })?;
    }
    Ok(intent)
}

/// Runs the declaration pass over a whole translation unit.
pub fn declare_unit(tu: &TranslationUnit) -> Result<CompilationUnit, Error> {
    let mut pass = DeclarationPass::new();
    for item in &tu.items {
        pass.declare_item(item)?;
    }
    Ok(pass.unit)
}
