//! Semantic analysis: lowers an untyped `TranslationUnit` into a typed
//! `CompilationUnit`.
//!
//! Analysis runs three passes in order. The declaration pass builds every
//! scope and symbol, the resolution pass resolves routine bodies, and
//! parameter linking attaches each routine's dummy arguments. The first error
//! aborts analysis and the partially built unit is discarded.

mod declaration_pass;
mod errors;
mod options;
mod parameter_linker;
mod resolution_pass;

pub use declaration_pass::declare_unit;
pub use errors::{Error, ErrorLocation};
pub use options::Options;
pub use parameter_linker::link_parameters;
pub use resolution_pass::resolve_unit;

use crate::ast::typed::CompilationUnit;
use crate::ast::untyped::TranslationUnit;
use log::debug;

pub fn analyze(tu: &TranslationUnit) -> Result<CompilationUnit, Error> {
    analyze_with_options(tu, &Options::default())
}

pub fn analyze_with_options(tu: &TranslationUnit, options: &Options) -> Result<CompilationUnit, Error> {
    debug!("analyzing {} top-level items with {:?}", tu.items.len(), options);
    let mut unit = declare_unit(tu)?;
    resolve_unit(tu, &mut unit, options)?;
    link_parameters(tu, &mut unit)?;
    debug!(
        "analysis finished: {} scopes, {} symbols",
        unit.arena().scope_count(),
        unit.arena().symbol_count()
    );
    Ok(unit)
}
