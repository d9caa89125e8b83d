pub mod analysis;
pub mod ast;
pub mod diagnostics;
pub mod source_location;
pub mod symbol_table;
pub mod types;

pub use analysis::{analyze, analyze_with_options, Error, Options};
pub use ast::typed::CompilationUnit;
pub use ast::untyped::TranslationUnit;
