pub mod iterators;
pub mod typed;
pub mod untyped;
