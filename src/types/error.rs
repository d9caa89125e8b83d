use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("Unsupported type: '{0}'")]
    UnknownType(String),
}
