use thiserror::Error;

/// the two failure families of the engine. Type violations come from
/// values that cannot be read as exact weights; Value violations from
/// normalization targets that no exact rescaling can satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Type,
    Value,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("not an exact weight: {0}")]
    Inexact(f64),
    #[error("malformed weight literal: {0:?}")]
    Malformed(String),
    #[error("normalization target is negative")]
    NegativeTarget,
    #[error("cannot spread a positive total across weights that sum to zero")]
    ZeroScale,
    #[error("fixed weights exceed the normalization target")]
    Overdrawn,
}

impl Error {
    pub fn kind(&self) -> Kind {
        match self {
            Error::Inexact(_) => Kind::Type,
            Error::Malformed(_) => Kind::Type,
            Error::NegativeTarget => Kind::Value,
            Error::ZeroScale => Kind::Value,
            Error::Overdrawn => Kind::Value,
        }
    }
}
