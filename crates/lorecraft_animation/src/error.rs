use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnimationError {
    #[error("interpolation needs at least two control points, got {0}")]
    TooFewPoints(usize),

    #[error("interpolation domain has {domain} points but range has {range}")]
    LengthMismatch { domain: usize, range: usize },

    #[error("interpolation domain must be strictly increasing (index {index})")]
    DomainNotIncreasing { index: usize },
}
