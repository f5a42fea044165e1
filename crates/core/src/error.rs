//! Error type for the few inputs the generator refuses outright.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The grid cannot hold even one maximal room plus its margins.
    #[error("grid {width}x{height} is too small; need at least {min_width}x{min_height}")]
    GridTooSmall { width: usize, height: usize, min_width: usize, min_height: usize },
}

pub type GenerateResult<T> = Result<T, GenerateError>;
