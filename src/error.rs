use thiserror::Error;

use crate::domain::DomainError;
use crate::math::PrecisionError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Precision(#[from] PrecisionError),
}

pub type Result<T> = std::result::Result<T, Error>;
