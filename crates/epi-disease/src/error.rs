use epi_core::EpiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiseaseError {
    #[error("disease configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    State(#[from] EpiError),
}

pub type DiseaseResult<T> = Result<T, DiseaseError>;
