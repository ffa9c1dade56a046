use vida_types::AgeError;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid age: {0}")]
    InvalidAge(#[from] AgeError),
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
