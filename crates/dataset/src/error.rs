use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("The bundled dataset failed validation: {0}")]
    Invalid(#[from] core_types::CoreError),
}
