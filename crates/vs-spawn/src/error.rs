use thiserror::Error;
use vs_fleet::FleetError;

#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("vertiport layout parse error: {0}")]
    Parse(String),

    #[error("vertiport layout error: {0}")]
    Layout(String),

    #[error("registry error while spawning: {0}")]
    Fleet(#[from] FleetError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpawnResult<T> = Result<T, SpawnError>;
