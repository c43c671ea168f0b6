use thiserror::Error;
use vs_core::CoreError;
use vs_fleet::FleetError;
use vs_kinematics::KinematicsError;
use vs_spawn::SpawnError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Core(#[from] CoreError),

    #[error("registry error: {0}")]
    Fleet(#[from] FleetError),

    #[error("kinematics error: {0}")]
    Kinematics(#[from] KinematicsError),

    #[error("spawn error: {0}")]
    Spawn(#[from] SpawnError),
}

pub type SimResult<T> = Result<T, SimError>;
