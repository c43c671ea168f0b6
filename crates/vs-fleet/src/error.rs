use thiserror::Error;
use vs_core::AircraftId;

/// Registry misuse.  Both variants indicate a caller bug.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("aircraft {0} is already in the registry")]
    DuplicateAircraft(AircraftId),

    #[error("aircraft {0} not found")]
    AircraftNotFound(AircraftId),
}

pub type FleetResult<T> = Result<T, FleetError>;
