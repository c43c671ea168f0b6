//! The kinematics engine: one unit tick of motion for every live aircraft.

use rand_distr::Normal;
use rustc_hash::FxHashMap;
use vs_core::{AircraftId, Control, FlightConfig, SimRng};
use vs_fleet::{Aircraft, Registry};

use crate::{KinematicsError, KinematicsResult};

/// Control inputs for one tick, keyed by aircraft identity.
///
/// Aircraft without an entry fly `Control::Hold`; entries for identities that
/// are not live are ignored.
pub type Controls = FxHashMap<AircraftId, Control>;

/// Applies the motion model to aircraft.
///
/// Holds only configuration; all randomness comes from the caller's
/// [`SimRng`] so the simulation root controls the draw order.
#[derive(Debug, Clone)]
pub struct KinematicsEngine {
    min_speed:    f64,
    max_speed:    f64,
    heading_step: f64,
    speed_noise:  Normal<f64>,
}

impl KinematicsEngine {
    /// Build an engine from the flight section of the configuration.
    ///
    /// # Errors
    ///
    /// [`KinematicsError::SpeedNoise`] if `speed_sigma` is negative or not
    /// finite.
    pub fn new(flight: &FlightConfig) -> KinematicsResult<Self> {
        let speed_noise = Normal::new(0.0, flight.speed_sigma).map_err(|source| {
            KinematicsError::SpeedNoise { sigma: flight.speed_sigma, source }
        })?;
        Ok(Self {
            min_speed:    flight.min_speed,
            max_speed:    flight.max_speed,
            heading_step: flight.heading_step,
            speed_noise,
        })
    }

    /// Advance one aircraft by one tick under `control`.
    ///
    /// Draws exactly one Gaussian sample from `rng`.
    pub fn step(&self, aircraft: &mut Aircraft, control: Control, rng: &mut SimRng) {
        // Soft clamp happens before the noise, never after.
        let clamped = aircraft.speed().max(self.min_speed).min(self.max_speed);
        let speed = clamped + rng.sample(&self.speed_noise);
        let heading = aircraft.heading() + control.heading_sign() * self.heading_step;
        aircraft.fly(speed, heading);
    }

    /// Advance every live aircraft in registry order.
    ///
    /// Returns how many aircraft had an explicit control in `controls`.
    pub fn step_all(&self, registry: &mut Registry, controls: &Controls, rng: &mut SimRng) -> usize {
        let mut commanded = 0;
        for (id, aircraft) in registry.iter_mut() {
            let control = match controls.get(&id) {
                Some(&c) => {
                    commanded += 1;
                    c
                }
                None => Control::Hold,
            };
            self.step(aircraft, control, rng);
        }
        commanded
    }
}
