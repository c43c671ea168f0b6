//! The `Registry` — live aircraft in insertion order.
//!
//! # Layout
//!
//! Aircraft are stored densely in a `Vec` in insertion order, with a side
//! `FxHashMap<AircraftId, usize>` giving each identity's slot.  Iteration walks
//! the `Vec`, so it is cache-friendly and its order is exactly insertion order
//! no matter how adds and removes interleave.  Removal shifts the tail down
//! and patches the affected slots — O(n), which is fine because the scoring
//! pass is already O(n²).

use rustc_hash::FxHashMap;
use vs_core::{AircraftId, UNCONSTRAINED, Vec2};

use crate::{Aircraft, FleetError, FleetResult};

/// Insertion-ordered mapping from identity to aircraft.
#[derive(Debug, Default)]
pub struct Registry {
    aircraft: Vec<Aircraft>,
    slots:    FxHashMap<AircraftId, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: AircraftId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Append `aircraft`.
    ///
    /// # Errors
    ///
    /// [`FleetError::DuplicateAircraft`] if its identity is already live.
    pub fn add(&mut self, aircraft: Aircraft) -> FleetResult<()> {
        let id = aircraft.id();
        if self.slots.contains_key(&id) {
            return Err(FleetError::DuplicateAircraft(id));
        }
        self.slots.insert(id, self.aircraft.len());
        self.aircraft.push(aircraft);
        Ok(())
    }

    /// Remove and return the aircraft with identity `id`.  Removing an absent
    /// identity is a no-op that returns `None`.
    pub fn remove(&mut self, id: AircraftId) -> Option<Aircraft> {
        let slot = self.slots.remove(&id)?;
        let removed = self.aircraft.remove(slot);
        for (i, ac) in self.aircraft.iter().enumerate().skip(slot) {
            self.slots.insert(ac.id(), i);
        }
        Some(removed)
    }

    /// Drop every aircraft.
    pub fn clear(&mut self) {
        self.aircraft.clear();
        self.slots.clear();
    }

    /// # Errors
    ///
    /// [`FleetError::AircraftNotFound`] if `id` is not live.
    pub fn get(&self, id: AircraftId) -> FleetResult<&Aircraft> {
        self.slots
            .get(&id)
            .map(|&slot| &self.aircraft[slot])
            .ok_or(FleetError::AircraftNotFound(id))
    }

    /// # Errors
    ///
    /// [`FleetError::AircraftNotFound`] if `id` is not live.
    pub fn get_mut(&mut self, id: AircraftId) -> FleetResult<&mut Aircraft> {
        match self.slots.get(&id) {
            Some(&slot) => Ok(&mut self.aircraft[slot]),
            None        => Err(FleetError::AircraftNotFound(id)),
        }
    }

    // ── Iteration (insertion order) ───────────────────────────────────────

    pub fn iter(&self) -> impl Iterator<Item = (AircraftId, &Aircraft)> + '_ {
        self.aircraft.iter().map(|ac| (ac.id(), ac))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AircraftId, &mut Aircraft)> + '_ {
        self.aircraft.iter_mut().map(|ac| (ac.id(), ac))
    }

    /// Live identities in insertion order.
    pub fn ids(&self) -> Vec<AircraftId> {
        self.aircraft.iter().map(Aircraft::id).collect()
    }

    /// `(id, position)` for every live aircraft, in insertion order.  Scoring
    /// works against this snapshot so it never reads half-updated state.
    pub fn positions(&self) -> Vec<(AircraftId, Vec2)> {
        self.aircraft.iter().map(|ac| (ac.id(), ac.position())).collect()
    }

    /// Distance from `point` to the nearest live aircraft, or
    /// [`UNCONSTRAINED`] if the registry is empty.
    pub fn min_distance_to(&self, point: Vec2) -> f64 {
        self.aircraft
            .iter()
            .map(|ac| ac.position().distance(point))
            .fold(UNCONSTRAINED, f64::min)
    }
}
