//! Read-only airspace state passed to every policy callback.

use vs_core::Tick;
use vs_fleet::Registry;

/// A read-only view of the airspace handed to a
/// [`ControlPolicy`][crate::ControlPolicy] once per tick, before motion.
///
/// The borrow lives for the decision phase only; the simulation never
/// mutates the registry while a context is live.
pub struct PolicyContext<'a> {
    /// Tick about to be simulated.
    pub tick: Tick,

    /// Live aircraft in insertion order.
    pub registry: &'a Registry,
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(tick: Tick, registry: &'a Registry) -> Self {
        Self { tick, registry }
    }
}
