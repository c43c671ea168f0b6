//! The `ControlPolicy` trait — where a controller plugs into the airspace.

use vs_core::Control;
use vs_fleet::Aircraft;
use vs_kinematics::Controls;

use crate::PolicyContext;

/// Pluggable per-aircraft controller.
///
/// Only [`control`][Self::control] is required.  [`decide`][Self::decide]
/// calls it once per live aircraft in registry order, which is the order a
/// stateful policy (e.g. one that owns an RNG) sees them, so decisions are
/// reproducible.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysLeft;
///
/// impl ControlPolicy for AlwaysLeft {
///     fn control(&mut self, _aircraft: &Aircraft, _ctx: &PolicyContext<'_>) -> Control {
///         Control::TurnLeft
///     }
/// }
/// ```
pub trait ControlPolicy {
    /// Choose the control for one aircraft this tick.
    fn control(&mut self, aircraft: &Aircraft, ctx: &PolicyContext<'_>) -> Control;

    /// Controls for every live aircraft.
    ///
    /// Only non-`Hold` decisions are stored; the kinematics engine treats a
    /// missing entry as `Hold`.
    fn decide(&mut self, ctx: &PolicyContext<'_>) -> Controls {
        let mut controls = Controls::default();
        for (id, aircraft) in ctx.registry.iter() {
            let control = self.control(aircraft, ctx);
            if control != Control::Hold {
                controls.insert(id, control);
            }
        }
        controls
    }
}

impl<P: ControlPolicy + ?Sized> ControlPolicy for Box<P> {
    fn control(&mut self, aircraft: &Aircraft, ctx: &PolicyContext<'_>) -> Control {
        (**self).control(aircraft, ctx)
    }
}
