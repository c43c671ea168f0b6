//! `AdmissionPolicy` — the gate a spawn candidate must pass.
//!
//! The scheduler asks the policy once per due vertiport per tick.  A refusal
//! is an expected outcome, not an error: the vertiport keeps its clock and
//! asks again on the next tick.
//!
//! Policies compose: chain them with [`AdmissionPolicyExt::then`] and a
//! candidate is admitted only if every link admits it.  The standard gate is
//!
//! ```rust,ignore
//! SeparationAdmission::new(3.0 * minimum_separation).then(CapacityLimit::new(max_aircraft))
//! ```

use vs_fleet::Aircraft;

// ── Context ───────────────────────────────────────────────────────────────────

/// Everything a policy may look at when judging one candidate.
pub struct AdmissionContext<'a> {
    /// The aircraft that would be registered.
    pub candidate: &'a Aircraft,
    /// Distance from the candidate to the nearest live aircraft
    /// ([`vs_core::UNCONSTRAINED`] when the airspace is empty).
    pub nearest:   f64,
    /// Number of live aircraft before admission.
    pub live:      usize,
}

// ── Trait ─────────────────────────────────────────────────────────────────────

/// Decides whether a spawn candidate may enter the airspace this tick.
///
/// # Contract
///
/// - Must be deterministic and side-effect free.
/// - Must not draw from the simulation RNG (it would shift every later draw).
pub trait AdmissionPolicy {
    fn admit(&self, ctx: &AdmissionContext<'_>) -> bool;
}

impl<P: AdmissionPolicy + ?Sized> AdmissionPolicy for Box<P> {
    #[inline]
    fn admit(&self, ctx: &AdmissionContext<'_>) -> bool {
        (**self).admit(ctx)
    }
}

// ── Separation test ───────────────────────────────────────────────────────────

/// Admit only if the nearest live aircraft is strictly farther than
/// `clearance`.
#[derive(Debug, Clone, Copy)]
pub struct SeparationAdmission {
    clearance: f64,
}

impl SeparationAdmission {
    pub fn new(clearance: f64) -> Self {
        Self { clearance }
    }

    #[inline]
    pub fn clearance(&self) -> f64 {
        self.clearance
    }
}

impl AdmissionPolicy for SeparationAdmission {
    #[inline]
    fn admit(&self, ctx: &AdmissionContext<'_>) -> bool {
        ctx.nearest > self.clearance
    }
}

// ── Capacity cap ──────────────────────────────────────────────────────────────

/// Admit only while fewer than `max` aircraft are live.  `None` never refuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapacityLimit {
    max: Option<usize>,
}

impl CapacityLimit {
    pub fn new(max: Option<usize>) -> Self {
        Self { max }
    }
}

impl AdmissionPolicy for CapacityLimit {
    #[inline]
    fn admit(&self, ctx: &AdmissionContext<'_>) -> bool {
        self.max.is_none_or(|max| ctx.live < max)
    }
}

// ── Chaining ──────────────────────────────────────────────────────────────────

/// Admits only when both policies admit.  The second is not consulted once
/// the first refuses.  Construct with `first.then(second)`.
pub struct ChainedAdmission<A: AdmissionPolicy, B: AdmissionPolicy> {
    first:  A,
    second: B,
}

impl<A: AdmissionPolicy, B: AdmissionPolicy> AdmissionPolicy for ChainedAdmission<A, B> {
    fn admit(&self, ctx: &AdmissionContext<'_>) -> bool {
        self.first.admit(ctx) && self.second.admit(ctx)
    }
}

/// Extension trait that adds `.then(other)` to any `AdmissionPolicy`.
pub trait AdmissionPolicyExt: AdmissionPolicy + Sized {
    fn then<B: AdmissionPolicy>(self, other: B) -> ChainedAdmission<Self, B> {
        ChainedAdmission { first: self, second: other }
    }
}

impl<P: AdmissionPolicy + Sized> AdmissionPolicyExt for P {}
