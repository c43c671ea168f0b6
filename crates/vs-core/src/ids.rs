//! Strongly typed identifier wrappers and the episode identity counter.
//!
//! IDs are `Copy + Ord + Hash` so they work as map keys and set members
//! without ceremony.  Aircraft identities are handed out by [`IdGenerator`],
//! which is owned by the simulation root and only rewound by an episode reset.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize`, e.g. for indexing a per-vertiport `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of one aircraft.  Unique within an episode, never reused.
    pub struct AircraftId(u32);
}

typed_id! {
    /// Identity of a vertiport; equals its index in the layout.
    pub struct VertiportId(u16);
}

// ── IdGenerator ───────────────────────────────────────────────────────────────

/// Monotonic aircraft identity counter.
///
/// `peek` exposes the identity the next admitted aircraft will receive so a
/// spawn candidate can be built before the admission decision; only `next`
/// advances the counter.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The identity the next call to [`next`](Self::next) will return.
    #[inline]
    pub fn peek(&self) -> AircraftId {
        AircraftId(self.next)
    }

    /// Hand out the next identity and advance the counter.
    #[inline]
    pub fn next(&mut self) -> AircraftId {
        let id = AircraftId(self.next);
        self.next += 1;
        id
    }

    /// Number of identities handed out since the last reset.
    #[inline]
    pub fn issued(&self) -> u32 {
        self.next
    }

    /// Rewind to identity 0.  Only an episode reset may call this.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}
