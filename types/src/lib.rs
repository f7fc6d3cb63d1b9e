//! Core domain types for the padlock mechanism.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! angle arithmetic, the combination, disc identities and the seek error.
//! The mechanism itself lives in `padlock-core`.

mod disc;
pub use disc::{Disc, DiscPositions, Rotation};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Angles
// ============================================================================

/// Integer angle in degrees.
///
/// Disc positions are conceptually in `[0, 360)` but the middle disc may sit
/// outside that range after a counterclockwise turn, so the type is signed.
pub type Degrees = i64;

/// A combination number or a single dial turn, as set by the caller.
///
/// Narrower than [`Degrees`] so that mechanism arithmetic on it cannot
/// overflow.
pub type Dial = i32;

/// One full revolution of the dial.
pub const FULL_TURN: Degrees = 360;

/// Width of the tooth on each disc, expressed in degrees of rotation.
pub const TOOTH: Degrees = 2;

/// Reduce an angle into `[0, 360)`.
#[must_use]
pub const fn normalize(angle: Degrees) -> Degrees {
    angle.rem_euclid(FULL_TURN)
}

/// Add whole revolutions until the angle is non-negative.
///
/// Unlike [`normalize`] there is no upper reduction: `400` stays `400`.
#[must_use]
pub const fn lift_non_negative(angle: Degrees) -> Degrees {
    if angle < 0 { normalize(angle) } else { angle }
}

// ============================================================================
// Combination
// ============================================================================

/// The three-number secret of a lock, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[Dial; 3]", into = "[Dial; 3]")]
pub struct Combination {
    n1: Dial,
    n2: Dial,
    n3: Dial,
}

impl Combination {
    #[must_use]
    pub const fn new(n1: Dial, n2: Dial, n3: Dial) -> Self {
        Self { n1, n2, n3 }
    }

    /// Target for the rear disc; offsets are applied by [`Self::aligned_positions`].
    #[must_use]
    pub fn n1(self) -> Degrees {
        Degrees::from(self.n1)
    }

    #[must_use]
    pub fn n2(self) -> Degrees {
        Degrees::from(self.n2)
    }

    #[must_use]
    pub fn n3(self) -> Degrees {
        Degrees::from(self.n3)
    }

    /// Disc pose at which the lock may be opened.
    ///
    /// Each disc rests against the tooth of the disc in front of it, so the
    /// rear and middle targets carry fixed tooth offsets.
    #[must_use]
    pub fn aligned_positions(self) -> DiscPositions {
        DiscPositions {
            rear: self.n1() - 2 * TOOTH,
            middle: self.n2() + TOOTH,
            front: self.n3(),
        }
    }
}

impl From<[Dial; 3]> for Combination {
    fn from([n1, n2, n3]: [Dial; 3]) -> Self {
        Self::new(n1, n2, n3)
    }
}

impl From<Combination> for [Dial; 3] {
    fn from(value: Combination) -> Self {
        [value.n1, value.n2, value.n3]
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.n1, self.n2, self.n3)
    }
}

// ============================================================================
// Lock State
// ============================================================================

/// Whether the shackle is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LockState {
    /// A freshly built lock rests open.
    #[default]
    Open,
    Closed,
}

impl LockState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, LockState::Open)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LockState::Open => "open",
            LockState::Closed => "closed",
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeekError {
    #[error("dial never reached {target} after {steps} {rotation} steps")]
    Unreachable {
        target: Degrees,
        rotation: Rotation,
        steps: u32,
    },
}

impl SeekError {
    #[must_use]
    pub const fn target(&self) -> Degrees {
        match self {
            SeekError::Unreachable { target, .. } => *target,
        }
    }
}
