//! Mechanism of a three-disc rotary combination padlock.
//!
//! [`Padlock`] owns the three disc angles, the combination and the
//! open/closed state. Randomized poses come from a [`PositionSource`].

mod padlock;
mod source;

pub use padlock::{MAX_SEEK_STEPS, Padlock};
pub use source::{PositionSource, ThreadRandom};

pub use padlock_config::{ConfigError, PadlockConfig, StartPose};
pub use padlock_types::{
    Combination, Degrees, Dial, Disc, DiscPositions, FULL_TURN, LockState, Rotation, SeekError, TOOTH,
};
