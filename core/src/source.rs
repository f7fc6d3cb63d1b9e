//! Sources of disc positions for randomizing a lock.

use padlock_types::{Degrees, FULL_TURN};

/// Supplies uniformly distributed disc angles.
///
/// Values should fall in `[0, 360)`. Wider ranges are accepted because the
/// lock renormalizes every position it is given.
pub trait PositionSource {
    fn next_position(&mut self) -> Degrees;
}

/// Draws from the thread-local generator of `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl PositionSource for ThreadRandom {
    fn next_position(&mut self) -> Degrees {
        rand::random_range(0..FULL_TURN)
    }
}

impl<S: PositionSource + ?Sized> PositionSource for &mut S {
    fn next_position(&mut self) -> Degrees {
        (**self).next_position()
    }
}
