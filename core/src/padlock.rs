//! The disc-coupling state machine.
//!
//! The dial drives the front disc directly. The front disc drags the middle
//! disc once its tooth catches, and the middle disc drags the rear disc the
//! same way. Motion never travels from a rear disc forward.
//!
//! All arithmetic is exact integer degrees. Two asymmetries are intentional
//! and observable:
//!
//! - A counterclockwise turn does not reduce the middle disc back into
//!   `[0, 360)`; a clockwise turn does.
//! - When the rear disc is caught, its new angle is derived from the first
//!   combination number rather than from its own previous angle.

use std::fmt;

use padlock_config::{PadlockConfig, StartPose};
use padlock_types::{
    Combination, Degrees, Dial, Disc, DiscPositions, FULL_TURN, LockState, Rotation, SeekError,
    TOOTH, lift_non_negative, normalize,
};

use crate::source::{PositionSource, ThreadRandom};

/// Upper bound on unit steps taken by [`Padlock::turn_left_to`] and
/// [`Padlock::turn_right_to`].
///
/// The front disc visits every angle in `[0, 360)` within one revolution, so
/// any target that is not reached by then is never reached.
pub const MAX_SEEK_STEPS: u32 = FULL_TURN as u32;

/// A three-disc rotary combination padlock.
#[derive(Clone, PartialEq, Eq)]
pub struct Padlock {
    positions: DiscPositions,
    combination: Combination,
    state: LockState,
}

impl Padlock {
    /// Build a lock with the given combination.
    ///
    /// The discs always start in the rest pose (rear 4, middle 2, front 0)
    /// and the lock starts open, whatever the combination.
    #[must_use]
    pub fn new(n1: Dial, n2: Dial, n3: Dial) -> Self {
        Self::with_combination(Combination::new(n1, n2, n3))
    }

    #[must_use]
    pub fn with_combination(combination: Combination) -> Self {
        Self {
            positions: DiscPositions::REST,
            combination,
            state: LockState::Open,
        }
    }

    /// Build a lock from config, drawing a random pose from `ThreadRandom`
    /// when the config asks for one.
    #[must_use]
    pub fn from_config(config: &PadlockConfig) -> Self {
        Self::from_config_with(config, ThreadRandom)
    }

    #[must_use]
    pub fn from_config_with<S: PositionSource>(config: &PadlockConfig, mut source: S) -> Self {
        let mut padlock = Self::with_combination(config.lock.combination);
        if config.dial.start == StartPose::Random {
            padlock.randomize_positions(&mut source);
        }
        padlock
    }

    /// Place all three discs directly, without any coupling.
    ///
    /// Each angle is reduced into `[0, 360)` independently.
    pub fn set_positions(&mut self, p1: Degrees, p2: Degrees, p3: Degrees) {
        self.positions = DiscPositions {
            rear: normalize(p1),
            middle: normalize(p2),
            front: normalize(p3),
        };
        tracing::debug!(positions = %self.positions, "Disc positions set");
    }

    /// Draw three angles from `source` (rear, middle, front) and place the
    /// discs there.
    pub fn randomize_positions<S: PositionSource + ?Sized>(&mut self, source: &mut S) {
        let rear = source.next_position();
        let middle = source.next_position();
        let front = source.next_position();
        self.set_positions(rear, middle, front);
    }

    /// Turn the dial. Positive degrees rotate counterclockwise, negative
    /// degrees clockwise.
    ///
    /// A zero turn follows the clockwise path, which still engages the
    /// middle disc's catch-up arithmetic.
    pub fn turn(&mut self, degrees: Dial) {
        let before = self.positions;
        let rotation = Rotation::of(degrees);
        let degrees = Degrees::from(degrees);

        let moves = match rotation {
            Rotation::Counterclockwise => self.turn_counterclockwise(before, degrees),
            Rotation::Clockwise => self.turn_clockwise(before, degrees),
        };
        self.drag_rear(before.middle, moves);

        tracing::trace!(
            degrees,
            %rotation,
            moves,
            before = %before,
            after = %self.positions,
            "Dial turned"
        );
    }

    /// Returns the amount handed on to the rear disc.
    fn turn_counterclockwise(&mut self, before: DiscPositions, degrees: Degrees) -> Degrees {
        self.positions.front = normalize(before.front + degrees);

        let gap = lift_non_negative(before.middle - before.front - TOOTH);
        // Not reduced mod 360, and negative when the turn is shorter than the gap.
        // Above zero it settles back to at most `Dial::MAX + 361`; below zero it
        // drops by less than 360 per turn.
        self.positions.middle += degrees - gap;

        gap
    }

    /// Returns the amount handed on to the rear disc.
    fn turn_clockwise(&mut self, before: DiscPositions, degrees: Degrees) -> Degrees {
        self.positions.front = lift_non_negative(before.front + degrees);

        let gap = lift_non_negative(FULL_TURN - (before.middle - before.front) - TOOTH);
        let moves = -degrees - gap;
        self.positions.middle = normalize(before.middle - moves);

        moves
    }

    fn drag_rear(&mut self, previous_middle: Degrees, moves: Degrees) {
        let offset = self.positions.rear - previous_middle;
        let distance = if offset > 0 {
            FULL_TURN - offset - TOOTH
        } else {
            -offset - TOOTH
        };
        if moves < normalize(distance) {
            return;
        }

        let n1 = self.combination.n1();
        let difference = previous_middle - n1 - TOOTH;
        let pushed = moves - difference;
        self.positions.rear = normalize(n1 - pushed);
    }

    /// Turn counterclockwise one degree at a time until the front disc reads
    /// `number`. Returns the number of steps taken.
    ///
    /// At least one step is always taken, so asking for the current angle
    /// costs a full revolution. Targets outside `[0, 360)` fail after
    /// [`MAX_SEEK_STEPS`] steps, which are not undone.
    pub fn turn_left_to(&mut self, number: Degrees) -> Result<u32, SeekError> {
        self.seek(number, Rotation::Counterclockwise)
    }

    /// Clockwise counterpart of [`Self::turn_left_to`].
    pub fn turn_right_to(&mut self, number: Degrees) -> Result<u32, SeekError> {
        self.seek(number, Rotation::Clockwise)
    }

    fn seek(&mut self, number: Degrees, rotation: Rotation) -> Result<u32, SeekError> {
        for step in 1..=MAX_SEEK_STEPS {
            self.turn(rotation.unit());
            if self.positions.front == number {
                return Ok(step);
            }
        }

        tracing::warn!(
            number,
            %rotation,
            steps = MAX_SEEK_STEPS,
            "Dial never reached seek target"
        );
        Err(SeekError::Unreachable {
            target: number,
            rotation,
            steps: MAX_SEEK_STEPS,
        })
    }

    /// Position of disc 1, 2 or 3. Any number other than 1 or 2 reads the
    /// front disc.
    #[must_use]
    pub fn disc_position(&self, which: i64) -> Degrees {
        self.disc(Disc::from_index(which))
    }

    #[must_use]
    pub fn disc(&self, disc: Disc) -> Degrees {
        self.positions.get(disc)
    }

    #[must_use]
    pub fn positions(&self) -> DiscPositions {
        self.positions
    }

    #[must_use]
    pub fn combination(&self) -> Combination {
        self.combination
    }

    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.positions == self.combination.aligned_positions()
    }

    /// Release the shackle if the discs are aligned. Otherwise nothing
    /// changes, so an open lock stays open.
    pub fn open(&mut self) {
        let aligned = self.is_aligned();
        if aligned {
            self.state = LockState::Open;
        }
        tracing::debug!(aligned, state = self.state.as_str(), "Open attempted");
    }

    /// Close the shackle regardless of alignment.
    pub fn close(&mut self) {
        self.state = LockState::Closed;
        tracing::debug!("Lock closed");
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub fn state(&self) -> LockState {
        self.state
    }
}

// Manual Debug impl to keep the combination out of logs.
impl fmt::Debug for Padlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Padlock")
            .field("positions", &self.positions)
            .field("combination", &"[REDACTED]")
            .field("state", &self.state)
            .finish()
    }
}
