use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Degrees, Dial};

/// One of the three discs mounted on the dial axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    /// Disc 1, innermost.
    Rear,
    /// Disc 2.
    Middle,
    /// Disc 3, driven directly by the dial.
    Front,
}

impl Disc {
    pub const ALL: [Disc; 3] = [Disc::Rear, Disc::Middle, Disc::Front];

    /// Map a 1-based disc number to a disc.
    ///
    /// Only 1 and 2 are matched explicitly; every other value, including
    /// zero and negatives, selects the front disc.
    #[must_use]
    pub const fn from_index(which: i64) -> Self {
        match which {
            1 => Disc::Rear,
            2 => Disc::Middle,
            _ => Disc::Front,
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Disc::Rear => 1,
            Disc::Middle => 2,
            Disc::Front => 3,
        }
    }
}

/// Direction of a dial turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Counterclockwise,
    Clockwise,
}

impl Rotation {
    /// Positive degrees turn counterclockwise. Zero takes the clockwise path.
    #[must_use]
    pub const fn of(degrees: Dial) -> Self {
        if degrees > 0 {
            Rotation::Counterclockwise
        } else {
            Rotation::Clockwise
        }
    }

    /// Signed single-degree step in this direction.
    #[must_use]
    pub const fn unit(self) -> Dial {
        match self {
            Rotation::Counterclockwise => 1,
            Rotation::Clockwise => -1,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rotation::Counterclockwise => "counterclockwise",
            Rotation::Clockwise => "clockwise",
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of all three disc angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscPositions {
    pub rear: Degrees,
    pub middle: Degrees,
    pub front: Degrees,
}

impl DiscPositions {
    /// Pose of a freshly assembled lock: 4, 2 and 0 degrees.
    pub const REST: DiscPositions = DiscPositions {
        rear: 4,
        middle: 2,
        front: 0,
    };

    #[must_use]
    pub const fn get(&self, disc: Disc) -> Degrees {
        match disc {
            Disc::Rear => self.rear,
            Disc::Middle => self.middle,
            Disc::Front => self.front,
        }
    }

    /// Angles in disc-number order.
    #[must_use]
    pub const fn as_array(&self) -> [Degrees; 3] {
        [self.rear, self.middle, self.front]
    }
}

impl Default for DiscPositions {
    fn default() -> Self {
        Self::REST
    }
}

impl fmt::Display for DiscPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.rear, self.middle, self.front)
    }
}
