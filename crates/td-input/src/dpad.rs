//! D-pad octant directions.

use serde::{Deserialize, Serialize};

/// One of the eight radial d-pad directions.
///
/// Octant membership is an exact equality test against the reported angle;
/// there is no tolerance band. The hardware only ever reports multiples
/// of 45 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DpadOctant {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl DpadOctant {
    /// All octants, clockwise from north. Fixed order used for snapshot
    /// arrays.
    pub const ALL: [DpadOctant; 8] = [
        DpadOctant::North,
        DpadOctant::Northeast,
        DpadOctant::East,
        DpadOctant::Southeast,
        DpadOctant::South,
        DpadOctant::Southwest,
        DpadOctant::West,
        DpadOctant::Northwest,
    ];

    /// The angle this octant occupies, in degrees clockwise from vertical.
    pub fn angle(self) -> i32 {
        self.index() as i32 * 45
    }

    /// Index of this octant within [`DpadOctant::ALL`].
    pub fn index(self) -> usize {
        match self {
            DpadOctant::North => 0,
            DpadOctant::Northeast => 1,
            DpadOctant::East => 2,
            DpadOctant::Southeast => 3,
            DpadOctant::South => 4,
            DpadOctant::Southwest => 5,
            DpadOctant::West => 6,
            DpadOctant::Northwest => 7,
        }
    }

    /// The octant exactly matching a reported angle, if any.
    pub fn from_angle(angle: i32) -> Option<DpadOctant> {
        DpadOctant::ALL.into_iter().find(|o| o.angle() == angle)
    }
}
