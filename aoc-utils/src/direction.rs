//! Compass directions on a 2D grid and axis-aligned directions in 3D space.
//!
//! Screen orientation is used throughout: north is "up" with an offset of `(0, -1)`, and degrees
//! grow clockwise starting from north at 0.

use std::fmt::Display;

use thiserror::Error;

/// A 2D axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Get the other axis.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Get the two cardinal directions that move along this axis.
    #[must_use]
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Self::X => [Direction::East, Direction::West],
            Self::Y => [Direction::North, Direction::South],
        }
    }
}

/// One of the eight cardinal and ordinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// An error creating a [`Direction`] from some other representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDirection {
    #[error("degrees {0} do not name a direction, expected a multiple of 45")]
    Degrees(i32),

    #[error("offset ({dx}, {dy}) is not a unit step")]
    Offset { dx: i32, dy: i32 },

    #[error("character {0:?} does not name a cardinal direction")]
    Char(char),
}

impl Direction {
    /// The four cardinal directions, clockwise from north.
    pub const CARDINAL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The four ordinal directions, clockwise from north-east.
    pub const ORDINAL: [Self; 4] = [
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// All eight directions, cardinals first.
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
        Self::NorthWest,
    ];

    /// Clockwise angle from north, in `0..360`.
    #[must_use]
    pub fn degrees(self) -> i32 {
        match self {
            Self::North => 0,
            Self::NorthEast => 45,
            Self::East => 90,
            Self::SouthEast => 135,
            Self::South => 180,
            Self::SouthWest => 225,
            Self::West => 270,
            Self::NorthWest => 315,
        }
    }

    /// The unit `(dx, dy)` step of this direction.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    /// The axis moved along, or `None` for ordinal directions.
    #[must_use]
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::North | Self::South => Some(Axis::Y),
            Self::East | Self::West => Some(Axis::X),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_cardinal(self) -> bool {
        self.axis().is_some()
    }

    /// The offset component along `axis`.
    #[must_use]
    pub fn axis_offset(self, axis: Axis) -> i32 {
        let (dx, dy) = self.offset();
        match axis {
            Axis::X => dx,
            Axis::Y => dy,
        }
    }

    /// Look up a direction by clockwise degrees from north. Any multiple of 45 is accepted,
    /// including negative values and values past a full turn.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDirection::Degrees`] if `degrees` is not a multiple of 45.
    pub fn from_degrees(degrees: i32) -> Result<Self, InvalidDirection> {
        match degrees.rem_euclid(360) {
            0 => Ok(Self::North),
            45 => Ok(Self::NorthEast),
            90 => Ok(Self::East),
            135 => Ok(Self::SouthEast),
            180 => Ok(Self::South),
            225 => Ok(Self::SouthWest),
            270 => Ok(Self::West),
            315 => Ok(Self::NorthWest),
            _ => Err(InvalidDirection::Degrees(degrees)),
        }
    }

    /// Look up the direction with the given unit step.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDirection::Offset`] unless both components are in `-1..=1` and not both
    /// zero.
    pub fn from_offset(dx: i32, dy: i32) -> Result<Self, InvalidDirection> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.offset() == (dx, dy))
            .ok_or(InvalidDirection::Offset { dx, dy })
    }

    /// Parse a cardinal direction from a compass letter (`NESW`), a relative letter (`URDL`) or an
    /// arrow (`^>v<`).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDirection::Char`] for any other character.
    pub fn from_char(ch: char) -> Result<Self, InvalidDirection> {
        match ch {
            'N' | 'U' | '^' => Ok(Self::North),
            'E' | 'R' | '>' => Ok(Self::East),
            'S' | 'D' | 'v' => Ok(Self::South),
            'W' | 'L' | '<' => Ok(Self::West),
            _ => Err(InvalidDirection::Char(ch)),
        }
    }

    /// Encode a cardinal direction as `U`, `R`, `D` or `L`.
    #[must_use]
    pub fn char_urdl(self) -> Option<char> {
        self.cardinal_char(['U', 'R', 'D', 'L'])
    }

    /// Encode a cardinal direction as `N`, `E`, `S` or `W`.
    #[must_use]
    pub fn char_nesw(self) -> Option<char> {
        self.cardinal_char(['N', 'E', 'S', 'W'])
    }

    /// Encode a cardinal direction as `^`, `>`, `v` or `<`.
    #[must_use]
    pub fn char_arrow(self) -> Option<char> {
        self.cardinal_char(['^', '>', 'v', '<'])
    }

    fn cardinal_char(self, chars: [char; 4]) -> Option<char> {
        Self::CARDINAL
            .iter()
            .position(|&direction| direction == self)
            .map(|index| chars[index])
    }

    /// Rotate clockwise by a multiple of 45 degrees. Negative values rotate counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDirection::Degrees`] if `degrees` is not a multiple of 45.
    pub fn rotate(self, degrees: i32) -> Result<Self, InvalidDirection> {
        if degrees % 45 != 0 {
            return Err(InvalidDirection::Degrees(degrees));
        }
        Self::from_degrees(self.degrees() + degrees.rem_euclid(360))
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        self.turned(4)
    }

    /// Turn 90 degrees clockwise.
    #[must_use]
    pub fn clockwise(self) -> Self {
        self.turned(2)
    }

    /// Turn 90 degrees counter-clockwise.
    #[must_use]
    pub fn counter_clockwise(self) -> Self {
        self.turned(6)
    }

    /// Turn clockwise by `eighths` of a full turn.
    fn turned(self, eighths: i32) -> Self {
        match (self.degrees() / 45 + eighths).rem_euclid(8) {
            0 => Self::North,
            1 => Self::NorthEast,
            2 => Self::East,
            3 => Self::SouthEast,
            4 => Self::South,
            5 => Self::SouthWest,
            6 => Self::West,
            _ => Self::NorthWest,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::NorthEast => "north-east",
            Self::East => "east",
            Self::SouthEast => "south-east",
            Self::South => "south",
            Self::SouthWest => "south-west",
            Self::West => "west",
            Self::NorthWest => "north-west",
        };
        f.write_str(name)
    }
}

/// A 3D axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis3 {
    X,
    Y,
    Z,
}

/// One of the six directions that move along a single 3D axis.
///
/// The planar directions match [`Direction`], with `Up` and `Down` moving along z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction3 {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl Direction3 {
    pub const ALL: [Self; 6] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// The unit `(dx, dy, dz)` step of this direction.
    #[must_use]
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::North => (0, -1, 0),
            Self::East => (1, 0, 0),
            Self::South => (0, 1, 0),
            Self::West => (-1, 0, 0),
            Self::Up => (0, 0, 1),
            Self::Down => (0, 0, -1),
        }
    }

    #[must_use]
    pub fn axis(self) -> Axis3 {
        match self {
            Self::North | Self::South => Axis3::Y,
            Self::East | Self::West => Axis3::X,
            Self::Up | Self::Down => Axis3::Z,
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// The planar equivalent, or `None` for `Up` and `Down`.
    #[must_use]
    pub fn to_planar(self) -> Option<Direction> {
        match self {
            Self::North => Some(Direction::North),
            Self::East => Some(Direction::East),
            Self::South => Some(Direction::South),
            Self::West => Some(Direction::West),
            Self::Up | Self::Down => None,
        }
    }
}

impl TryFrom<Direction> for Direction3 {
    type Error = InvalidDirection;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction {
            Direction::North => Ok(Self::North),
            Direction::East => Ok(Self::East),
            Direction::South => Ok(Self::South),
            Direction::West => Ok(Self::West),
            _ => Err(InvalidDirection::Degrees(direction.degrees())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turning_wraps_around() {
        assert_eq!(Direction::North.counter_clockwise(), Direction::West);
        assert_eq!(Direction::West.clockwise(), Direction::North);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::South.rotate(-135), Ok(Direction::NorthEast));
        assert_eq!(Direction::East.rotate(720), Ok(Direction::East));
        assert_eq!(
            Direction::East.rotate(30),
            Err(InvalidDirection::Degrees(30))
        );
    }

    #[test]
    fn degrees_round_trip_through_table() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_degrees(direction.degrees()), Ok(direction));
            let (dx, dy) = direction.offset();
            assert_eq!(Direction::from_offset(dx, dy), Ok(direction));
        }
        assert_eq!(Direction::from_degrees(-90), Ok(Direction::West));
        assert!(Direction::from_offset(0, 0).is_err());
        assert!(Direction::from_offset(2, 0).is_err());
    }

    #[test]
    fn chars_only_encode_cardinals() {
        assert_eq!(Direction::from_char('^'), Ok(Direction::North));
        assert_eq!(Direction::from_char('R'), Ok(Direction::East));
        assert_eq!(Direction::from_char('v'), Ok(Direction::South));
        assert_eq!(Direction::from_char('W'), Ok(Direction::West));
        assert_eq!(Direction::from_char('x'), Err(InvalidDirection::Char('x')));

        assert_eq!(Direction::West.char_urdl(), Some('L'));
        assert_eq!(Direction::South.char_nesw(), Some('S'));
        assert_eq!(Direction::East.char_arrow(), Some('>'));
        assert_eq!(Direction::SouthEast.char_arrow(), None);
    }

    #[test]
    fn axes_pair_opposite_directions() {
        assert_eq!(Direction::NorthWest.axis(), None);
        assert_eq!(Direction::East.axis(), Some(Axis::X));
        assert_eq!(Axis::X.opposite(), Axis::Y);
        for direction in Axis::Y.directions() {
            assert_eq!(direction.axis(), Some(Axis::Y));
        }
        assert_eq!(Direction::South.axis_offset(Axis::Y), 1);
    }

    #[test]
    fn direction3_converts_planar_directions() {
        assert_eq!(Direction3::try_from(Direction::West), Ok(Direction3::West));
        assert!(Direction3::try_from(Direction::SouthWest).is_err());
        assert_eq!(Direction3::Up.to_planar(), None);
        assert_eq!(Direction3::Down.opposite(), Direction3::Up);
        assert_eq!(Direction3::Up.axis(), Axis3::Z);
    }
}
