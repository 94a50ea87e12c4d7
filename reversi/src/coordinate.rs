use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoordinateFromStrErr, CoordinateOutOfBounds};

/// Number of rows and columns of the board.
pub const BOARD_SIZE: u8 = 8;
/// Number of fields on the board.
pub const NUM_FIELDS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// A field on the board.
///
/// `x` is the column (rendered as `a` to `h`), `y` is the row (rendered as `1` to `8`).
/// Both are always in `0..BOARD_SIZE`, which is checked on construction, so there is
/// no way to hold an out-of-bounds coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coordinate {
    x: u8,
    y: u8,
}

/// A step towards one of the eight neighbors of a field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

/// All eight compass directions.
pub const DIRECTIONS: [Direction; 8] = [
    Direction { dx: 0, dy: -1 },
    Direction { dx: 0, dy: 1 },
    Direction { dx: -1, dy: 0 },
    Direction { dx: 1, dy: 0 },
    Direction { dx: -1, dy: -1 },
    Direction { dx: 1, dy: -1 },
    Direction { dx: -1, dy: 1 },
    Direction { dx: 1, dy: 1 },
];

impl Coordinate {
    pub fn new(x: u8, y: u8) -> Result<Self, CoordinateOutOfBounds> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Ok(Self { x, y })
        } else {
            Err(CoordinateOutOfBounds { x, y })
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// The adjacent field in the given direction, or `None` when that would
    /// leave the board.
    pub fn neighbor(self, direction: Direction) -> Option<Coordinate> {
        let x = self.x.checked_add_signed(direction.dx)?;
        let y = self.y.checked_add_signed(direction.dy)?;
        Coordinate::new(x, y).ok()
    }

    /// All fields of the board in row-major order (`y` outer, `x` inner).
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coordinate { x, y }))
    }

    /// Position of this field in a row-major array of [`NUM_FIELDS`] entries.
    pub(crate) fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.x), self.y + 1)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_char = chars.next().ok_or(CoordinateFromStrErr::WrongLength)?;
        let row_char = chars.next().ok_or(CoordinateFromStrErr::WrongLength)?;
        if chars.next().is_some() {
            return Err(CoordinateFromStrErr::WrongLength);
        }
        let x = match col_char.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a',
            _ => return Err(CoordinateFromStrErr::InvalidColumn(col_char)),
        };
        let y = match row_char {
            c @ '1'..='8' => c as u8 - b'1',
            _ => return Err(CoordinateFromStrErr::InvalidRow(row_char)),
        };
        Ok(Coordinate { x, y })
    }
}

impl TryFrom<String> for Coordinate {
    type Error = CoordinateFromStrErr;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Coordinate> for String {
    fn from(coord: Coordinate) -> String {
        coord.to_string()
    }
}

/// Shorthand for creating coordinates from algebraic notation.
///
/// The first character is the column (`a` to `h`), the second the row (`1` to `8`).
///
/// This macro is just calling the [`FromStr`] instance of [`Coordinate`].
/// ```
/// # use reversi::{coord, Coordinate};
/// assert_eq!(coord!("c4"), Coordinate::new(2, 3).unwrap());
/// ```
#[macro_export]
macro_rules! coord {
    ($s:literal) => {
        <$crate::Coordinate as std::str::FromStr>::from_str($s)
            .expect("Invalid coordinate given to coord! macro")
    };
}
#[allow(unused_imports)]
pub(crate) use coord;
