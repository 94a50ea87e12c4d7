use std::str::FromStr;

use crate::{visualize_board, BoardFromStrErr, Coordinate, Direction, Disc, DIRECTIONS, NUM_FIELDS};

/// The 8x8 playing field.
///
/// A `Board` is a value: every method that "changes" it returns a new board and
/// leaves the receiver alone, so search code can branch off hypothetical
/// positions from a shared ancestor without copying on purpose.
///
/// Fields that were never given a disc (or were given [`Disc::Empty`]) read back
/// as [`Disc::Empty`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Row-major, indexed by [`Coordinate::index()`].
    fields: [Disc; NUM_FIELDS],
}

impl Board {
    /// A board without any discs.
    pub fn empty() -> Self {
        Self {
            fields: [Disc::Empty; NUM_FIELDS],
        }
    }

    /// The standard opening position:
    /// d4 = white, e4 = black, d5 = black, e5 = white.
    pub fn initial() -> Self {
        Self::from_discs([
            (coord_unchecked(3, 3), Disc::White),
            (coord_unchecked(4, 3), Disc::Black),
            (coord_unchecked(3, 4), Disc::Black),
            (coord_unchecked(4, 4), Disc::White),
        ])
    }

    /// Creates a board with an arbitrary layout. Later entries win.
    pub fn from_discs<I: IntoIterator<Item = (Coordinate, Disc)>>(discs: I) -> Self {
        let mut fields = [Disc::Empty; NUM_FIELDS];
        for (coord, disc) in discs {
            fields[coord.index()] = disc;
        }
        Self { fields }
    }

    pub fn disc_at(&self, coord: Coordinate) -> Disc {
        self.fields[coord.index()]
    }

    /// Returns a board where `coord` holds `disc` and nothing else changed.
    ///
    /// No rules are applied, see [`Self::apply_move()`] for that.
    #[must_use]
    pub fn place_disc(&self, coord: Coordinate, disc: Disc) -> Board {
        let mut fields = self.fields;
        fields[coord.index()] = disc;
        Board { fields }
    }

    /// The discs that placing `disc` at `coord` would flip.
    ///
    /// This is the core function of this type. Starting next to `coord`, each of the
    /// eight directions is walked separately. A direction contributes its discs only
    /// if it consists of one or more opponent discs followed directly by a disc of the
    /// mover's color. Running into an empty field or off the board voids the direction.
    ///
    /// Whether `coord` itself is free is not checked here.
    pub fn flips(&self, coord: Coordinate, disc: Disc) -> Vec<Coordinate> {
        let mut flipped = Vec::new();
        for direction in DIRECTIONS {
            let run = self.enclosed_run(coord, disc, direction);
            let mut cursor = coord;
            for _ in 0..run {
                // The run was just walked, so every step stays on the board.
                if let Some(next) = cursor.neighbor(direction) {
                    flipped.push(next);
                    cursor = next;
                }
            }
        }
        flipped
    }

    /// How many discs [`Self::apply_move()`] would flip, without building the board.
    pub fn count_flips(&self, coord: Coordinate, disc: Disc) -> usize {
        DIRECTIONS
            .iter()
            .map(|&direction| self.enclosed_run(coord, disc, direction))
            .sum()
    }

    /// Places `disc` at `coord` and flips every enclosed line of opponent discs.
    ///
    /// Legality is the caller's business (see [`Self::is_legal_move()`]); a placement
    /// that encloses nothing just adds the disc.
    #[must_use]
    pub fn apply_move(&self, coord: Coordinate, disc: Disc) -> Board {
        let mut fields = self.fields;
        for flipped in self.flips(coord, disc) {
            fields[flipped.index()] = disc;
        }
        fields[coord.index()] = disc;
        Board { fields }
    }

    /// A move is legal if the field is free and at least one opponent disc gets flipped.
    pub fn is_legal_move(&self, coord: Coordinate, disc: Disc) -> bool {
        self.disc_at(coord).is_empty()
            && DIRECTIONS
                .iter()
                .any(|&direction| self.enclosed_run(coord, disc, direction) > 0)
    }

    /// Does `disc` have a legal move anywhere on the board?
    pub fn has_valid_move(&self, disc: Disc) -> bool {
        Coordinate::all().any(|coord| self.is_legal_move(coord, disc))
    }

    /// All legal moves for `disc`, in row-major order.
    pub fn legal_moves(&self, disc: Disc) -> Vec<Coordinate> {
        Coordinate::all()
            .filter(|&coord| self.is_legal_move(coord, disc))
            .collect()
    }

    /// Number of discs of the given color.
    ///
    /// Only occupied fields are counted, so this is always 0 for [`Disc::Empty`];
    /// use [`Self::empty_count()`] for free fields.
    pub fn count_discs(&self, disc: Disc) -> usize {
        self.iter().filter(|&(_, d)| d == disc).count()
    }

    pub fn empty_count(&self) -> usize {
        self.fields.iter().filter(|d| d.is_empty()).count()
    }

    /// The occupied fields in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Disc)> + '_ {
        Coordinate::all()
            .map(|coord| (coord, self.disc_at(coord)))
            .filter(|(_, disc)| !disc.is_empty())
    }

    // Length of the line of opponent discs that starts next to `coord` and is
    // closed by a disc of the mover. 0 if there is no such line.
    fn enclosed_run(&self, coord: Coordinate, disc: Disc, direction: Direction) -> usize {
        if disc.is_empty() {
            return 0;
        }
        let opponent = disc.flip();
        let mut run = 0;
        let mut cursor = coord;
        while let Some(next) = cursor.neighbor(direction) {
            let found = self.disc_at(next);
            if found == opponent {
                run += 1;
                cursor = next;
            } else if found == disc {
                return run;
            } else {
                return 0;
            }
        }
        0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self, &[]))
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self
            .fields
            .chunks(crate::BOARD_SIZE as usize)
            .map(|row| row.iter().map(|d| d.symbol()).collect())
            .collect();
        f.debug_tuple("Board").field(&rows.join("/")).finish()
    }
}

/// Parses a diagram with one line per row, top row (row 1) first.
///
/// Black is `B`, `X` or `●`, white is `W`, `O` or `○`, and empty fields are `.`, `-`
/// or `·`. Blank lines and whitespace inside lines are ignored.
impl FromStr for Board {
    type Err = BoardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != crate::BOARD_SIZE as usize {
            return Err(BoardFromStrErr::WrongNumberOfRows(rows.len()));
        }
        let mut fields = [Disc::Empty; NUM_FIELDS];
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != crate::BOARD_SIZE as usize {
                return Err(BoardFromStrErr::WrongRowLength {
                    row: row_idx,
                    len: row.len(),
                });
            }
            for (col_idx, &c) in row.iter().enumerate() {
                fields[row_idx * crate::BOARD_SIZE as usize + col_idx] = match c {
                    'B' | 'b' | 'X' | 'x' | '●' => Disc::Black,
                    'W' | 'w' | 'O' | 'o' | '○' => Disc::White,
                    '.' | '-' | '·' => Disc::Empty,
                    found => {
                        return Err(BoardFromStrErr::InvalidCell {
                            row: row_idx,
                            col: col_idx,
                            found,
                        })
                    }
                };
            }
        }
        Ok(Board { fields })
    }
}

// Only for coordinates that are known to be in bounds.
fn coord_unchecked(x: u8, y: u8) -> Coordinate {
    Coordinate::new(x, y).expect("Constant coordinate out of bounds")
}
