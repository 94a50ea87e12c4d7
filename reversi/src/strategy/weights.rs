use crate::{Board, Coordinate, Disc, BOARD_SIZE};

/// Weights for the kinds of fields that a [`WeightTable`] distinguishes.
///
/// The kind of a field is determined by its distance to the nearest corner, so
/// every table built from these is symmetric under rotation and reflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareWeights {
    pub corner: i32,
    /// Orthogonally adjacent to a corner.
    pub c_square: i32,
    /// Diagonally adjacent to a corner.
    pub x_square: i32,
    /// Edge fields two steps away from a corner.
    pub outer_edge: i32,
    /// The two middle fields of each edge.
    pub inner_edge: i32,
    pub other: i32,
}

/// A positional value for every field of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeightTable {
    /// Indexed by `[y][x]`.
    weights: [[i32; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl WeightTable {
    /// Likes corners, dislikes fields next to them, mildly likes edges.
    pub const EXPERT: WeightTable = WeightTable::symmetric(SquareWeights {
        corner: 100,
        c_square: -20,
        x_square: -40,
        outer_edge: 10,
        inner_edge: 5,
        other: 0,
    });

    /// Only corners count.
    pub const CORNERS: WeightTable = WeightTable::symmetric(SquareWeights {
        corner: 100,
        c_square: 0,
        x_square: 0,
        outer_edge: 0,
        inner_edge: 0,
        other: 0,
    });

    /// Used for evaluating whole boards in the search strategies. Every disc counts
    /// at least a little, corners and their neighbors count a lot.
    pub const SEARCH: WeightTable = WeightTable::symmetric(SquareWeights {
        corner: 100,
        c_square: -20,
        x_square: -40,
        outer_edge: 1,
        inner_edge: 1,
        other: 1,
    });

    pub const fn symmetric(square_weights: SquareWeights) -> Self {
        let n = BOARD_SIZE as usize;
        let mut weights = [[0; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        let mut y = 0;
        while y < n {
            let mut x = 0;
            while x < n {
                // Fold into the top-left quadrant
                let fx = if x < n - 1 - x { x } else { n - 1 - x };
                let fy = if y < n - 1 - y { y } else { n - 1 - y };
                let (near, far) = if fx < fy { (fx, fy) } else { (fy, fx) };
                weights[y][x] = match (near, far) {
                    (0, 0) => square_weights.corner,
                    (0, 1) => square_weights.c_square,
                    (1, 1) => square_weights.x_square,
                    (0, 2) => square_weights.outer_edge,
                    (0, 3) => square_weights.inner_edge,
                    _ => square_weights.other,
                };
                x += 1;
            }
            y += 1;
        }
        Self { weights }
    }

    pub fn weight(&self, coord: Coordinate) -> i32 {
        self.weights[coord.y() as usize][coord.x() as usize]
    }

    /// Sum of the weights of `side`'s discs minus those of the opponent's discs.
    pub fn evaluate(&self, board: &Board, side: Disc) -> i32 {
        board
            .iter()
            .map(|(coord, disc)| {
                if disc == side {
                    self.weight(coord)
                } else {
                    -self.weight(coord)
                }
            })
            .sum()
    }
}
