use serde::{Deserialize, Serialize};

/// The content of a single field: a black disc, a white disc, or nothing.
///
/// Players are represented by their disc color. Code that needs a player
/// (e.g. [`Game::current_player()`](crate::Game::current_player)) never
/// hands out [`Disc::Empty`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disc {
    Black,
    White,
    #[default]
    Empty,
}

impl Disc {
    /// The disc's other side. Flipping [`Disc::Empty`] is a no-op.
    #[must_use]
    pub fn flip(self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
            Disc::Empty => Disc::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Disc::Empty
    }

    /// Single character used when rendering boards.
    pub fn symbol(self) -> char {
        match self {
            Disc::Black => '●',
            Disc::White => '○',
            Disc::Empty => '·',
        }
    }
}

impl std::fmt::Display for Disc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Disc::Black => "black",
            Disc::White => "white",
            Disc::Empty => "empty",
        };
        write!(f, "{}", name)
    }
}
