use reversi::IllegalMove;

#[derive(Debug)]
/// Error type for one turn.
pub enum IllegalAction {
    /// The strategy picked a field that the rules reject.
    Move(IllegalMove),
    /// The strategy passed although it had this many legal moves.
    PassedWithLegalMoves { num_legal_moves: usize },
}

impl std::error::Error for IllegalAction {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalAction::Move(err) => Some(err),
            IllegalAction::PassedWithLegalMoves { .. } => None,
        }
    }
}

impl std::fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalAction::Move(_) => write!(f, "Tried to make an illegal move"),
            IllegalAction::PassedWithLegalMoves { num_legal_moves } => write!(
                f,
                "Tried to pass, but {} legal move(s) were available",
                num_legal_moves
            ),
        }
    }
}
