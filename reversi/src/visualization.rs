use crate::{Board, Coordinate, BOARD_SIZE};

/// Draws the board as a box of text, with column letters on top and row numbers
/// on the left.
///
/// Fields in `highlights` that are empty are drawn as `*`, which is handy for
/// showing the legal moves.
pub fn visualize_board(board: &Board, highlights: &[Coordinate]) -> String {
    // Draw the top of the box
    let mut result = String::from("    ");
    for x in 0..BOARD_SIZE {
        result.push(char::from(b'a' + x));
        result.push(' ');
    }
    result += "\n  ╭";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╮\n";

    let mut coords = Coordinate::all();
    for y in 0..BOARD_SIZE {
        result += &format!("{} │ ", y + 1);
        for coord in coords.by_ref().take(BOARD_SIZE as usize) {
            let disc = board.disc_at(coord);
            if disc.is_empty() && highlights.contains(&coord) {
                result.push('*');
            } else {
                result.push(disc.symbol());
            }
            result.push(' ');
        }
        result += "│\n";
    }

    // Draw the bottom of the box
    result += "  ╰";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╯";
    result
}
