pub use board::*;
pub use coordinate::*;
pub use disc::*;
pub use errors::*;
pub use game::*;
pub use strategy::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod coordinate;
mod disc;
mod errors;
mod game;
mod strategy;
mod visualization;
