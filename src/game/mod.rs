pub mod board;
pub mod mine;
pub mod state;

pub use board::{Board, Tile};
pub use mine::{FlagOutcome, Mine, Params, ParamsError};
pub use state::{Game, Outcome};
