use std::error::Error;

mod app;
mod config;
mod game;
mod ui;
pub use config::{
    BOARD_H, BOARD_W, BOMB_COUNT, CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W, SAFE_RADIUS,
};
pub use game::{Game, Mine, Outcome};

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}
