// Shared game UI/constants.
pub const BOARD_W: usize = 32;
pub const BOARD_H: usize = 16;
pub const BOMB_COUNT: usize = 64;
pub const SAFE_RADIUS: usize = 2; // Chebyshev distance around the first click kept bomb-free
pub const CELL_W: usize = 2; // render each tile as two characters wide
pub const PLAY_W: usize = BOARD_W * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_H + 2; // inner height plus ceiling/floor
// Minimal pane width to fit the playfield + cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 2;
