use std::error::Error;
use std::fmt;

use rand::thread_rng;
use rand::Rng;

use crate::game::board::Board;

/// Validated board configuration. Building one is the only fallible step;
/// a `Mine` built from validated params cannot fail, so resets mid-game
/// never error.
#[derive(Clone, Copy, Debug)]
pub struct Params {
    pub width: usize,
    pub height: usize,
    pub bombs: usize,
    pub safe_radius: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParamsError {
    EmptyBoard,
    TooManyBombs {
        bombs: usize,
        safe_zone: usize,
        cells: usize,
    },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::EmptyBoard => write!(f, "board must have nonzero width and height"),
            ParamsError::TooManyBombs {
                bombs,
                safe_zone,
                cells,
            } => write!(
                f,
                "{} bombs plus a {}-cell safe zone cannot fit a {}-cell board",
                bombs, safe_zone, cells
            ),
        }
    }
}

impl Error for ParamsError {}

impl Params {
    /// Rejects configurations the rejection sampler could never satisfy:
    /// the bombs plus the worst-case safe zone must fit on the board.
    pub fn new(
        width: usize,
        height: usize,
        bombs: usize,
        safe_radius: usize,
    ) -> Result<Self, ParamsError> {
        if width == 0 || height == 0 {
            return Err(ParamsError::EmptyBoard);
        }
        let safe_zone = (2 * safe_radius + 1).pow(2);
        let cells = width * height;
        if bombs + safe_zone > cells {
            return Err(ParamsError::TooManyBombs {
                bombs,
                safe_zone,
                cells,
            });
        }
        Ok(Self {
            width,
            height,
            bombs,
            safe_radius,
        })
    }
}

/// Result of a flag toggle: the tile's new flagged state, and whether the
/// last bomb was just flagged.
#[derive(Clone, Copy, Debug)]
pub struct FlagOutcome {
    pub flagged: bool,
    pub won: bool,
}

/// The board core: bomb generation, adjacency setup, flood-fill reveal,
/// and the bombs-left counter. Presentation-free.
pub struct Mine {
    pub board: Board,
    bombs: usize,
    safe_radius: usize,
    bombs_left: usize,
    generated: bool,
}

impl Mine {
    pub fn with_params(params: &Params) -> Self {
        Self {
            board: Board::new(params.width, params.height),
            bombs: params.bombs,
            safe_radius: params.safe_radius,
            bombs_left: params.bombs,
            generated: false,
        }
    }

    /// Bombs not yet flagged. Reaching zero is the win condition.
    pub fn bombs_left(&self) -> usize {
        self.bombs_left
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn is_bomb(&self, x: usize, y: usize) -> bool {
        self.board.is_bomb(x, y)
    }

    /// Places bombs away from the first click, then finalizes every tile.
    pub fn register_first_click(&mut self, first_x: usize, first_y: usize) {
        let mut rng = thread_rng();
        self.register_first_click_with(&mut rng, first_x, first_y);
    }

    pub fn register_first_click_with<R: Rng>(
        &mut self,
        rng: &mut R,
        first_x: usize,
        first_y: usize,
    ) {
        self.generate_bombs(rng, first_x, first_y);
        self.setup_tiles();
        self.generated = true;
    }

    /// Rejection sampling: re-draw until the cell is bomb-free and outside
    /// the safe radius. Terminates because `Params::new` checked capacity.
    fn generate_bombs<R: Rng>(&mut self, rng: &mut R, first_x: usize, first_y: usize) {
        for _ in 0..self.bombs {
            let (rand_x, rand_y) = loop {
                let rand_x = rng.gen_range(0..self.board.width);
                let rand_y = rng.gen_range(0..self.board.height);
                if self.board.is_bomb(rand_x, rand_y) {
                    continue;
                }
                let dist = rand_x
                    .abs_diff(first_x)
                    .max(rand_y.abs_diff(first_y));
                if dist > self.safe_radius {
                    break (rand_x, rand_y);
                }
            };
            self.board.set_bomb(rand_x, rand_y);
        }
    }

    /// Sets each tile's adjacency count and bomb flag, exactly once.
    fn setup_tiles(&mut self) {
        for y in 0..self.board.height {
            for x in 0..self.board.width {
                let adjacent = self.adjacent_bombs(x, y) as i8;
                let bomb = self.board.is_bomb(x, y);
                let tile = self.board.tile_mut(x, y);
                tile.adjacent = adjacent;
                tile.bomb = bomb;
            }
        }
    }

    /// How many of the in-bounds 8-neighbors carry a bomb.
    pub fn adjacent_bombs(&self, x: usize, y: usize) -> u8 {
        self.board
            .neighbors(x, y)
            .filter(|&(nx, ny)| self.board.is_bomb(nx, ny))
            .count() as u8
    }

    /// Reveals (x, y) and flood-fills through zero-adjacency tiles with an
    /// explicit worklist, so cascade depth never touches the call stack.
    /// Already-revealed tiles are a no-op. Returns the newly revealed tiles
    /// as (x, y, adjacency) for the presentation layer to redraw.
    pub fn reveal(&mut self, x: usize, y: usize) -> Vec<(usize, usize, u8)> {
        let mut revealed = Vec::new();
        let mut worklist = vec![(x, y)];
        while let Some((cx, cy)) = worklist.pop() {
            let tile = self.board.tile_mut(cx, cy);
            if tile.revealed {
                continue;
            }
            tile.revealed = true;
            let adjacent = tile.adjacent.max(0) as u8;
            let cascade = tile.no_surrounding();
            revealed.push((cx, cy, adjacent));
            if cascade {
                worklist.extend(
                    self.board
                        .neighbors(cx, cy)
                        .filter(|&(nx, ny)| !self.board.tile(nx, ny).revealed),
                );
            }
        }
        revealed
    }

    /// Toggles the flag on an unrevealed tile. Only flags on actual bombs
    /// move the bombs-left counter; the win fires on the transition to zero.
    pub fn toggle_flag(&mut self, x: usize, y: usize) -> FlagOutcome {
        let tile = self.board.tile_mut(x, y);
        if tile.revealed {
            return FlagOutcome {
                flagged: tile.flagged,
                won: false,
            };
        }
        tile.flagged = !tile.flagged;
        let flagged = tile.flagged;
        let bomb = tile.bomb;
        let mut won = false;
        if bomb {
            if flagged {
                self.bombs_left -= 1;
                won = self.bombs_left == 0;
            } else {
                self.bombs_left += 1;
            }
        }
        FlagOutcome { flagged, won }
    }
}
