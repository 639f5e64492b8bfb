// Adjacency stays at -1 until the board is finalized after the first click.
#[derive(Clone, Copy)]
pub struct Tile {
    pub adjacent: i8,
    pub bomb: bool,
    pub revealed: bool,
    pub flagged: bool,
}

impl Tile {
    fn hidden() -> Self {
        Self {
            adjacent: -1,
            bomb: false,
            revealed: false,
            flagged: false,
        }
    }

    pub fn no_surrounding(&self) -> bool {
        self.adjacent == 0
    }
}

// Tile grid plus the parallel bomb map.
#[derive(Clone)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Tile>,
    bombs: Vec<bool>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::hidden(); width * height],
            bombs: vec![false; width * height],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn tile(&self, x: usize, y: usize) -> &Tile {
        &self.tiles[self.idx(x, y)]
    }

    pub fn tile_mut(&mut self, x: usize, y: usize) -> &mut Tile {
        let idx = self.idx(x, y);
        &mut self.tiles[idx]
    }

    pub fn is_bomb(&self, x: usize, y: usize) -> bool {
        self.bombs[self.idx(x, y)]
    }

    pub fn set_bomb(&mut self, x: usize, y: usize) {
        let idx = self.idx(x, y);
        self.bombs[idx] = true;
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// In-bounds 8-neighbors of (x, y). Cells outside the grid are skipped,
    /// never an error.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (x, y) = (x as i32, y as i32);
        (-1..=1).flat_map(move |dy: i32| {
            (-1..=1).filter_map(move |dx: i32| {
                if dx == 0 && dy == 0 {
                    return None;
                }
                let (nx, ny) = (x + dx, y + dy);
                if self.in_bounds(nx, ny) {
                    Some((nx as usize, ny as usize))
                } else {
                    None
                }
            })
        })
    }
}
