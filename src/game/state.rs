use crate::game::mine::{Mine, Params, ParamsError};
use crate::{BOARD_H, BOARD_W, BOMB_COUNT, SAFE_RADIUS};

/// How the previous round ended. Shown in the info box until the next
/// restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// The current game session. Owns the live `Mine` and swaps in a fresh one
/// on win, loss, or manual restart; no global state.
pub struct Game {
    params: Params,
    pub mine: Mine,
    pub last_outcome: Option<Outcome>,
}

impl Game {
    pub fn new() -> Result<Self, ParamsError> {
        let params = Params::new(BOARD_W, BOARD_H, BOMB_COUNT, SAFE_RADIUS)?;
        Ok(Self::with_params(params))
    }

    pub fn with_params(params: Params) -> Self {
        Self {
            params,
            mine: Mine::with_params(&params),
            last_outcome: None,
        }
    }

    // Replaces the board, keeping the last outcome on display.
    fn reset(&mut self) {
        self.mine = Mine::with_params(&self.params);
    }

    pub fn restart(&mut self) {
        self.reset();
        self.last_outcome = None;
    }

    /// Left click: first click generates the board, bombs lose, anything
    /// else reveals. Returns the newly revealed tiles.
    pub fn primary_click(&mut self, x: usize, y: usize) -> Vec<(usize, usize, u8)> {
        if x >= self.mine.board.width || y >= self.mine.board.height {
            return Vec::new();
        }
        if self.mine.is_generated() && self.mine.is_bomb(x, y) {
            self.last_outcome = Some(Outcome::Lost);
            self.reset();
            return Vec::new();
        }
        if !self.mine.is_generated() {
            self.mine.register_first_click(x, y);
        }
        self.mine.reveal(x, y)
    }

    /// Right click: toggle the flag. Flagging the last bomb wins the round
    /// and replaces the board. Returns the tile's new flagged state.
    pub fn secondary_click(&mut self, x: usize, y: usize) -> bool {
        if x >= self.mine.board.width || y >= self.mine.board.height {
            return false;
        }
        let outcome = self.mine.toggle_flag(x, y);
        if outcome.won {
            self.last_outcome = Some(Outcome::Won);
            self.reset();
        }
        outcome.flagged
    }

    pub fn bombs_left(&self) -> usize {
        self.mine.bombs_left()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_game() -> Game {
        Game::with_params(Params::new(8, 8, 4, 1).unwrap())
    }

    fn bomb_positions(game: &Game) -> Vec<(usize, usize)> {
        (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| game.mine.is_bomb(x, y))
            .collect()
    }

    #[test]
    fn first_click_generates_and_reveals() {
        let mut game = small_game();
        assert!(!game.mine.is_generated());
        let revealed = game.primary_click(3, 3);
        assert!(game.mine.is_generated());
        assert!(!revealed.is_empty());
        assert!(game.mine.board.tile(3, 3).revealed);
        assert_eq!(game.last_outcome, None);
    }

    #[test]
    fn bomb_click_loses_and_replaces_board() {
        let mut game = small_game();
        game.primary_click(3, 3);
        let (bx, by) = bomb_positions(&game)[0];
        let revealed = game.primary_click(bx, by);
        assert!(revealed.is_empty());
        assert_eq!(game.last_outcome, Some(Outcome::Lost));
        // Fresh board: ungenerated, full counter, nothing revealed.
        assert!(!game.mine.is_generated());
        assert_eq!(game.bombs_left(), 4);
        assert!(!game.mine.board.tile(3, 3).revealed);
    }

    #[test]
    fn flagging_every_bomb_wins_and_replaces_board() {
        let mut game = small_game();
        game.primary_click(3, 3);
        for (bx, by) in bomb_positions(&game) {
            game.secondary_click(bx, by);
        }
        assert_eq!(game.last_outcome, Some(Outcome::Won));
        assert!(!game.mine.is_generated());
        assert_eq!(game.bombs_left(), 4);
    }

    #[test]
    fn flags_before_generation_cannot_win() {
        let mut game = small_game();
        for y in 0..8 {
            for x in 0..8 {
                game.secondary_click(x, y);
            }
        }
        assert_eq!(game.last_outcome, None);
        assert_eq!(game.bombs_left(), 4);
    }

    #[test]
    fn out_of_bounds_clicks_are_ignored() {
        let mut game = small_game();
        assert!(game.primary_click(8, 0).is_empty());
        assert!(!game.secondary_click(0, 8));
        assert!(!game.mine.is_generated());
    }

    #[test]
    fn restart_clears_outcome() {
        let mut game = small_game();
        game.primary_click(3, 3);
        let (bx, by) = bomb_positions(&game)[0];
        game.primary_click(bx, by);
        assert_eq!(game.last_outcome, Some(Outcome::Lost));
        game.restart();
        assert_eq!(game.last_outcome, None);
    }
}
