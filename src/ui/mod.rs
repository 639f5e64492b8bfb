use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use crate::{BOARD_H, BOARD_W, CELL_W, PLAY_H, PLAY_W};

mod render;
pub use render::draw_game;

const INFO_H: u16 = 4;
const CONTROLS_H: u16 = 4;

pub struct Panes {
    pub info: Rect,
    pub well: Rect,
    pub controls: Rect,
}

/// Splits the terminal into the info box, playfield, and controls box.
/// Hit-testing goes through the same split so clicks always land on the
/// tile the renderer drew.
pub fn layout_panes(area: Rect) -> Panes {
    let cabinet_inner = area.inner(&Margin {
        horizontal: 1,
        vertical: 1,
    });

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(INFO_H),
            Constraint::Length(PLAY_H as u16),
            Constraint::Length(CONTROLS_H),
            Constraint::Min(0),
        ])
        .split(col_rect);

    Panes {
        info: stack[1],
        well: stack[2],
        controls: stack[3],
    }
}

/// Maps a terminal cell to a board tile, if the click landed inside the
/// playfield border.
pub fn tile_at(area: Rect, column: u16, row: u16) -> Option<(usize, usize)> {
    let well = layout_panes(area).well;
    let inner_x = well.x + 1;
    let inner_y = well.y + 1;
    if column < inner_x || row < inner_y {
        return None;
    }
    let x = ((column - inner_x) as usize) / CELL_W;
    let y = (row - inner_y) as usize;
    (x < BOARD_W && y < BOARD_H).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_map_to_tiles_through_the_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let well = layout_panes(area).well;

        // Top-left tile spans two columns just inside the border.
        assert_eq!(tile_at(area, well.x + 1, well.y + 1), Some((0, 0)));
        assert_eq!(tile_at(area, well.x + 2, well.y + 1), Some((0, 0)));
        assert_eq!(tile_at(area, well.x + 3, well.y + 1), Some((1, 0)));
        assert_eq!(tile_at(area, well.x + 1, well.y + 2), Some((0, 1)));

        // Bottom-right tile.
        let last_col = well.x + 1 + ((BOARD_W - 1) * CELL_W) as u16;
        let last_row = well.y + (BOARD_H as u16);
        assert_eq!(tile_at(area, last_col, last_row), Some((BOARD_W - 1, BOARD_H - 1)));
    }

    #[test]
    fn clicks_on_the_border_miss() {
        let area = Rect::new(0, 0, 100, 40);
        let well = layout_panes(area).well;

        assert_eq!(tile_at(area, well.x, well.y + 1), None);
        assert_eq!(tile_at(area, well.x + 1, well.y), None);
        // One row past the bottom tile is the floor border.
        assert_eq!(tile_at(area, well.x + 1, well.y + 1 + BOARD_H as u16), None);
    }
}
