use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::game::Outcome;
use crate::ui::{layout_panes, Panes};
use crate::{Game, CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W};

pub fn draw_game(frame: &mut Frame, game: &Game) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("MINEFIELD"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("MINEFIELD")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    frame.render_widget(cabinet, area);

    let Panes {
        info,
        well,
        controls,
    } = layout_panes(area);

    draw_info(frame, game, info);
    draw_playfield(frame, game, well);
    draw_controls(frame, controls);
}

fn draw_playfield(frame: &mut Frame, game: &Game, play_rect: Rect) {
    let mut grid = vec![vec![' '; PLAY_W]; PLAY_H];

    // Border: top/ceiling, sides, heavy floor.
    grid[0][0] = '┌';
    grid[0][PLAY_W - 1] = '┐';
    for x in 1..PLAY_W - 1 {
        grid[0][x] = '─';
    }
    for y in 1..PLAY_H - 1 {
        grid[y][0] = '│';
        grid[y][PLAY_W - 1] = '│';
    }
    grid[PLAY_H - 1][0] = '└';
    grid[PLAY_H - 1][PLAY_W - 1] = '┘';
    for x in 1..PLAY_W - 1 {
        grid[PLAY_H - 1][x] = '═';
    }

    // Helper to plot one tile in the inner area, two characters wide.
    let plot_tile = |grid: &mut [Vec<char>], bx: usize, by: usize, left: char, right: char| {
        let gx = 1 + bx * CELL_W;
        let gy = 1 + by;
        if gy < PLAY_H && gx + 1 < PLAY_W {
            grid[gy][gx] = left;
            grid[gy][gx + 1] = right;
        }
    };

    for y in 0..game.mine.board.height {
        for x in 0..game.mine.board.width {
            let tile = game.mine.board.tile(x, y);
            let (left, right) = if tile.revealed {
                if tile.adjacent > 0 {
                    let digit = char::from_digit(tile.adjacent as u32, 10).unwrap_or('?');
                    (digit, ' ')
                } else {
                    (' ', ' ')
                }
            } else if tile.flagged {
                ('⚑', '░')
            } else {
                ('░', '░')
            };
            plot_tile(&mut grid, x, y, left, right);
        }
    }

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, play_rect);
}

fn draw_info(frame: &mut Frame, game: &Game, area: Rect) {
    let status = if game.mine.is_generated() {
        // Blink while a round is live.
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        if (millis / 300) % 2 == 0 { "LIVE" } else { "    " }
    } else {
        "READY"
    };

    let last = match game.last_outcome {
        Some(Outcome::Won) => "CLEAR",
        Some(Outcome::Lost) => "BOOM",
        None => "-",
    };

    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw(format!("{:<8} {}", "BOMBS:", game.bombs_left())),
        Line::raw(format!("{:<8} {}", "STATUS:", status)),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![Line::raw(format!("{:<6} {}", "LAST:", last))])
        .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![Line::raw("lmb reveal"), Line::raw("rmb flag")])
        .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![Line::raw("r restart"), Line::raw("q quit")])
        .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}
