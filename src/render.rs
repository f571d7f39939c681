//! Render seam
//!
//! Renderers only ever see `&GameState`. The text renderer draws the grid as
//! characters for the headless build; canvas drawing lives with the host.

use std::io::Write;

use crate::sim::{Cell, Direction, GamePhase, GameState, SpiderState};

/// Read-only consumer of a frame
pub trait Renderer {
    fn render(&mut self, state: &GameState);
}

impl<F: FnMut(&GameState)> Renderer for F {
    fn render(&mut self, state: &GameState) {
        self(state)
    }
}

/// Draws frames as text, one frame every `interval` calls
pub struct TextRenderer<W: Write> {
    out: W,
    interval: u64,
    frames: u64,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, interval: u64) -> Self {
        Self {
            out,
            interval: interval.max(1),
            frames: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, state: &GameState) {
        let frame = self.frames;
        self.frames += 1;
        if frame % self.interval != 0 {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", draw_frame(state)) {
            log::warn!("Text render failed: {}", e);
        }
    }
}

/// Render the whole board plus a status line
pub fn draw_frame(state: &GameState) -> String {
    let maze = &state.maze;
    let (width, height) = (maze.width(), maze.height());
    let mut grid: Vec<Vec<char>> = (0..height)
        .map(|row| {
            (0..width)
                .map(|col| match maze.cell(col as i32, row as i32) {
                    Some(Cell::Path) => '.',
                    _ => '#',
                })
                .collect()
        })
        .collect();

    let mut put = |col: i32, row: i32, glyph: char| {
        if col >= 0 && row >= 0 && (col as usize) < width && (row as usize) < height {
            grid[row as usize][col as usize] = glyph;
        }
    };

    for nest in &state.nests {
        put(nest.col, nest.row, 'N');
    }
    for spider in &state.spiders {
        let glyph = match spider.state {
            SpiderState::Wandering => 's',
            SpiderState::Chasing => 'S',
        };
        put(spider.pos.x.floor() as i32, spider.pos.y.floor() as i32, glyph);
    }
    for arrow in &state.character.arrows {
        put(arrow.col, arrow.row, '*');
    }
    let (col, row) = state.character.cell();
    let glyph = match state.character.facing {
        Direction::Up => '^',
        Direction::Down => 'v',
        Direction::Left => '<',
        Direction::Right => '>',
    };
    put(col, row, glyph);

    let mut text: String = grid
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    text.push('\n');
    text.push_str(&status_line(state));
    text
}

/// One-line HUD
pub fn status_line(state: &GameState) -> String {
    let phase = match state.phase {
        GamePhase::Running => "running",
        GamePhase::GameOver => "GAME OVER",
    };
    format!(
        "lives {} | arrows {}/{} | nests {} | spiders {} | t={:.1}s | {}",
        state.character.lives,
        state.character.arrow_count,
        state.character.max_arrows,
        state.nests.len(),
        state.spiders.len(),
        state.time_ms / 1000.0,
        phase
    )
}
