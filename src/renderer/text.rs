//! Character-grid renderer for headless runs and debugging
//!
//! Each cell covers a `cell` x `cell` square of the visible area.

use super::Renderer;
use crate::sim::{Bounds, Frame, PlatformKind, Rect};

/// Draws the visible area as rows of characters
#[derive(Debug, Clone)]
pub struct TextRenderer {
    cell: f32,
    output: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(32.0)
    }
}

impl TextRenderer {
    pub fn new(cell: f32) -> Self {
        Self {
            cell: cell.max(1.0),
            output: String::new(),
        }
    }

    /// Last rendered frame, rows separated by newlines
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Fill every cell the rect touches, shifted into view space
    fn paint(&self, grid: &mut [Vec<char>], rect: Rect, camera_x: f32, glyph: char) {
        let rows = grid.len() as i64;
        let cols = grid.first().map_or(0, |row| row.len()) as i64;

        let left = ((rect.x - camera_x) / self.cell).floor() as i64;
        let right = ((rect.right() - camera_x) / self.cell).ceil() as i64 - 1;
        let top = (rect.y / self.cell).floor() as i64;
        let bottom = (rect.bottom() / self.cell).ceil() as i64 - 1;

        for row in top.max(0)..=bottom.min(rows - 1) {
            for col in left.max(0)..=right.min(cols - 1) {
                grid[row as usize][col as usize] = glyph;
            }
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        let cols = (frame.view_width / self.cell).ceil() as usize;
        let rows = (frame.view_height / self.cell).ceil() as usize;
        let mut grid = vec![vec![' '; cols]; rows];

        for platform in frame.platforms {
            let glyph = match platform.kind {
                PlatformKind::Ground => '#',
                PlatformKind::Floating => '=',
            };
            self.paint(&mut grid, platform.rect, frame.camera_x, glyph);
        }
        for coin in frame.coins {
            let pos = coin.draw_pos();
            let mut rect = coin.bounds();
            rect.x = pos.x;
            rect.y = pos.y;
            self.paint(&mut grid, rect, frame.camera_x, 'o');
        }
        for enemy in frame.enemies {
            self.paint(&mut grid, enemy.bounds(), frame.camera_x, 'g');
        }
        self.paint(&mut grid, frame.player.bounds(), frame.camera_x, '@');

        self.output = grid
            .into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
    }
}
