use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const TICK_MS: u64 = 50;
/// Terminal columns per rain column.
pub const CELL_WIDTH: u16 = 2;
pub const RESET_CHANCE: f64 = 0.025;
const START_SPREAD: i32 = 20;
/// Brightness lost per tick; a glyph fades out after ~20 ticks.
const FADE_STEP: u8 = 13;

const GLYPHS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789$+-*/=%\"'#&_(),.;:?!\\|{}<>[]^~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainCell {
    pub glyph: char,
    /// 255 for a freshly drawn glyph, decaying to 0.
    pub brightness: u8,
}

/// Digital-rain drawing surface sized to one pane.
#[derive(Debug)]
pub struct RainSurface {
    cols: u16,
    rows: u16,
    drops: Vec<i32>,
    cells: Vec<Option<RainCell>>,
    rng: SmallRng,
}

impl RainSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self::with_rng(cols, rows, SmallRng::from_os_rng())
    }

    pub fn with_seed(cols: u16, rows: u16, seed: u64) -> Self {
        Self::with_rng(cols, rows, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(cols: u16, rows: u16, mut rng: SmallRng) -> Self {
        let drops = (0..cols)
            .map(|_| rng.random_range(-START_SPREAD..0))
            .collect();
        Self {
            cols,
            rows,
            drops,
            cells: vec![None; cols as usize * rows as usize],
            rng,
        }
    }

    /// Surface for a pane `width` x `height` terminal cells.
    pub fn for_area(width: u16, height: u16) -> Self {
        Self::new(width / CELL_WIDTH, height)
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn drops(&self) -> &[i32] {
        &self.drops
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<RainCell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    /// Rebuilds the surface for a new pane size, keeping nothing.
    pub fn resize(&mut self, width: u16, height: u16) {
        let cols = width / CELL_WIDTH;
        if cols == self.cols && height == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = height;
        self.drops = (0..cols)
            .map(|_| self.rng.random_range(-START_SPREAD..0))
            .collect();
        self.cells = vec![None; cols as usize * height as usize];
    }

    pub fn tick(&mut self) {
        for cell in self.cells.iter_mut() {
            if let Some(c) = cell {
                c.brightness = c.brightness.saturating_sub(FADE_STEP);
                if c.brightness == 0 {
                    *cell = None;
                }
            }
        }

        let rows = self.rows as i32;
        for col in 0..self.cols as usize {
            let row = self.drops[col];
            if (0..rows).contains(&row) {
                let glyph = GLYPHS[self.rng.random_range(0..GLYPHS.len())] as char;
                self.cells[row as usize * self.cols as usize + col] = Some(RainCell {
                    glyph,
                    brightness: 255,
                });
            }
            if row >= rows && self.rng.random_bool(RESET_CHANCE) {
                self.drops[col] = 0;
            }
            self.drops[col] += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/fx/rain.rs"]
mod tests;
