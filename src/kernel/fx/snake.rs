use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub const TICK_MS: u64 = 100;
/// 400x300 logical playfield on a 20px grid.
pub const GRID_WIDTH: i32 = 20;
pub const GRID_HEIGHT: i32 = 15;
pub const FOOD_SCORE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One step along `heading`, wrapping at the playfield edges.
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: (self.x + dx).rem_euclid(GRID_WIDTH),
            y: (self.y + dy).rem_euclid(GRID_HEIGHT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeKey {
    Turn(Heading),
    TogglePause,
    Restart,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
    Exit,
}

const INITIAL_BODY: [Cell; 3] = [Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)];

#[derive(Debug)]
pub struct SnakeGame {
    body: VecDeque<Cell>,
    heading: Heading,
    queued: Heading,
    food: Option<Cell>,
    score: u32,
    game_over: bool,
    paused: bool,
    rng: SmallRng,
}

impl SnakeGame {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        let mut game = Self {
            body: VecDeque::new(),
            heading: Heading::Right,
            queued: Heading::Right,
            food: None,
            score: 0,
            game_over: false,
            paused: false,
            rng,
        };
        game.reset();
        game
    }

    /// Back to the 3-cell snake heading right, score zero.
    pub fn reset(&mut self) {
        self.body = INITIAL_BODY.into_iter().collect();
        self.heading = Heading::Right;
        self.queued = Heading::Right;
        self.score = 0;
        self.game_over = false;
        self.paused = false;
        self.place_food();
    }

    pub fn body(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn head(&self) -> Cell {
        self.body.front().copied().unwrap_or(INITIAL_BODY[0])
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn occupies(&self, cell: Cell) -> bool {
        self.body.iter().any(|c| *c == cell)
    }

    fn place_food(&mut self) {
        let total = (GRID_WIDTH * GRID_HEIGHT) as usize;
        if self.body.len() >= total {
            self.food = None;
            return;
        }
        loop {
            let cell = Cell::new(
                self.rng.random_range(0..GRID_WIDTH),
                self.rng.random_range(0..GRID_HEIGHT),
            );
            if !self.occupies(cell) {
                self.food = Some(cell);
                return;
            }
        }
    }

    /// Advances one step. Frozen while paused or after game over.
    pub fn tick(&mut self) {
        if self.paused || self.game_over {
            return;
        }

        self.heading = self.queued;
        let next = self.head().step(self.heading);

        if self.occupies(next) {
            self.game_over = true;
            tracing::debug!(score = self.score, "snake collided");
            return;
        }

        self.body.push_front(next);
        if self.food == Some(next) {
            self.score += FOOD_SCORE;
            self.place_food();
        } else {
            self.body.pop_back();
        }
    }

    pub fn handle_key(&mut self, key: SnakeKey) -> KeyOutcome {
        match key {
            SnakeKey::Exit => KeyOutcome::Exit,
            SnakeKey::TogglePause => {
                self.paused = !self.paused;
                KeyOutcome::Handled
            }
            _ if self.paused => KeyOutcome::Ignored,
            SnakeKey::Restart if self.game_over => {
                self.reset();
                KeyOutcome::Handled
            }
            SnakeKey::Restart => KeyOutcome::Ignored,
            SnakeKey::Turn(heading) => {
                if heading == self.heading.reverse() {
                    return KeyOutcome::Ignored;
                }
                self.queued = heading;
                KeyOutcome::Handled
            }
        }
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/fx/snake.rs"]
mod tests;
