use crate::engine::physics::{Bounds, RigidBody};

/// ANSI sequence that homes the cursor and clears the terminal
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[J";

/// Draws bodies on a fixed character grid.
///
/// One cell per world unit. World `y` grows upwards, so world row `y` is
/// printed on line `height - 1 - y`. The outermost ring of cells is
/// always the wall, drawn over any body that sits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiRenderer {
    width: usize,
    height: usize,
}

impl AsciiRenderer {
    pub const WALL: char = '#';
    pub const BODY: char = 'O';
    pub const EMPTY: char = ' ';

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Grid covering the simulation box, one cell per unit
    pub fn for_bounds(bounds: &Bounds) -> Self {
        Self::new(bounds.width.ceil() as usize, bounds.height.ceil() as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid cell of a world position, if it falls inside the grid
    pub fn cell(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let col = x.round() as i64;
        let row = y.round() as i64;
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return None;
        }
        Some((self.height - 1 - row as usize, col as usize))
    }

    /// Character grid, top line first
    pub fn grid(&self, bodies: &[RigidBody]) -> Vec<Vec<char>> {
        let mut grid = vec![vec![Self::EMPTY; self.width]; self.height];

        for body in bodies {
            let pos = body.position();
            if let Some((line, col)) = self.cell(pos.x, pos.y) {
                grid[line][col] = Self::BODY;
            }
        }

        for (line, row) in grid.iter_mut().enumerate() {
            for (col, cell) in row.iter_mut().enumerate() {
                if line == 0 || line == self.height - 1 || col == 0 || col == self.width - 1 {
                    *cell = Self::WALL;
                }
            }
        }

        grid
    }

    /// The grid as text, one line per row, each ending in `\n`
    pub fn frame(&self, bodies: &[RigidBody]) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.grid(bodies) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::for_bounds(&Bounds::default())
    }
}
