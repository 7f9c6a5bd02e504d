//! Character grid used by the chart renderer
//!
//! Row 0 is the top of the chart. Writes outside the current bounds grow the
//! grid instead of failing.

/// Character grid for text charts
#[derive(Debug, Clone)]
pub struct ChartCanvas {
    pub width: usize,
    pub height: usize,
    pub grid: Vec<Vec<char>>,
}

impl ChartCanvas {
    /// Create a new canvas with the specified dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let grid = vec![vec![' '; width.max(1)]; height.max(1)];
        Self {
            width,
            height,
            grid,
        }
    }

    /// Ensure the canvas is at least the specified size, expanding if needed
    pub fn ensure_size(&mut self, min_width: usize, min_height: usize) {
        if min_width > self.width {
            for row in &mut self.grid {
                row.resize(min_width, ' ');
            }
            self.width = min_width;
        }
        if min_height > self.height {
            let extra_rows = min_height - self.height;
            self.grid
                .extend((0..extra_rows).map(|_| vec![' '; self.width]));
            self.height = min_height;
        }
    }

    /// Set a character at the specified position
    pub fn set_char(&mut self, x: usize, y: usize, c: char) {
        self.ensure_size(x + 1, y + 1);
        self.grid[y][x] = c;
    }

    /// Get the character at the specified position
    pub fn get_char(&self, x: usize, y: usize) -> char {
        if y < self.height && x < self.width {
            self.grid[y][x]
        } else {
            ' '
        }
    }

    /// Draw text at the specified position (left-aligned)
    pub fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        for (i, c) in text.chars().enumerate() {
            self.set_char(x + i, y, c);
        }
    }

    /// Draw text right-aligned so its last character lands on `right_x`
    pub fn draw_text_right(&mut self, right_x: usize, y: usize, text: &str) {
        let char_count = text.chars().count();
        let start_x = (right_x + 1).saturating_sub(char_count);
        self.draw_text(start_x, y, text);
    }

    /// Fill a column upward from `bottom_y`, covering `length` rows
    pub fn fill_column_up(&mut self, x: usize, bottom_y: usize, length: usize, c: char) {
        for i in 0..length.min(bottom_y + 1) {
            self.set_char(x, bottom_y - i, c);
        }
    }

    /// Draw a horizontal line
    pub fn draw_horizontal_line(&mut self, x: usize, y: usize, length: usize, c: char) {
        for i in 0..length {
            self.set_char(x + i, y, c);
        }
    }

    /// Get one row as a string with trailing spaces removed
    pub fn row(&self, y: usize) -> String {
        self.grid
            .get(y)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for ChartCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = (0..self.height).map(|y| self.row(y)).collect();
        write!(f, "{}", rows.join("\n"))
    }
}
