use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// A grid of cells the widget paints into. The terminal backend diffs two
/// of these to find what to flush.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Write a string starting at (x, y), clipped to `max_width` cells.
    /// Wide characters occupy continuation cells; a wide character that
    /// would straddle the clip edge is dropped.
    pub fn set_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        max_width: u16,
        fg: Rgb,
        bg: Rgb,
        style: TextStyle,
    ) {
        let mut cursor = x;
        let end = x.saturating_add(max_width).min(self.width);

        for ch in text.chars() {
            let w = char_width(ch).max(1) as u16;
            if cursor >= end || cursor + w > end {
                break;
            }
            self.set(
                cursor,
                y,
                Cell {
                    char: ch,
                    fg,
                    bg,
                    style,
                    wide_continuation: false,
                },
            );
            for i in 1..w {
                self.set(
                    cursor + i,
                    y,
                    Cell {
                        char: ' ',
                        fg,
                        bg,
                        style,
                        wide_continuation: true,
                    },
                );
            }
            cursor += w;
        }
    }

    /// Fill a horizontal span with the background color.
    pub fn fill_row(&mut self, x: u16, y: u16, width: u16, bg: Rgb) {
        if y >= self.height {
            return;
        }
        let end = x.saturating_add(width).min(self.width);
        for cx in x..end {
            let idx = self.index(cx, y);
            let fg = self.cells[idx].fg;
            self.cells[idx] = Cell {
                char: ' ',
                fg,
                bg,
                style: TextStyle::new(),
                wide_continuation: false,
            };
        }
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
