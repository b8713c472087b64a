#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn left(&self) -> u16 {
        self.x
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn top(&self) -> u16 {
        self.y
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// The fixed horizontal bands the grid is painted into, top to bottom:
/// title line, page-size controls, column header, data rows, footer with
/// the entries summary and pager strip.
#[derive(Debug, Clone, Copy)]
pub struct GridBands {
    pub title: Rect,
    pub controls: Rect,
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Rows of chrome around the data band: title, controls, header, footer.
pub const CHROME_ROWS: u16 = 4;

impl GridBands {
    /// Carve an area into bands. The body takes whatever height remains;
    /// a too-small area yields an empty body.
    pub fn carve(area: Rect) -> Self {
        let line = |offset: u16| Rect::new(area.x, area.y + offset, area.width, 1);
        let body_height = area.height.saturating_sub(CHROME_ROWS);

        Self {
            title: line(0),
            controls: line(1),
            header: line(2),
            body: Rect::new(area.x, area.y + 3, area.width, body_height),
            footer: line(area.height.saturating_sub(1)),
        }
    }
}

/// X positions for fixed-width columns laid out left to right with a one
/// cell gap, starting at `origin`.
pub fn column_positions(origin: u16, widths: &[u16]) -> Vec<u16> {
    let mut positions = Vec::with_capacity(widths.len());
    let mut x = origin;
    for width in widths {
        positions.push(x);
        x = x.saturating_add(width + 1);
    }
    positions
}
