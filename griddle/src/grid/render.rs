//! Painting the grid into a buffer.
//!
//! Rendering reads the widget state, paints every band, and records a hit
//! region for each affordance it draws. The returned [`HitMap`] is what
//! click dispatch resolves against, so regions and pixels can never drift
//! apart.

use crate::buffer::Buffer;
use crate::layout::{GridBands, Rect, column_positions};
use crate::text::{display_width, fit_to_width, truncate_to_width};
use crate::theme::Theme;
use crate::types::{TextAlign, TextStyle};

use super::actions::RowAction;
use super::pager::{self, PagerControl};
use super::record::Record;
use super::state::{DataGrid, FocusSlot};

/// Width of the search box, including its magnifier prefix.
const SEARCH_WIDTH: u16 = 24;
/// Cells per action icon (icon plus trailing gap).
const ACTION_CELL: u16 = 3;
const CREATE_LABEL: &str = " + New ";
const ACTIONS_LABEL: &str = "Actions";

/// What a screen region maps to when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    SearchBox,
    CreateButton,
    PageSizeSelect,
    PrevPage,
    NextPage,
    /// A numbered pager button, zero-based page index.
    PageButton(usize),
    /// A data row, by index within the visible page.
    Row(usize),
    /// One action icon on a visible row.
    RowAction(usize, RowAction),
}

/// Affordance regions recorded during the last paint. Later registrations
/// win on overlap, matching paint order.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, rect: Rect, target: HitTarget) {
        if !rect.is_empty() {
            self.regions.push((rect, target));
        }
    }

    pub fn resolve(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, target)| *target)
    }

    pub fn contains(&self, target: HitTarget) -> bool {
        self.regions.iter().any(|(_, t)| *t == target)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Paint the whole widget into `area` and return the affordance map.
pub fn render<T: Record>(
    grid: &DataGrid<T>,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
) -> HitMap {
    let mut hits = HitMap::new();
    if area.is_empty() {
        return hits;
    }

    for y in area.top()..area.bottom().min(buf.height()) {
        buf.fill_row(area.x, y, area.width, theme.background);
    }

    let bands = GridBands::carve(area);
    render_title_band(grid, bands.title, buf, theme, &mut hits);
    render_controls_band(grid, bands.controls, buf, theme, &mut hits);
    render_header(grid, bands.header, buf, theme);
    render_body(grid, bands.body, buf, theme, &mut hits);
    render_footer(grid, bands.footer, buf, theme, &mut hits);

    grid.clear_dirty();
    hits
}

fn render_title_band<T: Record>(
    grid: &DataGrid<T>,
    band: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let create_width = if grid.actions().create.is_some() {
        display_width(CREATE_LABEL) as u16
    } else {
        0
    };

    // Title at the left, search box and create button packed to the right.
    let reserved = create_width + if create_width > 0 { 1 } else { 0 } + SEARCH_WIDTH;
    let title_width = band.width.saturating_sub(reserved + 1);
    buf.set_text(
        band.x,
        band.y,
        grid.title(),
        title_width,
        theme.text,
        theme.background,
        TextStyle::new().bold(),
    );

    let search_x = band.right().saturating_sub(reserved);
    let search_rect = Rect::new(search_x, band.y, SEARCH_WIDTH.min(band.width), 1);
    render_search_box(grid, search_rect, buf, theme);
    hits.register(search_rect, HitTarget::SearchBox);

    if create_width > 0 {
        let create_x = band.right().saturating_sub(create_width);
        let create_rect = Rect::new(create_x, band.y, create_width, 1);
        buf.fill_row(create_rect.x, create_rect.y, create_rect.width, theme.accent);
        buf.set_text(
            create_rect.x,
            create_rect.y,
            CREATE_LABEL,
            create_rect.width,
            theme.on_accent,
            theme.accent,
            TextStyle::new().bold(),
        );
        hits.register(create_rect, HitTarget::CreateButton);
    }
}

fn render_search_box<T: Record>(grid: &DataGrid<T>, rect: Rect, buf: &mut Buffer, theme: &Theme) {
    let focused = grid.focus() == FocusSlot::Search;
    let bg = theme.surface;
    buf.fill_row(rect.x, rect.y, rect.width, bg);

    buf.set_text(rect.x, rect.y, "⌕ ", 2, theme.muted, bg, TextStyle::new());

    let field_width = rect.width.saturating_sub(2) as usize;
    let term = grid.search_term();
    let (text, fg, style) = if term.is_empty() && !focused {
        ("Search...".to_string(), theme.muted, TextStyle::new())
    } else {
        let style = if focused {
            TextStyle::new().underline()
        } else {
            TextStyle::new()
        };
        (truncate_to_width(&term, field_width), theme.text, style)
    };
    buf.set_text(
        rect.x + 2,
        rect.y,
        &text,
        field_width as u16,
        fg,
        bg,
        style,
    );
}

fn render_controls_band<T: Record>(
    grid: &DataGrid<T>,
    band: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    hits: &mut HitMap,
) {
    buf.set_text(
        band.x,
        band.y,
        "Show ",
        band.width,
        theme.muted,
        theme.background,
        TextStyle::new(),
    );

    let selector = format!("[{:>2} ▾]", grid.page_size().rows());
    let selector_width = display_width(&selector) as u16;
    let selector_rect = Rect::new(band.x + 5, band.y, selector_width, 1);
    buf.set_text(
        selector_rect.x,
        selector_rect.y,
        &selector,
        selector_width,
        theme.text,
        theme.background,
        TextStyle::new(),
    );
    hits.register(selector_rect, HitTarget::PageSizeSelect);

    buf.set_text(
        selector_rect.right() + 1,
        band.y,
        "entries",
        band.width.saturating_sub(selector_rect.right() + 1 - band.x),
        theme.muted,
        theme.background,
        TextStyle::new(),
    );
}

fn render_header<T: Record>(grid: &DataGrid<T>, band: Rect, buf: &mut Buffer, theme: &Theme) {
    buf.fill_row(band.x, band.y, band.width, theme.surface);

    let columns = grid.columns();
    let actions_width = actions_width(grid);
    let data_right = band.right().saturating_sub(actions_width);
    let widths: Vec<u16> = columns.iter().map(|c| c.width).collect();
    let positions = column_positions(band.x, &widths);

    for (column, x) in columns.iter().zip(&positions) {
        if *x >= data_right {
            break;
        }
        let width = column.width.min(data_right.saturating_sub(*x));
        buf.set_text(
            *x,
            band.y,
            &fit_to_width(&column.label, width as usize, column.align),
            width,
            theme.text,
            theme.surface,
            TextStyle::new().bold(),
        );
    }

    if actions_width > 0 {
        let x = band.right().saturating_sub(actions_width);
        buf.set_text(
            x,
            band.y,
            &fit_to_width(ACTIONS_LABEL, actions_width as usize, TextAlign::Right),
            actions_width,
            theme.text,
            theme.surface,
            TextStyle::new().bold(),
        );
    }
}

fn render_body<T: Record>(
    grid: &DataGrid<T>,
    band: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let columns = grid.columns();
    let rows = grid.visible_rows();
    let row_actions = grid.actions().row_actions();
    let actions_width = actions_width(grid);
    let data_right = band.right().saturating_sub(actions_width);
    let widths: Vec<u16> = columns.iter().map(|c| c.width).collect();
    let positions = column_positions(band.x, &widths);
    let cursor = grid.cursor();
    let table_focused = grid.focus() == FocusSlot::Table;

    for (i, row) in rows.iter().enumerate() {
        if i as u16 >= band.height {
            break;
        }
        let y = band.y + i as u16;
        let highlighted = table_focused && i == cursor;
        let (fg, bg) = if highlighted {
            (theme.on_accent, theme.accent)
        } else {
            (theme.text, theme.background)
        };
        if highlighted {
            buf.fill_row(band.x, y, band.width, bg);
        }

        let row_rect = Rect::new(band.x, y, band.width, 1);
        hits.register(row_rect, HitTarget::Row(i));

        for (column, x) in columns.iter().zip(&positions) {
            if *x >= data_right {
                break;
            }
            let width = column.width.min(data_right.saturating_sub(*x));
            buf.set_text(
                *x,
                y,
                &fit_to_width(&column.display(row), width as usize, column.align),
                width,
                fg,
                bg,
                TextStyle::new(),
            );
        }

        let action_count = row_actions.len() as u16;
        for (j, action) in row_actions.iter().enumerate() {
            // Right-aligned under the Actions header label.
            let x = band
                .right()
                .saturating_sub((action_count - j as u16) * ACTION_CELL)
                + 1;
            let icon_fg = if highlighted {
                theme.on_accent
            } else {
                match action {
                    RowAction::View => theme.info,
                    RowAction::Edit => theme.accent,
                    RowAction::Delete => theme.danger,
                }
            };
            buf.set_text(
                x,
                y,
                &action.icon().to_string(),
                2,
                icon_fg,
                bg,
                TextStyle::new(),
            );
            hits.register(Rect::new(x, y, 2, 1), HitTarget::RowAction(i, *action));
        }
    }
}

fn render_footer<T: Record>(
    grid: &DataGrid<T>,
    band: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let filtered = grid.filtered_len();
    let page = grid.page();
    let size = grid.page_size().rows();
    let start = if filtered == 0 { 0 } else { page * size + 1 };
    let end = ((page + 1) * size).min(filtered);
    let summary = format!("Showing {start} to {end} of {filtered} entries");

    buf.set_text(
        band.x,
        band.y,
        &summary,
        band.width,
        theme.muted,
        theme.background,
        TextStyle::new(),
    );

    render_pager(grid, band, buf, theme, hits);
}

fn render_pager<T: Record>(
    grid: &DataGrid<T>,
    band: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let page = grid.page();
    let page_count = grid.page_count();
    let controls = pager::controls(page, page_count);

    // Lay the strip out right-aligned: widths first, then paint.
    let mut widths: Vec<u16> = vec![3];
    for control in &controls {
        widths.push(match control {
            PagerControl::Page(index) => display_width(&(index + 1).to_string()) as u16 + 2,
            PagerControl::Ellipsis => 1,
        });
    }
    widths.push(3);
    let total: u16 = widths.iter().map(|w| w + 1).sum::<u16>().saturating_sub(1);
    let mut x = band.right().saturating_sub(total);

    let prev_enabled = page > 0;
    let prev_rect = Rect::new(x, band.y, 3, 1);
    paint_nav(buf, prev_rect, "‹", prev_enabled, theme);
    if prev_enabled {
        hits.register(prev_rect, HitTarget::PrevPage);
    }
    x += 4;

    for (control, width) in controls.iter().zip(widths.iter().skip(1)) {
        match control {
            PagerControl::Page(index) => {
                let current = *index == page;
                let rect = Rect::new(x, band.y, *width, 1);
                let (fg, bg) = if current {
                    (theme.on_accent, theme.accent)
                } else {
                    (theme.text, theme.background)
                };
                buf.fill_row(rect.x, rect.y, rect.width, bg);
                buf.set_text(
                    rect.x,
                    rect.y,
                    &fit_to_width(&(index + 1).to_string(), *width as usize, TextAlign::Center),
                    *width,
                    fg,
                    bg,
                    TextStyle::new(),
                );
                hits.register(rect, HitTarget::PageButton(*index));
            }
            PagerControl::Ellipsis => {
                buf.set_text(
                    x,
                    band.y,
                    "…",
                    1,
                    theme.muted,
                    theme.background,
                    TextStyle::new(),
                );
            }
        }
        x += width + 1;
    }

    let next_enabled = page + 1 < page_count;
    let next_rect = Rect::new(x, band.y, 3, 1);
    paint_nav(buf, next_rect, "›", next_enabled, theme);
    if next_enabled {
        hits.register(next_rect, HitTarget::NextPage);
    }
}

fn paint_nav(buf: &mut Buffer, rect: Rect, glyph: &str, enabled: bool, theme: &Theme) {
    let fg = if enabled { theme.text } else { theme.muted };
    buf.fill_row(rect.x, rect.y, rect.width, theme.surface);
    buf.set_text(
        rect.x + 1,
        rect.y,
        glyph,
        1,
        fg,
        theme.surface,
        TextStyle::new(),
    );
}

fn actions_width<T: Record>(grid: &DataGrid<T>) -> u16 {
    let count = grid.actions().row_actions().len() as u16;
    if count == 0 {
        0
    } else {
        (count * ACTION_CELL).max(display_width(ACTIONS_LABEL) as u16)
    }
}
