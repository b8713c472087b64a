//! Terminal data-grid widget: a searchable, paginated table with
//! per-row action affordances, rendered into a cell buffer and driven
//! by keyboard and mouse events.

pub mod buffer;
pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod search;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use error::{Error, Result};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use grid::{
    Actions, CellRender, Column, DataGrid, EventResult, FocusSlot, HitMap, HitTarget, PLACEHOLDER,
    PageSize, PagerControl, Record, RowAction, render,
};
pub use layout::{GridBands, Rect};
pub use search::SearchField;
pub use terminal::Terminal;
pub use theme::Theme;
pub use types::*;
