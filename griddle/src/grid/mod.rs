//! The data-grid widget: dataset + column descriptors in, a searchable,
//! paginated table with row-scoped action affordances out.

mod actions;
mod column;
mod events;
mod pager;
mod record;
mod render;
mod state;

pub use actions::{Actions, CreateCallback, RowAction, RowCallback};
pub use column::{CellRender, Column, PLACEHOLDER};
pub use events::EventResult;
pub use pager::{PageSize, PagerControl, controls, page_count};
pub use record::Record;
pub use render::{HitMap, HitTarget, render};
pub use state::{DataGrid, FocusSlot};
