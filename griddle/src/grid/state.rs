//! Grid widget state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use log::trace;

use crate::event::{Key, Modifiers};
use crate::search::SearchField;

use super::actions::{Actions, CreateCallback, RowCallback};
use super::column::Column;
use super::pager::{self, PageSize};
use super::record::Record;

/// Which part of the widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusSlot {
    Search,
    #[default]
    Table,
}

/// Internal state behind the lock. The only transient UI state is the
/// triple (search term, page index, page size) plus the table cursor;
/// rows and columns are owned data the widget never mutates.
#[derive(Debug)]
struct Inner<T: Record> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    search: SearchField,
    page: usize,
    page_size: PageSize,
    /// Cursor position within the visible page.
    cursor: usize,
    focus: FocusSlot,
}

impl<T: Record> Inner<T> {
    fn filtered_indices(&self) -> Vec<usize> {
        if self.search.is_empty() {
            return (0..self.rows.len()).collect();
        }
        let term = self.search.text().to_lowercase();
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                self.columns.iter().any(|column| {
                    column
                        .raw_value(row)
                        .is_some_and(|value| value.to_lowercase().contains(&term))
                })
            })
            .map(|(index, _)| index)
            .collect()
    }

    fn filtered_len(&self) -> usize {
        self.filtered_indices().len()
    }

    fn page_count(&self) -> usize {
        pager::page_count(self.filtered_len(), self.page_size)
    }

    fn visible_len(&self) -> usize {
        let size = self.page_size.rows();
        let start = self.page * size;
        self.filtered_len().saturating_sub(start).min(size)
    }

    /// Keep page and cursor inside their ranges after any change to the
    /// dataset, the filter, or the page size.
    fn clamp(&mut self) {
        self.page = self.page.min(self.page_count() - 1);
        self.cursor = self.cursor.min(self.visible_len().saturating_sub(1));
    }
}

/// A searchable, paginated data-grid widget.
///
/// `DataGrid<T>` owns a snapshot of rows plus column descriptors and the
/// transient UI state (search term, page index, page size, cursor).
/// Filtering and pagination are recomputed on demand and never touch the
/// row data. Cloning shares the same state; the renderer and the event
/// dispatcher both work through `&self`.
pub struct DataGrid<T: Record> {
    title: String,
    inner: Arc<RwLock<Inner<T>>>,
    dirty: Arc<AtomicBool>,
    pub(crate) actions: Actions<T>,
}

impl<T: Record> DataGrid<T> {
    pub fn new(title: impl Into<String>, columns: Vec<Column<T>>) -> Self {
        Self {
            title: title.into(),
            inner: Arc::new(RwLock::new(Inner {
                columns,
                rows: Vec::new(),
                search: SearchField::default(),
                page: 0,
                page_size: PageSize::default(),
                cursor: 0,
                focus: FocusSlot::default(),
            })),
            dirty: Arc::new(AtomicBool::new(true)),
            actions: Actions::none(),
        }
    }

    pub fn with_rows(title: impl Into<String>, columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        let grid = Self::new(title, columns);
        grid.set_rows(rows);
        grid
    }

    // -------------------------------------------------------------------------
    // Callbacks
    // -------------------------------------------------------------------------

    pub fn on_view<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.actions.view = Some(Arc::new(f) as RowCallback<T>);
        self
    }

    pub fn on_edit<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.actions.edit = Some(Arc::new(f) as RowCallback<T>);
        self
    }

    pub fn on_delete<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.actions.delete = Some(Arc::new(f) as RowCallback<T>);
        self
    }

    pub fn on_create<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.actions.create = Some(Arc::new(f) as CreateCallback);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn actions(&self) -> &Actions<T> {
        &self.actions
    }

    // -------------------------------------------------------------------------
    // Rows and columns
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Replace the dataset. Page and cursor are clamped back into range;
    /// the search term is kept.
    pub fn set_rows(&self, rows: Vec<T>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.clamp();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn columns(&self) -> Vec<Column<T>> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    pub fn search_term(&self) -> String {
        self.inner
            .read()
            .map(|g| g.search.text().to_string())
            .unwrap_or_default()
    }

    pub fn search_cursor(&self) -> usize {
        self.inner.read().map(|g| g.search.cursor()).unwrap_or(0)
    }

    /// Set the search term. Any change resets the page index to zero.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        if let Ok(mut guard) = self.inner.write() {
            if guard.search.text() != term {
                guard.search.set(term);
                guard.page = 0;
                guard.cursor = 0;
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Feed an editing key to the search field. A change to the term
    /// resets the page index to zero, recomputing the filter.
    pub fn edit_search(&self, key: Key, modifiers: Modifiers) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            let changed = guard.search.handle_key(key, modifiers);
            if changed {
                guard.page = 0;
                guard.cursor = 0;
                trace!("search term now {:?}", guard.search.text());
            }
            self.dirty.store(true, Ordering::SeqCst);
            return changed;
        }
        false
    }

    /// Rows passing the current filter, in dataset order.
    pub fn filtered_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| {
                g.filtered_indices()
                    .into_iter()
                    .map(|i| g.rows[i].clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn filtered_len(&self) -> usize {
        self.inner.read().map(|g| g.filtered_len()).unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn page(&self) -> usize {
        self.inner.read().map(|g| g.page).unwrap_or(0)
    }

    pub fn page_size(&self) -> PageSize {
        self.inner.read().map(|g| g.page_size).unwrap_or_default()
    }

    pub fn page_count(&self) -> usize {
        self.inner.read().map(|g| g.page_count()).unwrap_or(1)
    }

    /// Jump to a page, clamped into range.
    pub fn set_page(&self, page: usize) {
        if let Ok(mut guard) = self.inner.write() {
            let clamped = page.min(guard.page_count() - 1);
            if clamped != guard.page {
                guard.page = clamped;
                guard.cursor = guard.cursor.min(guard.visible_len().saturating_sub(1));
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    pub fn next_page(&self) {
        self.set_page(self.page() + 1);
    }

    pub fn prev_page(&self) {
        let page = self.page();
        if page > 0 {
            self.set_page(page - 1);
        }
    }

    pub fn first_page(&self) {
        self.set_page(0);
    }

    pub fn last_page(&self) {
        self.set_page(self.page_count() - 1);
    }

    /// Change the page size. Any change resets the page index to zero.
    pub fn set_page_size(&self, size: PageSize) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.page_size != size {
                guard.page_size = size;
                guard.page = 0;
                guard.cursor = 0;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    pub fn cycle_page_size(&self) {
        self.set_page_size(self.page_size().cycle());
    }

    /// Rows on the current page, in display order.
    pub fn visible_rows(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|g| {
                let size = g.page_size.rows();
                g.filtered_indices()
                    .into_iter()
                    .skip(g.page * size)
                    .take(size)
                    .map(|i| g.rows[i].clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Cursor and focus
    // -------------------------------------------------------------------------

    pub fn cursor(&self) -> usize {
        self.inner.read().map(|g| g.cursor).unwrap_or(0)
    }

    pub fn cursor_row(&self) -> Option<T> {
        self.visible_rows().get(self.cursor()).cloned()
    }

    pub fn set_cursor(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write() {
            let clamped = index.min(guard.visible_len().saturating_sub(1));
            if clamped != guard.cursor {
                guard.cursor = clamped;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    pub fn cursor_up(&self) {
        let cursor = self.cursor();
        if cursor > 0 {
            self.set_cursor(cursor - 1);
        }
    }

    pub fn cursor_down(&self) {
        self.set_cursor(self.cursor() + 1);
    }

    pub fn focus(&self) -> FocusSlot {
        self.inner.read().map(|g| g.focus).unwrap_or_default()
    }

    pub fn set_focus(&self, focus: FocusSlot) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.focus != focus {
                guard.focus = focus;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    pub fn toggle_focus(&self) {
        let next = match self.focus() {
            FocusSlot::Search => FocusSlot::Table,
            FocusSlot::Table => FocusSlot::Search,
        };
        self.set_focus(next);
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T: Record> Clone for DataGrid<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            actions: self.actions.clone(),
        }
    }
}
