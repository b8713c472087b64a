//! Event dispatch for the grid.

use log::debug;

use crate::event::{Event, Key, Modifiers, MouseButton};

use super::actions::RowAction;
use super::record::Record;
use super::render::{HitMap, HitTarget};
use super::state::{DataGrid, FocusSlot};

/// Whether the grid acted on an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

impl<T: Record> DataGrid<T> {
    /// Dispatch one input event. Clicks resolve against the hit map from
    /// the most recent paint. Callbacks run synchronously, after the
    /// widget's own state transition, with no lock held.
    pub fn handle_event(&self, event: &Event, hits: &HitMap) -> EventResult {
        match event {
            Event::Key { key, modifiers } => self.handle_key(*key, *modifiers),
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(*x, *y, hits),
            Event::Click { .. } => EventResult::Ignored,
            Event::Scroll { delta, .. } => {
                if *delta < 0 {
                    self.cursor_up();
                } else {
                    self.cursor_down();
                }
                EventResult::Consumed
            }
            Event::Resize { width, height } => {
                debug!("grid repaint after resize to {width}x{height}");
                self.mark_dirty();
                EventResult::Consumed
            }
        }
    }

    fn handle_key(&self, key: Key, modifiers: Modifiers) -> EventResult {
        if matches!(key, Key::Tab | Key::BackTab) {
            self.toggle_focus();
            return EventResult::Consumed;
        }

        match self.focus() {
            FocusSlot::Search => self.handle_search_key(key, modifiers),
            FocusSlot::Table => self.handle_table_key(key, modifiers),
        }
    }

    fn handle_search_key(&self, key: Key, modifiers: Modifiers) -> EventResult {
        match key {
            Key::Enter => {
                self.set_focus(FocusSlot::Table);
                EventResult::Consumed
            }
            Key::Escape if self.search_term().is_empty() => {
                self.set_focus(FocusSlot::Table);
                EventResult::Consumed
            }
            _ => {
                self.edit_search(key, modifiers);
                EventResult::Consumed
            }
        }
    }

    fn handle_table_key(&self, key: Key, modifiers: Modifiers) -> EventResult {
        if !modifiers.none() {
            return EventResult::Ignored;
        }

        match key {
            Key::Up => self.cursor_up(),
            Key::Down => self.cursor_down(),
            Key::PageUp => self.prev_page(),
            Key::PageDown => self.next_page(),
            Key::Home => self.first_page(),
            Key::End => self.last_page(),
            Key::Char('/') => self.set_focus(FocusSlot::Search),
            Key::Enter => {
                if let Some(row) = self.cursor_row() {
                    self.actions.invoke(RowAction::View, &row);
                }
            }
            Key::Char('n') => {
                if self.actions.create.is_some() {
                    self.actions.invoke_create();
                } else {
                    return EventResult::Ignored;
                }
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn handle_click(&self, x: u16, y: u16, hits: &HitMap) -> EventResult {
        let Some(target) = hits.resolve(x, y) else {
            return EventResult::Ignored;
        };
        debug!("click at ({x}, {y}) hit {target:?}");

        match target {
            HitTarget::SearchBox => self.set_focus(FocusSlot::Search),
            HitTarget::CreateButton => self.actions.invoke_create(),
            HitTarget::PageSizeSelect => self.cycle_page_size(),
            HitTarget::PrevPage => self.prev_page(),
            HitTarget::NextPage => self.next_page(),
            HitTarget::PageButton(page) => self.set_page(page),
            HitTarget::Row(index) => {
                self.set_focus(FocusSlot::Table);
                self.set_cursor(index);
            }
            HitTarget::RowAction(index, action) => {
                self.set_cursor(index);
                if let Some(row) = self.visible_rows().get(index).cloned() {
                    self.actions.invoke(action, &row);
                }
            }
        }
        EventResult::Consumed
    }
}
