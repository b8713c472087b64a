use std::sync::{Arc, Mutex};

use griddle::{
    Buffer, Column, DataGrid, Event, EventResult, FocusSlot, HitMap, HitTarget, Key, Modifiers,
    MouseButton, Record, Rect, RowAction, Theme, render,
};

#[derive(Debug, Clone)]
struct Entry {
    id: u32,
    name: String,
}

impl Record for Entry {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            _ => None,
        }
    }
}

fn entries(count: u32) -> Vec<Entry> {
    (0..count)
        .map(|id| Entry {
            id,
            name: format!("entry-{id:03}"),
        })
        .collect()
}

fn grid(count: u32) -> DataGrid<Entry> {
    DataGrid::with_rows(
        "Entries",
        vec![Column::new("name", "Name", 16)],
        entries(count),
    )
}

fn key(key: Key) -> Event {
    Event::Key {
        key,
        modifiers: Modifiers::new(),
    }
}

fn click(x: u16, y: u16) -> Event {
    Event::Click {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn paint(grid: &DataGrid<Entry>) -> HitMap {
    let mut buf = Buffer::new(80, 12);
    render(grid, Rect::from_size(80, 12), &mut buf, &Theme::dark())
}

type Log = Arc<Mutex<Vec<String>>>;

fn log_entry(log: &Log, tag: &str, entry: &Entry) {
    log.lock().unwrap().push(format!("{tag}:{}", entry.name));
}

#[test]
fn test_action_icon_click_invokes_callback_once_with_that_row() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);
    let grid = grid(7).on_delete(move |entry| log_entry(&seen, "delete", entry));

    let mut hits = HitMap::new();
    hits.register(Rect::new(70, 4, 2, 1), HitTarget::RowAction(1, RowAction::Delete));

    let result = grid.handle_event(&click(70, 4), &hits);
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(*log.lock().unwrap(), vec!["delete:entry-001"]);
    // The clicked row also becomes the cursor row.
    assert_eq!(grid.cursor(), 1);
}

#[test]
fn test_painted_action_icon_resolves_and_fires() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);
    let grid = grid(3).on_view(move |entry| log_entry(&seen, "view", entry));

    let hits = paint(&grid);
    let (x, y) = (0u16..80)
        .flat_map(|x| (3u16..8).map(move |y| (x, y)))
        .find(|(x, y)| hits.resolve(*x, *y) == Some(HitTarget::RowAction(2, RowAction::View)))
        .expect("view icon not registered");

    grid.handle_event(&click(x, y), &hits);
    assert_eq!(*log.lock().unwrap(), vec!["view:entry-002"]);
}

#[test]
fn test_create_click_invokes_callback_once() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);
    let grid = grid(3).on_create(move || seen.lock().unwrap().push("create".to_string()));

    let mut hits = HitMap::new();
    hits.register(Rect::new(73, 0, 7, 1), HitTarget::CreateButton);

    grid.handle_event(&click(73, 0), &hits);
    assert_eq!(*log.lock().unwrap(), vec!["create"]);
}

#[test]
fn test_click_outside_any_region_is_ignored() {
    let grid = grid(3);
    let hits = HitMap::new();
    assert_eq!(grid.handle_event(&click(40, 6), &hits), EventResult::Ignored);
}

#[test]
fn test_page_button_click_jumps_to_page() {
    let grid = grid(32);
    let mut hits = HitMap::new();
    hits.register(Rect::new(60, 11, 3, 1), HitTarget::PageButton(4));

    grid.handle_event(&click(60, 11), &hits);
    assert_eq!(grid.page(), 4);
}

#[test]
fn test_nav_clicks_step_pages() {
    let grid = grid(32);
    let mut hits = HitMap::new();
    hits.register(Rect::new(50, 11, 3, 1), HitTarget::PrevPage);
    hits.register(Rect::new(76, 11, 3, 1), HitTarget::NextPage);

    grid.handle_event(&click(76, 11), &hits);
    grid.handle_event(&click(76, 11), &hits);
    assert_eq!(grid.page(), 2);
    grid.handle_event(&click(50, 11), &hits);
    assert_eq!(grid.page(), 1);
}

#[test]
fn test_page_size_click_cycles_options() {
    let grid = grid(32);
    let mut hits = HitMap::new();
    hits.register(Rect::new(5, 1, 6, 1), HitTarget::PageSizeSelect);

    grid.handle_event(&click(5, 1), &hits);
    assert_eq!(grid.page_size().rows(), 10);
    assert_eq!(grid.page(), 0);
}

#[test]
fn test_row_click_moves_cursor_and_focuses_table() {
    let grid = grid(5);
    grid.set_focus(FocusSlot::Search);
    let mut hits = HitMap::new();
    hits.register(Rect::new(0, 5, 80, 1), HitTarget::Row(2));

    grid.handle_event(&click(10, 5), &hits);
    assert_eq!(grid.focus(), FocusSlot::Table);
    assert_eq!(grid.cursor(), 2);
}

#[test]
fn test_tab_toggles_focus() {
    let grid = grid(3);
    let hits = HitMap::new();
    grid.handle_event(&key(Key::Tab), &hits);
    assert_eq!(grid.focus(), FocusSlot::Search);
    grid.handle_event(&key(Key::Tab), &hits);
    assert_eq!(grid.focus(), FocusSlot::Table);
}

#[test]
fn test_typing_in_search_edits_term_and_resets_page() {
    let grid = grid(32);
    grid.set_page(3);
    grid.set_focus(FocusSlot::Search);
    let hits = HitMap::new();

    for c in ['0', '0', '7'] {
        grid.handle_event(&key(Key::Char(c)), &hits);
    }
    assert_eq!(grid.search_term(), "007");
    assert_eq!(grid.page(), 0);
    assert_eq!(grid.filtered_len(), 1);
}

#[test]
fn test_enter_leaves_search_focus() {
    let grid = grid(3);
    grid.set_focus(FocusSlot::Search);
    let hits = HitMap::new();
    grid.handle_event(&key(Key::Enter), &hits);
    assert_eq!(grid.focus(), FocusSlot::Table);
}

#[test]
fn test_table_keys_drive_cursor_and_pages() {
    let grid = grid(32);
    let hits = HitMap::new();

    grid.handle_event(&key(Key::Down), &hits);
    grid.handle_event(&key(Key::Down), &hits);
    assert_eq!(grid.cursor(), 2);
    grid.handle_event(&key(Key::Up), &hits);
    assert_eq!(grid.cursor(), 1);

    grid.handle_event(&key(Key::PageDown), &hits);
    assert_eq!(grid.page(), 1);
    grid.handle_event(&key(Key::End), &hits);
    assert_eq!(grid.page(), 6);
    grid.handle_event(&key(Key::Home), &hits);
    assert_eq!(grid.page(), 0);
}

#[test]
fn test_enter_in_table_views_cursor_row() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);
    let grid = grid(7).on_view(move |entry| log_entry(&seen, "view", entry));
    let hits = HitMap::new();

    grid.handle_event(&key(Key::Down), &hits);
    grid.handle_event(&key(Key::Enter), &hits);
    assert_eq!(*log.lock().unwrap(), vec!["view:entry-001"]);
}

#[test]
fn test_create_key_requires_callback() {
    let plain = grid(3);
    let hits = HitMap::new();
    assert_eq!(
        plain.handle_event(&key(Key::Char('n')), &hits),
        EventResult::Ignored
    );

    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);
    let wired = grid(3).on_create(move || seen.lock().unwrap().push("create".to_string()));
    assert_eq!(
        wired.handle_event(&key(Key::Char('n')), &hits),
        EventResult::Consumed
    );
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_modified_keys_fall_through_in_table() {
    let grid = grid(32);
    let hits = HitMap::new();
    let event = Event::Key {
        key: Key::Down,
        modifiers: Modifiers::ctrl(),
    };
    assert_eq!(grid.handle_event(&event, &hits), EventResult::Ignored);
    assert_eq!(grid.cursor(), 0);
}

#[test]
fn test_scroll_moves_cursor() {
    let grid = grid(7);
    let hits = HitMap::new();

    grid.handle_event(&Event::Scroll { x: 10, y: 5, delta: 1 }, &hits);
    assert_eq!(grid.cursor(), 1);
    grid.handle_event(&Event::Scroll { x: 10, y: 5, delta: -1 }, &hits);
    assert_eq!(grid.cursor(), 0);
}

#[test]
fn test_resize_marks_dirty() {
    let grid = grid(3);
    grid.clear_dirty();
    let hits = HitMap::new();
    grid.handle_event(
        &Event::Resize {
            width: 100,
            height: 30,
        },
        &hits,
    );
    assert!(grid.is_dirty());
}
