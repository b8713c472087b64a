//! Roster demo: a searchable, paginated student table.
//!
//! Controls:
//! - Tab or /: jump between the search box and the table
//! - Up/Down, PageUp/PageDown, Home/End: move through rows and pages
//! - Enter or the row icons: view, edit, delete the row under the cursor
//! - n or the "+ New" button: append a student
//! - Mouse: click rows, icons, pager buttons, the page-size selector
//! - q or Esc (with the table focused): quit

use std::fs::File;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use griddle::{
    Buffer, Column, DataGrid, Event, EventResult, HitMap, Key, Record, Rect, Result, Terminal,
    TextAlign, Theme, render,
};
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

// =============================================================================
// Data types
// =============================================================================

#[derive(Debug, Clone)]
struct Student {
    id: u32,
    name: String,
    instrument: String,
    level: u8,
    email: Option<String>,
}

impl Record for Student {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "instrument" => Some(self.instrument.clone()),
            "level" => Some(self.level.to_string()),
            "email" => self.email.clone(),
            _ => None,
        }
    }
}

fn seed_roster() -> Vec<Student> {
    let names = [
        ("Ada Lovelace", "Piano", 4, Some("ada@example.org")),
        ("Clara Schumann", "Piano", 8, Some("clara@example.org")),
        ("Niccolo Paganini", "Violin", 8, None),
        ("Django Reinhardt", "Guitar", 7, Some("django@example.org")),
        ("Mstislav Rostropovich", "Cello", 8, None),
        ("Evelyn Glennie", "Percussion", 8, Some("evelyn@example.org")),
        ("Jacqueline du Pre", "Cello", 7, None),
        ("Andres Segovia", "Guitar", 8, Some("andres@example.org")),
        ("Martha Argerich", "Piano", 8, None),
        ("Hilary Hahn", "Violin", 8, Some("hilary@example.org")),
        ("Yo-Yo Ma", "Cello", 8, Some("yoyo@example.org")),
        ("Art Tatum", "Piano", 8, None),
    ];
    names
        .into_iter()
        .enumerate()
        .map(|(i, (name, instrument, level, email))| Student {
            id: i as u32 + 1,
            name: name.to_string(),
            instrument: instrument.to_string(),
            level,
            email: email.map(str::to_string),
        })
        .collect()
}

// =============================================================================
// Actions
//
// Callbacks only record what was asked for; the main loop applies the
// change to the dataset afterwards.
// =============================================================================

#[derive(Debug, Clone)]
enum Action {
    View(String),
    Edit(String),
    Delete(u32),
    Create,
}

type ActionQueue = Arc<Mutex<Vec<Action>>>;

fn build_grid(queue: &ActionQueue) -> DataGrid<Student> {
    let columns = vec![
        Column::new("name", "Name", 24),
        Column::new("instrument", "Instrument", 12),
        Column::new("level", "Level", 8)
            .align(TextAlign::Right)
            .render(|raw, _| {
                let level: usize = raw.and_then(|v| v.parse().ok()).unwrap_or(0);
                "★".repeat(level.min(8))
            }),
        Column::new("email", "Email", 26),
    ];

    let on_view = Arc::clone(queue);
    let on_edit = Arc::clone(queue);
    let on_delete = Arc::clone(queue);
    let on_create = Arc::clone(queue);

    DataGrid::with_rows("Students", columns, seed_roster())
        .on_view(move |s: &Student| {
            on_view.lock().unwrap().push(Action::View(s.name.clone()));
        })
        .on_edit(move |s: &Student| {
            on_edit.lock().unwrap().push(Action::Edit(s.name.clone()));
        })
        .on_delete(move |s: &Student| {
            on_delete.lock().unwrap().push(Action::Delete(s.id));
        })
        .on_create(move || {
            on_create.lock().unwrap().push(Action::Create);
        })
}

fn apply_actions(grid: &DataGrid<Student>, queue: &ActionQueue, status: &mut String) {
    let drained: Vec<Action> = std::mem::take(&mut *queue.lock().unwrap());
    if !drained.is_empty() {
        // Status-only actions still need a repaint.
        grid.mark_dirty();
    }
    for action in drained {
        match action {
            Action::View(name) => *status = format!("Viewing {name}"),
            Action::Edit(name) => *status = format!("Editing {name}"),
            Action::Delete(id) => {
                let mut rows = grid.rows();
                rows.retain(|s| s.id != id);
                *status = format!("Deleted student #{id}");
                grid.set_rows(rows);
            }
            Action::Create => {
                let mut rows = grid.rows();
                let id = rows.iter().map(|s| s.id).max().unwrap_or(0) + 1;
                rows.push(Student {
                    id,
                    name: format!("New Student {id}"),
                    instrument: "Piano".to_string(),
                    level: 1,
                    email: None,
                });
                *status = format!("Added student #{id}");
                grid.set_rows(rows);
            }
        }
        info!("{status}");
    }
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    if let Ok(log_file) = File::create("roster.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let theme = Theme::dark();
    let queue: ActionQueue = Arc::new(Mutex::new(Vec::new()));
    let grid = build_grid(&queue);
    let mut status = String::from("Ready");

    let mut terminal = Terminal::new()?;
    let mut hits = HitMap::new();

    loop {
        if grid.is_dirty() {
            let (width, height) = terminal.size()?;
            let mut frame = Buffer::new(width, height);
            let area = Rect::from_size(width, height.saturating_sub(1));
            hits = render(&grid, area, &mut frame, &theme);
            frame.set_text(
                0,
                height.saturating_sub(1),
                &status,
                width,
                theme.muted,
                theme.background,
                Default::default(),
            );
            terminal.present(&frame)?;
        }

        for event in terminal.poll(Some(Duration::from_millis(100)))? {
            let result = grid.handle_event(&event, &hits);
            if result == EventResult::Ignored
                && let Event::Key { key, .. } = event
                && matches!(key, Key::Char('q') | Key::Escape)
            {
                return Ok(());
            }
            apply_actions(&grid, &queue, &mut status);
        }
    }
}
