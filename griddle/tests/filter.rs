use griddle::{Column, DataGrid, Record};

#[derive(Debug, Clone)]
struct Student {
    id: u32,
    name: String,
    instrument: String,
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
            "email" => self.email.clone(),
            _ => None,
        }
    }
}

fn student(id: u32, name: &str, instrument: &str) -> Student {
    Student {
        id,
        name: name.to_string(),
        instrument: instrument.to_string(),
        email: None,
    }
}

fn columns() -> Vec<Column<Student>> {
    vec![
        Column::new("name", "Name", 20),
        Column::new("instrument", "Instrument", 12),
        Column::new("email", "Email", 24),
    ]
}

fn roster() -> Vec<Student> {
    vec![
        student(1, "Ada Lovelace", "Piano"),
        student(2, "Clara Schumann", "Piano"),
        student(3, "Niccolo Paganini", "Violin"),
        student(4, "Django Reinhardt", "Guitar"),
    ]
}

#[test]
fn test_empty_term_passes_every_row() {
    let grid = DataGrid::with_rows("Students", columns(), roster());
    assert_eq!(grid.filtered_len(), 4);
}

#[test]
fn test_matches_are_case_insensitive() {
    let grid = DataGrid::with_rows("Students", columns(), roster());
    grid.set_search_term("PIANO");
    let names: Vec<String> = grid.filtered_rows().iter().map(|s| s.name.clone()).collect();
    assert_eq!(names, vec!["Ada Lovelace", "Clara Schumann"]);
}

#[test]
fn test_substring_matches_anywhere_in_value() {
    let grid = DataGrid::with_rows("Students", columns(), roster());
    grid.set_search_term("hardt");
    assert_eq!(grid.filtered_len(), 1);
    assert_eq!(grid.filtered_rows()[0].name, "Django Reinhardt");
}

#[test]
fn test_any_column_can_match() {
    let grid = DataGrid::with_rows("Students", columns(), roster());
    // Matches the instrument column, not the name column.
    grid.set_search_term("violin");
    assert_eq!(grid.filtered_len(), 1);
    assert_eq!(grid.filtered_rows()[0].name, "Niccolo Paganini");
}

#[test]
fn test_absent_fields_never_match() {
    let grid = DataGrid::with_rows("Students", columns(), roster());
    // Every email is None; searching for the placeholder glyph the
    // renderer shows must not match anything.
    grid.set_search_term("—");
    assert_eq!(grid.filtered_len(), 0);
}

#[test]
fn test_filter_matches_raw_value_not_render_output() {
    let cols = vec![
        Column::new("name", "Name", 20),
        Column::new("instrument", "Instrument", 12)
            .render(|raw, _| format!("<{}>", raw.unwrap_or(""))),
    ];
    let grid = DataGrid::with_rows("Students", cols, roster());

    // The transform wraps values in angle brackets; the filter still
    // sees the plain field value.
    grid.set_search_term("piano");
    assert_eq!(grid.filtered_len(), 2);
    grid.set_search_term("<piano>");
    assert_eq!(grid.filtered_len(), 0);
}

#[test]
fn test_no_match_yields_empty_set() {
    let grid = DataGrid::with_rows("Students", columns(), roster());
    grid.set_search_term("theremin");
    assert_eq!(grid.filtered_len(), 0);
    assert!(grid.filtered_rows().is_empty());
    assert_eq!(grid.page_count(), 1);
}

#[test]
fn test_clearing_term_restores_all_rows() {
    let grid = DataGrid::with_rows("Students", columns(), roster());
    grid.set_search_term("violin");
    assert_eq!(grid.filtered_len(), 1);
    grid.set_search_term("");
    assert_eq!(grid.filtered_len(), 4);
}

#[test]
fn test_filtered_rows_keep_dataset_order() {
    let grid = DataGrid::with_rows("Students", columns(), roster());
    grid.set_search_term("a");
    let ids: Vec<u32> = grid.filtered_rows().iter().map(|s| s.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}
