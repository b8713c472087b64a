use std::sync::Arc;

use crate::types::TextAlign;

use super::record::Record;

/// Placeholder shown for absent or empty field values.
pub const PLACEHOLDER: &str = "—";

/// Custom display transform for one column. Receives the raw field value
/// (if any) and the whole row, so a transform may read sibling fields.
pub type CellRender<T> = Arc<dyn Fn(Option<&str>, &T) -> String + Send + Sync>;

/// Static descriptor for one column: which field it reads, its header
/// label, a fixed width in terminal cells, and an optional display
/// transform that overrides raw value display.
pub struct Column<T: Record> {
    pub id: String,
    pub label: String,
    pub width: u16,
    pub align: TextAlign,
    pub render: Option<CellRender<T>>,
}

impl<T: Record> Column<T> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, width: u16) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            width,
            align: TextAlign::Left,
            render: None,
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&str>, &T) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(f));
        self
    }

    /// The raw field value this column reads from a row.
    pub fn raw_value(&self, row: &T) -> Option<String> {
        row.field(&self.id)
    }

    /// The text displayed in this column's cell for a row: the transform
    /// output when one is set, the raw value otherwise, the placeholder
    /// when the value is absent or empty.
    pub fn display(&self, row: &T) -> String {
        let raw = self.raw_value(row);
        match &self.render {
            Some(render) => render(raw.as_deref(), row),
            None => match raw {
                Some(value) if !value.is_empty() => value,
                _ => PLACEHOLDER.to_string(),
            },
        }
    }
}

impl<T: Record> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            width: self.width,
            align: self.align,
            render: self.render.clone(),
        }
    }
}

impl<T: Record> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("render", &self.render.as_ref().map(|_| "fn"))
            .finish()
    }
}
