use std::sync::Arc;

use super::record::Record;

/// A row-scoped affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub const fn icon(self) -> char {
        match self {
            RowAction::View => '●',
            RowAction::Edit => '✎',
            RowAction::Delete => '✖',
        }
    }
}

pub type RowCallback<T> = Arc<dyn Fn(&T) + Send + Sync>;
pub type CreateCallback = Arc<dyn Fn() + Send + Sync>;

/// The optional callbacks a grid owner supplies. Each present row
/// callback gets an icon in the action column; `create` gets a button in
/// the title band. Callbacks receive a clone of the affected row and must
/// not assume they may mutate the grid's dataset in place — owners react
/// by calling `set_rows`.
pub struct Actions<T: Record> {
    pub view: Option<RowCallback<T>>,
    pub edit: Option<RowCallback<T>>,
    pub delete: Option<RowCallback<T>>,
    pub create: Option<CreateCallback>,
}

impl<T: Record> Actions<T> {
    pub fn none() -> Self {
        Self {
            view: None,
            edit: None,
            delete: None,
            create: None,
        }
    }

    /// The row actions with a callback configured, in display order.
    pub fn row_actions(&self) -> Vec<RowAction> {
        let mut actions = Vec::with_capacity(3);
        if self.view.is_some() {
            actions.push(RowAction::View);
        }
        if self.edit.is_some() {
            actions.push(RowAction::Edit);
        }
        if self.delete.is_some() {
            actions.push(RowAction::Delete);
        }
        actions
    }

    pub fn has_row_actions(&self) -> bool {
        self.view.is_some() || self.edit.is_some() || self.delete.is_some()
    }

    /// Invoke the callback for a row action, if configured.
    pub fn invoke(&self, action: RowAction, row: &T) {
        let callback = match action {
            RowAction::View => &self.view,
            RowAction::Edit => &self.edit,
            RowAction::Delete => &self.delete,
        };
        if let Some(callback) = callback {
            callback(row);
        }
    }

    pub fn invoke_create(&self) {
        if let Some(callback) = &self.create {
            callback();
        }
    }
}

impl<T: Record> Default for Actions<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: Record> Clone for Actions<T> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            edit: self.edit.clone(),
            delete: self.delete.clone(),
            create: self.create.clone(),
        }
    }
}

impl<T: Record> std::fmt::Debug for Actions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Actions")
            .field("view", &self.view.is_some())
            .field("edit", &self.edit.is_some())
            .field("delete", &self.delete.is_some())
            .field("create", &self.create.is_some())
            .finish()
    }
}
