//! In-memory list patching after a successful mutation, and the delete
//! confirmation flow shared by the CRUD pages.

use api::Entity;

/// Lifecycle of a CRUD page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
    Submitting,
}

/// Whether the edit dialog creates a new entity or edits the one with this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// What the page must do after a create succeeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The server echoed the entity and it was appended.
    Inserted,
    /// The server did not echo it; reload the collection.
    Refetch,
}

pub fn apply_created<T>(list: &mut Vec<T>, echoed: Option<T>) -> CreateOutcome {
    match echoed {
        Some(item) => {
            list.push(item);
            CreateOutcome::Inserted
        }
        None => CreateOutcome::Refetch,
    }
}

/// Replace the entity with the same id. Returns false if it was not in the list.
pub fn apply_updated<T: Entity>(list: &mut [T], item: T) -> bool {
    match list.iter_mut().find(|existing| existing.id() == item.id()) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Remove the entity with `id`. Returns false if it was not in the list.
pub fn apply_deleted<T: Entity>(list: &mut Vec<T>, id: i64) -> bool {
    let before = list.len();
    list.retain(|item| item.id() != id);
    list.len() != before
}

/// Two-step delete: `request` opens the dialog, `confirm` hands back the target.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteConfirmation<T> {
    pending: Option<T>,
}

impl<T> Default for DeleteConfirmation<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> DeleteConfirmation<T> {
    pub fn request(&mut self, target: T) {
        self.pending = Some(target);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The target to delete; closes the dialog.
    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn target(&self) -> Option<&T> {
        self.pending.as_ref()
    }
}
