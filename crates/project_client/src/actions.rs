//! Edit and delete capability slots.

use core_types::ProjectId;

/// Per-project actions bound to the card buttons.
pub trait ProjectActions {
    fn edit(&self, id: ProjectId);
    fn delete(&self, id: ProjectId);
}

/// Logs the request and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingActions;

impl ProjectActions for LoggingActions {
    fn edit(&self, id: ProjectId) {
        log::info!("Edit project {id}");
    }

    fn delete(&self, id: ProjectId) {
        log::info!("Delete project {id}");
    }
}

impl<A: ProjectActions + ?Sized> ProjectActions for &A {
    fn edit(&self, id: ProjectId) {
        (**self).edit(id);
    }

    fn delete(&self, id: ProjectId) {
        (**self).delete(id);
    }
}
