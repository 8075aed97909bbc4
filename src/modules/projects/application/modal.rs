// src/modules/projects/application/modal.rs

use crate::modules::projects::domain::ProjectEntry;

/// Detail-view state over the already-loaded project collection.
///
/// Opening never touches the network: ids only ever come from the
/// renderer, which drew them from the same loaded set, so a miss is a
/// silent no-op rather than a user-facing error. Closing is idempotent
/// and always possible.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProjectModal {
    open_id: Option<String>,
}

impl ProjectModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal for `id` when it exists in `loaded`; otherwise
    /// leaves the state untouched.
    pub fn open(&mut self, id: &str, loaded: &[ProjectEntry]) {
        if loaded.iter().any(|p| p.id == id) {
            self.open_id = Some(id.to_string());
        }
    }

    pub fn close(&mut self) {
        self.open_id = None;
    }

    pub fn is_open(&self) -> bool {
        self.open_id.is_some()
    }

    /// The project currently on display, if any.
    pub fn current<'a>(&self, loaded: &'a [ProjectEntry]) -> Option<&'a ProjectEntry> {
        let id = self.open_id.as_deref()?;
        loaded.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::projects::domain::fallback::fallback_projects;

    #[test]
    fn open_shows_known_project() {
        let loaded = fallback_projects();
        let mut modal = ProjectModal::new();

        modal.open("3", &loaded);
        assert!(modal.is_open());
        assert_eq!(modal.current(&loaded).unwrap().id, "3");
    }

    #[test]
    fn open_with_unknown_id_is_a_silent_no_op() {
        let loaded = fallback_projects();
        let mut modal = ProjectModal::new();

        modal.open("999", &loaded);
        assert!(!modal.is_open());
        assert!(modal.current(&loaded).is_none());
    }

    #[test]
    fn unknown_id_does_not_close_an_open_modal() {
        let loaded = fallback_projects();
        let mut modal = ProjectModal::new();

        modal.open("2", &loaded);
        modal.open("999", &loaded);
        assert_eq!(modal.current(&loaded).unwrap().id, "2");
    }

    #[test]
    fn close_is_idempotent() {
        let loaded = fallback_projects();
        let mut modal = ProjectModal::new();

        modal.open("1", &loaded);
        modal.close();
        let once = modal.clone();
        modal.close();

        assert_eq!(modal, once);
        assert!(!modal.is_open());
    }

    #[test]
    fn close_works_on_a_never_opened_modal() {
        let mut modal = ProjectModal::new();
        modal.close();
        assert!(!modal.is_open());
    }
}
