/// Signed-in identity handed out by the external auth collaborator.
///
/// Never persisted here: the admin panel re-derives the current state
/// from the session watch on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

impl Session {
    /// Name shown in the admin header; falls back to a fixed label the
    /// way the original dashboard did.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_prefers_display_name() {
        let session = Session {
            uid: "u1".into(),
            email: "natan@example.com".into(),
            display_name: Some("Natan".into()),
        };
        assert_eq!(session.display_label(), "Natan");
    }

    #[test]
    fn display_label_falls_back_to_admin() {
        let session = Session {
            uid: "u1".into(),
            email: "natan@example.com".into(),
            display_name: None,
        };
        assert_eq!(session.display_label(), "Admin");
    }
}
