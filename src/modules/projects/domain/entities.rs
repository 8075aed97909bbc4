// src/modules/projects/domain/entities.rs

use serde_json::Value;

use crate::modules::store::application::ports::outgoing::Document;

/// How many technology tags a card shows before collapsing the rest into
/// a `+N` badge.
pub const INLINE_TECH_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub featured: bool,
    pub order: i64,
    pub visible: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectMapError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

impl ProjectEntry {
    pub fn from_document(doc: &Document) -> Result<Self, ProjectMapError> {
        let fields = &doc.fields;

        let title = fields
            .get("titulo")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(ProjectMapError::MissingField("titulo"))?;
        let description = fields
            .get("descricao")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .ok_or(ProjectMapError::MissingField("descricao"))?;

        Ok(Self {
            id: doc.id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            long_description: opt_str(fields, "descricaoCompleta"),
            technologies: str_list(fields, "tecnologias"),
            features: str_list(fields, "funcionalidades"),
            image_url: opt_str(fields, "imagemUrl"),
            demo_url: opt_str(fields, "demoUrl"),
            repo_url: opt_str(fields, "githubUrl"),
            featured: fields
                .get("destaque")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            order: fields.get("ordem").and_then(Value::as_i64).unwrap_or(0),
            visible: fields.get("visivel").and_then(Value::as_bool).unwrap_or(true),
        })
    }

    /// Expanded description for the modal; falls back to the short one.
    pub fn detail_text(&self) -> &str {
        self.long_description.as_deref().unwrap_or(&self.description)
    }

    /// The tags shown inline on the card plus how many were collapsed.
    /// Truncation never reorders: the first three stay first.
    pub fn inline_technologies(&self) -> (&[String], usize) {
        if self.technologies.len() <= INLINE_TECH_LIMIT {
            (&self.technologies, 0)
        } else {
            (
                &self.technologies[..INLINE_TECH_LIMIT],
                self.technologies.len() - INLINE_TECH_LIMIT,
            )
        }
    }
}

/// Empty strings count as absent; the original rendered the placeholder
/// for `imagemUrl: ''`.
fn opt_str(fields: &Value, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn str_list(fields: &Value, key: &str) -> Vec<String> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project_with_techs(techs: &[&str]) -> ProjectEntry {
        ProjectEntry {
            id: "p".into(),
            title: "CineHub".into(),
            description: "Portal de cinema.".into(),
            long_description: None,
            technologies: techs.iter().map(|s| s.to_string()).collect(),
            features: vec![],
            image_url: None,
            demo_url: None,
            repo_url: None,
            featured: false,
            order: 1,
            visible: true,
        }
    }

    #[test]
    fn inline_technologies_truncates_without_reordering() {
        let project = project_with_techs(&["React", "Node.js", "PostgreSQL", "JWT", "Chart.js"]);
        let (inline, overflow) = project.inline_technologies();
        assert_eq!(inline, ["React", "Node.js", "PostgreSQL"]);
        assert_eq!(overflow, 2);
    }

    #[test]
    fn three_or_fewer_technologies_show_in_full() {
        let project = project_with_techs(&["HTML5", "CSS3"]);
        let (inline, overflow) = project.inline_technologies();
        assert_eq!(inline.len(), 2);
        assert_eq!(overflow, 0);
    }

    #[test]
    fn detail_text_falls_back_to_short_description() {
        let mut project = project_with_techs(&[]);
        assert_eq!(project.detail_text(), "Portal de cinema.");

        project.long_description = Some("Texto completo.".into());
        assert_eq!(project.detail_text(), "Texto completo.");
    }

    #[test]
    fn maps_document_and_treats_empty_strings_as_absent() {
        let doc = Document {
            id: "42".into(),
            fields: json!({
                "titulo": "TaskFlow",
                "descricao": "Gerenciador de tarefas.",
                "descricaoCompleta": "",
                "tecnologias": ["React", "Node.js"],
                "imagemUrl": "",
                "demoUrl": "#",
                "githubUrl": "https://github.com/DiasNatan",
                "destaque": true,
                "ordem": 5,
                "visivel": true
            }),
        };

        let project = ProjectEntry::from_document(&doc).unwrap();
        assert_eq!(project.id, "42");
        assert_eq!(project.long_description, None);
        assert_eq!(project.image_url, None);
        // "#" is a placeholder link but still a present value.
        assert_eq!(project.demo_url.as_deref(), Some("#"));
        assert!(project.featured);
        assert_eq!(project.order, 5);
    }

    #[test]
    fn missing_title_rejects_document() {
        let doc = Document {
            id: "x".into(),
            fields: json!({ "descricao": "sem título" }),
        };
        assert!(matches!(
            ProjectEntry::from_document(&doc),
            Err(ProjectMapError::MissingField("titulo"))
        ));
    }

    #[test]
    fn optional_collections_default_to_empty() {
        let doc = Document {
            id: "x".into(),
            fields: json!({ "titulo": "T", "descricao": "D" }),
        };
        let project = ProjectEntry::from_document(&doc).unwrap();
        assert!(project.technologies.is_empty());
        assert!(project.features.is_empty());
        assert_eq!(project.order, 0);
        assert!(project.visible);
    }
}
