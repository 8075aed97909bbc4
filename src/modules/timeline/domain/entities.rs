// src/modules/timeline/domain/entities.rs

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::modules::store::application::ports::outgoing::Document;

/// Category tag of a timeline entry.
///
/// The stored tag is free text; the three known values get a display name
/// and icon, anything else is carried through as an open category and
/// rendered as its raw tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Education,
    Experience,
    Course,
    Other(String),
}

impl EntryKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "formacao" => EntryKind::Education,
            "experiencia" => EntryKind::Experience,
            "curso" => EntryKind::Course,
            other => EntryKind::Other(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            EntryKind::Education => "formacao",
            EntryKind::Experience => "experiencia",
            EntryKind::Course => "curso",
            EntryKind::Other(tag) => tag,
        }
    }

    /// Display name for the badge; an open category shows its raw tag.
    pub fn display_name(&self) -> &str {
        match self {
            EntryKind::Education => "Formação",
            EntryKind::Experience => "Experiência",
            EntryKind::Course => "Curso",
            EntryKind::Other(tag) => tag,
        }
    }

    /// Inline SVG for the badge; open categories have none.
    pub fn icon_svg(&self) -> Option<&'static str> {
        match self {
            EntryKind::Education => Some(ICON_EDUCATION),
            EntryKind::Experience => Some(ICON_EXPERIENCE),
            EntryKind::Course => Some(ICON_COURSE),
            EntryKind::Other(_) => None,
        }
    }
}

const ICON_EDUCATION: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M22 10v6M2 10l10-5 10 5-10 5z"></path><path d="M6 12v5c3 3 9 3 12 0v-5"></path></svg>"#;
const ICON_EXPERIENCE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="2" y="7" width="20" height="14" rx="2" ry="2"></rect><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"></path></svg>"#;
const ICON_COURSE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"></path><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"></path></svg>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: String,
    pub kind: EntryKind,
    pub title: String,
    pub institution: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub ongoing: bool,
    pub description: Option<String>,
    pub activities: Vec<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryMapError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unparseable date in `{field}`: {value}")]
    BadDate { field: &'static str, value: String },
}

impl TimelineEntry {
    /// Maps a raw store document onto a typed entry. Optional fields
    /// default to absent/empty; a missing required field rejects the
    /// document (the loader skips and logs it).
    pub fn from_document(doc: &Document) -> Result<Self, EntryMapError> {
        let fields = &doc.fields;

        let tag = require_str(fields, "tipo")?;
        let title = require_str(fields, "titulo")?;
        let institution = require_str(fields, "instituicao")?;

        let start_raw = fields
            .get("dataInicio")
            .filter(|v| !v.is_null())
            .ok_or(EntryMapError::MissingField("dataInicio"))?;
        let start_date = parse_entry_date(start_raw).ok_or_else(|| EntryMapError::BadDate {
            field: "dataInicio",
            value: start_raw.to_string(),
        })?;

        let end_date = match fields.get("dataFim").filter(|v| !v.is_null()) {
            Some(raw) => Some(parse_entry_date(raw).ok_or_else(|| EntryMapError::BadDate {
                field: "dataFim",
                value: raw.to_string(),
            })?),
            None => None,
        };

        Ok(Self {
            id: doc.id.clone(),
            kind: EntryKind::from_tag(tag),
            title: title.to_string(),
            institution: institution.to_string(),
            start_date,
            end_date,
            ongoing: fields
                .get("emAndamento")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            description: fields
                .get("descricao")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            activities: fields
                .get("atividades")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            visible: fields.get("visivel").and_then(Value::as_bool).unwrap_or(true),
        })
    }

    /// Formatted period for display. An ongoing entry always reads
    /// `"{início} - Atual"`, whatever `end_date` holds.
    pub fn period_label(&self) -> String {
        let start = format_month_year(self.start_date);
        if self.ongoing {
            return format!("{start} - Atual");
        }
        match self.end_date {
            Some(end) => format!("{start} - {}", format_month_year(end)),
            None => start,
        }
    }
}

fn require_str<'a>(fields: &'a Value, key: &'static str) -> Result<&'a str, EntryMapError> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(EntryMapError::MissingField(key))
}

/// Store dates arrive either as RFC 3339 timestamps or bare `YYYY-MM-DD`
/// strings (the fallback/import shapes).
pub fn parse_entry_date(value: &Value) -> Option<NaiveDate> {
    let raw = value.as_str()?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

const MONTHS_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

pub fn format_month_year(date: NaiveDate) -> String {
    use chrono::Datelike;
    let month = MONTHS_PT[date.month0() as usize];
    format!("{month} {}", date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_entry() -> TimelineEntry {
        TimelineEntry {
            id: "1".into(),
            kind: EntryKind::Experience,
            title: "Supervisor de Condomínio".into(),
            institution: "Reserva do Atlântico".into(),
            start_date: date(2022, 11, 1),
            end_date: None,
            ongoing: true,
            description: None,
            activities: vec![],
            visible: true,
        }
    }

    #[test]
    fn ongoing_entry_always_ends_in_atual() {
        let mut entry = sample_entry();
        assert_eq!(entry.period_label(), "nov 2022 - Atual");

        // End date present but ignored while ongoing.
        entry.end_date = Some(date(2023, 5, 1));
        assert_eq!(entry.period_label(), "nov 2022 - Atual");
    }

    #[test]
    fn finished_entry_shows_both_ends() {
        let mut entry = sample_entry();
        entry.ongoing = false;
        entry.end_date = Some(date(2023, 5, 1));
        assert_eq!(entry.period_label(), "nov 2022 - mai 2023");
    }

    #[test]
    fn entry_without_end_shows_start_only() {
        let mut entry = sample_entry();
        entry.ongoing = false;
        assert_eq!(entry.period_label(), "nov 2022");
    }

    #[test]
    fn known_tags_map_to_closed_variants() {
        assert_eq!(EntryKind::from_tag("formacao"), EntryKind::Education);
        assert_eq!(EntryKind::from_tag("experiencia"), EntryKind::Experience);
        assert_eq!(EntryKind::from_tag("curso"), EntryKind::Course);
    }

    #[test]
    fn unknown_tag_is_open_category_without_icon() {
        let kind = EntryKind::from_tag("educacao");
        assert_eq!(kind, EntryKind::Other("educacao".into()));
        assert_eq!(kind.display_name(), "educacao");
        assert!(kind.icon_svg().is_none());
    }

    #[test]
    fn maps_document_with_all_fields() {
        let doc = Document {
            id: "abc".into(),
            fields: json!({
                "tipo": "experiencia",
                "titulo": "Auxiliar Contábil",
                "instituicao": "Conforte",
                "dataInicio": "2020-10-01T00:00:00Z",
                "dataFim": "2022-09-01",
                "emAndamento": false,
                "descricao": "Atuação multifuncional.",
                "atividades": ["Boletos", "Conciliação"],
                "visivel": true
            }),
        };

        let entry = TimelineEntry::from_document(&doc).unwrap();
        assert_eq!(entry.id, "abc");
        assert_eq!(entry.kind, EntryKind::Experience);
        assert_eq!(entry.start_date, date(2020, 10, 1));
        assert_eq!(entry.end_date, Some(date(2022, 9, 1)));
        assert_eq!(entry.activities.len(), 2);
    }

    #[test]
    fn optional_fields_default_to_absent_or_empty() {
        let doc = Document {
            id: "x".into(),
            fields: json!({
                "tipo": "formacao",
                "titulo": "ADS",
                "instituicao": "UNIPÊ",
                "dataInicio": "2023-02-01"
            }),
        };

        let entry = TimelineEntry::from_document(&doc).unwrap();
        assert_eq!(entry.end_date, None);
        assert!(!entry.ongoing);
        assert_eq!(entry.description, None);
        assert!(entry.activities.is_empty());
        assert!(entry.visible);
    }

    #[test]
    fn missing_required_field_rejects_document() {
        let doc = Document {
            id: "x".into(),
            fields: json!({ "tipo": "curso", "titulo": "Rust" }),
        };
        assert!(matches!(
            TimelineEntry::from_document(&doc),
            Err(EntryMapError::MissingField("instituicao"))
        ));
    }

    #[test]
    fn unparseable_date_rejects_document() {
        let doc = Document {
            id: "x".into(),
            fields: json!({
                "tipo": "curso",
                "titulo": "Rust",
                "instituicao": "Online",
                "dataInicio": "em breve"
            }),
        };
        assert!(matches!(
            TimelineEntry::from_document(&doc),
            Err(EntryMapError::BadDate { field: "dataInicio", .. })
        ));
    }
}
