// src/modules/projects/application/filter.rs

use crate::modules::projects::domain::ProjectEntry;

/// Sentinel key meaning "no filter".
pub const ALL_KEY: &str = "todas";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TechFilter {
    All,
    Tech(String),
}

impl TechFilter {
    pub fn from_key(key: &str) -> Self {
        let key = key.trim();
        if key.is_empty() || key == ALL_KEY {
            TechFilter::All
        } else {
            TechFilter::Tech(key.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            TechFilter::All => ALL_KEY,
            TechFilter::Tech(tech) => tech,
        }
    }
}

/// Membership test against each project's technology list; exact string
/// equality, loader order preserved.
pub fn visible_set<'a>(items: &'a [ProjectEntry], filter: &TechFilter) -> Vec<&'a ProjectEntry> {
    match filter {
        TechFilter::All => items.iter().collect(),
        TechFilter::Tech(tech) => items
            .iter()
            .filter(|p| p.technologies.iter().any(|t| t == tech))
            .collect(),
    }
}

/// Distinct technologies in first-seen order, for the filter bar.
pub fn known_technologies(items: &[ProjectEntry]) -> Vec<&str> {
    let mut seen = Vec::new();
    for project in items {
        for tech in &project.technologies {
            if !seen.contains(&tech.as_str()) {
                seen.push(tech.as_str());
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::projects::domain::fallback::fallback_projects;

    #[test]
    fn all_sentinel_returns_every_project() {
        let items = fallback_projects();
        assert_eq!(visible_set(&items, &TechFilter::All).len(), items.len());
    }

    #[test]
    fn tech_filter_matches_by_membership() {
        let items = fallback_projects();
        let visible = visible_set(&items, &TechFilter::from_key("JavaScript"));

        assert!(!visible.is_empty());
        assert!(visible
            .iter()
            .all(|p| p.technologies.iter().any(|t| t == "JavaScript")));
    }

    #[test]
    fn filtered_orders_stay_nondecreasing() {
        let items = fallback_projects();
        let visible = visible_set(&items, &TechFilter::from_key("MySQL"));
        assert!(visible.windows(2).all(|w| w[0].order <= w[1].order));
    }

    #[test]
    fn partial_name_does_not_match() {
        let items = fallback_projects();
        assert!(visible_set(&items, &TechFilter::from_key("Java")).is_empty());
    }

    #[test]
    fn unknown_tech_yields_empty_renderable_set() {
        let items = fallback_projects();
        assert!(visible_set(&items, &TechFilter::from_key("COBOL")).is_empty());
    }

    #[test]
    fn known_technologies_keeps_first_seen_order() {
        let items = fallback_projects();
        let techs = known_technologies(&items);
        assert_eq!(&techs[..3], &["HTML5", "CSS3", "JavaScript"]);
        assert_eq!(
            techs.iter().filter(|t| **t == "JavaScript").count(),
            1,
            "duplicates collapse"
        );
    }
}
