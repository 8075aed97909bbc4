// src/modules/timeline/adapter/incoming/web/pages.rs

use actix_web::{get, web, HttpResponse, Responder};
use maud::{html, Markup, PreEscaped};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::modules::store::application::ports::outgoing::DynStore;
use crate::modules::timeline::application::filter::{visible_set, TimelineFilter};
use crate::modules::timeline::application::TimelineLoader;
use crate::modules::timeline::domain::TimelineEntry;
use crate::shared::html::page_shell;
use crate::AppState;

/// Owned state of the public timeline page: the loader plus the loaded
/// collection. The cache is rebuilt wholesale on every page load;
/// concurrent loads race last-writer-wins, which is accepted for a
/// single-operator site.
pub struct TimelinePage {
    loader: TimelineLoader<DynStore>,
    cache: RwLock<Vec<TimelineEntry>>,
}

impl TimelinePage {
    pub fn new(store: DynStore) -> Self {
        Self {
            loader: TimelineLoader::new(store),
            cache: RwLock::new(Vec::new()),
        }
    }

    pub async fn load(&self) -> Vec<TimelineEntry> {
        let fresh = self.loader.load_public().await;
        *self.cache.write().await = fresh.clone();
        fresh
    }
}

#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    pub filtro: Option<String>,
}

#[get("/curriculo")]
pub async fn curriculo_page(
    query: web::Query<TimelineQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let entries = data.timeline_page.load().await;
    let filter = TimelineFilter::from_key(query.filtro.as_deref().unwrap_or(""));

    let body = render_timeline_page(&entries, &filter);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page_shell("Currículo — Natan Dias", "/curriculo", body).into_string())
}

// Renderers, pure functions of the loaded entries.

const FILTER_OPTIONS: &[(&str, &str)] = &[
    ("todos", "Todos"),
    ("formacao", "Formação"),
    ("experiencia", "Experiência"),
    ("curso", "Curso"),
];

const CLOCK_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><circle cx="12" cy="12" r="10"></circle><polyline points="12 6 12 12 16 14"></polyline></svg>"#;

/// Per-item reveal offset, 0.1s of stagger per index.
pub fn reveal_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}

pub fn render_timeline_page(entries: &[TimelineEntry], filter: &TimelineFilter) -> Markup {
    let visible = visible_set(entries, filter);

    html! {
        section.timeline-section {
            h1 { "Currículo" }
            p { "Minha trajetória de formação e experiência profissional." }

            div.filter-bar {
                @for (key, label) in FILTER_OPTIONS {
                    a.filter-btn.active[filter.key() == *key] href={ "/curriculo?filtro=" (key) } {
                        (label)
                    }
                }
            }

            @if visible.is_empty() {
                div.empty-state #timeline-empty { "Nenhum item encontrado para este filtro." }
            } @else {
                div.timeline #timeline-items {
                    @for (index, entry) in visible.iter().enumerate() {
                        (render_timeline_item(entry, index))
                    }
                }
            }
        }
    }
}

pub fn render_timeline_item(entry: &TimelineEntry, index: usize) -> Markup {
    html! {
        div.timeline-item
            data-reveal
            data-type=(entry.kind.tag())
            style={ "animation-delay: " (reveal_delay(index)) }
        {
            div.timeline-dot {}
            div.timeline-card {
                div.timeline-badge {
                    @if let Some(icon) = entry.kind.icon_svg() {
                        (PreEscaped(icon))
                    }
                    (entry.kind.display_name())
                }

                h3.timeline-title { (entry.title) }
                p.timeline-institution { (entry.institution) }

                div.timeline-period {
                    (PreEscaped(CLOCK_ICON))
                    (entry.period_label())
                }

                @if let Some(description) = &entry.description {
                    p.timeline-description { (description) }
                }

                @if !entry.activities.is_empty() {
                    ul.timeline-activities {
                        @for activity in &entry.activities {
                            li { (activity) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::timeline::domain::fallback::fallback_timeline;

    #[test]
    fn stagger_delay_grows_with_index() {
        assert_eq!(reveal_delay(0), "0.0s");
        assert_eq!(reveal_delay(3), "0.3s");
        assert_eq!(reveal_delay(12), "1.2s");
    }

    #[test]
    fn page_renders_every_visible_entry() {
        let entries = fallback_timeline();
        let page = render_timeline_page(&entries, &TimelineFilter::All).into_string();

        assert_eq!(page.matches("timeline-item").count(), entries.len());
        assert!(!page.contains("timeline-empty"));
    }

    #[test]
    fn empty_visible_set_shows_the_empty_indicator() {
        let entries = fallback_timeline();
        let filter = TimelineFilter::from_key("voluntariado");
        let page = render_timeline_page(&entries, &filter).into_string();

        assert!(page.contains("timeline-empty"));
        assert!(!page.contains("timeline-item "));
    }

    #[test]
    fn ongoing_entry_renders_atual_in_period() {
        let entries = fallback_timeline();
        let item = render_timeline_item(&entries[0], 0).into_string();
        assert!(item.contains("- Atual"));
    }

    #[test]
    fn open_category_renders_raw_tag_without_icon() {
        let entries = fallback_timeline();
        // Entry 4 carries the unmapped "educacao" tag.
        let item = render_timeline_item(&entries[3], 0).into_string();

        let badge_start = item.find("timeline-badge").unwrap();
        let badge_end = item.find("timeline-title").unwrap();
        let badge = &item[badge_start..badge_end];
        assert!(badge.contains("educacao"));
        assert!(!badge.contains("<svg"));
    }

    #[test]
    fn items_carry_their_stagger_delay() {
        let entries = fallback_timeline();
        let page = render_timeline_page(&entries, &TimelineFilter::All).into_string();
        assert!(page.contains("animation-delay: 0.0s"));
        assert!(page.contains("animation-delay: 0.7s"));
    }
}
