// src/modules/projects/adapter/incoming/web/pages.rs

use actix_web::{get, web, HttpResponse, Responder};
use maud::{html, Markup};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::modules::projects::application::filter::{known_technologies, visible_set, TechFilter};
use crate::modules::projects::application::{ProjectModal, ProjectsLoader};
use crate::modules::projects::domain::ProjectEntry;
use crate::modules::store::application::ports::outgoing::DynStore;
use crate::shared::html::page_shell_with_script;
use crate::AppState;

/// Owned state of the public projects page. The cache is the single
/// source the modal endpoint reads from; it never refetches, so a modal
/// request can only ever show what the page already loaded.
pub struct ProjectsPage {
    loader: ProjectsLoader<DynStore>,
    cache: RwLock<Vec<ProjectEntry>>,
}

impl ProjectsPage {
    pub fn new(store: DynStore) -> Self {
        Self {
            loader: ProjectsLoader::new(store),
            cache: RwLock::new(Vec::new()),
        }
    }

    pub async fn load(&self) -> Vec<ProjectEntry> {
        let fresh = self.loader.load_public().await;
        *self.cache.write().await = fresh.clone();
        fresh
    }

    pub async fn cached(&self) -> Vec<ProjectEntry> {
        self.cache.read().await.clone()
    }
}

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub tech: Option<String>,
}

#[get("/projetos")]
pub async fn projetos_page(
    query: web::Query<ProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let projects = data.projects_page.load().await;
    let filter = TechFilter::from_key(query.tech.as_deref().unwrap_or(""));

    let body = render_projects_page(&projects, &filter);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            page_shell_with_script("Projetos — Natan Dias", "/projetos", body, Some(PROJECTS_JS))
                .into_string(),
        )
}

/// Modal body for one project, served as an HTML fragment.
///
/// Reads the page cache only. An id the cache does not hold answers
/// `204 No Content`, which the page script treats as "leave the view
/// untouched"; a stale card can never produce an error dialog.
#[get("/projetos/{id}/modal")]
pub async fn projeto_modal(path: web::Path<String>, data: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();
    let loaded = data.projects_page.cached().await;

    let mut modal = ProjectModal::new();
    modal.open(&id, &loaded);

    match modal.current(&loaded) {
        Some(project) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_modal_body(project).into_string()),
        None => HttpResponse::NoContent().finish(),
    }
}

// Renderers.

pub fn render_projects_page(projects: &[ProjectEntry], filter: &TechFilter) -> Markup {
    let visible = visible_set(projects, filter);
    let technologies = known_technologies(projects);

    html! {
        section.projects-section {
            h1 { "Projetos" }
            p { "Uma seleção dos projetos que desenvolvi." }

            div.filter-bar {
                a.filter-btn.active[matches!(filter, TechFilter::All)] href="/projetos" { "Todas" }
                @for tech in &technologies {
                    a.filter-btn.active[filter.key() == *tech]
                        href={ "/projetos?tech=" (tech) } { (tech) }
                }
            }

            @if visible.is_empty() {
                div.empty-state #projects-empty { "Nenhum projeto encontrado." }
            } @else {
                div.projects-grid {
                    @for (index, project) in visible.iter().enumerate() {
                        (render_project_card(project, index))
                    }
                }
            }
        }

        div.modal-overlay #project-modal {
            div.modal-box {
                button.modal-close type="button" aria-label="Fechar" { "×" }
                div #modal-body {}
            }
        }
    }
}

pub fn render_project_card(project: &ProjectEntry, index: usize) -> Markup {
    let (inline, collapsed) = project.inline_technologies();

    html! {
        article.project-card
            data-reveal
            data-project-id=(project.id)
            style={ "animation-delay: " (card_delay(index)) }
        {
            div.project-image {
                @if let Some(url) = &project.image_url {
                    img src=(url) alt=(project.title);
                } @else {
                    div.project-image-placeholder { "{ }" }
                }
                @if project.featured {
                    span.project-featured-badge { "Destaque" }
                }
            }

            div.project-content {
                h3.project-title { (project.title) }
                p.project-description { (project.description) }

                div.project-tech {
                    @for tech in inline {
                        span.project-tech-tag { (tech) }
                    }
                    @if collapsed > 0 {
                        span.project-tech-tag.tech-more { "+" (collapsed) }
                    }
                }

                div.project-footer {
                    div {
                        @if let Some(url) = &project.repo_url {
                            a.project-link href=(url) target="_blank" rel="noopener" { "Código" }
                        }
                        @if let Some(url) = &project.demo_url {
                            a.project-link href=(url) target="_blank" rel="noopener" { "Demo" }
                        }
                    }
                    button.project-view-btn type="button" data-open-modal=(project.id) {
                        "Ver detalhes"
                    }
                }
            }
        }
    }
}

pub fn render_modal_body(project: &ProjectEntry) -> Markup {
    html! {
        h2.modal-title { (project.title) }

        div.project-image {
            @if let Some(url) = &project.image_url {
                img src=(url) alt=(project.title);
            } @else {
                div.project-image-placeholder { "{ }" }
            }
        }

        @for paragraph in project.detail_text().split("\n\n") {
            p.modal-description { (paragraph) }
        }

        @if !project.technologies.is_empty() {
            h4 { "Tecnologias" }
            div.project-tech.modal-tech-tags {
                @for tech in &project.technologies {
                    span.project-tech-tag { (tech) }
                }
            }
        }

        @if !project.features.is_empty() {
            h4 { "Funcionalidades" }
            ul.modal-features {
                @for feature in &project.features {
                    li { (feature) }
                }
            }
        }

        div.modal-actions {
            @if let Some(url) = &project.repo_url {
                a.btn-secondary href=(url) target="_blank" rel="noopener" { "Ver código" }
            }
            @if let Some(url) = &project.demo_url {
                a.btn-secondary href=(url) target="_blank" rel="noopener" { "Ver demo" }
            }
        }
    }
}

fn card_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}

/// Modal wiring: fetch the fragment, show it on 200, do nothing on 204.
/// Escape and a backdrop click both close; closing twice is harmless.
const PROJECTS_JS: &str = r#"
(function () {
  var overlay = document.getElementById('project-modal');
  if (!overlay) return;
  var body = document.getElementById('modal-body');

  function closeModal() {
    overlay.classList.remove('active');
    body.innerHTML = '';
  }

  document.querySelectorAll('[data-open-modal]').forEach(function (btn) {
    btn.addEventListener('click', function () {
      var id = btn.getAttribute('data-open-modal');
      fetch('/projetos/' + encodeURIComponent(id) + '/modal').then(function (res) {
        if (res.status !== 200) return;
        res.text().then(function (html) {
          body.innerHTML = html;
          overlay.classList.add('active');
        });
      });
    });
  });

  overlay.addEventListener('click', function (ev) {
    if (ev.target === overlay) closeModal();
  });
  overlay.querySelector('.modal-close').addEventListener('click', closeModal);
  document.addEventListener('keydown', function (ev) {
    if (ev.key === 'Escape') closeModal();
  });
})();
"#;
