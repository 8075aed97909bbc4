// src/modules/admin/adapter/incoming/web/pages.rs

use actix_web::{get, http::header, post, web, HttpResponse, Responder};
use maud::{html, Markup};
use serde::Deserialize;

use crate::modules::admin::application::{DashboardStats, DeleteOutcome};
use crate::modules::auth::application::domain::Session;
use crate::modules::projects::domain::ProjectEntry;
use crate::modules::timeline::domain::TimelineEntry;
use crate::shared::html::page_shell;
use crate::AppState;

const LOAD_ERROR_MESSAGE: &str = "Erro ao carregar dados. Verifique sua conexão.";
const EMPTY_SECTION_MESSAGE: &str = "Nenhum item cadastrado.";
const DELETE_ERROR_MESSAGE: &str = "Erro ao excluir item. Tente novamente.";
const RELOAD_ERROR_MESSAGE: &str =
    "Item excluído, mas não foi possível recarregar a lista.";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub senha: String,
}

#[get("/admin")]
pub async fn admin_home(data: web::Data<AppState>) -> impl Responder {
    match data.admin.sessions().current() {
        Some(session) => {
            let stats = data.admin.dashboard_stats().await;
            respond(render_dashboard(&session, &stats))
        }
        None => respond(render_login(None)),
    }
}

#[post("/admin/login")]
pub async fn admin_login(form: web::Form<LoginForm>, data: web::Data<AppState>) -> impl Responder {
    match data.admin.login(&form.email, &form.senha).await {
        Ok(()) => redirect("/admin"),
        Err(message) => respond(render_login(Some(&message))),
    }
}

#[post("/admin/logout")]
pub async fn admin_logout(data: web::Data<AppState>) -> impl Responder {
    data.admin.logout().await;
    redirect("/admin")
}

#[get("/admin/configuracoes")]
pub async fn admin_settings(data: web::Data<AppState>) -> impl Responder {
    match data.admin.sessions().current() {
        Some(session) => respond(render_settings(&session)),
        None => redirect("/admin"),
    }
}

#[get("/admin/timeline")]
pub async fn admin_timeline(data: web::Data<AppState>) -> impl Responder {
    if data.admin.sessions().current().is_none() {
        return redirect("/admin");
    }
    match data.admin.timeline_items().await {
        Ok(items) => respond(render_timeline_section(&items, None)),
        Err(_) => respond(render_section_error("/admin/timeline", "Currículo")),
    }
}

#[get("/admin/projetos")]
pub async fn admin_projects(data: web::Data<AppState>) -> impl Responder {
    if data.admin.sessions().current().is_none() {
        return redirect("/admin");
    }
    match data.admin.projects_items().await {
        Ok(items) => respond(render_projects_section(&items, None)),
        Err(_) => respond(render_section_error("/admin/projetos", "Projetos")),
    }
}

/// The destructive step is split in two: this page asks, the POST acts.
#[get("/admin/{colecao}/{id}/delete")]
pub async fn admin_delete_confirm(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.admin.sessions().current().is_none() {
        return redirect("/admin");
    }
    let (collection, id) = path.into_inner();
    match collection.as_str() {
        "timeline" | "projetos" => respond(render_delete_confirm(&collection, &id)),
        _ => HttpResponse::NotFound().finish(),
    }
}

#[post("/admin/{colecao}/{id}/delete")]
pub async fn admin_delete(
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.admin.sessions().current().is_none() {
        return redirect("/admin");
    }
    let (collection, id) = path.into_inner();
    match collection.as_str() {
        "timeline" => match data.admin.delete_timeline_entry(&id).await {
            DeleteOutcome::Deleted { .. } => redirect("/admin/timeline"),
            DeleteOutcome::DeleteFailed { stale, .. } => {
                respond(render_timeline_section(&stale, Some(DELETE_ERROR_MESSAGE)))
            }
            DeleteOutcome::ReloadFailed { stale, .. } => {
                respond(render_timeline_section(&stale, Some(RELOAD_ERROR_MESSAGE)))
            }
        },
        "projetos" => match data.admin.delete_project(&id).await {
            DeleteOutcome::Deleted { .. } => redirect("/admin/projetos"),
            DeleteOutcome::DeleteFailed { stale, .. } => {
                respond(render_projects_section(&stale, Some(DELETE_ERROR_MESSAGE)))
            }
            DeleteOutcome::ReloadFailed { stale, .. } => {
                respond(render_projects_section(&stale, Some(RELOAD_ERROR_MESSAGE)))
            }
        },
        _ => HttpResponse::NotFound().finish(),
    }
}

fn respond(body: Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page_shell("Painel — Natan Dias", "/admin", body).into_string())
}

fn redirect(to: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, to))
        .finish()
}

// Renderers.

fn render_login(error: Option<&str>) -> Markup {
    html! {
        section.admin-login {
            h1 { "Painel administrativo" }
            p { "Entre com suas credenciais para gerenciar o conteúdo." }

            @if let Some(message) = error {
                div.error-banner #login-error { (message) }
            }

            form.login-form method="post" action="/admin/login" {
                div.form-field {
                    label for="email" { "Email" }
                    input #email type="email" name="email" required;
                }
                div.form-field {
                    label for="senha" { "Senha" }
                    input #senha type="password" name="senha" required;
                }
                button.btn-primary type="submit" { "Entrar" }
            }
        }
    }
}

/// Two-column panel shell: section navigation on the left, the active
/// section on the right.
fn admin_shell(active: &str, content: Markup) -> Markup {
    html! {
        section.admin-layout {
            nav.admin-nav {
                a.active[active == "/admin"] href="/admin" { "Dashboard" }
                a.active[active == "/admin/timeline"] href="/admin/timeline" { "Currículo" }
                a.active[active == "/admin/projetos"] href="/admin/projetos" { "Projetos" }
                a.active[active == "/admin/configuracoes"] href="/admin/configuracoes" {
                    "Configurações"
                }
                form method="post" action="/admin/logout" {
                    button.btn-secondary type="submit" { "Sair" }
                }
            }
            div.admin-content {
                (content)
            }
        }
    }
}

fn render_dashboard(session: &Session, stats: &DashboardStats) -> Markup {
    admin_shell(
        "/admin",
        html! {
            h1 { "Olá, " (session.display_label()) }
            p { (session.email) }

            div.stat-grid {
                (render_stat_card("Itens do currículo", stats.timeline, "/admin/timeline"))
                (render_stat_card("Projetos", stats.projects, "/admin/projetos"))
            }
        },
    )
}

fn render_settings(session: &Session) -> Markup {
    admin_shell(
        "/admin/configuracoes",
        html! {
            h1 { "Configurações" }

            div.item-card {
                strong { "Conta" }
                p { (session.display_label()) " · " (session.email) }
            }
            div.item-card {
                strong { "Conteúdo" }
                p {
                    "Criação e edição de itens são feitas diretamente no console do "
                    "banco de documentos; este painel lista e exclui."
                }
            }
        },
    )
}

fn render_stat_card(label: &str, count: Option<usize>, href: &str) -> Markup {
    html! {
        a.stat-card href=(href) {
            span.stat-value {
                @match count {
                    Some(n) => { (n) }
                    None => { "—" }
                }
            }
            span.stat-label { (label) }
        }
    }
}

fn render_timeline_section(items: &[TimelineEntry], banner: Option<&str>) -> Markup {
    admin_shell(
        "/admin/timeline",
        html! {
            h1 { "Currículo" }

            @if let Some(message) = banner {
                div.error-banner { (message) }
            }

            @if items.is_empty() {
                div.empty-state { (EMPTY_SECTION_MESSAGE) }
            } @else {
                @for entry in items {
                    div.item-card {
                        strong { (entry.title) }
                        p { (entry.institution) " · " (entry.period_label()) }
                        div.item-actions {
                            a.btn-secondary.delete-link
                                href={ "/admin/timeline/" (entry.id) "/delete" } {
                                "Excluir"
                            }
                        }
                    }
                }
            }
        },
    )
}

fn render_projects_section(items: &[ProjectEntry], banner: Option<&str>) -> Markup {
    admin_shell(
        "/admin/projetos",
        html! {
            h1 { "Projetos" }

            @if let Some(message) = banner {
                div.error-banner { (message) }
            }

            @if items.is_empty() {
                div.empty-state { (EMPTY_SECTION_MESSAGE) }
            } @else {
                @for project in items {
                    div.item-card {
                        strong { (project.title) }
                        p { (project.description) }
                        div.item-actions {
                            a.btn-secondary.delete-link
                                href={ "/admin/projetos/" (project.id) "/delete" } {
                                "Excluir"
                            }
                        }
                    }
                }
            }
        },
    )
}

fn render_section_error(active: &str, title: &str) -> Markup {
    admin_shell(
        active,
        html! {
            h1 { (title) }
            div.error-banner { (LOAD_ERROR_MESSAGE) }
        },
    )
}

fn render_delete_confirm(collection: &str, id: &str) -> Markup {
    let back = match collection {
        "timeline" => "/admin/timeline",
        _ => "/admin/projetos",
    };
    admin_shell(
        back,
        html! {
            h1 { "Excluir item" }
            p { "Tem certeza que deseja excluir este item? Esta ação não pode ser desfeita." }

            form.item-actions method="post" action={ "/admin/" (collection) "/" (id) "/delete" } {
                button.btn-primary type="submit" { "Excluir" }
                a.btn-secondary href=(back) { "Cancelar" }
            }
        },
    )
}
