pub mod health;
pub mod modules;
pub mod shared;

use std::env;
use std::sync::Arc;

use actix_web::http::header;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::modules::admin::application::AdminController;
use crate::modules::auth::adapter::outgoing::IdentityRestAuth;
use crate::modules::auth::application::ports::outgoing::AuthProvider;
use crate::modules::contact::adapter::outgoing::LogDelivery;
use crate::modules::contact::application::ports::outgoing::DynDelivery;
use crate::modules::projects::adapter::incoming::web::pages::ProjectsPage;
use crate::modules::store::adapter::outgoing::FirestoreRestStore;
use crate::modules::store::application::ports::outgoing::DynStore;
use crate::modules::timeline::adapter::incoming::web::pages::TimelinePage;

#[derive(Clone)]
pub struct AppState {
    pub store: DynStore,
    pub timeline_page: Arc<TimelinePage>,
    pub projects_page: Arc<ProjectsPage>,
    pub contact_delivery: DynDelivery,
    pub admin: Arc<AdminController>,
}

impl AppState {
    pub fn new(
        store: DynStore,
        auth: Arc<dyn AuthProvider>,
        contact_delivery: DynDelivery,
    ) -> Self {
        Self {
            timeline_page: Arc::new(TimelinePage::new(store.clone())),
            projects_page: Arc::new(ProjectsPage::new(store.clone())),
            admin: Arc::new(AdminController::new(store.clone(), auth)),
            contact_delivery,
            store,
        }
    }
}

/// The landing page is the timeline.
#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/curriculo"))
        .finish()
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let project_id =
        env::var("FIREBASE_PROJECT_ID").expect("FIREBASE_PROJECT_ID is not set in .env file");
    let api_key = env::var("FIREBASE_API_KEY").expect("FIREBASE_API_KEY is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // One HTTP client shared by every remote collaborator
    let http = reqwest::Client::new();
    let store: DynStore = Arc::new(FirestoreRestStore::new(http.clone(), &project_id));
    let auth: Arc<dyn AuthProvider> = Arc::new(IdentityRestAuth::new(http, &api_key));
    let contact_delivery: DynDelivery = Arc::new(LogDelivery);

    let state = AppState::new(store, auth, contact_delivery);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public pages
    cfg.service(index);
    cfg.service(crate::modules::timeline::adapter::incoming::web::pages::curriculo_page);
    cfg.service(crate::modules::projects::adapter::incoming::web::pages::projetos_page);
    cfg.service(crate::modules::projects::adapter::incoming::web::pages::projeto_modal);
    cfg.service(crate::modules::contact::adapter::incoming::web::pages::contato_page);
    cfg.service(crate::modules::contact::adapter::incoming::web::pages::contato_submit);
    // Admin panel
    cfg.service(crate::modules::admin::adapter::incoming::web::pages::admin_home);
    cfg.service(crate::modules::admin::adapter::incoming::web::pages::admin_login);
    cfg.service(crate::modules::admin::adapter::incoming::web::pages::admin_logout);
    cfg.service(crate::modules::admin::adapter::incoming::web::pages::admin_settings);
    cfg.service(crate::modules::admin::adapter::incoming::web::pages::admin_timeline);
    cfg.service(crate::modules::admin::adapter::incoming::web::pages::admin_projects);
    cfg.service(crate::modules::admin::adapter::incoming::web::pages::admin_delete_confirm);
    cfg.service(crate::modules::admin::adapter::incoming::web::pages::admin_delete);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
