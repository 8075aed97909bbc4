// src/modules/admin/application/controller.rs

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::modules::auth::application::ports::outgoing::{AuthProvider, SignInError};
use crate::modules::auth::application::SessionWatch;
use crate::modules::projects::application::loader::PROJECTS_COLLECTION;
use crate::modules::projects::application::ProjectsLoader;
use crate::modules::projects::domain::ProjectEntry;
use crate::modules::store::application::ports::outgoing::{CollectionStore, DynStore, StoreError};
use crate::modules::timeline::application::loader::TIMELINE_COLLECTION;
use crate::modules::timeline::application::TimelineLoader;
use crate::modules::timeline::domain::TimelineEntry;

pub const LOGIN_USER_NOT_FOUND: &str = "Usuário não encontrado.";
pub const LOGIN_WRONG_PASSWORD: &str = "Senha incorreta.";
pub const LOGIN_INVALID_EMAIL: &str = "Email inválido.";
pub const LOGIN_GENERIC_ERROR: &str = "Erro ao fazer login. Verifique suas credenciais.";

/// Dashboard counters, one per managed collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub timeline: Option<usize>,
    pub projects: Option<usize>,
}

/// What a delete attempt left behind.
///
/// The item list is only ever rebuilt from a reload; a failed delete or
/// a failed reload keeps the previous (stale) list so nothing vanishes
/// optimistically.
#[derive(Debug)]
pub enum DeleteOutcome<T> {
    Deleted { items: Vec<T> },
    DeleteFailed { error: StoreError, stale: Vec<T> },
    ReloadFailed { error: StoreError, stale: Vec<T> },
}

/// Stateful core of the admin panel.
///
/// Section data is loaded lazily on first visit and cached; the caches
/// are authoritative for rendering and are only replaced wholesale
/// after a successful reload. Admin loads never substitute fallback
/// content, a broken store must be visible to the operator.
pub struct AdminController {
    timeline_loader: TimelineLoader<DynStore>,
    projects_loader: ProjectsLoader<DynStore>,
    store: DynStore,
    auth: Arc<dyn AuthProvider>,
    sessions: SessionWatch,
    timeline_cache: RwLock<Option<Vec<TimelineEntry>>>,
    projects_cache: RwLock<Option<Vec<ProjectEntry>>>,
}

impl AdminController {
    pub fn new(store: DynStore, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            timeline_loader: TimelineLoader::new(store.clone()),
            projects_loader: ProjectsLoader::new(store.clone()),
            store,
            auth,
            sessions: SessionWatch::new(),
            timeline_cache: RwLock::new(None),
            projects_cache: RwLock::new(None),
        }
    }

    pub fn sessions(&self) -> &SessionWatch {
        &self.sessions
    }

    /// Exchanges credentials for a session. On success the watch fires
    /// and the panel switches to the signed-in branch; on failure the
    /// operator gets a specific message for the cases worth
    /// distinguishing and a generic one for the rest.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        match self.auth.sign_in(email, password).await {
            Ok(session) => {
                info!(email = %session.email, "admin signed in");
                self.sessions.signed_in(session);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "admin sign-in rejected");
                Err(login_message(&err).to_string())
            }
        }
    }

    /// Signs out and drops the section caches; the next sign-in starts
    /// from a clean slate.
    pub async fn logout(&self) {
        self.sessions.signed_out();
        *self.timeline_cache.write().await = None;
        *self.projects_cache.write().await = None;
        info!("admin signed out");
    }

    /// Collection counts for the dashboard cards. Each counter that
    /// cannot be read renders as unavailable instead of failing the
    /// whole dashboard.
    pub async fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            timeline: self.count(TIMELINE_COLLECTION).await,
            projects: self.count(PROJECTS_COLLECTION).await,
        }
    }

    async fn count(&self, collection: &str) -> Option<usize> {
        match self.store.count(collection).await {
            Ok(n) => Some(n),
            Err(err) => {
                error!(collection, error = %err, "dashboard count failed");
                None
            }
        }
    }

    /// Timeline entries for the admin section, unfiltered. Loaded from
    /// the store on first visit, then served from the cache.
    pub async fn timeline_items(&self) -> Result<Vec<TimelineEntry>, StoreError> {
        if let Some(cached) = self.timeline_cache.read().await.clone() {
            return Ok(cached);
        }
        let items = self.timeline_loader.load_admin().await?;
        *self.timeline_cache.write().await = Some(items.clone());
        Ok(items)
    }

    pub async fn projects_items(&self) -> Result<Vec<ProjectEntry>, StoreError> {
        if let Some(cached) = self.projects_cache.read().await.clone() {
            return Ok(cached);
        }
        let items = self.projects_loader.load_admin().await?;
        *self.projects_cache.write().await = Some(items.clone());
        Ok(items)
    }

    /// Deletes a timeline entry, then reloads the section before
    /// reporting. The pipeline is strictly sequential: the delete is
    /// awaited, then the reload, and only a fresh load replaces the
    /// cache.
    pub async fn delete_timeline_entry(&self, id: &str) -> DeleteOutcome<TimelineEntry> {
        let stale = self.timeline_cache.read().await.clone().unwrap_or_default();

        if let Err(error) = self.store.delete(TIMELINE_COLLECTION, id).await {
            error!(id, error = %error, "timeline delete failed");
            return DeleteOutcome::DeleteFailed { error, stale };
        }

        match self.timeline_loader.load_admin().await {
            Ok(items) => {
                *self.timeline_cache.write().await = Some(items.clone());
                info!(id, "timeline entry deleted");
                DeleteOutcome::Deleted { items }
            }
            Err(error) => {
                error!(id, error = %error, "timeline reload after delete failed");
                DeleteOutcome::ReloadFailed { error, stale }
            }
        }
    }

    pub async fn delete_project(&self, id: &str) -> DeleteOutcome<ProjectEntry> {
        let stale = self.projects_cache.read().await.clone().unwrap_or_default();

        if let Err(error) = self.store.delete(PROJECTS_COLLECTION, id).await {
            error!(id, error = %error, "project delete failed");
            return DeleteOutcome::DeleteFailed { error, stale };
        }

        match self.projects_loader.load_admin().await {
            Ok(items) => {
                *self.projects_cache.write().await = Some(items.clone());
                info!(id, "project deleted");
                DeleteOutcome::Deleted { items }
            }
            Err(error) => {
                error!(id, error = %error, "project reload after delete failed");
                DeleteOutcome::ReloadFailed { error, stale }
            }
        }
    }
}

fn login_message(err: &SignInError) -> &'static str {
    match err {
        SignInError::UserNotFound => LOGIN_USER_NOT_FOUND,
        SignInError::WrongPassword => LOGIN_WRONG_PASSWORD,
        SignInError::InvalidEmail => LOGIN_INVALID_EMAIL,
        SignInError::Other(_) => LOGIN_GENERIC_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    use crate::modules::auth::application::domain::Session;
    use crate::modules::store::application::ports::outgoing::{
        CollectionStore, Document, FieldFilter, OrderBy,
    };

    struct FakeAuth {
        result: Result<Session, SignInError>,
    }

    #[async_trait]
    impl AuthProvider for FakeAuth {
        async fn sign_in(&self, _email: &str, _password: &str) -> Result<Session, SignInError> {
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct FakeStore {
        docs: Mutex<Vec<Document>>,
        fail_delete: bool,
        fail_fetch_after_delete: Mutex<bool>,
    }

    impl FakeStore {
        fn with_timeline_docs(ids: &[&str]) -> Self {
            let docs = ids
                .iter()
                .map(|id| Document {
                    id: id.to_string(),
                    fields: json!({
                        "tipo": "curso",
                        "titulo": format!("Item {id}"),
                        "instituicao": "Escola",
                        "dataInicio": "2023-01-01",
                        "emAndamento": false,
                        "visivel": true,
                    }),
                })
                .collect();
            Self {
                docs: Mutex::new(docs),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl CollectionStore for FakeStore {
        async fn fetch(
            &self,
            _collection: &str,
            _filter: Option<FieldFilter>,
            _order: OrderBy,
        ) -> Result<Vec<Document>, StoreError> {
            if *self.fail_fetch_after_delete.lock().unwrap() {
                return Err(StoreError::Unavailable("fetch refused".into()));
            }
            Ok(self.docs.lock().unwrap().clone())
        }

        async fn delete(&self, _collection: &str, id: &str) -> Result<(), StoreError> {
            if self.fail_delete {
                return Err(StoreError::Rejected("delete refused".into()));
            }
            self.docs.lock().unwrap().retain(|d| d.id != id);
            Ok(())
        }

        async fn add(&self, _collection: &str, _fields: Value) -> Result<String, StoreError> {
            Err(StoreError::Rejected("not supported".into()))
        }

        async fn count(&self, _collection: &str) -> Result<usize, StoreError> {
            Ok(self.docs.lock().unwrap().len())
        }
    }

    fn controller(store: FakeStore, auth_result: Result<Session, SignInError>) -> AdminController {
        AdminController::new(
            Arc::new(store) as DynStore,
            Arc::new(FakeAuth {
                result: auth_result,
            }),
        )
    }

    fn sample_session() -> Session {
        Session {
            uid: "uid-1".into(),
            email: "natan@example.com".into(),
            display_name: None,
        }
    }

    #[tokio::test]
    async fn login_success_flips_the_session_watch() {
        let ctl = controller(FakeStore::default(), Ok(sample_session()));

        assert!(ctl.sessions().current().is_none());
        ctl.login("natan@example.com", "pw").await.unwrap();
        assert!(ctl.sessions().current().is_some());
    }

    #[tokio::test]
    async fn login_failures_map_to_specific_messages() {
        let cases = [
            (SignInError::UserNotFound, LOGIN_USER_NOT_FOUND),
            (SignInError::WrongPassword, LOGIN_WRONG_PASSWORD),
            (SignInError::InvalidEmail, LOGIN_INVALID_EMAIL),
            (SignInError::Other("quota".into()), LOGIN_GENERIC_ERROR),
        ];
        for (err, expected) in cases {
            let ctl = controller(FakeStore::default(), Err(err));
            let message = ctl.login("x@example.com", "pw").await.unwrap_err();
            assert_eq!(message, expected);
            assert!(ctl.sessions().current().is_none());
        }
    }

    #[tokio::test]
    async fn logout_drops_the_section_caches() {
        let ctl = controller(
            FakeStore::with_timeline_docs(&["1", "2"]),
            Ok(sample_session()),
        );
        ctl.login("natan@example.com", "pw").await.unwrap();
        ctl.timeline_items().await.unwrap();
        assert!(ctl.timeline_cache.read().await.is_some());

        ctl.logout().await;
        assert!(ctl.sessions().current().is_none());
        assert!(ctl.timeline_cache.read().await.is_none());
    }

    #[tokio::test]
    async fn delete_removes_the_entry_after_reload() {
        let ctl = controller(
            FakeStore::with_timeline_docs(&["1", "42", "7"]),
            Ok(sample_session()),
        );
        ctl.timeline_items().await.unwrap();

        match ctl.delete_timeline_entry("42").await {
            DeleteOutcome::Deleted { items } => {
                assert_eq!(items.len(), 2);
                assert!(items.iter().all(|e| e.id != "42"));
            }
            other => panic!("expected Deleted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_delete_keeps_the_stale_list() {
        let store = FakeStore {
            fail_delete: true,
            ..FakeStore::with_timeline_docs(&["1", "2"])
        };
        let ctl = controller(store, Ok(sample_session()));
        ctl.timeline_items().await.unwrap();

        match ctl.delete_timeline_entry("1").await {
            DeleteOutcome::DeleteFailed { stale, .. } => {
                assert_eq!(stale.len(), 2);
            }
            other => panic!("expected DeleteFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_reload_reports_the_stale_list() {
        let fake = Arc::new(FakeStore::with_timeline_docs(&["1", "2"]));
        let ctl = AdminController::new(
            fake.clone() as DynStore,
            Arc::new(FakeAuth {
                result: Ok(sample_session()),
            }),
        );
        ctl.timeline_items().await.unwrap();

        // The delete lands, the follow-up fetch does not.
        *fake.fail_fetch_after_delete.lock().unwrap() = true;

        match ctl.delete_timeline_entry("1").await {
            DeleteOutcome::ReloadFailed { stale, .. } => {
                assert_eq!(stale.len(), 2);
                assert_eq!(fake.docs.lock().unwrap().len(), 1);
            }
            other => panic!("expected ReloadFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn admin_load_failure_is_not_masked_by_fallback() {
        let store = FakeStore {
            fail_fetch_after_delete: Mutex::new(true),
            ..FakeStore::default()
        };
        let ctl = controller(store, Ok(sample_session()));
        assert!(ctl.timeline_items().await.is_err());
    }

    #[tokio::test]
    async fn dashboard_counts_both_collections() {
        let ctl = controller(
            FakeStore::with_timeline_docs(&["1", "2", "3"]),
            Ok(sample_session()),
        );
        let stats = ctl.dashboard_stats().await;
        assert_eq!(stats.timeline, Some(3));
        assert_eq!(stats.projects, Some(3));
    }
}
