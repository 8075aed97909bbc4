// src/modules/projects/application/loader.rs

use tracing::{info, warn};

use crate::modules::projects::domain::fallback::fallback_projects;
use crate::modules::projects::domain::ProjectEntry;
use crate::modules::store::application::ports::outgoing::{
    CollectionStore, Document, FieldFilter, OrderBy, StoreError,
};

pub const PROJECTS_COLLECTION: &str = "projetos";

/// Loads the projects collection in curated order (`ordem` ascending).
pub struct ProjectsLoader<S>
where
    S: CollectionStore,
{
    store: S,
}

impl<S> ProjectsLoader<S>
where
    S: CollectionStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Public-page load: visible projects only; failures and empty
    /// results substitute the fallback dataset. Never errors.
    pub async fn load_public(&self) -> Vec<ProjectEntry> {
        let result = self
            .store
            .fetch(
                PROJECTS_COLLECTION,
                Some(FieldFilter::equals("visivel", true)),
                OrderBy::asc("ordem"),
            )
            .await;

        match result {
            Ok(docs) => {
                let projects = map_documents(docs);
                if projects.is_empty() {
                    info!("projects collection is empty, using fallback dataset");
                    fallback_projects()
                } else {
                    info!(count = projects.len(), "projects loaded from remote store");
                    projects
                }
            }
            Err(e) => {
                warn!(error = %e, "projects load failed, using fallback dataset");
                fallback_projects()
            }
        }
    }

    /// Admin load: hidden projects included, no fallback.
    pub async fn load_admin(&self) -> Result<Vec<ProjectEntry>, StoreError> {
        let docs = self
            .store
            .fetch(PROJECTS_COLLECTION, None, OrderBy::asc("ordem"))
            .await?;
        Ok(map_documents(docs))
    }
}

fn map_documents(docs: Vec<Document>) -> Vec<ProjectEntry> {
    docs.iter()
        .filter_map(|doc| match ProjectEntry::from_document(doc) {
            Ok(project) => Some(project),
            Err(e) => {
                warn!(id = %doc.id, error = %e, "skipping unmappable project document");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct MockStore {
        result: Result<Vec<Document>, StoreError>,
    }

    #[async_trait]
    impl CollectionStore for MockStore {
        async fn fetch(
            &self,
            _collection: &str,
            _filter: Option<FieldFilter>,
            _order: OrderBy,
        ) -> Result<Vec<Document>, StoreError> {
            self.result.clone()
        }

        async fn delete(&self, _collection: &str, _id: &str) -> Result<(), StoreError> {
            unimplemented!("not used in loader tests")
        }

        async fn add(&self, _collection: &str, _fields: Value) -> Result<String, StoreError> {
            unimplemented!("not used in loader tests")
        }

        async fn count(&self, _collection: &str) -> Result<usize, StoreError> {
            unimplemented!("not used in loader tests")
        }
    }

    fn doc(id: &str, order: i64) -> Document {
        Document {
            id: id.into(),
            fields: json!({
                "titulo": format!("Projeto {id}"),
                "descricao": "desc",
                "ordem": order,
                "visivel": true
            }),
        }
    }

    #[tokio::test]
    async fn public_load_preserves_store_order() {
        let store = MockStore {
            result: Ok(vec![doc("a", 1), doc("b", 2), doc("c", 3)]),
        };
        let projects = ProjectsLoader::new(store).load_public().await;
        let orders: Vec<i64> = projects.iter().map(|p| p.order).collect();
        assert_eq!(orders, [1, 2, 3]);
    }

    #[tokio::test]
    async fn public_load_falls_back_on_empty_collection() {
        let store = MockStore { result: Ok(vec![]) };
        let projects = ProjectsLoader::new(store).load_public().await;
        assert_eq!(projects.len(), 5);
    }

    #[tokio::test]
    async fn public_load_falls_back_on_store_failure() {
        let store = MockStore {
            result: Err(StoreError::Unavailable("dns".into())),
        };
        let projects = ProjectsLoader::new(store).load_public().await;
        assert_eq!(projects.len(), 5);
    }

    #[tokio::test]
    async fn admin_load_propagates_store_failure() {
        let store = MockStore {
            result: Err(StoreError::Rejected("403".into())),
        };
        assert!(ProjectsLoader::new(store).load_admin().await.is_err());
    }
}
