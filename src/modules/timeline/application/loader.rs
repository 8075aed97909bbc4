// src/modules/timeline/application/loader.rs

use tracing::{info, warn};

use crate::modules::store::application::ports::outgoing::{
    CollectionStore, Document, FieldFilter, OrderBy, StoreError,
};
use crate::modules::timeline::domain::fallback::fallback_timeline;
use crate::modules::timeline::domain::TimelineEntry;

pub const TIMELINE_COLLECTION: &str = "timeline";

/// Loads the timeline collection, newest first.
///
/// Two variants share the mapping: the public load recovers every failure
/// with the built-in dataset, the admin load surfaces them.
pub struct TimelineLoader<S>
where
    S: CollectionStore,
{
    store: S,
}

impl<S> TimelineLoader<S>
where
    S: CollectionStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Public-page load: only visible entries, and any failure or empty
    /// result substitutes the fallback dataset. Never errors.
    pub async fn load_public(&self) -> Vec<TimelineEntry> {
        let result = self
            .store
            .fetch(
                TIMELINE_COLLECTION,
                Some(FieldFilter::equals("visivel", true)),
                OrderBy::desc("dataInicio"),
            )
            .await;

        match result {
            Ok(docs) => {
                let entries = map_documents(docs);
                if entries.is_empty() {
                    info!("timeline collection is empty, using fallback dataset");
                    fallback_timeline()
                } else {
                    info!(count = entries.len(), "timeline loaded from remote store");
                    entries
                }
            }
            Err(e) => {
                warn!(error = %e, "timeline load failed, using fallback dataset");
                fallback_timeline()
            }
        }
    }

    /// Admin load: everything including hidden entries, no fallback; a
    /// failure here must reach the operator.
    pub async fn load_admin(&self) -> Result<Vec<TimelineEntry>, StoreError> {
        let docs = self
            .store
            .fetch(TIMELINE_COLLECTION, None, OrderBy::desc("dataInicio"))
            .await?;
        Ok(map_documents(docs))
    }
}

fn map_documents(docs: Vec<Document>) -> Vec<TimelineEntry> {
    docs.iter()
        .filter_map(|doc| match TimelineEntry::from_document(doc) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(id = %doc.id, error = %e, "skipping unmappable timeline document");
                None
            }
        })
        .collect()
}
