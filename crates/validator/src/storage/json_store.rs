use std::{path::PathBuf, sync::Arc};

use arc_swap::ArcSwap;
use common::same_name;
use models::document::PolicyDocument;
use models::{Policy, SearchFilter, Service, ServiceDefinition};
use tokio::fs;
use tracing::{info, warn};

use crate::errors::StoreError;
use crate::store::ServiceStore;

/// Read-only store answering from a snapshot of a JSON policy document.
///
/// Loading and reloading touch the file system; lookups only read the
/// current snapshot and never wait on I/O or a lock.
pub struct JsonServiceStore {
    snapshot: ArcSwap<PolicyDocument>,
    file_path: Option<PathBuf>,
}

impl JsonServiceStore {
    /// Load the document at `path`. Creates the file with an empty document if missing.
    ///
    /// # Examples
    /// ```
    /// use policy_validator::storage::JsonServiceStore;
    /// use policy_validator::ServiceStore;
    /// let path = std::env::temp_dir().join(format!("doc_store_{}.json", std::process::id()));
    /// let store = tokio_test::block_on(JsonServiceStore::open(&path)).unwrap();
    /// assert!(store.get_policy(1).unwrap().is_none());
    /// # let _ = std::fs::remove_file(&path);
    /// ```
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let doc = match fs::read(&file_path).await {
            Ok(bytes) => PolicyDocument::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = PolicyDocument::default();
                fs::write(&file_path, empty.to_vec()?)
                    .await
                    .map_err(|e| StoreError::Io(e.to_string()))?;
                empty
            }
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        info!(
            path = %file_path.display(),
            services = doc.services.len(),
            service_defs = doc.service_defs.len(),
            policies = doc.policies.len(),
            "policy_document_loaded"
        );

        Ok(Arc::new(Self { snapshot: ArcSwap::from_pointee(doc), file_path: Some(file_path) }))
    }

    /// Store over an in-memory document; `reload` is a no-op.
    pub fn from_document(doc: PolicyDocument) -> Arc<Self> {
        Arc::new(Self { snapshot: ArcSwap::from_pointee(doc), file_path: None })
    }

    /// Re-read the backing file. On failure the previous snapshot stays live.
    pub async fn reload(&self) -> Result<(), StoreError> {
        let Some(path) = &self.file_path else { return Ok(()) };
        let loaded = match fs::read(path).await {
            Ok(bytes) => PolicyDocument::from_slice(&bytes).map_err(StoreError::from),
            Err(e) => Err(StoreError::Io(e.to_string())),
        };
        match loaded {
            Ok(doc) => {
                info!(path = %path.display(), policies = doc.policies.len(), "policy_document_reloaded");
                self.snapshot.store(Arc::new(doc));
                Ok(())
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "policy_document_reload_failed");
                Err(e)
            }
        }
    }
}

fn named(candidate: Option<&str>, wanted: &str) -> bool {
    candidate.is_some_and(|c| same_name(c, wanted))
}

impl ServiceStore for JsonServiceStore {
    fn get_service(&self, id: i64) -> Result<Option<Service>, StoreError> {
        Ok(self.snapshot.load().services.iter().find(|s| s.id == Some(id)).cloned())
    }

    fn get_service_by_name(&self, name: &str) -> Result<Option<Service>, StoreError> {
        Ok(self.snapshot.load().services.iter().find(|s| s.name.as_deref() == Some(name)).cloned())
    }

    fn get_service_def(&self, id: i64) -> Result<Option<ServiceDefinition>, StoreError> {
        Ok(self.snapshot.load().service_defs.iter().find(|d| d.id == Some(id)).cloned())
    }

    fn get_service_def_by_name(&self, name: &str) -> Result<Option<ServiceDefinition>, StoreError> {
        Ok(self.snapshot.load().service_defs.iter().find(|d| d.name.as_deref() == Some(name)).cloned())
    }

    fn get_policy(&self, id: i64) -> Result<Option<Policy>, StoreError> {
        Ok(self.snapshot.load().policies.iter().find(|p| p.id == Some(id)).cloned())
    }

    fn get_policies(&self, filter: &SearchFilter) -> Result<Option<Vec<Policy>>, StoreError> {
        let service = filter.param(SearchFilter::SERVICE_NAME);
        let name = filter.param(SearchFilter::POLICY_NAME);
        let found = self
            .snapshot
            .load()
            .policies
            .iter()
            .filter(|p| service.map_or(true, |s| named(p.service.as_deref(), s)))
            .filter(|p| name.map_or(true, |n| named(p.name.as_deref(), n)))
            .cloned()
            .collect();
        Ok(Some(found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PolicyDocument {
        PolicyDocument {
            services: vec![Service::named(1, "c1")],
            service_defs: vec![ServiceDefinition { id: Some(10), name: Some("hdfs".into()), ..Default::default() }],
            policies: vec![
                Policy::named(100, "c1", "home dirs"),
                Policy::named(101, "c1", "tmp"),
                Policy::named(102, "c2", "tmp"),
                Policy::named(103, "ÜBER", "Ärger"),
            ],
        }
    }

    #[test]
    fn lookups_by_id_and_name() -> Result<(), anyhow::Error> {
        let store = JsonServiceStore::from_document(sample());
        assert!(store.get_service(1)?.is_some());
        assert!(store.get_service(2)?.is_none());
        assert!(store.get_service_by_name("c1")?.is_some());
        assert!(store.get_service_def(10)?.is_some());
        assert!(store.get_service_def_by_name("hdfs")?.is_some());
        assert!(store.get_service_def_by_name("hive")?.is_none());
        assert_eq!(store.get_policy(101)?.and_then(|p| p.name), Some("tmp".to_string()));
        Ok(())
    }

    #[test]
    fn policies_filter_on_service_and_name() -> Result<(), anyhow::Error> {
        let store = JsonServiceStore::from_document(sample());
        let by_service = SearchFilter::new().with_param(SearchFilter::SERVICE_NAME, "c1");
        assert_eq!(store.get_policies(&by_service)?.map(|v| v.len()), Some(2));

        let by_both = by_service.with_param(SearchFilter::POLICY_NAME, "TMP");
        let found = store.get_policies(&by_both)?.unwrap_or_default();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Some(101));

        let non_ascii = SearchFilter::new()
            .with_param(SearchFilter::SERVICE_NAME, "über")
            .with_param(SearchFilter::POLICY_NAME, "ärger");
        let found = store.get_policies(&non_ascii)?.unwrap_or_default();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Some(103));

        let unknown = SearchFilter::new().with_param(SearchFilter::SERVICE_NAME, "nope");
        assert_eq!(store.get_policies(&unknown)?, Some(vec![]));
        Ok(())
    }

    #[tokio::test]
    async fn open_creates_reloads_and_rejects_garbage() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("policy_store_{}.json", uuid::Uuid::new_v4()));

        // missing file starts empty
        let store = JsonServiceStore::open(&tmp).await?;
        assert!(store.get_policy(100)?.is_none());

        // reload picks up new content
        tokio::fs::write(&tmp, sample().to_vec()?).await?;
        store.reload().await?;
        assert!(store.get_policy(100)?.is_some());

        // bad content keeps the old snapshot
        tokio::fs::write(&tmp, b"{ nope").await?;
        assert!(matches!(store.reload().await, Err(StoreError::Malformed(_))));
        assert!(store.get_policy(100)?.is_some());
        assert!(matches!(JsonServiceStore::open(&tmp).await, Err(StoreError::Malformed(_))));

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
