//! Cache management for gcloud responses.
//!
//! Provides caching functionality to avoid repeated gcloud calls. One JSON file
//! per call and day; failed calls are never written.

use crate::config;
use crate::error::InspectorError;
use crate::inventory::Inventory;
use crate::models::{ForwardingZoneRecord, NetworkIdentity, VmRef};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Wraps another [`Inventory`], reading today's snapshot when one exists.
pub struct CachedInventory {
    inner: Box<dyn Inventory + Send + Sync>,
    dir: PathBuf,
    date: String,
}

impl CachedInventory {
    pub fn new(inner: Box<dyn Inventory + Send + Sync>, dir: impl Into<PathBuf>) -> Self {
        CachedInventory {
            inner,
            dir: dir.into(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    /// Use the snapshots of `date` instead of today's.
    pub fn with_date(mut self, date: chrono::NaiveDate) -> Self {
        self.date = date.format("%Y-%m-%d").to_string();
        self
    }

    /// Snapshot path inside the cache dir; parts with path separators are refused.
    fn cache_file(&self, prefix: &str, parts: &[&str]) -> Result<PathBuf, InspectorError> {
        let name = format!("{prefix}_{}_{}.json", parts.join("_"), self.date);
        if parts
            .iter()
            .any(|p| p.is_empty() || p.contains(['/', '\\', '\0']))
        {
            return Err(InspectorError::Cache {
                path: self.dir.join(&name),
                message: format!("refusing cache file name built from {parts:?}"),
            });
        }
        Ok(self.dir.join(name))
    }

    fn read_or_fetch<T, F>(&self, cache_file: &Path, fetch: F) -> Result<T, InspectorError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T, InspectorError>,
    {
        let cache_error = |message: String| InspectorError::Cache {
            path: cache_file.to_path_buf(),
            message,
        };

        match std::fs::read_to_string(cache_file) {
            Ok(json) => {
                log::info!("Reading from cache file: {}", cache_file.display());
                serde_json::from_str(&json)
                    .map_err(|e| cache_error(format!("Error parsing cache JSON: {e}")))
            }
            Err(_) => {
                log::debug!("Cache file not found: {}", cache_file.display());
                let data = fetch()?;

                let json = serde_json::to_string_pretty(&data)
                    .map_err(|e| cache_error(format!("Error serializing JSON: {e}")))?;
                std::fs::create_dir_all(&self.dir)
                    .map_err(|e| cache_error(format!("Error creating cache dir: {e}")))?;
                log::info!("Writing data to cache file: {}", cache_file.display());
                std::fs::write(cache_file, json)
                    .map_err(|e| cache_error(format!("Error writing cache file: {e}")))?;
                Ok(data)
            }
        }
    }
}

impl Inventory for CachedInventory {
    fn resolve_network(&self, vm: &VmRef) -> Result<NetworkIdentity, InspectorError> {
        let file = self.cache_file(
            config::CACHE_PREFIX_INSTANCE,
            &[&vm.project, &vm.location, &vm.name],
        )?;
        self.read_or_fetch(&file, || self.inner.resolve_network(vm))
    }

    fn list_forwarding_zones(
        &self,
        project: &str,
    ) -> Result<Vec<ForwardingZoneRecord>, InspectorError> {
        let file = self.cache_file(config::CACHE_PREFIX_ZONES, &[project])?;
        self.read_or_fetch(&file, || self.inner.list_forwarding_zones(project))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts calls; fails listing for project "denied".
    struct CountingInventory {
        calls: Arc<AtomicUsize>,
    }

    impl Inventory for CountingInventory {
        fn resolve_network(&self, _vm: &VmRef) -> Result<NetworkIdentity, InspectorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            NetworkIdentity::new("vpc-a")
        }

        fn list_forwarding_zones(
            &self,
            project: &str,
        ) -> Result<Vec<ForwardingZoneRecord>, InspectorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if project == "denied" {
                return Err(InspectorError::inventory(
                    format!("dns managed-zones list {project}"),
                    CommandError::Failed {
                        code: Some(1),
                        stderr: "PERMISSION_DENIED".to_string(),
                    },
                ));
            }
            Ok(vec![ForwardingZoneRecord {
                zone_name: "z1".to_string(),
                dns_name: "corp.internal.".to_string(),
                source_project: project.to_string(),
                network_bindings: vec!["vpc-a".to_string()],
                forwarding_targets: vec!["10.0.0.1".to_string()],
            }])
        }
    }

    fn cached(dir: &Path) -> (CachedInventory, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = CountingInventory {
            calls: Arc::clone(&calls),
        };
        let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        (CachedInventory::new(Box::new(inner), dir).with_date(date), calls)
    }

    #[test]
    fn test_second_call_reads_snapshot() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let (inventory, calls) = cached(tmp.path());

        let first = inventory.list_forwarding_zones("p1").expect("first call");
        let second = inventory.list_forwarding_zones("p1").expect("second call");
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1, "second call should hit cache");
        assert!(tmp.path().join("zones_p1_2025-01-15.json").exists());
    }

    #[test]
    fn test_network_snapshot_file_name() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let (inventory, calls) = cached(tmp.path());
        let vm = VmRef::new("p1", "us-central1-a", "web-1").unwrap();

        assert_eq!(inventory.resolve_network(&vm).unwrap().as_str(), "vpc-a");
        assert_eq!(inventory.resolve_network(&vm).unwrap().as_str(), "vpc-a");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(tmp
            .path()
            .join("instance_p1_us-central1-a_web-1_2025-01-15.json")
            .exists());
    }

    #[test]
    fn test_failures_are_not_cached() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let (inventory, calls) = cached(tmp.path());

        assert!(inventory.list_forwarding_zones("denied").is_err());
        assert!(inventory.list_forwarding_zones("denied").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!tmp.path().join("zones_denied_2025-01-15.json").exists());
    }

    #[test]
    fn test_corrupt_snapshot_is_cache_error() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(tmp.path().join("zones_p1_2025-01-15.json"), "{not json")
            .expect("Failed to write file");
        let (inventory, calls) = cached(tmp.path());

        let err = inventory.list_forwarding_zones("p1").expect_err("corrupt file");
        assert!(matches!(err, InspectorError::Cache { .. }), "{err}");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_path_separators_stay_inside_cache_dir() {
        let tmp = tempfile::tempdir().expect("Failed to create temp dir");
        let cache_dir = tmp.path().join("cache");
        let (inventory, calls) = cached(&cache_dir);

        for project in ["../escape", "a/b", "a\\b", ""] {
            let err = inventory
                .list_forwarding_zones(project)
                .expect_err("separator in project id");
            assert!(matches!(err, InspectorError::Cache { .. }), "{err}");
        }
        let vm = VmRef::new("p1", "../../zone", "web-1").unwrap();
        assert!(matches!(
            inventory.resolve_network(&vm),
            Err(InspectorError::Cache { .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!tmp.path().join("escape_2025-01-15.json").exists());
        assert!(!cache_dir.exists(), "nothing should be written");
    }
}
