//! Cached accessor over the constituency reference lists.
//!
//! The PC list, the AC list per PC, and the panchayat list change rarely;
//! the directory caches the last successful result per key so reopening a
//! dropdown does not refetch. Failures are never cached and never returned
//! as empty lists: an unreachable backend surfaces as an error the caller
//! can distinguish from "legitimately no options".

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::ApiError;
use crate::reference::{ReferenceClient, ReferenceEntry};

#[derive(Debug, Default)]
struct DirectoryCache {
    pcs: Option<Vec<ReferenceEntry>>,
    acs: HashMap<String, Vec<ReferenceEntry>>,
    panchayats: Option<Vec<ReferenceEntry>>,
}

/// Per-key caching wrapper over the constituency endpoints.
///
/// Cloning shares the cache. All access goes through the single-threaded
/// event loop's async continuations; the lock exists for Rust soundness,
/// not because two cascades race on one key.
#[derive(Debug, Clone)]
pub struct RemoteDirectory {
    reference: ReferenceClient,
    cache: Arc<Mutex<DirectoryCache>>,
}

impl RemoteDirectory {
    /// Build a directory over a reference client.
    pub fn new(reference: ReferenceClient) -> Self {
        Self {
            reference,
            cache: Arc::new(Mutex::new(DirectoryCache::default())),
        }
    }

    /// The parliamentary constituency list.
    pub async fn list_constituencies(&self) -> Result<Vec<ReferenceEntry>, ApiError> {
        if let Some(cached) = self.cache.lock().pcs.clone() {
            tracing::debug!("pc list served from cache");
            return Ok(cached);
        }
        let fetched = self.reference.pcs().await?;
        self.cache.lock().pcs = Some(fetched.clone());
        Ok(fetched)
    }

    /// The assembly constituency list for one PC.
    pub async fn list_assembly_constituencies(
        &self,
        pc: &str,
    ) -> Result<Vec<ReferenceEntry>, ApiError> {
        if let Some(cached) = self.cache.lock().acs.get(pc).cloned() {
            tracing::debug!(pc, "ac list served from cache");
            return Ok(cached);
        }
        let fetched = self.reference.acs(pc).await?;
        self.cache.lock().acs.insert(pc.to_string(), fetched.clone());
        Ok(fetched)
    }

    /// The panchayat list.
    pub async fn list_panchayats(&self) -> Result<Vec<ReferenceEntry>, ApiError> {
        if let Some(cached) = self.cache.lock().panchayats.clone() {
            tracing::debug!("panchayat list served from cache");
            return Ok(cached);
        }
        let fetched = self.reference.panchayats(None).await?;
        self.cache.lock().panchayats = Some(fetched.clone());
        Ok(fetched)
    }

    /// Drop all cached lists; the next call per key refetches.
    pub fn invalidate(&self) {
        *self.cache.lock() = DirectoryCache::default();
    }
}
