/// Workflow store: the authoritative set of workflow records
///
/// The store is an injectable seam so the service can be tested in isolation
/// and a persistent backend can slot in later without touching the service.
/// The shipped implementation is in-memory only; its contents vanish when
/// the process exits.

use crate::workflow::types::Workflow;
use anyhow::Result;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};

/// Storage seam for workflow records
///
/// Operations are fallible at the trait level because a real backend would
/// be; `MemoryStore` itself never returns an error.
#[async_trait]
pub trait WorkflowStore: Send + Sync {
    /// Insert or replace the record under its id
    async fn put(&self, workflow: Workflow) -> Result<()>;

    /// Fetch a record by id
    async fn get(&self, id: &str) -> Result<Option<Workflow>>;

    /// All records; iteration order is unspecified
    async fn list(&self) -> Result<Vec<Workflow>>;

    /// Remove a record, reporting whether one existed
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Lock-free in-memory workflow store
///
/// Uses ArcSwap to swap the entire map pointer on every write: reads are
/// plain atomic loads and never block, writes clone the map and publish the
/// new version atomically. Writes assume a single logical writer, which
/// holds for the request-at-a-time service in front of it.
#[derive(Debug, Default)]
pub struct MemoryStore {
    workflows: ArcSwap<HashMap<String, Workflow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            workflows: ArcSwap::new(Arc::new(HashMap::new())),
        }
    }

    /// Number of stored workflows
    pub fn len(&self) -> usize {
        self.workflows.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.load().is_empty()
    }
}

#[async_trait]
impl WorkflowStore for MemoryStore {
    async fn put(&self, workflow: Workflow) -> Result<()> {
        let current = self.workflows.load();
        let mut next = (**current).clone();
        next.insert(workflow.id.clone(), workflow);
        self.workflows.store(Arc::new(next));
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Workflow>> {
        Ok(self.workflows.load().get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Workflow>> {
        Ok(self.workflows.load().values().cloned().collect())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let current = self.workflows.load();
        if !current.contains_key(id) {
            return Ok(false);
        }

        let mut next = (**current).clone();
        next.remove(id);
        self.workflows.store(Arc::new(next));
        Ok(true)
    }
}
