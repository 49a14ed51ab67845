/// Workflow service: field defaulting and timestamp policy around the store
///
/// All mutations of workflow records go through this service. It owns the
/// id-generation and clock capabilities so tests can pin both, and it is the
/// only place the update defaulting rule lives.

use crate::runtime::executor::{ExecutionReport, WorkflowExecutor};
use crate::workflow::store::WorkflowStore;
use crate::workflow::types::{Workflow, WorkflowPatch, DEFAULT_WORKFLOW_NAME};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by workflow service operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Referenced workflow id is absent from the store
    #[error("Workflow not found: {0}")]
    NotFound(String),

    /// Store failure; unreachable with the in-memory store
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Identifier generation capability
///
/// Injectable so tests can supply deterministic ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random UUID v4 identifiers, the production generator
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Time source capability
///
/// Injectable so tests can pin `created_at`/`updated_at` ordering.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, the production clock
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// CRUD and simulated execution over the workflow store
pub struct WorkflowService {
    store: Arc<dyn WorkflowStore>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    executor: WorkflowExecutor,
}

impl WorkflowService {
    /// Create a service with the production id generator and clock
    pub fn new(store: Arc<dyn WorkflowStore>) -> Self {
        Self::with_parts(store, Arc::new(UuidGenerator), Arc::new(SystemClock))
    }

    /// Create a service with explicit capabilities (used by tests)
    pub fn with_parts(
        store: Arc<dyn WorkflowStore>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let executor = WorkflowExecutor::new(Arc::clone(&clock));
        Self {
            store,
            ids,
            clock,
            executor,
        }
    }

    /// Create and store a new workflow
    ///
    /// Missing fields fall back to defaults: "Untitled Workflow" and empty
    /// node/connection lists. Both timestamps are set to the same instant.
    pub async fn create_workflow(&self, input: WorkflowPatch) -> Result<Workflow, ServiceError> {
        let now = self.clock.now();
        let workflow = Workflow {
            id: self.ids.generate(),
            name: input
                .name()
                .unwrap_or(DEFAULT_WORKFLOW_NAME)
                .to_string(),
            nodes: input.nodes.unwrap_or_default(),
            connections: input.connections.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        self.store.put(workflow.clone()).await?;
        tracing::info!("Created workflow: {} ({})", workflow.id, workflow.name);

        Ok(workflow)
    }

    /// Fetch a single workflow
    pub async fn get_workflow(&self, id: &str) -> Result<Workflow, ServiceError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }

    /// All stored workflows, in no particular order
    pub async fn list_workflows(&self) -> Result<Vec<Workflow>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Apply a partial update to an existing workflow
    ///
    /// Each field is replaced only when the patch carries a non-empty value;
    /// an empty string or empty list keeps the stored value, so a node list
    /// cannot be cleared through this operation. The id and `created_at`
    /// are preserved, `updated_at` is refreshed.
    pub async fn update_workflow(
        &self,
        id: &str,
        patch: WorkflowPatch,
    ) -> Result<Workflow, ServiceError> {
        let mut workflow = self.get_workflow(id).await?;

        if let Some(name) = patch.name() {
            workflow.name = name.to_string();
        }
        if let Some(nodes) = patch.nodes() {
            workflow.nodes = nodes.to_vec();
        }
        if let Some(connections) = patch.connections() {
            workflow.connections = connections.to_vec();
        }
        workflow.updated_at = self.clock.now();

        self.store.put(workflow.clone()).await?;
        tracing::info!("Updated workflow: {} ({})", workflow.id, workflow.name);

        Ok(workflow)
    }

    /// Remove a workflow from the store
    pub async fn delete_workflow(&self, id: &str) -> Result<(), ServiceError> {
        if !self.store.delete(id).await? {
            return Err(ServiceError::NotFound(id.to_string()));
        }

        tracing::info!("Deleted workflow: {}", id);
        Ok(())
    }

    /// Run the simulated execution of a workflow
    ///
    /// Produces one success result per node in list order. Connections are
    /// stored but play no part here; there is no dependency resolution.
    pub async fn execute_workflow(&self, id: &str) -> Result<ExecutionReport, ServiceError> {
        let workflow = self.get_workflow(id).await?;
        let report = self.executor.run(&workflow);

        tracing::info!(
            "Executed workflow: {} ({} nodes)",
            workflow.id,
            report.results.len()
        );

        Ok(report)
    }
}
