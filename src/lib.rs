/// flowdeck: minimal backend for a visual workflow builder
///
/// This library provides in-memory workflow document storage, CRUD service
/// logic, and a simulated execution runtime behind a REST API.

// Core configuration and setup
pub mod config;

// Workflow management layer - documents, storage seam, service logic
pub mod workflow;

// Simulated execution runtime
pub mod runtime;

// HTTP API layer - REST endpoints for workflow management
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use runtime::{ExecutionReport, NodeRunResult};
pub use server::{create_app, start_server};
pub use workflow::{MemoryStore, Node, ServiceError, Workflow, WorkflowPatch, WorkflowService, WorkflowStore};
