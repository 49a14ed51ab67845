/// Workflow Management Layer
///
/// This module handles workflow documents and their storage. It provides:
/// - Type definitions (Workflow, Node, WorkflowPatch)
/// - The injectable store seam with the in-memory implementation
/// - The service enforcing defaulting and timestamp policy

// Core workflow type definitions
pub mod types;

// Injectable store seam + lock-free in-memory implementation
pub mod store;

// CRUD and simulated execution over the store
pub mod service;

// Re-export commonly used types
pub use service::{ServiceError, WorkflowService};
pub use store::{MemoryStore, WorkflowStore};
pub use types::{Node, Workflow, WorkflowPatch};
