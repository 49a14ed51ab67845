/// HTTP API Layer
///
/// This module provides the REST API endpoints for workflow management.
/// It handles:
/// - Workflow CRUD operations
/// - The simulated execute trigger
/// - Status-code mapping and the single JSON error shape

// Workflow management endpoints (POST/GET/PUT/DELETE + execute)
pub mod workflows;

// Error-to-response mapping
pub mod error;

// Re-export router builder
pub use workflows::create_workflow_routes;
