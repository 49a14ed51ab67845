/// Core workflow type definitions
///
/// Defines the workflow document as the editor stores it: a named list of
/// nodes plus the connections drawn between them. These types are
/// serialized/deserialized from JSON and use the camelCase field names the
/// editor speaks on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display name assigned when a workflow is created without one.
pub const DEFAULT_WORKFLOW_NAME: &str = "Untitled Workflow";

/// A stored workflow document
///
/// Workflows are created with a server-generated id and a pair of timestamps.
/// `created_at` is set once; `updated_at` moves forward on every successful
/// update. Nodes and connections are kept exactly as the editor sent them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Server-generated unique identifier, immutable after creation
    pub id: String,
    /// Human-readable workflow name
    pub name: String,
    /// Nodes in editor order
    pub nodes: Vec<Node>,
    /// Connections between nodes; stored verbatim, never interpreted
    pub connections: Vec<Value>,
    /// Creation timestamp, never modified
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

/// A single node inside a workflow
///
/// The node structure belongs to the editor; the backend only reads the id,
/// name, type tag and parameters when fabricating execution results. Every
/// other field the editor stores (canvas position, styling, ...) is captured
/// in `extra` and round-trips untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier, used to label execution results
    #[serde(default)]
    pub id: String,
    /// Display label, used to label execution results
    #[serde(default)]
    pub name: String,
    /// Type tag selecting the execution message (e.g. "trigger", "http")
    #[serde(rename = "type", default)]
    pub node_type: String,
    /// Arbitrary node configuration, echoed back as execution input
    #[serde(default)]
    pub parameters: Value,
    /// Editor-owned fields the backend passes through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial workflow document accepted by create and update
///
/// Every field is optional. Create fills gaps with defaults; update keeps
/// the stored value wherever the patch is absent or empty (see
/// `WorkflowService::update_workflow` for the empty-value rule).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowPatch {
    pub name: Option<String>,
    pub nodes: Option<Vec<Node>>,
    pub connections: Option<Vec<Value>>,
}

impl WorkflowPatch {
    /// Name with the empty string treated as absent
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Nodes with the empty list treated as absent
    pub fn nodes(&self) -> Option<&[Node]> {
        self.nodes.as_deref().filter(|nodes| !nodes.is_empty())
    }

    /// Connections with the empty list treated as absent
    pub fn connections(&self) -> Option<&[Value]> {
        self.connections
            .as_deref()
            .filter(|connections| !connections.is_empty())
    }
}
