/// Simulated workflow execution
///
/// Walks the node list in order and fabricates one success result per node.
/// This is a demo runtime: no node logic runs, nothing flows between nodes,
/// and the connection list is ignored entirely. A real engine would need a
/// graph traversal over the connections; none exists here.

use crate::workflow::service::Clock;
use crate::workflow::types::Workflow;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Outcome of a simulated run
///
/// Only one variant exists: simulation cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
}

/// Payload attached to a node result
#[derive(Debug, Clone, Serialize)]
pub struct NodeRunData {
    /// Templated message: "<type> node executed successfully"
    pub message: String,
    /// The node's parameters, echoed back verbatim
    pub input: Value,
}

/// Fabricated result for a single node
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRunResult {
    pub node_id: String,
    pub node_name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub status: RunStatus,
    pub executed_at: DateTime<Utc>,
    pub data: NodeRunData,
}

/// Envelope for a full simulated run
///
/// `started_at` and `finished_at` are independent clock readings and carry
/// no ordering guarantee relative to the per-node timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    pub workflow_id: String,
    pub status: RunStatus,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub results: Vec<NodeRunResult>,
}

/// Executor producing simulated runs
pub struct WorkflowExecutor {
    clock: Arc<dyn Clock>,
}

impl WorkflowExecutor {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Produce the execution report for a workflow
    ///
    /// One result per node, in node list order.
    pub fn run(&self, workflow: &Workflow) -> ExecutionReport {
        let started_at = self.clock.now();

        let results = workflow
            .nodes
            .iter()
            .map(|node| NodeRunResult {
                node_id: node.id.clone(),
                node_name: node.name.clone(),
                node_type: node.node_type.clone(),
                status: RunStatus::Success,
                executed_at: self.clock.now(),
                data: NodeRunData {
                    message: format!("{} node executed successfully", node.node_type),
                    input: node.parameters.clone(),
                },
            })
            .collect();

        ExecutionReport {
            workflow_id: workflow.id.clone(),
            status: RunStatus::Success,
            started_at,
            finished_at: self.clock.now(),
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::service::test_support::TickingClock;
    use crate::workflow::types::Node;
    use chrono::Utc;
    use serde_json::json;

    fn workflow(nodes: Vec<Node>) -> Workflow {
        let now = Utc::now();
        Workflow {
            id: "wf-1".to_string(),
            name: "Demo".to_string(),
            nodes,
            connections: vec![json!({"from": "n1", "to": "n2"})],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn run_fabricates_one_result_per_node() {
        let executor = WorkflowExecutor::new(Arc::new(TickingClock::default()));
        let workflow = workflow(vec![
            Node {
                id: "n1".to_string(),
                name: "Start".to_string(),
                node_type: "trigger".to_string(),
                parameters: json!({"x": 1}),
                ..Node::default()
            },
            Node {
                id: "n2".to_string(),
                name: "Fetch".to_string(),
                node_type: "http".to_string(),
                parameters: Value::Null,
                ..Node::default()
            },
        ]);

        let report = executor.run(&workflow);

        assert_eq!(report.workflow_id, "wf-1");
        assert_eq!(report.status, RunStatus::Success);
        assert_eq!(report.results.len(), 2);

        let first = &report.results[0];
        assert_eq!(first.node_id, "n1");
        assert_eq!(first.node_name, "Start");
        assert_eq!(first.data.message, "trigger node executed successfully");
        assert_eq!(first.data.input, json!({"x": 1}));
        assert_eq!(report.results[1].data.message, "http node executed successfully");
    }

    #[test]
    fn run_on_empty_workflow_yields_empty_results() {
        let executor = WorkflowExecutor::new(Arc::new(TickingClock::default()));
        let report = executor.run(&workflow(Vec::new()));

        assert!(report.results.is_empty());
        assert_eq!(report.status, RunStatus::Success);
    }

    #[test]
    fn report_serializes_with_wire_field_names() {
        let executor = WorkflowExecutor::new(Arc::new(TickingClock::default()));
        let report = executor.run(&workflow(vec![Node {
            id: "n1".to_string(),
            name: "Start".to_string(),
            node_type: "trigger".to_string(),
            parameters: json!({"x": 1}),
            ..Node::default()
        }]));

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["workflowId"], "wf-1");
        assert_eq!(value["status"], "success");
        assert_eq!(value["results"][0]["nodeId"], "n1");
        assert_eq!(value["results"][0]["type"], "trigger");
        assert!(value["results"][0]["executedAt"].is_string());
        assert!(value["startedAt"].is_string());
        assert!(value["finishedAt"].is_string());
    }
}
