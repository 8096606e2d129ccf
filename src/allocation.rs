use k8s_openapi::api::core::v1 as corev1;
use kube::ResourceExt;
use tracing::*;

use crate::cluster::ClusterSource;
use crate::error::{
    AuditError,
    AuditResult,
};
use crate::quantity::{
    parse_cpu,
    parse_memory,
};
use crate::util::{
    container_limits,
    node_allocatable,
    pod_containers,
};

/// Cluster-wide allocation: how much of the allocatable capacity is promised away as limits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeSummary {
    pub count: usize,
    pub avg_cpu_percent: f64,
    pub avg_memory_percent: f64,
}

#[derive(Debug, Default)]
struct AllocationTotals {
    node_cpu: i64,
    node_memory: i64,
    cpu_limits: f64,
    memory_limits: f64,
}

impl AllocationTotals {
    fn summarize(&self, count: usize) -> NodeSummary {
        return NodeSummary {
            count,
            avg_cpu_percent: percent(self.cpu_limits, self.node_cpu, "cpu"),
            avg_memory_percent: percent(self.memory_limits, self.node_memory, "memory"),
        };
    }
}

// A cluster with no allocatable capacity reports 0% rather than NaN or infinity.
fn percent(used: f64, capacity: i64, resource: &str) -> f64 {
    if capacity == 0 {
        warn!("total allocatable {} is zero, reporting 0% allocation", resource);
        return 0.0;
    }
    return used / capacity as f64 * 100.0;
}

/// Sums the cpu and memory limits of every container that has at least one of them set.
pub fn sum_pod_limits(pods: &[corev1::Pod]) -> (i64, i64) {
    let mut cpu: i64 = 0;
    let mut memory: i64 = 0;

    for p in pods {
        for c in pod_containers(p) {
            let limits = container_limits(c);
            if limits.is_unset() {
                continue;
            }
            cpu = parse_cpu(&limits.cpu).saturating_add(cpu);
            memory = parse_memory(&limits.memory).saturating_add(memory);
        }
    }

    return (cpu, memory);
}

/// Every pod on a node counts here, whatever its namespace or deletion state. The first node whose
/// pods cannot be listed aborts the whole computation.
pub async fn compute_cluster_allocation<S>(nodes: &[corev1::Node], source: &S) -> AuditResult<NodeSummary>
where
    S: ClusterSource + ?Sized,
{
    let mut totals = AllocationTotals::default();

    for node in nodes {
        let node_name = node.name_any();
        let allocatable = node_allocatable(node);
        totals.node_cpu = totals.node_cpu.saturating_add(parse_cpu(&allocatable.cpu));
        totals.node_memory = totals.node_memory.saturating_add(parse_memory(&allocatable.memory));

        let pods_on_node = source
            .list_pods_on_node(&node_name)
            .await
            .map_err(|source| AuditError::ListNodePods { node: node_name.clone(), source })?;

        let (cpu_limits, memory_limits) = sum_pod_limits(&pods_on_node);
        debug!(
            "node {}: {} pods, cpu limits {} of {}, memory limits {} of {}",
            node_name,
            pods_on_node.len(),
            cpu_limits,
            allocatable.cpu,
            memory_limits,
            allocatable.memory
        );

        totals.cpu_limits += cpu_limits as f64;
        totals.memory_limits += memory_limits as f64;
    }

    return Ok(totals.summarize(nodes.len()));
}
