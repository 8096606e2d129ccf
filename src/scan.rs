use tracing::*;

use crate::allocation::{
    compute_cluster_allocation,
    NodeSummary,
};
use crate::cluster::ClusterSource;
use crate::error::{
    AuditError,
    AuditResult,
};
use crate::tally::{
    tally_pods,
    NamespaceTally,
};

#[derive(Clone, Debug, PartialEq)]
pub struct ClusterAudit {
    pub tally: NamespaceTally,
    pub summary: NodeSummary,
}

pub async fn scan_cluster<S>(source: &S) -> AuditResult<ClusterAudit>
where
    S: ClusterSource + ?Sized,
{
    let pods = source.list_pods().await.map_err(AuditError::ListPods)?;
    info!("found {} pods", pods.len());
    let tally = tally_pods(&pods);
    if tally.is_empty() {
        warn!("no containers with resource limits found outside excluded namespaces");
    }

    let nodes = source.list_nodes().await.map_err(AuditError::ListNodes)?;
    info!("found {} nodes", nodes.len());
    let summary = compute_cluster_allocation(&nodes, source).await?;

    return Ok(ClusterAudit { tally, summary });
}
