use std::path::PathBuf;

use async_trait::async_trait;
use k8s_openapi::api::core::v1 as corev1;
use kube::api::ListParams;
use kube::config::{
    KubeConfigOptions,
    Kubeconfig,
};
use kube::{
    Api,
    Client,
    Config,
};
#[cfg(test)]
use mockall::automock;
use tracing::*;

use crate::error::{
    AuditError,
    AuditResult,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClusterSource: Send + Sync {
    /// All pods in all namespaces.
    async fn list_pods(&self) -> Result<Vec<corev1::Pod>, kube::Error>;

    /// All pods whose `spec.nodeName` is `node_name`.
    async fn list_pods_on_node(&self, node_name: &str) -> Result<Vec<corev1::Pod>, kube::Error>;

    async fn list_nodes(&self) -> Result<Vec<corev1::Node>, kube::Error>;
}

pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    pub fn new(client: Client) -> KubeCluster {
        return KubeCluster { client };
    }
}

#[async_trait]
impl ClusterSource for KubeCluster {
    async fn list_pods(&self) -> Result<Vec<corev1::Pod>, kube::Error> {
        let pod_querier: Api<corev1::Pod> = Api::all(self.client.clone());
        let pods = pod_querier.list(&ListParams::default()).await?;
        return Ok(pods.items);
    }

    async fn list_pods_on_node(&self, node_name: &str) -> Result<Vec<corev1::Pod>, kube::Error> {
        let pod_querier: Api<corev1::Pod> = Api::all(self.client.clone());
        let list_params = ListParams {
            field_selector: Some(format!("spec.nodeName={}", node_name)),
            ..ListParams::default()
        };
        let pods = pod_querier.list(&list_params).await?;
        return Ok(pods.items);
    }

    async fn list_nodes(&self) -> Result<Vec<corev1::Node>, kube::Error> {
        let node_querier: Api<corev1::Node> = Api::all(self.client.clone());
        let nodes = node_querier.list(&ListParams::default()).await?;
        return Ok(nodes.items);
    }
}

/// How to reach the cluster.
#[derive(Clone, Debug)]
pub struct ClientSettings {
    /// Kubeconfig to load; when absent the config is inferred (in-cluster or `KUBECONFIG`).
    pub kubeconfig: Option<PathBuf>,
    /// Trust the API server certificate without verifying it.
    pub accept_invalid_certs: bool,
}

impl ClientSettings {
    /// `$HOME/.kube/config` if a home directory is known.
    pub fn default_kubeconfig() -> Option<PathBuf> {
        return dirs::home_dir().map(|home| home.join(".kube").join("config"));
    }
}

pub async fn client_config(settings: &ClientSettings) -> AuditResult<Config> {
    let mut config = match &settings.kubeconfig {
        Some(path) => {
            let kubeconfig = Kubeconfig::read_from(path).map_err(|source| AuditError::KubeconfigRead {
                path: path.clone(),
                source,
            })?;
            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(AuditError::KubeconfigLoad)?
        },
        None => Config::infer().await.map_err(AuditError::InferConfig)?,
    };
    config.accept_invalid_certs = settings.accept_invalid_certs;

    return Ok(config);
}

pub async fn connect(settings: &ClientSettings) -> AuditResult<KubeCluster> {
    let config = client_config(settings).await?;
    info!("connecting to {}", config.cluster_url);
    let client = Client::try_from(config).map_err(AuditError::ClientCreate)?;
    return Ok(KubeCluster::new(client));
}
