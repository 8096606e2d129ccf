use std::path::PathBuf;

use kube::config::{
    InferConfigError,
    KubeconfigError,
};
use thiserror::Error;

pub type AuditResult<T, E = AuditError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("could not read kubeconfig at {}", path.display())]
    KubeconfigRead {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    #[error("could not load kube client config from kubeconfig")]
    KubeconfigLoad(#[source] KubeconfigError),

    #[error("could not infer kube client config")]
    InferConfig(#[source] InferConfigError),

    #[error("could not create kube client")]
    ClientCreate(#[source] kube::Error),

    #[error("could not list pods")]
    ListPods(#[source] kube::Error),

    #[error("could not list nodes")]
    ListNodes(#[source] kube::Error),

    #[error("could not list pods on node {node}")]
    ListNodePods {
        node: String,
        #[source]
        source: kube::Error,
    },

    #[error("could not write report to {}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AuditError {
    /// Operator-facing advice printed before exiting, if any.
    pub fn hint(&self) -> Option<&'static str> {
        return match self {
            AuditError::ListPods(_) => Some("Make sure you are logged in to the cluster!"),
            _ => None,
        };
    }
}
