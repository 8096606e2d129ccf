use std::collections::BTreeMap;

use k8s_openapi::api::core::v1 as corev1;
use kube::ResourceExt;
use tracing::*;

use crate::sizing::{
    classify,
    SizeBucket,
    BUCKET_COUNT,
};
use crate::util::{
    container_limits,
    full_name,
    is_pod_terminating,
    pod_containers,
};

const EXCLUDED_NAMESPACE_MARKER: &str = "openshift";

pub type BucketCounts = [u64; BUCKET_COUNT];

/// Per-namespace container counts, one counter per size bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamespaceTally {
    counts: BTreeMap<String, BucketCounts>,
}

impl NamespaceTally {
    pub fn new() -> NamespaceTally {
        return NamespaceTally::default();
    }

    pub fn record_container(&mut self, namespace: &str, bucket: SizeBucket) {
        let counts = self.counts.entry(namespace.to_string()).or_insert([0; BUCKET_COUNT]);
        counts[bucket.index()] += 1;
    }

    #[cfg(test)]
    pub fn get(&self, namespace: &str) -> Option<&BucketCounts> {
        return self.counts.get(namespace);
    }

    /// Namespaces in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BucketCounts)> {
        return self.counts.iter().map(|(ns, counts)| (ns.as_str(), counts));
    }

    pub fn len(&self) -> usize {
        return self.counts.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.counts.is_empty();
    }
}

/// Terminating pods and anything in a platform ("openshift") namespace stay out of the tally.
pub fn is_excluded(pod: &corev1::Pod) -> bool {
    if is_pod_terminating(pod) {
        return true;
    }
    return pod.namespace().map_or(false, |ns| ns.contains(EXCLUDED_NAMESPACE_MARKER));
}

pub fn tally_pods(pods: &[corev1::Pod]) -> NamespaceTally {
    let mut tally = NamespaceTally::new();

    for pod in pods {
        if is_excluded(pod) {
            debug!("skipping pod {}", full_name(pod));
            continue;
        }

        let namespace = pod.namespace().unwrap_or_default();
        for c in pod_containers(pod) {
            let limits = container_limits(c);
            if limits.is_unset() {
                continue;
            }
            tally.record_container(&namespace, classify(&limits));
        }
    }

    return tally;
}
