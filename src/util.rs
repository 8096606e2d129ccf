use std::collections::BTreeMap;

use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::api::{
    Resource,
    ResourceExt,
};

use crate::sizing::ResourceLimits;

pub fn full_name(obj: &impl Resource) -> String {
    return match obj.namespace() {
        Some(ns) => format!("{}/{}", ns, obj.name_any()),
        None => obj.name_any().clone(),
    };
}

pub fn is_pod_terminating(pod: &corev1::Pod) -> bool {
    return pod.metadata.deletion_timestamp.is_some();
}

pub fn pod_containers(pod: &corev1::Pod) -> &[corev1::Container] {
    return match &pod.spec {
        Some(spec) => &spec.containers,
        None => &[],
    };
}

fn quantity_string(quantities: Option<&BTreeMap<String, Quantity>>, key: &str) -> String {
    return quantities
        .and_then(|q| q.get(key))
        .map(|q| q.0.clone())
        .unwrap_or_default();
}

pub fn container_limits(container: &corev1::Container) -> ResourceLimits {
    let limits = container.resources.as_ref().and_then(|r| r.limits.as_ref());
    return ResourceLimits::new(quantity_string(limits, "cpu"), quantity_string(limits, "memory"));
}

pub fn node_allocatable(node: &corev1::Node) -> ResourceLimits {
    let allocatable = node.status.as_ref().and_then(|s| s.allocatable.as_ref());
    return ResourceLimits::new(quantity_string(allocatable, "cpu"), quantity_string(allocatable, "memory"));
}
