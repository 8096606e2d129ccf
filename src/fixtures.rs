use std::collections::BTreeMap;

use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use k8s_openapi::chrono::Utc;

fn quantities(cpu: &str, memory: &str) -> BTreeMap<String, Quantity> {
    let mut q = BTreeMap::new();
    if !cpu.is_empty() {
        q.insert("cpu".to_string(), Quantity(cpu.to_string()));
    }
    if !memory.is_empty() {
        q.insert("memory".to_string(), Quantity(memory.to_string()));
    }
    return q;
}

pub fn container(name: &str, limits: Option<(&str, &str)>) -> corev1::Container {
    let mut c = corev1::Container::default();
    c.name = name.to_string();
    if let Some((cpu, memory)) = limits {
        c.resources = Some(corev1::ResourceRequirements {
            limits: Some(quantities(cpu, memory)),
            ..corev1::ResourceRequirements::default()
        });
    }
    return c;
}

pub fn pod(namespace: &str, name: &str, node: &str, containers: Vec<corev1::Container>) -> corev1::Pod {
    let mut pod = corev1::Pod::default();
    pod.metadata.namespace = Some(namespace.to_string());
    pod.metadata.name = Some(name.to_string());
    pod.spec = Some(corev1::PodSpec {
        node_name: Some(node.to_string()),
        containers,
        ..corev1::PodSpec::default()
    });
    return pod;
}

pub fn terminating(mut pod: corev1::Pod) -> corev1::Pod {
    pod.metadata.deletion_timestamp = Some(Time(Utc::now()));
    return pod;
}

pub fn node(name: &str, cpu: &str, memory: &str) -> corev1::Node {
    let mut node = corev1::Node::default();
    node.metadata.name = Some(name.to_string());
    node.status = Some(corev1::NodeStatus {
        allocatable: Some(quantities(cpu, memory)),
        ..corev1::NodeStatus::default()
    });
    return node;
}

pub fn api_error(code: u16) -> kube::Error {
    return kube::Error::Api(kube::error::ErrorResponse {
        status: "Failure".to_string(),
        message: "forbidden".to_string(),
        reason: "Forbidden".to_string(),
        code,
    });
}
