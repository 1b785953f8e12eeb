use std::collections::BTreeMap;

use clockabilly::{
    DateTime,
    Utc,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use tracing::*;

use super::FixtureError;
use crate::prelude::*;

// (names, size in bytes); each image is listed by digest and by tag, the same way the kubelet
// reports them
const DEFAULT_IMAGES: &[(&[&str], i64)] = &[
    (
        &[
            "golang@sha256:f43c6f049f04cbbaeb28f0aad3eea15274a7d0a7899a617d0037aec48d7ab010",
            "golang:latest",
        ],
        822340085,
    ),
    (
        &[
            "registry.k8s.io/etcd@sha256:dd75ec974b0a2a6f6bb47001ba09207976e625db898d1b16735528c009cb171c",
            "registry.k8s.io/etcd:3.5.6-0",
        ],
        299475478,
    ),
    (
        &[
            "registry.k8s.io/kube-proxy@sha256:a9f441a6b440c634ccfe62530ab1c7ff2ea7ed3f577f91f6a71c7e2f51256410",
            "registry.k8s.io/kube-proxy:v1.26.15",
        ],
        72051242,
    ),
    (
        &[
            "registry.k8s.io/kube-scheduler@sha256:6447dce5ea569c857b161436235292bc30280b3f83fda5df730b23b0812336dc",
            "registry.k8s.io/kube-scheduler:v1.26.15",
        ],
        56870145,
    ),
    (
        &[
            "registry.k8s.io/pause@sha256:3d380ca8864549e74af4b29c10f9cb0956236dfb01c40ca076fb6c37253234db",
            "registry.k8s.io/pause:3.6",
        ],
        682696,
    ),
    (
        &[
            "registry.k8s.io/kube-apiserver@sha256:0dc6d5ba5863218a391de0952d27701d2715254b0fbfb3670cadd3074b057f8f",
            "registry.k8s.io/kube-apiserver:v1.26.15",
        ],
        138240930,
    ),
    (
        &[
            "registry.k8s.io/kube-controller-manager@sha256:ea4dd4c0905132110aca01e638d87f861dfa9db229c7022c583f4076ade0c23a",
            "registry.k8s.io/kube-controller-manager:v1.26.15",
        ],
        127210753,
    ),
    (
        &[
            "registry.k8s.io/e2e-test-images/busybox@sha256:2e0f836850e09b8b7cc937681d6194537a09fbd5f6b9e08f4d646a85128e8937",
            "registry.k8s.io/e2e-test-images/busybox:1.29-4",
        ],
        731990,
    ),
    (
        &[
            "registry.k8s.io/coredns/coredns@sha256:8e352a029d304ca7431c6507b56800636c321cb52289686a581ab70aaa8a2e2a",
            "registry.k8s.io/coredns/coredns:v1.9.3",
        ],
        14837849,
    ),
];

// (type, status, reason, message)
const DEFAULT_CONDITIONS: &[(&str, &str, &str, &str)] = &[
    (
        NODE_MEMORY_PRESSURE,
        CONDITION_FALSE,
        "KubeletHasSufficientMemory",
        "kubelet has sufficient memory available",
    ),
    (NODE_DISK_PRESSURE, CONDITION_FALSE, "KubeletHasNoDiskPressure", "kubelet has no disk pressure"),
    (NODE_PID_PRESSURE, CONDITION_FALSE, "KubeletHasSufficientPID", "kubelet has sufficient PID available"),
    (NODE_READY, CONDITION_TRUE, "KubeletReady", "kubelet is posting ready status. AppArmor enabled"),
];

pub async fn build_template<C>(client: &C, source: Option<&str>, now: DateTime<Utc>) -> anyhow::Result<corev1::Node>
where
    C: NodeClient + ?Sized,
{
    let Some(name) = source.filter(|s| !s.is_empty()) else {
        debug!("no source node given, using the default template");
        return Ok(default_template(now));
    };

    match client.get_node(name).await {
        Ok(Some(node)) => {
            debug!(node = name, "using existing node as template");
            Ok(template_from_source(node))
        },
        Ok(None) => Err(FixtureError::SourceNotFound { name: name.into(), source: None }.into()),
        Err(err) => Err(FixtureError::SourceNotFound { name: name.into(), source: Some(err) }.into()),
    }
}

// Only the spec and status come across; the name, labels, and all of the server-managed
// metadata on the source stay behind.
pub fn template_from_source(node: corev1::Node) -> corev1::Node {
    corev1::Node {
        metadata: Default::default(),
        spec: node.spec,
        status: node.status,
    }
}

pub fn default_template(now: DateTime<Utc>) -> corev1::Node {
    let conditions = DEFAULT_CONDITIONS
        .iter()
        .map(|(type_, status, reason, message)| corev1::NodeCondition {
            type_: (*type_).into(),
            status: (*status).into(),
            reason: Some((*reason).into()),
            message: Some((*message).into()),
            last_heartbeat_time: Some(metav1::Time(now)),
            last_transition_time: Some(metav1::Time(now)),
        })
        .collect();

    let images = DEFAULT_IMAGES
        .iter()
        .map(|(names, size_bytes)| corev1::ContainerImage {
            names: Some(names.iter().map(|n| (*n).into()).collect()),
            size_bytes: Some(*size_bytes),
        })
        .collect();

    let resources = BTreeMap::from([
        ("cpu".to_string(), Quantity(DEFAULT_NODE_CPU.into())),
        ("memory".to_string(), Quantity(DEFAULT_NODE_MEMORY.into())),
        ("pods".to_string(), Quantity(DEFAULT_NODE_PODS.into())),
    ]);

    corev1::Node {
        metadata: Default::default(),
        spec: Some(corev1::NodeSpec {
            pod_cidr: Some(DEFAULT_POD_CIDR.into()),
            pod_cidrs: Some(vec![DEFAULT_POD_CIDR.into()]),
            ..Default::default()
        }),
        status: Some(corev1::NodeStatus {
            allocatable: Some(resources.clone()),
            capacity: Some(resources),
            conditions: Some(conditions),
            images: Some(images),
            ..Default::default()
        }),
    }
}
