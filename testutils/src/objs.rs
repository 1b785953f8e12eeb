use std::collections::BTreeMap;

use k8s_openapi::api::core::v1 as corev1;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use rstest::fixture;

use crate::constants::*;

// A "real" node, with all the identity and server-managed metadata that must not leak into a
// fixture template built from it
#[fixture]
pub fn test_node(#[default(TEST_NODE_NAME)] name: &str) -> corev1::Node {
    corev1::Node {
        metadata: metav1::ObjectMeta {
            name: Some(name.into()),
            uid: Some(TEST_NODE_UID.into()),
            resource_version: Some("4321".into()),
            labels: Some(BTreeMap::from([(TEST_NODE_LABEL_KEY.into(), name.into())])),
            annotations: Some(BTreeMap::from([(
                "node.alpha.kubernetes.io/ttl".into(),
                "0".into(),
            )])),
            ..Default::default()
        },
        spec: Some(corev1::NodeSpec {
            pod_cidr: Some(TEST_NODE_POD_CIDR.into()),
            pod_cidrs: Some(vec![TEST_NODE_POD_CIDR.into()]),
            provider_id: Some(format!("kind://docker/kind/{name}")),
            taints: Some(vec![corev1::Taint {
                key: TEST_NODE_TAINT_KEY.into(),
                value: Some("infra".into()),
                effect: "NoSchedule".into(),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        status: Some(corev1::NodeStatus {
            capacity: Some(BTreeMap::from([
                ("cpu".into(), Quantity("8".into())),
                ("memory".into(), Quantity("32Gi".into())),
            ])),
            conditions: Some(vec![corev1::NodeCondition {
                type_: "Ready".into(),
                status: "True".into(),
                reason: Some("KubeletReady".into()),
                ..Default::default()
            }]),
            images: Some(vec![corev1::ContainerImage {
                names: Some(vec!["registry.k8s.io/pause:3.9".into()]),
                size_bytes: Some(321520),
            }]),
            ..Default::default()
        }),
    }
}

// A node that some earlier kubetest run already created
#[fixture]
pub fn test_fixture_node(#[default("kubetest-node-bcdfghjk")] name: &str) -> corev1::Node {
    corev1::Node {
        metadata: metav1::ObjectMeta {
            name: Some(name.into()),
            labels: Some(BTreeMap::from([("app".into(), "kubetest".into())])),
            ..Default::default()
        },
        spec: Some(corev1::NodeSpec { unschedulable: Some(true), ..Default::default() }),
        status: None,
    }
}
