mod creator_test;
mod reclaimer_test;

use clockabilly::mock::MockUtcClock;
use clockabilly::{
    Clockable,
    DateTime,
    Utc,
};
use kt_testutils::*;
use rstest::*;
use tracing_test::traced_test;

use super::*;
use crate::k8s::MockNodeClient;

#[fixture]
fn now() -> DateTime<Utc> {
    MockUtcClock::new(TEST_NOW).now()
}

#[fixture]
fn tagged_template(now: DateTime<Utc>) -> corev1::Node {
    let mut template = default_template(now);
    tag(&mut template, now);
    template
}

fn unreachable_taints(node: &corev1::Node) -> Vec<&corev1::Taint> {
    node.spec
        .as_ref()
        .and_then(|s| s.taints.as_ref())
        .map(|taints| taints.iter().filter(|t| t.key == TAINT_NODE_UNREACHABLE_KEY).collect())
        .unwrap_or_default()
}
