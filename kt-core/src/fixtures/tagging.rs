use clockabilly::{
    DateTime,
    Utc,
};
use rand::Rng;

use crate::k8s::build_equality_label_selector;
use crate::prelude::*;

const FIXTURE_TAINT_EFFECTS: [&str; 2] = [TAINT_EFFECT_NO_SCHEDULE, TAINT_EFFECT_NO_EXECUTE];

pub fn fixture_label_selector() -> metav1::LabelSelector {
    build_equality_label_selector(FIXTURE_LABEL_KEY, FIXTURE_LABEL_VALUE)
}

// Mark the template as a kubetest fixture: add the discriminating label, cordon it, and make sure
// the "unreachable" taints are present.  Taints that are already there (e.g., copied over from a
// real source node) are left alone, so calling this more than once doesn't change anything.
pub fn tag(node: &mut corev1::Node, now: DateTime<Utc>) {
    node.labels_mut()
        .insert(FIXTURE_LABEL_KEY.into(), FIXTURE_LABEL_VALUE.into());

    let spec = node.spec.get_or_insert_with(Default::default);
    spec.unschedulable = Some(true);

    let taints = spec.taints.get_or_insert_with(Vec::new);
    for effect in FIXTURE_TAINT_EFFECTS {
        if !taints.iter().any(|t| t.key == TAINT_NODE_UNREACHABLE_KEY && t.effect == effect) {
            taints.push(corev1::Taint {
                key: TAINT_NODE_UNREACHABLE_KEY.into(),
                effect: effect.into(),
                time_added: Some(metav1::Time(now)),
                value: None,
            });
        }
    }
}

// Names look like `kubetest-node-x7bq2lmz`; names are only unique with high probability, and
// nothing here checks against what's already in the cluster.
pub fn generate_name<R: Rng>(kind: &str, rng: &mut R) -> String {
    let suffix: String = (0..NAME_SUFFIX_LEN)
        .map(|_| NAME_SUFFIX_ALPHABET[rng.random_range(0..NAME_SUFFIX_ALPHABET.len())] as char)
        .collect();
    format!("{FIXTURE_NAME_PREFIX}-{kind}-{suffix}")
}
