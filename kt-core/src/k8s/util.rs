use std::collections::BTreeMap;

use kube::api::Resource;

use super::*;
use crate::errors::*;
use crate::prelude::*;

pub fn build_equality_label_selector(key: &str, value: &str) -> metav1::LabelSelector {
    metav1::LabelSelector {
        match_labels: Some(BTreeMap::from([(key.into(), value.into())])),
        ..Default::default()
    }
}

// Render a selector into the string form the apiserver accepts in the `labelSelector` query
// parameter, e.g. `app=kubetest,tier=fake`
pub fn format_label_selector(sel: &metav1::LabelSelector) -> anyhow::Result<String> {
    ensure_equality_only(sel)?;
    Ok(sel
        .match_labels
        .iter()
        .flatten()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(","))
}

impl<T: Resource> KubeResourceExt for T {
    fn matches(&self, sel: &metav1::LabelSelector) -> anyhow::Result<bool> {
        ensure_equality_only(sel)?;
        Ok(sel
            .match_labels
            .iter()
            .flatten()
            .all(|(k, v)| self.labels().get(k) == Some(v)))
    }
}

// Fixtures are only ever selected by matchLabels; set-based expressions are rejected rather than
// silently ignored
fn ensure_equality_only(sel: &metav1::LabelSelector) -> EmptyResult {
    if sel.match_expressions.as_ref().is_some_and(|e| !e.is_empty()) {
        bail!(KubernetesError::unsupported_label_selector(sel));
    }
    Ok(())
}
