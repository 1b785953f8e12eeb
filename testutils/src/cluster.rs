use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use anyhow::bail;
use async_trait::async_trait;
use kt_core::prelude::*;

// An in-memory stand-in for the nodes endpoint of an apiserver.  Label selectors are evaluated
// client-side, the same way the apiserver would evaluate them.
#[derive(Default)]
pub struct FakeCluster {
    nodes: Mutex<BTreeMap<String, corev1::Node>>,
    create_calls: AtomicUsize,
    fail_create_at: Option<usize>,
    fail_delete: bool,
}

impl FakeCluster {
    pub fn new() -> FakeCluster {
        Default::default()
    }

    pub fn with_nodes(nodes: impl IntoIterator<Item = corev1::Node>) -> FakeCluster {
        let cluster = FakeCluster::new();
        {
            let mut store = cluster.nodes.lock().unwrap();
            for node in nodes {
                store.insert(node.name_any(), node);
            }
        }
        cluster
    }

    // The k-th create call (1-indexed) fails; every call after it would succeed again
    pub fn fail_create_at(mut self, k: usize) -> FakeCluster {
        self.fail_create_at = Some(k);
        self
    }

    pub fn fail_delete(mut self) -> FakeCluster {
        self.fail_delete = true;
        self
    }

    pub fn nodes(&self) -> Vec<corev1::Node> {
        self.nodes.lock().unwrap().values().cloned().collect()
    }

    pub fn nodes_matching(&self, sel: &metav1::LabelSelector) -> Vec<corev1::Node> {
        self.nodes()
            .into_iter()
            .filter(|n| n.matches(sel).unwrap())
            .collect()
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NodeClient for FakeCluster {
    async fn get_node(&self, name: &str) -> anyhow::Result<Option<corev1::Node>> {
        Ok(self.nodes.lock().unwrap().get(name).cloned())
    }

    async fn create_node(&self, node: &corev1::Node) -> anyhow::Result<corev1::Node> {
        let call = self.create_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_create_at == Some(call) {
            bail!("injected failure on create call {call}");
        }

        let name = node.name_any();
        let mut nodes = self.nodes.lock().unwrap();
        if nodes.contains_key(&name) {
            bail!("nodes \"{name}\" already exists");
        }

        let mut created = node.clone();
        created.metadata.uid = Some(format!("uid-{call}"));
        created.metadata.resource_version = Some(call.to_string());
        nodes.insert(name, created.clone());
        Ok(created)
    }

    async fn delete_nodes(&self, sel: &metav1::LabelSelector) -> anyhow::Result<usize> {
        if self.fail_delete {
            bail!("nodes is forbidden: cannot deletecollection nodes at the cluster scope");
        }

        let mut nodes = self.nodes.lock().unwrap();
        let mut matched = vec![];
        for (name, node) in nodes.iter() {
            if node.matches(sel)? {
                matched.push(name.clone());
            }
        }
        for name in &matched {
            nodes.remove(name);
        }
        Ok(matched.len())
    }
}
