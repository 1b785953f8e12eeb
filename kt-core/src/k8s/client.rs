use async_trait::async_trait;
use either::Either;
use kube::api::ListParams;
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use tracing::*;

use super::format_label_selector;
use crate::prelude::*;

// The narrow set of cluster operations the fixture code needs.  Credentials and client
// construction live with whoever hands us the implementation; we only issue requests.
#[cfg_attr(any(test, feature = "mock"), automock)]
#[async_trait]
pub trait NodeClient {
    async fn get_node(&self, name: &str) -> anyhow::Result<Option<corev1::Node>>;
    async fn create_node(&self, node: &corev1::Node) -> anyhow::Result<corev1::Node>;

    // Returns the number of deleted nodes, as reported by the server
    async fn delete_nodes(&self, sel: &metav1::LabelSelector) -> anyhow::Result<usize>;
}

#[async_trait]
impl NodeClient for kube::Api<corev1::Node> {
    async fn get_node(&self, name: &str) -> anyhow::Result<Option<corev1::Node>> {
        Ok(self.get_opt(name).await?)
    }

    async fn create_node(&self, node: &corev1::Node) -> anyhow::Result<corev1::Node> {
        Ok(self.create(&Default::default(), node).await?)
    }

    async fn delete_nodes(&self, sel: &metav1::LabelSelector) -> anyhow::Result<usize> {
        let lp = ListParams::default().labels(&format_label_selector(sel)?);
        match self.delete_collection(&Default::default(), &lp).await? {
            Either::Left(deleted) => Ok(deleted.items.len()),
            Either::Right(status) => {
                // The apiserver only hands back a bare Status when it doesn't report the
                // deleted objects, so there's nothing to count
                debug!("delete collection returned status: {status:?}");
                Ok(0)
            },
        }
    }
}
