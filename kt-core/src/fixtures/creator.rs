use rand::Rng;
use tracing::*;

use super::{
    FixtureError,
    generate_name,
};
use crate::prelude::*;

// Create `count` copies of the (already-tagged) template, strictly one after another.  We stop at
// the first failure and report how many made it; there's no rollback, since anything we created
// can be cleaned up with a flush.
pub async fn create_many<C, R>(client: &C, count: usize, template: &corev1::Node, rng: &mut R) -> anyhow::Result<usize>
where
    C: NodeClient + ?Sized,
    R: Rng,
{
    for i in 0..count {
        let mut node = template.clone();
        node.metadata.name = Some(generate_name(NODE_FIXTURE_KIND, rng));

        match client.create_node(&node).await {
            Ok(created) => debug!(node = %created.name_any(), "created node"),
            Err(err) => {
                info!("created {i} of {count} nodes before failure");
                return Err(FixtureError::CreateFailed { index: i + 1, count, created: i, source: err }.into());
            },
        }
    }

    info!("created {count} nodes");
    Ok(count)
}
