use tracing::*;

use super::{
    FixtureError,
    fixture_label_selector,
};
use crate::k8s::format_label_selector;
use crate::prelude::*;

// A single delete-collection call; the apiserver figures out which nodes match.  Nothing matching
// is not an error, it just means zero nodes get deleted.
pub async fn flush_fixtures<C>(client: &C) -> anyhow::Result<usize>
where
    C: NodeClient + ?Sized,
{
    let sel = fixture_label_selector();
    let selector = format_label_selector(&sel)?;
    let deleted = client
        .delete_nodes(&sel)
        .await
        .map_err(|source| FixtureError::FlushFailed { selector, source })?;

    info!("deleted {deleted} nodes");
    Ok(deleted)
}
