// Lifecycle management for synthetic ("fake") node fixtures.
//
// Fixtures are built from a template (either copied from a real node or a built-in default),
// tagged so that they can never be mistaken for schedulable capacity, and then created one at a
// time.  Every fixture carries the `app=kubetest` label, and that label is the _only_ record of
// what this tool created: flushing is a single server-side delete-collection call on that
// selector, so it works from any process, long after the creating process has exited.
mod creator;
mod reclaimer;
mod tagging;
mod template;

use clockabilly::prelude::*;
pub use creator::create_many;
use rand::SeedableRng;
use rand::rngs::StdRng;
pub use reclaimer::flush_fixtures;
pub use tagging::{
    fixture_label_selector,
    generate_name,
    tag,
};
pub use template::{
    build_template,
    default_template,
    template_from_source,
};

use crate::errors::*;
use crate::prelude::*;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("source node {name} not found or inaccessible")]
    SourceNotFound {
        name: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("failed to create node {index} of {count} ({created} created before the failure)")]
    CreateFailed {
        index: usize,
        count: usize,
        created: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to flush nodes matching {selector}")]
    FlushFailed {
        selector: String,
        #[source]
        source: anyhow::Error,
    },
}

impl FixtureError {
    pub fn created(&self) -> usize {
        match self {
            FixtureError::CreateFailed { created, .. } => *created,
            _ => 0,
        }
    }
}

// Returns the number of nodes created.  On failure, nothing is rolled back; the error (a
// FixtureError) records how many nodes made it into the cluster before things went wrong.
pub async fn create_fixtures<C>(client: &C, count: usize, source: Option<&str>) -> anyhow::Result<usize>
where
    C: NodeClient + ?Sized,
{
    let now = UtcClock.now();
    let mut template = build_template(client, source, now).await?;
    tag(&mut template, now);

    let mut rng = StdRng::from_os_rng();
    create_many(client, count, &template, &mut rng).await
}

#[cfg(test)]
mod tests;
