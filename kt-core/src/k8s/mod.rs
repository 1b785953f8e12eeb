mod client;
mod util;

pub use client::*;
pub use util::*;

use crate::errors::*;
use crate::prelude::*;

err_impl! {KubernetesError,
    #[error("only matchLabels selectors are supported: {0:?}")]
    UnsupportedLabelSelector(metav1::LabelSelector),
}

pub trait KubeResourceExt {
    fn matches(&self, sel: &metav1::LabelSelector) -> anyhow::Result<bool>;
}

#[cfg(test)]
pub mod tests;
