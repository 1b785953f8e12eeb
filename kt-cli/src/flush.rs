use kt_core::fixtures::flush_fixtures;
use kt_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub resource: Resource,
}

#[derive(clap::Subcommand)]
pub enum Resource {
    #[command(about = "delete all nodes created by kubetest", visible_alias = "nodes")]
    Node,
}

pub async fn cmd(args: &Args, client: kube::Client) -> EmptyResult {
    match args.resource {
        Resource::Node => {
            let node_api = kube::Api::<corev1::Node>::all(client);
            flush_fixtures(&node_api).await?;
            println!("Deleted all Nodes created by kubetest.");
        },
    }

    Ok(())
}
