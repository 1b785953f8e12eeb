use kt_core::fixtures::create_fixtures;
use kt_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[command(subcommand)]
    pub resource: Resource,

    #[arg(
        short,
        long,
        long_help = "number of objects to create",
        default_value = "1",
        global = true,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    #[arg(short, long, long_help = "name of an existing object to use as the template", global = true)]
    pub source: Option<String>,
}

#[derive(clap::Subcommand)]
pub enum Resource {
    #[command(about = "create fake nodes", visible_alias = "nodes")]
    Node,
}

pub async fn cmd(args: &Args, client: kube::Client) -> EmptyResult {
    match args.resource {
        Resource::Node => {
            let node_api = kube::Api::<corev1::Node>::all(client);
            let created = create_fixtures(&node_api, args.count as usize, args.source.as_deref()).await?;
            println!("Created {created} Nodes.");
        },
    }

    Ok(())
}
