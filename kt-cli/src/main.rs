#![cfg_attr(coverage, feature(coverage_attribute))]
mod cluster;
mod create;
mod flush;

use clap::{
    Parser,
    Subcommand,
    crate_version,
};
use kt_core::logging;
use kt_core::prelude::*;

#[derive(Parser)]
#[command(
    about = "create and clean up fake nodes for load-testing kubernetes control planes",
    version,
    propagate_version = true
)]
struct KubetestRoot {
    #[command(subcommand)]
    subcommand: KubetestSubcommand,

    #[command(flatten)]
    cluster: cluster::Args,

    #[arg(short, long, default_value = "warn", global = true)]
    verbosity: String,
}

#[derive(Subcommand)]
enum KubetestSubcommand {
    #[command(about = "create fake resources")]
    Create(create::Args),

    #[command(about = "delete all resources created by kubetest")]
    Flush(flush::Args),

    #[command(about = "kubetest version")]
    Version,
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = KubetestRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    match &args.subcommand {
        KubetestSubcommand::Create(create_args) => {
            let client = cluster::make_client(&args.cluster).await?;
            create::cmd(create_args, client).await
        },
        KubetestSubcommand::Flush(flush_args) => {
            let client = cluster::make_client(&args.cluster).await?;
            flush::cmd(flush_args, client).await
        },
        KubetestSubcommand::Version => {
            println!("kubetest {}", crate_version!());
            Ok(())
        },
    }
}
