use std::path::PathBuf;

use kube::config::{
    KubeConfigOptions,
    Kubeconfig,
};

#[derive(clap::Args)]
pub struct Args {
    #[arg(long, global = true, long_help = "path to the kubeconfig file to use for CLI requests")]
    pub kubeconfig: Option<PathBuf>,

    #[arg(long, global = true, long_help = "name of the kubeconfig context to use")]
    pub context: Option<String>,
}

impl Args {
    fn kubeconfig_options(&self) -> KubeConfigOptions {
        KubeConfigOptions { context: self.context.clone(), ..Default::default() }
    }
}

pub async fn make_client(args: &Args) -> anyhow::Result<kube::Client> {
    let config = load_config(args).await?;
    Ok(kube::Client::try_from(config)?)
}

// With no flags at all we defer to kube's usual inference ($KUBECONFIG, then ~/.kube/config, then
// the in-cluster service account)
async fn load_config(args: &Args) -> anyhow::Result<kube::Config> {
    let config = match (&args.kubeconfig, &args.context) {
        (Some(path), _) => {
            let kubeconfig = Kubeconfig::read_from(path)?;
            kube::Config::from_custom_kubeconfig(kubeconfig, &args.kubeconfig_options()).await?
        },
        (None, Some(_)) => kube::Config::from_kubeconfig(&args.kubeconfig_options()).await?,
        (None, None) => kube::Config::infer().await?,
    };
    Ok(config)
}
