use std::time::Duration;

use clap::Parser;
use deploy_scripts::{
    artifacts::DirArtifactStore, chain::EthersChain, cli::Cli, errors::ScriptError,
    record::FileRecordSink, utils::setup_client,
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        priv_key,
        rpc_url,
        artifacts_dir,
        record_path,
        confirmations,
        timeout_secs,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let client = setup_client(&priv_key, &rpc_url).await?;
    let chain = EthersChain::new(client, confirmations, Duration::from_secs(timeout_secs));
    let artifacts = DirArtifactStore::new(artifacts_dir);
    let sink = FileRecordSink::new(record_path);

    command.run(chain, artifacts, sink, &rpc_url).await
}
