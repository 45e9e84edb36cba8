//! Definitions of CLI arguments and commands for the deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ethers::providers::Middleware;

use crate::{
    artifacts::DirArtifactStore,
    chain::EthersChain,
    commands::{deploy_contract, deploy_via_relayer},
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_CONFIRMATION_TIMEOUT_SECS, DEFAULT_RECORD_PATH, NUM_DEPLOY_CONFIRMATIONS},
    errors::ScriptError,
    record::FileRecordSink,
    runner::DeploymentRunner,
};

/// Deployment scripts for the Cryptonout contracts on SKALE
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    // TODO: Better key management
    #[arg(short, long, env = "DEPLOYER_KEY", hide_env_values = true)]
    pub priv_key: String,

    /// Network RPC URL
    #[arg(short, long, env = "SKALE_RPC")]
    pub rpc_url: String,

    /// Directory containing the Hardhat build artifacts
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// Path of the deployment record file, overwritten on each run
    #[arg(long, default_value = DEFAULT_RECORD_PATH)]
    pub record_path: PathBuf,

    /// Number of confirmations to wait for the deployment transaction
    #[arg(long, default_value_t = NUM_DEPLOY_CONFIRMATIONS)]
    pub confirmations: usize,

    /// Bound on the confirmation wait, in seconds
    #[arg(long, default_value_t = DEFAULT_CONFIRMATION_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// The deploy script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy a contract directly from its build artifact
    Deploy(DeployArgs),
    /// Deploy a token through an already-deployed relayer contract
    DeployViaRelayer(DeployViaRelayerArgs),
}

/// Deploy a contract directly from its build artifact
#[derive(Args)]
pub struct DeployArgs {
    /// Name of the contract to deploy
    #[arg(short, long)]
    pub contract: String,

    /// Constructor arguments, in ABI order
    pub constructor_args: Vec<String>,
}

/// Deploy a token through an already-deployed relayer contract
#[derive(Args)]
pub struct DeployViaRelayerArgs {
    /// Address of the relayer contract, in hex
    #[arg(short = 'R', long)]
    pub relayer: String,

    /// Name of the token contract to deploy
    #[arg(short, long)]
    pub contract: String,

    /// Tag hashed into the salt of the relayer deployment
    #[arg(short, long)]
    pub salt: String,
}

impl Command {
    /// Runs the selected deploy script over the given collaborators
    pub async fn run<M: Middleware + 'static>(
        self,
        chain: EthersChain<M>,
        artifacts: DirArtifactStore,
        sink: FileRecordSink,
        network: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => {
                let runner = DeploymentRunner::new(chain, artifacts, sink);
                deploy_contract(args, network, &runner).await
            }
            Command::DeployViaRelayer(args) => {
                deploy_via_relayer(args, &chain, &artifacts, &sink).await
            }
        }
    }
}
