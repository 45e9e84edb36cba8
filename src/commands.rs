//! Implementations of the various deploy scripts

use ethers::{types::Address, utils::keccak256};
use tracing::info;

use crate::{
    artifacts::ArtifactStore,
    chain::{ChainClient, RelayerClient},
    cli::{DeployArgs, DeployViaRelayerArgs},
    errors::ScriptError,
    record::RecordSink,
    runner::{DeploymentRequest, DeploymentRunner},
};

/// Deploys a contract directly from its build artifact
pub async fn deploy_contract<C, A, S>(
    args: DeployArgs,
    network: &str,
    runner: &DeploymentRunner<C, A, S>,
) -> Result<(), ScriptError>
where
    C: ChainClient,
    A: ArtifactStore,
    S: RecordSink,
{
    let request = DeploymentRequest {
        contract: args.contract,
        constructor_args: args.constructor_args,
        network: network.to_string(),
    };

    runner.run(&request).await.map(|_| ())
}

/// Deploys a token contract through an already-deployed relayer.
///
/// The relayer sponsors the deployment, so the token lands at a
/// salt-determined address rather than one derived from the deployer nonce.
pub async fn deploy_via_relayer<C, A, S>(
    args: DeployViaRelayerArgs,
    chain: &C,
    artifacts: &A,
    sink: &S,
) -> Result<(), ScriptError>
where
    C: ChainClient + RelayerClient,
    A: ArtifactStore,
    S: RecordSink,
{
    let relayer: Address = args
        .relayer
        .parse()
        .map_err(|e| ScriptError::CalldataConstruction(format!("relayer address: {}", e)))?;

    chain.signer().await?;
    let artifact = artifacts.load(&args.contract)?;
    let salt = keccak256(args.salt.as_bytes());

    info!(
        contract = %args.contract,
        relayer = ?relayer,
        salt = %args.salt,
        "deploying through relayer"
    );

    let result = chain
        .deploy_via_relayer(relayer, artifact.bytecode, salt)
        .await?;

    info!(
        address = ?result.contract_address,
        tx_hash = ?result.transaction_hash,
        "token deployed"
    );

    sink.persist(&result)?;
    Ok(())
}
