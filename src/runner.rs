//! The deployment runner: resolve a signer, deploy, confirm, persist

use ethers::abi::{
    token::{LenientTokenizer, Tokenizer},
    Abi, ParamType, Token,
};
use tracing::info;

use crate::{
    artifacts::ArtifactStore,
    chain::ChainClient,
    errors::ScriptError,
    record::{DeploymentResult, RecordSink},
};

/// The parameters of a single deployment, built once per invocation
/// from the CLI arguments
#[derive(Clone, Debug)]
pub struct DeploymentRequest {
    /// The name of the contract to deploy
    pub contract: String,
    /// The constructor arguments, unparsed, in ABI order
    pub constructor_args: Vec<String>,
    /// The network the deployment targets, for logging
    pub network: String,
}

/// Drives a single deployment end to end over injected collaborators.
///
/// Every failure is terminal for the invocation; nothing is retried. A
/// result is produced, and persisted, only for a confirmed transaction.
pub struct DeploymentRunner<C, A, S> {
    /// The chain client transactions are submitted through
    chain: C,
    /// The store compiled artifacts are resolved from
    artifacts: A,
    /// The sink the deployment record is written to
    sink: S,
}

impl<C: ChainClient, A: ArtifactStore, S: RecordSink> DeploymentRunner<C, A, S> {
    /// Constructs a runner over the given collaborators
    pub fn new(chain: C, artifacts: A, sink: S) -> Self {
        Self {
            chain,
            artifacts,
            sink,
        }
    }

    /// Runs the deployment described by the given request.
    ///
    /// The signer and artifact are resolved before anything is submitted to
    /// the chain. Persistence failures do not roll back the deployment, which
    /// is already irreversible by the time the record is written.
    pub async fn run(
        &self,
        request: &DeploymentRequest,
    ) -> Result<DeploymentResult, ScriptError> {
        let deployer = self.chain.signer().await?;
        let artifact = self.artifacts.load(&request.contract)?;
        let constructor_args = tokenize_constructor_args(&artifact.abi, &request.constructor_args)?;

        info!(
            contract = %request.contract,
            network = %request.network,
            deployer = ?deployer,
            "submitting deployment transaction"
        );

        let result = self.chain.deploy(artifact, constructor_args).await?;

        info!(
            address = ?result.contract_address,
            tx_hash = ?result.transaction_hash,
            "contract deployed"
        );

        self.sink.persist(&result)?;
        Ok(result)
    }
}

/// Parses the raw constructor argument strings against the ABI constructor
/// inputs. A contract without a constructor takes no arguments.
fn tokenize_constructor_args(abi: &Abi, raw: &[String]) -> Result<Vec<Token>, ScriptError> {
    let params = abi
        .constructor()
        .map(|c| c.inputs.clone())
        .unwrap_or_default();

    if params.len() != raw.len() {
        return Err(ScriptError::CalldataConstruction(format!(
            "constructor takes {} argument(s), {} given",
            params.len(),
            raw.len()
        )));
    }

    params
        .iter()
        .zip(raw.iter())
        .map(|(param, value)| {
            // The tokenizer expects unprefixed hex for these types
            let value = if matches!(
                param.kind,
                ParamType::Address | ParamType::Bytes | ParamType::FixedBytes(_)
            ) {
                value.strip_prefix("0x").unwrap_or(value)
            } else {
                value.as_str()
            };

            LenientTokenizer::tokenize(&param.kind, value).map_err(|e| {
                ScriptError::CalldataConstruction(format!("argument `{}`: {}", param.name, e))
            })
        })
        .collect()
}
