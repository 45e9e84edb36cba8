//! The provider abstraction over which deployments are submitted

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use ethers::{
    abi::Token,
    contract::ContractFactory,
    providers::Middleware,
    types::{Address, Bytes, U64},
};
use tokio::time::timeout;

use crate::{
    artifacts::ContractArtifact, errors::ScriptError, record::DeploymentResult,
    solidity::RelayerGeneContract,
};

/// A client capable of submitting contract-creation transactions and
/// awaiting their confirmation
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Resolves the deployer account configured on the client
    async fn signer(&self) -> Result<Address, ScriptError>;

    /// Submits a contract-creation transaction built from the given artifact
    /// and constructor arguments, and awaits its confirmation
    async fn deploy(
        &self,
        artifact: ContractArtifact,
        constructor_args: Vec<Token>,
    ) -> Result<DeploymentResult, ScriptError>;
}

/// A client capable of deploying a contract through an already-deployed
/// relayer contract (the SKALE sponsored-deployment pattern)
#[async_trait]
pub trait RelayerClient: Send + Sync {
    /// Calls `deploy(bytecode, salt)` on the relayer at the given address and
    /// awaits the receipt, returning the address the relayer deployed to
    async fn deploy_via_relayer(
        &self,
        relayer: Address,
        bytecode: Bytes,
        salt: [u8; 32],
    ) -> Result<DeploymentResult, ScriptError>;
}

/// A chain client backed by an `ethers` middleware stack
pub struct EthersChain<M> {
    /// The underlying RPC client
    client: Arc<M>,
    /// The number of confirmations to wait for
    confirmations: usize,
    /// The bound on the confirmation wait
    timeout: Duration,
}

impl<M> EthersChain<M> {
    /// Constructs a chain client over the given middleware
    pub fn new(client: Arc<M>, confirmations: usize, timeout: Duration) -> Self {
        Self {
            client,
            confirmations,
            timeout,
        }
    }
}

#[async_trait]
impl<M: Middleware + 'static> ChainClient for EthersChain<M> {
    async fn signer(&self) -> Result<Address, ScriptError> {
        self.client.default_sender().ok_or_else(|| {
            ScriptError::SignerUnavailable("client does not have a sender attached".to_string())
        })
    }

    async fn deploy(
        &self,
        artifact: ContractArtifact,
        constructor_args: Vec<Token>,
    ) -> Result<DeploymentResult, ScriptError> {
        let factory = ContractFactory::new(artifact.abi, artifact.bytecode, self.client.clone());

        let deployer = factory
            .deploy_tokens(constructor_args)
            .map_err(|e| ScriptError::CalldataConstruction(e.to_string()))?
            .confirmations(self.confirmations);

        let (contract, receipt) = timeout(self.timeout, deployer.send_with_receipt())
            .await
            .map_err(|_| {
                ScriptError::ConfirmationTimeout(format!(
                    "no confirmation within {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| ScriptError::TransactionRejected(e.to_string()))?;

        Ok(DeploymentResult {
            contract_address: contract.address(),
            transaction_hash: receipt.transaction_hash,
            block_confirmation: receipt.status == Some(U64::one()),
        })
    }
}

#[async_trait]
impl<M: Middleware + 'static> RelayerClient for EthersChain<M> {
    async fn deploy_via_relayer(
        &self,
        relayer: Address,
        bytecode: Bytes,
        salt: [u8; 32],
    ) -> Result<DeploymentResult, ScriptError> {
        let relayer = RelayerGeneContract::new(relayer, self.client.clone());

        let call = relayer.deploy(bytecode, salt);
        let pending = call
            .send()
            .await
            .map_err(|e| ScriptError::TransactionRejected(e.to_string()))?;

        let receipt = timeout(self.timeout, pending.confirmations(self.confirmations))
            .await
            .map_err(|_| {
                ScriptError::ConfirmationTimeout(format!(
                    "no confirmation within {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?
            .ok_or_else(|| {
                ScriptError::TransactionRejected("transaction dropped from the mempool".to_string())
            })?;

        if receipt.status != Some(U64::one()) {
            return Err(ScriptError::TransactionRejected(format!(
                "relayer deployment reverted in tx {:#x}",
                receipt.transaction_hash
            )));
        }

        // The relayer emits the deployed address as the source of its first log
        let deployed = receipt
            .logs
            .first()
            .map(|log| log.address)
            .ok_or_else(|| {
                ScriptError::ContractInteraction(
                    "relayer deployment produced no logs".to_string(),
                )
            })?;

        Ok(DeploymentResult {
            contract_address: deployed,
            transaction_hash: receipt.transaction_hash,
            block_confirmation: true,
        })
    }
}
