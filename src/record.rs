//! The deployment result and its persisted record

use std::{fs, path::PathBuf};

use ethers::types::{Address, TxHash};

use crate::{
    constants::{RECORD_ADDRESS_LABEL, RECORD_TX_HASH_LABEL},
    errors::ScriptError,
};

/// The outcome of a confirmed contract deployment.
///
/// A value of this type exists only for a transaction that reached a
/// confirmed state; it is written once to the record sink and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeploymentResult {
    /// The address of the deployed contract
    pub contract_address: Address,
    /// The hash of the deployment transaction
    pub transaction_hash: TxHash,
    /// Whether the transaction was confirmed in a block
    pub block_confirmation: bool,
}

impl DeploymentResult {
    /// Renders the result in the flat-text record format
    pub fn to_record(&self) -> String {
        format!(
            "{}{:#x}\n{}{:#x}\n",
            RECORD_ADDRESS_LABEL, self.contract_address, RECORD_TX_HASH_LABEL, self.transaction_hash,
        )
    }
}

/// A sink for persisting deployment results
pub trait RecordSink {
    /// Persists the given result, replacing any previously persisted record
    fn persist(&self, result: &DeploymentResult) -> Result<(), ScriptError>;
}

/// A record sink that overwrites a flat text file wholesale on each run.
///
/// Concurrent runs against the same path are not coordinated; the last
/// writer wins.
pub struct FileRecordSink {
    /// The path of the record file
    path: PathBuf,
}

impl FileRecordSink {
    /// Constructs a sink writing to the given path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl RecordSink for FileRecordSink {
    fn persist(&self, result: &DeploymentResult) -> Result<(), ScriptError> {
        fs::write(&self.path, result.to_record())
            .map_err(|e| ScriptError::RecordPersistence(e.to_string()))
    }
}
